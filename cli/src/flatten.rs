use std::io::Write;

use glide::path::PathOptions;
use glide::svg::SvgPathData;

use crate::commands::{CliError, FlattenCmd};

pub fn flatten(mut cmd: FlattenCmd, output: &mut dyn Write) -> Result<(), CliError> {
    if !(cmd.gap > 0.0) {
        return Err(CliError::InvalidValue {
            name: "gap",
            value: cmd.gap.to_string(),
        });
    }

    let options = *cmd.path.options();
    cmd.path.set_options(PathOptions {
        flatten_gap: cmd.gap,
        ..options
    });
    cmd.path.flatten()?;

    if cmd.count {
        let num_paths = cmd
            .path
            .segments()
            .windows(2)
            .filter(|pair| {
                // Moves that only follow a close don't start a visible sub-path.
                matches!(pair[1], glide::path::Segment::MoveTo(..))
                    && !matches!(pair[0], glide::path::Segment::ClosePath)
            })
            .count()
            + if cmd.path.is_empty() { 0 } else { 1 };

        writeln!(output, "segments: {}", cmd.path.len())?;
        writeln!(output, "paths: {}", num_paths)?;

        return Ok(());
    }

    writeln!(output, "{}", SvgPathData::new(&cmd.path))?;

    Ok(())
}

#[cfg(test)]
fn run(src: &str, gap: f64, count: bool) -> String {
    let cmd = FlattenCmd {
        path: glide::svg::build_path(src).unwrap(),
        gap,
        count,
    };
    let mut output = Vec::new();
    flatten(cmd, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn flatten_lines() {
    assert_eq!(run("M 0 0 L 1 0 L 1 1 Z", 3.0, false), "M 0 0 L 1 0 L 1 1 Z\n");
    assert_eq!(
        run("M 0 0 L 1 0 L 1 1 Z M 5 5 L 6 6", 3.0, true),
        "segments: 7\npaths: 2\n"
    );
}

#[test]
fn flatten_curve() {
    // The curve is 3 units long: ceil(3 / 1.1) lines.
    let out = run("M 0 0 C 1 0 2 0 3 0", 1.1, false);
    assert!(out.starts_with("M 0 0 L "));
    assert!(out.ends_with(" L 3 0\n"));
    assert_eq!(out.matches('L').count(), 3);
    assert!(!out.contains('C'));
}

#[test]
fn invalid_gap() {
    let cmd = FlattenCmd {
        path: glide::path::Path::new(),
        gap: 0.0,
        count: false,
    };
    let mut output = Vec::new();
    assert!(matches!(
        flatten(cmd, &mut output),
        Err(CliError::InvalidValue { name: "gap", .. })
    ));
}
