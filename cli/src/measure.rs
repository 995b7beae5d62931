use std::io::Write;

use glide::path::Path;

use crate::commands::{CliError, NearestCmd, SampleCmd};

pub fn length(mut path: Path, output: &mut dyn Write) -> Result<(), CliError> {
    let length = path.total_length()?;
    writeln!(output, "{}", length)?;

    Ok(())
}

pub fn extents(path: &Path, output: &mut dyn Write) -> Result<(), CliError> {
    if !path.has_extents() {
        writeln!(output, "empty")?;
        return Ok(());
    }

    let b = path.extents();
    writeln!(output, "{} {} {} {}", b.min.x, b.min.y, b.max.x, b.max.y)?;

    Ok(())
}

pub fn sample(mut cmd: SampleCmd, output: &mut dyn Write) -> Result<(), CliError> {
    match cmd.path.position_at(cmd.offset)? {
        Some(sample) => {
            let p = sample.position();
            writeln!(output, "{} {} {}", p.x, p.y, sample.angle().radians)?;
        }
        None => {
            log::info!("Offset {} is not on the path", cmd.offset);
            writeln!(output, "none")?;
        }
    }

    Ok(())
}

pub fn nearest(mut cmd: NearestCmd, output: &mut dyn Write) -> Result<(), CliError> {
    let start = cmd.start.unwrap_or(0.0);
    let end = match cmd.end {
        Some(end) => end,
        None => cmd.path.total_length()?,
    };

    let offset = cmd.path.progress_at(start, end, cmd.target)?;
    writeln!(output, "{}", offset)?;

    Ok(())
}

#[cfg(test)]
fn output_of<F>(f: F) -> String
where
    F: FnOnce(&mut dyn Write) -> Result<(), CliError>,
{
    let mut output = Vec::new();
    f(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[cfg(test)]
use glide::{math::point, svg::build_path};

#[test]
fn length_and_extents() {
    let path = build_path("M 0 0 L 3 4 L 3 10").unwrap();
    assert_eq!(output_of(|out| length(path.clone(), out)), "11\n");
    assert_eq!(output_of(|out| extents(&path, out)), "0 0 3 10\n");
    assert_eq!(output_of(|out| extents(&Path::new(), out)), "empty\n");
}

#[test]
fn sample_offsets() {
    let path = build_path("M 0 0 L 10 0 L 10 10").unwrap();

    let cmd = SampleCmd {
        path: path.clone(),
        offset: 5.0,
    };
    assert_eq!(output_of(|out| sample(cmd, out)), "5 0 0\n");

    let cmd = SampleCmd { path, offset: 50.0 };
    assert_eq!(output_of(|out| sample(cmd, out)), "none\n");
}

#[test]
fn nearest_offsets() {
    let path = build_path("M 0 0 L 10 0 L 10 10").unwrap();

    let cmd = NearestCmd {
        path: path.clone(),
        target: point(12.0, 7.0),
        start: None,
        end: None,
    };
    assert_eq!(output_of(|out| nearest(cmd, out)), "17\n");

    let cmd = NearestCmd {
        path,
        target: point(12.0, 7.0),
        start: Some(0.0),
        end: Some(8.0),
    };
    assert_eq!(output_of(|out| nearest(cmd, out)), "8\n");
}
