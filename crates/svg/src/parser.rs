//! A streaming parser for the SVG path mini-language.
//!
//! The parser is lenient: it never fails on malformed input. Characters that are
//! neither commands, numbers nor separators are skipped, and a command that ends
//! before receiving all of its arguments is emitted anyway, its missing coordinates
//! taken from the current point. The only possible error comes from the path itself
//! failing to grow.

use glide_path::geom::arrayvec::ArrayVec;
use glide_path::math::{point, vector, Point};
use glide_path::{ArcFlags, Path, PathError};
use log::{debug, trace};

/// Parameters for the path parser.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Optionally stop parsing when encountering a provided special character.
    pub stop_at: Option<char>,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions { stop_at: None };

    pub const fn with_stop_at(mut self, stop_at: char) -> Self {
        self.stop_at = Some(stop_at);
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of arguments each command consumes, by upper case command letter.
fn argument_count(cmd: char) -> usize {
    match cmd {
        'M' | 'L' | 'T' => 2,
        'C' => 6,
        'S' | 'Q' => 4,
        'H' | 'V' => 1,
        'A' => 7,
        _ => 0,
    }
}

fn is_command(c: char) -> bool {
    matches!(
        c,
        'M' | 'm'
            | 'L'
            | 'l'
            | 'C'
            | 'c'
            | 'S'
            | 's'
            | 'H'
            | 'h'
            | 'V'
            | 'v'
            | 'Q'
            | 'q'
            | 'T'
            | 't'
            | 'A'
            | 'a'
            | 'Z'
            | 'z'
    )
}

/// The number being scanned.
#[derive(Debug, Default)]
struct NumberBuffer {
    text: String,
    has_digits: bool,
    has_dot: bool,
    in_exponent: bool,
}

impl NumberBuffer {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn clear(&mut self) {
        self.text.clear();
        self.has_digits = false;
        self.has_dot = false;
        self.in_exponent = false;
    }

    fn last(&self) -> Option<char> {
        self.text.chars().last()
    }

    /// Parses the buffer, trimming an unfinished exponent or a dangling sign.
    fn take(&mut self) -> Option<f64> {
        if self.text.is_empty() {
            return None;
        }

        let text = self.text.as_str();
        let value = text.parse::<f64>().ok().or_else(|| {
            text.trim_end_matches(|c| matches!(c, 'e' | 'E' | '+' | '-'))
                .parse::<f64>()
                .ok()
        });

        if value.is_none() {
            debug!("Ignoring malformed number {:?}", self.text);
        }

        self.clear();

        value
    }
}

/// A context object for parsing path strings into a `Path`.
///
/// The parser can be reused to avoid reallocating its internal buffers.
///
/// # Syntax
///
/// The syntax is the one of the `d` attribute of SVG `<path>` elements. Upper case
/// commands use absolute coordinates and lower case commands relative ones:
///
/// | command | arguments | |
/// |---|---|---|
/// | `M` | x y | move to |
/// | `L` | x y | line to |
/// | `H` | x | horizontal line to |
/// | `V` | y | vertical line to |
/// | `C` | x1 y1 x2 y2 x y | cubic bézier curve |
/// | `S` | x2 y2 x y | smooth cubic bézier curve |
/// | `Q` | x1 y1 x y | quadratic bézier curve |
/// | `T` | x y | smooth quadratic bézier curve |
/// | `A` | rx ry x-rotation large-arc sweep x y | elliptic arc |
/// | `Z` | | close path |
///
/// Commands repeat as long as numbers follow them, except `M` which continues as
/// `L`. Numbers may be separated by whitespace, commas, signs, or a second decimal
/// point (`"0.6.5"` is `0.6` and `.5`). Numbers before the first command belong to
/// an implicit `M`, and so do numbers right after a `Z`.
#[derive(Debug, Default)]
pub struct PathParser {
    number: NumberBuffer,
    args: ArrayVec<f64, 7>,
    command: char,
    current: Point,
    subpath_start: Point,
    prev_cubic_ctrl: Option<Point>,
    prev_quadratic_ctrl: Option<Point>,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `src` and appends the resulting segments to `output`.
    ///
    /// Relative coordinates at the start of the string are relative to the
    /// current point of `output`, or to the origin if it is empty.
    pub fn parse(
        &mut self,
        options: &ParserOptions,
        src: &str,
        output: &mut Path,
    ) -> Result<(), PathError> {
        self.number.clear();
        self.args.clear();
        self.command = 'M';
        self.current = output.current_point().unwrap_or_else(Point::zero);
        self.subpath_start = self.current;
        self.prev_cubic_ctrl = None;
        self.prev_quadratic_ctrl = None;

        for (offset, c) in src.char_indices() {
            if options.stop_at == Some(c) {
                break;
            }

            self.scan(c, offset, output)?;
        }

        self.end_number(output)?;
        self.flush_pending(output)?;

        Ok(())
    }

    fn scan(&mut self, c: char, offset: usize, output: &mut Path) -> Result<(), PathError> {
        match c {
            '0'..='9' => {
                if self.number.is_empty() && self.expects_flag() {
                    // Arc flags are single digits and don't need separators.
                    return self.push_arg(if c == '0' { 0.0 } else { 1.0 }, output);
                }
                self.number.text.push(c);
                self.number.has_digits = true;
            }
            '-' | '+' => {
                let exponent_sign = matches!(self.number.last(), Some('e') | Some('E'));
                if !exponent_sign {
                    self.end_number(output)?;
                }
                self.number.text.push(c);
            }
            '.' => {
                if self.number.has_dot || self.number.in_exponent {
                    self.end_number(output)?;
                }
                self.number.text.push(c);
                self.number.has_dot = true;
            }
            'e' | 'E' if self.number.has_digits && !self.number.in_exponent => {
                self.number.text.push(c);
                self.number.in_exponent = true;
            }
            c if is_command(c) => {
                self.end_number(output)?;
                self.flush_pending(output)?;
                self.start_command(c, output)?;
            }
            c if c.is_whitespace() || c == ',' => {
                self.end_number(output)?;
            }
            _ => {
                trace!("Skipping unexpected character {:?} at byte {}", c, offset);
                self.end_number(output)?;
            }
        }

        Ok(())
    }

    fn expects_flag(&self) -> bool {
        self.command.to_ascii_uppercase() == 'A' && (self.args.len() == 3 || self.args.len() == 4)
    }

    fn end_number(&mut self, output: &mut Path) -> Result<(), PathError> {
        match self.number.take() {
            Some(value) => self.push_arg(value, output),
            None => Ok(()),
        }
    }

    /// Emits a command that did not receive all of its arguments.
    ///
    /// Missing coordinates are the ones of the current point, other missing
    /// arguments are zero.
    fn flush_pending(&mut self, output: &mut Path) -> Result<(), PathError> {
        if self.args.is_empty() {
            return Ok(());
        }

        let cmd = self.command.to_ascii_uppercase();
        debug!(
            "Completing {:?} command with arguments {:?}",
            self.command,
            &self.args[..]
        );
        for idx in self.args.len()..argument_count(cmd) {
            let value = self.slot_origin(cmd, idx);
            self.args.push(value);
        }

        self.emit(output)?;
        self.args.clear();

        Ok(())
    }

    /// The value relative arguments are offset by: the current point's coordinate
    /// for coordinates, zero for radii, rotation and flags.
    fn slot_origin(&self, cmd: char, idx: usize) -> f64 {
        match (cmd, idx) {
            ('H', _) => self.current.x,
            ('V', _) => self.current.y,
            ('A', 5) => self.current.x,
            ('A', 6) => self.current.y,
            ('A', _) => 0.0,
            (_, i) if i % 2 == 0 => self.current.x,
            _ => self.current.y,
        }
    }

    fn start_command(&mut self, cmd: char, output: &mut Path) -> Result<(), PathError> {
        self.command = cmd;
        if cmd == 'Z' || cmd == 'z' {
            self.emit(output)?;
            self.command = if cmd == 'z' { 'm' } else { 'M' };
        }

        Ok(())
    }

    fn push_arg(&mut self, mut value: f64, output: &mut Path) -> Result<(), PathError> {
        let cmd = self.command.to_ascii_uppercase();
        let count = argument_count(cmd);
        if count == 0 {
            return Ok(());
        }

        let idx = self.args.len();
        if self.command.is_ascii_lowercase() {
            value += self.slot_origin(cmd, idx);
        }

        self.args.push(value);

        if self.args.len() == count {
            self.emit(output)?;
            self.args.clear();
        }

        Ok(())
    }

    fn arg_point(&self, idx: usize) -> Point {
        point(self.args[idx], self.args[idx + 1])
    }

    fn smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Point {
        if let Some(prev_ctrl) = prev_ctrl {
            self.current + (self.current - prev_ctrl)
        } else {
            self.current
        }
    }

    /// Paths must start with a move, insert one at the current point if needed.
    fn ensure_started(&mut self, output: &mut Path) -> Result<(), PathError> {
        if output.current_point().is_none() {
            debug!("Edge before any move, moving to {:?} first", self.current);
            output.move_to(self.current)?;
            self.subpath_start = self.current;
        }

        Ok(())
    }

    fn emit(&mut self, output: &mut Path) -> Result<(), PathError> {
        let cmd = self.command.to_ascii_uppercase();
        if cmd != 'M' && cmd != 'Z' {
            self.ensure_started(output)?;
        }

        let mut cubic_ctrl = None;
        let mut quadratic_ctrl = None;

        match cmd {
            'M' => {
                let to = self.arg_point(0);
                output.move_to(to)?;
                self.current = to;
                self.subpath_start = to;
                self.command = if self.command == 'm' { 'l' } else { 'L' };
            }
            'L' => {
                let to = self.arg_point(0);
                output.line_to(to)?;
                self.current = to;
            }
            'H' => {
                let to = point(self.args[0], self.current.y);
                output.line_to(to)?;
                self.current = to;
            }
            'V' => {
                let to = point(self.current.x, self.args[0]);
                output.line_to(to)?;
                self.current = to;
            }
            'C' => {
                let ctrl2 = self.arg_point(2);
                let to = self.arg_point(4);
                output.curve_to(self.arg_point(0), ctrl2, to)?;
                cubic_ctrl = Some(ctrl2);
                self.current = to;
            }
            'S' => {
                let ctrl1 = self.smooth_ctrl(self.prev_cubic_ctrl);
                let ctrl2 = self.arg_point(0);
                let to = self.arg_point(2);
                output.curve_to(ctrl1, ctrl2, to)?;
                cubic_ctrl = Some(ctrl2);
                self.current = to;
            }
            'Q' => {
                let ctrl = self.arg_point(0);
                let to = self.arg_point(2);
                output.quad_to(ctrl, to)?;
                quadratic_ctrl = Some(ctrl);
                self.current = to;
            }
            'T' => {
                let ctrl = self.smooth_ctrl(self.prev_quadratic_ctrl);
                let to = self.arg_point(0);
                output.quad_to(ctrl, to)?;
                quadratic_ctrl = Some(ctrl);
                self.current = to;
            }
            'A' => {
                let to = self.arg_point(5);
                output.arc_to(
                    vector(self.args[0], self.args[1]),
                    self.args[2],
                    ArcFlags {
                        large_arc: self.args[3] != 0.0,
                        sweep: self.args[4] != 0.0,
                    },
                    to,
                )?;
                self.current = to;
            }
            'Z' => {
                output.close_path()?;
                self.current = output.current_point().unwrap_or(self.subpath_start);
                self.subpath_start = self.current;
            }
            _ => {}
        }

        self.prev_cubic_ctrl = cubic_ctrl;
        self.prev_quadratic_ctrl = quadratic_ctrl;

        Ok(())
    }
}

/// Parses `src` and appends the resulting segments to `output`.
pub fn parse_into(src: &str, output: &mut Path) -> Result<(), PathError> {
    PathParser::new().parse(&ParserOptions::DEFAULT, src, output)
}

/// Parses `src` into a new path.
pub fn build_path(src: &str) -> Result<Path, PathError> {
    let mut path = Path::new();
    parse_into(src, &mut path)?;

    Ok(path)
}

#[cfg(test)]
use glide_path::Segment;

#[cfg(test)]
fn segments(src: &str) -> Vec<Segment> {
    build_path(src).unwrap().segments().to_vec()
}

#[cfg(test)]
fn assert_close(a: &[Segment], b: &[Segment]) {
    assert_eq!(a.len(), b.len(), "{:?} != {:?}", a, b);
    for (sa, sb) in a.iter().zip(b.iter()) {
        assert_eq!(
            std::mem::discriminant(sa),
            std::mem::discriminant(sb),
            "{:?} != {:?}",
            a,
            b
        );
        for (pa, pb) in sa.points().iter().zip(sb.points().iter()) {
            assert!((*pa - *pb).length() < 1e-9, "{:?} != {:?}", a, b);
        }
    }
}

#[test]
fn empty() {
    assert!(segments("").is_empty());
    assert!(segments("  ,\n").is_empty());
}

#[test]
fn simple_square() {
    let path = build_path("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(
        path.segments(),
        &[
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(10.0, 0.0)),
            Segment::LineTo(point(10.0, 10.0)),
            Segment::ClosePath,
            Segment::MoveTo(point(0.0, 0.0)),
        ]
    );
    assert_eq!(path.extents().min, point(0.0, 0.0));
    assert_eq!(path.extents().max, point(10.0, 10.0));
}

#[test]
fn implicit_commands() {
    // Numbers before any command are a move, extra pairs after a move are lines.
    assert_eq!(
        segments("0 0 1 1 2,2"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(1.0, 1.0)),
            Segment::LineTo(point(2.0, 2.0)),
        ]
    );

    assert_eq!(
        segments("m 1 1 2 0 0 2"),
        vec![
            Segment::MoveTo(point(1.0, 1.0)),
            Segment::LineTo(point(3.0, 1.0)),
            Segment::LineTo(point(3.0, 3.0)),
        ]
    );

    // Numbers after a close start a new sub-path.
    assert_eq!(
        segments("M 0 0 L 1 0 Z 5 5 6 6"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(1.0, 0.0)),
            Segment::ClosePath,
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::MoveTo(point(5.0, 5.0)),
            Segment::LineTo(point(6.0, 6.0)),
        ]
    );
}

#[test]
fn relative_commands() {
    assert_eq!(
        segments("M 10 10 l 5 0 h 5 v -10 H 0 V 5 z l 1 1"),
        vec![
            Segment::MoveTo(point(10.0, 10.0)),
            Segment::LineTo(point(15.0, 10.0)),
            Segment::LineTo(point(20.0, 10.0)),
            Segment::LineTo(point(20.0, 0.0)),
            Segment::LineTo(point(0.0, 0.0)),
            Segment::LineTo(point(0.0, 5.0)),
            Segment::ClosePath,
            Segment::MoveTo(point(10.0, 10.0)),
            Segment::LineTo(point(11.0, 11.0)),
        ]
    );

    assert_eq!(
        segments("M 1 1 c 1 1 2 2 3 3 c 1 0 1 0 1 0"),
        vec![
            Segment::MoveTo(point(1.0, 1.0)),
            Segment::CurveTo(point(2.0, 2.0), point(3.0, 3.0), point(4.0, 4.0)),
            Segment::CurveTo(point(5.0, 4.0), point(5.0, 4.0), point(5.0, 4.0)),
        ]
    );
}

#[test]
fn numbers() {
    // Equivalent to "M 0.6 0.5".
    assert_eq!(segments("M 0.6.5"), vec![Segment::MoveTo(point(0.6, 0.5))]);
    assert_eq!(
        segments("M1.5.3-2-.5"),
        vec![
            Segment::MoveTo(point(1.5, 0.3)),
            Segment::LineTo(point(-2.0, -0.5)),
        ]
    );
    assert_eq!(
        segments("M 1e-2 -1E3 L+2e+1,3.e1"),
        vec![
            Segment::MoveTo(point(0.01, -1000.0)),
            Segment::LineTo(point(20.0, 30.0)),
        ]
    );
    // An unfinished exponent at the end of the string.
    assert_eq!(segments("M 1 2e"), vec![Segment::MoveTo(point(1.0, 2.0))]);
}

#[test]
fn garbage_is_skipped() {
    assert_eq!(
        segments("M 0 0 * L 1 # 0 ?"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(1.0, 0.0)),
        ]
    );
    assert!(segments("x y w").is_empty());
}

#[test]
fn incomplete_commands_use_the_current_point() {
    assert_eq!(
        segments("M 0 0 L 5"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(5.0, 0.0)),
        ]
    );
    assert_eq!(
        segments("M 0 0 L 1 1 2"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(1.0, 1.0)),
            Segment::LineTo(point(2.0, 1.0)),
        ]
    );
    assert_eq!(
        segments("M 0 0 C 1 2 3 4"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::CurveTo(point(1.0, 2.0), point(3.0, 4.0), point(0.0, 0.0)),
        ]
    );
    // Flushed by the next command letter.
    assert_eq!(
        segments("M 0 0 L 1 C 1 2 3 L 4 4 L 5"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(1.0, 0.0)),
            Segment::CurveTo(point(1.0, 2.0), point(3.0, 0.0), point(1.0, 0.0)),
            Segment::LineTo(point(4.0, 4.0)),
            Segment::LineTo(point(5.0, 4.0)),
        ]
    );
    // Relative commands get a zero offset.
    assert_eq!(
        segments("M 1 1 l 2 Z"),
        vec![
            Segment::MoveTo(point(1.0, 1.0)),
            Segment::LineTo(point(3.0, 1.0)),
            Segment::ClosePath,
            Segment::MoveTo(point(1.0, 1.0)),
        ]
    );
    // A command letter alone emits nothing.
    assert_eq!(segments("M 0 0 L"), vec![Segment::MoveTo(point(0.0, 0.0))]);
}

#[test]
fn smooth_curves() {
    assert_eq!(
        segments("M 0 0 C 0 1 1 1 1 0 S 2 -1 2 0"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::CurveTo(point(0.0, 1.0), point(1.0, 1.0), point(1.0, 0.0)),
            Segment::CurveTo(point(1.0, -1.0), point(2.0, -1.0), point(2.0, 0.0)),
        ]
    );

    // Without a previous cubic, the first control point is the current point.
    assert_eq!(
        segments("M 0 0 L 1 0 S 2 1 3 0"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(1.0, 0.0)),
            Segment::CurveTo(point(1.0, 0.0), point(2.0, 1.0), point(3.0, 0.0)),
        ]
    );

    // Q 3 6 6 0 T 12 0 is Q 3 6 6 0 Q 9 -6 12 0.
    let mut expected = Path::new();
    expected.move_to(point(0.0, 0.0)).unwrap();
    expected.quad_to(point(3.0, 6.0), point(6.0, 0.0)).unwrap();
    expected.quad_to(point(9.0, -6.0), point(12.0, 0.0)).unwrap();
    assert_close(&segments("M 0 0 Q 3 6 6 0 T 12 0"), expected.segments());
    assert_close(&segments("M 0 0 q 3 6 6 0 t 6 0"), expected.segments());
}

#[test]
fn arcs() {
    let mut expected = Path::new();
    expected.move_to(point(0.0, 0.0)).unwrap();
    expected
        .arc_to(
            vector(5.0, 5.0),
            0.0,
            ArcFlags {
                large_arc: false,
                sweep: true,
            },
            point(10.0, 0.0),
        )
        .unwrap();

    assert_close(&segments("M 0 0 A 5 5 0 0 1 10 0"), expected.segments());
    assert_close(&segments("M 0 0 a 5 5 0 0 1 10 0"), expected.segments());
    // Flags don't need separators.
    assert_close(&segments("M 0 0 a5,5 0 0110,0"), expected.segments());

    // Zero radius.
    assert_eq!(
        segments("M 0 0 A 0 5 0 0 1 10 0"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(10.0, 0.0)),
        ]
    );
}

#[test]
fn stop() {
    let options = ParserOptions::DEFAULT.with_stop_at('|');
    let mut parser = PathParser::new();

    let mut parse = |src: &str| {
        let mut path = Path::new();
        parser.parse(&options, src, &mut path).unwrap();
        path.len()
    };

    assert_eq!(parse("M 0 0 | xxxxxx"), 1);
    assert_eq!(parse("M 0 0| L 1 1"), 1);
    assert_eq!(parse("| xxxxxx"), 0);
    assert_eq!(parse("    | xxxxxx"), 0);
}

#[test]
fn edge_before_move() {
    assert_eq!(
        segments("L 1 1"),
        vec![
            Segment::MoveTo(point(0.0, 0.0)),
            Segment::LineTo(point(1.0, 1.0)),
        ]
    );
}

#[test]
fn append_to_existing_path() {
    let mut path = Path::new();
    path.move_to(point(5.0, 5.0)).unwrap();
    parse_into("l 1 1", &mut path).unwrap();
    assert_eq!(path.segments()[1], Segment::LineTo(point(6.0, 6.0)));
}
