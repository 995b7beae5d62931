//! Writes paths back in the SVG path syntax.

use std::fmt;

use glide_path::math::Point;
use glide_path::{Path, Segment};

/// Displays the segments of a path using the SVG path syntax.
///
/// The `MoveTo` that a path inserts after each `ClosePath` is left out since
/// parsing the `Z` command adds it back.
///
/// No effort is put into making the output compact.
pub struct SvgPathData<'l> {
    segments: &'l [Segment],
}

impl<'l> SvgPathData<'l> {
    pub fn new(path: &'l Path) -> Self {
        SvgPathData {
            segments: path.segments(),
        }
    }
}

impl<'l> fmt::Display for SvgPathData<'l> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " {} {}", point.x, point.y)
        }

        let mut subpath_start = None;
        let mut after_close = false;
        let mut first = true;

        for segment in self.segments {
            let synthetic_move =
                after_close && matches!(segment, Segment::MoveTo(to) if subpath_start == Some(*to));
            after_close = false;
            if synthetic_move {
                continue;
            }

            if !first {
                write!(formatter, " ")?;
            }
            first = false;

            match *segment {
                Segment::MoveTo(to) => {
                    subpath_start = Some(to);
                    write!(formatter, "M")?;
                    write_point(formatter, to)?;
                }
                Segment::LineTo(to) => {
                    write!(formatter, "L")?;
                    write_point(formatter, to)?;
                }
                Segment::CurveTo(ctrl1, ctrl2, to) => {
                    write!(formatter, "C")?;
                    write_point(formatter, ctrl1)?;
                    write_point(formatter, ctrl2)?;
                    write_point(formatter, to)?;
                }
                Segment::ClosePath => {
                    after_close = true;
                    write!(formatter, "Z")?;
                }
            }
        }

        Ok(())
    }
}

/// Serializes the path using the SVG path syntax.
pub fn to_svg_string(path: &Path) -> String {
    SvgPathData::new(path).to_string()
}

#[cfg(test)]
use crate::parser::build_path;

#[test]
fn serialize_square() {
    let path = build_path("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(to_svg_string(&path), "M 0 0 L 10 0 L 10 10 Z");
}

#[test]
fn round_trip() {
    let src = "M 0.5 -1 C 1 2 3 4 5 6 Z M 0.5 -1 L 3 3 Z L 7 7";
    let path = build_path(src).unwrap();
    let serialized = to_svg_string(&path);
    assert_eq!(serialized, src);

    let reparsed = build_path(&serialized).unwrap();
    assert_eq!(reparsed.segments(), path.segments());
}

#[test]
fn empty_path() {
    assert_eq!(to_svg_string(&glide_path::Path::new()), "");
}
