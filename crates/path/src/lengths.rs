//! Per-segment arc lengths.

use crate::geom::{CubicBezierSegment, LineSegment};
use crate::math::{Point, Vector};
use crate::{PathError, Segment};

/// The length of each segment of a path, in the same order as the segments.
///
/// The table is built incrementally: `extend` only measures the segments that were
/// appended since the previous call. It keeps track of the current point and of the
/// start of the current sub-path so that it can resume where it stopped.
///
/// Lengths are:
///
/// - zero for `MoveTo`,
/// - the euclidean distance for `LineTo`,
/// - the sum of `curve_steps` chords for `CurveTo`,
/// - the distance back to the start of the sub-path for `ClosePath`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LengthTable {
    lengths: Vec<f64>,
    total: f64,
    current: Point,
    subpath_start: Point,
}

impl LengthTable {
    pub fn new() -> Self {
        LengthTable::default()
    }

    /// Number of measured segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Length of the segment at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.lengths.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.lengths
    }

    /// Sum of all measured lengths.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total
    }

    pub(crate) fn clear(&mut self) {
        self.lengths.clear();
        self.total = 0.0;
        self.current = Point::zero();
        self.subpath_start = Point::zero();
    }

    /// Moves the tracked points along with a translated path.
    pub(crate) fn translate(&mut self, v: Vector) {
        self.current += v;
        self.subpath_start += v;
    }

    /// Measures `segments[self.len()..]`.
    ///
    /// If storage cannot be reserved the table is left untouched.
    pub(crate) fn extend(&mut self, segments: &[Segment], curve_steps: u32) -> Result<(), PathError> {
        let start = self.lengths.len();
        if start > segments.len() {
            // The path shrank underneath us, start over.
            self.clear();
            return self.extend(segments, curve_steps);
        }

        let new_segments = &segments[start..];
        self.lengths.try_reserve(new_segments.len())?;

        for segment in new_segments {
            let length = self.measure(segment, curve_steps);
            self.lengths.push(length);
            self.total += length;
        }

        Ok(())
    }

    fn measure(&mut self, segment: &Segment, curve_steps: u32) -> f64 {
        match *segment {
            Segment::MoveTo(to) => {
                self.current = to;
                self.subpath_start = to;
                0.0
            }
            Segment::LineTo(to) => {
                let length = LineSegment {
                    from: self.current,
                    to,
                }
                .length();
                self.current = to;
                length
            }
            Segment::CurveTo(ctrl1, ctrl2, to) => {
                let curve = CubicBezierSegment {
                    from: self.current,
                    ctrl1,
                    ctrl2,
                    to,
                };
                self.current = to;
                curve.approximate_length(curve_steps)
            }
            Segment::ClosePath => {
                let length = LineSegment {
                    from: self.current,
                    to: self.subpath_start,
                }
                .length();
                self.current = self.subpath_start;
                length
            }
        }
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn incremental_measure() {
    let mut segments = vec![
        Segment::MoveTo(point(0.0, 0.0)),
        Segment::LineTo(point(3.0, 4.0)),
    ];

    let mut table = LengthTable::new();
    table.extend(&segments, 100).unwrap();
    assert_eq!(table.as_slice(), &[0.0, 5.0]);
    assert_eq!(table.total_length(), 5.0);

    segments.push(Segment::LineTo(point(3.0, 0.0)));
    segments.push(Segment::ClosePath);
    segments.push(Segment::MoveTo(point(0.0, 0.0)));
    table.extend(&segments, 100).unwrap();
    assert_eq!(table.as_slice(), &[0.0, 5.0, 4.0, 3.0, 0.0]);
    assert_eq!(table.total_length(), 12.0);

    // Nothing new to measure.
    table.extend(&segments, 100).unwrap();
    assert_eq!(table.len(), 5);
}

#[test]
fn curve_lengths() {
    let segments = [
        Segment::MoveTo(point(0.0, 0.0)),
        Segment::CurveTo(point(1.0, 0.0), point(2.0, 0.0), point(3.0, 0.0)),
    ];

    let mut table = LengthTable::new();
    table.extend(&segments, 100).unwrap();
    assert!((table.get(1).unwrap() - 3.0).abs() < 1e-9);
    assert_eq!(table.get(2), None);
}

#[test]
fn shrinking_input_restarts() {
    let segments = [
        Segment::MoveTo(point(0.0, 0.0)),
        Segment::LineTo(point(0.0, 2.0)),
    ];

    let mut table = LengthTable::new();
    table.extend(&segments, 100).unwrap();
    table.extend(&segments[..1], 100).unwrap();
    assert_eq!(table.as_slice(), &[0.0]);
    assert_eq!(table.total_length(), 0.0);
}
