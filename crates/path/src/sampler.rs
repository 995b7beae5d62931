//! Arc-length queries: position and tangent at a distance along a path, and the
//! distance along the path that comes closest to a point.
//!
//! Queries walk the length table with a [`Cursor`]. Consecutive queries with
//! increasing offsets resume from where the previous one stopped, so animating an
//! object along a path costs roughly one segment per frame instead of a full scan.
//!
//! ## Example
//!
//! ```
//! use glide_path::{Path, Sampler, math::point};
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0)).unwrap();
//! path.line_to(point(10.0, 0.0)).unwrap();
//! path.line_to(point(10.0, 10.0)).unwrap();
//!
//! let mut sampler = Sampler::new(&path).unwrap();
//! let sample = sampler.position_at(15.0).unwrap();
//! assert_eq!(sample.position(), point(10.0, 5.0));
//!
//! // A second traversal of the same path does not disturb the first one.
//! let mut other = Sampler::new(&path).unwrap();
//! assert_eq!(other.progress_at(0.0, 20.0, point(4.0, -3.0)), 4.0);
//! ```

use std::borrow::Cow;

use crate::geom::{CubicBezierSegment, LineSegment};
use crate::math::{vector, Angle, Point, Vector};
use crate::{LengthTable, Path, PathError, Segment};

/// Distance in curve parameter space between the target and the point used to
/// compute the tangent.
const TANGENT_DELTA: f64 = 0.01;

/// The result of sampling a path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathSample {
    position: Point,
    angle: Angle,
}

impl PathSample {
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Direction of the path at the sampled position, measured from the x axis.
    #[inline]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Unit vector pointing in the direction of the path.
    #[inline]
    pub fn tangent(&self) -> Vector {
        let (sin, cos) = self.angle.radians.sin_cos();
        vector(cos, sin)
    }
}

/// Where the previous query stopped.
///
/// `index` is the segment the last sample fell on and `consumed` the total length
/// of the segments before it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cursor {
    index: usize,
    consumed: f64,
    current: Point,
    last_move_to: Point,
}

impl Cursor {
    pub fn new() -> Self {
        Cursor::default()
    }

    /// Moves back to the start of the path.
    pub fn reset(&mut self) {
        *self = Cursor::default();
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn consumed(&self) -> f64 {
        self.consumed
    }

    fn advance(&mut self, segment: &Segment, length: f64) {
        match *segment {
            Segment::MoveTo(to) => {
                self.current = to;
                self.last_move_to = to;
            }
            Segment::LineTo(to) | Segment::CurveTo(_, _, to) => {
                self.current = to;
            }
            Segment::ClosePath => {
                self.current = self.last_move_to;
            }
        }
        self.consumed += length;
        self.index += 1;
    }

    /// Evaluates `segment`, starting at the cursor's current point, at `t`.
    fn sample_segment(&self, segment: &Segment, t: f64) -> Point {
        match *segment {
            Segment::MoveTo(to) => to,
            Segment::LineTo(to) => LineSegment {
                from: self.current,
                to,
            }
            .sample(t),
            Segment::CurveTo(ctrl1, ctrl2, to) => CubicBezierSegment {
                from: self.current,
                ctrl1,
                ctrl2,
                to,
            }
            .sample(t),
            Segment::ClosePath => LineSegment {
                from: self.current,
                to: self.last_move_to,
            }
            .sample(t),
        }
    }
}

/// Samples the position and tangent at `offset` along the path.
///
/// `lengths` must hold the length of every segment.
pub(crate) fn position_at(
    segments: &[Segment],
    lengths: &[f64],
    cursor: &mut Cursor,
    offset: f64,
) -> Option<PathSample> {
    debug_assert_eq!(segments.len(), lengths.len());

    if segments.is_empty() || !(offset >= 0.0) || !offset.is_finite() {
        return None;
    }

    if offset < cursor.consumed {
        log::debug!(
            "Sampling backward ({} < {}), restarting from the start of the path",
            offset,
            cursor.consumed
        );
        cursor.reset();
    }

    while cursor.index < segments.len() {
        let segment = &segments[cursor.index];
        let length = lengths[cursor.index];
        let remaining = offset - cursor.consumed;

        if length > 0.0 && remaining <= length {
            let t = remaining / length;
            let position = cursor.sample_segment(segment, t);

            let before = cursor.sample_segment(segment, (t - TANGENT_DELTA).max(0.0));
            let mut direction = position - before;
            if direction.square_length() == 0.0 {
                let after = cursor.sample_segment(segment, (t + TANGENT_DELTA).min(1.0));
                direction = after - position;
            }

            return Some(PathSample {
                position,
                angle: Angle::radians(direction.y.atan2(direction.x)),
            });
        }

        cursor.advance(segment, length);
    }

    None
}

/// Finds the offset between `start` and `end` whose position is closest to `target`.
///
/// Offsets are tested every `step` units. Ties keep the smallest offset. Returns
/// `-1.0` if none of the tested offsets is on the path.
pub(crate) fn progress_at(
    segments: &[Segment],
    lengths: &[f64],
    cursor: &mut Cursor,
    start: f64,
    end: f64,
    step: f64,
    target: Point,
) -> f64 {
    if !(step > 0.0) || !start.is_finite() || !end.is_finite() {
        return -1.0;
    }

    let mut best_offset = -1.0;
    let mut best_distance = f64::INFINITY;
    let mut i: u64 = 0;
    loop {
        let offset = start + i as f64 * step;
        if offset > end {
            break;
        }

        if let Some(sample) = position_at(segments, lengths, cursor, offset) {
            let distance = (sample.position - target).square_length();
            if distance < best_distance {
                best_distance = distance;
                best_offset = offset;
            }
        }

        i += 1;
    }

    best_offset
}

/// An independent traversal of a path.
///
/// Samplers borrow the path immutably and own their cursor, so several of them can
/// walk the same path at the same time.
pub struct Sampler<'l> {
    segments: &'l [Segment],
    lengths: Cow<'l, [f64]>,
    total_length: f64,
    progress_step: f64,
    cursor: Cursor,
}

impl<'l> Sampler<'l> {
    /// Creates a sampler for the path.
    ///
    /// Reuses the path's length table if it is up to date (see `Path::measure`),
    /// otherwise measures the path into a table owned by the sampler.
    pub fn new(path: &'l Path) -> Result<Self, PathError> {
        let (lengths, total_length) = match path.length_table() {
            Some(table) => (Cow::Borrowed(table.as_slice()), table.total_length()),
            None => {
                let mut table = LengthTable::new();
                table.extend(path.segments(), path.options().curve_steps)?;
                let total = table.total_length();
                (Cow::Owned(table.as_slice().to_vec()), total)
            }
        };

        Ok(Sampler {
            segments: path.segments(),
            lengths,
            total_length,
            progress_step: path.options().progress_step,
            cursor: Cursor::new(),
        })
    }

    /// Position and tangent at `offset` along the path.
    ///
    /// Returns `None` for empty paths and offsets outside of `[0, length]`.
    pub fn position_at(&mut self, offset: f64) -> Option<PathSample> {
        position_at(self.segments, &self.lengths, &mut self.cursor, offset)
    }

    /// Offset between `start` and `end` whose position is the closest to `target`,
    /// or `-1.0`.
    pub fn progress_at(&mut self, start: f64, end: f64, target: Point) -> f64 {
        progress_at(
            self.segments,
            &self.lengths,
            &mut self.cursor,
            start,
            end,
            self.progress_step,
            target,
        )
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.total_length
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn square() -> Path {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.line_to(point(10.0, 0.0)).unwrap();
    path.line_to(point(10.0, 10.0)).unwrap();
    path.line_to(point(0.0, 10.0)).unwrap();
    path.close_path().unwrap();
    path
}

#[test]
fn sample_lines() {
    let path = square();
    let mut sampler = Sampler::new(&path).unwrap();
    assert_eq!(sampler.length(), 40.0);

    let s = sampler.position_at(0.0).unwrap();
    assert_eq!(s.position(), point(0.0, 0.0));
    assert!(s.angle().radians.abs() < 1e-12);

    let s = sampler.position_at(5.0).unwrap();
    assert_eq!(s.position(), point(5.0, 0.0));

    let s = sampler.position_at(15.0).unwrap();
    assert_eq!(s.position(), point(10.0, 5.0));
    assert!((s.angle().radians - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((s.tangent() - vector(0.0, 1.0)).length() < 1e-12);

    // The closing edge.
    let s = sampler.position_at(35.0).unwrap();
    assert_eq!(s.position(), point(0.0, 5.0));
    assert!((s.tangent() - vector(0.0, -1.0)).length() < 1e-12);

    let s = sampler.position_at(40.0).unwrap();
    assert_eq!(s.position(), point(0.0, 0.0));

    assert!(sampler.position_at(40.5).is_none());
    assert!(sampler.position_at(-1.0).is_none());
    assert!(sampler.position_at(f64::NAN).is_none());
}

#[test]
fn tangent_at_start_of_segment() {
    // At t = 0 the point before the target is the target itself, the tangent is
    // computed toward the next point instead.
    let path = square();
    let mut sampler = Sampler::new(&path).unwrap();
    let s = sampler.position_at(0.0).unwrap();
    assert!((s.tangent() - vector(1.0, 0.0)).length() < 1e-12);
}

#[test]
fn cursor_moves_forward() {
    let path = square();
    let mut sampler = Sampler::new(&path).unwrap();

    let mut prev_index = 0;
    let mut offset = 0.0;
    while offset <= 40.0 {
        assert!(sampler.position_at(offset).is_some());
        assert!(sampler.cursor().index() >= prev_index);
        prev_index = sampler.cursor().index();
        offset += 0.5;
    }

    // Going backward rewinds.
    let s = sampler.position_at(1.0).unwrap();
    assert_eq!(s.position(), point(1.0, 0.0));
    assert_eq!(sampler.cursor().index(), 1);
    assert_eq!(sampler.cursor().consumed(), 0.0);
}

#[test]
fn sample_curve() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.curve_to(point(0.0, 10.0), point(10.0, 10.0), point(10.0, 0.0)).unwrap();

    let mut sampler = Sampler::new(&path).unwrap();
    let half = sampler.length() / 2.0;
    let s = sampler.position_at(half).unwrap();

    // The curve is symmetric, its middle is at the top.
    assert!((s.position().x - 5.0).abs() < 0.1);
    assert!((s.position().y - 7.5).abs() < 0.1);
    assert!(s.angle().radians.abs() < 0.05);

    let end = sampler.position_at(sampler.length()).unwrap();
    assert!((end.position() - point(10.0, 0.0)).length() < 1e-9);
}

#[test]
fn empty_path_queries() {
    let path = Path::new();
    let mut sampler = Sampler::new(&path).unwrap();
    assert!(sampler.position_at(0.0).is_none());
    assert_eq!(sampler.progress_at(0.0, 10.0, point(1.0, 1.0)), -1.0);

    // A lone move has no length.
    let mut path = Path::new();
    path.move_to(point(1.0, 1.0)).unwrap();
    let mut sampler = Sampler::new(&path).unwrap();
    assert!(sampler.position_at(0.0).is_none());
}

#[test]
fn nearest_offset() {
    let path = square();
    let mut sampler = Sampler::new(&path).unwrap();

    assert_eq!(sampler.progress_at(0.0, 40.0, point(5.0, 1.0)), 5.0);
    assert_eq!(sampler.progress_at(0.0, 40.0, point(11.0, 3.0)), 13.0);
    // Out of the searched range.
    assert_eq!(sampler.progress_at(20.0, 30.0, point(5.0, 1.0)), 25.0);
    // Ties keep the smallest offset: both (0, 0) ends of the square are equally close.
    assert_eq!(sampler.progress_at(0.0, 40.0, point(-1.0, -1.0)), 0.0);
    // Nothing on the path in that range.
    assert_eq!(sampler.progress_at(50.0, 60.0, point(5.0, 1.0)), -1.0);
    assert_eq!(sampler.progress_at(10.0, 0.0, point(5.0, 1.0)), -1.0);
}

#[test]
fn independent_samplers() {
    let path = square();
    let mut a = Sampler::new(&path).unwrap();
    let mut b = Sampler::new(&path).unwrap();

    a.position_at(35.0).unwrap();
    assert_eq!(a.cursor().index(), 4);
    assert_eq!(b.cursor().index(), 0);

    let s = b.position_at(2.0).unwrap();
    assert_eq!(s.position(), point(2.0, 0.0));
    assert_eq!(a.cursor().index(), 4);
}
