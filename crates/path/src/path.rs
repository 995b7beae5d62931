//! The path data structure.
//!

use log::{debug, trace};

use crate::geom::traits::Transformation;
use crate::geom::{Angle, ArcCurves, ArcFlags, CubicBezierSegment, QuadraticBezierSegment, SvgArc};
use crate::lengths::LengthTable;
use crate::math::*;
use crate::sampler::{self, Cursor, PathSample, Sampler};
use crate::{PathError, PathOptions, Segment};

/// A growable sequence of segments along with a few caches.
///
/// # Representation
///
/// Segments are stored in insertion order in a single vector. Alongside them the
/// path maintains:
///
/// - the extents: an axis-aligned box containing every point ever added, control
///   points included. The box only ever grows, until `clear` resets it.
/// - the current point and the index of the last `MoveTo`, which `close_path` uses
///   to synthesize a `MoveTo` back to the start of the closed sub-path.
/// - a lazily built table of segment lengths (see `measure`).
/// - a cursor that makes consecutive `position_at` calls with increasing offsets
///   cheap.
///
/// # Errors
///
/// Append operations reserve room for all the segments they add before writing any
/// of them. If the allocation fails they return `PathError::Memory` and leave the
/// path unchanged.
///
/// # Preconditions
///
/// A path must start with a `MoveTo`. Appending an edge to a path without a current
/// point panics in debug builds and starts the edge at the origin otherwise.
#[derive(Clone, Debug)]
pub struct Path {
    segments: Vec<Segment>,
    extents: Box2D,
    current: Option<Point>,
    last_move_to: Option<usize>,
    lengths: LengthTable,
    // Set when existing segments changed in a way that invalidates their lengths.
    dirty: bool,
    cursor: Cursor,
    options: PathOptions,
}

fn empty_extents() -> Box2D {
    Box2D::new(point(f64::INFINITY, f64::INFINITY), point(-f64::INFINITY, -f64::INFINITY))
}

fn widen(extents: &mut Box2D, p: Point) {
    extents.min = extents.min.min(p);
    extents.max = extents.max.max(p);
}

impl Path {
    /// Creates an empty path with the default options.
    pub fn new() -> Self {
        Path::with_options(PathOptions::DEFAULT)
    }

    pub fn with_options(options: PathOptions) -> Self {
        Path {
            segments: Vec::new(),
            extents: empty_extents(),
            current: None,
            last_move_to: None,
            lengths: LengthTable::new(),
            dirty: false,
            cursor: Cursor::new(),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &PathOptions {
        &self.options
    }

    /// Changes the options, invalidating the length table if the curve length
    /// precision changed.
    pub fn set_options(&mut self, options: PathOptions) {
        if options.curve_steps != self.options.curve_steps {
            self.invalidate_lengths();
        }
        self.options = options;
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of the widths of all segments.
    pub fn slot_count(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }

    /// The end point of the last segment that has one.
    #[inline]
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// The box containing every point of the path, control points included.
    ///
    /// An empty path has inverted infinite extents: `min` is `+∞` and `max` is `-∞`.
    #[inline]
    pub fn extents(&self) -> Box2D {
        self.extents
    }

    /// Whether at least one point was added since the path was created or cleared.
    #[inline]
    pub fn has_extents(&self) -> bool {
        self.extents.min.x <= self.extents.max.x
    }

    /// Whether the length table needs to be (re)built before arc-length queries.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.lengths.len() != self.segments.len()
    }

    /// Reserves room for at least `additional` more segments.
    pub fn reserve(&mut self, additional: usize) -> Result<(), PathError> {
        self.segments.try_reserve(additional)?;
        Ok(())
    }

    /// Starts a new sub-path.
    pub fn move_to(&mut self, to: Point) -> Result<(), PathError> {
        self.reserve(1)?;
        self.push(Segment::MoveTo(to));
        Ok(())
    }

    pub fn line_to(&mut self, to: Point) -> Result<(), PathError> {
        self.check_edge();
        self.reserve(1)?;
        self.push(Segment::LineTo(to));
        Ok(())
    }

    /// Adds a cubic bézier curve from the current point.
    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), PathError> {
        self.check_edge();
        self.reserve(1)?;
        self.push(Segment::CurveTo(ctrl1, ctrl2, to));
        Ok(())
    }

    /// Adds a quadratic bézier curve from the current point.
    ///
    /// Quadratic curves are stored as the equivalent cubic curve.
    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> Result<(), PathError> {
        let cubic = QuadraticBezierSegment {
            from: self.edge_start(),
            ctrl,
            to,
        }
        .to_cubic();

        self.curve_to(cubic.ctrl1, cubic.ctrl2, cubic.to)
    }

    /// Adds an elliptic arc from the current point, in the SVG notation.
    ///
    /// The arc is approximated with up to four cubic bézier curves, the last one
    /// ending exactly on `to`. An arc with a zero radius or identical endpoints is
    /// drawn as a line. An arc for which no ellipse can be found is dropped.
    pub fn arc_to(
        &mut self,
        radii: Vector,
        x_rotation_deg: f64,
        flags: ArcFlags,
        to: Point,
    ) -> Result<(), PathError> {
        let arc = SvgArc {
            from: self.edge_start(),
            to,
            radii,
            x_rotation: Angle::degrees(x_rotation_deg),
            flags,
        };

        match arc.to_cubic_beziers() {
            ArcCurves::Line(line) => {
                trace!("Degenerate arc {:?}, drawing a line instead", arc);
                self.line_to(line.to)
            }
            ArcCurves::Curves(curves) => {
                self.reserve(curves.len())?;
                for curve in &curves {
                    self.push(Segment::CurveTo(curve.ctrl1, curve.ctrl2, curve.to));
                }
                Ok(())
            }
            ArcCurves::Omit => {
                trace!("Dropping arc {:?}, no ellipse fits its parameters", arc);
                Ok(())
            }
        }
    }

    /// Closes the current sub-path.
    ///
    /// Appends a `ClosePath` followed by a `MoveTo` to the start of the sub-path,
    /// which becomes the current point. Without a previous `MoveTo` only the
    /// `ClosePath` is added.
    pub fn close_path(&mut self) -> Result<(), PathError> {
        self.reserve(2)?;
        let start = self.subpath_start();
        self.push(Segment::ClosePath);
        if let Some(start) = start {
            self.push(Segment::MoveTo(start));
        }
        Ok(())
    }

    /// Appends segments produced elsewhere, for example a font outline.
    ///
    /// Extents and the current point are updated as if each segment was added
    /// individually. A `MoveTo` back to the start of the sub-path is synthesized
    /// after each `ClosePath` that isn't already followed by a `MoveTo`.
    pub fn append_snapshot(&mut self, segments: &[Segment]) -> Result<(), PathError> {
        if matches!(segments.first(), Some(Segment::LineTo(..)) | Some(Segment::CurveTo(..))) {
            self.check_edge();
        }

        let closes = segments
            .iter()
            .filter(|s| matches!(s, Segment::ClosePath))
            .count();
        self.reserve(segments.len() + closes)?;

        for (i, segment) in segments.iter().enumerate() {
            if let Segment::ClosePath = segment {
                let start = self.subpath_start();
                self.push(Segment::ClosePath);
                let followed_by_move = matches!(segments.get(i + 1), Some(Segment::MoveTo(..)));
                if let (Some(start), false) = (start, followed_by_move) {
                    self.push(Segment::MoveTo(start));
                }
                continue;
            }

            self.push(*segment);
        }

        Ok(())
    }

    /// Removes all segments and resets the extents and caches.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.extents = empty_extents();
        self.current = None;
        self.last_move_to = None;
        self.lengths.clear();
        self.dirty = false;
        self.cursor.reset();
    }

    /// Moves every point of the path.
    ///
    /// Lengths don't change so the length table stays valid.
    pub fn translate(&mut self, by: Vector) {
        for segment in &mut self.segments {
            *segment = segment.map_points(|p| p + by);
        }

        if self.has_extents() {
            self.extents = self.extents.translate(by);
        }
        self.current = self.current.map(|p| p + by);
        self.lengths.translate(by);
        self.cursor.reset();
    }

    /// Scales every point of the path relative to the origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.transform(&Transform::scale(sx, sy));
    }

    /// Applies a transform to every point of the path, control points included.
    ///
    /// The extents become the box containing the four transformed corners of the
    /// previous extents.
    pub fn transform<T: Transformation>(&mut self, transform: &T) {
        for segment in &mut self.segments {
            *segment = segment.transformed(transform);
        }

        if self.has_extents() {
            let b = self.extents;
            let corners = [b.min, point(b.max.x, b.min.y), b.max, point(b.min.x, b.max.y)];
            let mut extents = empty_extents();
            for corner in &corners {
                widen(&mut extents, transform.transform_point(*corner));
            }
            self.extents = extents;
        }

        self.current = self.current.map(|p| transform.transform_point(p));
        self.invalidate_lengths();
    }

    /// Replaces each curve with line segments of roughly `options().flatten_gap` units.
    ///
    /// The extents are kept as they are: they already contain the control points,
    /// hence the curves. Paths without curves are left untouched.
    pub fn flatten(&mut self) -> Result<(), PathError> {
        if !self.segments.iter().any(Segment::is_curve) {
            return Ok(());
        }

        let (segments, last_move_to) = self.flattened_segments()?;
        self.segments = segments;
        self.last_move_to = last_move_to;
        self.invalidate_lengths();

        Ok(())
    }

    /// Returns a flattened copy of this path (see `flatten`).
    pub fn flattened(&self) -> Result<Path, PathError> {
        let (segments, last_move_to) = self.flattened_segments()?;

        Ok(Path {
            segments,
            extents: self.extents,
            current: self.current,
            last_move_to,
            lengths: LengthTable::new(),
            dirty: false,
            cursor: Cursor::new(),
            options: self.options,
        })
    }

    /// Measures the segments added since the previous call, or all of them if
    /// existing segments were modified.
    pub fn measure(&mut self) -> Result<&LengthTable, PathError> {
        if self.dirty {
            debug!("Rebuilding the length table of {} segments", self.segments.len());
            self.lengths.clear();
            self.dirty = false;
        }

        self.lengths.extend(&self.segments, self.options.curve_steps)?;

        Ok(&self.lengths)
    }

    /// The length table, if it is up to date.
    pub fn length_table(&self) -> Option<&LengthTable> {
        if self.is_dirty() {
            return None;
        }

        Some(&self.lengths)
    }

    pub fn total_length(&mut self) -> Result<f64, PathError> {
        Ok(self.measure()?.total_length())
    }

    /// Position and tangent at `offset` along the path.
    ///
    /// Uses a cursor owned by the path; see `Sampler` for independent traversals.
    /// Returns `Ok(None)` for empty paths and offsets outside of `[0, length]`.
    pub fn position_at(&mut self, offset: f64) -> Result<Option<PathSample>, PathError> {
        self.measure()?;

        Ok(sampler::position_at(
            &self.segments,
            self.lengths.as_slice(),
            &mut self.cursor,
            offset,
        ))
    }

    /// The offset between `start` and `end`, tested every `options().progress_step`
    /// units, whose position is the closest to `target`, or `-1.0` if none of them
    /// is on the path.
    pub fn progress_at(&mut self, start: f64, end: f64, target: Point) -> Result<f64, PathError> {
        self.measure()?;

        Ok(sampler::progress_at(
            &self.segments,
            self.lengths.as_slice(),
            &mut self.cursor,
            start,
            end,
            self.options.progress_step,
            target,
        ))
    }

    /// Creates an independent traversal of this path.
    pub fn sampler(&self) -> Result<Sampler<'_>, PathError> {
        Sampler::new(self)
    }

    fn push(&mut self, segment: Segment) {
        for p in segment.points() {
            widen(&mut self.extents, p);
        }
        if let Segment::MoveTo(..) = segment {
            self.last_move_to = Some(self.segments.len());
        }
        if let Some(p) = segment.end_point() {
            self.current = Some(p);
        }

        self.segments.push(segment);
    }

    fn subpath_start(&self) -> Option<Point> {
        self.last_move_to
            .and_then(|idx| self.segments.get(idx))
            .and_then(Segment::end_point)
    }

    #[inline(always)]
    fn check_edge(&self) {
        debug_assert!(self.current.is_some(), "edge operation is made before move_to()");
    }

    fn edge_start(&self) -> Point {
        self.check_edge();
        self.current.unwrap_or_else(Point::zero)
    }

    fn invalidate_lengths(&mut self) {
        self.dirty = true;
        self.cursor.reset();
    }

    fn flattened_segments(&self) -> Result<(Vec<Segment>, Option<usize>), PathError> {
        let gap = self.options.flatten_gap;
        let steps = self.options.curve_steps;

        let mut output = Vec::new();
        output.try_reserve(self.segments.len())?;

        let mut current = Point::zero();
        let mut last_move_to = None;
        for segment in &self.segments {
            match *segment {
                Segment::CurveTo(ctrl1, ctrl2, to) => {
                    let curve = CubicBezierSegment {
                        from: current,
                        ctrl1,
                        ctrl2,
                        to,
                    };
                    let count = curve.flattening_step_count(gap, steps);
                    output.try_reserve(count as usize)?;
                    curve.for_each_flattened(count, &mut |p| output.push(Segment::LineTo(p)));
                }
                Segment::MoveTo(..) => {
                    last_move_to = Some(output.len());
                    output.push(*segment);
                }
                _ => {
                    output.push(*segment);
                }
            }

            if let Some(p) = segment.end_point() {
                current = p;
            }
        }

        Ok((output, last_move_to))
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::new()
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l Segment;
    type IntoIter = core::slice::Iter<'l, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
fn triangle() -> Path {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.line_to(point(10.0, 0.0)).unwrap();
    path.line_to(point(10.0, 10.0)).unwrap();
    path.close_path().unwrap();
    path
}

#[test]
fn close_adds_a_move_to() {
    let path = triangle();

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
    assert_eq!(path.current_point(), Some(point(0.0, 0.0)));
    assert_eq!(path.extents(), Box2D::new(point(0.0, 0.0), point(10.0, 10.0)));
    assert_eq!(path.slot_count(), 2 + 2 + 2 + 1 + 2);
    assert_eq!(path.len(), 5);
}

#[test]
fn close_without_move_to() {
    let mut path = Path::new();
    path.close_path().unwrap();
    assert_eq!(path.segments(), &[Segment::ClosePath]);
    assert_eq!(path.current_point(), None);
    assert!(!path.has_extents());
}

#[test]
fn close_returns_to_latest_sub_path() {
    let mut path = triangle();
    path.move_to(point(20.0, 20.0)).unwrap();
    path.line_to(point(30.0, 20.0)).unwrap();
    path.close_path().unwrap();
    path.line_to(point(20.0, 30.0)).unwrap();
    path.close_path().unwrap();

    let n = path.len();
    assert_eq!(path.segments()[n - 1], Segment::MoveTo(point(20.0, 20.0)));
    assert_eq!(path.segments()[n - 4], Segment::MoveTo(point(20.0, 20.0)));
}

#[test]
fn extents_include_control_points() {
    let mut path = Path::new();
    assert!(!path.has_extents());
    assert_eq!(path.extents().min, point(f64::INFINITY, f64::INFINITY));
    assert_eq!(path.extents().max, point(-f64::INFINITY, -f64::INFINITY));

    path.move_to(point(0.0, 0.0)).unwrap();
    path.curve_to(point(0.0, 20.0), point(10.0, -5.0), point(10.0, 0.0))
        .unwrap();
    assert_eq!(path.extents(), Box2D::new(point(0.0, -5.0), point(10.0, 20.0)));

    // Appending never shrinks the extents.
    path.line_to(point(1.0, 1.0)).unwrap();
    assert_eq!(path.extents(), Box2D::new(point(0.0, -5.0), point(10.0, 20.0)));

    path.clear();
    assert!(path.is_empty());
    assert!(!path.has_extents());
    assert_eq!(path.current_point(), None);
}

#[test]
fn quadratic_curves_are_elevated() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.quad_to(point(3.0, 6.0), point(6.0, 0.0)).unwrap();

    match path.segments()[1] {
        Segment::CurveTo(ctrl1, ctrl2, to) => {
            assert!((ctrl1 - point(2.0, 4.0)).length() < 1e-12);
            assert!((ctrl2 - point(4.0, 4.0)).length() < 1e-12);
            assert_eq!(to, point(6.0, 0.0));
        }
        other => panic!("unexpected segment {:?}", other),
    }
}

#[test]
fn arcs() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.arc_to(
        vector(5.0, 5.0),
        0.0,
        ArcFlags {
            large_arc: false,
            sweep: true,
        },
        point(10.0, 0.0),
    )
    .unwrap();

    assert_eq!(path.len(), 3);
    assert!(path.segments()[1..].iter().all(Segment::is_curve));
    assert_eq!(path.current_point(), Some(point(10.0, 0.0)));
    assert_eq!(path.segments()[2].end_point(), Some(point(10.0, 0.0)));

    // Zero radius: a line.
    path.arc_to(vector(0.0, 5.0), 0.0, ArcFlags::default(), point(20.0, 0.0))
        .unwrap();
    assert_eq!(path.segments()[3], Segment::LineTo(point(20.0, 0.0)));

    // Same endpoints: a zero length line.
    path.arc_to(vector(5.0, 5.0), 0.0, ArcFlags::default(), point(20.0, 0.0))
        .unwrap();
    assert_eq!(path.segments()[4], Segment::LineTo(point(20.0, 0.0)));
    assert_eq!(path.len(), 5);
}

#[test]
fn append_snapshot() {
    let source = triangle();

    let mut path = Path::new();
    path.append_snapshot(source.segments()).unwrap();
    assert_eq!(path.segments(), source.segments());
    assert_eq!(path.extents(), source.extents());
    assert_eq!(path.current_point(), source.current_point());

    // An external outline without the synthetic move.
    let mut path = Path::new();
    path.append_snapshot(&[
        Segment::MoveTo(point(1.0, 1.0)),
        Segment::LineTo(point(2.0, 1.0)),
        Segment::LineTo(point(2.0, 2.0)),
        Segment::ClosePath,
    ])
    .unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.segments()[4], Segment::MoveTo(point(1.0, 1.0)));
    assert_eq!(path.current_point(), Some(point(1.0, 1.0)));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "edge operation is made before move_to()")]
fn snapshot_starting_with_an_edge() {
    let mut path = Path::new();
    let _ = path.append_snapshot(&[Segment::LineTo(point(1.0, 1.0))]);
}

#[test]
fn snapshot_continuing_a_sub_path() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.append_snapshot(&[Segment::LineTo(point(1.0, 1.0)), Segment::ClosePath])
        .unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.current_point(), Some(point(0.0, 0.0)));

    // A lone close is fine on an empty path, as with `close_path`.
    let mut path = Path::new();
    path.append_snapshot(&[Segment::ClosePath]).unwrap();
    assert_eq!(path.segments(), &[Segment::ClosePath]);
}

#[test]
fn transforms() {
    let mut path = Path::new();
    path.move_to(point(1.0, 2.0)).unwrap();
    path.curve_to(point(3.0, 4.0), point(5.0, 6.0), point(7.0, 8.0))
        .unwrap();
    path.close_path().unwrap();

    path.scale(2.0, 2.0);
    path.translate(vector(1.0, 1.0));

    let map = |p: Point| point(2.0 * p.x + 1.0, 2.0 * p.y + 1.0);
    assert_eq!(
        path.segments(),
        &[
            Segment::MoveTo(map(point(1.0, 2.0))),
            Segment::CurveTo(map(point(3.0, 4.0)), map(point(5.0, 6.0)), map(point(7.0, 8.0))),
            Segment::ClosePath,
            Segment::MoveTo(map(point(1.0, 2.0))),
        ]
    );
    assert_eq!(
        path.extents(),
        Box2D::new(map(point(1.0, 2.0)), map(point(7.0, 8.0)))
    );
    assert_eq!(path.current_point(), Some(map(point(1.0, 2.0))));

    // Flipping keeps min <= max.
    path.scale(-1.0, 1.0);
    assert_eq!(path.extents().min.x, -15.0);
    assert_eq!(path.extents().max.x, -3.0);
}

#[test]
fn transforms_and_length_table() {
    let mut path = triangle();
    let length = path.total_length().unwrap();
    assert!(!path.is_dirty());

    path.translate(vector(5.0, 5.0));
    assert!(!path.is_dirty());
    assert_eq!(path.length_table().unwrap().total_length(), length);

    path.line_to(point(5.0, 15.0)).unwrap();
    assert!(path.is_dirty());
    assert!(path.length_table().is_none());
    assert_eq!(path.total_length().unwrap(), length + 10.0);

    path.scale(2.0, 2.0);
    assert!(path.is_dirty());
    assert_eq!(path.total_length().unwrap(), 2.0 * (length + 10.0));
}

#[test]
fn flatten_curves() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0)).unwrap();
    path.curve_to(point(0.0, 10.0), point(10.0, 10.0), point(10.0, 0.0))
        .unwrap();
    path.close_path().unwrap();
    let extents = path.extents();

    let flat = path.flattened().unwrap();
    path.flatten().unwrap();
    assert_eq!(path.segments(), flat.segments());
    assert_eq!(path.extents(), extents);
    assert!(path.is_dirty());

    let segments = path.segments();
    assert!(!segments.iter().any(Segment::is_curve));
    // The curve is about 20 units long: ceil(20 / 3) lines.
    assert_eq!(segments.len(), 1 + 7 + 2);
    assert_eq!(segments[7], Segment::LineTo(point(10.0, 0.0)));
    assert_eq!(segments[8], Segment::ClosePath);
    assert_eq!(segments[9], Segment::MoveTo(point(0.0, 0.0)));

    // Closing again still goes back to the right place.
    path.line_to(point(5.0, -5.0)).unwrap();
    path.close_path().unwrap();
    assert_eq!(path.current_point(), Some(point(0.0, 0.0)));
}

#[test]
fn flatten_is_idempotent_on_flat_paths() {
    let mut path = triangle();
    let before = path.segments().to_vec();
    path.flatten().unwrap();
    assert_eq!(path.segments(), &before[..]);
    assert_eq!(path.flattened().unwrap().segments(), &before[..]);
}

#[test]
fn path_owned_cursor() {
    let mut path = triangle();
    let s = path.position_at(15.0).unwrap().unwrap();
    assert_eq!(s.position(), point(10.0, 5.0));

    assert_eq!(path.progress_at(0.0, 20.0, point(5.0, 1.0)).unwrap(), 5.0);
    assert!(path.position_at(1000.0).unwrap().is_none());

    let mut empty = Path::new();
    assert!(empty.position_at(0.0).unwrap().is_none());
    assert_eq!(empty.progress_at(0.0, 10.0, point(0.0, 0.0)).unwrap(), -1.0);
}

#[test]
fn options() {
    let mut path = Path::with_options(PathOptions::flatten_gap(1.0));
    assert_eq!(path.options().flatten_gap, 1.0);
    assert_eq!(path.options().curve_steps, PathOptions::DEFAULT_CURVE_STEPS);

    path.move_to(point(0.0, 0.0)).unwrap();
    path.line_to(point(1.0, 0.0)).unwrap();
    path.measure().unwrap();
    assert!(!path.is_dirty());

    path.set_options(PathOptions::DEFAULT.with_curve_steps(10));
    assert!(path.is_dirty());
}
