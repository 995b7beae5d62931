use crate::geom::arrayvec::ArrayVec;
use crate::geom::traits::Transformation;
use crate::math::Point;

/// One instruction of a path.
///
/// Every segment except `ClosePath` carries the points it adds to the path. The
/// starting point of a segment is the end point of the previous one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Segment {
    /// Start a new sub-path at the given point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic bézier curve from the current point: two control points and the end point.
    CurveTo(Point, Point, Point),
    /// Straight line back to the start of the sub-path.
    ///
    /// A path always follows a `ClosePath` with a `MoveTo` to the start of the
    /// sub-path it closed.
    ClosePath,
}

impl Segment {
    /// The number of slots this segment occupies in the flat segment store: one for
    /// the header plus one per point.
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            Segment::MoveTo(..) | Segment::LineTo(..) => 2,
            Segment::CurveTo(..) => 4,
            Segment::ClosePath => 1,
        }
    }

    /// All points of the segment, control points included.
    pub fn points(&self) -> ArrayVec<Point, 3> {
        let mut points = ArrayVec::new();
        match *self {
            Segment::MoveTo(to) | Segment::LineTo(to) => points.push(to),
            Segment::CurveTo(ctrl1, ctrl2, to) => {
                points.push(ctrl1);
                points.push(ctrl2);
                points.push(to);
            }
            Segment::ClosePath => {}
        }

        points
    }

    /// The point this segment ends on, if it carries one.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo(to) | Segment::LineTo(to) | Segment::CurveTo(_, _, to) => Some(to),
            Segment::ClosePath => None,
        }
    }

    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self, Segment::CurveTo(..))
    }

    /// Returns a copy of this segment with `f` applied to each of its points.
    pub fn map_points<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Point) -> Point,
    {
        match *self {
            Segment::MoveTo(to) => Segment::MoveTo(f(to)),
            Segment::LineTo(to) => Segment::LineTo(f(to)),
            Segment::CurveTo(ctrl1, ctrl2, to) => Segment::CurveTo(f(ctrl1), f(ctrl2), f(to)),
            Segment::ClosePath => Segment::ClosePath,
        }
    }

    /// Applies the transform to this segment and returns the results.
    #[inline]
    pub fn transformed<T: Transformation>(&self, transform: &T) -> Self {
        self.map_points(|p| transform.transform_point(p))
    }
}

#[test]
fn segment_widths() {
    use crate::math::point;

    let p = point(1.0, 2.0);
    assert_eq!(Segment::MoveTo(p).width(), 2);
    assert_eq!(Segment::LineTo(p).width(), 2);
    assert_eq!(Segment::CurveTo(p, p, p).width(), 4);
    assert_eq!(Segment::ClosePath.width(), 1);

    assert_eq!(Segment::ClosePath.points().len(), 0);
    assert_eq!(Segment::ClosePath.end_point(), None);
    assert_eq!(
        Segment::CurveTo(point(0.0, 0.0), point(1.0, 1.0), p).points().as_slice(),
        &[point(0.0, 0.0), point(1.0, 1.0), p]
    );
    assert_eq!(Segment::CurveTo(point(0.0, 0.0), point(1.0, 1.0), p).end_point(), Some(p));
}
