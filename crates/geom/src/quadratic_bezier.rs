use crate::{CubicBezierSegment, Point};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * 2.0 * one_t * t + self.to.to_vector() * t2
    }

    /// Elevate this curve to a cubic bézier.
    ///
    /// The control points are placed two thirds of the way from each endpoint
    /// towards the quadratic control point, which describes the exact same curve.
    pub fn to_cubic(&self) -> CubicBezierSegment {
        CubicBezierSegment {
            from: self.from,
            ctrl1: self.from + (self.ctrl - self.from) * (2.0 / 3.0),
            ctrl2: self.to + (self.ctrl - self.to) * (2.0 / 3.0),
            to: self.to,
        }
    }
}

#[test]
fn elevation_preserves_the_curve() {
    use crate::point;

    let q = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(3.0, 6.0),
        to: point(6.0, 0.0),
    };
    let c = q.to_cubic();

    assert_eq!(c.from, q.from);
    assert_eq!(c.to, q.to);
    assert!((c.ctrl1 - point(2.0, 4.0)).length() < 1e-12);
    assert!((c.ctrl2 - point(4.0, 4.0)).length() < 1e-12);

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((c.sample(t) - q.sample(t)).length() < 1e-9);
    }
}
