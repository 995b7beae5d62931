use crate::Point;

/// Default number of chords used to approximate the length of a cubic curve.
pub const DEFAULT_LENGTH_STEPS: u32 = 100;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * 3.0 * one_t2 * t
            + self.ctrl2.to_vector() * 3.0 * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Approximates the length of the curve by summing `steps` chords of equal
    /// parameter width.
    ///
    /// This is not an analytic solution, the error shrinks as `steps` grows.
    pub fn approximate_length(&self, steps: u32) -> f64 {
        let steps = steps.max(1);
        let step = 1.0 / steps as f64;

        let mut length = 0.0;
        let mut prev = self.from;
        for i in 1..=steps {
            let p = if i == steps {
                self.to
            } else {
                self.sample(i as f64 * step)
            };
            length += (p - prev).length();
            prev = p;
        }

        length
    }

    /// Number of line segments used to flatten this curve so that each of them is
    /// roughly `gap` long.
    ///
    /// Always at least one.
    pub fn flattening_step_count(&self, gap: f64, length_steps: u32) -> u32 {
        let length = self.approximate_length(length_steps);
        let count = (length / gap).ceil();
        if count.is_finite() && count >= 1.0 {
            count as u32
        } else {
            1
        }
    }

    /// Approximates the curve with `count` line segments of equal parameter width.
    ///
    /// The callback receives the end of each line segment, starting *after* the current
    /// point. The last point is always exactly `self.to`. See `flattening_step_count`
    /// to pick a count from a target segment length.
    pub fn for_each_flattened<F>(&self, count: u32, callback: &mut F)
    where
        F: FnMut(Point),
    {
        let count = count.max(1);
        for i in 1..count {
            callback(self.sample(i as f64 / count as f64));
        }
        callback(self.to);
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn straight_cubic_length() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };

    assert!((c.approximate_length(DEFAULT_LENGTH_STEPS) - 3.0).abs() < 1e-9);
    assert!((c.approximate_length(1) - 3.0).abs() < 1e-9);
}

#[test]
fn length_converges_with_steps() {
    // Quarter of a unit circle.
    let k = 0.5522847498;
    let c = CubicBezierSegment {
        from: point(1.0, 0.0),
        ctrl1: point(1.0, k),
        ctrl2: point(k, 1.0),
        to: point(0.0, 1.0),
    };

    let quarter = std::f64::consts::FRAC_PI_2;
    let coarse = c.approximate_length(4);
    let fine = c.approximate_length(DEFAULT_LENGTH_STEPS);

    // Chords are always shorter than the curve.
    assert!(coarse <= fine);
    assert!((fine - quarter).abs() < 1e-3);
    assert!((fine - quarter).abs() < (coarse - quarter).abs());
}

#[test]
fn sample_end_points() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 2.0),
        ctrl2: point(3.0, 2.0),
        to: point(4.0, 0.0),
    };

    assert_eq!(c.sample(0.0), c.from);
    assert_eq!(c.sample(1.0), c.to);
    assert_eq!(c.sample(0.5), point(2.0, 1.5));
}

#[test]
fn flattening_ends_on_endpoint() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };

    let count = c.flattening_step_count(3.0, DEFAULT_LENGTH_STEPS);
    assert!(count > 1);

    let mut points = Vec::new();
    c.for_each_flattened(count, &mut |p| points.push(p));
    assert_eq!(points.len(), count as usize);
    assert_eq!(*points.last().unwrap(), c.to);

    // A degenerate curve still produces its endpoint.
    let dot = CubicBezierSegment {
        from: point(1.0, 1.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 1.0),
    };
    let count = dot.flattening_step_count(3.0, DEFAULT_LENGTH_STEPS);
    assert_eq!(count, 1);
    let mut points = Vec::new();
    dot.for_each_flattened(count, &mut |p| points.push(p));
    assert_eq!(points, vec![point(1.0, 1.0)]);
}
