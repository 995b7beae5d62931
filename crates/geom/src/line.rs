use crate::Point;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.to - self.from).length()
    }
}

#[test]
fn line_length() {
    use crate::point;

    let l = LineSegment {
        from: point(0.0, 0.0),
        to: point(3.0, 4.0),
    };

    assert_eq!(l.length(), 5.0);
    assert_eq!(l.sample(0.0), point(0.0, 0.0));
    assert_eq!(l.sample(0.5), point(1.5, 2.0));
    assert_eq!(l.sample(1.0), point(3.0, 4.0));
}
