//! Elliptic arc related maths and tools.
//!
//! SVG describes arcs with their two endpoints, radii, rotation and two flags (the
//! "endpoint parameterization"). Rendering them requires the center of the ellipse
//! and the angular range covered by the arc (the "center parameterization"). This
//! module converts the former into the latter and approximates the result with
//! cubic bézier curves of at most a quarter turn each.

use core::f64::consts::{FRAC_PI_2, PI};

use arrayvec::ArrayVec;

use crate::{point, vector, Angle, CubicBezierSegment, LineSegment, Point, Vector};

/// Upper bound on the number of cubic curves used to approximate one arc.
pub const MAX_ARC_CURVES: usize = 4;

const RADIUS_EPSILON: f64 = 1e-12;

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is true, then one of the two larger arc sweeps will be chosen; otherwise, if
    /// `large_arc` is false, one of the smaller arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is true, then the arc will be drawn in a "positive-angle" direction
    /// (the ellipse formula `x=cx+rx*cos(theta)` and `y=cy+ry*sin(theta)` is evaluated
    /// such that theta starts at an angle corresponding to the current point and
    /// increases positively until the arc reaches the destination position).
    pub sweep: bool,
}

/// An elliptic arc in the SVG notation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    pub x_rotation: Angle,
    pub flags: ArcFlags,
}

/// An elliptic arc described by its center.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center: Point,
    pub radii: Vector,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
    pub x_rotation: Angle,
}

/// The geometry an SVG arc turns into.
#[derive(Clone, Debug, PartialEq)]
pub enum ArcCurves {
    /// The arc degenerates into a straight line between its endpoints.
    Line(LineSegment),
    /// Between one and `MAX_ARC_CURVES` cubic bézier curves, the last one ending
    /// exactly on the arc's endpoint.
    Curves(ArrayVec<CubicBezierSegment, MAX_ARC_CURVES>),
    /// No ellipse satisfies the arc parameters, nothing should be drawn.
    Omit,
}

impl SvgArc {
    /// Returns true if either radius is too small for the arc to be anything but a
    /// straight line.
    pub fn has_degenerate_radii(&self) -> bool {
        self.radii.x * self.radii.x < RADIUS_EPSILON || self.radii.y * self.radii.y < RADIUS_EPSILON
    }

    /// Returns true if the arc is rendered as a straight line.
    ///
    /// This happens with degenerate radii, or when both endpoints are the same.
    pub fn is_straight_line(&self) -> bool {
        self.has_degenerate_radii() || self.from == self.to
    }

    /// Converts to the center parameterization.
    ///
    /// Returns `None` if the arc is a straight line or if no ellipse satisfies the
    /// parameters.
    pub fn to_arc(&self) -> Option<Arc> {
        Arc::from_svg_arc(self)
    }

    /// Approximates the arc with cubic bézier curves.
    pub fn to_cubic_beziers(&self) -> ArcCurves {
        if self.is_straight_line() {
            return ArcCurves::Line(LineSegment {
                from: self.from,
                to: self.to,
            });
        }

        let arc = match self.to_arc() {
            Some(arc) => arc,
            None => return ArcCurves::Omit,
        };

        let mut curves = arc.to_cubic_beziers();
        if curves.is_empty() {
            return ArcCurves::Omit;
        }

        // Snap both ends so that the curves join the surrounding segments exactly.
        curves[0].from = self.from;
        let last = curves.len() - 1;
        curves[last].to = self.to;

        ArcCurves::Curves(curves)
    }

    /// Invokes the callback for each cubic bézier approximating the arc.
    ///
    /// Straight and omitted arcs don't invoke the callback.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment),
    {
        if let ArcCurves::Curves(curves) = self.to_cubic_beziers() {
            for curve in &curves {
                cb(curve);
            }
        }
    }
}

impl Arc {
    /// Computes the center parameterization of an SVG arc.
    ///
    /// Radii that are too small to span the endpoints are scaled up. Returns `None`
    /// for straight arcs and when the center cannot be computed.
    pub fn from_svg_arc(arc: &SvgArc) -> Option<Arc> {
        debug_assert!(arc.from.x.is_finite() && arc.from.y.is_finite());
        debug_assert!(arc.to.x.is_finite() && arc.to.y.is_finite());

        if arc.is_straight_line() {
            return None;
        }

        let mut rx = arc.radii.x.abs();
        let mut ry = arc.radii.y.abs();

        let (sin_phi, cos_phi) = arc.x_rotation.radians.sin_cos();

        // Move the origin to the middle of the chord and align the axes with the ellipse.
        let hd_x = (arc.from.x - arc.to.x) / 2.0;
        let hd_y = (arc.from.y - arc.to.y) / 2.0;
        let x1 = cos_phi * hd_x + sin_phi * hd_y;
        let y1 = -sin_phi * hd_x + cos_phi * hd_y;

        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let denominator = rx2 * y1 * y1 + ry2 * x1 * x1;
        if denominator == 0.0 {
            return None;
        }

        let numerator = rx2 * ry2 - denominator;
        let mut coef = (numerator / denominator).max(0.0).sqrt();
        if arc.flags.large_arc == arc.flags.sweep {
            coef = -coef;
        }

        let cx1 = coef * rx * y1 / ry;
        let cy1 = -coef * ry * x1 / rx;

        let center = point(
            cos_phi * cx1 - sin_phi * cy1 + (arc.from.x + arc.to.x) / 2.0,
            sin_phi * cx1 + cos_phi * cy1 + (arc.from.y + arc.to.y) / 2.0,
        );

        let u = vector((x1 - cx1) / rx, (y1 - cy1) / ry);
        let v = vector((-x1 - cx1) / rx, (-y1 - cy1) / ry);
        if u.square_length() == 0.0 || v.square_length() == 0.0 {
            return None;
        }

        let start_angle = directed_angle(vector(1.0, 0.0), u);
        let mut sweep_angle = directed_angle(u, v);
        if arc.flags.sweep && sweep_angle < 0.0 {
            sweep_angle += 2.0 * PI;
        } else if !arc.flags.sweep && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * PI;
        }

        Some(Arc {
            center,
            radii: vector(rx, ry),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep_angle),
            x_rotation: arc.x_rotation,
        })
    }

    /// Sample the arc at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let angle = self.start_angle.radians + self.sweep_angle.radians * t;
        self.point_at_angle(angle)
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.sample(0.0)
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.sample(1.0)
    }

    fn point_at_angle(&self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        self.ellipse_to_user(vector(self.radii.x * cos, self.radii.y * sin))
    }

    fn ellipse_to_user(&self, v: Vector) -> Point {
        let (sin_phi, cos_phi) = self.x_rotation.radians.sin_cos();
        point(
            self.center.x + cos_phi * v.x - sin_phi * v.y,
            self.center.y + sin_phi * v.x + cos_phi * v.y,
        )
    }

    /// Approximates the arc with cubic bézier curves spanning at most a quarter turn.
    ///
    /// Each curve uses the usual circular arc control point distance
    /// `8/3 * sin²(δ/4) / sin(δ/2)` in the ellipse's local space.
    pub fn to_cubic_beziers(&self) -> ArrayVec<CubicBezierSegment, MAX_ARC_CURVES> {
        let mut curves = ArrayVec::new();

        let sweep = self.sweep_angle.radians;
        if sweep == 0.0 || !sweep.is_finite() {
            return curves;
        }

        let count = ((sweep.abs() / (FRAC_PI_2 + 0.001)).ceil() as usize).clamp(1, MAX_ARC_CURVES);
        let delta = sweep / count as f64;
        let t = 8.0 / 3.0 * (delta / 4.0).sin().powi(2) / (delta / 2.0).sin();

        let (rx, ry) = (self.radii.x, self.radii.y);
        for i in 0..count {
            let th0 = self.start_angle.radians + delta * i as f64;
            let th1 = th0 + delta;
            let (sin0, cos0) = th0.sin_cos();
            let (sin1, cos1) = th1.sin_cos();

            curves.push(CubicBezierSegment {
                from: self.ellipse_to_user(vector(rx * cos0, ry * sin0)),
                ctrl1: self.ellipse_to_user(vector(rx * (cos0 - t * sin0), ry * (sin0 + t * cos0))),
                ctrl2: self.ellipse_to_user(vector(rx * (cos1 + t * sin1), ry * (sin1 - t * cos1))),
                to: self.ellipse_to_user(vector(rx * cos1, ry * sin1)),
            });
        }

        curves
    }
}

/// Signed angle from `a` to `b`, in radians between -π and π.
fn directed_angle(a: Vector, b: Vector) -> f64 {
    a.cross(b).atan2(a.dot(b))
}

#[cfg(test)]
fn approx_eq(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn half_circle() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(2.0, 0.0),
        radii: vector(1.0, 1.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    let center = arc.to_arc().unwrap();
    assert!(approx_eq(center.center, point(1.0, 0.0)));
    assert!((center.sweep_angle.radians.abs() - PI).abs() < 1e-9);
    assert!(approx_eq(center.from(), arc.from));
    assert!(approx_eq(center.to(), arc.to));

    match arc.to_cubic_beziers() {
        ArcCurves::Curves(curves) => {
            assert_eq!(curves.len(), 2);
            assert_eq!(curves[0].from, arc.from);
            assert_eq!(curves[1].to, arc.to);
            assert!(approx_eq(curves[0].to, curves[1].from));
            // A positive sweep from (0, 0) to (2, 0) around (1, 0) goes through y = -1.
            assert!(approx_eq(curves[0].to, point(1.0, -1.0)));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn small_radii_are_scaled_up() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
        radii: vector(1.0, 1.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags::default(),
    };

    let center = arc.to_arc().unwrap();
    assert!((center.radii.x - 5.0).abs() < 1e-9);
    assert!((center.radii.y - 5.0).abs() < 1e-9);
    assert!(approx_eq(center.center, point(5.0, 0.0)));
}

#[test]
fn large_arc_uses_more_curves() {
    let small = SvgArc {
        from: point(0.0, 0.0),
        to: point(1.0, 1.0),
        radii: vector(1.0, 1.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: false,
            sweep: false,
        },
    };
    let large = SvgArc {
        flags: ArcFlags {
            large_arc: true,
            sweep: false,
        },
        ..small
    };

    let small_arc = small.to_arc().unwrap();
    let large_arc = large.to_arc().unwrap();
    assert!((small_arc.sweep_angle.radians + FRAC_PI_2).abs() < 1e-9);
    assert!((large_arc.sweep_angle.radians + 3.0 * FRAC_PI_2).abs() < 1e-9);

    assert_eq!(small_arc.to_cubic_beziers().len(), 1);
    assert_eq!(large_arc.to_cubic_beziers().len(), 3);
}

#[test]
fn rotated_arc_ends_on_endpoint() {
    for &(large_arc, sweep) in &[(false, false), (false, true), (true, false), (true, true)] {
        let arc = SvgArc {
            from: point(3.0, -2.0),
            to: point(-7.5, 4.25),
            radii: vector(8.0, 3.0),
            x_rotation: Angle::degrees(30.0),
            flags: ArcFlags { large_arc, sweep },
        };

        let center = arc.to_arc().unwrap();
        assert!((center.from() - arc.from).length() < 1e-6);
        assert!((center.to() - arc.to).length() < 1e-6);

        let mut last = None;
        arc.for_each_cubic_bezier(&mut |curve| last = Some(curve.to));
        assert_eq!(last, Some(arc.to));
    }
}

#[test]
fn degenerate_arcs_are_lines() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(10.0, 5.0),
        radii: vector(0.0, 4.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags::default(),
    };

    assert!(arc.has_degenerate_radii());
    assert!(arc.to_arc().is_none());
    assert_eq!(
        arc.to_cubic_beziers(),
        ArcCurves::Line(LineSegment {
            from: point(0.0, 0.0),
            to: point(10.0, 5.0)
        })
    );

    let mut count = 0;
    arc.for_each_cubic_bezier(&mut |_| count += 1);
    assert_eq!(count, 0);

    let same_point = SvgArc {
        to: point(0.0, 0.0),
        radii: vector(5.0, 5.0),
        ..arc
    };
    assert!(same_point.is_straight_line());
}
