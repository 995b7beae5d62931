#![deny(bare_trait_objects)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [glide](../glide/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths used by the path engine:
//!
//! - line segments,
//! - quadratic and cubic bézier curves,
//! - SVG elliptic arcs and their conversion into cubic bézier curves.
//!
//! All types use double precision floats.
//!
//! # Arc length
//!
//! Curve lengths are not computed analytically. [`CubicBezierSegment::approximate_length`]
//! sums the length of the chords obtained by sampling the curve at regularly spaced
//! values of `t`. The approximation gets better as the number of steps grows.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod cubic_bezier;
mod line;
pub mod quadratic_bezier;

#[doc(inline)]
pub use crate::arc::{Arc, ArcCurves, ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;

/// Alias for `euclid::default::Point2D<f64>`.
pub type Point = euclid::default::Point2D<f64>;

/// Alias for `euclid::default::Vector2D<f64>`.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for `euclid::default::Box2D<f64>`.
pub type Box2D = euclid::default::Box2D<f64>;

/// Alias for `euclid::default::Transform2D<f64>`.
pub type Transform = euclid::default::Transform2D<f64>;

/// An angle in radians (f64).
pub type Angle = euclid::Angle<f64>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub mod traits {
    use crate::{Point, Transform};

    /// Something that can move points around.
    pub trait Transformation {
        fn transform_point(&self, p: Point) -> Point;
    }

    impl Transformation for Transform {
        fn transform_point(&self, p: Point) -> Point {
            Transform::transform_point(self, p)
        }
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, T: Transformation> Transformation for &'l T {
        #[inline]
        fn transform_point(&self, p: Point) -> Point {
            (*self).transform_point(p)
        }
    }
}
