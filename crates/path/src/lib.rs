#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::len_without_is_empty)]

//! Data structures to store, measure and walk 2D paths.
//!
//! A [`Path`] is a sequence of [`Segment`]s (moves, lines, cubic curves and
//! closes) that keeps its extents up to date as segments are appended. Paths can
//! be flattened, transformed in place and queried by arc length: "where is the
//! point 42 units along this path, and which way does it point?".
//!
//! This crate is reexported in [glide](../glide/index.html).
//!
//! # Examples
//!
//! ```
//! # extern crate glide_path;
//! # fn main() -> Result<(), glide_path::PathError> {
//! use glide_path::Path;
//! use glide_path::math::{point, vector};
//!
//! let mut path = Path::new();
//! path.move_to(point(0.0, 0.0))?;
//! path.line_to(point(10.0, 0.0))?;
//! path.curve_to(point(15.0, 0.0), point(15.0, 10.0), point(10.0, 10.0))?;
//! path.close_path()?;
//!
//! path.scale(2.0, 2.0);
//! path.translate(vector(1.0, 1.0));
//!
//! let length = path.total_length()?;
//! if let Some(sample) = path.position_at(length / 2.0)? {
//!     println!("Half way: {:?}, heading {:?}", sample.position(), sample.angle());
//! }
//!
//! for segment in &path {
//!     println!("{:?}", segment);
//! }
//! # Ok(())
//! # }
//! ```
//!

pub use glide_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
pub mod lengths;
mod options;
pub mod path;
pub mod sampler;
mod segment;

#[doc(inline)]
pub use crate::error::PathError;
pub use crate::geom::ArcFlags;
#[doc(inline)]
pub use crate::lengths::LengthTable;
#[doc(inline)]
pub use crate::options::PathOptions;
#[doc(inline)]
pub use crate::path::Path;
#[doc(inline)]
pub use crate::sampler::{Cursor, PathSample, Sampler};
#[doc(inline)]
pub use crate::segment::Segment;

pub mod math {
    //! The f64 geometry types used by paths, reexported from `glide_geom`.

    pub use crate::geom::{point, vector, Angle, Box2D, Point, Transform, Vector};
}
