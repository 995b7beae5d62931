#![deny(bare_trait_objects)]

//! Parse and write paths in the SVG path syntax.
//!
//! This crate is reexported in [glide](../glide/index.html).
//!
//! # Examples
//!
//! ```
//! use glide_svg::{build_path, to_svg_string};
//!
//! let mut path = build_path("M 0 0 h 10 v 10 z").unwrap();
//! assert_eq!(to_svg_string(&path), "M 0 0 L 10 0 L 10 10 Z");
//! assert_eq!(path.total_length().unwrap(), 20.0 + 200f64.sqrt());
//! ```

pub use glide_path as path;

pub mod parser;
pub mod serializer;

#[doc(inline)]
pub use crate::parser::{build_path, parse_into, ParserOptions, PathParser};
#[doc(inline)]
pub use crate::serializer::{to_svg_string, SvgPathData};
