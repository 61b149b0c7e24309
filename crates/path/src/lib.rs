#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![no_std]

//! Path command generation for 2D figures.
//!
//! The generators turn ordered point sequences into [`Path`] values: plain
//! polylines, curves passing along or through the points, circular arcs, and
//! arrowhead planning that trims a path behind its glyphs. Every generator is
//! a pure function of its inputs and produces a fresh path.
//!
//! This crate is reexported in [figura](https://docs.rs/figura/).
//!
//! # Examples
//!
//! ```
//! use figura_path::{curve_through_path, line_path, Curvature};
//!
//! let polyline = line_path(&[[0.0f32, 0.0], [10.0, 0.0]], false).unwrap();
//! assert_eq!(polyline.to_svg_string(), "M 0 0 L 10 0");
//!
//! let smooth = curve_through_path(
//!     &[[0.0f32, 0.0], [10.0, 10.0], [20.0, 0.0]],
//!     Curvature::Part(0.5),
//!     false,
//! )
//! .unwrap();
//! assert!(smooth.to_svg_string().starts_with("M 0 0 C"));
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use figura_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod arc;
mod arrowhead;
mod builder;
mod commands;
mod points;
mod polyline;
mod private;
mod smooth;

#[doc(inline)]
pub use crate::arc::arc_path;
#[doc(inline)]
pub use crate::arrowhead::{
    plan_arrowheads, ArrowPlacement, ArrowSpec, ArrowheadPlan, Arrowheads, PathShape,
};
#[doc(inline)]
pub use crate::builder::Builder;
#[doc(inline)]
pub use crate::commands::{ArcFlags, Path, PathCommand};
#[doc(inline)]
pub use crate::polyline::line_path;
#[doc(inline)]
pub use crate::smooth::{curve_along_path, curve_through_path, Curvature};

pub use crate::geom::Error;
