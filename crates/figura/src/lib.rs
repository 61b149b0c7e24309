#![deny(bare_trait_objects)]
#![no_std]

//! 2D vector geometry and path generation for figures.
//!
//! # Crates
//!
//! This meta-crate (`figura`) reexports the following sub-crates for
//! convenience:
//!
//! * [![crate](https://img.shields.io/crates/v/figura_geom.svg)](https://crates.io/crates/figura_geom)
//!   [![doc](https://docs.rs/figura_geom/badge.svg)](https://docs.rs/figura_geom) -
//!   **figura_geom** - Vectors, lines, spans and rectangles.
//! * [![crate](https://img.shields.io/crates/v/figura_path.svg)](https://crates.io/crates/figura_path)
//!   [![doc](https://docs.rs/figura_path/badge.svg)](https://docs.rs/figura_path) -
//!   **figura_path** - Path command generation: polylines, smoothed curves,
//!   arcs and arrowhead trimming.
//!
//! Each `figura_<name>` crate is reexported as a `<name>` module. For example:
//!
//! ```ignore
//! use figura_geom::Vector;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! use figura::geom::Vector;
//! ```
//!
//! # Feature flags
//!
//! Serialization using serde can be enabled with the `serialization` feature
//! flag (disabled by default). The crates are `no_std` compatible when the
//! default `std` feature is disabled.
//!
//! # Examples
//!
//! ```
//! use figura::geom::{vec2, Rect};
//! use figura::path::{curve_along_path, Curvature};
//!
//! let frame = Rect::from_corners([0.0f32, 0.0], [100.0, 60.0]).unwrap();
//! assert!(frame.contains([50.0, 30.0]).unwrap());
//! assert_eq!(frame.center(), vec2(50.0, 30.0));
//!
//! let rounded = curve_along_path(
//!     &[[0.0f32, 0.0], [100.0, 0.0], [100.0, 60.0], [0.0, 60.0]],
//!     Curvature::Spread(8.0),
//!     true,
//! )
//! .unwrap();
//! assert!(rounded.to_svg_string().ends_with("Z"));
//! ```

pub extern crate figura_path;

pub use figura_path as path;
pub use path::geom;
