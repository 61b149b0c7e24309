#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Geometric primitives for 2D figure generation.
//!
//! This crate is reexported in [figura](https://docs.rs/figura/).
//!
//! # Overview.
//!
//! This crate implements the maths to work with:
//!
//! - vectors of runtime dimension, used both as points and as displacements,
//! - infinite lines,
//! - spans (finite segments between two points),
//! - axis-aligned rectangles.
//!
//! Coordinates are validated when they enter the crate: constructors that accept
//! caller data return a [`Result`](Error) and reject non-finite numbers instead of
//! letting a `NaN` propagate through later computations. Once a value exists, its
//! derived quantities (length, direction, interpolation, and so on) are computed
//! on demand and never cached, so a primitive can be shared freely.
//!
//! # Example
//!
//! ```
//! use figura_geom::{vec2, Line, Span};
//!
//! let span = Span::between([0.0f32, 0.0], [10.0, 5.0]).unwrap();
//! assert_eq!(span.middle(), vec2(5.0, 2.5));
//!
//! let line = Line::new([0.0f32, 0.0], [1.0, 1.0]).unwrap();
//! assert!(line.contains_point([3.0, 3.0]).unwrap());
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

// Reexport dependencies.
pub use euclid;
pub use smallvec;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
mod line;
mod matrix;
mod point_like;
mod rect;
mod span;
pub mod utils;
mod vector;

#[doc(inline)]
pub use crate::error::Error;
#[doc(inline)]
pub use crate::line::Line;
#[doc(inline)]
pub use crate::matrix::SquareMatrix;
#[doc(inline)]
pub use crate::point_like::PointLike;
#[doc(inline)]
pub use crate::rect::Rect;
#[doc(inline)]
pub use crate::span::Span;
#[doc(inline)]
pub use crate::vector::Vector;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;

        const MIN: Self;
        const MAX: Self;

        const EPSILON: Self;

        /// Epsilon constants are usually not a good way to deal with float precision.
        /// Float precision depends on the magnitude of the values and so should appropriate
        /// epsilons.
        fn epsilon_for(_reference: Self) -> Self {
            Self::EPSILON
        }

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        const EPSILON: Self = 1e-4;

        fn epsilon_for(reference: Self) -> Self {
            // The thresholds are chosen by looking at the table at
            // https://blog.demofox.org/2017/11/21/floating-point-precision/ plus a bit
            // of trial and error. They might change in the future.
            let magnitude = reference.abs() as i32;
            match magnitude {
                0..=7 => 1e-5,
                8..=1023 => 1e-3,
                1024..=4095 => 1e-2,
                5096..=65535 => 1e-1,
                65536..=8_388_607 => 0.5,
                _ => 1.0,
            }
        }

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        const EPSILON: Self = 1e-8;

        fn epsilon_for(reference: Self) -> Self {
            let magnitude = reference.abs() as i64;
            match magnitude {
                0..=65_535 => 1e-8,
                65_536..=8_388_607 => 1e-5,
                8_388_608..=4_294_967_295 => 1e-3,
                _ => 1e-1,
            }
        }

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::from_coordinates(&[x, y])` with inputs known to be finite.
///
/// Debug builds assert that both coordinates are finite.
#[inline]
pub fn vec2<S: Scalar>(x: S, y: S) -> Vector<S> {
    Vector::vec2(x, y)
}

/// Shorthand for `Vector::from_coordinates(&[x, y, z])` with inputs known to be finite.
///
/// Debug builds assert that all coordinates are finite.
#[inline]
pub fn vec3<S: Scalar>(x: S, y: S, z: S) -> Vector<S> {
    Vector::vec3(x, y, z)
}
