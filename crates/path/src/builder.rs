//! Building paths one command at a time.

use crate::commands::{ArcFlags, Path, PathCommand};
use crate::geom::{Scalar, Vector};
use crate::private::DebugValidator;

use alloc::vec::Vec;

/// Accumulates path commands for one connected figure.
///
/// A path holds a single sub-path: the first command must be `move_to`, edges
/// follow, and an optional `close` ends the figure. In debug builds the
/// ordering is asserted. Every point must be two-dimensional, any other
/// dimension panics.
///
/// The generator functions drive the builder internally, but it is also the
/// way to assemble a custom figure by hand:
///
/// ```
/// use figura_path::{geom::vec2, Path};
///
/// let mut builder = Path::builder();
/// builder.move_to(vec2(0.0f32, 0.0));
/// builder.line_to(vec2(10.0, 0.0));
/// builder.close();
/// let path = builder.build();
///
/// assert_eq!(path.to_svg_string(), "M 0 0 L 10 0 Z");
/// ```
pub struct Builder<S> {
    commands: Vec<PathCommand<S>>,
    validator: DebugValidator,
}

impl<S: Scalar> Builder<S> {
    pub fn new() -> Self {
        Builder {
            commands: Vec::new(),
            validator: DebugValidator::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Builder {
            commands: Vec::with_capacity(capacity),
            validator: DebugValidator::new(),
        }
    }

    pub fn move_to(&mut self, to: Vector<S>) -> &mut Self {
        self.validator.begin();
        dimension_check(&to);
        self.commands.push(PathCommand::MoveTo { to });

        self
    }

    pub fn line_to(&mut self, to: Vector<S>) -> &mut Self {
        self.validator.edge();
        dimension_check(&to);
        self.commands.push(PathCommand::LineTo { to });

        self
    }

    pub fn quadratic_to(&mut self, ctrl: Vector<S>, to: Vector<S>) -> &mut Self {
        self.validator.edge();
        dimension_check(&ctrl);
        dimension_check(&to);
        self.commands.push(PathCommand::QuadraticTo { ctrl, to });

        self
    }

    pub fn cubic_to(&mut self, ctrl1: Vector<S>, ctrl2: Vector<S>, to: Vector<S>) -> &mut Self {
        self.validator.edge();
        dimension_check(&ctrl1);
        dimension_check(&ctrl2);
        dimension_check(&to);
        self.commands
            .push(PathCommand::CubicTo { ctrl1, ctrl2, to });

        self
    }

    pub fn arc_to(&mut self, radii: Vector<S>, flags: ArcFlags, to: Vector<S>) -> &mut Self {
        self.validator.edge();
        dimension_check(&radii);
        dimension_check(&to);
        self.commands.push(PathCommand::ArcTo { radii, flags, to });

        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.validator.close();
        self.commands.push(PathCommand::Close);

        self
    }

    pub fn build(self) -> Path<S> {
        self.validator.build();

        Path::from_commands(self.commands)
    }
}

impl<S: Scalar> Default for Builder<S> {
    fn default() -> Self {
        Builder::new()
    }
}

// The serializer indexes the first two coordinates unconditionally, so this
// stays on in release builds.
#[inline]
fn dimension_check<S: Scalar>(point: &Vector<S>) {
    assert_eq!(point.dimension(), 2, "path points must be two-dimensional");
}

#[cfg(test)]
use crate::geom::vec2;

#[test]
fn empty_build() {
    let path: Path<f32> = Builder::new().build();
    assert!(path.is_empty());
    assert_eq!(path.to_svg_string(), "");
}

#[test]
fn chained_calls() {
    let mut builder = Builder::with_capacity(3);
    builder
        .move_to(vec2(1.0f32, 2.0))
        .line_to(vec2(3.0, 4.0))
        .close();
    let path = builder.build();

    assert_eq!(path.to_svg_string(), "M 1 2 L 3 4 Z");
}

#[test]
#[should_panic]
fn three_dimensional_point() {
    let mut builder = Builder::new();
    builder.move_to(Vector::from_coordinates(&[1.0f32, 2.0, 3.0]).unwrap());
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn edge_before_move_to() {
    let mut builder: Builder<f32> = Builder::new();
    builder.line_to(vec2(1.0, 0.0));
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn second_move_to() {
    let mut builder = Builder::new();
    builder.move_to(vec2(0.0f32, 0.0));
    builder.move_to(vec2(1.0, 0.0));
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn edge_after_close() {
    let mut builder = Builder::new();
    builder.move_to(vec2(0.0f32, 0.0));
    builder.line_to(vec2(1.0, 0.0));
    builder.close();
    builder.line_to(vec2(2.0, 0.0));
}
