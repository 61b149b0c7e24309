//! The path command sequence and its textual serialization.

use crate::builder::Builder;
use crate::geom::{Scalar, Vector};

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Flag parameters for arc commands as described by the SVG specification.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ArcFlags {
    /// Of the candidate arcs between the two endpoints, pick one of the two
    /// spanning more than half a turn.
    pub large_arc: bool,
    /// Sweep in the direction of increasing angles.
    pub sweep: bool,
}

/// One draw instruction of a path.
///
/// Every point is planar. The sequence a [`Path`] holds starts with a single
/// `MoveTo` and never restarts, so a path is one connected figure.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub enum PathCommand<S> {
    /// Lift the pen and place it at `to`.
    MoveTo { to: Vector<S> },
    /// A straight edge.
    LineTo { to: Vector<S> },
    /// A quadratic bézier edge.
    QuadraticTo { ctrl: Vector<S>, to: Vector<S> },
    /// A cubic bézier edge.
    CubicTo {
        ctrl1: Vector<S>,
        ctrl2: Vector<S>,
        to: Vector<S>,
    },
    /// A circular arc edge. The generators only produce equal radii and no
    /// x-axis rotation.
    ArcTo {
        radii: Vector<S>,
        flags: ArcFlags,
        to: Vector<S>,
    },
    /// A straight edge back to the start of the path.
    Close,
}

impl<S> PathCommand<S> {
    /// The point the pen rests on after this command, if it names one.
    pub fn to(&self) -> Option<&Vector<S>> {
        match self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadraticTo { to, .. }
            | PathCommand::CubicTo { to, .. }
            | PathCommand::ArcTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

impl<S: Scalar> PartialEq for PathCommand<S> {
    /// Commands compare with the same coordinate tolerance as vectors.
    fn eq(&self, other: &Self) -> bool {
        use PathCommand::*;
        match (self, other) {
            (MoveTo { to: a }, MoveTo { to: b }) => a == b,
            (LineTo { to: a }, LineTo { to: b }) => a == b,
            (QuadraticTo { ctrl: c1, to: a }, QuadraticTo { ctrl: c2, to: b }) => {
                c1 == c2 && a == b
            }
            (
                CubicTo {
                    ctrl1: a1,
                    ctrl2: a2,
                    to: a,
                },
                CubicTo {
                    ctrl1: b1,
                    ctrl2: b2,
                    to: b,
                },
            ) => a1 == b1 && a2 == b2 && a == b,
            (
                ArcTo {
                    radii: r1,
                    flags: f1,
                    to: a,
                },
                ArcTo {
                    radii: r2,
                    flags: f2,
                    to: b,
                },
            ) => r1 == r2 && f1 == f2 && a == b,
            (Close, Close) => true,
            _ => false,
        }
    }
}

fn write_point<S: Scalar>(f: &mut fmt::Formatter, point: &Vector<S>) -> fmt::Result {
    let coords = point.coordinates();
    write!(f, "{} {}", coords[0], coords[1])
}

impl<S: Scalar> fmt::Display for PathCommand<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathCommand::MoveTo { to } => {
                write!(f, "M ")?;
                write_point(f, to)
            }
            PathCommand::LineTo { to } => {
                write!(f, "L ")?;
                write_point(f, to)
            }
            PathCommand::QuadraticTo { ctrl, to } => {
                write!(f, "Q ")?;
                write_point(f, ctrl)?;
                write!(f, " ")?;
                write_point(f, to)
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                write!(f, "C ")?;
                write_point(f, ctrl1)?;
                write!(f, " ")?;
                write_point(f, ctrl2)?;
                write!(f, " ")?;
                write_point(f, to)
            }
            PathCommand::ArcTo { radii, flags, to } => {
                write!(f, "A ")?;
                write_point(f, radii)?;
                write!(f, " 0 {} {} ", flags.large_arc as u8, flags.sweep as u8)?;
                write_point(f, to)
            }
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// An immutable sequence of path commands describing one connected figure.
///
/// Paths are produced fresh by the generator functions or through
/// [`Path::builder`], and serialize to the standard vector-path mini-language
/// via [`Display`](fmt::Display) or [`to_svg_string`](Path::to_svg_string).
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct Path<S> {
    commands: Vec<PathCommand<S>>,
}

impl<S: Scalar> Path<S> {
    pub fn builder() -> Builder<S> {
        Builder::new()
    }

    pub(crate) fn from_commands(commands: Vec<PathCommand<S>>) -> Self {
        Path { commands }
    }

    /// The commands, in draw order.
    #[inline]
    pub fn commands(&self) -> &[PathCommand<S>] {
        &self.commands
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<PathCommand<S>> {
        self.commands.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The path in the standard textual mini-language, commands separated by
    /// single spaces.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl<S: Scalar> fmt::Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", command)?;
        }

        Ok(())
    }
}

impl<S: Scalar> PartialEq for Path<S> {
    fn eq(&self, other: &Self) -> bool {
        self.commands == other.commands
    }
}

impl<'l, S> IntoIterator for &'l Path<S> {
    type Item = &'l PathCommand<S>;
    type IntoIter = core::slice::Iter<'l, PathCommand<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
use crate::geom::vec2;

#[test]
fn building_and_serializing() {
    let mut builder = Path::builder();
    builder.move_to(vec2(0.0f32, 0.0));
    builder.line_to(vec2(10.0, 0.0));
    builder.quadratic_to(vec2(15.0, 5.0), vec2(10.0, 10.0));
    builder.cubic_to(vec2(5.0, 10.0), vec2(0.0, 5.0), vec2(0.0, 2.5));
    builder.close();
    let path = builder.build();

    assert_eq!(
        path.to_svg_string(),
        "M 0 0 L 10 0 Q 15 5 10 10 C 5 10 0 5 0 2.5 Z"
    );
}

#[test]
fn arc_serialization() {
    let mut builder = Path::builder();
    builder.move_to(vec2(5.0f32, 0.0));
    builder.arc_to(
        vec2(5.0, 5.0),
        ArcFlags {
            large_arc: false,
            sweep: true,
        },
        vec2(0.0, 5.0),
    );
    let path = builder.build();

    assert_eq!(path.to_svg_string(), "M 5 0 A 5 5 0 0 1 0 5");
}

#[test]
fn command_access() {
    let mut builder = Path::builder();
    builder.move_to(vec2(0.0f32, 0.0));
    builder.line_to(vec2(1.0, 1.0));
    builder.close();
    let path = builder.build();

    assert_eq!(path.len(), 3);
    assert!(!path.is_empty());
    assert_eq!(
        path.commands()[1],
        PathCommand::LineTo { to: vec2(1.0, 1.0) }
    );
    assert_eq!(path.commands()[1].to(), Some(&vec2(1.0, 1.0)));
    assert_eq!(path.commands()[2].to(), None);

    let ends: Vec<_> = path.iter().filter_map(|c| c.to()).collect();
    assert_eq!(ends.len(), 2);
}

#[test]
fn tolerant_path_equality() {
    fn starting_at(y: f32) -> Path<f32> {
        let mut builder = Path::builder();
        builder.move_to(vec2(0.0, y));
        builder.line_to(vec2(1.0, 1.0));
        builder.build()
    }

    assert_eq!(starting_at(0.0), starting_at(1e-6));
    assert_ne!(starting_at(0.0), starting_at(0.5));
    assert_ne!(Path::<f32>::builder().build(), starting_at(0.0));
}
