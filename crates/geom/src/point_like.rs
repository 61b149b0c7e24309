use crate::{Error, Scalar, Vector};

use alloc::vec::Vec;
use smallvec::SmallVec;

/// The flexible point inputs accepted at API boundaries.
///
/// Functions taking caller points accept `impl Into<PointLike<S>>`, so plain
/// arrays, tuples, slices and already built vectors can all be passed
/// directly. The conversion into a validated [`Vector`] happens in one place,
/// [`into_vector`](PointLike::into_vector), which is where non-finite
/// coordinates are rejected.
#[derive(Clone, Debug)]
pub enum PointLike<S> {
    /// Bare coordinates, one per axis.
    Coordinates(SmallVec<[S; 4]>),
    /// Named planar axes with an optional third component.
    Named { x: S, y: S, z: Option<S> },
    /// An already validated vector, passed through unchanged.
    Point(Vector<S>),
}

impl<S: Scalar> PointLike<S> {
    /// Shorthand for the named two-dimensional form.
    pub fn named(x: S, y: S) -> Self {
        PointLike::Named { x, y, z: None }
    }

    /// Shorthand for the named three-dimensional form.
    pub fn named3(x: S, y: S, z: S) -> Self {
        PointLike::Named { x, y, z: Some(z) }
    }

    /// Converts into a validated vector.
    pub fn into_vector(self) -> Result<Vector<S>, Error> {
        match self {
            PointLike::Coordinates(coords) => Vector::validated(coords),
            PointLike::Named { x, y, z: None } => Vector::from_coordinates(&[x, y]),
            PointLike::Named { x, y, z: Some(z) } => Vector::from_coordinates(&[x, y, z]),
            PointLike::Point(vector) => Ok(vector),
        }
    }

    /// Converts into a validated vector, then checks it has the expected
    /// dimension.
    pub fn into_vector_with_dimension(self, expected: usize) -> Result<Vector<S>, Error> {
        let vector = self.into_vector()?;
        if vector.dimension() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: vector.dimension(),
            });
        }

        Ok(vector)
    }
}

impl<S: Scalar> From<Vector<S>> for PointLike<S> {
    fn from(vector: Vector<S>) -> Self {
        PointLike::Point(vector)
    }
}

impl<'l, S: Scalar> From<&'l Vector<S>> for PointLike<S> {
    fn from(vector: &'l Vector<S>) -> Self {
        PointLike::Point(vector.clone())
    }
}

impl<S: Scalar> From<[S; 2]> for PointLike<S> {
    fn from([x, y]: [S; 2]) -> Self {
        PointLike::Coordinates(SmallVec::from_slice(&[x, y]))
    }
}

impl<S: Scalar> From<[S; 3]> for PointLike<S> {
    fn from([x, y, z]: [S; 3]) -> Self {
        PointLike::Coordinates(SmallVec::from_slice(&[x, y, z]))
    }
}

impl<S: Scalar> From<(S, S)> for PointLike<S> {
    fn from((x, y): (S, S)) -> Self {
        PointLike::Coordinates(SmallVec::from_slice(&[x, y]))
    }
}

impl<S: Scalar> From<(S, S, S)> for PointLike<S> {
    fn from((x, y, z): (S, S, S)) -> Self {
        PointLike::Coordinates(SmallVec::from_slice(&[x, y, z]))
    }
}

impl<'l, S: Scalar> From<&'l [S]> for PointLike<S> {
    fn from(coords: &'l [S]) -> Self {
        PointLike::Coordinates(SmallVec::from_slice(coords))
    }
}

impl<S: Scalar> From<Vec<S>> for PointLike<S> {
    fn from(coords: Vec<S>) -> Self {
        PointLike::Coordinates(SmallVec::from_vec(coords))
    }
}

#[cfg(test)]
use crate::{vec2, vec3};

#[test]
fn conversions_agree() {
    fn convert<S: Scalar>(p: impl Into<PointLike<S>>) -> Vector<S> {
        p.into().into_vector().unwrap()
    }

    let expected = vec2(1.0f32, 2.0);
    assert_eq!(convert([1.0f32, 2.0]), expected);
    assert_eq!(convert((1.0f32, 2.0)), expected);
    assert_eq!(convert(&[1.0f32, 2.0][..]), expected);
    assert_eq!(convert(alloc::vec![1.0f32, 2.0]), expected);
    assert_eq!(convert(PointLike::named(1.0f32, 2.0)), expected);
    assert_eq!(convert(expected.clone()), expected);
    assert_eq!(convert(&expected), expected);

    assert_eq!(
        convert(PointLike::named3(1.0f32, 2.0, 3.0)),
        vec3(1.0, 2.0, 3.0)
    );
}

#[test]
fn validation_happens_on_conversion() {
    let p: PointLike<f32> = [f32::NAN, 0.0].into();
    assert_eq!(p.into_vector(), Err(Error::NotANumber));

    let p: PointLike<f32> = PointLike::named(0.0, f32::INFINITY);
    assert_eq!(p.into_vector(), Err(Error::NotANumber));
}

#[test]
fn expected_dimension_is_enforced() {
    let p: PointLike<f32> = [1.0f32, 2.0, 3.0].into();
    assert_eq!(
        p.into_vector_with_dimension(2),
        Err(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );

    let p: PointLike<f32> = [1.0f32, 2.0].into();
    assert_eq!(p.into_vector_with_dimension(2), Ok(vec2(1.0, 2.0)));
}
