use crate::scalar::Float;
use crate::utils::approx_eq;
use crate::{Angle, Error, Scalar, Vector};

use smallvec::{smallvec, SmallVec};

/// A square matrix of runtime dimension, row major.
///
/// Matrices up to three by three are stored inline.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct SquareMatrix<S> {
    dimension: usize,
    elements: SmallVec<[S; 9]>,
}

impl<S: Scalar> SquareMatrix<S> {
    /// Builds a matrix from `dimension * dimension` row major elements.
    pub fn from_elements(dimension: usize, elements: &[S]) -> Result<Self, Error> {
        if elements.len() != dimension * dimension {
            return Err(Error::InconsistentConstruction);
        }
        for &e in elements {
            if !e.is_finite() {
                return Err(Error::NotANumber);
            }
        }

        Ok(SquareMatrix {
            dimension,
            elements: SmallVec::from_slice(elements),
        })
    }

    /// The identity of the given dimension.
    pub fn identity(dimension: usize) -> Self {
        let mut elements = smallvec![S::ZERO; dimension * dimension];
        for i in 0..dimension {
            elements[i * dimension + i] = S::ONE;
        }

        SquareMatrix {
            dimension,
            elements,
        }
    }

    /// The rotation of the plane by `angle`. With y pointing down on screen,
    /// positive angles turn clockwise.
    pub fn rotation(angle: Angle<S>) -> Result<Self, Error> {
        if !angle.radians.is_finite() {
            return Err(Error::NotANumber);
        }
        let (sin, cos) = (Float::sin(angle.radians), Float::cos(angle.radians));

        Ok(SquareMatrix {
            dimension: 2,
            elements: smallvec![cos, -sin, sin, cos],
        })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The element at `row`, `column`.
    pub fn element(&self, row: usize, column: usize) -> Result<S, Error> {
        let out_of_range = |index| Error::IndexOutOfRange {
            index,
            dimension: self.dimension,
        };
        if row >= self.dimension {
            return Err(out_of_range(row));
        }
        if column >= self.dimension {
            return Err(out_of_range(column));
        }

        Ok(self.elements[row * self.dimension + column])
    }

    /// Applies the matrix to a column vector of matching dimension.
    ///
    /// The result is validated again so an overflow cannot smuggle an
    /// infinity into an otherwise finite vector.
    pub fn transform(&self, vector: &Vector<S>) -> Result<Vector<S>, Error> {
        if vector.dimension() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: vector.dimension(),
            });
        }

        let coords = vector.coordinates();
        let mut out: SmallVec<[S; 4]> = SmallVec::with_capacity(self.dimension);
        for row in 0..self.dimension {
            let mut sum = S::ZERO;
            for (column, &c) in coords.iter().enumerate() {
                sum += self.elements[row * self.dimension + column] * c;
            }
            out.push(sum);
        }

        Vector::validated(out)
    }
}

impl<S: Scalar> PartialEq for SquareMatrix<S> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self
                .elements
                .iter()
                .zip(other.elements.iter())
                .all(|(&a, &b)| approx_eq(a, b))
    }
}

#[cfg(test)]
use crate::{vec2, vec3};

#[test]
fn construction() {
    assert_eq!(
        SquareMatrix::from_elements(2, &[1.0f32, 0.0, 0.0]),
        Err(Error::InconsistentConstruction)
    );
    assert_eq!(
        SquareMatrix::from_elements(2, &[1.0f32, 0.0, 0.0, f32::NAN]),
        Err(Error::NotANumber)
    );

    let m = SquareMatrix::from_elements(2, &[1.0f32, 0.0, 0.0, 1.0]).unwrap();
    assert_eq!(m, SquareMatrix::identity(2));
    assert_eq!(m.element(1, 1), Ok(1.0));
    assert_eq!(
        m.element(2, 0),
        Err(Error::IndexOutOfRange {
            index: 2,
            dimension: 2
        })
    );
}

#[test]
fn identity_is_neutral() {
    let v = vec3(1.0f32, -2.0, 3.0);
    assert_eq!(SquareMatrix::identity(3).transform(&v), Ok(v.clone()));
}

#[test]
fn rotation_matches_vector_rotation() {
    use core::f32::consts::FRAC_PI_2;

    let angle = Angle::radians(FRAC_PI_2);
    let m = SquareMatrix::rotation(angle).unwrap();
    let v = vec2(3.0f32, 1.0);

    assert_eq!(m.transform(&v), v.rotated(angle, None));
    assert_eq!(m.transform(&v), Ok(vec2(-1.0, 3.0)));
}

#[test]
fn dimensions_must_match() {
    let m = SquareMatrix::identity(2);
    assert_eq!(
        m.transform(&vec3(0.0f32, 0.0, 0.0)),
        Err(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
}
