use crate::scalar::{Float, Trig};
use crate::utils::{approx_eq, approx_zero};
use crate::{Angle, Error, PointLike, Scalar, SquareMatrix};

use smallvec::{smallvec, SmallVec};

/// A point or displacement with its dimension fixed at construction time.
///
/// The coordinates are guaranteed to be finite: constructors that accept caller
/// data validate them and report `Error::NotANumber` instead of storing a `NaN`.
/// All operations return new vectors, the receiver is never modified.
///
/// Vectors of small dimension (up to four) are stored inline without heap
/// allocation.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Vector<S> {
    coords: SmallVec<[S; 4]>,
}

impl<S: Scalar> Vector<S> {
    /// Builds a vector from raw coordinates, rejecting non-finite values.
    pub fn from_coordinates(coords: &[S]) -> Result<Self, Error> {
        Self::validated(SmallVec::from_slice(coords))
    }

    /// Builds a vector from any accepted point form. Coordinate lists and
    /// named-field records normalize to the same representation.
    pub fn from_point_like(point: impl Into<PointLike<S>>) -> Result<Self, Error> {
        point.into().into_vector()
    }

    pub(crate) fn validated(coords: SmallVec<[S; 4]>) -> Result<Self, Error> {
        for &c in &coords {
            if !c.is_finite() {
                return Err(Error::NotANumber);
            }
        }

        Ok(Vector { coords })
    }

    /// The origin of the given dimension.
    pub fn zero(dimension: usize) -> Self {
        Vector {
            coords: smallvec![S::ZERO; dimension],
        }
    }

    /// The unit vector along `axis`.
    pub fn unit(axis: usize, dimension: usize) -> Result<Self, Error> {
        if axis >= dimension {
            return Err(Error::IndexOutOfRange {
                index: axis,
                dimension,
            });
        }

        let mut unit = Self::zero(dimension);
        unit.coords[axis] = S::ONE;

        Ok(unit)
    }

    /// A two-dimensional vector of the given magnitude pointing at `angle`.
    ///
    /// Angles are measured from the positive x axis. With y pointing down on
    /// screen, positive angles turn clockwise.
    pub fn from_polar(magnitude: S, angle: Angle<S>) -> Result<Self, Error> {
        if !magnitude.is_finite() || !angle.radians.is_finite() {
            return Err(Error::NotANumber);
        }

        Ok(Self::vec2(
            magnitude * Float::cos(angle.radians),
            magnitude * Float::sin(angle.radians),
        ))
    }

    #[inline]
    pub(crate) fn vec2(x: S, y: S) -> Self {
        debug_assert!(x.is_finite());
        debug_assert!(y.is_finite());
        Vector {
            coords: smallvec![x, y],
        }
    }

    #[inline]
    pub(crate) fn vec3(x: S, y: S, z: S) -> Self {
        debug_assert!(x.is_finite());
        debug_assert!(y.is_finite());
        debug_assert!(z.is_finite());
        Vector {
            coords: smallvec![x, y, z],
        }
    }

    /// The number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// All coordinates, in axis order.
    #[inline]
    pub fn coordinates(&self) -> &[S] {
        &self.coords
    }

    /// The coordinate along `axis`.
    pub fn coordinate(&self, axis: usize) -> Result<S, Error> {
        self.coords
            .get(axis)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: axis,
                dimension: self.coords.len(),
            })
    }

    /// A copy of this vector with the coordinate along `axis` replaced.
    ///
    /// The receiver is left untouched, so a vector shared between several
    /// figures can never change under their feet.
    pub fn with_coordinate(&self, axis: usize, value: S) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NotANumber);
        }
        if axis >= self.coords.len() {
            return Err(Error::IndexOutOfRange {
                index: axis,
                dimension: self.coords.len(),
            });
        }

        let mut coords = self.coords.clone();
        coords[axis] = value;

        Ok(Vector { coords })
    }

    /// The first coordinate. `IndexOutOfRange` when the vector has none.
    #[inline]
    pub fn x(&self) -> Result<S, Error> {
        self.coordinate(0)
    }

    /// The second coordinate.
    #[inline]
    pub fn y(&self) -> Result<S, Error> {
        self.coordinate(1)
    }

    /// The third coordinate.
    #[inline]
    pub fn z(&self) -> Result<S, Error> {
        self.coordinate(2)
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.check_same_dimension(other)?;

        Ok(self.add_unchecked(other))
    }

    /// Componentwise difference.
    pub fn subtract(&self, other: &Self) -> Result<Self, Error> {
        self.check_same_dimension(other)?;

        Ok(self.sub_unchecked(other))
    }

    /// Componentwise multiplication by a factor.
    pub fn scaled(&self, factor: S) -> Result<Self, Error> {
        if !factor.is_finite() {
            return Err(Error::NotANumber);
        }

        Ok(self.scaled_unchecked(factor))
    }

    /// Componentwise division. Dividing by zero is reported as an error
    /// instead of producing infinities.
    pub fn divided(&self, divisor: S) -> Result<Self, Error> {
        if !divisor.is_finite() || divisor == S::ZERO {
            return Err(Error::NotANumber);
        }

        Self::validated(self.coords.iter().map(|&c| c / divisor).collect())
    }

    /// The opposite vector.
    #[inline]
    pub fn reversed(&self) -> Self {
        self.map(|c| -c)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> S {
        self.squared_magnitude().sqrt()
    }

    /// Avoids the square root when only comparing lengths.
    pub fn squared_magnitude(&self) -> S {
        let mut sum = S::ZERO;
        for &c in &self.coords {
            sum += c * c;
        }

        sum
    }

    /// Whether every coordinate is within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|&c| approx_zero(c))
    }

    /// The vector of magnitude one with the same direction.
    pub fn normalized(&self) -> Result<Self, Error> {
        self.with_magnitude(S::ONE)
    }

    /// A vector with the same direction and the given magnitude.
    ///
    /// An effectively zero vector has no direction to keep, so the operation
    /// reports `Error::ZeroVector` for it.
    pub fn with_magnitude(&self, magnitude: S) -> Result<Self, Error> {
        if !magnitude.is_finite() {
            return Err(Error::NotANumber);
        }

        let current = self.magnitude();
        if approx_zero(current) {
            return Err(Error::ZeroVector);
        }

        Ok(self.scaled_unchecked(magnitude / current))
    }

    /// Linear blend toward `other`: factor zero is `self`, one is `other`.
    /// The factor is not clamped.
    pub fn interpolate(&self, other: &Self, factor: S) -> Result<Self, Error> {
        if !factor.is_finite() {
            return Err(Error::NotANumber);
        }
        self.check_same_dimension(other)?;

        Ok(self.zip_with(other, |a, b| a + (b - a) * factor))
    }

    /// The point halfway between `self` and `other`.
    pub fn middle(&self, other: &Self) -> Result<Self, Error> {
        self.interpolate(other, S::HALF)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> Result<S, Error> {
        self.check_same_dimension(other)?;

        Ok(self.dot_unchecked(other))
    }

    /// The 2D cross product: the signed area of the parallelogram spanned by
    /// the two vectors. Only defined for dimension two.
    pub fn cross(&self, other: &Self) -> Result<S, Error> {
        self.check_dimension_is(2)?;
        other.check_dimension_is(2)?;

        Ok(self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0])
    }

    /// The 3D cross product. Only defined for dimension three.
    pub fn cross3(&self, other: &Self) -> Result<Self, Error> {
        self.check_dimension_is(3)?;
        other.check_dimension_is(3)?;

        let a = &self.coords;
        let b = &other.coords;

        Ok(Vector {
            coords: smallvec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// The projection of `self` onto `axis`.
    pub fn projected_onto(&self, axis: &Self) -> Result<Self, Error> {
        self.check_same_dimension(axis)?;
        if axis.is_zero() {
            return Err(Error::ZeroVector);
        }

        let factor = self.dot_unchecked(axis) / axis.squared_magnitude();

        Ok(axis.scaled_unchecked(factor))
    }

    /// The component of `self` orthogonal to `axis`. Added to the projection
    /// it gives back the original vector.
    pub fn perpendicular_component(&self, axis: &Self) -> Result<Self, Error> {
        Ok(self.sub_unchecked(&self.projected_onto(axis)?))
    }

    /// Rotation in the plane, `relative_to` the origin unless another center
    /// is given. With y pointing down on screen, positive angles turn
    /// clockwise. Only defined for dimension two.
    pub fn rotated(&self, angle: Angle<S>, relative_to: Option<&Self>) -> Result<Self, Error> {
        self.check_dimension_is(2)?;
        if !angle.radians.is_finite() {
            return Err(Error::NotANumber);
        }

        let origin;
        let center = match relative_to {
            Some(c) => {
                c.check_dimension_is(2)?;
                c
            }
            None => {
                origin = Self::zero(2);
                &origin
            }
        };

        let (sin, cos) = (Float::sin(angle.radians), Float::cos(angle.radians));
        let x = self.coords[0] - center.coords[0];
        let y = self.coords[1] - center.coords[1];

        Ok(Self::vec2(
            center.coords[0] + x * cos - y * sin,
            center.coords[1] + x * sin + y * cos,
        ))
    }

    /// The mirror image across the line through `relative_to` (the origin by
    /// default) directed along `direction` (the first axis by default).
    pub fn reflected(
        &self,
        direction: Option<&Self>,
        relative_to: Option<&Self>,
    ) -> Result<Self, Error> {
        let first_axis;
        let direction = match direction {
            Some(d) => {
                self.check_same_dimension(d)?;
                d
            }
            None => {
                first_axis = Self::unit(0, self.dimension())?;
                &first_axis
            }
        };
        if direction.is_zero() {
            return Err(Error::ZeroVector);
        }

        let origin;
        let center = match relative_to {
            Some(c) => {
                self.check_same_dimension(c)?;
                c
            }
            None => {
                origin = Self::zero(self.dimension());
                &origin
            }
        };

        let offset = self.sub_unchecked(center);
        let mirrored = offset
            .projected_onto(direction)?
            .scaled_unchecked(S::TWO)
            .sub_unchecked(&offset);

        Ok(center.add_unchecked(&mirrored))
    }

    /// Multiplication by a square matrix of matching dimension, applied
    /// `relative_to` the origin unless another pivot is given.
    pub fn transformed(
        &self,
        matrix: &SquareMatrix<S>,
        relative_to: Option<&Self>,
    ) -> Result<Self, Error> {
        match relative_to {
            None => matrix.transform(self),
            Some(pivot) => {
                self.check_same_dimension(pivot)?;
                let offset = self.sub_unchecked(pivot);

                Ok(pivot.add_unchecked(&matrix.transform(&offset)?))
            }
        }
    }

    /// The angle from the positive x axis to this vector. Only defined for
    /// dimension two; the zero vector reports an angle of zero.
    pub fn argument(&self) -> Result<Angle<S>, Error> {
        self.check_dimension_is(2)?;
        // fast_atan2 divides the smaller component by the larger one, which
        // is 0/0 for the origin.
        if self.is_zero() {
            return Ok(Angle::radians(S::ZERO));
        }

        Ok(Angle::radians(Trig::fast_atan2(
            self.coords[1],
            self.coords[0],
        )))
    }

    #[inline]
    pub(crate) fn check_same_dimension(&self, other: &Self) -> Result<(), Error> {
        if self.coords.len() != other.coords.len() {
            return Err(Error::DimensionMismatch {
                expected: self.coords.len(),
                actual: other.coords.len(),
            });
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn check_dimension_is(&self, required: usize) -> Result<(), Error> {
        if self.coords.len() != required {
            return Err(Error::UnsupportedDimension {
                required,
                actual: self.coords.len(),
            });
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    #[inline]
    pub(crate) fn sub_unchecked(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    #[inline]
    pub(crate) fn scaled_unchecked(&self, factor: S) -> Self {
        self.map(|c| c * factor)
    }

    #[inline]
    pub(crate) fn dot_unchecked(&self, other: &Self) -> S {
        debug_assert_eq!(self.coords.len(), other.coords.len());
        let mut sum = S::ZERO;
        for (&a, &b) in self.coords.iter().zip(other.coords.iter()) {
            sum += a * b;
        }

        sum
    }

    #[inline]
    fn zip_with(&self, other: &Self, f: impl Fn(S, S) -> S) -> Self {
        debug_assert_eq!(self.coords.len(), other.coords.len());
        Vector {
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    #[inline]
    fn map(&self, f: impl Fn(S) -> S) -> Self {
        Vector {
            coords: self.coords.iter().map(|&c| f(c)).collect(),
        }
    }
}

impl<S: Scalar> PartialEq for Vector<S> {
    /// Tolerant componentwise equality. Vectors of different dimensions are
    /// never equal.
    fn eq(&self, other: &Self) -> bool {
        self.coords.len() == other.coords.len()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(&a, &b)| approx_eq(a, b))
    }
}

#[cfg(test)]
use crate::{vec2, vec3};

#[test]
fn construction_rejects_non_finite() {
    assert_eq!(
        Vector::from_coordinates(&[f32::NAN, 0.0]),
        Err(Error::NotANumber)
    );
    assert_eq!(
        Vector::from_coordinates(&[0.0, f32::INFINITY]),
        Err(Error::NotANumber)
    );

    let v = Vector::from_coordinates(&[1.0f32, 2.0, 3.0]).unwrap();
    assert_eq!(v.dimension(), 3);
    assert_eq!(v.coordinates(), &[1.0, 2.0, 3.0]);
}

#[test]
fn coordinate_access() {
    let v = vec2(1.0f32, 2.0);
    assert_eq!(v.coordinate(1), Ok(2.0));
    assert_eq!(
        v.coordinate(5),
        Err(Error::IndexOutOfRange {
            index: 5,
            dimension: 2
        })
    );

    assert_eq!(v.x(), Ok(1.0));
    assert_eq!(v.y(), Ok(2.0));
    assert_eq!(
        v.z(),
        Err(Error::IndexOutOfRange {
            index: 2,
            dimension: 2
        })
    );
    assert_eq!(vec3(1.0f32, 2.0, 3.0).z(), Ok(3.0));

    let updated = v.with_coordinate(0, 9.0).unwrap();
    assert_eq!(updated, vec2(9.0, 2.0));
    // The original is immutable.
    assert_eq!(v, vec2(1.0, 2.0));

    assert_eq!(v.with_coordinate(0, f32::NAN), Err(Error::NotANumber));
    assert_eq!(
        v.with_coordinate(2, 0.0),
        Err(Error::IndexOutOfRange {
            index: 2,
            dimension: 2
        })
    );
}

#[test]
fn componentwise_algebra() {
    let a = vec2(1.0f32, 2.0);
    let b = vec2(3.0f32, -1.0);

    assert_eq!(a.add(&b), Ok(vec2(4.0, 1.0)));
    assert_eq!(a.subtract(&b), Ok(vec2(-2.0, 3.0)));
    assert_eq!(a.scaled(2.0), Ok(vec2(2.0, 4.0)));
    assert_eq!(a.divided(2.0), Ok(vec2(0.5, 1.0)));
    assert_eq!(a.reversed(), vec2(-1.0, -2.0));

    assert_eq!(a.divided(0.0), Err(Error::NotANumber));
    assert_eq!(a.scaled(f32::NAN), Err(Error::NotANumber));
    assert_eq!(
        a.add(&vec3(0.0, 0.0, 0.0)),
        Err(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn magnitude_and_normalization() {
    let v = vec2(3.0f32, 4.0);
    assert_eq!(v.magnitude(), 5.0);
    assert_eq!(v.squared_magnitude(), 25.0);

    assert_eq!(v.normalized(), Ok(vec2(0.6, 0.8)));
    assert_eq!(v.with_magnitude(10.0), Ok(vec2(6.0, 8.0)));

    assert!(Vector::<f32>::zero(2).is_zero());
    assert_eq!(
        Vector::<f32>::zero(2).normalized(),
        Err(Error::ZeroVector)
    );
    // Effectively zero counts as zero.
    assert_eq!(vec2(1e-7f32, 0.0).normalized(), Err(Error::ZeroVector));
}

#[test]
fn interpolation() {
    let a = vec2(0.0f32, 0.0);
    let b = vec2(10.0f32, -4.0);

    assert_eq!(a.interpolate(&b, 0.25), Ok(vec2(2.5, -1.0)));
    assert_eq!(a.middle(&b), Ok(vec2(5.0, -2.0)));
    // The factor is unclamped.
    assert_eq!(a.interpolate(&b, 2.0), Ok(vec2(20.0, -8.0)));
    assert_eq!(a.interpolate(&b, f32::NAN), Err(Error::NotANumber));
}

#[test]
fn dot_and_cross_products() {
    let x = vec2(1.0f32, 0.0);
    let y = vec2(0.0f32, 1.0);

    assert_eq!(x.dot(&y), Ok(0.0));
    assert_eq!(vec2(1.0f32, 2.0).dot(&vec2(3.0, 4.0)), Ok(11.0));

    assert_eq!(x.cross(&y), Ok(1.0));
    assert_eq!(y.cross(&x), Ok(-1.0));
    assert_eq!(
        vec3(1.0f32, 0.0, 0.0).cross(&vec3(0.0, 1.0, 0.0)),
        Err(Error::UnsupportedDimension {
            required: 2,
            actual: 3
        })
    );

    assert_eq!(
        vec3(1.0f32, 0.0, 0.0).cross3(&vec3(0.0, 1.0, 0.0)),
        Ok(vec3(0.0, 0.0, 1.0))
    );
}

#[test]
fn projection() {
    let axis = vec2(2.0f32, 0.0);
    let v = vec2(3.0f32, 4.0);

    let projected = v.projected_onto(&axis).unwrap();
    let perpendicular = v.perpendicular_component(&axis).unwrap();

    assert_eq!(projected, vec2(3.0, 0.0));
    assert_eq!(perpendicular, vec2(0.0, 4.0));
    assert_eq!(projected.add(&perpendicular), Ok(v.clone()));
    assert!(crate::utils::approx_zero(
        perpendicular.dot(&axis).unwrap()
    ));

    assert_eq!(
        v.projected_onto(&Vector::zero(2)),
        Err(Error::ZeroVector)
    );
}

#[test]
fn rotation() {
    use core::f32::consts::{FRAC_PI_2, PI};

    let v = vec2(1.0f32, 0.0);
    assert_eq!(v.rotated(Angle::radians(FRAC_PI_2), None), Ok(vec2(0.0, 1.0)));
    assert_eq!(v.rotated(Angle::radians(2.0 * PI), None), Ok(v.clone()));

    let center = vec2(1.0f32, 1.0);
    assert_eq!(
        vec2(2.0f32, 1.0).rotated(Angle::radians(PI), Some(&center)),
        Ok(vec2(0.0, 1.0))
    );

    assert_eq!(
        vec3(1.0f32, 0.0, 0.0).rotated(Angle::radians(PI), None),
        Err(Error::UnsupportedDimension {
            required: 2,
            actual: 3
        })
    );
}

#[test]
fn reflection() {
    // Across the first axis by default.
    assert_eq!(
        vec2(3.0f32, 4.0).reflected(None, None),
        Ok(vec2(3.0, -4.0))
    );
    // Across the diagonal.
    assert_eq!(
        vec2(1.0f32, 0.0).reflected(Some(&vec2(1.0, 1.0)), None),
        Ok(vec2(0.0, 1.0))
    );
    // Across a horizontal line through (0, 2).
    assert_eq!(
        vec2(5.0f32, 0.0).reflected(None, Some(&vec2(0.0, 2.0))),
        Ok(vec2(5.0, 4.0))
    );

    assert_eq!(
        vec2(1.0f32, 1.0).reflected(Some(&Vector::zero(2)), None),
        Err(Error::ZeroVector)
    );
}

#[test]
fn polar_coordinates() {
    use core::f32::consts::FRAC_PI_2;

    let v = Vector::from_polar(2.0f32, Angle::radians(FRAC_PI_2)).unwrap();
    assert_eq!(v, vec2(0.0, 2.0));
    assert!(approx_eq(v.argument().unwrap().radians, FRAC_PI_2));

    assert_eq!(
        Vector::zero(2).argument().map(|angle| angle.radians),
        Ok(0.0f32)
    );

    assert_eq!(
        Vector::from_polar(f32::NAN, Angle::radians(0.0)),
        Err(Error::NotANumber)
    );
}

#[test]
fn unit_axes() {
    assert_eq!(Vector::unit(1, 3), Ok(vec3(0.0f32, 1.0, 0.0)));
    assert_eq!(
        Vector::<f32>::unit(3, 3),
        Err(Error::IndexOutOfRange {
            index: 3,
            dimension: 3
        })
    );
}

#[test]
fn tolerant_equality() {
    assert_eq!(vec2(1.0f32, 2.0), vec2(1.0 + 1e-6, 2.0));
    assert_ne!(vec2(1.0f32, 2.0), vec2(1.1, 2.0));
    assert_ne!(vec2(1.0f32, 2.0), vec3(1.0, 2.0, 0.0));
}

#[test]
fn point_like_forms_are_equivalent() {
    let from_list = Vector::from_point_like([1.5f32, -2.0]).unwrap();
    let from_record = Vector::from_point_like(PointLike::named(1.5f32, -2.0)).unwrap();
    assert_eq!(from_list, from_record);
}

#[test]
fn algebraic_identities() {
    let cases: &[Vector<f64>] = &[
        vec2(1.0, 2.0),
        vec2(-3.5, 0.25),
        vec3(1.0, -1.0, 8.0),
        Vector::zero(2),
    ];

    for v in cases {
        // Adding the opposite gives the origin back.
        assert_eq!(
            v.add(&v.reversed()),
            Ok(Vector::zero(v.dimension()))
        );
    }

    let a = vec2(1.0f64, 2.0);
    let b = vec2(-0.5f64, 4.0);
    assert_eq!(a.dot(&b), b.dot(&a));
}

#[test]
fn transform_around_a_pivot() {
    use core::f32::consts::PI;

    let half_turn = SquareMatrix::rotation(Angle::radians(PI)).unwrap();
    let pivot = vec2(1.0f32, 1.0);

    assert_eq!(
        vec2(2.0f32, 1.0).transformed(&half_turn, Some(&pivot)),
        Ok(vec2(0.0, 1.0))
    );
    assert_eq!(
        vec2(2.0f32, 1.0).transformed(&half_turn, None),
        Ok(vec2(-2.0, -1.0))
    );
}
