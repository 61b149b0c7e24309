use crate::utils::approx_zero;
use crate::{Error, PointLike, Scalar, Vector};

/// An infinite line through `start`, extending along `direction` both ways.
///
/// Construction validates that the direction is not effectively zero and that
/// both parts share a dimension, so every value of this type really describes
/// a line.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Line<S> {
    start: Vector<S>,
    direction: Vector<S>,
}

impl<S: Scalar> Line<S> {
    pub fn new(
        start: impl Into<PointLike<S>>,
        direction: impl Into<PointLike<S>>,
    ) -> Result<Self, Error> {
        let start = start.into().into_vector()?;
        let direction = direction.into().into_vector()?;
        start.check_same_dimension(&direction)?;
        if direction.is_zero() {
            return Err(Error::ZeroVector);
        }

        Ok(Line { start, direction })
    }

    /// The reference point the line was built from.
    #[inline]
    pub fn start(&self) -> &Vector<S> {
        &self.start
    }

    /// The direction, not necessarily normalized.
    #[inline]
    pub fn direction(&self) -> &Vector<S> {
        &self.direction
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.start.dimension()
    }

    /// Whether `point` lies on the line.
    ///
    /// The test is scale invariant: the offset from the line's reference point
    /// is normalized before its perpendicular part is compared to zero.
    pub fn contains_point(&self, point: impl Into<PointLike<S>>) -> Result<bool, Error> {
        let point = point.into().into_vector_with_dimension(self.dimension())?;
        let offset = point.sub_unchecked(&self.start);
        if offset.is_zero() {
            return Ok(true);
        }

        let unit_offset = offset.normalized()?;

        Ok(unit_offset
            .perpendicular_component(&self.direction)?
            .is_zero())
    }

    /// The point on the line closest to `point`.
    pub fn closest_point(&self, point: impl Into<PointLike<S>>) -> Result<Vector<S>, Error> {
        let point = point.into().into_vector_with_dimension(self.dimension())?;
        let offset = point.sub_unchecked(&self.start);

        Ok(self
            .start
            .add_unchecked(&offset.projected_onto(&self.direction)?))
    }

    /// The distance between `point` and the line.
    pub fn distance_from(&self, point: impl Into<PointLike<S>>) -> Result<S, Error> {
        let point = point.into().into_vector_with_dimension(self.dimension())?;
        let offset = point.sub_unchecked(&self.start);

        Ok(offset.perpendicular_component(&self.direction)?.magnitude())
    }

    /// Where two lines of the plane cross, or `None` for parallel lines,
    /// coincident ones included. Only defined for dimension two.
    pub fn intersection(&self, other: &Self) -> Result<Option<Vector<S>>, Error> {
        self.start.check_dimension_is(2)?;
        other.start.check_dimension_is(2)?;

        let det = self.direction.cross(&other.direction)?;
        if approx_zero(det) {
            return Ok(None);
        }

        let offset = other.start.sub_unchecked(&self.start);
        let factor = offset.cross(&other.direction)? / det;
        let point = self
            .start
            .add_unchecked(&self.direction.scaled_unchecked(factor));

        // A nearly parallel pair can slip past the determinant test with a
        // wildly extrapolated result. Keep only answers that are actually on
        // the line.
        if !self.contains_point(&point)? {
            return Ok(None);
        }

        Ok(Some(point))
    }
}

impl<S: Scalar> PartialEq for Line<S> {
    /// Two lines are equal when they describe the same set of points, whatever
    /// reference point and direction scale they were built from.
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        let parallel = other
            .direction
            .normalized()
            .and_then(|unit| unit.perpendicular_component(&self.direction))
            .map(|perpendicular| perpendicular.is_zero())
            .unwrap_or(false);

        parallel && self.contains_point(&other.start).unwrap_or(false)
    }
}

#[cfg(test)]
use crate::vec2;

#[test]
fn construction_requires_a_direction() {
    assert_eq!(
        Line::new([0.0f32, 0.0], [0.0, 0.0]).err(),
        Some(Error::ZeroVector)
    );
    assert_eq!(
        Line::new([0.0f32, 0.0], [1.0, 0.0, 0.0]).err(),
        Some(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
    assert!(Line::new([0.0f32, 0.0], [1.0, 2.0]).is_ok());
}

#[test]
fn containment() {
    let diagonal = Line::new([0.0f32, 0.0], [1.0, 1.0]).unwrap();
    assert_eq!(diagonal.contains_point([3.0, 3.0]), Ok(true));
    assert_eq!(diagonal.contains_point([-2.0, -2.0]), Ok(true));
    assert_eq!(diagonal.contains_point([3.0, 2.0]), Ok(false));
    assert_eq!(diagonal.contains_point([0.0, 0.0]), Ok(true));

    let spatial = Line::new([0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0]).unwrap();
    assert_eq!(spatial.contains_point([2.0, 2.0, 2.0]), Ok(true));
    assert_eq!(spatial.contains_point([2.0, 2.0, 1.0]), Ok(false));
}

#[test]
fn closest_point_and_distance() {
    let horizontal = Line::new([0.0f32, 0.0], [5.0, 0.0]).unwrap();
    assert_eq!(horizontal.closest_point([3.0, 4.0]), Ok(vec2(3.0, 0.0)));
    assert_eq!(horizontal.distance_from([3.0, 4.0]), Ok(4.0));
    assert_eq!(horizontal.distance_from([7.0, 0.0]), Ok(0.0));
}

#[test]
fn intersection() {
    let a = Line::new([0.0f32, 0.0], [1.0, 1.0]).unwrap();
    let b = Line::new([4.0f32, 0.0], [-1.0, 1.0]).unwrap();
    assert_eq!(a.intersection(&b), Ok(Some(vec2(2.0, 2.0))));
    assert_eq!(b.intersection(&a), Ok(Some(vec2(2.0, 2.0))));

    // Parallel and coincident lines have no single crossing point.
    let parallel = Line::new([0.0f32, 1.0], [2.0, 2.0]).unwrap();
    assert_eq!(a.intersection(&parallel), Ok(None));
    let coincident = Line::new([5.0f32, 5.0], [-1.0, -1.0]).unwrap();
    assert_eq!(a.intersection(&coincident), Ok(None));

    let spatial = Line::new([0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0]).unwrap();
    assert_eq!(
        spatial.intersection(&spatial).err(),
        Some(Error::UnsupportedDimension {
            required: 2,
            actual: 3
        })
    );
}

#[test]
fn lines_compare_by_locus() {
    let a = Line::new([0.0f32, 0.0], [1.0, 1.0]).unwrap();
    let b = Line::new([2.0f32, 2.0], [-3.0, -3.0]).unwrap();
    let c = Line::new([0.0f32, 1.0], [1.0, 1.0]).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}
