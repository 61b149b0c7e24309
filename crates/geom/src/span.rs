use crate::utils::{approx_ge, approx_le};
use crate::{Error, Line, PointLike, Scalar, Vector};

/// The finite segment between two points.
///
/// Spans are directed, `start` and `end` are not interchangeable. Both
/// endpoints always share one dimension.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Span<S> {
    start: Vector<S>,
    end: Vector<S>,
}

impl<S: Scalar> Span<S> {
    /// The span from `start` to `end`.
    pub fn between(
        start: impl Into<PointLike<S>>,
        end: impl Into<PointLike<S>>,
    ) -> Result<Self, Error> {
        let start = start.into().into_vector()?;
        let end = end.into().into_vector()?;
        start.check_same_dimension(&end)?;

        Ok(Span { start, end })
    }

    /// The span from `start` along `vector`.
    pub fn from_start(
        start: impl Into<PointLike<S>>,
        vector: impl Into<PointLike<S>>,
    ) -> Result<Self, Error> {
        let start = start.into().into_vector()?;
        let vector = vector.into().into_vector()?;
        start.check_same_dimension(&vector)?;
        let end = start.add_unchecked(&vector);

        Ok(Span { start, end })
    }

    /// The span arriving at `end` after travelling along `vector`.
    pub fn to_end(
        end: impl Into<PointLike<S>>,
        vector: impl Into<PointLike<S>>,
    ) -> Result<Self, Error> {
        let end = end.into().into_vector()?;
        let vector = vector.into().into_vector()?;
        end.check_same_dimension(&vector)?;
        let start = end.sub_unchecked(&vector);

        Ok(Span { start, end })
    }

    /// Builds a span from whichever of start, end and vector are at hand.
    ///
    /// Any two parts determine the span. When all three are given they must
    /// agree, `start + vector` has to land on `end` within tolerance. Fewer
    /// than two parts cannot determine a span.
    pub fn from_parts(
        start: Option<PointLike<S>>,
        end: Option<PointLike<S>>,
        vector: Option<PointLike<S>>,
    ) -> Result<Self, Error> {
        match (start, end, vector) {
            (Some(start), Some(end), None) => Self::between(start, end),
            (Some(start), None, Some(vector)) => Self::from_start(start, vector),
            (None, Some(end), Some(vector)) => Self::to_end(end, vector),
            (Some(start), Some(end), Some(vector)) => {
                let span = Self::between(start, end)?;
                let vector = vector.into_vector()?;
                span.start.check_same_dimension(&vector)?;
                if span.vector() != vector {
                    return Err(Error::InconsistentConstruction);
                }

                Ok(span)
            }
            _ => Err(Error::InconsistentConstruction),
        }
    }

    #[inline]
    pub fn start(&self) -> &Vector<S> {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &Vector<S> {
        &self.end
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.start.dimension()
    }

    /// The displacement from start to end.
    #[inline]
    pub fn vector(&self) -> Vector<S> {
        self.end.sub_unchecked(&self.start)
    }

    #[inline]
    pub fn length(&self) -> S {
        self.vector().magnitude()
    }

    /// Whether the two endpoints effectively coincide.
    pub fn is_degenerate(&self) -> bool {
        self.vector().is_zero()
    }

    /// The midpoint.
    pub fn middle(&self) -> Vector<S> {
        self.start
            .add_unchecked(&self.vector().scaled_unchecked(S::HALF))
    }

    /// The point at `factor` along the span. The factor is not clamped, so
    /// values outside [0, 1] extrapolate beyond the endpoints.
    pub fn interpolate(&self, factor: S) -> Result<Vector<S>, Error> {
        self.start.interpolate(&self.end, factor)
    }

    /// The same segment walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        Span {
            start: self.end.clone(),
            end: self.start.clone(),
        }
    }

    /// The infinite line this span is part of. A degenerate span does not
    /// define one.
    pub fn line(&self) -> Result<Line<S>, Error> {
        Line::new(&self.start, self.vector())
    }

    /// Whether both spans lie on one common line.
    ///
    /// Degenerate spans are treated as points: a point qualifies when it lies
    /// on the other span's line, and two points qualify when they coincide.
    pub fn along_equal_line(&self, other: &Self) -> Result<bool, Error> {
        self.start.check_same_dimension(&other.start)?;

        Ok(match (self.is_degenerate(), other.is_degenerate()) {
            (false, false) => self.line()? == other.line()?,
            (false, true) => self.line()?.contains_point(&other.start)?,
            (true, false) => other.line()?.contains_point(&self.start)?,
            (true, true) => self.start == other.start,
        })
    }

    /// Whether the spans share at least one endpoint, in any combination.
    pub fn has_matching_point(&self, other: &Self) -> Result<bool, Error> {
        self.start.check_same_dimension(&other.start)?;

        Ok(self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end)
    }

    /// Whether `point` lies on the span, endpoints included.
    pub fn contains_point(&self, point: impl Into<PointLike<S>>) -> Result<bool, Error> {
        let point = point.into().into_vector_with_dimension(self.dimension())?;
        if self.is_degenerate() {
            return Ok(point == self.start);
        }

        let vector = self.vector();
        let offset = point.sub_unchecked(&self.start);
        if offset.is_zero() {
            return Ok(true);
        }
        if !offset
            .normalized()?
            .perpendicular_component(&vector)?
            .is_zero()
        {
            return Ok(false);
        }

        let factor = offset.dot_unchecked(&vector) / vector.squared_magnitude();

        Ok(approx_ge(factor, S::ZERO) && approx_le(factor, S::ONE))
    }
}

impl<S: Scalar> PartialEq for Span<S> {
    /// Spans are directed: equal spans have matching starts and matching ends.
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
use crate::vec2;

#[test]
fn construction_from_parts() {
    let expected = Span::between([1.0f32, 1.0], [4.0, 5.0]).unwrap();

    assert_eq!(Span::from_start([1.0f32, 1.0], [3.0, 4.0]), Ok(expected.clone()));
    assert_eq!(Span::to_end([4.0f32, 5.0], [3.0, 4.0]), Ok(expected.clone()));

    assert_eq!(
        Span::from_parts(
            Some([1.0f32, 1.0].into()),
            Some([4.0, 5.0].into()),
            Some([3.0, 4.0].into()),
        ),
        Ok(expected)
    );
    assert_eq!(
        Span::from_parts(
            Some([1.0f32, 1.0].into()),
            Some([4.0, 5.0].into()),
            Some([3.0, 0.0].into()),
        ),
        Err(Error::InconsistentConstruction)
    );
    assert_eq!(
        Span::<f32>::from_parts(Some([1.0f32, 1.0].into()), None, None),
        Err(Error::InconsistentConstruction)
    );

    assert_eq!(
        Span::between([0.0f32, 0.0], [1.0, 1.0, 1.0]).err(),
        Some(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn measurements() {
    let span = Span::between([1.0f32, 1.0], [4.0, 5.0]).unwrap();

    assert_eq!(span.vector(), vec2(3.0, 4.0));
    assert_eq!(span.length(), 5.0);
    assert_eq!(span.middle(), vec2(2.5, 3.0));
    assert_eq!(span.interpolate(0.5), Ok(vec2(2.5, 3.0)));
    assert_eq!(span.interpolate(2.0), Ok(vec2(7.0, 9.0)));
    assert_eq!(span.reversed().vector(), vec2(-3.0, -4.0));
}

#[test]
fn degenerate_spans() {
    let point = Span::between([2.0f32, 2.0], [2.0, 2.0]).unwrap();

    assert!(point.is_degenerate());
    assert_eq!(point.length(), 0.0);
    assert_eq!(point.line().err(), Some(Error::ZeroVector));
    assert_eq!(point.contains_point([2.0, 2.0]), Ok(true));
    assert_eq!(point.contains_point([2.0, 3.0]), Ok(false));
}

#[test]
fn along_equal_line() {
    let a = Span::between([0.0f32, 0.0], [2.0, 2.0]).unwrap();
    let b = Span::between([5.0f32, 5.0], [9.0, 9.0]).unwrap();
    let shifted = Span::between([0.0f32, 1.0], [2.0, 3.0]).unwrap();

    assert_eq!(a.along_equal_line(&b), Ok(true));
    assert_eq!(a.along_equal_line(&shifted), Ok(false));

    let point_on = Span::between([7.0f32, 7.0], [7.0, 7.0]).unwrap();
    let point_off = Span::between([7.0f32, 8.0], [7.0, 8.0]).unwrap();
    assert_eq!(a.along_equal_line(&point_on), Ok(true));
    assert_eq!(point_on.along_equal_line(&a), Ok(true));
    assert_eq!(a.along_equal_line(&point_off), Ok(false));
    assert_eq!(point_on.along_equal_line(&point_on), Ok(true));
    assert_eq!(point_on.along_equal_line(&point_off), Ok(false));
}

#[test]
fn matching_points() {
    let a = Span::between([0.0f32, 0.0], [1.0, 0.0]).unwrap();
    let b = Span::between([1.0f32, 0.0], [1.0, 5.0]).unwrap();
    let c = Span::between([2.0f32, 0.0], [2.0, 5.0]).unwrap();

    assert_eq!(a.has_matching_point(&b), Ok(true));
    assert_eq!(b.has_matching_point(&a), Ok(true));
    assert_eq!(a.has_matching_point(&c), Ok(false));
}

#[test]
fn containment() {
    let span = Span::between([0.0f32, 0.0], [10.0, 0.0]).unwrap();

    assert_eq!(span.contains_point([5.0, 0.0]), Ok(true));
    assert_eq!(span.contains_point([0.0, 0.0]), Ok(true));
    assert_eq!(span.contains_point([10.0, 0.0]), Ok(true));
    assert_eq!(span.contains_point([10.5, 0.0]), Ok(false));
    assert_eq!(span.contains_point([-0.5, 0.0]), Ok(false));
    assert_eq!(span.contains_point([5.0, 0.5]), Ok(false));
}
