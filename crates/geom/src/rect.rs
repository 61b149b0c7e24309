use crate::utils::{approx_eq, approx_ge, approx_le, approx_zero, min_max};
use crate::{Error, Line, PointLike, Scalar, Span, Vector};

use smallvec::SmallVec;

/// An axis-aligned box spanned by a diagonal.
///
/// The box generalizes to any dimension. The named corner accessors are the
/// two-dimensional screen-space view, where y grows downward.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Rect<S> {
    span: Span<S>,
}

impl<S: Scalar> Rect<S> {
    /// The box with `span`'s endpoints as opposite corners.
    pub fn new(span: Span<S>) -> Self {
        Rect { span }
    }

    /// The box with the segment from `a` to `b` as a diagonal.
    pub fn from_corners(
        a: impl Into<PointLike<S>>,
        b: impl Into<PointLike<S>>,
    ) -> Result<Self, Error> {
        Ok(Rect::new(Span::between(a, b)?))
    }

    /// The diagonal the box was built from.
    #[inline]
    pub fn span(&self) -> &Span<S> {
        &self.span
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.span.dimension()
    }

    /// The low and high bound along `axis`.
    pub fn bounds(&self, axis: usize) -> Result<(S, S), Error> {
        let start = self.span.start().coordinate(axis)?;
        let end = self.span.end().coordinate(axis)?;

        Ok(min_max(start, end))
    }

    /// The extent along `axis`, never negative.
    pub fn size(&self, axis: usize) -> Result<S, Error> {
        let (low, high) = self.bounds(axis)?;

        Ok(high - low)
    }

    /// The center point.
    pub fn center(&self) -> Vector<S> {
        self.span.middle()
    }

    /// The corner with both coordinates at their minimum.
    pub fn top_left(&self) -> Result<Vector<S>, Error> {
        self.corner_2d(false, false)
    }

    pub fn top_right(&self) -> Result<Vector<S>, Error> {
        self.corner_2d(true, false)
    }

    pub fn bottom_left(&self) -> Result<Vector<S>, Error> {
        self.corner_2d(false, true)
    }

    pub fn bottom_right(&self) -> Result<Vector<S>, Error> {
        self.corner_2d(true, true)
    }

    fn corner_2d(&self, high_x: bool, high_y: bool) -> Result<Vector<S>, Error> {
        self.span.start().check_dimension_is(2)?;
        let (min_x, max_x) = self.bounds(0)?;
        let (min_y, max_y) = self.bounds(1)?;

        Ok(Vector::vec2(
            if high_x { max_x } else { min_x },
            if high_y { max_y } else { min_y },
        ))
    }

    /// Whether `point` lies inside the box, boundary included.
    pub fn contains(&self, point: impl Into<PointLike<S>>) -> Result<bool, Error> {
        let point = point.into().into_vector_with_dimension(self.dimension())?;
        for (axis, &c) in point.coordinates().iter().enumerate() {
            let (low, high) = self.bounds(axis)?;
            if !approx_ge(c, low) || !approx_le(c, high) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Clamps `point` into the box. With `always_on_edge`, a point that was
    /// already inside is pushed to the nearest face instead of staying put.
    pub fn apply_bounds(
        &self,
        point: impl Into<PointLike<S>>,
        always_on_edge: bool,
    ) -> Result<Vector<S>, Error> {
        let point = point.into().into_vector_with_dimension(self.dimension())?;
        if self.dimension() == 0 {
            // A zero-dimensional box has no faces to snap to.
            return Ok(point);
        }

        let mut clamped: SmallVec<[S; 4]> = SmallVec::with_capacity(self.dimension());
        let mut inside = true;
        for (axis, &c) in point.coordinates().iter().enumerate() {
            let (low, high) = self.bounds(axis)?;
            clamped.push(if c < low {
                inside = false;
                low
            } else if c > high {
                inside = false;
                high
            } else {
                c
            });
        }

        if always_on_edge && inside {
            let mut nearest_axis = 0;
            let mut nearest_distance = S::MAX;
            let mut nearest_value = S::ZERO;
            for (axis, &c) in point.coordinates().iter().enumerate() {
                let (low, high) = self.bounds(axis)?;
                let (distance, value) = if c - low <= high - c {
                    (c - low, low)
                } else {
                    (high - c, high)
                };
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest_axis = axis;
                    nearest_value = value;
                }
            }
            clamped[nearest_axis] = nearest_value;
        }

        Vector::validated(clamped)
    }

    /// The interval of factors along `line` that lies inside the box, or
    /// `None` when the line misses the box entirely.
    ///
    /// A factor f corresponds to the point `line.start() + line.direction()
    /// * f`, so the interval can be compared directly against a span built on
    /// the same line.
    pub fn line_part_factors(&self, line: &Line<S>) -> Result<Option<(S, S)>, Error> {
        if line.dimension() != self.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.dimension(),
                actual: line.dimension(),
            });
        }

        let mut lowest = S::MIN;
        let mut highest = S::MAX;
        for axis in 0..self.dimension() {
            let (low, high) = self.bounds(axis)?;
            let start = line.start().coordinate(axis)?;
            let direction = line.direction().coordinate(axis)?;

            if approx_zero(direction) {
                // Parallel to this slab: the line is either always within its
                // bounds or never.
                if !approx_ge(start, low) || !approx_le(start, high) {
                    return Ok(None);
                }
                continue;
            }

            let (enter, exit) = min_max((low - start) / direction, (high - start) / direction);
            lowest = lowest.max(enter);
            highest = highest.min(exit);
        }

        if !approx_le(lowest, highest) {
            return Ok(None);
        }

        Ok(Some((lowest, highest)))
    }

    /// Whether `span` crosses or touches the box. With `contains`, whether
    /// the box covers the whole span instead.
    pub fn touches_span(&self, span: &Span<S>, contains: bool) -> Result<bool, Error> {
        if span.dimension() != self.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.dimension(),
                actual: span.dimension(),
            });
        }
        if span.is_degenerate() {
            // A span collapsed to a point has no line to clip.
            return self.contains(span.start());
        }

        Ok(match self.line_part_factors(&span.line()?)? {
            None => false,
            Some((lowest, highest)) => {
                if contains {
                    approx_le(lowest, S::ZERO) && approx_ge(highest, S::ONE)
                } else {
                    approx_le(lowest, S::ONE) && approx_ge(highest, S::ZERO)
                }
            }
        })
    }

    /// Whether the disc at `center` with `radius` overlaps the box. With
    /// `contains`, whether the box covers the whole disc instead.
    pub fn touches_circle(
        &self,
        center: impl Into<PointLike<S>>,
        radius: S,
        contains: bool,
    ) -> Result<bool, Error> {
        if !radius.is_finite() {
            return Err(Error::NotANumber);
        }
        let center = center.into().into_vector_with_dimension(self.dimension())?;

        if contains {
            if !self.contains(&center)? {
                return Ok(false);
            }
            let edge = self.apply_bounds(&center, true)?;
            let distance = center.sub_unchecked(&edge).magnitude();

            return Ok(approx_ge(distance, radius));
        }

        let closest = self.apply_bounds(&center, false)?;
        let distance = center.sub_unchecked(&closest).magnitude();

        Ok(approx_le(distance, radius))
    }
}

impl<S: Scalar> PartialEq for Rect<S> {
    /// Boxes compare by their bounds: the direction of the diagonal they were
    /// built from does not matter.
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        for axis in 0..self.dimension() {
            match (self.bounds(axis), other.bounds(axis)) {
                (Ok((a_low, a_high)), Ok((b_low, b_high))) => {
                    if !approx_eq(a_low, b_low) || !approx_eq(a_high, b_high) {
                        return false;
                    }
                }
                _ => return false,
            }
        }

        true
    }
}

#[cfg(test)]
use crate::vec2;

#[test]
fn bounds_and_size() {
    let rect = Rect::from_corners([10.0f32, 2.0], [2.0, 8.0]).unwrap();

    assert_eq!(rect.bounds(0), Ok((2.0, 10.0)));
    assert_eq!(rect.bounds(1), Ok((2.0, 8.0)));
    assert_eq!(rect.size(0), Ok(8.0));
    assert_eq!(rect.size(1), Ok(6.0));
    assert_eq!(rect.center(), vec2(6.0, 5.0));
    assert_eq!(
        rect.bounds(2),
        Err(Error::IndexOutOfRange {
            index: 2,
            dimension: 2
        })
    );

    // The diagonal's direction does not matter.
    assert_eq!(rect, Rect::from_corners([2.0f32, 8.0], [10.0, 2.0]).unwrap());
}

#[test]
fn named_corners() {
    let rect = Rect::from_corners([10.0f32, 2.0], [2.0, 8.0]).unwrap();

    assert_eq!(rect.top_left(), Ok(vec2(2.0, 2.0)));
    assert_eq!(rect.top_right(), Ok(vec2(10.0, 2.0)));
    assert_eq!(rect.bottom_left(), Ok(vec2(2.0, 8.0)));
    assert_eq!(rect.bottom_right(), Ok(vec2(10.0, 8.0)));

    let spatial = Rect::from_corners([0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0]).unwrap();
    assert_eq!(
        spatial.top_left().err(),
        Some(Error::UnsupportedDimension {
            required: 2,
            actual: 3
        })
    );
}

#[test]
fn point_containment() {
    let rect = Rect::from_corners([0.0f32, 0.0], [10.0, 6.0]).unwrap();

    assert_eq!(rect.contains([5.0, 3.0]), Ok(true));
    assert_eq!(rect.contains([0.0, 0.0]), Ok(true));
    assert_eq!(rect.contains([10.0, 6.0]), Ok(true));
    assert_eq!(rect.contains([10.5, 3.0]), Ok(false));
    assert_eq!(rect.contains([5.0, -1.0]), Ok(false));

    let spatial = Rect::from_corners([0.0f32, 0.0, 0.0], [2.0, 2.0, 2.0]).unwrap();
    assert_eq!(spatial.contains([1.0, 1.0, 1.0]), Ok(true));
    assert_eq!(spatial.contains([1.0, 1.0, 3.0]), Ok(false));
}

#[test]
fn clamping() {
    let rect = Rect::from_corners([0.0f32, 0.0], [10.0, 6.0]).unwrap();

    assert_eq!(rect.apply_bounds([12.0, 3.0], false), Ok(vec2(10.0, 3.0)));
    assert_eq!(rect.apply_bounds([-2.0, -2.0], false), Ok(vec2(0.0, 0.0)));
    assert_eq!(rect.apply_bounds([4.0, 3.0], false), Ok(vec2(4.0, 3.0)));
}

#[test]
fn clamping_onto_the_edge() {
    let rect = Rect::from_corners([0.0f32, 0.0], [10.0, 6.0]).unwrap();

    // The nearest face wins.
    assert_eq!(rect.apply_bounds([5.0, 1.0], true), Ok(vec2(5.0, 0.0)));
    assert_eq!(rect.apply_bounds([9.0, 3.0], true), Ok(vec2(10.0, 3.0)));
    // A point already on the boundary stays where it is.
    assert_eq!(rect.apply_bounds([5.0, 0.0], true), Ok(vec2(5.0, 0.0)));
    // Outside points are clamped as usual.
    assert_eq!(rect.apply_bounds([12.0, 8.0], true), Ok(vec2(10.0, 6.0)));
}

#[test]
fn clamping_a_zero_dimensional_box() {
    let point = Vector::<f32>::zero(0);
    let rect = Rect::from_corners(&point, &point).unwrap();

    assert_eq!(rect.apply_bounds(&point, false), Ok(point.clone()));
    assert_eq!(rect.apply_bounds(&point, true), Ok(point));
}

#[test]
fn line_clipping() {
    let rect = Rect::from_corners([0.0f32, 0.0], [10.0, 10.0]).unwrap();

    let crossing = Line::new([-5.0f32, 5.0], [1.0, 0.0]).unwrap();
    assert_eq!(rect.line_part_factors(&crossing), Ok(Some((5.0, 15.0))));

    let missing = Line::new([-5.0f32, 20.0], [1.0, 0.0]).unwrap();
    assert_eq!(rect.line_part_factors(&missing), Ok(None));

    let diagonal = Line::new([0.0f32, 0.0], [1.0, 1.0]).unwrap();
    assert_eq!(rect.line_part_factors(&diagonal), Ok(Some((0.0, 10.0))));

    let glancing = Line::new([20.0f32, -10.0], [1.0, 1.0]).unwrap();
    assert_eq!(rect.line_part_factors(&glancing), Ok(None));
}

#[test]
fn span_touching() {
    let rect = Rect::from_corners([0.0f32, 0.0], [10.0, 10.0]).unwrap();

    let crossing = Span::between([-5.0f32, 5.0], [5.0, 5.0]).unwrap();
    assert_eq!(rect.touches_span(&crossing, false), Ok(true));
    assert_eq!(rect.touches_span(&crossing, true), Ok(false));

    let inside = Span::between([2.0f32, 2.0], [8.0, 8.0]).unwrap();
    assert_eq!(rect.touches_span(&inside, false), Ok(true));
    assert_eq!(rect.touches_span(&inside, true), Ok(true));

    let outside = Span::between([-5.0f32, 5.0], [-1.0, 5.0]).unwrap();
    assert_eq!(rect.touches_span(&outside, false), Ok(false));

    // On the carrier line but short of the box.
    let short = Span::between([-5.0f32, 5.0], [-2.0, 5.0]).unwrap();
    assert_eq!(rect.touches_span(&short, false), Ok(false));

    let point_inside = Span::between([3.0f32, 3.0], [3.0, 3.0]).unwrap();
    assert_eq!(rect.touches_span(&point_inside, false), Ok(true));
    let point_outside = Span::between([-3.0f32, 3.0], [-3.0, 3.0]).unwrap();
    assert_eq!(rect.touches_span(&point_outside, false), Ok(false));
}

#[test]
fn circle_touching() {
    let rect = Rect::from_corners([0.0f32, 0.0], [10.0, 10.0]).unwrap();

    assert_eq!(rect.touches_circle([12.0, 5.0], 3.0, false), Ok(true));
    assert_eq!(rect.touches_circle([12.0, 5.0], 1.0, false), Ok(false));
    assert_eq!(rect.touches_circle([5.0, 5.0], 1.0, false), Ok(true));

    assert_eq!(rect.touches_circle([5.0, 5.0], 3.0, true), Ok(true));
    assert_eq!(rect.touches_circle([5.0, 5.0], 6.0, true), Ok(false));
    assert_eq!(rect.touches_circle([1.0, 5.0], 2.0, true), Ok(false));
    assert_eq!(rect.touches_circle([12.0, 5.0], 1.0, true), Ok(false));

    assert_eq!(
        rect.touches_circle([5.0, 5.0], f32::NAN, false),
        Err(Error::NotANumber)
    );
}
