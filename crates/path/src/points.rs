//! Shared input handling for the generator functions.

use crate::geom::{Error, PointLike, Scalar, Vector};

use alloc::vec::Vec;

/// Converts caller points into validated plane points.
pub(crate) fn to_plane_points<S, P>(points: &[P]) -> Result<Vec<Vector<S>>, Error>
where
    S: Scalar,
    P: Clone + Into<PointLike<S>>,
{
    points
        .iter()
        .cloned()
        .map(|p| p.into().into_vector_with_dimension(2))
        .collect()
}

/// Whether two points are close enough that the segment between them cannot
/// be normalized.
pub(crate) fn coincident<S: Scalar>(a: &Vector<S>, b: &Vector<S>) -> bool {
    a == b || a.subtract(b).map(|d| d.is_zero()).unwrap_or(false)
}

/// Drops points that coincide with their predecessor.
///
/// Every consecutive pair of the result has a normalizable offset, so the
/// curve generators can derive a tangent from any segment.
pub(crate) fn collapse_duplicates<S: Scalar>(points: Vec<Vector<S>>) -> Vec<Vector<S>> {
    let mut collapsed: Vec<Vector<S>> = Vec::with_capacity(points.len());
    for point in points {
        if let Some(last) = collapsed.last() {
            if coincident(last, &point) {
                continue;
            }
        }
        collapsed.push(point);
    }

    collapsed
}

/// Removes a final point that coincides with the first one. The wrap segment
/// of a closed figure comes from the generator, not from a repeated input
/// point.
pub(crate) fn drop_closing_duplicate<S: Scalar>(points: &mut Vec<Vector<S>>) {
    if points.len() >= 2 && coincident(&points[0], &points[points.len() - 1]) {
        points.pop();
    }
}

#[cfg(test)]
use crate::geom::vec2;

#[test]
fn conversion_checks_the_plane() {
    let converted = to_plane_points::<f32, _>(&[[0.0, 0.0], [3.0, 4.0]]).unwrap();
    assert_eq!(converted, alloc::vec![vec2(0.0, 0.0), vec2(3.0, 4.0)]);

    assert_eq!(
        to_plane_points::<f32, _>(&[[0.0, 0.0, 0.0]]),
        Err(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
    assert!(to_plane_points::<f32, _>(&[[f32::NAN, 0.0]]).is_err());
}

#[test]
fn consecutive_duplicates_are_dropped() {
    let points = alloc::vec![
        vec2(0.0f32, 0.0),
        vec2(0.0, 0.0),
        vec2(5.0, 5.0),
        vec2(5.0, 5.0 + 1e-6),
        vec2(9.0, 9.0),
        vec2(0.0, 0.0),
    ];

    let collapsed = collapse_duplicates(points);
    assert_eq!(
        collapsed,
        alloc::vec![vec2(0.0, 0.0), vec2(5.0, 5.0), vec2(9.0, 9.0), vec2(0.0, 0.0)]
    );
}

#[test]
fn closing_duplicate_is_dropped() {
    let mut points = alloc::vec![vec2(0.0f32, 0.0), vec2(10.0, 0.0), vec2(0.0, 0.0)];
    drop_closing_duplicate(&mut points);
    assert_eq!(points, alloc::vec![vec2(0.0, 0.0), vec2(10.0, 0.0)]);

    let mut points = alloc::vec![vec2(0.0f32, 0.0), vec2(10.0, 0.0)];
    drop_closing_duplicate(&mut points);
    assert_eq!(points.len(), 2);

    let mut point = alloc::vec![vec2(0.0f32, 0.0)];
    drop_closing_duplicate(&mut point);
    assert_eq!(point.len(), 1);
}
