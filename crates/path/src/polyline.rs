//! Straight polyline paths.

use crate::builder::Builder;
use crate::commands::Path;
use crate::geom::{Error, PointLike, Scalar};
use crate::points::to_plane_points;

/// Connects the points with straight edges, in order.
///
/// The path moves to the first point and draws a line to each subsequent one;
/// `close` appends a closing edge back to the start. Points are emitted
/// exactly as given, repeated points included. An empty slice produces an
/// empty path.
pub fn line_path<S, P>(points: &[P], close: bool) -> Result<Path<S>, Error>
where
    S: Scalar,
    P: Clone + Into<PointLike<S>>,
{
    let points = to_plane_points(points)?;

    let mut builder = Builder::with_capacity(points.len() + 1);
    let mut points = points.into_iter();
    if let Some(first) = points.next() {
        builder.move_to(first);
        for point in points {
            builder.line_to(point);
        }
        if close {
            builder.close();
        }
    }

    Ok(builder.build())
}

#[cfg(test)]
use crate::geom::vec2;

#[test]
fn open_polyline() {
    let path = line_path::<f32, _>(&[[0.0, 0.0], [10.0, 0.0]], false).unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 10 0");
}

#[test]
fn closed_polyline() {
    let path = line_path::<f32, _>(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]], true).unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 10 0 L 10 10 Z");
}

#[test]
fn short_inputs() {
    let path = line_path::<f32, _>(&[] as &[[f32; 2]], false).unwrap();
    assert!(path.is_empty());

    let path = line_path::<f32, _>(&[[3.0, 4.0]], false).unwrap();
    assert_eq!(path.to_svg_string(), "M 3 4");
}

#[test]
fn points_are_kept_as_given() {
    // Straight paths draw what they are handed; only the curve generators
    // collapse repeated points.
    let path = line_path::<f32, _>(&[[0.0, 0.0], [0.0, 0.0], [5.0, 5.0]], false).unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 0 0 L 5 5");
}

#[test]
fn mixed_point_forms() {
    use crate::geom::PointLike;

    let path = line_path(
        &[
            PointLike::named(0.0f32, 0.0),
            PointLike::from(vec2(10.0, 0.0)),
        ],
        false,
    )
    .unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 10 0");

    assert!(line_path::<f32, _>(&[[0.0, 0.0, 0.0]], false).is_err());
}
