//! Smoothing generators: curves along and through a point sequence.

use crate::builder::Builder;
use crate::commands::Path;
use crate::geom::{Error, PointLike, Scalar, Vector};
use crate::points::{collapse_duplicates, drop_closing_duplicate, to_plane_points};

use alloc::vec::Vec;

/// Curvature control for the smoothing generators.
///
/// `Part` is a fraction of each segment: zero keeps corners sharp, one bends
/// the whole segment. `Spread` is an absolute offset in the units of the
/// points themselves, useful when the bend radius should not grow with the
/// segment.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Curvature<S> {
    Part(S),
    Spread(S),
}

impl<S: Scalar> Curvature<S> {
    pub(crate) fn check(&self) -> Result<(), Error> {
        let value = match *self {
            Curvature::Part(value) | Curvature::Spread(value) => value,
        };
        if !value.is_finite() {
            return Err(Error::NotANumber);
        }

        Ok(())
    }

    /// Distance an interior segment end travels toward the segment middle.
    fn interior_pull(&self, length: S) -> S {
        match *self {
            Curvature::Part(part) => part.max(S::ZERO).min(S::ONE) * length * S::HALF,
            Curvature::Spread(spread) => spread.max(S::ZERO).min(length * S::HALF),
        }
    }

    /// Distance the single free end of an open path's first or last segment
    /// travels. The other end is pinned, so the whole segment is available,
    /// with the part fraction capped below one to leave room for arrowheads.
    fn terminal_pull(&self, length: S) -> S {
        match *self {
            Curvature::Part(part) => part.max(S::ZERO).min(S::value(0.9)) * length,
            Curvature::Spread(spread) => spread.max(S::ZERO).min(length),
        }
    }
}

fn short_path<S: Scalar>(points: &[Vector<S>], close: bool) -> Path<S> {
    let mut builder = Builder::new();
    if let Some(first) = points.first() {
        builder.move_to(first.clone());
        if close {
            builder.close();
        }
    }

    builder.build()
}

/// Smooths a polyline without passing through its interior points.
///
/// Every segment keeps a straight middle part; its ends are pulled toward the
/// segment middle and each corner becomes a quadratic join with the original
/// corner point as control. Open paths still start and end exactly on the
/// first and last input points. Consecutive coincident input points collapse
/// to one.
pub fn curve_along_path<S, P>(
    points: &[P],
    curvature: Curvature<S>,
    close: bool,
) -> Result<Path<S>, Error>
where
    S: Scalar,
    P: Clone + Into<PointLike<S>>,
{
    curvature.check()?;

    let mut points = collapse_duplicates(to_plane_points(points)?);
    if close {
        drop_closing_duplicate(&mut points);
    }

    let n = points.len();
    if n < 2 {
        return Ok(short_path(&points, close));
    }
    let segment_count = if close { n } else { n - 1 };

    // The pulled-in end pair of every segment.
    let mut starts = Vec::with_capacity(segment_count);
    let mut ends = Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let vector = b.subtract(a)?;
        let length = vector.magnitude();
        let direction = vector.normalized()?;

        let first_of_open = !close && i == 0;
        let last_of_open = !close && i == segment_count - 1;

        let start_pull = if first_of_open {
            S::ZERO
        } else if last_of_open {
            curvature.terminal_pull(length)
        } else {
            curvature.interior_pull(length)
        };
        let end_pull = if last_of_open {
            S::ZERO
        } else if first_of_open {
            curvature.terminal_pull(length)
        } else {
            curvature.interior_pull(length)
        };

        starts.push(a.add(&direction.scaled(start_pull)?)?);
        ends.push(b.subtract(&direction.scaled(end_pull)?)?);
    }

    let mut builder = Builder::with_capacity(2 * segment_count + 2);
    builder.move_to(starts[0].clone());
    for i in 0..segment_count {
        builder.line_to(ends[i].clone());
        let next = i + 1;
        if next < segment_count {
            builder.quadratic_to(points[next].clone(), starts[next].clone());
        } else if close {
            builder.quadratic_to(points[0].clone(), starts[0].clone());
        }
    }
    if close {
        builder.close();
    }

    Ok(builder.build())
}

/// The incoming and outgoing curve controls of an interior point.
///
/// Both controls sit on the bisector of the directions toward the two
/// neighbors. When that bisector vanishes (both neighbors on the same side,
/// the path folding back on itself) the corner stays sharp: both controls
/// collapse onto the point.
pub(crate) fn control_pair<S: Scalar>(
    prev: &Vector<S>,
    point: &Vector<S>,
    next: &Vector<S>,
    curvature: Curvature<S>,
) -> Result<(Vector<S>, Vector<S>), Error> {
    let toward_prev = prev.subtract(point)?;
    let toward_next = next.subtract(point)?;

    let difference = toward_next.normalized()?.subtract(&toward_prev.normalized()?)?;
    if difference.is_zero() {
        return Ok((point.clone(), point.clone()));
    }
    let bisector = difference.normalized()?;

    let before = control_distance(&toward_prev, &bisector, curvature)?;
    let after = control_distance(&toward_next, &bisector, curvature)?;

    Ok((
        point.subtract(&bisector.scaled(before)?)?,
        point.add(&bisector.scaled(after)?)?,
    ))
}

fn control_distance<S: Scalar>(
    toward_neighbor: &Vector<S>,
    bisector: &Vector<S>,
    curvature: Curvature<S>,
) -> Result<S, Error> {
    let distance = match curvature {
        Curvature::Spread(spread) => spread,
        Curvature::Part(part) => {
            let half = toward_neighbor.scaled(S::HALF)?;
            half.dot(bisector)?.abs() * part * S::HALF
        }
    };

    Ok(distance.max(S::ZERO))
}

/// Smooths a polyline into cubic segments passing through every point.
///
/// Each interior point contributes a control pair placed on the bisector of
/// the directions toward its neighbors; an open path's endpoints contribute
/// no curvature of their own. Consecutive coincident input points collapse
/// to one.
pub fn curve_through_path<S, P>(
    points: &[P],
    curvature: Curvature<S>,
    close: bool,
) -> Result<Path<S>, Error>
where
    S: Scalar,
    P: Clone + Into<PointLike<S>>,
{
    curvature.check()?;

    let mut points = collapse_duplicates(to_plane_points(points)?);
    if close {
        drop_closing_duplicate(&mut points);
    }

    let n = points.len();
    if n < 2 {
        return Ok(short_path(&points, close));
    }

    let mut controls = Vec::with_capacity(n);
    for i in 0..n {
        let pair = if !close && (i == 0 || i == n - 1) {
            (points[i].clone(), points[i].clone())
        } else {
            let prev = &points[(i + n - 1) % n];
            let next = &points[(i + 1) % n];
            control_pair(prev, &points[i], next, curvature)?
        };
        controls.push(pair);
    }

    let segment_count = if close { n } else { n - 1 };
    let mut builder = Builder::with_capacity(segment_count + 2);
    builder.move_to(points[0].clone());
    for i in 0..segment_count {
        let next = (i + 1) % n;
        builder.cubic_to(
            controls[i].1.clone(),
            controls[next].0.clone(),
            points[next].clone(),
        );
    }
    if close {
        builder.close();
    }

    Ok(builder.build())
}

#[cfg(test)]
use crate::commands::PathCommand;
#[cfg(test)]
use crate::geom::vec2;

#[test]
fn along_open_spread() {
    let points = [[0.0f32, 0.0], [10.0, 0.0], [10.0, 10.0]];
    let path = curve_along_path(&points, Curvature::Spread(2.0), false).unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 8 0 Q 10 0 10 2 L 10 10");
}

#[test]
fn along_open_spread_with_interior_segment() {
    let points = [[0.0f32, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
    let path = curve_along_path(&points, Curvature::Spread(2.0), false).unwrap();
    assert_eq!(
        path.to_svg_string(),
        "M 0 0 L 8 0 Q 10 0 10 2 L 10 8 Q 10 10 8 10 L 0 10"
    );
}

#[test]
fn along_closed_full_part() {
    // Part one pulls both ends of every interior segment to its middle.
    let points = [[0.0f32, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
    let path = curve_along_path(&points, Curvature::Part(1.0), true).unwrap();
    assert_eq!(
        path.to_svg_string(),
        "M 5 0 L 5 0 Q 10 0 10 5 L 10 5 Q 10 10 5 10 L 5 10 Q 0 10 0 5 L 0 5 Q 0 0 5 0 Z"
    );
}

#[test]
fn along_terminal_caps() {
    // Spread beyond the segment covers the free terminal end entirely.
    let points = [[0.0f32, 0.0], [10.0, 0.0], [10.0, 10.0]];
    let path = curve_along_path(&points, Curvature::Spread(100.0), false).unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 0 0 Q 10 0 10 10 L 10 10");

    // An oversized part is capped at 0.9 on the terminal segments.
    let path = curve_along_path(&points, Curvature::Part(5.0), false).unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 1 0 Q 10 0 10 9 L 10 10");
}

#[test]
fn along_two_points_stays_straight() {
    let path =
        curve_along_path::<f32, _>(&[[0.0, 0.0], [10.0, 0.0]], Curvature::Part(1.0), false)
            .unwrap();
    assert_eq!(path.to_svg_string(), "M 0 0 L 10 0");
}

#[test]
fn along_duplicates_collapse() {
    let smoothed = curve_along_path::<f32, _>(
        &[[0.0, 0.0], [10.0, 0.0], [10.0, 0.0], [10.0, 10.0]],
        Curvature::Spread(2.0),
        false,
    )
    .unwrap();
    let reference =
        curve_along_path::<f32, _>(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]], Curvature::Spread(2.0), false)
            .unwrap();
    assert_eq!(smoothed, reference);

    // A closed figure whose input repeats the first point at the end.
    let closed = curve_along_path::<f32, _>(
        &[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0], [0.0, 0.0]],
        Curvature::Part(0.5),
        true,
    )
    .unwrap();
    let reference = curve_along_path::<f32, _>(
        &[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]],
        Curvature::Part(0.5),
        true,
    )
    .unwrap();
    assert_eq!(closed, reference);
}

#[test]
fn through_two_points_has_no_curvature() {
    let path =
        curve_through_path::<f32, _>(&[[0.0, 0.0], [10.0, 0.0]], Curvature::Part(1.0), false)
            .unwrap();

    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo { to: vec2(0.0, 0.0) },
            PathCommand::CubicTo {
                ctrl1: vec2(0.0, 0.0),
                ctrl2: vec2(10.0, 0.0),
                to: vec2(10.0, 0.0),
            },
        ]
    );
}

#[test]
fn through_spread_controls() {
    // The interior point's bisector is horizontal, so spread(2) places its
    // controls two units to each side.
    let points = [[0.0f32, 0.0], [10.0, 10.0], [20.0, 0.0]];
    let path = curve_through_path(&points, Curvature::Spread(2.0), false).unwrap();
    assert_eq!(
        path.to_svg_string(),
        "M 0 0 C 0 0 8 10 10 10 C 12 10 20 0 20 0"
    );
}

#[test]
fn through_part_controls() {
    let points = [[0.0f32, 0.0], [10.0, 10.0], [20.0, 0.0]];
    let path = curve_through_path(&points, Curvature::Part(1.0), false).unwrap();
    assert_eq!(
        path.to_svg_string(),
        "M 0 0 C 0 0 7.5 10 10 10 C 12.5 10 20 0 20 0"
    );
}

#[test]
fn through_fold_back_keeps_the_corner_sharp() {
    // Both neighbors of the middle point lie on the same side; its bisector
    // vanishes and the controls collapse.
    let points = [[0.0f32, 0.0], [10.0, 0.0], [0.0, 0.0]];
    let path = curve_through_path(&points, Curvature::Spread(2.0), false).unwrap();
    assert_eq!(
        path.to_svg_string(),
        "M 0 0 C 0 0 10 0 10 0 C 10 0 0 0 0 0"
    );
}

#[test]
fn through_closed_passes_through_every_point() {
    let points = [vec2(0.0f32, 0.0), vec2(10.0, 0.0), vec2(5.0, 10.0)];
    let path = curve_through_path(&points, Curvature::Part(0.5), true).unwrap();

    assert_eq!(path.len(), 5);
    let mut ends = path.iter().filter_map(|command| command.to());
    assert_eq!(ends.next(), Some(&points[0]));
    assert_eq!(ends.next(), Some(&points[1]));
    assert_eq!(ends.next(), Some(&points[2]));
    assert_eq!(ends.next(), Some(&points[0]));
    assert_eq!(path.commands()[4], PathCommand::Close);
}

#[test]
fn through_duplicates_collapse() {
    let smoothed = curve_through_path::<f32, _>(
        &[[0.0, 0.0], [10.0, 10.0], [10.0, 10.0], [20.0, 0.0]],
        Curvature::Spread(2.0),
        false,
    )
    .unwrap();
    let reference = curve_through_path::<f32, _>(
        &[[0.0, 0.0], [10.0, 10.0], [20.0, 0.0]],
        Curvature::Spread(2.0),
        false,
    )
    .unwrap();
    assert_eq!(smoothed, reference);
}

#[test]
fn smoothing_degenerate_inputs() {
    let empty = curve_along_path::<f32, _>(&[] as &[[f32; 2]], Curvature::Part(0.5), false).unwrap();
    assert!(empty.is_empty());

    let single =
        curve_through_path::<f32, _>(&[[3.0, 4.0]], Curvature::Part(0.5), false).unwrap();
    assert_eq!(single.to_svg_string(), "M 3 4");

    // All input points coincide.
    let collapsed =
        curve_along_path::<f32, _>(&[[3.0, 4.0], [3.0, 4.0]], Curvature::Part(0.5), false)
            .unwrap();
    assert_eq!(collapsed.to_svg_string(), "M 3 4");

    assert_eq!(
        curve_along_path::<f32, _>(&[[0.0, 0.0], [1.0, 0.0]], Curvature::Part(f32::NAN), false),
        Err(Error::NotANumber)
    );
}
