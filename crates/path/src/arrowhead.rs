//! Trimming path endpoints so strokes vanish behind arrowhead glyphs.

use crate::geom::{Angle, Error, PointLike, Scalar, Vector};
use crate::points::{collapse_duplicates, to_plane_points};
use crate::smooth::{control_pair, Curvature};

use alloc::vec::Vec;

/// A single arrowhead request.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowSpec<S> {
    /// Size of the glyph, in the units of the points.
    pub size: S,
}

/// Which ends of an open path carry arrowheads.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Arrowheads<S> {
    pub start: Option<ArrowSpec<S>>,
    pub end: Option<ArrowSpec<S>>,
}

/// How the points will be turned into a path.
///
/// The trim direction must match the tangent the path will actually have at
/// its endpoints: straight paths (and curves along the points, whose open
/// ends are pinned to the raw segment) leave along the adjacent point,
/// curves through the points leave along the neighbor's control.
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathShape<S> {
    Straight,
    Curved(Curvature<S>),
}

/// Where to draw one arrowhead glyph.
#[derive(Clone, Debug)]
pub struct ArrowPlacement<S> {
    /// The original path endpoint, where the glyph tip belongs.
    pub position: Vector<S>,
    /// The outward direction of the path at that endpoint.
    pub angle: Angle<S>,
}

/// The adjusted points plus the glyph placements.
///
/// The placements mirror the request: an end that asked for an arrowhead
/// reports one under the same name.
#[derive(Clone, Debug)]
pub struct ArrowheadPlan<S> {
    /// The input points with the arrowed ends pulled inward.
    pub points: Vec<Vector<S>>,
    pub start: Option<ArrowPlacement<S>>,
    pub end: Option<ArrowPlacement<S>>,
}

/// Computes arrowhead placements and pulls the path ends in behind them.
///
/// Each requested end yields an [`ArrowPlacement`] at the original endpoint,
/// and the endpoint itself moves inward along the path tangent by
/// `pull_in * size`, clamped to the adjacent segment, so the stroke ends
/// behind the glyph instead of poking out of its tip. With fewer than two
/// distinct points there is no direction to work with and the points are
/// returned unchanged.
pub fn plan_arrowheads<S, P>(
    points: &[P],
    arrows: Arrowheads<S>,
    pull_in: S,
    shape: PathShape<S>,
) -> Result<ArrowheadPlan<S>, Error>
where
    S: Scalar,
    P: Clone + Into<PointLike<S>>,
{
    if !pull_in.is_finite() {
        return Err(Error::NotANumber);
    }
    for spec in arrows.start.iter().chain(arrows.end.iter()) {
        if !spec.size.is_finite() {
            return Err(Error::NotANumber);
        }
    }
    if let PathShape::Curved(curvature) = shape {
        curvature.check()?;
    }

    let mut points = collapse_duplicates(to_plane_points(points)?);
    if points.len() < 2 {
        return Ok(ArrowheadPlan {
            points,
            start: None,
            end: None,
        });
    }

    let start_trim = match arrows.start {
        Some(spec) => Some(planned_trim(&points, true, spec, pull_in, shape)?),
        None => None,
    };
    let end_trim = match arrows.end {
        Some(spec) => Some(planned_trim(&points, false, spec, pull_in, shape)?),
        None => None,
    };

    let mut start = None;
    let mut end = None;
    if let Some((placement, trimmed)) = start_trim {
        start = Some(placement);
        points[0] = trimmed;
    }
    if let Some((placement, trimmed)) = end_trim {
        end = Some(placement);
        let last = points.len() - 1;
        points[last] = trimmed;
    }

    Ok(ArrowheadPlan { points, start, end })
}

fn planned_trim<S: Scalar>(
    points: &[Vector<S>],
    at_start: bool,
    spec: ArrowSpec<S>,
    pull_in: S,
    shape: PathShape<S>,
) -> Result<(ArrowPlacement<S>, Vector<S>), Error> {
    let tip = if at_start { 0 } else { points.len() - 1 };
    let neighbor = if at_start { 1 } else { points.len() - 2 };

    let outward = outward_direction(points, at_start, shape)?;
    let placement = ArrowPlacement {
        position: points[tip].clone(),
        angle: outward.argument()?,
    };

    let room = points[tip].subtract(&points[neighbor])?.magnitude();
    let depth = (pull_in * spec.size).min(room).max(S::ZERO);
    let trimmed = points[tip].subtract(&outward.with_magnitude(depth)?)?;

    Ok((placement, trimmed))
}

/// The direction the path leaves its endpoint in, pointing out of the path.
fn outward_direction<S: Scalar>(
    points: &[Vector<S>],
    at_start: bool,
    shape: PathShape<S>,
) -> Result<Vector<S>, Error> {
    let n = points.len();
    let (tip, neighbor) = if at_start { (0, 1) } else { (n - 1, n - 2) };

    if let PathShape::Curved(curvature) = shape {
        // The tangent at an open endpoint comes from the neighbor's control
        // facing it; the endpoint's own controls collapse. With only two
        // points the neighbor is itself an endpoint, leaving the raw segment.
        if n >= 3 {
            let control = if at_start {
                control_pair(&points[0], &points[1], &points[2], curvature)?.0
            } else {
                control_pair(&points[n - 3], &points[n - 2], &points[n - 1], curvature)?.1
            };
            let direction = points[tip].subtract(&control)?;
            if !direction.is_zero() {
                return Ok(direction);
            }
        }
    }

    points[tip].subtract(&points[neighbor])
}

#[cfg(test)]
use crate::geom::vec2;

#[test]
fn end_arrow_trims_the_last_point() {
    let plan = plan_arrowheads::<f32, _>(
        &[[0.0, 0.0], [10.0, 0.0]],
        Arrowheads {
            start: None,
            end: Some(ArrowSpec { size: 2.0 }),
        },
        1.5,
        PathShape::Straight,
    )
    .unwrap();

    assert_eq!(plan.points, alloc::vec![vec2(0.0, 0.0), vec2(7.0, 0.0)]);
    assert!(plan.start.is_none());
    let end = plan.end.unwrap();
    assert_eq!(end.position, vec2(10.0, 0.0));
    assert!(end.angle.radians.abs() < 1e-6);
}

#[test]
fn arrows_on_both_ends() {
    let plan = plan_arrowheads::<f32, _>(
        &[[0.0, 0.0], [10.0, 0.0]],
        Arrowheads {
            start: Some(ArrowSpec { size: 2.0 }),
            end: Some(ArrowSpec { size: 2.0 }),
        },
        1.0,
        PathShape::Straight,
    )
    .unwrap();

    assert_eq!(plan.points, alloc::vec![vec2(2.0, 0.0), vec2(8.0, 0.0)]);

    // The start glyph points backwards, the end glyph forwards.
    let start = plan.start.unwrap();
    assert_eq!(start.position, vec2(0.0, 0.0));
    assert!((start.angle.radians - core::f32::consts::PI).abs() < 1e-6);
    let end = plan.end.unwrap();
    assert_eq!(end.position, vec2(10.0, 0.0));
    assert!(end.angle.radians.abs() < 1e-6);
}

#[test]
fn trim_depth_is_clamped_to_the_segment() {
    let plan = plan_arrowheads::<f32, _>(
        &[[0.0, 0.0], [10.0, 0.0]],
        Arrowheads {
            start: None,
            end: Some(ArrowSpec { size: 2.0 }),
        },
        10.0,
        PathShape::Straight,
    )
    .unwrap();

    assert_eq!(plan.points, alloc::vec![vec2(0.0, 0.0), vec2(0.0, 0.0)]);
}

#[test]
fn curved_paths_trim_along_the_control_direction() {
    let plan = plan_arrowheads::<f32, _>(
        &[[0.0, 0.0], [10.0, 10.0], [20.0, 0.0]],
        Arrowheads {
            start: Some(ArrowSpec { size: 2.0 }),
            end: None,
        },
        1.0,
        PathShape::Curved(Curvature::Spread(2.0)),
    )
    .unwrap();

    // The neighbor's incoming control sits at (8, 10), so the path leaves the
    // start toward it rather than toward the neighbor itself.
    let start = plan.start.unwrap();
    let expected_angle = (-10.0f32).atan2(-8.0);
    assert!((start.angle.radians - expected_angle).abs() < 1e-2);

    assert_eq!(start.position, vec2(0.0, 0.0));
    assert_eq!(plan.points[0], vec2(1.2493901, 1.5617377));
    assert_eq!(plan.points[1], vec2(10.0, 10.0));
    assert_eq!(plan.points[2], vec2(20.0, 0.0));
}

#[test]
fn two_point_curved_falls_back_to_the_segment() {
    let curved = plan_arrowheads::<f32, _>(
        &[[0.0, 0.0], [10.0, 0.0]],
        Arrowheads {
            start: None,
            end: Some(ArrowSpec { size: 2.0 }),
        },
        1.0,
        PathShape::Curved(Curvature::Part(1.0)),
    )
    .unwrap();

    assert_eq!(curved.points, alloc::vec![vec2(0.0, 0.0), vec2(8.0, 0.0)]);
    assert!(curved.end.unwrap().angle.radians.abs() < 1e-6);
}

#[test]
fn too_few_points_leave_nothing_to_trim() {
    let both = Arrowheads {
        start: Some(ArrowSpec { size: 2.0 }),
        end: Some(ArrowSpec { size: 2.0 }),
    };

    let plan = plan_arrowheads::<f32, _>(&[[5.0, 5.0]], both, 1.0, PathShape::Straight).unwrap();
    assert_eq!(plan.points, alloc::vec![vec2(5.0, 5.0)]);
    assert!(plan.start.is_none() && plan.end.is_none());

    let plan =
        plan_arrowheads::<f32, _>(&[] as &[[f32; 2]], both, 1.0, PathShape::Straight).unwrap();
    assert!(plan.points.is_empty());
    assert!(plan.start.is_none() && plan.end.is_none());

    // Coincident points collapse before the check.
    let plan = plan_arrowheads::<f32, _>(&[[5.0, 5.0], [5.0, 5.0]], both, 1.0, PathShape::Straight)
        .unwrap();
    assert_eq!(plan.points.len(), 1);
    assert!(plan.start.is_none() && plan.end.is_none());
}

#[test]
fn duplicate_points_collapse_before_trimming() {
    let plan = plan_arrowheads::<f32, _>(
        &[[0.0, 0.0], [0.0, 0.0], [10.0, 0.0]],
        Arrowheads {
            start: None,
            end: Some(ArrowSpec { size: 2.0 }),
        },
        1.0,
        PathShape::Straight,
    )
    .unwrap();

    assert_eq!(plan.points, alloc::vec![vec2(0.0, 0.0), vec2(8.0, 0.0)]);
}

#[test]
fn arrowhead_input_validation() {
    let end_arrow = Arrowheads {
        start: None,
        end: Some(ArrowSpec { size: f32::NAN }),
    };
    assert!(matches!(
        plan_arrowheads::<f32, _>(&[[0.0, 0.0], [1.0, 0.0]], end_arrow, 1.0, PathShape::Straight),
        Err(Error::NotANumber)
    ));

    assert!(matches!(
        plan_arrowheads::<f32, _>(
            &[[0.0, 0.0], [1.0, 0.0]],
            Arrowheads::default(),
            f32::NAN,
            PathShape::Straight
        ),
        Err(Error::NotANumber)
    ));

    // No arrows requested: the points pass through untouched.
    let plan = plan_arrowheads::<f32, _>(
        &[[0.0, 0.0], [1.0, 0.0]],
        Arrowheads::default(),
        1.0,
        PathShape::Straight,
    )
    .unwrap();
    assert_eq!(plan.points, alloc::vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]);
    assert!(plan.start.is_none() && plan.end.is_none());
}
