//! Circular arc paths.

use crate::commands::{ArcFlags, Path};
use crate::geom::utils::approx_eq;
use crate::geom::{vec2, Angle, Error, PointLike, Scalar, Vector};

/// A single circular arc around `center` from `start_angle` to `end_angle`.
///
/// Angles follow the screen convention of the rest of the crate: zero along
/// the positive x axis, growing clockwise with y pointing down. The sweep
/// flag follows the sign of `end_angle - start_angle`; the large-arc flag is
/// set when the swept angle exceeds half a turn.
pub fn arc_path<S, P>(
    center: P,
    radius: S,
    start_angle: Angle<S>,
    end_angle: Angle<S>,
) -> Result<Path<S>, Error>
where
    S: Scalar,
    P: Into<PointLike<S>>,
{
    let center = center.into().into_vector_with_dimension(2)?;

    let start = center.add(&Vector::from_polar(radius, start_angle)?)?;
    let end = center.add(&Vector::from_polar(radius, end_angle)?)?;

    let turn = (end_angle.radians - start_angle.radians).abs();
    let flags = ArcFlags {
        large_arc: turn > S::PI() && !approx_eq(turn, S::PI()),
        sweep: end_angle.radians >= start_angle.radians,
    };

    let mut builder = Path::builder();
    builder.move_to(start);
    builder.arc_to(vec2(radius, radius), flags, end);

    Ok(builder.build())
}

#[cfg(test)]
use crate::commands::PathCommand;

#[test]
fn quarter_turn() {
    let path = arc_path::<f32, _>(
        [0.0, 0.0],
        5.0,
        Angle::radians(0.0),
        Angle::radians(core::f32::consts::FRAC_PI_2),
    )
    .unwrap();

    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo { to: vec2(5.0, 0.0) },
            PathCommand::ArcTo {
                radii: vec2(5.0, 5.0),
                flags: ArcFlags {
                    large_arc: false,
                    sweep: true,
                },
                to: vec2(0.0, 5.0),
            },
        ]
    );
}

#[test]
fn three_quarter_turn_takes_the_large_arc() {
    let path = arc_path::<f32, _>(
        [0.0, 0.0],
        5.0,
        Angle::radians(0.0),
        Angle::radians(3.0 * core::f32::consts::FRAC_PI_2),
    )
    .unwrap();

    match &path.commands()[1] {
        PathCommand::ArcTo { flags, to, .. } => {
            assert!(flags.large_arc);
            assert!(flags.sweep);
            assert_eq!(*to, vec2(0.0, -5.0));
        }
        other => panic!("expected an arc, got {:?}", other),
    }
}

#[test]
fn decreasing_angles_sweep_backwards() {
    let path = arc_path::<f32, _>(
        [0.0, 0.0],
        5.0,
        Angle::radians(core::f32::consts::FRAC_PI_2),
        Angle::radians(0.0),
    )
    .unwrap();

    match &path.commands()[1] {
        PathCommand::ArcTo { flags, to, .. } => {
            assert!(!flags.large_arc);
            assert!(!flags.sweep);
            assert_eq!(*to, vec2(5.0, 0.0));
        }
        other => panic!("expected an arc, got {:?}", other),
    }
}

#[test]
fn half_turn_is_not_large() {
    let exactly_half = arc_path::<f32, _>(
        [0.0, 0.0],
        5.0,
        Angle::radians(0.0),
        Angle::radians(core::f32::consts::PI),
    )
    .unwrap();
    match &exactly_half.commands()[1] {
        PathCommand::ArcTo { flags, .. } => assert!(!flags.large_arc),
        other => panic!("expected an arc, got {:?}", other),
    }

    // A hair over half a turn still counts as the small arc.
    let sliver_over = arc_path::<f32, _>(
        [0.0, 0.0],
        5.0,
        Angle::radians(0.0),
        Angle::radians(core::f32::consts::PI + 5e-7),
    )
    .unwrap();
    match &sliver_over.commands()[1] {
        PathCommand::ArcTo { flags, .. } => assert!(!flags.large_arc),
        other => panic!("expected an arc, got {:?}", other),
    }

    let well_over = arc_path::<f32, _>(
        [0.0, 0.0],
        5.0,
        Angle::radians(0.0),
        Angle::radians(core::f32::consts::PI + 0.1),
    )
    .unwrap();
    match &well_over.commands()[1] {
        PathCommand::ArcTo { flags, .. } => assert!(flags.large_arc),
        other => panic!("expected an arc, got {:?}", other),
    }
}

#[test]
fn offset_center() {
    let path = arc_path(
        PointLike::named(10.0f32, 10.0),
        5.0,
        Angle::radians(0.0),
        Angle::radians(core::f32::consts::FRAC_PI_2),
    )
    .unwrap();

    assert_eq!(
        path.commands()[0],
        PathCommand::MoveTo {
            to: vec2(15.0, 10.0)
        }
    );
    assert_eq!(path.commands()[1].to(), Some(&vec2(10.0, 15.0)));
}

#[test]
fn arc_input_validation() {
    assert_eq!(
        arc_path::<f32, _>([0.0, 0.0], f32::NAN, Angle::radians(0.0), Angle::radians(1.0)),
        Err(Error::NotANumber)
    );
    assert_eq!(
        arc_path::<f32, _>([0.0, 0.0], 5.0, Angle::radians(f32::INFINITY), Angle::radians(1.0)),
        Err(Error::NotANumber)
    );
    assert_eq!(
        arc_path::<f32, _>([0.0, 0.0, 0.0], 5.0, Angle::radians(0.0), Angle::radians(1.0)),
        Err(Error::DimensionMismatch {
            expected: 2,
            actual: 3
        })
    );
}
