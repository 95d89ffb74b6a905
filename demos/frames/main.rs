//! Frame conversion walkthrough.
//!
//! ```text
//! cargo run --example frames --features tracing
//! RUST_LOG=geoprim=debug cargo run --example frames --features tracing
//! ```
//!
//! Builds a tilted part frame, moves points between world and part
//! coordinates, projects them into a sketch plane and shows the error
//! returned for a non-orthogonal basis.

use geoprim::{
    Angle, Axis3d, Direction3d, Frame3d, GeoprimError, Length, Meters, Point3d, Rotation3d,
    SketchPlane3d, Vector3d,
};

enum World {}
enum Part {}
enum Sketch {}

fn main() -> Result<(), GeoprimError> {
    // Default: WARN for everything, INFO for the demo.
    // Override with RUST_LOG (e.g. RUST_LOG=geoprim=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("frames=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let tilt = Rotation3d::around(&Axis3d::<Meters, World>::x(), Angle::degrees(30.0));
    let origin = Point3d::<Meters, World>::meters(1.0, 2.0, 0.5);
    let part = Frame3d::<Meters, World, Part>::with_directions(
        origin,
        tilt.rotate_direction(Direction3d::x()),
        tilt.rotate_direction(Direction3d::y()),
        tilt.rotate_direction(Direction3d::z()),
    )?;
    tracing::info!(right_handed = part.is_right_handed(), "part frame ready");

    let corners = [
        Point3d::<Meters, World>::meters(1.0, 2.0, 0.5),
        Point3d::meters(2.0, 2.0, 0.5),
        Point3d::meters(1.0, 3.0, 1.5),
    ];
    for corner in corners {
        let local = corner.relative_to(&part);
        let back = local.place_in(&part);
        let (x, y, z) = local.coordinates();
        tracing::info!(
            x = x.raw(),
            y = y.raw(),
            z = z.raw(),
            round_trip_error = back.distance_from(corner).raw(),
            "corner in part coordinates"
        );
    }

    let sketch: SketchPlane3d<Meters, World, Sketch> = part.xy_sketch_plane();
    let lifted = corners[2] + Vector3d::meters(0.0, 0.0, 1.0);
    let projected = lifted.project_into(&sketch);
    let (u, v) = projected.coordinates();
    tracing::info!(u = u.raw(), v = v.raw(), "projected into part sketch plane");
    let height = lifted.signed_distance_from(&sketch.to_plane());
    tracing::info!(height = height.raw(), "height above sketch plane");
    let foot = lifted - Vector3d::with_length(height, sketch.normal_direction());
    tracing::info!(
        consistent = Point3d::on(&sketch, projected).equal_within(Length::meters(1e-9), foot),
        "projection agrees with the plane foot"
    );

    let skewed = Frame3d::<Meters, World, Part>::with_directions(
        origin,
        Direction3d::x(),
        Direction3d::from_azimuth_and_elevation(Angle::degrees(80.0), Angle::degrees(0.0)),
        Direction3d::z(),
    );
    match skewed {
        Ok(_) => tracing::warn!("skewed basis unexpectedly accepted"),
        Err(error) => tracing::info!(%error, "skewed basis rejected"),
    }
    Ok(())
}
