//! Shared setup helpers for convex-contact benchmarks.
//!
//! ## Running
//!
//! All benches (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- gjk
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- manifold

use convex_contact::{ConvexHull, RigidBody};
use glam::{Quat, Vec3};

/// Axis-aligned unit cube (half extent 0.5) at `position`.
pub fn unit_cube(position: Vec3) -> RigidBody {
    RigidBody::new(
        position,
        Quat::IDENTITY,
        ConvexHull::cuboid(Vec3::splat(0.5)),
    )
}

/// Unit cube rotated around a skew axis, so no face pair is axis-aligned.
pub fn rotated_cube(position: Vec3, angle: f32) -> RigidBody {
    RigidBody::new(
        position,
        Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.3).normalize(), angle),
        ConvexHull::cuboid(Vec3::splat(0.5)),
    )
}

/// Body pairs overlapping by `depth` along the X axis.
pub fn overlapping_pairs(n: usize, depth: f32) -> Vec<(RigidBody, RigidBody)> {
    (0..n)
        .map(|i| {
            let base = Vec3::new(0.0, 0.0, i as f32 * 3.0);
            (
                unit_cube(base),
                rotated_cube(base + Vec3::new(1.0 - depth, 0.0, 0.0), 0.1 * i as f32),
            )
        })
        .collect()
}

/// Body with an arbitrary convex hull (fails on an empty vertex list).
pub fn hull_body(position: Vec3, points: Vec<Vec3>) -> anyhow::Result<RigidBody> {
    Ok(RigidBody::new(
        position,
        Quat::IDENTITY,
        ConvexHull::new(points)?,
    ))
}

/// Regular tetrahedron hull, the smallest full-dimensional convex shape.
pub fn tetrahedron(position: Vec3) -> anyhow::Result<RigidBody> {
    hull_body(
        position,
        vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ],
    )
}

/// Body pairs with a clear gap, exercising the GJK early-out.
pub fn separated_pairs(n: usize) -> Vec<(RigidBody, RigidBody)> {
    (0..n)
        .map(|i| {
            let base = Vec3::new(0.0, 0.0, i as f32 * 3.0);
            (unit_cube(base), unit_cube(base + Vec3::new(5.0, 0.0, 0.0)))
        })
        .collect()
}
