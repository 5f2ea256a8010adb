//! Pairwise collision predicates
//!
//! Each predicate reads the *current* world-space geometry of its operands,
//! never their construction parameters, and fills a fresh
//! [`CollisionResult`]. Operands are never mutated.

use super::dispatch::CollisionError;
use super::primitives::{Cuboid, Plane, Sphere};
use super::result::CollisionResult;
use crate::config::CollisionOptions;
use crate::foundation::geometry;
use crate::foundation::math::{utils, Vec3};
use crate::verbose;

/// Sphere against sphere
///
/// Collides when the surface-to-surface distance is below `atol` or within
/// `atol` of zero, so touching spheres collide.
pub fn sphere_sphere(first: &Sphere, second: &Sphere, opts: &CollisionOptions) -> CollisionResult {
    verbose!(opts, "calculating collision between two spheres");
    let mut result = CollisionResult::new();

    let distance = (first.position() - second.position()).norm();
    result.insert("distance", distance);
    verbose!(opts, " absolute distance is: {}", distance);

    let outer = distance - (first.radius() + second.radius());
    result.insert("outerdistance", outer);
    verbose!(opts, " outer distance is: {}", outer);

    result.set_collision(outer < opts.atol || utils::is_close(outer, 0.0, opts.atol));

    verbose!(opts, " collision: {}", result.collision());
    result
}

/// Whether any world-space corner of `first` lies inside `second`
fn corners_inside(first: &Cuboid, second: &Cuboid, opts: &CollisionOptions) -> bool {
    let reference = second.volume();
    first.corners().iter().any(|corner| {
        let volume = second.volume_at(corner);
        verbose!(opts, " c={:?} vol={} vol_ref={}", corner.as_slice(), volume, reference);
        utils::is_close_rel(volume, reference, opts.atol, opts.atol)
    })
}

/// Box against box by corner containment
///
/// Corners of the first box are tested against the second box, and only if
/// none is inside, the other way round.
pub fn box_box(first: &Cuboid, second: &Cuboid, opts: &CollisionOptions) -> CollisionResult {
    verbose!(opts, "calculating collision between two boxes");
    verbose!(opts, " atol={}", opts.atol);
    let mut result = CollisionResult::new();

    if corners_inside(first, second, opts) {
        result.set_collision(true);
        result.insert("corner_hit", "first_in_second");
    } else if corners_inside(second, first, opts) {
        result.set_collision(true);
        result.insert("corner_hit", "second_in_first");
    }

    verbose!(opts, " collision: {}", result.collision());
    result
}

/// Plane against plane
///
/// Non-parallel planes always cross in a line. Parallel planes collide only
/// when their distances agree within `atol`.
pub fn plane_plane(
    first: &Plane,
    second: &Plane,
    opts: &CollisionOptions,
) -> Result<CollisionResult, CollisionError> {
    verbose!(opts, "calculating collision between two planes");
    let mut result = CollisionResult::new();

    let n1 = unit_normal(first)?;
    let n2 = unit_normal(second)?;
    let (d1, d2) = (first.distance(), second.distance());

    let cross_norm = n1.cross(&n2).norm();
    result.insert("cross_norm", cross_norm);
    verbose!(opts, " |n1 x n2| = {}", cross_norm);

    if !utils::is_close(cross_norm, 0.0, opts.atol) {
        result.set_collision(true);
        result.insert("type", "crossing");
        if let Some((point, direction)) = geometry::plane_plane_intersection(&n1, d1, &n2, d2, opts.atol) {
            verbose!(opts, " line point={:?} direction={:?}", point.as_slice(), direction.as_slice());
            result.insert("point", point);
            result.insert("direction", direction);
        }
    } else if utils::is_close(d1, d2, opts.atol) {
        result.set_collision(true);
        result.insert("type", "identical");
    } else {
        verbose!(opts, " parallel planes at {} and {}", d1, d2);
    }

    verbose!(opts, " collision: {}", result.collision());
    Ok(result)
}

/// Sphere against plane
///
/// Only surface contact (`|outer distance| <= atol`) counts unless
/// [`CollisionOptions::sphere_plane_penetration`] is set, in which case any
/// outer distance below `atol` does.
pub fn sphere_plane(
    sphere: &Sphere,
    plane: &Plane,
    opts: &CollisionOptions,
) -> Result<CollisionResult, CollisionError> {
    verbose!(opts, "calculating collision between sphere and plane");
    let mut result = CollisionResult::new();

    let normal = unit_normal(plane)?;
    let distance = (sphere.position().dot(&normal) - plane.distance()).abs();
    result.insert("distance", distance);
    verbose!(opts, " distance center-plane is: {}", distance);

    let outer = distance - sphere.radius();
    result.insert("outerdistance", outer);
    verbose!(opts, " outer distance is: {}", outer);

    let touching = utils::is_close(outer, 0.0, opts.atol);
    let penetrating = opts.sphere_plane_penetration && outer < opts.atol;
    result.set_collision(touching || penetrating);

    verbose!(opts, " collision: {}", result.collision());
    Ok(result)
}

/// Box against plane
///
/// Collides when a corner touches the plane or the corners lie on both
/// sides. For colliding pairs the cross-section polygon is estimated from
/// the edge/plane intersections that lie within the box.
pub fn box_plane(
    cuboid: &Cuboid,
    plane: &Plane,
    opts: &CollisionOptions,
) -> Result<CollisionResult, CollisionError> {
    verbose!(opts, "calculating collision between box and plane");
    let mut result = CollisionResult::new();

    let normal = unit_normal(plane)?;
    let d = plane.distance();

    let (mut positive, mut negative, mut touching) = (0_usize, 0_usize, 0_usize);
    for corner in cuboid.corners() {
        let signed = corner.dot(&normal) - d;
        verbose!(opts, " corner {:?} distance={}", corner.as_slice(), signed);
        if utils::is_close(signed, 0.0, opts.atol) {
            touching += 1;
        } else if signed > opts.atol {
            positive += 1;
        } else {
            negative += 1;
        }
    }
    result.insert("positive", positive);
    result.insert("negative", negative);
    result.insert("touching", touching);

    let collision = touching > 0 || (positive > 0 && negative > 0);
    result.set_collision(collision);

    if collision {
        let polygon = cross_section(cuboid, &normal, d, opts)?;
        verbose!(opts, " cross-section with {} points", polygon.len());
        result.insert("polygon", polygon);
    }

    verbose!(opts, " collision: {}", result.collision());
    Ok(result)
}

/// Best-effort polygon where the plane cuts the box
fn cross_section(
    cuboid: &Cuboid,
    normal: &Vec3,
    d: f64,
    opts: &CollisionOptions,
) -> Result<Vec<Vec3>, CollisionError> {
    let mut points: Vec<Vec3> = Vec::new();

    for (p0, p1) in cuboid.edges() {
        let Some(point) = geometry::line_plane_intersection(&p0, &p1, normal, d, opts.atol) else {
            verbose!(opts, " edge parallel to plane, skipped");
            continue;
        };
        if !cuboid.contains_point(&point, opts.atol) {
            continue;
        }
        // Corners on the plane are reached from several edges
        if points.iter().any(|p| (p - point).norm() <= opts.atol) {
            continue;
        }
        points.push(point);
    }

    if points.len() >= 4 {
        points = geometry::sort_polygon(&points, normal)?;
    }
    Ok(points)
}

/// The normalized world-space normal of a plane
///
/// A rotation can collapse the normal (rotations are not checked for
/// orthonormality); that is reported instead of producing NaNs.
fn unit_normal(plane: &Plane) -> Result<Vec3, CollisionError> {
    let normal = plane.norm_vector();
    geometry::point_of_plane(&normal, plane.distance())?;
    Ok(normal.normalize())
}
