//! Stateless vector and plane geometry
//!
//! Planes are given in Hessian form: all points `x` with `x · n̂ = d`, where
//! `n̂` is the normalized normal vector and `d` the signed distance from the
//! origin.

use crate::foundation::math::{utils, Vec3};
use crate::foundation::validation::ValidationError;
use rand::Rng;

/// Vector projection of `v` onto `reference`
pub fn projection_vector(v: &Vec3, reference: &Vec3) -> Vec3 {
    reference * (v.dot(reference) / reference.norm_squared())
}

/// Signed length of the projection of `v` onto `reference`
pub fn projection_length(v: &Vec3, reference: &Vec3) -> f64 {
    v.dot(reference) / reference.norm()
}

/// Signed distance of `point` from the plane `x · n̂ = d`
pub fn distance_to_plane(point: &Vec3, normal: &Vec3, d: f64) -> f64 {
    projection_length(point, normal) - d
}

/// Volume of the pyramid with a quadrilateral base and the given apex
///
/// The base is assumed planar and a parallelogram; its area is taken from the
/// cross product of the first edge and the first diagonal.
pub fn pyramid_volume(face: &[Vec3; 4], apex: &Vec3) -> f64 {
    let v1 = face[0] - face[1];
    let v2 = face[0] - face[2];

    // |v1 x v2| is the area of the base
    let normal = v1.cross(&v2);
    let area = normal.norm();
    if area <= f64::EPSILON {
        return 0.0;
    }

    let height = (apex - face[0]).dot(&normal).abs() / area;
    area * height / 3.0
}

/// A unit vector perpendicular to `normal`
pub fn orthogonal_vector(normal: &Vec3) -> Result<Vec3, ValidationError> {
    let n = unit(normal, "normal")?;
    let candidate = if n.x.abs() > f64::EPSILON || n.y.abs() > f64::EPSILON {
        Vec3::new(-n.y, n.x, 0.0)
    } else {
        Vec3::new(1.0, 0.0, 0.0)
    };
    Ok(candidate.normalize())
}

/// Two unit vectors spanning the plane with the given normal
///
/// The second vector is `n̂ × v`, so `(v, w, n̂)` is right handed.
pub fn plane_vectors(normal: &Vec3) -> Result<(Vec3, Vec3), ValidationError> {
    let n = unit(normal, "normal")?;
    let v = orthogonal_vector(&n)?;
    let w = n.cross(&v).normalize();
    Ok((v, w))
}

/// The point of the plane `x · n̂ = d` closest to the origin
pub fn point_of_plane(normal: &Vec3, d: f64) -> Result<Vec3, ValidationError> {
    Ok(unit(normal, "normal")? * d)
}

/// A random point of the plane within `scale` of [`point_of_plane`] along
/// each spanning vector
pub fn point_of_plane_random<R: Rng>(
    normal: &Vec3,
    d: f64,
    scale: f64,
    rng: &mut R,
) -> Result<Vec3, ValidationError> {
    let origin = point_of_plane(normal, d)?;
    let (v, w) = plane_vectors(normal)?;
    if scale <= 0.0 {
        return Ok(origin);
    }
    let a = rng.gen_range(-scale..=scale);
    let b = rng.gen_range(-scale..=scale);
    Ok(origin + v * a + w * b)
}

/// Intersection of the infinite line through `p0` and `p1` with a plane
///
/// Returns `None` when the line is (within `atol`) parallel to the plane or
/// the two points coincide.
pub fn line_plane_intersection(
    p0: &Vec3,
    p1: &Vec3,
    normal: &Vec3,
    d: f64,
    atol: f64,
) -> Option<Vec3> {
    let direction = p1 - p0;
    let length = direction.norm();
    let normal_length = normal.norm();
    if length <= f64::EPSILON || normal_length <= f64::EPSILON {
        return None;
    }

    let n = normal / normal_length;
    let u = direction / length;
    let denom = u.dot(&n);
    if denom.abs() < atol {
        return None;
    }

    let t = (d - p0.dot(&n)) / denom;
    Some(p0 + u * t)
}

/// Intersection line of two planes as `(point, direction)`
///
/// Returns `None` for parallel planes, i.e. when `|n̂1 × n̂2|` is within
/// `atol` of zero.
pub fn plane_plane_intersection(
    n1: &Vec3,
    d1: f64,
    n2: &Vec3,
    d2: f64,
    atol: f64,
) -> Option<(Vec3, Vec3)> {
    let n1 = n1.try_normalize(f64::EPSILON)?;
    let n2 = n2.try_normalize(f64::EPSILON)?;

    let direction = n1.cross(&n2);
    if utils::is_close(direction.norm(), 0.0, atol) {
        return None;
    }

    let c = n1.dot(&n2);
    let det = 1.0 - c * c;
    let c1 = (d1 - d2 * c) / det;
    let c2 = (d2 - d1 * c) / det;

    Some((n1 * c1 + n2 * c2, direction))
}

/// Arithmetic mean of a set of points
pub fn polygon_center(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::zeros();
    }
    points.iter().sum::<Vec3>() / points.len() as f64
}

/// Sort coplanar points into polygon order around their center
///
/// Each point is keyed by its angle `atan2(r · w, r · v)` in `[-π, π]`, with
/// `r` the offset from the center and `(v, w)` the spanning vectors of the
/// plane. Points straight behind `v` land at the ends of that range.
pub fn sort_polygon(points: &[Vec3], normal: &Vec3) -> Result<Vec<Vec3>, ValidationError> {
    let (v, w) = plane_vectors(normal)?;
    let center = polygon_center(points);

    let mut keyed: Vec<(f64, Vec3)> = points
        .iter()
        .map(|p| {
            let r = p - center;
            (r.dot(&w).atan2(r.dot(&v)), *p)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, p)| p).collect())
}

fn unit(v: &Vec3, field: &str) -> Result<Vec3, ValidationError> {
    v.try_normalize(f64::EPSILON)
        .ok_or_else(|| ValidationError::ZeroVector { field: field.to_string() })
}
