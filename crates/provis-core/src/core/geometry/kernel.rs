use nalgebra::{Point3, Vector3};

/// Returns the unit vector of `v`, or the zero vector when `v` has zero
/// magnitude.
///
/// This is the engine-wide degenerate-input policy: normalizing the zero
/// vector is defined, not a fault.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm == 0.0 { Vector3::zeros() } else { v / norm }
}

/// Arithmetic mean of a set of points; the origin for an empty set.
pub fn centroid(points: &[Point3<f64>]) -> Point3<f64> {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Point3::from(sum / points.len() as f64)
}

/// Euclidean distance between two points.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}
