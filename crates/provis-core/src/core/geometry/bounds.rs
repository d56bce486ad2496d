use nalgebra::{Point3, Vector3};
use serde::Serialize;

/// An axis-aligned bounding box over a set of points.
///
/// Built from a point set via [`BoundingBox::from_points`]; `min[i] <=
/// max[i]` holds on every axis whenever the set was non-empty. The empty set
/// yields the all-zero box by convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Component-wise min/max over all points; the all-zero box for an empty
    /// slice.
    pub fn from_points(points: &[Point3<f64>]) -> Self {
        if points.is_empty() {
            return Self {
                min: Point3::origin(),
                max: Point3::origin(),
            };
        }
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        Self { min, max }
    }

    /// Midpoint of `min` and `max`.
    pub fn center(&self) -> Point3<f64> {
        Point3::from((self.min.coords + self.max.coords) / 2.0)
    }

    /// Extent of the box per axis (`max - min`).
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// True iff every component of `p` lies in `[min[i], max[i]]` inclusive.
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }

    /// A box with `min` shrunk and `max` grown by `margin` on every axis.
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector3::new(margin, margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point3<f64>> {
        vec![
            Point3::new(1.0, -2.0, 5.0),
            Point3::new(-3.0, 4.0, 0.0),
            Point3::new(2.0, 1.0, -1.0),
        ]
    }

    #[test]
    fn from_points_takes_componentwise_extrema() {
        let bbox = BoundingBox::from_points(&sample_points());
        assert_eq!(bbox.min, Point3::new(-3.0, -2.0, -1.0));
        assert_eq!(bbox.max, Point3::new(2.0, 4.0, 5.0));
        for i in 0..3 {
            assert!(bbox.min[i] <= bbox.max[i]);
        }
    }

    #[test]
    fn empty_input_yields_zero_box() {
        let bbox = BoundingBox::from_points(&[]);
        assert_eq!(bbox.min, Point3::origin());
        assert_eq!(bbox.max, Point3::origin());
        assert_eq!(bbox.size(), Vector3::zeros());
        assert_eq!(bbox.center(), Point3::origin());
    }

    #[test]
    fn center_is_midpoint_and_contained() {
        let bbox = BoundingBox::from_points(&sample_points());
        assert_eq!(bbox.center(), Point3::new(-0.5, 1.0, 2.0));
        assert!(bbox.contains(&bbox.center()));
    }

    #[test]
    fn size_is_max_minus_min() {
        let bbox = BoundingBox::from_points(&sample_points());
        assert_eq!(bbox.size(), Vector3::new(5.0, 6.0, 6.0));
    }

    #[test]
    fn contains_is_inclusive_on_the_boundary() {
        let bbox = BoundingBox::from_points(&sample_points());
        assert!(bbox.contains(&bbox.min));
        assert!(bbox.contains(&bbox.max));
        assert!(!bbox.contains(&Point3::new(2.1, 0.0, 0.0)));
    }

    #[test]
    fn expanded_grows_every_axis_by_margin() {
        let bbox = BoundingBox::from_points(&sample_points()).expanded(1.5);
        assert_eq!(bbox.min, Point3::new(-4.5, -3.5, -2.5));
        assert_eq!(bbox.max, Point3::new(3.5, 5.5, 6.5));
    }
}
