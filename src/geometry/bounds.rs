// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshspell Inc.

//! Bounding sphere utilities

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Bounding sphere fitted around a vertex cloud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundSphere {
    pub center: Point3<f32>,
    pub radius: f32,
}

impl BoundSphere {
    pub fn new(center: Point3<f32>, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Fit with the average of all points as the center.
    pub fn from_points(points: &[Point3<f32>]) -> Self {
        if points.is_empty() {
            return Self::new(Point3::origin(), 0.0);
        }

        let mut center = Point3::origin();
        for point in points {
            center.coords += point.coords;
        }
        center.coords /= points.len() as f32;

        Self::with_radius_from(center, points)
    }

    /// Fit with the min/max box midpoint as the center.
    ///
    /// Volatile meshes store bounds computed this way instead of the average
    /// center, so both rules are available.
    pub fn from_points_box_center(points: &[Point3<f32>]) -> Self {
        if points.is_empty() {
            return Self::new(Point3::origin(), 0.0);
        }

        let mut min = points[0];
        let mut max = points[0];
        for point in points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);

            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        let center = Point3::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        );

        Self::with_radius_from(center, points)
    }

    fn with_radius_from(center: Point3<f32>, points: &[Point3<f32>]) -> Self {
        let mut radius = 0.0f32;
        for point in points {
            radius = radius.max((center - point).norm());
        }
        Self::new(center, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_cube_corners() -> Vec<Point3<f32>> {
        let mut corners = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    corners.push(Point3::new(x, y, z));
                }
            }
        }
        corners
    }

    #[test]
    fn test_average_center_of_cube() {
        let sphere = BoundSphere::from_points(&unit_cube_corners());

        assert_relative_eq!(sphere.center.x, 0.5);
        assert_relative_eq!(sphere.center.y, 0.5);
        assert_relative_eq!(sphere.center.z, 0.5);
        // Radius reaches the corners: half the space diagonal.
        assert_relative_eq!(sphere.radius, (3.0f32).sqrt() / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_box_center_differs_from_average_on_skewed_cloud() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ];

        let average = BoundSphere::from_points(&points);
        let boxed = BoundSphere::from_points_box_center(&points);

        assert_relative_eq!(average.center.x, 1.0);
        assert_relative_eq!(boxed.center.x, 2.0);
        assert_relative_eq!(average.radius, 3.0);
        assert_relative_eq!(boxed.radius, 2.0);
    }

    #[test]
    fn test_empty_cloud_collapses_to_origin() {
        let sphere = BoundSphere::from_points(&[]);
        assert_eq!(sphere.center, Point3::origin());
        assert_eq!(sphere.radius, 0.0);
    }
}
