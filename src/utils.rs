//! # utils
//! Contains geometric utility functions for the RRT algorithm
//!
use crate::common::{Point, Rectangle};
use nalgebra::Vector2;

pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p1 - p2).norm()
}

/// Inclusive containment test, points on an edge or corner count as inside.
pub fn point_in_rectangle(p: &Point, rect: &Rectangle) -> bool {
    p[0] >= rect.x && p[0] <= rect.x + rect.width && p[1] >= rect.y && p[1] <= rect.y + rect.height
}

pub fn bbox_from_corner_points(p1: &Point, p2: &Point, buffer: f64) -> Rectangle {
    let p_min = Vector2::new(p1[0].min(p2[0]) - buffer, p1[1].min(p2[1]) - buffer);
    let p_max = Vector2::new(p1[0].max(p2[0]) + buffer, p1[1].max(p2[1]) + buffer);
    Rectangle::new(p_min[0], p_min[1], p_max[0] - p_min[0], p_max[1] - p_min[1])
}

pub fn compute_path_length(path: &[Point]) -> f64 {
    path.iter()
        .zip(path.iter().skip(1))
        .map(|(p1, p2)| distance(p1, p2))
        .sum()
}
