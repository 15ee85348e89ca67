//! # Common types
//! Points, obstacle rectangles and tree nodes shared by every part of the planner.
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A position in the workspace.
pub type Point = Vector2<f64>;

/// Axis-aligned rectangle given by its lower corner and its extent. Bounds are inclusive on
/// every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Point {
        Vector2::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Vector2::new(self.x + self.width, self.y + self.height)
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RRTNode {
    pub point: Point,
    /// Index of the parent node in the tree, `None` only for the root.
    pub parent: Option<usize>,
}

impl RRTNode {
    pub fn new(point: Point, parent: Option<usize>) -> Self {
        Self { point, parent }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
