//! # Collision
//! Point-versus-rectangle collision checking. Only the steered point itself is tested, the edge
//! leading to it is not swept, so an obstacle thinner than one step can be tunnelled through.
use crate::common::{Point, Rectangle};
use crate::rrt_error::{RRTError, Result};
use crate::utils;
use serde::{Deserialize, Serialize};

pub fn collides(point: &Point, obstacles: &[Rectangle]) -> bool {
    obstacles
        .iter()
        .any(|rect| utils::point_in_rectangle(point, rect))
}

/// Validated set of obstacles, fixed for the duration of a planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rectangle>", into = "Vec<Rectangle>")]
pub struct ObstacleSet {
    obstacles: Vec<Rectangle>,
}

impl ObstacleSet {
    pub fn new(obstacles: Vec<Rectangle>) -> Result<Self> {
        if let Some((index, rect)) = obstacles.iter().enumerate().find(|(_, r)| !r.is_valid()) {
            return Err(RRTError::InvalidObstacle {
                index,
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(Self { obstacles })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn collides(&self, point: &Point) -> bool {
        if self.is_empty() {
            return false;
        }
        collides(point, &self.obstacles)
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.obstacles
    }
}

impl TryFrom<Vec<Rectangle>> for ObstacleSet {
    type Error = RRTError;

    fn try_from(obstacles: Vec<Rectangle>) -> Result<Self> {
        Self::new(obstacles)
    }
}

impl From<ObstacleSet> for Vec<Rectangle> {
    fn from(set: ObstacleSet) -> Self {
        set.obstacles
    }
}
