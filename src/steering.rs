//! # Steering
//! Bounded straight-line extension from a tree point towards a sampled point.
//!
use crate::common::Point;
use crate::utils;
use nalgebra::Vector2;

pub trait Steering {
    fn steer(&self, from: &Point, to: &Point) -> Point;
}

/// Moves at most `step_size` along the heading from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct StraightLineSteering {
    step_size: f64,
}

impl StraightLineSteering {
    pub fn new(step_size: f64) -> Self {
        Self { step_size }
    }
}

impl Steering for StraightLineSteering {
    fn steer(&self, from: &Point, to: &Point) -> Point {
        if utils::distance(from, to) <= self.step_size {
            return *to;
        }
        let theta = f64::atan2(to[1] - from[1], to[0] - from[0]);
        Vector2::new(
            from[0] + self.step_size * theta.cos(),
            from[1] + self.step_size * theta.sin(),
        )
    }
}
