//! # Scenario
//! Start, goal and obstacles for one planning run, either generated at random for demos or
//! loaded from a JSON file.
use crate::collision::ObstacleSet;
use crate::common::{Point, Rectangle};
use crate::rrt::RRTParams;
use crate::rrt_error::{RRTError, Result};
use nalgebra::Vector2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub const MIN_OBSTACLE_SIDE: u32 = 10;
pub const MAX_OBSTACLE_SIDE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub start: Point,
    pub goal: Point,
    pub obstacles: ObstacleSet,
}

impl Scenario {
    /// Places start, goal and `n_obstacles` obstacles on whole-unit coordinates inside the
    /// workspace. Obstacle sides are between 10 and 50 units and may overlap start or goal.
    pub fn random(n_obstacles: usize, params: &RRTParams, seed: u64) -> Result<Self> {
        params.validate()?;
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let max_x = params.workspace_width.floor() as u32;
        let max_y = params.workspace_height.floor() as u32;

        let start = random_point(&mut rng, max_x, max_y);
        let goal = random_point(&mut rng, max_x, max_y);
        let obstacles = (0..n_obstacles)
            .map(|_| {
                let corner = random_point(&mut rng, max_x, max_y);
                let width = rng.gen_range(MIN_OBSTACLE_SIDE..=MAX_OBSTACLE_SIDE);
                let height = rng.gen_range(MIN_OBSTACLE_SIDE..=MAX_OBSTACLE_SIDE);
                Rectangle::new(corner[0], corner[1], width as f64, height as f64)
            })
            .collect();

        Ok(Self {
            start,
            goal,
            obstacles: ObstacleSet::new(obstacles)?,
        })
    }

    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(filename)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn to_file(&self, filename: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(File::create(filename)?, &self)?;
        Ok(())
    }
}

fn random_point(rng: &mut ChaChaRng, max_x: u32, max_y: u32) -> Point {
    Vector2::new(rng.gen_range(0..=max_x) as f64, rng.gen_range(0..=max_y) as f64)
}

/// Parses a user supplied obstacle count, rejecting negative and malformed input.
pub fn parse_obstacle_count(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| RRTError::InvalidObstacleCount(input.to_string()))
}
