//! # RRT
//! Contains the main RRT functionality: parameters, the planner loop and the planning result.
//!
use crate::collision::ObstacleSet;
use crate::common::Point;
use crate::path;
use crate::rrt_error::{RRTError, Result};
use crate::sampler::UniformSampler;
use crate::steering::{Steering, StraightLineSteering};
use crate::tree::Tree;
use crate::utils;
use config::Config;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, trace, warn};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RRTParams {
    pub max_iter: usize,
    pub step_size: f64,
    pub workspace_width: f64,
    pub workspace_height: f64,
}

impl Default for RRTParams {
    fn default() -> Self {
        Self {
            max_iter: 5000,
            step_size: 20.0,
            workspace_width: 800.0,
            workspace_height: 600.0,
        }
    }
}

impl RRTParams {
    pub fn from_json_value(json: serde_json::Value) -> Result<Self> {
        let params: Self = serde_json::from_value(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from any file format understood by the `config` crate; the extension
    /// may be omitted.
    pub fn from_file(filename: &str) -> Result<Self> {
        let params = Config::builder()
            .add_source(config::File::with_name(filename))
            .build()?
            .try_deserialize::<RRTParams>()?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_file(&self, filename: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(File::create(filename)?, &self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(RRTError::InvalidStepSize(self.step_size));
        }
        let (width, height) = (self.workspace_width, self.workspace_height);
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(RRTError::InvalidWorkspace { width, height });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "path")]
pub enum Outcome {
    Found(Vec<Point>),
    Exhausted,
}

/// Result of a single planner iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The steered point collided with an obstacle and was discarded.
    Rejected,
    Extended(usize),
    ReachedGoal(usize),
}

/// Snapshot of a finished planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RRTResult {
    pub tree: Tree,
    pub outcome: Outcome,
    pub iterations: usize,
    pub rejected: usize,
}

impl RRTResult {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }

    /// The start-to-goal path, empty when the run was exhausted.
    pub fn path(&self) -> &[Point] {
        match &self.outcome {
            Outcome::Found(path) => path,
            Outcome::Exhausted => &[],
        }
    }

    pub fn path_length(&self) -> f64 {
        utils::compute_path_length(self.path())
    }

    pub fn save_to_json(&self, filename: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(File::create(filename)?, &self)?;
        Ok(())
    }

    pub fn load_from_json(filename: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(filename)?;
        Ok(serde_json::from_reader(file)?)
    }
}

pub struct RRT {
    params: RRTParams,
    sampler: UniformSampler,
    steering: StraightLineSteering,
    x_goal: Point,
    tree: Tree,
}

impl RRT {
    /// Planner whose samples are fully determined by `seed`.
    pub fn new(params: RRTParams, seed: u64) -> Result<Self> {
        params.validate()?;
        let sampler =
            UniformSampler::new(params.workspace_width, params.workspace_height, seed)?;
        Ok(Self::with_sampler(params, sampler))
    }

    pub fn from_entropy(params: RRTParams) -> Result<Self> {
        params.validate()?;
        let sampler = UniformSampler::from_entropy(params.workspace_width, params.workspace_height)?;
        Ok(Self::with_sampler(params, sampler))
    }

    fn with_sampler(params: RRTParams, sampler: UniformSampler) -> Self {
        Self {
            params,
            sampler,
            steering: StraightLineSteering::new(params.step_size),
            x_goal: Vector2::zeros(),
            tree: Tree::new(),
        }
    }

    pub fn params(&self) -> &RRTParams {
        &self.params
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Discards the current tree and restarts it from `x_start`.
    pub fn set_init_state(&mut self, x_start: Point) {
        self.tree = Tree::with_root(x_start);
    }

    pub fn set_goal_state(&mut self, x_goal: Point) {
        self.x_goal = x_goal;
    }

    pub fn reached_goal(&self, point: &Point) -> bool {
        utils::distance(point, &self.x_goal) < self.params.step_size
    }

    /// Runs one sample, nearest, steer, collision check and insert cycle.
    pub fn step(&mut self, obstacles: &ObstacleSet) -> Result<StepOutcome> {
        let x_rand = self.sampler.sample();
        let nearest = self.tree.nearest(&x_rand).ok_or(RRTError::EmptyTree)?;
        let x_new = self.steering.steer(&self.tree[nearest].point, &x_rand);
        if obstacles.collides(&x_new) {
            trace!("Rejected ({:.2}, {:.2}): inside obstacle", x_new[0], x_new[1]);
            return Ok(StepOutcome::Rejected);
        }
        let index = self.tree.insert(x_new, Some(nearest))?;
        if self.reached_goal(&x_new) {
            return Ok(StepOutcome::ReachedGoal(index));
        }
        Ok(StepOutcome::Extended(index))
    }

    pub fn extract_solution(&self, leaf: usize) -> Vec<Point> {
        path::extract_path(&self.tree, leaf, &self.x_goal, self.params.step_size)
    }

    pub fn grow_towards_goal(
        &mut self,
        x_start: Point,
        x_goal: Point,
        obstacles: &ObstacleSet,
    ) -> Result<RRTResult> {
        self.set_init_state(x_start);
        self.set_goal_state(x_goal);
        debug!(
            "Growing tree from ({:.2}, {:.2}) towards ({:.2}, {:.2}) with {} obstacles, params: {:?}",
            x_start[0],
            x_start[1],
            x_goal[0],
            x_goal[1],
            obstacles.len(),
            self.params
        );

        let mut outcome = Outcome::Exhausted;
        let mut iterations = 0;
        let mut rejected = 0;
        while iterations < self.params.max_iter {
            iterations += 1;
            match self.step(obstacles)? {
                StepOutcome::Rejected => rejected += 1,
                StepOutcome::Extended(_) => {}
                StepOutcome::ReachedGoal(leaf) => {
                    outcome = Outcome::Found(self.extract_solution(leaf));
                    break;
                }
            }
        }

        match &outcome {
            Outcome::Found(path) => info!(
                "Path found after {} iterations: {} waypoints, length {:.2}, tree size {}",
                iterations,
                path.len(),
                utils::compute_path_length(path),
                self.tree.len()
            ),
            Outcome::Exhausted => warn!(
                "No path found within {} iterations ({} samples rejected, tree size {})",
                iterations,
                rejected,
                self.tree.len()
            ),
        }

        Ok(RRTResult {
            tree: self.tree.clone(),
            outcome,
            iterations,
            rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Rectangle;

    fn params(max_iter: usize) -> RRTParams {
        RRTParams {
            max_iter,
            ..RRTParams::default()
        }
    }

    #[test]
    fn test_default_params_are_valid() {
        let params = RRTParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.step_size, 20.0);
        assert_eq!(params.max_iter, 5000);
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        for step_size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = RRTParams {
                step_size,
                ..RRTParams::default()
            };
            assert!(matches!(
                RRT::new(params, 0),
                Err(RRTError::InvalidStepSize(_))
            ));
        }
        let params = RRTParams {
            workspace_width: -800.0,
            ..RRTParams::default()
        };
        assert!(matches!(
            RRT::new(params, 0),
            Err(RRTError::InvalidWorkspace { .. })
        ));
    }

    #[test]
    fn test_params_from_json_value() {
        let params = RRTParams::from_json_value(serde_json::json!({
            "max_iter": 100,
            "step_size": 5.0,
        }))
        .unwrap();
        assert_eq!(params.max_iter, 100);
        assert_eq!(params.step_size, 5.0);
        assert_eq!(params.workspace_width, 800.0);

        let err = RRTParams::from_json_value(serde_json::json!({ "step_size": -5.0 }));
        assert!(matches!(err, Err(RRTError::InvalidStepSize(_))));

        let err = RRTParams::from_json_value(serde_json::json!({ "max_iter": -5 }));
        assert!(matches!(err, Err(RRTError::Json(_))));
    }

    #[test]
    fn test_params_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("params.json");
        let params = RRTParams {
            max_iter: 42,
            step_size: 2.5,
            workspace_width: 100.0,
            workspace_height: 50.0,
        };
        params.to_file(&file).unwrap();
        let loaded = RRTParams::from_file(file.to_str().unwrap()).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_step_on_empty_tree() {
        let mut rrt = RRT::new(params(10), 0).unwrap();
        assert!(matches!(
            rrt.step(&ObstacleSet::empty()),
            Err(RRTError::EmptyTree)
        ));
    }

    #[test]
    fn test_step_extends_from_root() {
        let mut rrt = RRT::new(params(10), 3).unwrap();
        rrt.set_init_state(Vector2::new(400.0, 300.0));
        rrt.set_goal_state(Vector2::new(-1000.0, -1000.0));
        assert_eq!(rrt.step(&ObstacleSet::empty()).unwrap(), StepOutcome::Extended(1));
        let node = rrt.tree()[1];
        assert_eq!(node.parent, Some(0));
        assert!(utils::distance(&node.point, &rrt.tree()[0].point) <= 20.0 + 1e-9);
    }

    #[test]
    fn test_step_rejects_points_inside_obstacles() {
        // The whole workspace is covered, so every steered point collides.
        let obstacles = ObstacleSet::new(vec![Rectangle::new(-50.0, -50.0, 900.0, 700.0)]).unwrap();
        let mut rrt = RRT::new(params(10), 5).unwrap();
        rrt.set_init_state(Vector2::new(400.0, 300.0));
        for _ in 0..10 {
            assert_eq!(rrt.step(&obstacles).unwrap(), StepOutcome::Rejected);
        }
        assert_eq!(rrt.tree().len(), 1);
    }

    #[test]
    fn test_grow_towards_goal_open_workspace() {
        let mut rrt = RRT::new(params(5000), 11).unwrap();
        let start = Vector2::new(50.0, 50.0);
        let goal = Vector2::new(750.0, 550.0);
        let result = rrt
            .grow_towards_goal(start, goal, &ObstacleSet::empty())
            .unwrap();
        assert!(result.is_found());
        assert_eq!(result.path()[0], start);
        assert!(utils::distance(result.path().last().unwrap(), &goal) < 20.0);
        assert_eq!(result.rejected, 0);
        assert_eq!(result.tree.len(), result.iterations + 1);
        assert!(result.path_length() >= utils::distance(&start, &goal) - 20.0);
    }

    #[test]
    fn test_grow_resets_previous_tree() {
        let mut rrt = RRT::new(params(50), 2).unwrap();
        let goal = Vector2::new(-1000.0, -1000.0);
        rrt.grow_towards_goal(Vector2::new(1.0, 1.0), goal, &ObstacleSet::empty())
            .unwrap();
        let result = rrt
            .grow_towards_goal(Vector2::new(2.0, 2.0), goal, &ObstacleSet::empty())
            .unwrap();
        assert_eq!(result.tree.len(), 51);
        assert_eq!(result.tree[0].point, Vector2::new(2.0, 2.0));
        assert!(result.tree.iter().skip(1).all(|node| node.parent.is_some()));
    }

    #[test]
    fn test_result_json_roundtrip() {
        let mut rrt = RRT::new(params(2000), 8).unwrap();
        let result = rrt
            .grow_towards_goal(
                Vector2::new(10.0, 10.0),
                Vector2::new(200.0, 100.0),
                &ObstacleSet::empty(),
            )
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rrt_result.json");
        result.save_to_json(&file).unwrap();
        let loaded = RRTResult::load_from_json(&file).unwrap();
        assert_eq!(loaded.outcome, result.outcome);
        assert_eq!(loaded.tree.len(), result.tree.len());
        assert_eq!(loaded.iterations, result.iterations);
    }

    #[test]
    fn test_load_rejects_snapshot_with_broken_tree() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rrt_result.json");
        std::fs::write(
            &file,
            r#"{
                "tree": [{"point": [0.0, 0.0], "parent": 5}],
                "outcome": {"status": "Exhausted"},
                "iterations": 0,
                "rejected": 0
            }"#,
        )
        .unwrap();
        assert!(matches!(
            RRTResult::load_from_json(&file),
            Err(RRTError::Json(_))
        ));
    }

    #[test]
    fn test_exhausted_outcome_json_shape() {
        let json = serde_json::to_value(Outcome::Exhausted).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "Exhausted" }));
    }
}
