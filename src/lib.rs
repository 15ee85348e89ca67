//! # RRT Rust
//! Implements a Rapidly-exploring Random Tree (RRT) algorithm in Rust for a point robot in a
//! 2D workspace with axis-aligned rectangular obstacles.
//!
//! ## Usage
//! Build an [`rrt::RRTParams`], hand the planner a start, a goal and an [`collision::ObstacleSet`],
//! and inspect the returned [`rrt::RRTResult`]:
//!
//! ```no_run
//! use nalgebra::Vector2;
//! use rrt_rust::collision::ObstacleSet;
//! use rrt_rust::common::Rectangle;
//! use rrt_rust::rrt::{RRTParams, RRT};
//!
//! let params = RRTParams::default();
//! let obstacles = ObstacleSet::new(vec![Rectangle::new(300.0, 200.0, 50.0, 50.0)]).unwrap();
//! let mut rrt = RRT::new(params, 42).unwrap();
//! let result = rrt
//!     .grow_towards_goal(Vector2::new(10.0, 10.0), Vector2::new(700.0, 500.0), &obstacles)
//!     .unwrap();
//! println!("found: {}, path: {:?}", result.is_found(), result.path());
//! ```
pub mod collision;
pub mod common;
pub mod draw;
pub mod path;
pub mod rrt;
pub mod rrt_error;
pub mod sampler;
pub mod scenario;
pub mod steering;
pub mod tree;
pub mod utils;

pub use rrt_error::{RRTError, Result};
