//! Custom error for the RRT library.
//!
//! Running out of iterations is not an error, it is reported through
//! [`crate::rrt::Outcome::Exhausted`].
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RRTError {
    #[error("invalid step size {0}: must be a positive, finite number")]
    InvalidStepSize(f64),

    #[error("invalid workspace {width} x {height}: dimensions must be finite and non-negative")]
    InvalidWorkspace { width: f64, height: f64 },

    #[error("invalid obstacle count '{0}': expected a non-negative integer")]
    InvalidObstacleCount(String),

    #[error(
        "invalid obstacle #{index} (x: {x}, y: {y}, width: {width}, height: {height}): \
         coordinates must be finite and dimensions non-negative"
    )]
    InvalidObstacle {
        index: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("tree is empty, set an initial state before growing it")]
    EmptyTree,

    #[error("tree already has a root node")]
    RootExists,

    #[error("parent index {parent} is out of range for a tree with {len} nodes")]
    InvalidParent { parent: usize, len: usize },

    #[error("failed to draw: {0}")]
    Draw(String),

    #[error("failed to load parameters: {0}")]
    Config(#[from] config::ConfigError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RRTError>;

pub fn map_err_to_draw_err<E>(e: E) -> RRTError
where
    E: std::fmt::Display,
{
    RRTError::Draw(e.to_string())
}
