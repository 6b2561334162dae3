//! Error types for misusing the [`Engine`](crate::Engine)

use crate::{Outcome, Point};
use thiserror::Error;

/// Errors caused by calling the Engine in a state where the call makes no sense.
///
/// Not finding a Path is not an error: the Engine always ends with a best-effort Path, see
/// [`Outcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A start or destination outside of the Grid
    #[error("coordinate {pos:?} lies outside of the {width}x{height} grid")]
    InvalidCoordinate {
        /// the rejected coordinate
        pos: Point,
        /// width of the Grid
        width: usize,
        /// height of the Grid
        height: usize,
    },

    /// `advance` was called before both start and destination were set
    #[error("engine needs both a start and a destination before it can advance")]
    EngineNotReady,

    /// `advance` was called after the search already ended
    #[error("search already terminated ({0:?}), call flush() to search again")]
    AlreadyTerminated(Outcome),

    /// A Grid could not be constructed
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

/// Shorthand for Results of this crate
pub type Result<T> = std::result::Result<T, SearchError>;
