#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to search Paths on a Grid one step at a time.
//!
//! ## Introduction
//! Most Pathfinding Libraries take a Grid, a start and a goal and hand back the finished Path.
//! That is exactly what you want inside a Game Loop, but it hides everything interesting about
//! _how_ the Path was found. This crate runs an A* search that can be advanced one Node at a
//! time, so that the pending and finalized Nodes can be inspected (or drawn) between any two
//! steps.
//!
//! The search works on a boolean occupancy Grid (`true` = blocked) with 4- or 8-connectivity.
//! Costs are scaled by 10: an orthogonal step costs `10`, a diagonal step costs `14`.
//! The Heuristic is the scaled Manhattan Distance to the destination.
//!
//! To guarantee termination on large or maze-like Grids, every search has a budget of
//! `0.15 * width * height` expansions (see [`SearchConfig`]). When the budget runs out, or the
//! destination turns out to be unreachable, the Engine does not fail: it returns the Path to the
//! finalized Node closest to the destination instead. **The resulting Paths are therefore not
//! always the best possible Paths.**
//!
//! ## Examples
//! Stepping through a search:
//! ```
//! use stepwise_pathfinding::prelude::*;
//!
//! // true = wall, indexed as grid[x][y]
//! let grid = vec![vec![false; 8]; 8];
//!
//! let mut engine = Engine::new(&grid);
//! engine.set_start((0, 0))?;
//! engine.set_dest((5, 3))?;
//!
//! while !engine.path_found() {
//!     match engine.advance()? {
//!         Progress::Expanded(pos) => {
//!             // draw engine.open_nodes() and engine.closed_nodes() here
//!             assert!(engine.is_closed(pos));
//!         }
//!         Progress::Finished(outcome) => assert_eq!(outcome, Outcome::Reached),
//!     }
//! }
//!
//! let path = engine.path().expect("search has finished");
//! // the Path starts at the destination and does not contain the start
//! assert_eq!(path[0], (5, 3));
//! assert_eq!(path.len(), 5);
//! # Ok::<(), SearchError>(())
//! ```
//!
//! ### Running to completion
//! If the individual steps are not interesting, [`find_path`] runs a whole search:
//! ```
//! use stepwise_pathfinding::prelude::*;
//!
//! let grid = BoolGrid::from_ascii(
//!     "\
//!     .....\n\
//!     .###.\n\
//!     ...#.\n\
//!     .#...\n\
//!     .#...",
//! )?;
//!
//! let result = find_path(&grid, (0, 0), (4, 4), SearchConfig::UNBOUNDED)?;
//!
//! assert_eq!(result.outcome, Outcome::Reached);
//! assert_eq!(result.path.from_start().last(), Some(&(4, 4)));
//! # Ok::<(), SearchError>(())
//! ```
//!
//! ### Configuration
//! Diagonal movement and corner cutting can be toggled between searches:
//! ```
//! use stepwise_pathfinding::prelude::*;
//!
//! let grid = vec![vec![false; 5]; 5];
//!
//! let mut engine = Engine::with_config(&grid, SearchConfig::UNBOUNDED);
//! engine.set_start((0, 0))?;
//! engine.set_dest((4, 4))?;
//! assert_eq!(engine.run()?.cost(), 56);
//!
//! engine.set_diagonal_allowed(false);
//! engine.flush();
//! assert_eq!(engine.run()?.cost(), 80);
//! # Ok::<(), SearchError>(())
//! ```

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A specialized [`HashMap`](hashbrown::HashMap) keyed by Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

mod config;
pub use config::SearchConfig;

mod engine;
pub use engine::{Engine, Outcome, Progress};

mod error;
pub use error::{Result, SearchError};

pub mod grid;
pub use grid::{BoolGrid, Grid};

pub mod neighbors;

mod node;
pub use node::{Node, NodeId};

mod node_list;

mod path;
pub use path::{Cost, Path};

mod search;
pub use search::{find_path, find_paths, SearchResult};

/// The most commonly used items of this crate
pub mod prelude {
    pub use crate::{
        find_path, find_paths, BoolGrid, Engine, Grid, Outcome, Path, Point, Progress,
        SearchConfig, SearchError, SearchResult,
    };
}
