use crate::{Engine, Grid, Outcome, Path, Point, Result, SearchConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The result of a search that ran to completion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The Path, starting at its end. See [`Path`]
    pub path: Path,
    /// How the search ended
    pub outcome: Outcome,
    /// The number of expanded Nodes
    pub operations: usize,
}

/// Runs a complete search from `start` to `dest`.
///
/// This is the same as creating an [`Engine`], setting start and destination and calling
/// [`run`](Engine::run).
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::prelude::*;
///
/// let grid = vec![vec![false; 20]; 20];
///
/// let result = find_path(&grid, (0, 0), (6, 2), SearchConfig::default())?;
/// assert_eq!(result.outcome, Outcome::Reached);
/// assert_eq!(result.path.cost(), 2 * 14 + 4 * 10);
/// # Ok::<(), SearchError>(())
/// ```
pub fn find_path<G: Grid>(
    grid: G,
    start: Point,
    dest: Point,
    config: SearchConfig,
) -> Result<SearchResult> {
    let mut engine = Engine::with_config(grid, config);
    engine.set_start(start)?;
    engine.set_dest(dest)?;
    let path = engine.run()?.clone();

    Ok(SearchResult {
        path,
        // run() only returns once the search ended
        outcome: engine.outcome().unwrap_or(Outcome::Unreachable),
        operations: engine.operations(),
    })
}

/// Runs a complete search for every `(start, dest)` pair on the same Grid.
///
/// Every search uses its own [`Engine`]. With the `parallel` feature (enabled by default) the
/// searches run on the rayon thread pool. The results are in the same order as `queries`.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::prelude::*;
///
/// let grid = vec![vec![false; 20]; 20];
/// let queries = [((0, 0), (5, 0)), ((3, 3), (0, 42))];
///
/// let results = find_paths(&grid, &queries, SearchConfig::FOUR_WAY);
///
/// assert_eq!(results[0].as_ref().map(|r| r.path.cost()), Ok(50));
/// assert!(matches!(results[1], Err(SearchError::InvalidCoordinate { .. })));
/// ```
pub fn find_paths<G: Grid + Sync + ?Sized>(
    grid: &G,
    queries: &[(Point, Point)],
    config: SearchConfig,
) -> Vec<Result<SearchResult>> {
    #[cfg(feature = "parallel")]
    let iter = queries.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = queries.iter();

    iter.map(|&(start, dest)| find_path(grid, start, dest, config))
        .collect()
}
