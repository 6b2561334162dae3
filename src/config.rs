/// Options for configuring the [`Engine`](crate::Engine)
///
/// Default options:
/// ```
/// # use stepwise_pathfinding::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         diagonal_allowed: true,
///         corners_allowed: false,
///         budget_ratio: 0.15,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// `true` (default): Nodes are expanded into all 8 neighbors.
    ///
    /// `false`: only the 4 orthogonal neighbors are considered.
    pub diagonal_allowed: bool,
    /// `true`: a diagonal step may pass a blocked orthogonal Tile.
    ///
    /// `false` (default): a diagonal step is rejected when either of the two Tiles it passes
    /// between is blocked.
    ///
    /// Has no effect unless `diagonal_allowed` is set.
    pub corners_allowed: bool,
    /// The fraction of the Grid's Tiles that may be expanded before the search gives up and
    /// returns the best Path found so far (defaults to `0.15`).
    ///
    /// Use [`f64::INFINITY`] to never give up early.
    pub budget_ratio: f64,
}

impl SearchConfig {
    /// a SearchConfig for Agents that can only move along the 4 cardinal directions
    ///
    /// Values:
    /// ```
    /// # use stepwise_pathfinding::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         diagonal_allowed: false,
    ///         corners_allowed: false,
    ///         budget_ratio: 0.15,
    ///     },
    ///     SearchConfig::FOUR_WAY
    /// );
    /// ```
    pub const FOUR_WAY: SearchConfig = SearchConfig {
        diagonal_allowed: false,
        corners_allowed: false,
        budget_ratio: 0.15,
    };
    /// the default SearchConfig without the expansion budget
    ///
    /// Every search runs until the destination is reached or proven unreachable.
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        diagonal_allowed: true,
        corners_allowed: false,
        budget_ratio: f64::INFINITY,
    };

    /// Returns a copy of this config with a different `budget_ratio`
    pub fn with_budget_ratio(self, budget_ratio: f64) -> SearchConfig {
        SearchConfig {
            budget_ratio,
            ..self
        }
    }

    /// The number of expansions allowed on a Grid of the given size.
    ///
    /// Returns `None` if the budget is unlimited.
    ///
    /// ```
    /// # use stepwise_pathfinding::SearchConfig;
    /// let config = SearchConfig::default();
    /// assert_eq!(config.operation_budget((40, 20)), Some(120));
    /// assert_eq!(config.operation_budget((5, 5)), Some(4));
    /// assert_eq!(SearchConfig::UNBOUNDED.operation_budget((5, 5)), None);
    /// ```
    pub fn operation_budget(&self, (width, height): (usize, usize)) -> Option<usize> {
        let budget = (width * height) as f64 * self.budget_ratio;
        if budget.is_finite() {
            Some(budget.ceil() as usize)
        } else {
            None
        }
    }

    pub(crate) fn budget_exhausted(&self, operations: usize, size: (usize, usize)) -> bool {
        operations as f64 >= (size.0 * size.1) as f64 * self.budget_ratio
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            diagonal_allowed: true,
            corners_allowed: false,
            budget_ratio: 0.15,
        }
    }
}
