use crate::{
    neighbors::{self, distance_squared, heuristic, is_diagonal, step_cost},
    node_list::{NodeList, Slot},
    Grid, Node, NodeId, Path, Point, Result, SearchConfig, SearchError,
};

/// How a search came to an end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The destination was expanded. The Path leads to it.
    Reached,
    /// Every reachable Tile was expanded without finding the destination.
    /// The Path leads to the expanded Tile closest to the destination.
    Unreachable,
    /// The search ran out of operations. The Path leads to the expanded Tile closest to the
    /// destination.
    BudgetExhausted,
}

/// The result of a single call to [`Engine::advance`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The Node at the given Position was moved to the finalized set
    Expanded(Point),
    /// The search has ended and the Path is available
    Finished(Outcome),
}

/// An A* search that is advanced one Node at a time.
///
/// The Engine keeps two sets of Nodes: the pending (open) Nodes that were discovered but not
/// expanded yet, and the finalized (closed) Nodes. Every call to [`advance`](Engine::advance)
/// either expands the pending Node with the smallest `f` or ends the search.
///
/// `G` is usually a reference to a Grid owned by the caller, see [`Grid`].
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::prelude::*;
///
/// let mut grid = vec![vec![false; 10]; 10];
/// grid[1][0] = true;
/// grid[1][1] = true;
///
/// let mut engine = Engine::new(&grid);
/// engine.set_start((0, 0))?;
/// engine.set_dest((3, 0))?;
///
/// let path = engine.run()?;
/// assert_eq!(path.end(), Some((3, 0)));
/// assert_eq!(engine.outcome(), Some(Outcome::Reached));
/// # Ok::<(), SearchError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Engine<G: Grid> {
    grid: G,
    nodes: NodeList,
    start: Option<Point>,
    dest: Option<Point>,
    config: SearchConfig,
    operations: usize,
    path: Path,
    outcome: Option<Outcome>,
}

impl<G: Grid> Engine<G> {
    /// Creates an Engine with the default [`SearchConfig`]
    pub fn new(grid: G) -> Engine<G> {
        Engine::with_config(grid, SearchConfig::default())
    }

    /// Creates an Engine with the given [`SearchConfig`]
    pub fn with_config(grid: G, config: SearchConfig) -> Engine<G> {
        Engine {
            grid,
            nodes: NodeList::new(),
            start: None,
            dest: None,
            config,
            operations: 0,
            path: Path::default(),
            outcome: None,
        }
    }

    /// Sets the start of the search.
    ///
    /// The pending set is replaced by a single start Node. Nothing else is reset, use
    /// [`flush`](Engine::flush) to start over.
    pub fn set_start(&mut self, pos: Point) -> Result<()> {
        self.check_bounds(pos)?;
        self.start = Some(pos);
        self.seed_start(pos);
        Ok(())
    }

    /// Sets the destination of the search.
    ///
    /// Heuristics of already discovered Nodes are not updated.
    pub fn set_dest(&mut self, pos: Point) -> Result<()> {
        self.check_bounds(pos)?;
        self.dest = Some(pos);
        Ok(())
    }

    /// Performs a single step of the search.
    ///
    /// Either the pending Node with the smallest `f` is expanded, or the search ends because
    /// the destination was reached, no pending Nodes are left or the operation budget ran out.
    ///
    /// ## Errors
    /// - [`SearchError::EngineNotReady`] if start or destination are missing
    /// - [`SearchError::AlreadyTerminated`] if the search has already ended
    pub fn advance(&mut self) -> Result<Progress> {
        if let Some(outcome) = self.outcome {
            return Err(SearchError::AlreadyTerminated(outcome));
        }
        let (Some(_), Some(dest)) = (self.start, self.dest) else {
            return Err(SearchError::EngineNotReady);
        };

        let unreachable = self.nodes.open_len() == 0 && self.nodes.closed_len() > 0;
        if unreachable
            || self
                .config
                .budget_exhausted(self.operations, self.grid.size())
        {
            let outcome = if unreachable {
                Outcome::Unreachable
            } else {
                Outcome::BudgetExhausted
            };
            let closest = self.closest_to(dest);
            self.finish(closest, outcome);
            return Ok(Progress::Finished(outcome));
        }

        let current = self.nodes.close_min_f().ok_or(SearchError::EngineNotReady)?;
        self.add_neighbors(current, dest);
        self.operations += 1;

        let pos = self.nodes[current].pos;
        log::trace!("expanded {:?} (f = {})", pos, self.nodes[current].f);

        if pos == dest {
            self.finish(Some(current), Outcome::Reached);
            return Ok(Progress::Finished(Outcome::Reached));
        }
        Ok(Progress::Expanded(pos))
    }

    /// Calls [`advance`](Engine::advance) until the search ends and returns the Path
    pub fn run(&mut self) -> Result<&Path> {
        while self.outcome.is_none() {
            self.advance()?;
        }
        Ok(&self.path)
    }

    /// Resets the search so that it can run again from the same start.
    ///
    /// Destination, Grid and config are kept.
    pub fn flush(&mut self) {
        self.nodes.clear();
        self.path = Path::default();
        self.outcome = None;
        self.operations = 0;

        if let Some(start) = self.start {
            self.seed_start(start);
        }
    }

    /// Replaces the Grid and [`flush`](Engine::flush)es the search.
    ///
    /// Start and destination are kept if they still lie within the new Grid, otherwise they
    /// are unset and have to be set again before the search can [`advance`](Engine::advance).
    pub fn set_grid(&mut self, grid: G) {
        self.grid = grid;
        self.start = self.start.filter(|&pos| self.grid.contains(pos));
        self.dest = self.dest.filter(|&pos| self.grid.contains(pos));
        self.flush();
    }

    /// The Grid that is searched
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// The current config
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Mutable access to the config. Changes apply to all following expansions.
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Enables or disables diagonal steps
    pub fn set_diagonal_allowed(&mut self, allowed: bool) {
        self.config.diagonal_allowed = allowed;
    }

    /// Enables or disables diagonal steps past blocked corners
    pub fn set_corners_allowed(&mut self, allowed: bool) {
        self.config.corners_allowed = allowed;
    }

    /// The start of the search, if set
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The destination of the search, if set
    pub fn dest(&self) -> Option<Point> {
        self.dest
    }

    /// `true` once the search has ended, regardless of the [`Outcome`]
    pub fn path_found(&self) -> bool {
        self.outcome.is_some()
    }

    /// How the search ended, or `None` while it is still running
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The Path of a finished search.
    ///
    /// Returns `None` while the search is still running.
    pub fn path(&self) -> Option<&Path> {
        self.outcome.map(|_| &self.path)
    }

    /// The number of Nodes expanded since the last [`flush`](Engine::flush)
    pub fn operations(&self) -> usize {
        self.operations
    }

    /// The maximum number of expansions for the current Grid and config
    pub fn operation_budget(&self) -> Option<usize> {
        self.config.operation_budget(self.grid.size())
    }

    /// The pending Nodes, in the order they were discovered
    pub fn open_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.open_ids().iter().map(move |&id| &self.nodes[id])
    }

    /// The finalized Nodes, in the order they were expanded
    pub fn closed_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.closed_ids().iter().map(move |&id| &self.nodes[id])
    }

    /// The pending or finalized Node at `pos`
    pub fn node_at(&self, pos: Point) -> Option<&Node> {
        self.nodes.lookup(pos).map(|(id, _)| &self.nodes[id])
    }

    /// Whether `pos` is pending expansion
    pub fn is_open(&self, pos: Point) -> bool {
        matches!(self.nodes.lookup(pos), Some((_, Slot::Open)))
    }

    /// Whether `pos` has been finalized
    pub fn is_closed(&self, pos: Point) -> bool {
        matches!(self.nodes.lookup(pos), Some((_, Slot::Closed)))
    }

    /// The Node that `node` was reached from
    pub fn predecessor(&self, node: &Node) -> Option<&Node> {
        node.related_to.map(|id| &self.nodes[id])
    }

    fn check_bounds(&self, pos: Point) -> Result<()> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            let (width, height) = self.grid.size();
            Err(SearchError::InvalidCoordinate { pos, width, height })
        }
    }

    fn seed_start(&mut self, pos: Point) {
        self.nodes.clear_open();
        self.nodes.forget_closed(pos);
        self.nodes.add_open(Node::start(pos));
    }

    fn add_neighbors(&mut self, current: NodeId, dest: Point) {
        let size = self.grid.size();
        let pos = self.nodes[current].pos;
        let g = self.nodes[current].g;

        for offset in neighbors::offsets(self.config.diagonal_allowed) {
            let Some(other) = neighbors::apply(pos, offset, size) else {
                continue;
            };
            let other_g = g + step_cost(offset);

            match self.nodes.lookup(other) {
                Some((id, Slot::Open)) => {
                    if other_g < self.nodes[id].g && !self.cuts_corner(pos, other, offset) {
                        let node = &mut self.nodes[id];
                        let h = node.h;
                        node.set_values(other_g, h);
                        node.related_to = Some(current);
                    }
                }
                Some((_, Slot::Closed)) => {}
                None => {
                    if self.grid.is_blocked(other) || self.cuts_corner(pos, other, offset) {
                        continue;
                    }
                    let mut node = Node::new(other, Some(current));
                    node.set_values(other_g, heuristic(other, dest));
                    self.nodes.add_open(node);
                }
            }
        }
    }

    /// Whether the diagonal step from `from` to `to` passes a blocked Tile while corners are
    /// not allowed
    fn cuts_corner(&self, from: Point, to: Point, offset: (isize, isize)) -> bool {
        !self.config.corners_allowed
            && is_diagonal(offset)
            && (self.grid.is_blocked((to.0, from.1)) || self.grid.is_blocked((from.0, to.1)))
    }

    /// The finalized Node closest to `dest`. On equal Distance, a later Node replaces the
    /// current candidate unless its `f` is larger.
    fn closest_to(&self, dest: Point) -> Option<NodeId> {
        let mut closed = self.nodes.closed_ids().iter().copied();
        let mut closest = closed.next()?;
        let mut distance = distance_squared(self.nodes[closest].pos, dest);

        for id in closed {
            let other = distance_squared(self.nodes[id].pos, dest);
            if other < distance {
                closest = id;
                distance = other;
            } else if other == distance && self.nodes[id].f <= self.nodes[closest].f {
                closest = id;
            }
        }
        Some(closest)
    }

    fn finish(&mut self, end: Option<NodeId>, outcome: Outcome) {
        let mut steps = vec![];
        let mut cost = 0;
        if let Some(end) = end {
            cost = self.nodes[end].g;
            let mut current = end;
            while let Some(prev) = self.nodes[current].related_to {
                steps.push(self.nodes[current].pos);
                current = prev;
            }
        }
        self.path = Path::new(steps, cost);
        self.outcome = Some(outcome);

        log::debug!(
            "search ended: {:?} after {} operations, path of {} steps",
            outcome,
            self.operations,
            self.path.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(grid: &[Vec<bool>], config: SearchConfig) -> Engine<&[Vec<bool>]> {
        Engine::with_config(grid, config)
    }

    #[test]
    fn not_ready() {
        let grid = vec![vec![false; 4]; 4];
        let mut engine = engine(&grid, SearchConfig::default());
        assert_eq!(engine.advance(), Err(SearchError::EngineNotReady));

        engine.set_start((0, 0)).unwrap();
        assert_eq!(engine.advance(), Err(SearchError::EngineNotReady));
    }

    #[test]
    fn invalid_coordinates() {
        let grid = vec![vec![false; 3]; 4];
        let mut engine = engine(&grid, SearchConfig::default());
        assert_eq!(
            engine.set_start((4, 0)),
            Err(SearchError::InvalidCoordinate {
                pos: (4, 0),
                width: 4,
                height: 3
            })
        );
        assert!(engine.set_dest((0, 3)).is_err());
        assert_eq!(engine.start(), None);
        assert_eq!(engine.dest(), None);
    }

    #[test]
    fn start_node() {
        let grid = vec![vec![false; 4]; 4];
        let mut engine = engine(&grid, SearchConfig::default());
        engine.set_start((1, 2)).unwrap();

        let nodes: Vec<&Node> = engine.open_nodes().collect();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].pos, (1, 2));
        assert_eq!((nodes[0].g, nodes[0].h, nodes[0].f), (0, 0, 0));
        assert!(nodes[0].is_start);
        assert_eq!(nodes[0].related_to, None);
        assert!(engine.path().is_none());
    }

    #[test]
    fn first_expansion() {
        let grid = vec![vec![false; 5]; 5];
        let mut engine = engine(&grid, SearchConfig::UNBOUNDED);
        engine.set_start((0, 0)).unwrap();
        engine.set_dest((4, 4)).unwrap();

        assert_eq!(engine.advance(), Ok(Progress::Expanded((0, 0))));
        assert_eq!(engine.operations(), 1);

        let open: Vec<_> = engine.open_nodes().map(|n| (n.pos, n.g, n.f)).collect();
        assert_eq!(open, vec![((1, 1), 14, 74), ((0, 1), 10, 80), ((1, 0), 10, 80)]);
        assert!(engine.nodes.is_consistent());
    }

    #[test]
    fn start_is_dest() {
        let grid = vec![vec![false; 3]; 3];
        let mut engine = engine(&grid, SearchConfig::default());
        engine.set_start((1, 1)).unwrap();
        engine.set_dest((1, 1)).unwrap();

        assert_eq!(engine.advance(), Ok(Progress::Finished(Outcome::Reached)));
        let path = engine.path().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn relaxation_updates_pending_node() {
        // the first expansion discovers (1, 0) with g = 10, expanding (1, 1) next must not
        // replace it since 14 + 10 is not better
        let grid = vec![vec![false; 3]; 3];
        let mut engine = engine(&grid, SearchConfig::UNBOUNDED);
        engine.set_start((0, 0)).unwrap();
        engine.set_dest((2, 2)).unwrap();
        engine.advance().unwrap();
        engine.advance().unwrap();

        let node = engine.node_at((1, 0)).unwrap();
        assert_eq!(node.g, 10);
        assert_eq!(engine.predecessor(node).map(|n| n.pos), Some((0, 0)));
    }

    #[test]
    fn relaxation_uses_cheaper_route() {
        // (1, 3) is discovered diagonally from (2, 2) and later reached straight from (1, 2)
        let mut grid = vec![vec![false; 5]; 5];
        grid[3][3] = true;
        grid[4][3] = true;
        grid[3][4] = true;
        let mut engine = engine(&grid, SearchConfig::UNBOUNDED);
        engine.set_start((1, 1)).unwrap();
        engine.set_dest((4, 4)).unwrap();

        for _ in 0..6 {
            engine.advance().unwrap();
        }
        let node = engine.node_at((1, 3)).unwrap();
        assert_eq!((node.g, node.f), (28, 68));
        assert_eq!(engine.predecessor(node).map(|n| n.pos), Some((2, 2)));

        assert_eq!(engine.advance(), Ok(Progress::Expanded((1, 2))));
        let node = engine.node_at((1, 3)).unwrap();
        assert_eq!((node.g, node.h, node.f), (20, 40, 60));
        assert_eq!(engine.predecessor(node).map(|n| n.pos), Some((1, 2)));
        assert!(engine.is_open((1, 3)));
        assert!(engine.nodes.is_consistent());
    }

    #[test]
    fn advance_after_termination() {
        let grid = vec![vec![false; 3]; 3];
        let mut engine = engine(&grid, SearchConfig::default());
        engine.set_start((0, 0)).unwrap();
        engine.set_dest((0, 0)).unwrap();
        engine.run().unwrap();

        let operations = engine.operations();
        assert_eq!(
            engine.advance(),
            Err(SearchError::AlreadyTerminated(Outcome::Reached))
        );
        assert_eq!(engine.operations(), operations);
    }

    #[test]
    fn set_start_mid_search_keeps_sets_disjoint() {
        let grid = vec![vec![false; 6]; 6];
        let mut engine = engine(&grid, SearchConfig::UNBOUNDED);
        engine.set_start((0, 0)).unwrap();
        engine.set_dest((5, 5)).unwrap();
        engine.advance().unwrap();
        engine.advance().unwrap();

        engine.set_start((0, 0)).unwrap();
        assert!(engine.is_open((0, 0)));
        assert_eq!(engine.open_nodes().count(), 1);
        assert!(engine.nodes.is_consistent());
    }

    #[test]
    fn closest_prefers_smaller_f_on_ties() {
        let grid = vec![vec![false; 3]; 3];
        let mut engine = engine(&grid, SearchConfig::default());
        let mut a = Node::new((0, 1), None);
        a.set_values(10, 10);
        let mut b = Node::new((1, 0), None);
        b.set_values(10, 30);
        let mut c = Node::new((1, 2), None);
        c.set_values(10, 10);

        let a = engine.nodes.add_open(a);
        engine.nodes.close_min_f();
        let c = engine.nodes.add_open(c);
        engine.nodes.close_min_f();
        let b = engine.nodes.add_open(b);
        engine.nodes.close_min_f();

        // all three are 1 away from (1, 1), c ties a and replaces it, b has a larger f
        assert_ne!(engine.closest_to((1, 1)), Some(b));
        assert_eq!(engine.closest_to((1, 1)), Some(c));
        assert_ne!(engine.closest_to((1, 1)), Some(a));
    }
}
