//! Movement rules on the Grid
//!
//! Agents move along the 4 cardinal directions, optionally together with the 4 diagonals:
//!
//! ```text
//! A: Agent, o: orthogonal step (10), x: diagonal step (14)
//! x o x
//!  \|/
//! o-A-o
//!  /|\
//! x o x
//! ```

use crate::{Cost, Point};

/// Cost of a step along one of the 4 cardinal directions
pub const ORTHOGONAL_COST: Cost = 10;
/// Cost of a diagonal step, `sqrt(2) * 10` truncated
pub const DIAGONAL_COST: Cost = 14;

/// All offsets in the order in which a Node's neighbors are visited.
///
/// The order decides which of several equally good Nodes is expanded first, so it is part
/// of the observable behavior of the search.
const OFFSETS: [(isize, isize); 8] = [
    (-1, 1),
    (1, 1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (0, -1),
];

/// Whether an offset moves along both axes
pub fn is_diagonal((dx, dy): (isize, isize)) -> bool {
    dx != 0 && dy != 0
}

/// The Cost of a single step with the given offset
pub fn step_cost(offset: (isize, isize)) -> Cost {
    if is_diagonal(offset) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// The offsets to visit from a Node, with or without the diagonals
pub fn offsets(diagonal_allowed: bool) -> impl Iterator<Item = (isize, isize)> {
    OFFSETS
        .into_iter()
        .filter(move |&offset| diagonal_allowed || !is_diagonal(offset))
}

/// Applies `offset` to `pos`, returning `None` if the result leaves a Grid of `(width, height)`
pub fn apply(pos: Point, (dx, dy): (isize, isize), (width, height): (usize, usize)) -> Option<Point> {
    let x = pos.0.checked_add_signed(dx)?;
    let y = pos.1.checked_add_signed(dy)?;
    if x < width && y < height {
        Some((x, y))
    } else {
        None
    }
}

/// The scaled Manhattan Distance between two Points.
///
/// This is used as the Heuristic for all searches, even if diagonal steps are allowed.
pub fn heuristic(point: Point, goal: Point) -> Cost {
    ORTHOGONAL_COST * (point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1))
}

/// Squared straight-line Distance between two Points
pub(crate) fn distance_squared(a: Point, b: Point) -> usize {
    let dx = a.0.abs_diff(b.0);
    let dy = a.1.abs_diff(b.1);
    dx * dx + dy * dy
}

/// Lists all Points reachable in one step from `point`, ignoring blocked Tiles.
///
/// ```
/// use stepwise_pathfinding::neighbors::get_all_neighbors;
///
/// assert_eq!(
///     get_all_neighbors((0, 2), (5, 5), false).collect::<Vec<_>>(),
///     vec![(0, 3), (1, 2), (0, 1)],
/// );
/// ```
pub fn get_all_neighbors(
    point: Point,
    size: (usize, usize),
    diagonal_allowed: bool,
) -> impl Iterator<Item = Point> {
    offsets(diagonal_allowed).filter_map(move |offset| apply(point, offset, size))
}

#[test]
fn test_orthogonal_get_all_neighbors() {
    assert_eq!(
        get_all_neighbors((2, 2), (5, 5), false).collect::<Vec<_>>(),
        vec![(2, 3), (1, 2), (3, 2), (2, 1)],
    );
}

#[test]
fn test_diagonal_get_all_neighbors() {
    assert_eq!(
        get_all_neighbors((0, 2), (5, 5), true).collect::<Vec<_>>(),
        vec![(1, 3), (0, 3), (1, 2), (1, 1), (0, 1)],
    );
}

#[test]
fn test_corner_neighbors() {
    assert_eq!(
        get_all_neighbors((4, 4), (5, 5), true).collect::<Vec<_>>(),
        vec![(3, 4), (3, 3), (4, 3)],
    );
}

#[test]
fn test_heuristic() {
    assert_eq!(heuristic((3, 1), (0, 0)), 10 * (3 + 1));
    assert_eq!(heuristic((0, 0), (0, 0)), 0);
}

#[test]
fn test_step_cost() {
    assert_eq!(step_cost((1, 0)), 10);
    assert_eq!(step_cost((-1, 1)), 14);
}
