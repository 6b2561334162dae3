//! Read-only access to an occupancy Grid
//!
//! The [`Engine`](crate::Engine) never asks for a specific storage format. Anything that can
//! report its size and whether a Tile is blocked can be searched. Implementations are provided
//! for the most common layouts:
//! - `Vec<Vec<bool>>`, `[Vec<bool>]` and `[[bool; H]; W]`, indexed as `grid[x][y]`
//! - [`BoolGrid`], a flat row-major Grid that can be parsed from ASCII art
//! - references to any of the above, so the Grid can stay owned by the caller

use crate::{Point, Result, SearchError};

/// A 2D occupancy Grid. `true` means the Tile cannot be walked across.
pub trait Grid {
    /// The size of the Grid as `(width, height)`
    fn size(&self) -> (usize, usize);

    /// Whether the Tile at `pos` is blocked.
    ///
    /// Only called with Points inside of [`size`](Grid::size).
    fn is_blocked(&self, pos: Point) -> bool;

    /// Whether `pos` lies within the Grid
    fn contains(&self, pos: Point) -> bool {
        let (width, height) = self.size();
        pos.0 < width && pos.1 < height
    }
}

impl<G: Grid + ?Sized> Grid for &G {
    fn size(&self) -> (usize, usize) {
        (**self).size()
    }
    fn is_blocked(&self, pos: Point) -> bool {
        (**self).is_blocked(pos)
    }
}

/// The height is taken from the first column. Tiles missing from shorter columns count as
/// blocked.
impl Grid for [Vec<bool>] {
    fn size(&self) -> (usize, usize) {
        (self.len(), self.first().map_or(0, Vec::len))
    }
    fn is_blocked(&self, (x, y): Point) -> bool {
        self[x].get(y).copied().unwrap_or(true)
    }
}

impl Grid for Vec<Vec<bool>> {
    fn size(&self) -> (usize, usize) {
        self.as_slice().size()
    }
    fn is_blocked(&self, pos: Point) -> bool {
        self.as_slice().is_blocked(pos)
    }
}

impl<const W: usize, const H: usize> Grid for [[bool; H]; W] {
    fn size(&self) -> (usize, usize) {
        (W, H)
    }
    fn is_blocked(&self, (x, y): Point) -> bool {
        self[x][y]
    }
}

/// An owned Grid of booleans stored row by row.
///
/// ```
/// use stepwise_pathfinding::{BoolGrid, Grid};
///
/// let grid = BoolGrid::from_ascii(
///     "\
///     ..#\n\
///     .##",
/// )?;
///
/// assert_eq!(grid.size(), (3, 2));
/// assert!(grid.is_blocked((2, 0)));
/// assert!(!grid.is_blocked((0, 1)));
/// # Ok::<(), stepwise_pathfinding::SearchError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoolGrid {
    width: usize,
    height: usize,
    tiles: Vec<bool>,
}

impl BoolGrid {
    /// Creates a new Grid without any blocked Tiles
    pub fn new(width: usize, height: usize) -> BoolGrid {
        BoolGrid {
            width,
            height,
            tiles: vec![false; width * height],
        }
    }

    /// Parses a Grid from ASCII art.
    ///
    /// Every line is one row (`y`), every character one column (`x`). `#` marks a blocked
    /// Tile, `.` a free one. Surrounding whitespace of each line is ignored.
    pub fn from_ascii(text: &str) -> Result<BoolGrid> {
        let mut width = None;
        let mut tiles = vec![];
        let mut height = 0;

        for (y, line) in text.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            let start = tiles.len();
            for c in line.chars() {
                match c {
                    '#' => tiles.push(true),
                    '.' => tiles.push(false),
                    other => {
                        return Err(SearchError::InvalidGrid(format!(
                            "unexpected character {:?} in line {}",
                            other,
                            y + 1
                        )))
                    }
                }
            }
            let len = tiles.len() - start;
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(SearchError::InvalidGrid(format!(
                        "line {} has {} tiles, expected {}",
                        y + 1,
                        len,
                        w
                    )))
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(BoolGrid {
            width: width.unwrap_or(0),
            height,
            tiles,
        })
    }

    /// Creates a Grid from nested rows, indexed as `rows[y][x]`.
    ///
    /// Returns an error if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<BoolGrid> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(y) = rows.iter().position(|row| row.len() != width) {
            return Err(SearchError::InvalidGrid(format!(
                "row {} has {} tiles, expected {}",
                y,
                rows[y].len(),
                width
            )));
        }
        Ok(BoolGrid {
            width,
            height: rows.len(),
            tiles: rows.concat(),
        })
    }

    /// Marks a Tile as blocked or free. Points outside of the Grid are ignored.
    pub fn set_blocked(&mut self, pos: Point, blocked: bool) {
        if let Some(index) = self.index(pos) {
            self.tiles[index] = blocked;
        }
    }

    /// Flips a Tile between blocked and free. Points outside of the Grid are ignored.
    pub fn toggle(&mut self, pos: Point) {
        if let Some(index) = self.index(pos) {
            self.tiles[index] = !self.tiles[index];
        }
    }

    /// Frees every Tile
    pub fn clear(&mut self) {
        self.tiles.fill(false);
    }

    fn index(&self, (x, y): Point) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x + y * self.width)
        } else {
            None
        }
    }
}

impl Grid for BoolGrid {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    fn is_blocked(&self, (x, y): Point) -> bool {
        self.tiles[x + y * self.width]
    }
}

use std::fmt;
impl fmt::Display for BoolGrid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(fmt)?;
            }
            for x in 0..self.width {
                let c = if self.is_blocked((x, y)) { '#' } else { '.' };
                write!(fmt, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_vec_is_column_major() {
        let mut grid = vec![vec![false; 3]; 4];
        grid[3][1] = true;
        assert_eq!(grid.size(), (4, 3));
        assert!(grid.is_blocked((3, 1)));
        assert!(!grid.is_blocked((1, 2)));
        assert!(!grid.contains((4, 0)));
    }

    #[test]
    fn ragged_nested_vec() {
        let grid = vec![vec![false; 3], vec![false; 1], vec![false; 3]];
        assert_eq!(grid.size(), (3, 3));
        assert!(grid.contains((1, 2)));
        assert!(grid.is_blocked((1, 2)));
        assert!(!grid.is_blocked((1, 0)));
    }

    #[test]
    fn array_grid() {
        let mut grid = [[false; 2]; 3];
        grid[2][1] = true;
        assert_eq!(grid.size(), (3, 2));
        assert!((&grid).is_blocked((2, 1)));
    }

    #[test]
    fn ascii_round_trip() {
        let text = "#..\n.#.\n..#";
        let grid = BoolGrid::from_ascii(text).unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn ragged_ascii() {
        let err = BoolGrid::from_ascii("...\n..").unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidGrid("line 2 has 2 tiles, expected 3".into())
        );
    }

    #[test]
    fn unknown_character() {
        assert!(matches!(
            BoolGrid::from_ascii(".x."),
            Err(SearchError::InvalidGrid(_))
        ));
    }

    #[test]
    fn from_rows() {
        let grid = BoolGrid::from_rows(&[vec![false, true], vec![false, false]]).unwrap();
        assert!(grid.is_blocked((1, 0)));
        assert!(BoolGrid::from_rows(&[vec![false, true], vec![false]]).is_err());
    }

    #[test]
    fn toggle_and_clear() {
        let mut grid = BoolGrid::new(2, 2);
        grid.toggle((1, 1));
        grid.toggle((5, 5));
        assert!(grid.is_blocked((1, 1)));
        grid.set_blocked((0, 1), true);
        grid.clear();
        assert_eq!(grid, BoolGrid::new(2, 2));
    }
}
