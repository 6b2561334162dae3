use crate::Point;

/// a Type to represent the Cost of a Path, scaled by 10
pub type Cost = usize;

/// A Path found by the [`Engine`](crate::Engine).
///
/// The steps are stored in the order in which they were reconstructed: the first step is the
/// end of the Path (usually the destination), the start itself is not part of the Path. Use
/// [`from_start`](Path::from_start) to walk the Path in the direction an Agent would.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    steps: Vec<Point>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(steps: Vec<Point>, cost: Cost) -> Path {
        Path { steps, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of steps in the Path
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the search ended on the start
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last Point of the Path, usually the destination
    pub fn end(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    /// Returns an Iterator over the Path, starting at the end
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }

    /// Returns an Iterator over the Path, starting with the first step after the start
    pub fn from_start(&self) -> std::iter::Rev<std::slice::Iter<'_, Point>> {
        self.steps.iter().rev()
    }

    /// The steps in reconstruction order (end first)
    pub fn as_slice(&self) -> &[Point] {
        &self.steps
    }
}

use std::ops::Index;

impl Index<usize> for Path {
    type Output = Point;
    fn index(&self, index: usize) -> &Point {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<Vec<Point>> for Path {
    fn eq(&self, rhs: &Vec<Point>) -> bool {
        self.steps == *rhs
    }
}

impl<'a> PartialEq<&'a [Point]> for Path {
    fn eq(&self, rhs: &&'a [Point]) -> bool {
        self.steps == *rhs
    }
}

use std::fmt;
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.steps.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.steps[0])?;
            for p in self.steps.iter().skip(1) {
                write!(fmt, " <- {:?}", p)?;
            }
            Ok(())
        }
    }
}
