use super::grid::{Cell, Grid};

/// Signed coordinate access, so neighbour offsets like `(x - 1, y + 1)` can be computed without
/// casting back and forth around the edges.
pub trait IsizeIndexMatrix<T> {
    fn at(&self, i: (isize, isize)) -> T;
    fn at_checked(&self, i: (isize, isize)) -> Option<T>;
}

impl IsizeIndexMatrix<Cell> for Grid {
    /// Panics if `i` is outside the grid.
    fn at(&self, i: (isize, isize)) -> Cell {
        match self.at_checked(i) {
            Some(cell) => cell,
            None => panic!("coordinates {i:?} outside of a {}x{} grid", self.width(), self.height()),
        }
    }
    fn at_checked(&self, i: (isize, isize)) -> Option<Cell> {
        if i.0 < 0 || i.1 < 0 {
            return None;
        }
        self.get(i.0 as usize, i.1 as usize)
    }
}
