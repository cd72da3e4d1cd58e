use std::fmt;

use crate::cave_visualizer::CaveVisualizer;

/// The state of a single grid position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    /// Traversable space.
    Open,
    /// Blocked space.
    Wall,
}

/// A `width × height` map of [`Cell`]s.
///
/// Cells are stored column by column in a single buffer, so `x` selects the column and `y` the
/// position inside it. Cloning the grid copies that one buffer, which is what each smoothing pass
/// does to get a fresh output next to the snapshot it reads from.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid where every cell is `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    pub(crate) fn from_columns(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Sets the cell at `(x, y)`. Returns `false` (and changes nothing) outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True for cells on the outer ring: first or last column, first or last row.
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Counts the walls among the (up to 8) Moore neighbours of `(x, y)`.
    ///
    /// Neighbours falling outside the grid are not counted, so a corner cell can have at most 3
    /// wall neighbours and an edge cell at most 5.
    pub fn count_wall_neighbors(&self, x: usize, y: usize) -> usize {
        use super::isize_index_matrix::IsizeIndexMatrix;

        let (x, y) = (x as isize, y as isize);
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if let Some(Cell::Wall) = self.at_checked((x + dx, y + dy)) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Wall).count()
    }

    pub fn open_count(&self) -> usize {
        self.cells.len() - self.wall_count()
    }

    /// Share of cells that are walls, in `[0, 1]`. An empty grid has none.
    pub fn wall_fraction(&self) -> f64 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.wall_count() as f64 / self.cells.len() as f64
        }
    }

    /// Iterates over the columns, from `x = 0` up; each column runs from `y = 0` up.
    pub fn columns(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy on a degenerate zero-height grid
        self.cells.chunks(self.height.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CaveVisualizer::render(self))
    }
}
