use crate::cave_generator::grid::{Cell, Grid};

/// Glyph used for [`Cell::Open`] by [`CaveVisualizer::render`].
pub const OPEN_GLYPH: char = '.';
/// Glyph used for [`Cell::Wall`] by [`CaveVisualizer::render`].
pub const WALL_GLYPH: char = '#';

pub struct CaveVisualizer {}

impl CaveVisualizer {
    /// Renders the grid as text with the default glyphs, one line per row.
    pub fn render(grid: &Grid) -> String {
        Self::render_with(grid, OPEN_GLYPH, WALL_GLYPH)
    }

    /// Renders the grid as text, one line per row.
    ///
    /// The first line is the top row (`y = height - 1`) so that `(0, 0)` ends up in the bottom
    /// left corner; within a line `x` grows to the right. Every line, the last one included, ends
    /// with `'\n'`.
    pub fn render_with(grid: &Grid, open: char, wall: char) -> String {
        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for y in (0..grid.height()).rev() {
            for x in 0..grid.width() {
                let glyph = match grid.get(x, y) {
                    Some(Cell::Wall) => wall,
                    _ => open,
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}
