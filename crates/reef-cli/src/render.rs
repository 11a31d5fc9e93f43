//! Terminal output for the grid.

use reef_core::Cell;
use reef_world::Grid;
use std::io::{self, Write};

pub const BORDER: char = '*';

/// ANSI sequence that clears the screen and homes the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Sink for successive grid states
pub trait Renderer {
    fn render(&mut self, grid: &Grid) -> io::Result<()>;
}

pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Rock => '#',
        Cell::Fish => 'F',
        Cell::Shrimp => 'S',
    }
}

/// The grid framed by a one-character border, one line per row
pub fn frame(grid: &Grid) -> String {
    let width = grid.width() as usize;
    let border_row: String = std::iter::repeat(BORDER).take(width + 2).collect();

    let mut out = String::with_capacity((width + 3) * (grid.height() as usize + 2));
    out.push_str(&border_row);
    out.push('\n');
    for row in grid.rows() {
        out.push(BORDER);
        out.extend(row.iter().map(|&cell| glyph(cell)));
        out.push(BORDER);
        out.push('\n');
    }
    out.push_str(&border_row);
    out.push('\n');
    out
}

/// Redraws the whole screen on every frame
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, clear: true }
    }

    /// Append frames instead of clearing between them
    pub fn without_clear(out: W) -> Self {
        Self { out, clear: false }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(frame(grid).as_bytes())?;
        self.out.flush()
    }
}
