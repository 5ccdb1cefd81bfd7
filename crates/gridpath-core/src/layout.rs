//! Text layouts: build a [`Grid`] from ASCII art and render it back.
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | barrier |
//! | `S` | start |
//! | `E` | end |
//! | `o` | open (frontier), render only |
//! | `x` | closed, render only |
//! | `*` | path, render only |
//!
//! Lines are separated by `'\n'`, must all have the same width, and the
//! layout must be square. Surrounding whitespace is trimmed from the whole
//! string and from each line.

use std::fmt;

use crate::cell::CellState;
use crate::error::{GridError, Result};
use crate::geom::Pos;
use crate::grid::Grid;

/// Extent used for grids built from text; one unit per cell.
const TEXT_CELL_EXTENT: i32 = 1;

impl Grid {
    /// Parse a square ASCII layout.
    pub fn from_layout(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let rows = lines.len() as i32;
        for line in &lines {
            let cols = line.chars().count() as i32;
            if cols != rows {
                return Err(GridError::NotSquare { rows, cols });
            }
        }

        let mut g = Grid::new(rows, rows * TEXT_CELL_EXTENT)?;
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let p = Pos::new(r as i32, c as i32);
                match ch {
                    '.' => {}
                    '#' => g.set_barrier(p)?,
                    'S' => g.set_start(p)?,
                    'E' => g.set_end(p)?,
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                }
            }
        }
        Ok(g)
    }

    /// Render the grid, including search marks, as ASCII art.
    pub fn to_layout(&self) -> String {
        self.to_string()
    }
}

fn glyph(barrier: bool, state: CellState) -> char {
    if barrier {
        return '#';
    }
    match state {
        CellState::Default => '.',
        CellState::Open => 'o',
        CellState::Closed => 'x',
        CellState::Start => 'S',
        CellState::End => 'E',
        CellState::Path => '*',
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side() as usize;
        for (i, c) in self.cells().iter().enumerate() {
            if i > 0 && i % side == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", glyph(c.barrier, c.state))?;
        }
        Ok(())
    }
}
