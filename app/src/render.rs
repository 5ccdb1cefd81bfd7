//! Screen layout, palette and drawing.
//!
//! Each grid cell takes two terminal columns. Below the grid sit the
//! algorithm buttons, a status line and a one-line key summary.

use gridpath_core::{Cell, CellState, Grid, Pos};
use gridpath_term::{AttrMask, Canvas, Color, Glyph, Point, Style};

use crate::config::Algorithm;
use crate::model::Status;

/// Terminal columns per grid cell.
pub const CELL_WIDTH: i32 = 2;
/// Longest status line: a found path on the largest grid.
const STATUS_WIDTH: i32 = 72;
/// Blank columns between the two buttons.
const BUTTON_GAP: i32 = 2;

const HELP: &str = "LMB start/end/wall  RMB erase  Space run  Tab algo  g maze  c clear  q quit";

pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const ORANGE: Color = Color::from_rgb(255, 140, 0);
pub const LIGHT_BLUE: Color = Color::from_rgb(135, 206, 235);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
pub const GREY: Color = Color::from_rgb(128, 128, 128);

/// Background colour of a grid cell.
pub fn cell_color(cell: &Cell) -> Color {
    if cell.barrier {
        return BLACK;
    }
    match cell.state {
        CellState::Default => WHITE,
        CellState::Open => RED,
        CellState::Closed => GREEN,
        CellState::Start => ORANGE,
        CellState::End => LIGHT_BLUE,
        CellState::Path => PURPLE,
    }
}

/// Where things are on screen for a grid of a given side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    side: i32,
}

impl Layout {
    pub fn new(side: i32) -> Self {
        Self { side }
    }

    /// Grid extent in terminal columns, as handed to `Grid::new`.
    pub fn grid_extent(&self) -> i32 {
        self.side * CELL_WIDTH
    }

    /// Screen width: the grid, or the help and status lines if wider.
    pub fn width(&self) -> i32 {
        let help = HELP.chars().count() as i32;
        self.grid_extent().max(help).max(STATUS_WIDTH)
    }

    pub fn height(&self) -> i32 {
        self.side + 3
    }

    pub fn button_row(&self) -> i32 {
        self.side
    }

    pub fn status_row(&self) -> i32 {
        self.side + 1
    }

    pub fn help_row(&self) -> i32 {
        self.side + 2
    }

    /// The grid cell under a screen position.
    pub fn cell_at(&self, grid: &Grid, p: Point) -> Option<Pos> {
        if p.x < 0 || p.x >= self.grid_extent() {
            return None;
        }
        let pos = Pos::new(p.y, p.x / grid.cell_extent());
        grid.contains(pos).then_some(pos)
    }

    /// Screen position of the left column of a grid cell.
    pub fn screen_pos(&self, grid: &Grid, pos: Pos) -> Point {
        Point::new(pos.col * grid.cell_extent(), pos.row)
    }

    fn button_span(&self, algorithm: Algorithm) -> (i32, i32) {
        let first = button_text(Algorithm::Dijkstra).chars().count() as i32;
        match algorithm {
            Algorithm::Dijkstra => (0, first),
            Algorithm::AStar => {
                let x = first + BUTTON_GAP;
                (x, x + button_text(Algorithm::AStar).chars().count() as i32)
            }
        }
    }

    /// The button under a screen position.
    pub fn button_at(&self, p: Point) -> Option<Algorithm> {
        if p.y != self.button_row() {
            return None;
        }
        [Algorithm::Dijkstra, Algorithm::AStar]
            .into_iter()
            .find(|&a| {
                let (from, to) = self.button_span(a);
                (from..to).contains(&p.x)
            })
    }
}

fn button_text(algorithm: Algorithm) -> String {
    format!("[ {} ]", algorithm.label())
}

/// Draw the whole screen.
pub fn draw(canvas: &mut Canvas, grid: &Grid, layout: &Layout, selected: Algorithm, status: &Status) {
    draw_grid(canvas, grid, layout);

    for a in [Algorithm::Dijkstra, Algorithm::AStar] {
        let (x, _) = layout.button_span(a);
        let mut style = Style::default().with_attrs(AttrMask::BOLD);
        if a == selected {
            style = style.with_attrs(AttrMask::BOLD | AttrMask::REVERSE);
        }
        canvas.print(Point::new(x, layout.button_row()), &button_text(a), style);
    }

    canvas.print(
        Point::new(0, layout.status_row()),
        &status.to_string(),
        Style::default(),
    );
    canvas.print(
        Point::new(0, layout.help_row()),
        HELP,
        Style::default().with_attrs(AttrMask::DIM),
    );
}

fn draw_grid(canvas: &mut Canvas, grid: &Grid, layout: &Layout) {
    for (pos, cell) in grid.iter() {
        let bg = cell_color(cell);
        let p = layout.screen_pos(grid, pos);
        canvas.set(p, Glyph::new(' ', Style::default().with_bg(bg)));
        // The right half carries a thin grey grid line.
        let line = Style::default().with_fg(GREY).with_bg(bg);
        for dx in 1..grid.cell_extent() {
            canvas.set(Point::new(p.x + dx, p.y), Glyph::new('▕', line));
        }
    }
}
