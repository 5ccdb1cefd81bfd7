//! The off-screen [`Canvas`] the model draws into, and the [`Frame`] diff
//! that is sent to the driver.

use crate::style::Style;

/// A terminal cell position: `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A styled character occupying one terminal cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

/// A `width×height` buffer of glyphs, row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            glyphs: vec![Glyph::default(); (w * h) as usize],
            width: w,
            height: h,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// The glyph at `p`, or a blank glyph outside the canvas.
    pub fn get(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op outside the canvas.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` left to right from `p`, clipped at the right edge.
    /// Returns the number of glyphs written.
    pub fn print(&mut self, p: Point, text: &str, style: Style) -> i32 {
        let mut written = 0;
        for (k, ch) in text.chars().enumerate() {
            let q = Point::new(p.x + k as i32, p.y);
            if !self.contains(q) {
                break;
            }
            self.set(q, Glyph::new(ch, style));
            written += 1;
        }
        written
    }

    /// The characters of row `y`, without styling.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width).map(|x| self.get(Point::new(x, y)).ch).collect()
    }

    /// Row-major iterator over `(Point, Glyph)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Glyph)> + '_ {
        let w = self.width.max(1);
        self.glyphs
            .iter()
            .enumerate()
            .map(move |(i, g)| (Point::new(i as i32 % w, i as i32 / w), *g))
    }
}

/// A glyph that changed between two canvases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// The set of changes needed to turn the previous screen into the current
/// one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Diff two canvases.
///
/// When the sizes differ every glyph of `curr` is included, so the driver
/// repaints the whole screen.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let same_size = prev.width == curr.width && prev.height == curr.height;
    let cells = curr
        .iter()
        .filter(|&(p, g)| !same_size || prev.get(p) != g)
        .map(|(pos, glyph)| FrameCell { glyph, pos })
        .collect();
    Frame {
        cells,
        width: curr.width,
        height: curr.height,
    }
}
