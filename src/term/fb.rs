//! Grid-addressable render surface.
//!
//! Cells carry a character and a color identity (0 = neutral text, 1..=8 = a
//! registered game color drawn as a solid block). The surface knows nothing
//! about the game; views write into it and a renderer flushes it.

use crate::types::ColorId;

/// One surface cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: ColorId,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', color: 0 }
    }
}

/// 2D buffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, preserving the allocation where possible. Contents are stale
    /// afterwards; callers redraw the whole frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-range writes are dropped silently.
    pub fn put(&mut self, x: u16, y: u16, ch: char, color: ColorId) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, color };
        }
    }

    /// Write a run of text starting at `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, color: ColorId) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, color);
        }
    }

    /// Reset every cell to the blank default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Blank a sub-region.
    pub fn clear_region(&mut self, x: u16, y: u16, w: u16, h: u16) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ' ', 0);
            }
        }
    }

    /// Decorative box-drawing border around the region's outer edge.
    pub fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let (x1, y1) = (x + w - 1, y + h - 1);

        self.put(x, y, '┌', 0);
        self.put(x1, y, '┐', 0);
        self.put(x, y1, '└', 0);
        self.put(x1, y1, '┘', 0);
        for dx in 1..w - 1 {
            self.put(x + dx, y, '─', 0);
            self.put(x + dx, y1, '─', 0);
        }
        for dy in 1..h - 1 {
            self.put(x, y + dy, '│', 0);
            self.put(x1, y + dy, '│', 0);
        }
    }
}
