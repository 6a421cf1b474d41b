//! Mapping between the logical canvas and terminal cells.
//!
//! Cells are much coarser than logical units, so a cell maps back to the logical point at its
//! centre, and a logical rectangle maps to every cell it touches.

use crate::kernel::{Point, Rect};
use crate::ui::core::geom::{Pos, Rect as CellRect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    canvas_w: i32,
    canvas_h: i32,
    area: CellRect,
}

impl Viewport {
    pub fn new(canvas_w: i32, canvas_h: i32, area: CellRect) -> Self {
        Self {
            canvas_w: canvas_w.max(1),
            canvas_h: canvas_h.max(1),
            area,
        }
    }

    pub fn area(&self) -> CellRect {
        self.area
    }

    /// Logical point under a terminal cell. Cells outside the area clamp to its edge.
    pub fn to_logical(&self, col: u16, row: u16) -> Point {
        if self.area.is_empty() {
            return Point::default();
        }
        let rel_x = col.saturating_sub(self.area.x).min(self.area.w - 1);
        let rel_y = row.saturating_sub(self.area.y).min(self.area.h - 1);
        Point::new(
            cell_center(rel_x, self.area.w, self.canvas_w),
            cell_center(rel_y, self.area.h, self.canvas_h),
        )
    }

    /// Cell holding logical point `p`, if it is on screen.
    pub fn to_cell(&self, p: Point) -> Option<Pos> {
        let col = cell_floor(p.x, self.area.w, self.canvas_w);
        let row = cell_floor(p.y, self.area.h, self.canvas_h);
        if col < 0 || row < 0 || col >= self.area.w as i64 || row >= self.area.h as i64 {
            return None;
        }
        Some(Pos::new(
            self.area.x + col as u16,
            self.area.y + row as u16,
        ))
    }

    /// Cells covered by `rect`, clipped to the area. A visible rect is never thinner than one
    /// cell, otherwise small zones would vanish on narrow terminals.
    pub fn to_cells(&self, rect: Rect) -> CellRect {
        if rect.is_empty() || self.area.is_empty() {
            return CellRect::default();
        }
        let (x0, x1) = span(rect.x, rect.right(), self.area.w, self.canvas_w);
        let (y0, y1) = span(rect.y, rect.bottom(), self.area.h, self.canvas_h);
        if x0 >= x1 || y0 >= y1 {
            return CellRect::default();
        }
        CellRect::new(
            self.area.x + x0,
            self.area.y + y0,
            x1 - x0,
            y1 - y0,
        )
    }
}

fn cell_center(rel: u16, cells: u16, units: i32) -> i32 {
    ((2 * rel as i64 + 1) * units as i64 / (2 * cells as i64)) as i32
}

fn cell_floor(v: i32, cells: u16, units: i32) -> i64 {
    (v as i64 * cells as i64).div_euclid(units as i64)
}

// Half-open cell range for the logical range [start, end), clipped to [0, cells).
fn span(start: i32, end: i32, cells: u16, units: i32) -> (u16, u16) {
    let lo = cell_floor(start, cells, units);
    let mut hi = cell_floor(end, cells, units);
    if hi <= lo {
        hi = lo + 1;
    }
    let clip = |v: i64| v.clamp(0, cells as i64) as u16;
    (clip(lo), clip(hi))
}

#[cfg(test)]
#[path = "../../tests/unit/app/viewport.rs"]
mod tests;
