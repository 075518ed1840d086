//! Integer grid to pixel mapping shared by the diagram renderers.

use kurbo::{Point, Rect};

#[derive(Clone, Copy, Debug, serde::Serialize)]
/// Maps grid cells to pixel coordinates.
///
/// Columns grow to the right and rows grow downward. The origin cell lets a
/// renderer address cells with negative indices, as the multiplication
/// lattice does.
pub struct GridMap {
    /// Cell edge length in pixels.
    pub cell: f64,
    /// Left canvas padding in pixels.
    pub pad_x: f64,
    /// Top canvas padding in pixels.
    pub pad_y: f64,
    /// Grid column mapped to the left padding edge.
    pub origin_col: i64,
    /// Grid row mapped to the top padding edge.
    pub origin_row: i64,
}

impl GridMap {
    /// Map with equal padding on both axes.
    pub fn new(cell: f64, pad: f64) -> Self {
        Self::with_pads(cell, pad, pad)
    }

    /// Map with distinct horizontal and vertical padding.
    pub fn with_pads(cell: f64, pad_x: f64, pad_y: f64) -> Self {
        Self {
            cell,
            pad_x,
            pad_y,
            origin_col: 0,
            origin_row: 0,
        }
    }

    /// Shift the origin so `(col, row)` maps to the padding corner.
    pub fn with_origin(mut self, col: i64, row: i64) -> Self {
        self.origin_col = col;
        self.origin_row = row;
        self
    }

    /// Left pixel edge of a grid column.
    pub fn x(&self, col: i64) -> f64 {
        self.pad_x + (col - self.origin_col) as f64 * self.cell
    }

    /// Top pixel edge of a grid row.
    pub fn y(&self, row: i64) -> f64 {
        self.pad_y + (row - self.origin_row) as f64 * self.cell
    }

    /// Like [`x`](Self::x) for fractional columns.
    pub fn xf(&self, col: f64) -> f64 {
        self.pad_x + (col - self.origin_col as f64) * self.cell
    }

    /// Like [`y`](Self::y) for fractional rows.
    pub fn yf(&self, row: f64) -> f64 {
        self.pad_y + (row - self.origin_row as f64) * self.cell
    }

    /// Pixel center of a cell.
    pub fn center(&self, col: i64, row: i64) -> Point {
        Point::new(
            self.x(col) + self.cell * 0.5,
            self.y(row) + self.cell * 0.5,
        )
    }

    /// Pixel bounds of a cell.
    pub fn cell_rect(&self, col: i64, row: i64) -> Rect {
        let x = self.x(col);
        let y = self.y(row);
        Rect::new(x, y, x + self.cell, y + self.cell)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
