//! Staged diagram of the Egel addition worksheet.
//!
//! The worksheet is a plain cell grid: one row per addend, a carry row just
//! above the separator line, and a result row below it. A sign column on the
//! left holds the plus sign, and every place-value column is tinted with the
//! addition palette. Stages reveal the grid, the operands, the
//! ten-completion marks, the carry digits and finally the result.

use kurbo::Rect;

use crate::config::options::{AddRenderOptions, AddStage};
use crate::foundation::digits;
use crate::render::color;
use crate::render::grid::GridMap;
use crate::render::svg::{LineStyle, RectStyle, SvgDoc, TextAnchor, TextStyle};
use crate::render::Diagram;
use crate::trace::add::{AddTrace, CARRY_ROW};

#[derive(Clone, Copy, Debug, serde::Serialize)]
/// Row assignments of the addition worksheet.
pub struct AddRowIndex {
    /// Row of the first addend.
    pub first_addend: usize,
    /// Carry row, directly above the separator.
    pub carry: usize,
    /// Row whose top edge carries the separator line.
    pub separator: usize,
    /// Result row.
    pub result: usize,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
/// Resolved geometry of the addition diagram.
pub struct AddLayout {
    /// Cell to pixel mapping.
    pub grid: GridMap,
    /// Grid columns including the sign column.
    pub cols: usize,
    /// Grid rows.
    pub rows: usize,
    /// Row assignments.
    pub row_index: AddRowIndex,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Reveal stage the diagram was drawn at.
    pub stage: AddStage,
}

impl AddLayout {
    /// Compute the worksheet geometry for a trace.
    pub fn new(trace: &AddTrace, options: &AddRenderOptions) -> Self {
        let cols = trace.max_digits + 1;
        let first_addend = 0;
        let carry = first_addend + trace.addends.len();
        let separator = carry + 1;
        let result = separator + 1;
        let rows = result + 1;
        Self {
            grid: GridMap::new(options.cell, options.pad),
            cols,
            rows,
            row_index: AddRowIndex {
                first_addend,
                carry,
                separator,
                result,
            },
            width: options.pad * 2.0 + cols as f64 * options.cell,
            height: options.pad * 2.0 + rows as f64 * options.cell,
            stage: options.stage,
        }
    }

    /// Grid column of a place value, ones place rightmost.
    ///
    /// A result wider than the grid walks left into the sign column and
    /// beyond, so the column index is signed.
    pub fn digit_col(&self, place: usize) -> i64 {
        self.cols as i64 - 1 - place as i64
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Serializable payload behind an addition diagram.
pub struct AddRenderData {
    /// The trace the diagram was drawn from.
    pub trace: AddTrace,
    /// Resolved geometry.
    pub layout: AddLayout,
}

#[tracing::instrument(skip(trace, options))]
/// Render the addition worksheet for a finished trace.
pub fn render_addition(trace: &AddTrace, options: &AddRenderOptions) -> Diagram<AddRenderData> {
    let layout = AddLayout::new(trace, options);
    let stage = options.stage;
    let mut doc = SvgDoc::new(layout.width, layout.height);
    doc.background("white");

    if options.show_grid && stage >= AddStage::Grid {
        doc.framed_grid(
            &RectStyle::outlined("#b3d1ff", 2.0),
            &LineStyle::new("#cfe3ff", 2.0),
            layout.grid.x(0),
            layout.grid.y(0),
            layout.cols,
            layout.rows,
            options.cell,
        );
    }

    // Faint place-value bands behind the digit columns, at every stage.
    for place in 0..trace.max_digits {
        let x = layout.grid.x(layout.digit_col(place));
        let y = layout.grid.y(0);
        doc.rect(
            &RectStyle::filled(color::add_place_color(place)).with_opacity(0.06),
            Rect::new(x, y, x + options.cell, y + layout.rows as f64 * options.cell),
        );
    }

    if stage >= AddStage::Operands {
        let plus_row = layout.row_index.first_addend + trace.addends.len() - 1;
        cell_text(&mut doc, &layout, 0, plus_row, 26.0, "#111", "+");

        // Addend digits straight from the numbers, without leading zeros.
        for (row, &addend) in trace.addends.iter().enumerate() {
            for (place, digit) in digits::digits_of(addend.unsigned_abs()).iter().enumerate() {
                cell_text(
                    &mut doc,
                    &layout,
                    layout.digit_col(place),
                    layout.row_index.first_addend + row,
                    24.0,
                    color::add_place_color(place),
                    &digit.to_string(),
                );
            }
        }

        let y = layout.grid.y(layout.row_index.separator as i64);
        doc.line(
            &LineStyle::new("#222", 3.0),
            layout.grid.x(0),
            y,
            layout.grid.x(layout.cols as i64),
            y,
        );
    }

    if options.show_marks && stage >= AddStage::Marks {
        for column in &trace.columns {
            if column.col >= trace.max_digits {
                continue;
            }
            let x = layout.grid.x(layout.digit_col(column.col));
            for mark in &column.marks {
                let row = if mark.row == CARRY_ROW {
                    layout.row_index.carry
                } else {
                    layout.row_index.first_addend + mark.row as usize
                };
                let y_mark = layout.grid.y(row as i64) + options.cell - 10.0;
                doc.line(
                    &LineStyle::new(color::add_place_color(column.col), 5.0).with_round_cap(),
                    x + 8.0,
                    y_mark,
                    x + options.cell - 8.0,
                    y_mark,
                );
            }
        }
    }

    if options.show_carry && stage >= AddStage::Carries {
        for column in &trace.columns {
            if column.col + 1 >= trace.max_digits || column.carry_out == 0 {
                continue;
            }
            // A multi-digit carry is written out as a whole number.
            cell_text(
                &mut doc,
                &layout,
                layout.digit_col(column.col + 1),
                layout.row_index.carry,
                18.0,
                color::add_place_color(column.col + 1),
                &column.carry_out.to_string(),
            );
        }
    }

    if stage >= AddStage::Result {
        for (place, digit) in trace.sum_digits.iter().enumerate() {
            cell_text(
                &mut doc,
                &layout,
                layout.digit_col(place),
                layout.row_index.result,
                26.0,
                color::add_place_color(place),
                &digit.to_string(),
            );
        }
    }

    if !trace.warnings.is_empty() {
        let caption = trace.warnings.join(" | ");
        doc.text(
            &TextStyle::sans(14.0)
                .with_fill("#b71c1c")
                .with_anchor(TextAnchor::Start),
            options.pad,
            layout.height - 10.0,
            &caption,
        );
    }

    Diagram {
        svg: doc.finish(),
        data: AddRenderData {
            trace: trace.clone(),
            layout,
        },
    }
}

/// Centered sans text inside a worksheet cell.
fn cell_text(
    doc: &mut SvgDoc,
    layout: &AddLayout,
    col: i64,
    row: usize,
    size: f64,
    fill: &str,
    content: &str,
) {
    let center = layout.grid.center(col, row as i64);
    doc.text(
        &TextStyle::sans(size).with_fill(fill),
        center.x,
        center.y + 8.0,
        content,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/add.rs"]
mod tests;
