//! Staged diagram of the Egel subtraction worksheet.
//!
//! Four rows on a framed grid: minuend, subtrahend, the borrow digits
//! written directly below the operands, and the result under a rule. Both
//! operands are drawn zero-padded to the common width. When the subtrahend
//! exceeds the minuend the ten-complement wraps and the diagram carries a
//! warning caption in the top right corner.

use crate::config::options::{SubRenderOptions, SubStage};
use crate::render::grid::GridMap;
use crate::render::svg::{LineStyle, RectStyle, SvgDoc, TextAnchor, TextStyle};
use crate::render::Diagram;
use crate::trace::sub::SubTrace;

#[derive(Clone, Copy, Debug, serde::Serialize)]
/// Row assignments of the subtraction worksheet.
pub struct SubRowIndex {
    /// Minuend row.
    pub minuend: usize,
    /// Subtrahend row.
    pub subtrahend: usize,
    /// Borrow row.
    pub borrow: usize,
    /// Result row.
    pub result: usize,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
/// Resolved geometry of the subtraction diagram.
pub struct SubLayout {
    /// Cell to pixel mapping.
    pub grid: GridMap,
    /// Grid columns including the sign column.
    pub cols: usize,
    /// Grid rows.
    pub rows: usize,
    /// Row assignments.
    pub row_index: SubRowIndex,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Reveal stage the diagram was drawn at.
    pub stage: SubStage,
}

impl SubLayout {
    /// Compute the worksheet geometry for a trace.
    pub fn new(trace: &SubTrace, options: &SubRenderOptions) -> Self {
        let cols = trace.width + 1;
        let rows = 4;
        let pad = options.unit * 0.45;
        Self {
            grid: GridMap::new(options.unit, pad),
            cols,
            rows,
            row_index: SubRowIndex {
                minuend: 0,
                subtrahend: 1,
                borrow: 2,
                result: 3,
            },
            width: pad * 2.0 + cols as f64 * options.unit,
            height: pad * 2.0 + rows as f64 * options.unit,
            stage: options.stage,
        }
    }

    /// Grid column of a place value, ones place rightmost.
    pub fn digit_col(&self, place: usize) -> i64 {
        self.cols as i64 - 1 - place as i64
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Serializable payload behind a subtraction diagram.
pub struct SubRenderData {
    /// The trace the diagram was drawn from.
    pub trace: SubTrace,
    /// Resolved geometry.
    pub layout: SubLayout,
}

#[tracing::instrument(skip(trace, options))]
/// Render the subtraction worksheet for a finished trace.
pub fn render_subtraction(trace: &SubTrace, options: &SubRenderOptions) -> Diagram<SubRenderData> {
    let layout = SubLayout::new(trace, options);
    let stage = options.stage;
    let unit = options.unit;
    let mut doc = SvgDoc::new(layout.width, layout.height);
    doc.background("white");

    let font_big = (unit * 0.50).floor();
    let font_small = (unit * 0.36).floor();

    if options.show_grid && stage >= SubStage::Grid {
        doc.framed_grid(
            &RectStyle::outlined("#b3d1ff", 2.0),
            &LineStyle::new("#cfe3ff", 1.5),
            layout.grid.x(0),
            layout.grid.y(0),
            layout.cols,
            layout.rows,
            unit,
        );
    }

    if stage >= SubStage::Operands {
        cell_text(
            &mut doc,
            &layout,
            0,
            layout.row_index.subtrahend,
            &TextStyle::sans(font_big).with_weight(900).with_middle_baseline(),
            "−",
        );
        // Both operands zero-padded to the common width.
        let digit = TextStyle::sans(font_big).with_weight(800).with_middle_baseline();
        for (place, d) in trace.a_digits.iter().enumerate() {
            cell_text(
                &mut doc,
                &layout,
                layout.digit_col(place),
                layout.row_index.minuend,
                &digit,
                &d.to_string(),
            );
        }
        for (place, d) in trace.b_digits.iter().enumerate() {
            cell_text(
                &mut doc,
                &layout,
                layout.digit_col(place),
                layout.row_index.subtrahend,
                &digit,
                &d.to_string(),
            );
        }
    }

    if options.show_marks && stage >= SubStage::Marks {
        let borrow = TextStyle::sans(font_small)
            .with_weight(800)
            .with_fill("#e53935")
            .with_middle_baseline();
        for (place, &b) in trace.borrows.iter().enumerate() {
            if b != 0 {
                cell_text(
                    &mut doc,
                    &layout,
                    layout.digit_col(place),
                    layout.row_index.borrow,
                    &borrow,
                    &b.to_string(),
                );
            }
        }
        let y = layout.grid.y(layout.row_index.result as i64);
        doc.line(
            &LineStyle::new("#1e88e5", (unit * 0.06).floor().max(2.0)),
            layout.grid.x(0),
            y,
            layout.grid.x(layout.cols as i64),
            y,
        );
    }

    if stage >= SubStage::Result {
        let result = TextStyle::sans(font_big)
            .with_weight(800)
            .with_fill("#0b5d1e")
            .with_middle_baseline();
        for (place, d) in trace.result_digits.iter().enumerate() {
            cell_text(
                &mut doc,
                &layout,
                layout.digit_col(place),
                layout.row_index.result,
                &result,
                &d.to_string(),
            );
        }
    }

    if !trace.warnings.is_empty() {
        let caption = trace.warnings.join(" | ");
        doc.text(
            &TextStyle::sans((unit * 0.28).floor())
                .with_weight(700)
                .with_fill("#cc0000")
                .with_anchor(TextAnchor::End)
                .with_middle_baseline(),
            layout.width - layout.grid.pad_x,
            layout.grid.pad_y * 0.55,
            &caption,
        );
    }

    Diagram {
        svg: doc.finish(),
        data: SubRenderData {
            trace: trace.clone(),
            layout,
        },
    }
}

/// Centered text inside a worksheet cell.
fn cell_text(
    doc: &mut SvgDoc,
    layout: &SubLayout,
    col: i64,
    row: usize,
    style: &TextStyle,
    content: &str,
) {
    let center = layout.grid.center(col, row as i64);
    doc.text(style, center.x, center.y, content);
}

#[cfg(test)]
#[path = "../../tests/unit/render/sub.rs"]
mod tests;
