//! Staged diagram of the Egel multiplication lattice.
//!
//! The multiplicand runs down the left diagonal, the multiplier down the
//! right one, and every digit pair meets in a two-cell partial-product
//! block. Below the lattice sit the carry row and the product under its
//! rule. Stages reveal the lattice, the operand digits, the blocks and
//! finally the column sum with its marks and carries. Color modes tint the
//! blocks by multiplicand digit or as a checkerboard.

use kurbo::Rect;

use crate::config::options::{MulColorMode, MulRenderOptions, MulStage};
use crate::foundation::digits;
use crate::render::color;
use crate::render::grid::GridMap;
use crate::render::svg::{LineStyle, RectStyle, SvgDoc, TextAnchor, TextStyle};
use crate::render::Diagram;
use crate::trace::mul::MulTrace;

/// Mark length as a fraction of the cell edge.
const MARK_LEN_FACTOR: f64 = 0.70;

/// Vertical spacing of stacked marks as a fraction of the cell edge.
const MARK_STACK_STEP: f64 = 0.08;

/// Inclusive cell bounding box under construction.
struct Bounds {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl Bounds {
    fn new() -> Self {
        Self {
            x0: i64::MAX,
            y0: i64::MAX,
            x1: i64::MIN,
            y1: i64::MIN,
        }
    }

    fn add(&mut self, x: i64, y: i64) {
        self.x0 = self.x0.min(x);
        self.x1 = self.x1.max(x);
        self.y0 = self.y0.min(y);
        self.y1 = self.y1.max(y);
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
/// Resolved geometry of the multiplication diagram.
pub struct MulLayout {
    /// Cell to pixel mapping, origin at the padded top-left cell.
    pub grid: GridMap,
    /// Leftmost cell column after padding.
    pub x0: i64,
    /// Topmost cell row after padding.
    pub y0: i64,
    /// Rightmost cell column after padding.
    pub x1: i64,
    /// Bottom cell row after padding.
    pub y1: i64,
    /// Row of the carry digits.
    pub carry_row: i64,
    /// Row of the product digits.
    pub result_row: i64,
    /// Column of the most significant product digit.
    pub result_start_col: i64,
    /// Column just past the ones product digit, where the rule ends.
    pub result_end_col: i64,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Reveal stage the diagram was drawn at.
    pub stage: MulStage,
}

impl MulLayout {
    /// Compute the lattice geometry for a trace.
    pub fn new(trace: &MulTrace, options: &MulRenderOptions) -> Self {
        let m = trace.a_digits.len() as i64;
        let n = trace.b_digits.len() as i64;
        let carry_row = trace.y_max + 2;
        let result_row = carry_row + 1;
        let result_len = trace.product_digits.len() as i64;
        let result_start_col = n - (result_len - 1);
        let result_end_col = n + 1;

        let mut b = Bounds::new();
        for i in 0..m {
            b.add(-2 - i, i);
        }
        b.add(-1, 0);
        b.add(0, 0);
        b.add(1, 0);
        for j in 0..n {
            b.add(2 + j, j);
        }
        for cell in &trace.cells {
            b.add(cell.x, cell.y);
            b.add(cell.x + 1, cell.y);
        }
        for k in 0..result_len {
            b.add(result_start_col + k, result_row);
        }
        b.add(result_start_col, result_row);
        b.add(result_end_col, result_row);

        // Multi-digit carries reach further left than their own column.
        let mut extra_left = b.x0;
        for carry in &trace.carries {
            let width = digits::digit_count(u64::from(carry.value)) as i64;
            extra_left = extra_left.min(carry.x - (width - 1));
        }
        if extra_left < b.x0 {
            b.x0 = extra_left - 1;
        }
        b.add(trace.x_min - 3, carry_row);
        b.add(trace.x_max, carry_row);

        let x0 = b.x0 - 1;
        let y0 = b.y0 - 1;
        let x1 = b.x1 + 1;
        let y1 = b.y1 + 1;

        let pad = options.unit * 0.6;
        Self {
            grid: GridMap::new(options.unit, pad).with_origin(x0, y0),
            x0,
            y0,
            x1,
            y1,
            carry_row,
            result_row,
            result_start_col,
            result_end_col,
            width: (x1 - x0 + 1) as f64 * options.unit + pad * 2.0,
            height: (y1 - y0 + 1) as f64 * options.unit + pad * 2.0,
            stage: options.stage,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Serializable payload behind a multiplication diagram.
pub struct MulRenderData {
    /// The trace the diagram was drawn from.
    pub trace: MulTrace,
    /// Resolved geometry.
    pub layout: MulLayout,
}

#[tracing::instrument(skip(trace, options))]
/// Render the multiplication lattice for a finished trace.
pub fn render_multiplication(
    trace: &MulTrace,
    options: &MulRenderOptions,
) -> Diagram<MulRenderData> {
    let layout = MulLayout::new(trace, options);
    let stage = options.stage;
    let unit = options.unit;
    let grid = &layout.grid;
    let mut doc = SvgDoc::new(layout.width, layout.height);

    if options.show_grid {
        doc.grid(
            &LineStyle::new(color::LATTICE_STROKE, 1.0).with_opacity(0.22),
            grid.x(layout.x0),
            grid.y(layout.y0),
            (layout.x1 - layout.x0 + 1) as usize,
            (layout.y1 - layout.y0 + 1) as usize,
            unit,
        );
    }

    // Marker mode lays translucent pads under the digits before any text.
    if options.color_mode == MulColorMode::Marker {
        if stage >= MulStage::Digits {
            for i in 0..trace.a_digits.len() {
                let fill = color::source_color(i, &options.a_colors);
                let x = grid.x(-2 - i as i64) + 0.10 * unit;
                let y = grid.y(i as i64) + 0.10 * unit;
                doc.rect(
                    &RectStyle::filled(&fill)
                        .with_opacity(0.20)
                        .with_radius(0.18 * unit),
                    Rect::new(x, y, x + 0.80 * unit, y + 0.80 * unit),
                );
            }
        }
        if stage >= MulStage::Blocks {
            for cell in &trace.cells {
                let fill = color::source_color(cell.i, &options.a_colors);
                let x = grid.x(cell.x) + 0.08 * unit;
                let y = grid.y(cell.y) + 0.08 * unit;
                doc.rect(
                    &RectStyle::filled(&fill)
                        .with_opacity(0.20)
                        .with_radius(0.18 * unit),
                    Rect::new(x, y, x + 1.84 * unit, y + 0.84 * unit),
                );
            }
        }
    }

    if stage >= MulStage::Digits {
        for (i, d) in trace.a_digits.iter().enumerate() {
            let fill = match options.color_mode {
                MulColorMode::SourceColor => color::source_color(i, &options.a_colors),
                _ => "#000000".to_owned(),
            };
            let center = grid.center(-2 - i as i64, i as i64);
            doc.text(
                &TextStyle::serif(26.0).with_fill(&fill),
                center.x,
                center.y + 8.0,
                &d.to_string(),
            );
        }

        let ops = TextStyle::serif(28.0);
        let row = grid.center(0, 0).y + 8.0;
        doc.text(&ops, grid.center(-1, 0).x, row, "·");
        doc.text(&ops, grid.center(0, 0).x, row, "×");
        doc.text(&ops, grid.center(1, 0).x, row, "·");

        // Multiplier digits stay black in every mode.
        for (j, d) in trace.b_digits.iter().rev().enumerate() {
            let center = grid.center(2 + j as i64, j as i64);
            doc.text(
                &TextStyle::serif(26.0),
                center.x,
                center.y + 8.0,
                &d.to_string(),
            );
        }
    }

    if stage >= MulStage::Blocks {
        for cell in &trace.cells {
            let fill = match options.color_mode {
                MulColorMode::SourceColor => color::source_color(cell.i, &options.a_colors),
                MulColorMode::Checker => color::checker_color(
                    cell.x,
                    cell.y,
                    &options.checker_a,
                    &options.checker_b,
                ),
                _ => "#000000".to_owned(),
            };
            let style = TextStyle::serif(26.0).with_fill(&fill);
            let y = grid.center(0, cell.y).y + 8.0;
            doc.text(&style, grid.center(cell.x, 0).x, y, &cell.tens.to_string());
            doc.text(&style, grid.center(cell.x + 1, 0).x, y, &cell.units.to_string());
        }
    }

    if stage >= MulStage::Carries {
        if options.show_marks {
            for mark in &trace.marks {
                let stroke = color::place_color(mark.x, trace.x_max);
                let center_x = grid.center(mark.x, 0).x;
                if mark.count > 8 {
                    // Too many marks to stack inside the cell.
                    doc.text(
                        &TextStyle::serif(14.0).with_fill(&stroke),
                        center_x,
                        grid.center(0, mark.y).y - 6.0,
                        &mark.count.to_string(),
                    );
                    continue;
                }
                let y_bottom = grid.y(mark.y + 1);
                let x1 = center_x - (MARK_LEN_FACTOR * unit) / 2.0;
                let x2 = center_x + (MARK_LEN_FACTOR * unit) / 2.0;
                for k in 0..mark.count {
                    let y = y_bottom - (MARK_STACK_STEP * unit) * f64::from(k);
                    doc.line(&LineStyle::new(&stroke, 3.0), x1, y, x2, y);
                }
            }
        }

        if options.show_carry {
            let size = (22.0 * options.carry_scale).floor();
            for carry in &trace.carries {
                let fill = color::place_color(carry.src_x, trace.x_max);
                let style = TextStyle::serif(size).with_fill(&fill);
                let y = grid.center(0, layout.carry_row).y + 8.0;
                for (i, d) in digits::digits_of(u64::from(carry.value)).iter().enumerate() {
                    doc.text(
                        &style,
                        grid.center(carry.x - i as i64, 0).x,
                        y,
                        &d.to_string(),
                    );
                }
            }
        }

        let rule_y = grid.y(layout.result_row);
        doc.line(
            &LineStyle::new("#000", 3.0),
            grid.x(layout.result_start_col),
            rule_y,
            grid.x(layout.result_end_col),
            rule_y,
        );

        let y = grid.center(0, layout.result_row).y + 10.0;
        for (k, d) in trace.product_digits.iter().rev().enumerate() {
            doc.text(
                &TextStyle::serif(28.0),
                grid.center(layout.result_start_col + k as i64, 0).x,
                y,
                &d.to_string(),
            );
        }
    }

    if !trace.warnings.is_empty() {
        let caption = trace.warnings.join(" | ");
        doc.text(
            &TextStyle::sans(14.0)
                .with_fill("#b71c1c")
                .with_anchor(TextAnchor::Start),
            grid.pad_x,
            layout.height - 10.0,
            &caption,
        );
    }

    Diagram {
        svg: doc.finish(),
        data: MulRenderData {
            trace: trace.clone(),
            layout,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mul.rs"]
mod tests;
