//! Staged diagram of the Egel division worksheet.
//!
//! The dividend occupies the left columns and the divisor sits right of the
//! long vertical rule. Each subtraction round adds two rows: the subtracted
//! multiple with its quotient chunk beside the rule, then the running
//! remainder. The helper table appears above or beside the worksheet, and
//! the footer shows the total quotient with an optional remainder badge.
//! A monochrome mode drops all color for print-friendly output.

use kurbo::Rect;

use crate::config::options::{DivColorMode, DivRenderOptions, DivStage, HelperPanel, QuotientAlign};
use crate::foundation::digits;
use crate::render::color;
use crate::render::grid::GridMap;
use crate::render::svg::{LineStyle, RectStyle, SvgDoc, TextAnchor, TextStyle};
use crate::render::Diagram;
use crate::trace::div::DivTrace;

#[derive(Clone, Copy, Debug, serde::Serialize)]
/// Resolved geometry of the division diagram.
pub struct DivLayout {
    /// Cell to pixel mapping.
    pub grid: GridMap,
    /// Columns reserved for the dividend and the working rows.
    pub dividend_cols: usize,
    /// Columns reserved for the divisor and quotient chunks.
    pub quotient_cols: usize,
    /// Total grid columns, including the rule column.
    pub cols: usize,
    /// Total grid rows: header, two per round, footer.
    pub rows: usize,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Reveal stage the diagram was drawn at.
    pub stage: DivStage,
}

impl DivLayout {
    /// Compute the worksheet geometry for a trace.
    pub fn new(trace: &DivTrace, options: &DivRenderOptions) -> Self {
        let dividend_cols = digits::digit_count(trace.dividend.unsigned_abs());
        let quotient_cols = digits::digit_count(trace.divisor.unsigned_abs())
            .max(digits::digit_count(trace.quotient));
        let cols = dividend_cols + 1 + quotient_cols;
        let rows = trace.steps.len() * 2 + 3;

        let pad_x = options.unit * 1.2;
        let pad_y = options.unit * 1.4;
        let side_panel = if options.helper == HelperPanel::Side {
            options.unit * 5.0
        } else {
            0.0
        };
        let badge_room = if options.stage >= DivStage::Result && options.show_remainder {
            options.unit * 2.2
        } else {
            0.0
        };

        Self {
            grid: GridMap::with_pads(options.unit, pad_x, pad_y),
            dividend_cols,
            quotient_cols,
            cols,
            rows,
            width: pad_x * 2.0 + cols as f64 * options.unit + side_panel,
            height: pad_y * 2.0 + rows as f64 * options.unit + badge_room,
            stage: options.stage,
        }
    }

    /// Right-aligned text x inside a grid cell.
    fn right_edge(&self, col: i64) -> f64 {
        self.grid.x(col) + self.grid.cell * 0.88
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Serializable payload behind a division diagram.
pub struct DivRenderData {
    /// The trace the diagram was drawn from.
    pub trace: DivTrace,
    /// Resolved geometry.
    pub layout: DivLayout,
}

#[tracing::instrument(skip(trace, options))]
/// Render the division worksheet for a finished trace.
pub fn render_division(trace: &DivTrace, options: &DivRenderOptions) -> Diagram<DivRenderData> {
    let layout = DivLayout::new(trace, options);
    let stage = options.stage;
    let unit = options.unit;
    let grid = &layout.grid;

    let ink = if options.monochrome { "#000" } else { "#111827" };
    let grid_stroke = if options.monochrome {
        "#000000"
    } else {
        color::LATTICE_STROKE
    };
    let main_line = if options.monochrome {
        color::css_color("black")
    } else {
        color::css_color("green!50!black")
    };

    let mut doc = SvgDoc::new(layout.width, layout.height);
    doc.rect(
        &RectStyle::filled("white").with_opacity(0.0),
        Rect::new(0.0, 0.0, layout.width, layout.height),
    );

    // Rounded paper sheet behind the worksheet.
    let paper_stroke = if options.monochrome { "#111111" } else { "#e5e7eb" };
    doc.rect(
        &RectStyle::filled("#ffffff")
            .with_stroke(paper_stroke, 1.0)
            .with_radius(18.0),
        Rect::new(
            grid.pad_x * 0.55,
            grid.pad_y * 0.55,
            grid.pad_x * 0.55 + layout.cols as f64 * unit + grid.pad_x * 0.9,
            grid.pad_y * 0.55 + layout.rows as f64 * unit + grid.pad_y * 0.6,
        ),
    );

    let divisor = trace.divisor;
    let helper_rows: Vec<String> = trace
        .helper
        .iter()
        .map(|entry| format!("{divisor}×{}={}", entry.factor, entry.value))
        .collect();

    if stage >= DivStage::Setup && options.helper == HelperPanel::Top {
        let bx = grid.x(0);
        let by = grid.yf(-1.05);
        let box_h = unit * 0.72;
        doc.rect(
            &RectStyle::filled("#ffffff")
                .with_stroke(&main_line, 2.0)
                .with_radius(12.0),
            Rect::new(bx, by, bx + layout.cols as f64 * unit, by + box_h),
        );
        doc.text(
            &TextStyle::sans((unit * 0.26).floor())
                .with_weight(800)
                .with_fill(ink)
                .with_anchor(TextAnchor::Start),
            bx + 10.0,
            by + box_h * 0.62,
            &format!("Туслах хүрд: {}", helper_rows.join(", ")),
        );
    }

    if options.show_grid {
        let opacity = if options.monochrome { 0.28 } else { 0.22 };
        doc.grid(
            &LineStyle::new(grid_stroke, 1.0).with_opacity(opacity),
            grid.x(0),
            grid.y(0),
            layout.cols,
            layout.rows,
            unit,
        );
    }

    let rule = LineStyle::new(&main_line, 3.0);
    let rule_col = layout.dividend_cols as i64;
    doc.line(
        &rule,
        grid.x(rule_col),
        grid.y(0),
        grid.x(rule_col),
        grid.y(layout.rows as i64),
    );
    doc.line(
        &rule,
        grid.x(rule_col),
        grid.y(1),
        grid.x(layout.cols as i64),
        grid.y(1),
    );

    let digit = TextStyle::serif((unit * 0.44).floor())
        .with_weight(800)
        .with_fill(ink);

    if stage >= DivStage::Setup {
        let y = grid.y(0) + unit * 0.72;
        place_digits(
            &mut doc,
            &layout,
            &digit,
            rule_col,
            y,
            &trace.dividend.to_string(),
        );
        for (j, ch) in trace.divisor.to_string().chars().enumerate() {
            let col = rule_col + 1 + j as i64;
            doc.text(&digit, grid.x(col) + unit * 0.5, y, &ch.to_string());
        }
    }

    if stage >= DivStage::Setup && options.helper == HelperPanel::Side {
        let bx = grid.x(layout.cols as i64) + unit * 0.45;
        let by = grid.y(0);
        let bw = unit * 3.4;
        let side_stroke = if options.monochrome { "#111827" } else { main_line.as_str() };
        doc.rect(
            &RectStyle::filled("#ffffff")
                .with_stroke(side_stroke, 2.0)
                .with_radius(16.0),
            Rect::new(bx, by, bx + bw, by + unit * 2.6),
        );
        doc.text(
            &TextStyle::sans((unit * 0.34).floor())
                .with_weight(900)
                .with_fill(ink),
            bx + bw * 0.5,
            by + unit * 0.6,
            "Туслах",
        );
        let row = TextStyle::sans((unit * 0.28).floor())
            .with_weight(800)
            .with_fill(ink)
            .with_anchor(TextAnchor::Start);
        for (r, line) in helper_rows.iter().enumerate() {
            doc.text(&row, bx + unit * 0.28, by + unit * (1.15 + r as f64 * 0.55), line);
        }
    }

    if stage >= DivStage::Steps {
        for (idx, step) in trace.steps.iter().enumerate() {
            let color = if options.monochrome || options.color_mode == DivColorMode::Plain {
                ink.to_owned()
            } else {
                color::step_color(idx)
            };
            let colored = digit.clone().with_fill(&color);
            let sub_row = 1 + 2 * idx as i64;
            let y = grid.y(sub_row) + unit * 0.72;

            doc.text(
                &TextStyle::serif((unit * 0.52).floor())
                    .with_weight(900)
                    .with_fill(&color),
                grid.xf(-0.7) + unit * 0.5,
                y,
                "−",
            );
            place_digits(&mut doc, &layout, &colored, rule_col, y, &step.subtracted.to_string());

            let chunk = step.quotient_part.to_string();
            let chunk_style = colored.clone().with_anchor(TextAnchor::End);
            let len = chunk.chars().count() as i64;
            for (j, ch) in chunk.chars().enumerate() {
                let col = match options.align {
                    QuotientAlign::Left => rule_col + 1 + j as i64,
                    QuotientAlign::Right => {
                        rule_col + 1 + layout.quotient_cols as i64 - (len - j as i64)
                    }
                };
                doc.text(&chunk_style, layout.right_edge(col), y, &ch.to_string());
            }

            let line_y = grid.y(sub_row + 1);
            doc.line(
                &LineStyle::new("#111827", 2.0).with_opacity(0.95),
                grid.x(0),
                line_y,
                grid.x(rule_col),
                line_y,
            );

            let after = step.remainder_before - step.subtracted;
            place_digits(
                &mut doc,
                &layout,
                &digit,
                rule_col,
                grid.y(sub_row + 1) + unit * 0.72,
                &after.to_string(),
            );
        }
    }

    if stage >= DivStage::Result {
        let footer_row = layout.rows as i64 - 1;
        doc.line(
            &rule,
            grid.x(rule_col),
            grid.y(footer_row),
            grid.x(layout.cols as i64),
            grid.y(footer_row),
        );

        let total = trace.quotient.to_string();
        let len = total.chars().count() as i64;
        let total_style = TextStyle::serif((unit * 0.46).floor())
            .with_weight(900)
            .with_fill(ink)
            .with_anchor(TextAnchor::End);
        for (j, ch) in total.chars().enumerate() {
            let col = rule_col + 1 + layout.quotient_cols as i64 - (len - j as i64);
            doc.text(
                &total_style,
                layout.right_edge(col),
                grid.y(footer_row) + unit * 0.72,
                &ch.to_string(),
            );
        }

        if options.show_remainder {
            let bx = grid.x(0);
            let by = grid.y(layout.rows as i64) + unit * 0.35;
            doc.rect(
                &RectStyle::filled("#ffffff")
                    .with_stroke(&main_line, 2.0)
                    .with_radius(14.0),
                Rect::new(bx, by, bx + unit * 4.8, by + unit * 0.86),
            );
            doc.text(
                &TextStyle::sans((unit * 0.30).floor())
                    .with_weight(900)
                    .with_fill(ink)
                    .with_anchor(TextAnchor::Start),
                bx + unit * 0.28,
                by + unit * 0.58,
                &format!("Үлдэгдэл: {}", trace.remainder),
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
        data: DivRenderData {
            trace: trace.clone(),
            layout,
        },
    }
}

/// Draw a number right-aligned so its last digit fills the cell left of
/// `end_col`.
fn place_digits(
    doc: &mut SvgDoc,
    layout: &DivLayout,
    style: &TextStyle,
    end_col: i64,
    y: f64,
    value: &str,
) {
    let len = value.chars().count() as i64;
    for (j, ch) in value.chars().enumerate() {
        let col = end_col - (len - j as i64);
        let x = layout.grid.x(col) + layout.grid.cell * 0.5;
        doc.text(style, x, y, &ch.to_string());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/div.rs"]
mod tests;
