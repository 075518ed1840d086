use super::*;
use crate::config::options::SubRenderOptions;
use crate::trace::sub::trace_subtraction;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn staged(stage: SubStage) -> SubRenderOptions {
    SubRenderOptions {
        stage,
        ..Default::default()
    }
}

#[test]
fn layout_squares_off_four_rows() {
    let trace = trace_subtraction(502, 78).unwrap();
    let layout = SubLayout::new(&trace, &SubRenderOptions::default());
    assert_eq!(layout.cols, 4);
    assert_eq!(layout.rows, 4);
    assert_eq!(layout.width, 274.4);
    assert_eq!(layout.height, 274.4);
    assert_eq!(layout.row_index.borrow, 2);
    assert_eq!(layout.digit_col(0), 3);
}

#[test]
fn grid_stage_draws_frame_only() {
    let trace = trace_subtraction(502, 78).unwrap();
    let diagram = render_subtraction(&trace, &staged(SubStage::Grid));
    assert!(diagram.svg.contains("#b3d1ff"));
    assert!(diagram.svg.contains("stroke=\"#cfe3ff\" stroke-width=\"1.5\""));
    assert_eq!(count(&diagram.svg, "<text"), 0);
}

#[test]
fn operand_stage_pads_to_common_width() {
    let trace = trace_subtraction(502, 78).unwrap();
    let diagram = render_subtraction(&trace, &staged(SubStage::Operands));
    assert!(diagram.svg.contains(
        "<text x=\"53.20\" y=\"109.20\" font-size=\"28\""
    ));
    assert!(diagram.svg.contains(">−</text>"));
    // Sign, three minuend digits, three padded subtrahend digits.
    assert_eq!(count(&diagram.svg, "<text"), 7);
    assert_eq!(count(&diagram.svg, "dominant-baseline=\"middle\""), 7);
    // The leading zero of 078 is drawn.
    assert!(diagram.svg.contains("<text x=\"109.20\" y=\"109.20\""));
}

#[test]
fn mark_stage_writes_borrows_and_underline() {
    let trace = trace_subtraction(502, 78).unwrap();
    let diagram = render_subtraction(&trace, &staged(SubStage::Marks));
    assert_eq!(count(&diagram.svg, "fill=\"#e53935\""), 2);
    assert!(diagram.svg.contains("font-size=\"20\""));
    assert!(diagram.svg.contains(
        "<line x1=\"25.20\" y1=\"193.20\" x2=\"249.20\" y2=\"193.20\" stroke=\"#1e88e5\" \
         stroke-width=\"3\" opacity=\"1\"/>"
    ));
    // Result digits wait for the next stage.
    assert_eq!(count(&diagram.svg, "#0b5d1e"), 0);
}

#[test]
fn result_stage_fills_the_bottom_row() {
    let trace = trace_subtraction(502, 78).unwrap();
    let diagram = render_subtraction(&trace, &staged(SubStage::Result));
    assert_eq!(count(&diagram.svg, "fill=\"#0b5d1e\""), 3);
    assert!(diagram.svg.contains("fill=\"#0b5d1e\">4<"));
    assert!(diagram.svg.contains("fill=\"#0b5d1e\">2<"));
}

#[test]
fn wrap_warning_caption_shows_at_every_stage() {
    let trace = trace_subtraction(78, 502).unwrap();
    let diagram = render_subtraction(&trace, &staged(SubStage::Grid));
    assert!(diagram.svg.contains("fill=\"#cc0000\""));
    assert!(diagram.svg.contains("A &lt; B байж магадгүй"));
    assert!(diagram.svg.contains("text-anchor=\"end\""));
    assert!(diagram.svg.contains("x=\"249.20\" y=\"13.86\""));
}

#[test]
fn toggles_drop_their_layers() {
    let trace = trace_subtraction(502, 78).unwrap();
    let no_grid = SubRenderOptions {
        show_grid: false,
        ..Default::default()
    };
    let svg = render_subtraction(&trace, &no_grid).svg;
    assert_eq!(count(&svg, "#b3d1ff"), 0);

    let no_marks = SubRenderOptions {
        show_marks: false,
        ..Default::default()
    };
    let svg = render_subtraction(&trace, &no_marks).svg;
    assert_eq!(count(&svg, "#e53935"), 0);
    assert_eq!(count(&svg, "#1e88e5"), 0);
}

#[test]
fn zero_padded_operands_keep_their_columns() {
    let trace = trace_subtraction(1000, 1).unwrap();
    let diagram = render_subtraction(&trace, &staged(SubStage::Operands));
    // Sign plus four digits per operand row.
    assert_eq!(count(&diagram.svg, "<text"), 9);
}
