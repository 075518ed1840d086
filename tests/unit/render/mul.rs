use super::*;
use crate::config::options::MulRenderOptions;
use crate::trace::mul::trace_multiplication;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn staged(stage: MulStage) -> MulRenderOptions {
    MulRenderOptions {
        stage,
        ..Default::default()
    }
}

#[test]
fn layout_pads_around_the_lattice() {
    let trace = trace_multiplication(23, 45).unwrap();
    let layout = MulLayout::new(&trace, &MulRenderOptions::default());
    assert_eq!((layout.x0, layout.y0), (-5, -1));
    assert_eq!((layout.x1, layout.y1), (4, 8));
    assert_eq!(layout.carry_row, 6);
    assert_eq!(layout.result_row, 7);
    assert_eq!(layout.result_start_col, -1);
    assert_eq!(layout.result_end_col, 3);
    assert_eq!(layout.width, 627.2);
    assert_eq!(layout.height, 627.2);
}

#[test]
fn grid_stage_draws_the_lattice_alone() {
    let trace = trace_multiplication(23, 45).unwrap();
    let diagram = render_multiplication(&trace, &staged(MulStage::Grid));
    // 10 columns and 10 rows of cells, borders included.
    assert_eq!(count(&diagram.svg, "<line"), 22);
    assert!(diagram.svg.contains("stroke=\"#35b7c8\" stroke-width=\"1\" opacity=\"0.22\""));
    assert_eq!(count(&diagram.svg, "<text"), 0);
}

#[test]
fn digit_stage_places_both_diagonals() {
    let trace = trace_multiplication(23, 45).unwrap();
    let diagram = render_multiplication(&trace, &staged(MulStage::Digits));
    // Two multiplicand digits, the dot-times-dot row, two multiplier digits.
    assert_eq!(count(&diagram.svg, "<text"), 7);
    assert!(diagram.svg.contains("<text x=\"229.60\" y=\"125.60\" font-size=\"26\""));
    assert!(diagram.svg.contains(">×</text>"));
    assert!(diagram.svg.contains(">·</text>"));
    // Multiplier reads top-down most significant first: 4 above 5.
    assert!(diagram.svg.contains("<text x=\"453.60\" y=\"125.60\" font-size=\"26\""));
}

#[test]
fn block_stage_fills_the_partial_products() {
    let trace = trace_multiplication(23, 45).unwrap();
    let diagram = render_multiplication(&trace, &staged(MulStage::Blocks));
    assert_eq!(count(&diagram.svg, "<text"), 15);
}

#[test]
fn carry_stage_adds_marks_carries_rule_and_product() {
    let trace = trace_multiplication(23, 45).unwrap();
    let diagram = render_multiplication(&trace, &staged(MulStage::Carries));
    assert!(diagram.svg.contains(
        "<line x1=\"322.00\" y1=\"369.60\" x2=\"361.20\" y2=\"369.60\" stroke=\"#0b5d1e\" \
         stroke-width=\"3\" opacity=\"1\"/>"
    ));
    assert!(diagram.svg.contains("<text x=\"285.60\" y=\"461.60\" font-size=\"22\""));
    assert!(diagram.svg.contains(
        "<line x1=\"257.60\" y1=\"481.60\" x2=\"481.60\" y2=\"481.60\" stroke=\"#000\" \
         stroke-width=\"3\" opacity=\"1\"/>"
    ));
    assert!(diagram.svg.contains("<text x=\"285.60\" y=\"519.60\" font-size=\"28\""));
    assert_eq!(count(&diagram.svg, "<text"), 20);
}

#[test]
fn marker_mode_lays_pads_under_digits_then_blocks() {
    let trace = trace_multiplication(23, 45).unwrap();
    let digits_only = MulRenderOptions {
        color_mode: MulColorMode::Marker,
        stage: MulStage::Digits,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &digits_only).svg;
    assert_eq!(count(&svg, "rx=\"10.08\""), 2);

    let blocks = MulRenderOptions {
        color_mode: MulColorMode::Marker,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &blocks).svg;
    assert_eq!(count(&svg, "rx=\"10.08\""), 6);
    assert!(svg.contains("opacity=\"0.2\""));
}

#[test]
fn source_mode_tints_multiplicand_digits_and_blocks() {
    let trace = trace_multiplication(23, 45).unwrap();
    let options = MulRenderOptions {
        color_mode: MulColorMode::SourceColor,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &options).svg;
    // Units digit of 23 and both sub-digits of its blocks use palette red.
    assert!(svg.contains("fill=\"#cc0000\">3<"));
    assert!(svg.contains("fill=\"#005bbb\">2<"));
    // Multiplier digits stay black.
    assert!(svg.contains("<text x=\"453.60\" y=\"125.60\" font-size=\"26\" \
         font-family=\"Times New Roman, serif\" font-weight=\"700\" text-anchor=\"middle\" \
         fill=\"#000\">4</text>"));

    let overridden = MulRenderOptions {
        color_mode: MulColorMode::SourceColor,
        a_colors: vec!["teal".to_owned()],
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &overridden).svg;
    assert!(svg.contains("fill=\"#0f766e\">3<"));
    assert!(svg.contains("fill=\"#005bbb\">2<"));
}

#[test]
fn checker_mode_alternates_over_blocks() {
    let trace = trace_multiplication(23, 45).unwrap();
    let options = MulRenderOptions {
        color_mode: MulColorMode::Checker,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &options).svg;
    // The 2x4 block at (-1, 3) lands on red parity; its units digit is 8.
    assert!(svg.contains("fill=\"#cc0000\">8<"));
    assert!(svg.contains("fill=\"#005bbb\""));
}

#[test]
fn toggles_drop_their_layers() {
    let trace = trace_multiplication(23, 45).unwrap();
    let no_grid = MulRenderOptions {
        show_grid: false,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &no_grid).svg;
    assert_eq!(count(&svg, "#35b7c8"), 0);

    let no_marks = MulRenderOptions {
        show_marks: false,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &no_marks).svg;
    assert!(!svg.contains("y1=\"369.60\""));

    let no_carry = MulRenderOptions {
        show_carry: false,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &no_carry).svg;
    assert_eq!(count(&svg, "font-size=\"22\""), 0);
}

#[test]
fn carry_scale_shrinks_the_carry_digits() {
    let trace = trace_multiplication(23, 45).unwrap();
    let options = MulRenderOptions {
        carry_scale: 0.75,
        ..Default::default()
    };
    let svg = render_multiplication(&trace, &options).svg;
    assert!(svg.contains("font-size=\"16\""));
}

#[test]
fn data_payload_carries_trace_and_layout() {
    let trace = trace_multiplication(23, 45).unwrap();
    let diagram = render_multiplication(&trace, &MulRenderOptions::default());
    assert_eq!(diagram.data.trace.product(), 1035);
    assert_eq!(diagram.data.layout.x0, -5);
    let again = render_multiplication(&trace, &MulRenderOptions::default());
    assert_eq!(diagram.svg, again.svg);
}
