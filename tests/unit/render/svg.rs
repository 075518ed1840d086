use super::*;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn document_frame_is_stable() {
    let doc = SvgDoc::new(100.0, 50.0);
    assert_eq!(doc.width(), 100.0);
    assert_eq!(doc.height(), 50.0);
    let svg = doc.finish();
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"50\" viewBox=\"0 0 100 50\">"
    ));
    assert!(svg.ends_with("\n</svg>"));
}

#[test]
fn background_covers_the_canvas() {
    let mut doc = SvgDoc::new(100.0, 50.0);
    doc.background("white");
    let svg = doc.finish();
    assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"100\" height=\"50\" fill=\"white\"/>"));
}

#[test]
fn text_coordinates_use_two_decimals() {
    let mut doc = SvgDoc::new(100.0, 50.0);
    doc.text(&TextStyle::serif(22.0), 10.0, 20.25, "7");
    let svg = doc.finish();
    assert!(svg.contains(
        "<text x=\"10.00\" y=\"20.25\" font-size=\"22\" font-family=\"Times New Roman, serif\" \
         font-weight=\"700\" text-anchor=\"middle\" fill=\"#000\">7</text>"
    ));
}

#[test]
fn text_escapes_content_and_fill() {
    let mut doc = SvgDoc::new(10.0, 10.0);
    let style = TextStyle::sans(14.0).with_fill("\"x\"");
    doc.text(&style, 0.0, 0.0, "a<b>&\"'");
    let svg = doc.finish();
    assert!(svg.contains("fill=\"&quot;x&quot;\""));
    assert!(svg.contains(">a&lt;b&gt;&amp;&quot;&apos;</text>"));
}

#[test]
fn middle_baseline_is_opt_in() {
    let mut doc = SvgDoc::new(10.0, 10.0);
    doc.text(&TextStyle::serif(20.0), 0.0, 0.0, "1");
    doc.text(&TextStyle::serif(20.0).with_middle_baseline(), 0.0, 0.0, "2");
    let svg = doc.finish();
    assert_eq!(count(&svg, "dominant-baseline=\"middle\""), 1);
}

#[test]
fn sans_stack_and_anchor_variants() {
    let mut doc = SvgDoc::new(10.0, 10.0);
    let style = TextStyle::sans(14.0).with_anchor(TextAnchor::End).with_weight(700);
    doc.text(&style, 1.0, 2.0, "x");
    let svg = doc.finish();
    assert!(svg.contains(
        "font-family=\"ui-sans-serif, system-ui, Segoe UI, Roboto, Arial, sans-serif\""
    ));
    assert!(svg.contains("text-anchor=\"end\""));
    assert!(svg.contains("font-weight=\"700\""));
}

#[test]
fn line_caps_are_opt_in() {
    let mut doc = SvgDoc::new(10.0, 10.0);
    doc.line(&LineStyle::new("#1e88e5", 3.0), 0.0, 1.5, 10.0, 1.5);
    doc.line(&LineStyle::new("#1e88e5", 3.0).with_round_cap(), 0.0, 4.0, 10.0, 4.0);
    let svg = doc.finish();
    assert!(svg.contains(
        "<line x1=\"0.00\" y1=\"1.50\" x2=\"10.00\" y2=\"1.50\" stroke=\"#1e88e5\" \
         stroke-width=\"3\" opacity=\"1\"/>"
    ));
    assert_eq!(count(&svg, "stroke-linecap=\"round\""), 1);
}

#[test]
fn rect_emits_radius_and_size() {
    let mut doc = SvgDoc::new(30.0, 30.0);
    let style = RectStyle::filled("#fff")
        .with_stroke("#e5e7eb", 1.0)
        .with_opacity(0.06)
        .with_radius(18.0);
    doc.rect(&style, kurbo::Rect::new(1.0, 2.0, 11.0, 22.0));
    let svg = doc.finish();
    assert!(svg.contains(
        "<rect x=\"1.00\" y=\"2.00\" width=\"10.00\" height=\"20.00\" fill=\"#fff\" \
         stroke=\"#e5e7eb\" stroke-width=\"1\" opacity=\"0.06\" rx=\"18.00\" ry=\"18.00\"/>"
    ));
}

#[test]
fn grid_draws_borders_and_interior() {
    let mut doc = SvgDoc::new(100.0, 100.0);
    doc.grid(&LineStyle::new("#35b7c8", 1.0), 0.0, 0.0, 2, 3, 10.0);
    let svg = doc.finish();
    // cols + 1 verticals plus rows + 1 horizontals.
    assert_eq!(count(&svg, "<line"), 7);
}

#[test]
fn framed_grid_skips_border_lines() {
    let mut doc = SvgDoc::new(100.0, 100.0);
    doc.framed_grid(
        &RectStyle::outlined("#b3d1ff", 2.0),
        &LineStyle::new("#cfe3ff", 2.0),
        0.0,
        0.0,
        3,
        2,
        10.0,
    );
    let svg = doc.finish();
    assert_eq!(count(&svg, "<rect"), 1);
    assert_eq!(count(&svg, "<line"), 3);
}

#[test]
fn escape_xml_covers_the_five_entities() {
    assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
    assert_eq!(escape_xml("plain"), "plain");
}
