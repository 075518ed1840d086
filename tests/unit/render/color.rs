use super::*;

#[test]
fn tikz_tokens_resolve_to_hex() {
    assert_eq!(css_color("red"), "#cc0000");
    assert_eq!(css_color("green!50!black"), "#0b5d1e");
    assert_eq!(css_color("green!60!black"), "#0b5d1e");
    assert_eq!(css_color("gray!20"), "#d1d5db");
    assert_eq!(css_color(" teal "), "#0f766e");
}

#[test]
fn css_expressions_pass_through() {
    assert_eq!(css_color("#ff8800"), "#ff8800");
    assert_eq!(css_color("rgb(1,2,3)"), "rgb(1,2,3)");
    assert_eq!(css_color("rebeccapurple"), "rebeccapurple");
}

#[test]
fn blank_token_falls_back_to_black() {
    assert_eq!(css_color(""), "#000000");
    assert_eq!(css_color("   "), "#000000");
}

#[test]
fn add_palette_cycles_by_place() {
    assert_eq!(add_place_color(0), "#e53935");
    assert_eq!(add_place_color(2), "#1e88e5");
    assert_eq!(add_place_color(6), "#e53935");
}

#[test]
fn place_palette_counts_from_the_ones_column() {
    assert_eq!(place_color(2, 2), "#cc0000");
    assert_eq!(place_color(1, 2), "#005bbb");
    assert_eq!(place_color(-6, 2), "#cc0000");
    assert_eq!(place_color(-1, 2), "#8a4b00");
}

#[test]
fn source_colors_prefer_non_blank_overrides() {
    let none: [String; 0] = [];
    assert_eq!(source_color(0, &none), "#cc0000");
    assert_eq!(source_color(8, &none), "#cc0000");

    let overrides = vec!["teal".to_owned(), "  ".to_owned(), "#123456".to_owned()];
    assert_eq!(source_color(0, &overrides), "#0f766e");
    assert_eq!(source_color(1, &overrides), "#005bbb");
    assert_eq!(source_color(2, &overrides), "#123456");
    assert_eq!(source_color(3, &overrides), "#6b5a00");
}

#[test]
fn checker_parity_spans_two_cell_blocks() {
    assert_eq!(checker_color(0, 0, "red", "blue"), "#cc0000");
    assert_eq!(checker_color(1, 0, "red", "blue"), "#cc0000");
    assert_eq!(checker_color(2, 0, "red", "blue"), "#005bbb");
    assert_eq!(checker_color(0, 1, "red", "blue"), "#005bbb");
    // div_euclid keeps the block split stable left of zero.
    assert_eq!(checker_color(-1, 0, "red", "blue"), "#005bbb");
    assert_eq!(checker_color(-2, 0, "red", "blue"), "#005bbb");
    assert_eq!(checker_color(-3, 0, "red", "blue"), "#cc0000");
}

#[test]
fn blank_checker_tokens_fall_back_to_red_and_blue() {
    assert_eq!(checker_color(0, 0, "", ""), "#cc0000");
    assert_eq!(checker_color(0, 1, "", " "), "#005bbb");
}

#[test]
fn step_palette_cycles_every_five_rounds() {
    assert_eq!(step_color(0), "#cc0000");
    assert_eq!(step_color(1), "#005bbb");
    assert_eq!(step_color(2), "#0f766e");
    assert_eq!(step_color(3), "#d97706");
    assert_eq!(step_color(4), "#6a0dad");
    assert_eq!(step_color(5), "#cc0000");
}
