//! Color tokens and palettes for the diagram renderers.
//!
//! Classroom material for these methods is typeset with TikZ color
//! expressions, so the renderers accept those tokens alongside plain CSS
//! colors and resolve them through one shared table.

/// TikZ color tokens mapped to their CSS equivalents.
const TIKZ_TOKENS: &[(&str, &str)] = &[
    ("red", "#cc0000"),
    ("blue", "#005bbb"),
    ("green!50!black", "#0b5d1e"),
    ("green!60!black", "#0b5d1e"),
    ("yellow!80!black", "#6b5a00"),
    ("orange", "#d97706"),
    ("orange!90!black", "#8a4b00"),
    ("purple", "#6a0dad"),
    ("teal", "#0f766e"),
    ("teal!70!black", "#006a6a"),
    ("brown", "#7a3b00"),
    ("magenta", "#b000b0"),
    ("black", "#000000"),
    ("gray!20", "#d1d5db"),
    ("blue!70!black", "#1e3a8a"),
];

/// Per-digit palette for multiplicand digits, indexed units first.
const SOURCE_PALETTE: [&str; 8] = [
    "red",
    "blue",
    "green!60!black",
    "yellow!80!black",
    "purple",
    "orange!90!black",
    "teal!70!black",
    "brown",
];

/// Place-value palette for lattice columns, ones place first.
const PLACE_PALETTE: [&str; 8] = [
    "red",
    "blue",
    "green!60!black",
    "orange!90!black",
    "purple",
    "teal!70!black",
    "brown",
    "magenta",
];

/// Rotating palette for division subtraction rounds.
const STEP_PALETTE: [&str; 5] = ["red", "blue", "teal", "orange", "purple"];

/// Place-value palette for the addition diagram, ones place first.
const ADD_PALETTE: [&str; 6] = [
    "#e53935",
    "#43a047",
    "#1e88e5",
    "#8e24aa",
    "#fb8c00",
    "#00897b",
];

/// Stroke color of the faint background lattice.
pub const LATTICE_STROKE: &str = "#35b7c8";

/// Resolve a color token to CSS.
///
/// TikZ tokens from the shared table become hex values; `#`, `rgb(`,
/// `rgba(` and `hsl(` expressions and CSS color names pass through
/// unchanged. Blank input resolves to black.
pub fn css_color(token: &str) -> String {
    let token = token.trim();
    if let Some((_, hex)) = TIKZ_TOKENS.iter().find(|(name, _)| *name == token) {
        return (*hex).to_owned();
    }
    if token.is_empty() {
        return "#000000".to_owned();
    }
    token.to_owned()
}

/// Place-value color for the addition diagram.
pub fn add_place_color(place: usize) -> &'static str {
    ADD_PALETTE[place % ADD_PALETTE.len()]
}

/// Place-value color for lattice column `x`, where `x_max` is the ones
/// column.
pub fn place_color(x: i64, x_max: i64) -> String {
    let idx = (x_max - x).rem_euclid(PLACE_PALETTE.len() as i64) as usize;
    css_color(PLACE_PALETTE[idx])
}

/// Color for the multiplicand digit at `index`, preferring a caller
/// override when one is present and non-blank.
pub fn source_color(index: usize, overrides: &[String]) -> String {
    let token = overrides
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(SOURCE_PALETTE[index % SOURCE_PALETTE.len()]);
    css_color(token)
}

/// Checkerboard color over two-cell blocks.
///
/// Blocks span two columns, so the parity is taken over the block index
/// `floor(x / 2)` plus the row. Blank tokens fall back to red and blue.
pub fn checker_color(x: i64, y: i64, first: &str, second: &str) -> String {
    let first = if first.trim().is_empty() { "red" } else { first };
    let second = if second.trim().is_empty() { "blue" } else { second };
    let block = x.div_euclid(2);
    if (block + y).rem_euclid(2) == 0 {
        css_color(first)
    } else {
        css_color(second)
    }
}

/// Color for the division subtraction round at `index`.
pub fn step_color(index: usize) -> String {
    css_color(STEP_PALETTE[index % STEP_PALETTE.len()])
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
