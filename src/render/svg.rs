//! Shared SVG emission for the diagram renderers.
//!
//! Every renderer builds its markup through [`SvgDoc`] so element shapes,
//! attribute formatting and escaping stay identical across the four
//! operations. Coordinates are written with two decimals; text content and
//! color attributes are XML-escaped.

use kurbo::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Horizontal anchoring of a text run.
pub enum TextAnchor {
    /// Anchor at the left edge.
    Start,
    /// Anchor at the center.
    Middle,
    /// Anchor at the right edge.
    End,
}

impl TextAnchor {
    fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Font stack used for a text run.
pub enum FontFamily {
    /// Serif stack used for worked digits.
    Serif,
    /// Sans stack used for labels and captions.
    Sans,
}

impl FontFamily {
    fn as_css(self) -> &'static str {
        match self {
            FontFamily::Serif => "Times New Roman, serif",
            FontFamily::Sans => "ui-sans-serif, system-ui, Segoe UI, Roboto, Arial, sans-serif",
        }
    }
}

#[derive(Clone, Debug)]
/// Reusable text attributes.
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    /// CSS font weight.
    pub weight: u32,
    /// Fill color.
    pub fill: String,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Font stack.
    pub family: FontFamily,
    /// Center the glyphs vertically on `y`.
    pub middle_baseline: bool,
}

impl TextStyle {
    /// Centered serif text at regular digit weight.
    pub fn serif(size: f64) -> Self {
        Self {
            size,
            weight: 700,
            fill: "#000".to_owned(),
            anchor: TextAnchor::Middle,
            family: FontFamily::Serif,
            middle_baseline: false,
        }
    }

    /// Centered sans text at label weight.
    pub fn sans(size: f64) -> Self {
        Self {
            size,
            weight: 400,
            fill: "#000".to_owned(),
            anchor: TextAnchor::Middle,
            family: FontFamily::Sans,
            middle_baseline: false,
        }
    }

    /// Replace the fill color.
    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = fill.to_owned();
        self
    }

    /// Replace the font weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Replace the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Anchor glyphs on their vertical center instead of the baseline.
    pub fn with_middle_baseline(mut self) -> Self {
        self.middle_baseline = true;
        self
    }
}

#[derive(Clone, Debug)]
/// Reusable stroke attributes.
pub struct LineStyle {
    /// Stroke color.
    pub stroke: String,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Round line caps.
    pub round_cap: bool,
}

impl LineStyle {
    /// Opaque butt-capped stroke.
    pub fn new(stroke: &str, width: f64) -> Self {
        Self {
            stroke: stroke.to_owned(),
            width,
            opacity: 1.0,
            round_cap: false,
        }
    }

    /// Replace the stroke opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Cap the stroke ends with semicircles.
    pub fn with_round_cap(mut self) -> Self {
        self.round_cap = true;
        self
    }
}

#[derive(Clone, Debug)]
/// Reusable rectangle attributes.
pub struct RectStyle {
    /// Fill color, `none` for outlines.
    pub fill: String,
    /// Stroke color, `none` for fills.
    pub stroke: String,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Element opacity.
    pub opacity: f64,
    /// Corner radius in pixels.
    pub radius: f64,
}

impl RectStyle {
    /// Solid fill without an outline.
    pub fn filled(fill: &str) -> Self {
        Self {
            fill: fill.to_owned(),
            stroke: "none".to_owned(),
            stroke_width: 1.0,
            opacity: 1.0,
            radius: 0.0,
        }
    }

    /// Outline without a fill.
    pub fn outlined(stroke: &str, stroke_width: f64) -> Self {
        Self {
            fill: "none".to_owned(),
            stroke: stroke.to_owned(),
            stroke_width,
            opacity: 1.0,
            radius: 0.0,
        }
    }

    /// Replace the fill color.
    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = fill.to_owned();
        self
    }

    /// Replace the outline color and width.
    pub fn with_stroke(mut self, stroke: &str, stroke_width: f64) -> Self {
        self.stroke = stroke.to_owned();
        self.stroke_width = stroke_width;
        self
    }

    /// Replace the element opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Replace the corner radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

#[derive(Clone, Debug)]
/// An SVG document under construction.
pub struct SvgDoc {
    width: f64,
    height: f64,
    parts: Vec<String>,
}

impl SvgDoc {
    /// Open a document with the given pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        let parts = vec![format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        )];
        Self { width, height, parts }
    }

    /// Document width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Document height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Fill the whole canvas.
    pub fn background(&mut self, fill: &str) {
        self.parts.push(format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            escape_xml(fill),
        ));
    }

    /// Place a text run.
    pub fn text(&mut self, style: &TextStyle, x: f64, y: f64, content: &str) {
        let mut element = format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"{}\" font-family=\"{}\" font-weight=\"{}\" text-anchor=\"{}\" fill=\"{}\"",
            style.size,
            style.family.as_css(),
            style.weight,
            style.anchor.as_svg(),
            escape_xml(&style.fill),
        );
        if style.middle_baseline {
            element.push_str(" dominant-baseline=\"middle\"");
        }
        element.push('>');
        element.push_str(&escape_xml(content));
        element.push_str("</text>");
        self.parts.push(element);
    }

    /// Draw a straight stroke.
    pub fn line(&mut self, style: &LineStyle, x1: f64, y1: f64, x2: f64, y2: f64) {
        let mut element = format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"",
            escape_xml(&style.stroke),
            style.width,
            style.opacity,
        );
        if style.round_cap {
            element.push_str(" stroke-linecap=\"round\"");
        }
        element.push_str("/>");
        self.parts.push(element);
    }

    /// Draw a rectangle.
    pub fn rect(&mut self, style: &RectStyle, rect: Rect) {
        self.parts.push(format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\" rx=\"{:.2}\" ry=\"{:.2}\"/>",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            escape_xml(&style.fill),
            escape_xml(&style.stroke),
            style.stroke_width,
            style.opacity,
            style.radius,
            style.radius,
        ));
    }

    /// Draw a full square grid including its border lines.
    pub fn grid(&mut self, style: &LineStyle, x0: f64, y0: f64, cols: usize, rows: usize, step: f64) {
        let x1 = x0 + cols as f64 * step;
        let y1 = y0 + rows as f64 * step;
        for c in 0..=cols {
            let x = x0 + c as f64 * step;
            self.line(style, x, y0, x, y1);
        }
        for r in 0..=rows {
            let y = y0 + r as f64 * step;
            self.line(style, x0, y, x1, y);
        }
    }

    /// Draw a framed grid: an outer rectangle plus interior lines only.
    pub fn framed_grid(
        &mut self,
        frame: &RectStyle,
        lines: &LineStyle,
        x0: f64,
        y0: f64,
        cols: usize,
        rows: usize,
        step: f64,
    ) {
        let x1 = x0 + cols as f64 * step;
        let y1 = y0 + rows as f64 * step;
        self.rect(frame, Rect::new(x0, y0, x1, y1));
        for c in 1..cols {
            let x = x0 + c as f64 * step;
            self.line(lines, x, y0, x, y1);
        }
        for r in 1..rows {
            let y = y0 + r as f64 * step;
            self.line(lines, x0, y, x1, y);
        }
    }

    /// Close the document and return the markup.
    pub fn finish(mut self) -> String {
        self.parts.push("</svg>".to_owned());
        self.parts.join("\n")
    }
}

/// Escape the five XML special characters.
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
