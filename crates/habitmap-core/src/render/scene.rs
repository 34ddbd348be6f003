//! Scene builder: accumulates SVG elements for one canvas.

use crate::palette::Rgb;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
        }
    }
}

/// Vertical text alignment relative to `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// `y` is the alphabetic baseline.
    Alphabetic,
    /// `y` is the vertical centre of the glyphs.
    Central,
}

pub(crate) struct SceneBuilder {
    elements: Vec<String>,
    width: u32,
    height: u32,
    font_family: String,
}

impl SceneBuilder {
    pub(crate) fn new(width: u32, height: u32, font_family: &str) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            font_family: escape_xml(font_family),
        }
    }

    pub(crate) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{family}">"#,
            w = self.width,
            h = self.height,
            family = self.font_family,
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Fill the whole canvas.
    pub(crate) fn background(&mut self, fill: Rgb) {
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, fill
        ));
    }

    pub(crate) fn rounded_rect(&mut self, x: f64, y: f64, size: f64, radius: f64, fill: Rgb) {
        self.elements.push(format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" ry="{:.2}" fill="{}"/>"#,
            x, y, size, size, radius, radius, fill
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        fill: Rgb,
        anchor: Anchor,
        baseline: Baseline,
    ) {
        let baseline_attr = match baseline {
            Baseline::Alphabetic => "",
            Baseline::Central => r#" dominant-baseline="central""#,
        };
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.1}" fill="{}" text-anchor="{}"{}>{}</text>"#,
            x,
            y,
            size,
            fill,
            anchor.as_str(),
            baseline_attr,
            escape_xml(content)
        ));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let mut scene = SceneBuilder::new(10, 10, "A & B");
        scene.text(
            1.0,
            2.0,
            "<b>\"x\"</b>",
            12.0,
            Rgb::BLACK,
            Anchor::Middle,
            Baseline::Central,
        );
        let svg = scene.build();
        assert!(svg.contains(r#"font-family="A &amp; B""#));
        assert!(svg.contains("&lt;b&gt;&quot;x&quot;&lt;/b&gt;"));
        assert!(svg.contains(r#"dominant-baseline="central""#));
        assert!(svg.contains(r##"fill="#000000""##));
    }

    #[test]
    fn test_rounded_rect_markup() {
        let mut scene = SceneBuilder::new(100, 50, "sans-serif");
        scene.background(Rgb::WHITE);
        scene.rounded_rect(4.0, 6.0, 40.0, 8.0, Rgb::new(0x21, 0x6e, 0x39));
        assert_eq!(scene.len(), 2);
        let svg = scene.build();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(
            r##"<rect x="4.00" y="6.00" width="40.00" height="40.00" rx="8.00" ry="8.00" fill="#216e39"/>"##
        ));
    }
}
