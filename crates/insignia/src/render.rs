//! Badge rendering.
//!
//! `BadgeRenderer` is the seam between the pipeline and the drawing code:
//! the generator only ever talks to the trait, so tests can substitute a
//! fake renderer and assert on the spec it receives.

use crate::badge::{BadgeSpec, BadgeStyle};
use crate::result::{InsigniaError, InsigniaResult};
use std::fmt::Write as FmtWrite;

/// Approximate advance width of one Verdana 11px glyph.
/// Good enough for badge-sized strings; real font metrics are out of scope.
const CHAR_WIDTH: u32 = 6;

/// Renders a badge spec into image bytes
pub trait BadgeRenderer {
    /// Render the badge described by `spec`
    fn render(&self, spec: &BadgeSpec) -> InsigniaResult<Vec<u8>>;
}

/// Geometry for SVG badge rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgBadgeConfig {
    /// Badge height in pixels
    pub height: u32,
    /// Font size in pixels
    pub font_size: u32,
    /// Horizontal padding on each side of each segment
    pub padding: u32,
}

impl Default for SvgBadgeConfig {
    fn default() -> Self {
        Self {
            height: 20,
            font_size: 11,
            padding: 5,
        }
    }
}

impl SvgBadgeConfig {
    /// Create a config with the conventional 20px badge geometry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the badge height
    #[must_use]
    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the font size
    #[must_use]
    pub const fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the segment padding
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }
}

/// Default renderer: two-segment SVG badge
///
/// Output is deterministic: identical specs produce byte-identical SVG.
#[derive(Debug, Clone, Default)]
pub struct SvgBadgeRenderer {
    config: SvgBadgeConfig,
}

impl SvgBadgeRenderer {
    /// Create a renderer with default geometry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom geometry
    #[must_use]
    pub const fn with_config(config: SvgBadgeConfig) -> Self {
        Self { config }
    }

    /// Get the current config
    #[must_use]
    pub const fn config(&self) -> &SvgBadgeConfig {
        &self.config
    }

    /// Render the badge as an SVG string
    pub fn render_svg(&self, spec: &BadgeSpec) -> InsigniaResult<String> {
        let padding = self.config.padding;
        let height = self.config.height;
        let label_width = text_width(&spec.label) + 2 * padding;
        let message_width = text_width(&spec.message) + 2 * padding;
        let total_width = label_width + message_width;

        let label = escape_xml(&spec.label);
        let message = escape_xml(&spec.message);
        let color = escape_xml(spec.color.as_css());
        let text_y = height.saturating_sub(6);
        let label_x = label_width / 2;
        let message_x = label_width + message_width / 2;

        // fmt::Error cannot occur writing to a String; map it anyway
        macro_rules! w {
            ($($arg:tt)*) => {
                write!($($arg)*).map_err(|e| InsigniaError::render(e.to_string()))
            };
        }

        let mut svg = String::with_capacity(1024);
        w!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             width=\"{total_width}\" height=\"{height}\" \
             role=\"img\" aria-label=\"{label}: {message}\">"
        )?;
        svg.push('\n');
        w!(svg, "  <title>{label}: {message}</title>")?;
        svg.push('\n');

        match spec.style {
            BadgeStyle::Flat => {
                let radius = spec.style.corner_radius();
                w!(
                    svg,
                    "  <linearGradient id=\"smooth\" x2=\"0\" y2=\"100%\">\n\
                     \x20   <stop offset=\"0\" stop-color=\"#bbb\" stop-opacity=\".1\"/>\n\
                     \x20   <stop offset=\"1\" stop-opacity=\".1\"/>\n\
                     \x20 </linearGradient>"
                )?;
                svg.push('\n');
                w!(
                    svg,
                    "  <clipPath id=\"round\">\n\
                     \x20   <rect width=\"{total_width}\" height=\"{height}\" rx=\"{radius}\" fill=\"#fff\"/>\n\
                     \x20 </clipPath>"
                )?;
                svg.push('\n');
                w!(svg, "  <g clip-path=\"url(#round)\">")?;
                svg.push('\n');
                w!(svg, "    <rect width=\"{label_width}\" height=\"{height}\" fill=\"#555\"/>")?;
                svg.push('\n');
                w!(
                    svg,
                    "    <rect x=\"{label_width}\" width=\"{message_width}\" \
                     height=\"{height}\" fill=\"{color}\"/>"
                )?;
                svg.push('\n');
                w!(
                    svg,
                    "    <rect width=\"{total_width}\" height=\"{height}\" fill=\"url(#smooth)\"/>"
                )?;
                svg.push('\n');
                w!(svg, "  </g>")?;
            }
            BadgeStyle::FlatSquare => {
                w!(svg, "  <g>")?;
                svg.push('\n');
                w!(svg, "    <rect width=\"{label_width}\" height=\"{height}\" fill=\"#555\"/>")?;
                svg.push('\n');
                w!(
                    svg,
                    "    <rect x=\"{label_width}\" width=\"{message_width}\" \
                     height=\"{height}\" fill=\"{color}\"/>"
                )?;
                svg.push('\n');
                w!(svg, "  </g>")?;
            }
        }
        svg.push('\n');

        w!(
            svg,
            "  <g fill=\"#fff\" text-anchor=\"middle\" \
             font-family=\"Verdana,Geneva,DejaVu Sans,sans-serif\" \
             font-size=\"{}\">",
            self.config.font_size
        )?;
        svg.push('\n');

        // Flat badges carry the conventional 1px drop shadow under each string
        if spec.style == BadgeStyle::Flat {
            let shadow_y = text_y + 1;
            w!(
                svg,
                "    <text x=\"{label_x}\" y=\"{shadow_y}\" \
                 fill=\"#010101\" fill-opacity=\".3\">{label}</text>"
            )?;
            svg.push('\n');
        }
        w!(svg, "    <text x=\"{label_x}\" y=\"{text_y}\">{label}</text>")?;
        svg.push('\n');
        if spec.style == BadgeStyle::Flat {
            let shadow_y = text_y + 1;
            w!(
                svg,
                "    <text x=\"{message_x}\" y=\"{shadow_y}\" \
                 fill=\"#010101\" fill-opacity=\".3\">{message}</text>"
            )?;
            svg.push('\n');
        }
        w!(svg, "    <text x=\"{message_x}\" y=\"{text_y}\">{message}</text>")?;
        svg.push('\n');

        w!(svg, "  </g>")?;
        svg.push('\n');
        svg.push_str("</svg>");
        svg.push('\n');

        Ok(svg)
    }
}

impl BadgeRenderer for SvgBadgeRenderer {
    fn render(&self, spec: &BadgeSpec) -> InsigniaResult<Vec<u8>> {
        self.render_svg(spec).map(String::into_bytes)
    }
}

/// Estimate rendered text width from character count
fn text_width(s: &str) -> u32 {
    s.chars().count() as u32 * CHAR_WIDTH
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::badge::BadgeColor;

    fn coverage_spec() -> BadgeSpec {
        BadgeSpec::new("coverage", "87%").with_color(BadgeColor::Success)
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_default_geometry() {
            let config = SvgBadgeConfig::default();
            assert_eq!(config.height, 20);
            assert_eq!(config.font_size, 11);
            assert_eq!(config.padding, 5);
        }

        #[test]
        fn test_builder_chain() {
            let config = SvgBadgeConfig::new()
                .with_height(28)
                .with_font_size(13)
                .with_padding(7);
            assert_eq!(config.height, 28);
            assert_eq!(config.font_size, 13);
            assert_eq!(config.padding, 7);
        }
    }

    mod svg_renderer_tests {
        use super::*;

        #[test]
        fn test_renders_both_segments() {
            let svg = SvgBadgeRenderer::new()
                .render_svg(&coverage_spec())
                .unwrap();

            assert!(svg.contains("<svg"));
            assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
            assert!(svg.contains(">coverage</text>"));
            assert!(svg.contains(">87%</text>"));
            assert!(svg.contains("</svg>"));
        }

        #[test]
        fn test_message_segment_uses_tier_color() {
            let renderer = SvgBadgeRenderer::new();

            let success = renderer.render_svg(&coverage_spec()).unwrap();
            assert!(success.contains("fill=\"#4c1\""));

            let critical = renderer
                .render_svg(&coverage_spec().with_color(BadgeColor::Critical))
                .unwrap();
            assert!(critical.contains("fill=\"#e05d44\""));
        }

        #[test]
        fn test_label_segment_is_grey() {
            let svg = SvgBadgeRenderer::new()
                .render_svg(&coverage_spec())
                .unwrap();
            assert!(svg.contains("fill=\"#555\""));
        }

        #[test]
        fn test_total_width_is_sum_of_segments() {
            // "coverage" = 8 chars * 6 + 10 = 58, "87%" = 3 * 6 + 10 = 28
            let svg = SvgBadgeRenderer::new()
                .render_svg(&coverage_spec())
                .unwrap();
            assert!(svg.contains("width=\"86\""));
            assert!(svg.contains("width=\"58\""));
            assert!(svg.contains("x=\"58\" width=\"28\""));
        }

        #[test]
        fn test_deterministic_output() {
            let renderer = SvgBadgeRenderer::new();
            let first = renderer.render_svg(&coverage_spec()).unwrap();
            let second = renderer.render_svg(&coverage_spec()).unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn test_single_svg_root() {
            let svg = SvgBadgeRenderer::new()
                .render_svg(&coverage_spec())
                .unwrap();
            assert_eq!(svg.matches("<svg").count(), 1);
            assert_eq!(svg.matches("</svg>").count(), 1);
        }

        #[test]
        fn test_flat_has_gradient_and_rounded_clip() {
            let svg = SvgBadgeRenderer::new()
                .render_svg(&coverage_spec())
                .unwrap();
            assert!(svg.contains("<linearGradient"));
            assert!(svg.contains("rx=\"3\""));
            assert!(svg.contains("fill-opacity=\".3\""));
        }

        #[test]
        fn test_flat_square_is_solid() {
            let svg = SvgBadgeRenderer::new()
                .render_svg(&coverage_spec().with_style(BadgeStyle::FlatSquare))
                .unwrap();
            assert!(!svg.contains("<linearGradient"));
            assert!(!svg.contains("rx="));
            assert!(!svg.contains("fill-opacity"));
        }

        #[test]
        fn test_escapes_label_and_message() {
            let spec = BadgeSpec::new("a<b>", "\"c\"&'d'");
            let svg = SvgBadgeRenderer::new().render_svg(&spec).unwrap();
            assert!(svg.contains("a&lt;b&gt;"));
            assert!(svg.contains("&quot;c&quot;&amp;&apos;d&apos;"));
            assert!(!svg.contains("<b>"));
        }

        #[test]
        fn test_trait_render_matches_svg_bytes() {
            let renderer = SvgBadgeRenderer::new();
            let spec = coverage_spec();
            let svg = renderer.render_svg(&spec).unwrap();
            let bytes = renderer.render(&spec).unwrap();
            assert_eq!(bytes, svg.into_bytes());
        }

        #[test]
        fn test_custom_geometry() {
            let renderer =
                SvgBadgeRenderer::with_config(SvgBadgeConfig::new().with_height(28));
            let svg = renderer.render_svg(&coverage_spec()).unwrap();
            assert!(svg.contains("height=\"28\""));
        }
    }

    mod helper_tests {
        use super::*;

        #[test]
        fn test_text_width() {
            assert_eq!(text_width(""), 0);
            assert_eq!(text_width("87%"), 18);
            assert_eq!(text_width("coverage"), 48);
        }

        #[test]
        fn test_text_width_counts_chars_not_bytes() {
            assert_eq!(text_width("über"), 24);
        }

        #[test]
        fn test_escape_xml() {
            assert_eq!(escape_xml("<>&\"'"), "&lt;&gt;&amp;&quot;&apos;");
            assert_eq!(escape_xml("plain"), "plain");
        }
    }
}
