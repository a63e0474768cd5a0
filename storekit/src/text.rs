//! `text`
//!
//! Draws captions onto a [`Canvas`] by laying them out as SVG text and
//! rendering that with `resvg`.

use std::{fmt::Write as _, sync::Arc};

use resvg::{
    tiny_skia::Transform,
    usvg::{
        self,
        fontdb::{self, Family, Query, Stretch, Style, Weight},
    },
};

use crate::{canvas::Canvas, errors::AssetError, palette::Rgb};

/// One line of text to draw, horizontally centred on `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine<'a> {
    /// The text itself.
    pub text: &'a str,
    /// Horizontal centre, in pixels.
    pub x: f32,
    /// Top of the line, in pixels.
    pub top: f32,
    /// Font size, in pixels.
    pub size: f32,
    /// Fill colour.
    pub colour: Rgb,
    /// Fill opacity between 0 and 1.
    pub opacity: f32,
}

impl<'a> TextLine<'a> {
    /// An opaque line of text.
    pub fn new(text: &'a str, x: f32, top: f32, size: f32, colour: Rgb) -> Self {
        Self {
            text,
            x,
            top,
            size,
            colour,
            opacity: 1.0,
        }
    }

    /// The same line at a different opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Renders text with whatever fonts the system has.
///
/// Without any fonts text is skipped with a warning and the rest of the
/// artwork is still produced.
pub struct TextRenderer {
    /// Fonts available to the layout engine.
    fontdb: Arc<fontdb::Database>,
}

impl TextRenderer {
    /// Loads the system fonts.
    ///
    /// If no face answers to the generic sans-serif family, the first loaded
    /// family stands in for it.
    pub fn with_system_fonts() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        let sans_serif = Query {
            families: &[Family::SansSerif],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        if fontdb.query(&sans_serif).is_none() {
            let fallback = fontdb
                .faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
            if let Some(name) = fallback {
                log::debug!("Using {name} as the sans-serif family");
                fontdb.set_sans_serif_family(name);
            }
        }

        Self::new(fontdb)
    }

    /// A renderer over an explicit font database.
    pub fn new(fontdb: fontdb::Database) -> Self {
        if fontdb.is_empty() {
            log::warn!("No fonts available; text will be left out of generated graphics");
        }
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Whether any fonts are loaded.
    pub fn has_fonts(&self) -> bool {
        !self.fontdb.is_empty()
    }

    /// Draws `lines` onto `canvas`.
    ///
    /// # Errors
    /// [`AssetError::Text`] if the generated layout cannot be parsed.
    pub fn draw(&self, canvas: &mut Canvas, lines: &[TextLine<'_>]) -> Result<(), AssetError> {
        if lines.is_empty() || !self.has_fonts() {
            return Ok(());
        }

        let svg = text_svg(canvas.width(), canvas.height(), lines);
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&svg, &options)?;
        resvg::render(&tree, Transform::identity(), &mut canvas.pixmap_mut().as_mut());

        Ok(())
    }
}

/// Builds an SVG document of the given size holding `lines`.
fn text_svg(width: u32, height: u32, lines: &[TextLine<'_>]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for line in lines {
        // SVG positions text by its baseline; the callers think in line tops.
        let baseline = line.top + line.size;
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{baseline}" font-family="sans-serif" font-size="{size}" fill="{fill}" fill-opacity="{opacity}" text-anchor="middle">{text}</text>"#,
            x = line.x,
            size = line.size,
            fill = line.colour.hex(),
            opacity = line.opacity,
            text = escape_xml(line.text),
        );
    }
    svg.push_str("</svg>");
    svg
}

/// Escapes the characters that are significant in XML text and attributes.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::placeholder;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_xml(r#"Tom & Jerry <"quoted"> 'x'"#),
            "Tom &amp; Jerry &lt;&quot;quoted&quot;&gt; &apos;x&apos;",
            "escaped"
        );
    }

    #[test]
    fn svg_places_text_on_baseline() {
        let svg = text_svg(
            100,
            50,
            &[TextLine::new("Hi", 50.0, 10.0, 12.0, placeholder::TEXT).with_opacity(0.5)],
        );

        assert!(svg.starts_with("<svg "), "root element");
        assert!(svg.contains(r#"y="22""#), "baseline is top plus size: {svg}");
        assert!(svg.contains(r##"fill="#ffffff""##), "fill colour: {svg}");
        assert!(svg.contains(r#"fill-opacity="0.5""#), "opacity: {svg}");
        assert!(svg.ends_with("</svg>"), "closed");
    }

    #[test]
    fn empty_font_database_skips_text() {
        let renderer = TextRenderer::new(fontdb::Database::new());
        let mut canvas = Canvas::new(40, 20, placeholder::BACKGROUND).expect("canvas");

        renderer
            .draw(
                &mut canvas,
                &[TextLine::new("skipped", 20.0, 2.0, 10.0, placeholder::TEXT)],
            )
            .expect("draw");
        let image = canvas.into_image().expect("image");

        assert!(!renderer.has_fonts(), "no fonts");
        assert!(
            image
                .pixels()
                .all(|pixel| pixel.0 == placeholder::BACKGROUND.rgba()),
            "canvas untouched"
        );
    }
}
