//! SVG surface for producing word clouds as standalone documents

use crate::errors::Result;
use crate::layout::surface::{Surface, TextStyle, DEFAULT_CHAR_ADVANCE};
use crate::types::Color;
use svg::node::element::{Element, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

/// Surface that builds an SVG document.
///
/// Text widths are estimated from character counts since no font is loaded.
#[derive(Debug)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Option<Color>,
    char_advance: f64,
    elements: Vec<Element>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            char_advance: DEFAULT_CHAR_ADVANCE,
            elements: Vec::new(),
        }
    }

    /// Set the em fraction each character advances by
    pub fn with_char_advance(mut self, advance: f64) -> Self {
        self.char_advance = advance;
        self
    }

    /// Number of text elements painted since the last clear
    pub fn text_count(&self) -> usize {
        self.elements.len()
    }

    /// Render the current content as an SVG string.
    pub fn to_svg_string(&self) -> String {
        let mut document = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", format!("0 0 {} {}", self.width, self.height));

        if let Some(fill) = self.background {
            document = document.add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", self.width)
                    .set("height", self.height)
                    .set("fill", fill.to_hex()),
            );
        }

        for element in &self.elements {
            document = document.add(element.clone());
        }

        document.to_string()
    }
}

impl Surface for SvgSurface {
    fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.background = None;
        self.elements.clear();
        Ok(())
    }

    fn clear(&mut self, fill: Color) -> Result<()> {
        self.background = Some(fill);
        self.elements.clear();
        Ok(())
    }

    fn measure_width(&mut self, text: &str, style: &TextStyle) -> Result<f64> {
        Ok(style.approximate_width(text, self.char_advance))
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: &TextStyle,
        color: Color,
    ) -> Result<()> {
        let mut text_elem = Text::new()
            .set("x", x)
            .set("y", y)
            .set("font-family", style.family.as_str())
            .set("font-size", style.size)
            .set("fill", color.to_hex());

        if style.bold {
            text_elem = text_elem.set("font-weight", "bold");
        }

        text_elem = text_elem.add(TextNode::new(text));
        self.elements.push(text_elem.into());
        Ok(())
    }
}
