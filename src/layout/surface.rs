//! Drawing surface capability
//!
//! The layout engine never touches a canvas directly. It sizes, clears,
//! measures and paints only through [`Surface`], so any backend (or a test
//! fake) can sit underneath.

use crate::errors::Result;
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Em fraction used to approximate glyph advance when no font metrics exist.
pub const DEFAULT_CHAR_ADVANCE: f64 = 0.6;

/// Font settings for one measured or painted word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: String,
    pub size: f64,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, size: f64, bold: bool) -> Self {
        Self {
            family: family.into(),
            size,
            bold,
        }
    }

    /// CSS font shorthand, e.g. `bold 40px Arial`.
    pub fn css_font(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{weight}{}px {}", self.size, self.family)
    }

    /// Width estimate: character count times size times `advance`.
    pub fn approximate_width(&self, text: &str, advance: f64) -> f64 {
        text.chars().count() as f64 * self.size * advance
    }
}

/// The operations a word-cloud renderer needs from a drawing surface.
pub trait Surface {
    /// Resize the surface, discarding its content.
    fn set_size(&mut self, width: u32, height: u32) -> Result<()>;

    /// Fill the whole surface with `fill`.
    fn clear(&mut self, fill: Color) -> Result<()>;

    /// Rendered width of `text` in `style`.
    fn measure_width(&mut self, text: &str, style: &TextStyle) -> Result<f64>;

    /// Paint `text` with its baseline starting at `(x, y)`.
    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: &TextStyle,
        color: Color,
    ) -> Result<()>;
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceOp {
    SetSize {
        width: u32,
        height: u32,
    },
    Clear {
        fill: Color,
    },
    Measure {
        text: String,
        font: String,
    },
    DrawText {
        text: String,
        x: f64,
        y: f64,
        font: String,
        color: Color,
    },
}

/// Surface that records every call as a display list.
///
/// Widths are approximated from character counts, which keeps layouts
/// reproducible without a font rasterizer.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    char_advance: f64,
    ops: Vec<SurfaceOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            char_advance: DEFAULT_CHAR_ADVANCE,
            ops: Vec::new(),
        }
    }

    /// Set the em fraction each character advances by
    pub fn with_char_advance(mut self, advance: f64) -> Self {
        self.char_advance = advance;
        self
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Texts painted so far, in order.
    pub fn drawn_words(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of clear calls received.
    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear { .. }))
            .count()
    }

    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.ops.push(SurfaceOp::SetSize { width, height });
        Ok(())
    }

    fn clear(&mut self, fill: Color) -> Result<()> {
        self.ops.push(SurfaceOp::Clear { fill });
        Ok(())
    }

    fn measure_width(&mut self, text: &str, style: &TextStyle) -> Result<f64> {
        self.ops.push(SurfaceOp::Measure {
            text: text.to_string(),
            font: style.css_font(),
        });
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
        self.ops.push(SurfaceOp::DrawText {
            text: text.to_string(),
            x,
            y,
            font: style.css_font(),
            color,
        });
        Ok(())
    }
}
