//! Greedy word-cloud layout
//!
//! Words flow left to right, top to bottom, in rank order. A word that would
//! cross the usable width wraps to a new line; a word whose baseline lands in
//! the bottom margin is dropped. There is no backtracking, rotation or
//! overlap solving, so placement depends only on the entries, the canvas
//! size and the measurement function.

pub mod surface;
pub mod svg;

pub use surface::{RecordingSurface, Surface, SurfaceOp, TextStyle};
pub use svg::SvgSurface;

use crate::errors::Result;
use crate::types::{Color, LayoutConfig, WordEntry};
use serde::{Deserialize, Serialize};

/// One word placed on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub text: String,
    /// Left edge of the word
    pub x: f64,
    /// Baseline of the word
    pub y: f64,
    pub size: u32,
    pub color: Color,
}

/// Flow cursor for one layout pass.
#[derive(Debug, Clone, Copy)]
struct Placement {
    x: f64,
    y: f64,
}

impl Placement {
    fn wrap(&mut self, left: f64, advance: f64) {
        self.x = left;
        self.y += advance;
    }
}

/// Places ranked words on a fixed-size surface.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Style used to measure and paint a word of the given size.
    pub fn text_style(&self, size: u32) -> TextStyle {
        TextStyle::new(
            self.config.font_family.as_str(),
            f64::from(size),
            self.config.bold,
        )
    }

    /// Compute draw commands without touching any surface.
    ///
    /// Only the first `max_words` entries are considered. The color of an
    /// entry is picked by its index among those, so dropped words still
    /// advance the palette. An empty palette places nothing.
    pub fn layout<F>(&self, entries: &[WordEntry], mut measure: F) -> Result<Vec<DrawCommand>>
    where
        F: FnMut(&str, &TextStyle) -> Result<f64>,
    {
        let config = &self.config;
        if config.palette.is_empty() {
            return Ok(Vec::new());
        }

        let usable_width = config.usable_width();
        let bottom_limit = f64::from(config.canvas_height) - config.margin_bottom;
        let mut cursor = Placement {
            x: config.margin_left,
            y: config.margin_top,
        };
        let mut commands = Vec::new();

        for (index, entry) in entries.iter().take(config.max_words).enumerate() {
            let style = self.text_style(entry.size);
            let width = measure(&entry.text, &style)?;

            if cursor.x + width > usable_width {
                cursor.wrap(config.margin_left, style.size + config.line_spacing);
            }

            if cursor.y < bottom_limit {
                commands.push(DrawCommand {
                    text: entry.text.clone(),
                    x: cursor.x,
                    y: cursor.y,
                    size: entry.size,
                    color: config.palette[index % config.palette.len()],
                });
                cursor.x += width + config.word_spacing;
            }
        }

        Ok(commands)
    }

    /// Reset `surface` to the configured size and background, lay out
    /// `entries` measuring through it, and paint the result.
    ///
    /// A missing surface is a no-op. Returns the commands that were painted.
    pub fn draw_word_cloud<S>(
        &self,
        surface: Option<&mut S>,
        entries: &[WordEntry],
    ) -> Result<Vec<DrawCommand>>
    where
        S: Surface + ?Sized,
    {
        let Some(surface) = surface else {
            return Ok(Vec::new());
        };

        surface.set_size(self.config.canvas_width, self.config.canvas_height)?;
        surface.clear(self.config.background)?;

        let commands = self.layout(entries, |text, style| surface.measure_width(text, style))?;
        for command in &commands {
            let style = self.text_style(command.size);
            surface.draw_text(&command.text, command.x, command.y, &style, command.color)?;
        }

        trace_event!(
            debug,
            considered = entries.len().min(self.config.max_words),
            drawn = commands.len(),
            "painted word cloud"
        );
        Ok(commands)
    }

    /// Clear `surface` to the background. A missing surface is a no-op.
    pub fn clear_surface<S>(&self, surface: Option<&mut S>) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        match surface {
            Some(surface) => surface.clear(self.config.background),
            None => Ok(()),
        }
    }
}

/// Lay out `entries` on a `canvas_width` x `canvas_height` canvas with the
/// default margins and spacing.
pub fn layout<F>(
    canvas_width: u32,
    canvas_height: u32,
    entries: &[WordEntry],
    palette: &[Color],
    measure: F,
) -> Result<Vec<DrawCommand>>
where
    F: FnMut(&str, &TextStyle) -> Result<f64>,
{
    let engine = LayoutEngine {
        config: LayoutConfig::default()
            .with_canvas_size(canvas_width, canvas_height)
            .with_palette(palette.to_vec()),
    };
    engine.layout(entries, measure)
}
