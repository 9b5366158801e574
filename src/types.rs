//! Core types for rapid_wordcloud
//!
//! This module defines the data structures shared by the guard, frequency and
//! layout stages: ranked word entries, colors, and the two configuration
//! structs that carry every tunable constant.

use crate::errors::{Result, WordCloudError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Defaults
// ============================================================================

/// Maximum accepted input length, in characters.
pub const MAX_INPUT_LENGTH: usize = 50_000;
/// Maximum number of tokens processed after filtering.
pub const MAX_WORDS_PROCESSED: usize = 10_000;
/// Minimum pause between accepted processing calls.
pub const MIN_INTERVAL_MS: u64 = 100;
/// Tokens shorter than this many characters are discarded.
pub const MIN_TOKEN_LENGTH: usize = 3;
/// Smallest rendered size.
pub const MIN_FONT_SIZE: u32 = 20;
/// Largest rendered size.
pub const MAX_FONT_SIZE: u32 = 80;
/// Size added per occurrence before clamping.
pub const SIZE_PER_OCCURRENCE: u32 = 20;
/// Number of ranked entries the layout considers.
pub const MAX_RENDERED_WORDS: usize = 30;
/// Fixed canvas width.
pub const CANVAS_WIDTH: u32 = 800;
/// Fixed canvas height.
pub const CANVAS_HEIGHT: u32 = 600;

/// The 12-color palette words cycle through.
pub const DEFAULT_PALETTE: [Color; 12] = [
    Color::rgb(0x66, 0x7e, 0xea),
    Color::rgb(0x76, 0x4b, 0xa2),
    Color::rgb(0xf0, 0x93, 0xfb),
    Color::rgb(0xf5, 0x57, 0x6c),
    Color::rgb(0x4f, 0xac, 0xfe),
    Color::rgb(0x00, 0xf2, 0xfe),
    Color::rgb(0x43, 0xe9, 0x7b),
    Color::rgb(0x38, 0xf9, 0xd7),
    Color::rgb(0xff, 0xec, 0xd2),
    Color::rgb(0xfc, 0xb6, 0x9f),
    Color::rgb(0xa8, 0xed, 0xea),
    Color::rgb(0xfe, 0xd6, 0xe3),
];

// ============================================================================
// Word Entry
// ============================================================================

/// One distinct token of the input with its occurrence count and display size.
///
/// Lists of entries produced by the frequency engine are sorted by descending
/// `weight`; equal weights keep the order in which tokens first appeared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    /// Normalized token (lowercase, longer than the minimum token length)
    pub text: String,
    /// Number of occurrences in the input
    pub weight: u32,
    /// Rendering size derived from `weight`
    pub size: u32,
}

impl WordEntry {
    /// Create a new entry
    pub fn new(text: impl Into<String>, weight: u32, size: u32) -> Self {
        Self {
            text: text.into(),
            weight,
            size,
        }
    }
}

// ============================================================================
// Color
// ============================================================================

/// An opaque 8-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WordCloudError::invalid_config(format!(
                "invalid color {hex:?}: expected hex digits"
            )));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            )),
            3 => {
                // #abc expands to #aabbcc
                let expand = |s: &str| channel(s) * 0x11;
                Ok(Self::rgb(
                    expand(&digits[0..1]),
                    expand(&digits[1..2]),
                    expand(&digits[2..3]),
                ))
            }
            _ => Err(WordCloudError::invalid_config(format!(
                "invalid color {hex:?}: expected 3 or 6 hex digits"
            ))),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = WordCloudError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Limits and scaling for the guard and frequency stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    /// Maximum input length in characters
    pub max_input_length: usize,
    /// Maximum number of tokens counted after filtering
    pub max_words: usize,
    /// Tokens shorter than this many characters are dropped
    pub min_token_length: usize,
    /// Minimum pause between accepted calls, in milliseconds
    pub min_interval_ms: u64,
    /// Lower bound of the size scale
    pub min_font_size: u32,
    /// Upper bound of the size scale
    pub max_font_size: u32,
    /// Size contributed by each occurrence before clamping
    pub size_per_occurrence: u32,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            max_input_length: MAX_INPUT_LENGTH,
            max_words: MAX_WORDS_PROCESSED,
            min_token_length: MIN_TOKEN_LENGTH,
            min_interval_ms: MIN_INTERVAL_MS,
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
            size_per_occurrence: SIZE_PER_OCCURRENCE,
        }
    }
}

impl WordCloudConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_input_length == 0 {
            return Err(WordCloudError::invalid_config(
                "max_input_length must be > 0",
            ));
        }

        if self.max_words == 0 {
            return Err(WordCloudError::invalid_config("max_words must be > 0"));
        }

        if self.min_font_size == 0 {
            return Err(WordCloudError::invalid_config("min_font_size must be > 0"));
        }

        if self.max_font_size < self.min_font_size {
            return Err(WordCloudError::invalid_config(format!(
                "max_font_size ({}) must be >= min_font_size ({})",
                self.max_font_size, self.min_font_size
            )));
        }

        if self.size_per_occurrence == 0 {
            return Err(WordCloudError::invalid_config(
                "size_per_occurrence must be > 0",
            ));
        }

        Ok(())
    }

    /// Parse and validate a config from JSON; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder method: set max input length
    pub fn with_max_input_length(mut self, max: usize) -> Self {
        self.max_input_length = max;
        self
    }

    /// Builder method: set max processed words
    pub fn with_max_words(mut self, max: usize) -> Self {
        self.max_words = max;
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, len: usize) -> Self {
        self.min_token_length = len;
        self
    }

    /// Builder method: set pacing interval
    pub fn with_min_interval_ms(mut self, ms: u64) -> Self {
        self.min_interval_ms = ms;
        self
    }

    /// Builder method: set size bounds
    pub fn with_font_size_range(mut self, min: u32, max: u32) -> Self {
        self.min_font_size = min;
        self.max_font_size = max;
        self
    }
}

/// Geometry, styling and palette for the layout stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Surface width the layout resets to on every draw
    pub canvas_width: u32,
    /// Surface height the layout resets to on every draw
    pub canvas_height: u32,
    /// Number of leading entries considered; the rest are ignored
    pub max_words: usize,
    pub margin_left: f64,
    pub margin_right: f64,
    /// Initial baseline of the first line
    pub margin_top: f64,
    /// Words whose baseline would fall in this band are dropped
    pub margin_bottom: f64,
    /// Added to the word size when wrapping to a new line
    pub line_spacing: f64,
    /// Horizontal gap after each drawn word
    pub word_spacing: f64,
    pub font_family: String,
    pub bold: bool,
    pub background: Color,
    pub palette: Vec<Color>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            max_words: MAX_RENDERED_WORDS,
            margin_left: 50.0,
            margin_right: 50.0,
            margin_top: 100.0,
            margin_bottom: 50.0,
            line_spacing: 20.0,
            word_spacing: 20.0,
            font_family: "Arial".to_string(),
            bold: true,
            background: Color::WHITE,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl LayoutConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(WordCloudError::invalid_config(
                "canvas dimensions must be > 0",
            ));
        }

        if self.palette.is_empty() {
            return Err(WordCloudError::invalid_config("palette must not be empty"));
        }

        let margins = [
            self.margin_left,
            self.margin_right,
            self.margin_top,
            self.margin_bottom,
            self.line_spacing,
            self.word_spacing,
        ];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(WordCloudError::invalid_config(
                "margins and spacing must be finite and >= 0",
            ));
        }

        Ok(())
    }

    /// Parse and validate a config from JSON; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder method: set canvas size
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Builder method: set number of considered words
    pub fn with_max_words(mut self, max: usize) -> Self {
        self.max_words = max;
        self
    }

    /// Builder method: set palette
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Builder method: set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Builder method: set background fill
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Rightmost x a word may reach before wrapping.
    pub fn usable_width(&self) -> f64 {
        f64::from(self.canvas_width) - self.margin_left - self.margin_right
    }
}
