//! JSON interface
//!
//! Lets a host that only speaks JSON (a web worker, a scripting bridge) run
//! the whole pipeline with one string in and one string out. Layout uses the
//! approximate measurement of [`RecordingSurface`], so the returned commands
//! are reproducible without fonts.

use crate::errors::Result;
use crate::layout::{DrawCommand, RecordingSurface};
use crate::pipeline::observer::NoopObserver;
use crate::pipeline::runner::{WordCloud, WordCloudPipeline};
use crate::types::{LayoutConfig, WordCloudConfig, WordEntry};
use serde::Deserialize;

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRequest {
    pub text: String,
    #[serde(default)]
    pub config: Option<WordCloudConfig>,
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
}

/// Run a [`JsonRequest`] and return the resulting [`WordCloud`] as JSON.
///
/// Each request gets a fresh pipeline, so pacing never rejects it.
pub fn process_json(request: &str) -> Result<String> {
    let request: JsonRequest = serde_json::from_str(request)?;
    let pipeline = WordCloudPipeline::new(
        request.config.unwrap_or_default(),
        request.layout.unwrap_or_default(),
    )?;

    let mut surface = RecordingSurface::new();
    let cloud: WordCloud = pipeline.run(&request.text, Some(&mut surface), &mut NoopObserver)?;
    cloud.to_json()
}

pub fn entries_to_json(entries: &[WordEntry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

pub fn entries_from_json(json: &str) -> Result<Vec<WordEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn commands_to_json(commands: &[DrawCommand]) -> Result<String> {
    Ok(serde_json::to_string(commands)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_process_json_basic() {
        let output = process_json(r#"{"text": "hello world hello"}"#).unwrap();
        let cloud: WordCloud = serde_json::from_str(&output).unwrap();

        assert_eq!(cloud.entries[0], WordEntry::new("hello", 2, 40));
        assert_eq!(cloud.stats.unique_words, 2);
        assert_eq!(cloud.commands.len(), 2);
        assert_eq!(cloud.commands[0].color.to_hex(), "#667eea");
    }

    #[test]
    fn test_process_json_with_config() {
        let request = r##"{
            "text": "one two three four",
            "config": {"max_words": 2}
        }"##;
        let err = process_json(request).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TooManyWords);
    }

    #[test]
    fn test_process_json_custom_palette() {
        let request = r##"{
            "text": "alpha beta",
            "layout": {"palette": ["#000000"]}
        }"##;
        let cloud: WordCloud = serde_json::from_str(&process_json(request).unwrap()).unwrap();
        assert!(cloud.commands.iter().all(|c| c.color.to_hex() == "#000000"));
    }

    #[test]
    fn test_process_json_invalid_layout_config() {
        let err = process_json(r#"{"text": "alpha", "layout": {"palette": []}}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_process_json_malformed() {
        let err = process_json("{not json").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Serialization);
    }

    #[test]
    fn test_entries_json_shape() {
        let json = entries_to_json(&[WordEntry::new("hello", 2, 40)]).unwrap();
        assert_eq!(json, r#"[{"text":"hello","weight":2,"size":40}]"#);
        assert_eq!(entries_from_json(&json).unwrap()[0].text, "hello");
    }

    #[test]
    fn test_commands_json_shape() {
        let command = DrawCommand {
            text: "hello".into(),
            x: 50.0,
            y: 100.0,
            size: 40,
            color: crate::types::Color::WHITE,
        };
        let json = commands_to_json(&[command]).unwrap();
        assert_eq!(
            json,
            r##"[{"text":"hello","x":50.0,"y":100.0,"size":40,"color":"#ffffff"}]"##
        );
    }
}
