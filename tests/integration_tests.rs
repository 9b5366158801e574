//! Integration tests for rapid_wordcloud

use rapid_wordcloud::*;
use std::thread;
use std::time::Duration;

/// Sample text for testing
const SAMPLE_TEXT: &str = "Rust is a systems programming language that runs blazingly fast, \
prevents segfaults, and guarantees thread safety. Rust achieves memory safety \
without garbage collection. The Rust compiler checks ownership and borrowing \
at compile time, so memory bugs are caught before the program runs. Systems \
programmers like Rust because Rust gives control over memory layout. Rust: \
fast, safe, productive.";

fn unpaced_engine() -> FrequencyEngine {
    FrequencyEngine::default().with_rate_limiter(RateLimiter::new(Duration::ZERO))
}

#[test]
fn test_full_pipeline() {
    let engine = unpaced_engine();
    let entries = engine.process_text(SAMPLE_TEXT).unwrap();

    assert!(!entries.is_empty());
    assert_eq!(entries[0].text, "rust");
    assert_eq!(entries[0].weight, 6);
    assert_eq!(entries[0].size, 80);

    for pair in entries.windows(2) {
        assert!(pair[0].weight >= pair[1].weight);
    }
    for entry in &entries {
        assert!(entry.text.chars().count() > 2);
        assert!((20..=80).contains(&entry.size));
    }

    let mut surface = RecordingSurface::new();
    let commands = LayoutEngine::default()
        .draw_word_cloud(Some(&mut surface), &entries)
        .unwrap();

    assert!(!commands.is_empty());
    assert!(commands.len() <= 30);
    assert_eq!(surface.size(), (800, 600));
    for command in &commands {
        assert!(command.x >= 50.0);
        assert!(command.y < 550.0);
    }
}

#[test]
fn test_ties_rank_by_first_occurrence() {
    let entries = unpaced_engine()
        .process_text("zebra apple mango apple zebra mango kiwi")
        .unwrap();
    let order: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(order, vec!["zebra", "apple", "mango", "kiwi"]);
}

#[test]
fn test_processing_is_idempotent_with_pacing_gap() {
    let engine = FrequencyEngine::default();
    let first = engine.process_text(SAMPLE_TEXT).unwrap();
    thread::sleep(Duration::from_millis(110));
    let second = engine.process_text(SAMPLE_TEXT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_back_to_back_calls_are_rate_limited() {
    let engine = FrequencyEngine::default();
    assert!(engine.process_text("first").is_ok());
    let err = engine.process_text("second").unwrap_err();
    assert_eq!(err, WordCloudError::rate_limited(100));
}

#[test]
fn test_input_length_boundary() {
    let engine = unpaced_engine();
    let exact = "abc ".repeat(12_500);
    assert_eq!(exact.chars().count(), 50_000);
    // 12,500 tokens is over the default word cap, so widen it for this check
    let wide = FrequencyEngine::new(WordCloudConfig::default().with_max_words(20_000))
        .unwrap()
        .with_rate_limiter(RateLimiter::new(Duration::ZERO));
    assert_eq!(wide.process_text(&exact).unwrap()[0].weight, 12_500);

    let over = format!("{exact}x");
    let err = engine.process_text(&over).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InputTooLarge);
}

#[test]
fn test_input_length_counts_utf16_units() {
    let engine = unpaced_engine();
    // Each emoji is two UTF-16 units
    let exact = "\u{1F600}".repeat(25_000);
    assert_eq!(engine.process_text(&exact).unwrap(), Vec::new());

    let over = "\u{1F600}".repeat(25_001);
    let err = engine.process_text(&over).unwrap_err();
    assert_eq!(err, WordCloudError::input_too_large(50_002, 50_000));
}

#[test]
fn test_too_many_words_at_default_cap() {
    let engine = unpaced_engine();
    let at_cap = "abc ".repeat(10_000);
    assert!(engine.process_text(&at_cap).is_ok());

    let over_cap = "abc ".repeat(10_001);
    let err = engine.process_text(&over_cap).unwrap_err();
    assert_eq!(err, WordCloudError::too_many_words(10_001, 10_000));
}

#[test]
fn test_malicious_content_any_case() {
    let engine = unpaced_engine();
    for text in [
        "<script>alert(1)</script>",
        "JAVASCRIPT:void(0)",
        "<img src=x OnError=alert(1)>",
        "<input AutoFocus=true>",
    ] {
        let err = engine.process_text(text).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MaliciousContent, "text: {text}");
    }
}

#[test]
fn test_fifty_entries_render_at_most_thirty() {
    let entries: Vec<WordEntry> = (0..50)
        .map(|i| WordEntry::new(format!("w{i:02}"), 1, 20))
        .collect();

    let commands = layout::layout(800, 100_000, &entries, &DEFAULT_PALETTE, |_, _| Ok(30.0))
        .unwrap();
    assert_eq!(commands.len(), 30);
    assert_eq!(commands.last().unwrap().text, "w29");
}

#[test]
fn test_canvas_too_short_still_clears() {
    let engine = LayoutEngine::new(LayoutConfig::default().with_canvas_size(800, 140)).unwrap();
    let entries = vec![WordEntry::new("hello", 1, 20)];
    let mut surface = RecordingSurface::new();

    let commands = engine.draw_word_cloud(Some(&mut surface), &entries).unwrap();
    assert!(commands.is_empty());
    assert_eq!(surface.clear_count(), 1);
}

#[test]
fn test_layout_determinism_across_surfaces() {
    let entries = unpaced_engine().process_text(SAMPLE_TEXT).unwrap();
    let engine = LayoutEngine::default();

    let mut recording = RecordingSurface::new();
    let mut svg = SvgSurface::new(10, 10);
    let first = engine.draw_word_cloud(Some(&mut recording), &entries).unwrap();
    let second = engine.draw_word_cloud(Some(&mut svg), &entries).unwrap();

    assert_eq!(first, second);
    assert_eq!(svg.text_count(), first.len());
}

#[test]
fn test_svg_output() {
    let pipeline = WordCloudPipeline::from_engines(unpaced_engine(), LayoutEngine::default());
    let mut surface = SvgSurface::new(800, 600);
    let cloud = pipeline
        .run("ferris ferris crab", Some(&mut surface), &mut NoopObserver)
        .unwrap();

    let svg = surface.to_svg_string();
    assert_eq!(cloud.commands.len(), 2);
    assert!(svg.contains("ferris"));
    assert!(svg.contains("crab"));
    assert!(svg.contains("#667eea"));
    assert!(svg.contains("#764ba2"));
}

#[test]
fn test_session_flow() {
    let pipeline = WordCloudPipeline::from_engines(unpaced_engine(), LayoutEngine::default());
    let mut session = WordCloudSession::new(pipeline).with_surface(RecordingSurface::new());

    session.generate(SAMPLE_TEXT).unwrap();
    let stats = session.stats();
    assert_eq!(stats.most_frequent.as_deref(), Some("rust"));
    assert_eq!(stats.unique_words, session.entries().len());

    assert!(session.generate("data:text/html,hi").is_err());
    assert!(session.stats().is_empty());

    session.generate("hello world hello").unwrap();
    session.clear().unwrap();
    assert!(session.entries().is_empty());
}

#[test]
fn test_json_interface() {
    let output = json::process_json(r#"{"text": "Hello, WORLD! hello world."}"#).unwrap();
    let cloud: WordCloud = serde_json::from_str(&output).unwrap();

    assert_eq!(
        cloud.entries,
        vec![
            WordEntry::new("hello", 2, 40),
            WordEntry::new("world", 2, 40),
        ]
    );
    assert_eq!(cloud.stats.total_words, 4);
}

#[test]
fn test_shared_rate_limiter_across_threads() {
    use std::sync::Arc;

    let engine = Arc::new(
        FrequencyEngine::default().with_rate_limiter(RateLimiter::new(Duration::from_secs(60))),
    );
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.process_text("shared engine text").is_ok())
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(accepted, 1);
}
