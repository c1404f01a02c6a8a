//! Integration tests for chunked stream processing
//!
//! These tests feed terminal output through `SpanProcessor` the way a host
//! application would: chunk by chunk as it arrives, with the trailing
//! format carried between calls.

use termspan::{Color, Format, SpanProcessor, StyledSpan};

/// Merge adjacent spans with identical formats, normalizing segmentation
/// differences between chunked and single-call processing.
fn coalesce(spans: &[StyledSpan]) -> Vec<StyledSpan> {
    let mut merged: Vec<StyledSpan> = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.format == span.format => last.text.push_str(&span.text),
            _ => merged.push(span.clone()),
        }
    }
    merged
}

#[test]
fn test_chunked_equals_single_call() {
    let chunks = [
        "building\x1b[32m ok\x1b[0m\n",
        "linking\x1b[1;31m failed",
        "\x1b[0m\ndone\n",
    ];
    let full: String = chunks.concat();

    let mut whole = SpanProcessor::new();
    let combined = whole.process(&full).unwrap();

    let mut streamed = SpanProcessor::new();
    let mut sequential = Vec::new();
    for chunk in &chunks {
        sequential.extend(streamed.process(chunk).unwrap());
    }

    assert_eq!(streamed.trailing_format(), whole.trailing_format());
    assert_eq!(coalesce(&sequential), coalesce(&combined));
}

#[test]
fn test_format_opened_in_one_chunk_styles_the_next() {
    let mut processor = SpanProcessor::new();

    processor.process("\x1b[1;35m").unwrap();
    let spans = processor.process("bold magenta").unwrap();

    assert_eq!(spans.len(), 1);
    assert!(spans[0].format.bold);
    assert_eq!(spans[0].format.foreground, Color::Magenta);
}

#[test]
fn test_strict_error_then_buffered_retry() {
    let mut processor = SpanProcessor::new();
    processor.process("\x1b[33m").unwrap();

    // A sequence split across chunks parses as malformed; the trailing
    // format survives so the host can buffer and retry
    assert!(processor.process("\x1b[4").is_err());
    assert_eq!(
        processor.trailing_format().unwrap().foreground,
        Color::Yellow
    );

    let spans = processor.process("\x1b[4munderlined yellow").unwrap();
    assert!(spans[0].format.underline);
    assert_eq!(spans[0].format.foreground, Color::Yellow);
}

#[test]
fn test_lossy_stream_keeps_flowing() {
    let mut processor = SpanProcessor::new();

    processor.process_lossy("\x1b[36mcyan ");
    let diagnostic = processor.process_lossy("\x1b[broken");
    let after = processor.process_lossy("still cyan");

    assert_eq!(diagnostic.len(), 1);
    assert!(diagnostic[0].text.contains("malformed escape sequence"));
    assert!(diagnostic[0].is_plain());

    assert_eq!(after.len(), 1);
    assert_eq!(after[0].format.foreground, Color::Cyan);
}

#[test]
fn test_untracked_stream_with_custom_fallback() {
    let fallback = Format::default().apply(7).apply(37);
    let mut processor = SpanProcessor::untracked().with_fallback(fallback);

    let spans = processor
        .process("\x1b[31mignored\x1b[0m styling")
        .unwrap();

    assert_eq!(processor.trailing_format(), None);
    for span in &spans {
        assert_eq!(span.format, fallback);
    }
}

#[test]
fn test_independent_streams_do_not_interfere() {
    let mut stdout = SpanProcessor::new();
    let mut stderr = SpanProcessor::new();

    stdout.process("\x1b[32m").unwrap();
    stderr.process("\x1b[31m").unwrap();

    let out = stdout.process("fine").unwrap();
    let err = stderr.process("broken").unwrap();

    assert_eq!(out[0].format.foreground, Color::Green);
    assert_eq!(err[0].format.foreground, Color::Red);
}

#[test]
fn test_spans_serialize_for_host_transport() {
    let mut processor = SpanProcessor::new();
    let spans = processor.process("\x1b[4;94mlink\x1b[0m text").unwrap();

    let json = serde_json::to_string(&spans).unwrap();
    let back: Vec<StyledSpan> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, spans);
}
