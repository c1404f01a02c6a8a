//! Render ANSI-styled text as a span listing on stdout.
//!
//! Reads the first command-line argument, or a built-in sample when none
//! is given, and prints each resulting span with its format.
//!
//! ```text
//! cargo run --example colorize -- $'\e[1;32mok\e[0m done'
//! RUST_LOG=debug cargo run --example colorize
//! ```

use std::env;

use anyhow::Result;
use termspan::SpanProcessor;

fn main() -> Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .compact()
        .init();

    let input = env::args().nth(1).unwrap_or_else(|| {
        "\x1b[1;32mok\x1b[0m plain \x1b[4;31munderlined red\x1b[0m \x1b[7mreversed\x1b[0m"
            .to_string()
    });

    let mut processor = SpanProcessor::new();
    let spans = processor.process(&input)?;

    for span in &spans {
        println!("{:>12}  {:?}", render_label(span), span.text);
    }
    println!(
        "trailing format: {:?}",
        processor.trailing_format()
    );

    Ok(())
}

/// Short human label for a span's format.
fn render_label(span: &termspan::StyledSpan) -> String {
    let mut parts = Vec::new();
    let format = &span.format;

    if format.bold {
        parts.push("bold".to_string());
    }
    if format.italic {
        parts.push("italic".to_string());
    }
    if format.underline {
        parts.push("underline".to_string());
    }
    if format.strike {
        parts.push("strike".to_string());
    }
    if format.blink {
        parts.push("blink".to_string());
    }
    if format.reverse {
        parts.push("reverse".to_string());
    }
    parts.push(format!("{:?}", format.foreground).to_lowercase());

    parts.join("+")
}
