mod cli;

use clap::Parser;
use cli::{Cli, SummaryFormat};
use jsonshape::error::{JsonShapeError, Result};
use jsonshape::gate::{MessageGate, Verdict};
use jsonshape::input::LineSource;
use jsonshape::summary::Summary;
use jsonshape::{classify, Shape};
use std::borrow::Cow;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Check for stdin without input
    if cli.file.is_none() && atty::is(atty::Stream::Stdin) {
        eprintln!("Usage: jsonshape [OPTIONS] [FILE]");
        eprintln!("Try 'jsonshape --help' for more information.");
        std::process::exit(1);
    }

    let source = match cli.file {
        Some(ref path) => LineSource::open(path)?,
        None => LineSource::stdin(),
    };

    let summary = if cli.decode {
        run_decode(&cli, source)?
    } else {
        run_filter(&cli, source)?
    };

    if cli.count {
        match cli.format {
            SummaryFormat::Text => println!("{}", summary.to_text()),
            SummaryFormat::Json => println!("{}", serde_json::to_string(&summary)?),
        }
    }

    Ok(())
}

fn run_filter(cli: &Cli, source: LineSource) -> Result<Summary> {
    let mut summary = Summary::default();

    for line in source.numbered() {
        let (_, bytes) = line?;
        let line = String::from_utf8_lossy(&bytes);
        let shape = classify(&line);
        summary.record(shape);

        if cli.count || shape.is_some() == cli.invert {
            continue;
        }
        emit(cli, shape, &line);
    }

    Ok(summary)
}

fn run_decode(cli: &Cli, source: LineSource) -> Result<Summary> {
    let gate = MessageGate::new(cli.is_strict());
    let mut summary = Summary::default();

    for line in source.numbered() {
        let (line_num, bytes) = line?;
        let line = String::from_utf8_lossy(&bytes);
        let shape = classify(&line);
        summary.record(shape);

        // Lossy decoding only allocates when the bytes were not UTF-8.
        if shape.is_some() && matches!(line, Cow::Owned(_)) {
            summary.record_malformed();
            if gate.is_strict() {
                return Err(JsonShapeError::InvalidUtf8 { line: line_num });
            }
            eprintln!(
                "jsonshape: warning: line {}: invalid UTF-8, skipping",
                line_num
            );
            continue;
        }

        // Unshaped lines never reach the decoder.
        match gate.inspect_classified(shape, &line) {
            Verdict::Skipped => {}
            Verdict::Decoded(value) => {
                if !cli.count {
                    emit(cli, shape, &value.to_string());
                }
            }
            Verdict::Malformed(message) => {
                summary.record_malformed();
                if gate.is_strict() {
                    return Err(JsonShapeError::JsonParse {
                        line: line_num,
                        message,
                    });
                }
                eprintln!(
                    "jsonshape: warning: line {}: invalid JSON, skipping",
                    line_num
                );
            }
        }
    }

    Ok(summary)
}

fn emit(cli: &Cli, shape: Option<Shape>, text: &str) {
    if cli.tag {
        let tag = shape.map_or_else(|| "none".to_string(), |s| s.to_string());
        println!("{}\t{}", tag, text);
    } else {
        println!("{}", text);
    }
}
