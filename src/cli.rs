use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsonshape")]
#[command(about = "Filter lines that look like a JSON object or array")]
#[command(version)]
pub struct Cli {
    /// Input file path (reads from stdin if omitted)
    pub file: Option<PathBuf>,

    /// Print lines that are NOT JSON-shaped
    #[arg(short = 'v', long, conflicts_with = "decode")]
    pub invert: bool,

    /// Print only a summary of counts
    #[arg(short, long)]
    pub count: bool,

    /// Decode JSON-shaped lines and print them compacted
    #[arg(short, long)]
    pub decode: bool,

    /// Prefix printed lines with their shape
    #[arg(short, long)]
    pub tag: bool,

    /// Summary format for --count
    #[arg(long, value_enum, default_value = "text")]
    pub format: SummaryFormat,

    /// Exit on a line that fails decoding (default: true)
    #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
    pub strict: bool,

    /// Skip lines that fail decoding with a warning
    #[arg(long)]
    pub lenient: bool,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    pub fn is_strict(&self) -> bool {
        // strict requires --strict=true (default) AND no --lenient
        self.strict && !self.lenient
    }
}
