pub mod formatter;

use clap::ValueEnum;

pub use formatter::{
    format_breakdown, format_json, format_report, format_score, format_suggestions, format_tsv,
    should_use_colors,
};

/// How the score report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty JSON document
    Json,
    /// One tab-separated line
    Tsv,
}
