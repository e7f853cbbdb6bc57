use clap::Parser;
use std::path::PathBuf;

use urlsum::SummaryMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Quick 3-sentence summary
    Sentences,
    /// Structured ~500-word summary with title and key points
    Paragraph,
}

impl From<Mode> for SummaryMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sentences => SummaryMode::ThreeSentence,
            Mode::Paragraph => SummaryMode::Paragraph,
        }
    }
}

#[derive(Parser)]
#[command(name = "urlsum", about = "Summarize any URL: web articles and YouTube videos", version)]
pub struct Cli {
    /// URL to summarize (reads URLs from stdin if omitted)
    pub url: Option<String>,

    /// Summary mode (falls back to config default, then 3-sentence)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Write the summary to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show retrieval metadata
    #[arg(short, long)]
    pub verbose: bool,
}
