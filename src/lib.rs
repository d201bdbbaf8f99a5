pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod runner;

// Re-export key items for convenience
pub use config::{LexisConfig, OutputStyle};
pub use core::{
    AnalysisNote, AnalysisResult, Analyzer, JournalInsight, KeywordReport, SentimentLabel, Theme,
    analyze, journal_insight,
};
pub use error::{LexisError, Result};
pub use runner::{run, run_analysis, run_insight};
