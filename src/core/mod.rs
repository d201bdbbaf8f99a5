//! Core module for Lexis
//!
//! This module contains the keyword lexicon, tokenizer, result types, the analyzer
//! and the journal insight extension.

pub mod analyzer;
pub mod insight;
pub mod lexicon;
pub mod tokenizer;
mod types;

pub use analyzer::{Analyzer, DEFAULT_DEPENDENCY_THRESHOLD, analyze, round2};
pub use insight::{JournalInsight, SentimentLabel, Theme, journal_insight};
pub use types::*;
