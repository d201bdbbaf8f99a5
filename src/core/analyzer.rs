//! Keyword counting, ratio and sentiment scoring

use super::lexicon::{
    GROUP_KEYWORDS, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, SELF_KEYWORDS, count_matches,
};
use super::tokenizer::tokenize;
use super::types::{AnalysisNote, AnalysisResult, KeywordReport};

/// Group ratio above which a text is flagged as a dependency risk
pub const DEFAULT_DEPENDENCY_THRESHOLD: f64 = 0.7;

/// Sentiment is the keyword balance per word scaled to this factor.
const SENTIMENT_SCALE: f64 = 10.0;

/// Stateless analyzer. The only knob is the dependency threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyzer {
    threshold: f64,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DEPENDENCY_THRESHOLD,
        }
    }
}

impl Analyzer {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let words = tokenize(text);
        let total_words = words.len();

        if total_words == 0 {
            return AnalysisResult::Empty;
        }

        let total = total_words as f64;

        let me_count = count_matches(&words, &SELF_KEYWORDS);
        let we_count = count_matches(&words, &GROUP_KEYWORDS);
        let me_ratio = round2(me_count as f64 / total);
        let we_ratio = round2(we_count as f64 / total);

        let pos_score = count_matches(&words, &POSITIVE_KEYWORDS) as f64;
        let neg_score = count_matches(&words, &NEGATIVE_KEYWORDS) as f64;
        let sentiment = round2((pos_score - neg_score) / total * SENTIMENT_SCALE);

        let analysis_note = if we_ratio > self.threshold {
            AnalysisNote::HighDependencyRisk
        } else {
            AnalysisNote::Balanced
        };

        AnalysisResult::Full(KeywordReport {
            me_count,
            we_count,
            me_ratio,
            we_ratio,
            sentiment,
            analysis_note,
        })
    }
}

/// Analyzes `text` with the default dependency threshold.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::default().analyze(text)
}

/// Rounds to two decimals, resolving ties on the exact binary value
/// (half-to-even), so `0.125` becomes `0.12` and `0.025` becomes `0.03`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
