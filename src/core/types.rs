//! Result types produced by the analyzer

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Qualitative label derived from the group-reference ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum AnalysisNote {
    #[serde(rename = "High Dependency Risk")]
    HighDependencyRisk,
    #[serde(rename = "Balanced")]
    Balanced,
}

impl AnalysisNote {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisNote::HighDependencyRisk => "High Dependency Risk",
            AnalysisNote::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for AnalysisNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics for a text with at least one token.
///
/// Field order is the wire order of the serialized object.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct KeywordReport {
    pub me_count: usize,
    pub we_count: usize,
    pub me_ratio: f64,
    pub we_ratio: f64,
    pub sentiment: f64,
    pub analysis_note: AnalysisNote,
}

/// Outcome of a single analysis.
///
/// Empty input yields a smaller object with only the three zeroed metrics;
/// everything else yields the full report.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Empty,
    Full(KeywordReport),
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, AnalysisResult::Empty)
    }

    pub fn report(&self) -> Option<&KeywordReport> {
        match self {
            AnalysisResult::Empty => None,
            AnalysisResult::Full(report) => Some(report),
        }
    }

    pub fn me_ratio(&self) -> f64 {
        self.report().map_or(0.0, |r| r.me_ratio)
    }

    pub fn we_ratio(&self) -> f64 {
        self.report().map_or(0.0, |r| r.we_ratio)
    }

    pub fn sentiment(&self) -> f64 {
        self.report().map_or(0.0, |r| r.sentiment)
    }

    pub fn note(&self) -> Option<AnalysisNote> {
        self.report().map(|r| r.analysis_note)
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Integer zeros, not 0.0
            AnalysisResult::Empty => {
                let mut state = serializer.serialize_struct("AnalysisResult", 3)?;
                state.serialize_field("me_ratio", &0u8)?;
                state.serialize_field("we_ratio", &0u8)?;
                state.serialize_field("sentiment", &0u8)?;
                state.end()
            }
            AnalysisResult::Full(report) => report.serialize(serializer),
        }
    }
}
