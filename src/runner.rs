use crate::config::LexisConfig;
use crate::core::{AnalysisResult, Analyzer, JournalInsight, journal_insight};
use crate::error::Result;
use crate::format::to_json;

/// Analyzes `text` under `config` and returns the serialized result.
///
/// Diagnostics go to stderr when `verbose` is set so stdout only ever
/// carries the JSON document.
pub fn run(config: &LexisConfig, text: &str) -> Result<String> {
    config.validate()?;

    if config.insight {
        let insight = run_insight(config, text)?;
        return to_json(&insight, config.output_style);
    }

    let result = run_analysis(config, text);
    if config.verbose {
        log_result(&result);
    }

    to_json(&result, config.output_style)
}

/// Runs the analysis only, using the configured threshold.
pub fn run_analysis(config: &LexisConfig, text: &str) -> AnalysisResult {
    let analyzer = Analyzer::with_threshold(config.dependency_threshold);
    if config.verbose {
        eprintln!(
            "Analyzing {} bytes (dependency threshold {})",
            text.len(),
            analyzer.threshold()
        );
    }
    analyzer.analyze(text)
}

/// Builds the journal insight for `text`.
pub fn run_insight(config: &LexisConfig, text: &str) -> Result<JournalInsight> {
    if config.verbose {
        eprintln!("Building journal insight for {} bytes", text.len());
    }
    let insight = journal_insight(text)?;
    if config.verbose {
        eprintln!(
            "Sentiment score: {} ({}), themes: {}",
            insight.sentiment_score,
            insight.sentiment,
            insight.themes.len()
        );
    }
    Ok(insight)
}

fn log_result(result: &AnalysisResult) {
    match result {
        AnalysisResult::Empty => eprintln!("No words found, returning empty result."),
        AnalysisResult::Full(report) => {
            eprintln!(
                "Self keywords: {}, group keywords: {}",
                report.me_count, report.we_count
            );
            eprintln!("Note: {}", report.analysis_note);
        }
    }
}
