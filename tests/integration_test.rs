use lexis::{AnalysisNote, LexisConfig, OutputStyle, analyze, run};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn lexis_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lexis"))
}

#[test]
fn test_cli_prints_json_line() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = lexis_bin()
        .current_dir(temp_dir.path())
        .arg("biz biz biz biz")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "{\"me_count\": 0, \"we_count\": 4, \"me_ratio\": 0.0, \"we_ratio\": 1.0, \"sentiment\": 0.0, \"analysis_note\": \"High Dependency Risk\"}\n"
    );
    Ok(())
}

#[test]
fn test_cli_empty_text() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = lexis_bin().current_dir(temp_dir.path()).arg("   ").output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "{\"me_ratio\": 0, \"we_ratio\": 0, \"sentiment\": 0}\n"
    );
    Ok(())
}

#[test]
fn test_cli_missing_argument_fails() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = lexis_bin().current_dir(temp_dir.path()).output()?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_cli_verbose_keeps_stdout_clean() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = lexis_bin()
        .current_dir(temp_dir.path())
        .args(["--verbose", "ben mutlu"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim_end())?;
    assert_eq!(parsed["me_count"], 1);
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_cli_reads_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("lexis.toml"),
        "dependency_threshold = 0.3\noutput_style = \"pretty\"\n",
    )?;

    let output = lexis_bin()
        .current_dir(temp_dir.path())
        .arg("ben ben biz")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("{\n"));
    assert!(stdout.contains("\"analysis_note\": \"High Dependency Risk\""));
    Ok(())
}

#[test]
fn test_cli_rejects_invalid_config() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("lexis.toml"), "dependency_threshold = 2.0\n")?;

    let output = lexis_bin()
        .current_dir(temp_dir.path())
        .arg("ben")
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("dependency threshold"));
    Ok(())
}

#[test]
fn test_config_file_round_trip() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lexis.toml");
    let config = LexisConfig {
        dependency_threshold: 0.5,
        output_style: OutputStyle::Pretty,
        verbose: true,
        insight: true,
    };
    fs::write(&path, toml::to_string(&config)?)?;

    assert_eq!(LexisConfig::load_from_path(&path)?, config);
    Ok(())
}

#[test]
fn test_cli_insight_flag() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = lexis_bin()
        .current_dir(temp_dir.path())
        .args(["--insight", "Ben ve benim ikizim birlikte okula gittik."])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim_end())?;
    assert_eq!(parsed["me_ratio"], 0.5);
    assert_eq!(parsed["themes"], serde_json::json!(["Akademik", "İkizlik"]));
    assert_eq!(
        parsed["feedback"],
        "Dengeli bir bakış açısı görüyorum. Her duygu geçerlidir, yazmaya devam et."
    );
    Ok(())
}

#[test]
fn test_cli_insight_rejects_short_entry() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = lexis_bin()
        .current_dir(temp_dir.path())
        .args(["--insight", "kısa"])
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("too short"));
    Ok(())
}

#[test]
fn test_information_separators_split_words() {
    let result = analyze("ben\u{1c}biz\u{1d}bize\u{1e}x");
    let report = result.report().expect("non-empty input");
    assert_eq!(report.me_count, 1);
    assert_eq!(report.we_count, 2);
    assert_eq!(report.we_ratio, 0.5);
}

#[test]
fn test_sentiment_examples() {
    assert_eq!(analyze("mutlu harika güzel").sentiment(), 10.0);
    assert_eq!(analyze("kötü üzgün").sentiment(), -10.0);
}

#[test]
fn test_note_matches_ratio_for_every_input() {
    let samples = [
        "ben",
        "biz",
        "biz bize bizim ben",
        "biz bize bizim ikimiz ben",
        "bugün biz çok mutlu idik",
        "Ben ve BİZ",
    ];
    for text in samples {
        let result = analyze(text);
        let expected = if result.we_ratio() > 0.7 {
            AnalysisNote::HighDependencyRisk
        } else {
            AnalysisNote::Balanced
        };
        assert_eq!(result.note(), Some(expected), "{text}");
    }
}

#[test]
fn test_output_is_byte_identical_across_runs() -> anyhow::Result<()> {
    let config = LexisConfig::default();
    let text = "Benim için biz her zaman iyi ama bazen yalnız";
    assert_eq!(run(&config, text)?, run(&config, text)?);
    Ok(())
}
