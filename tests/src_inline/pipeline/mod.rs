use super::*;
use crate::pipeline::stage1_generate::{FixedScore, RngScoreSource};
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("evalplot_run_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_in(dir: &std::path::Path) -> RunConfig {
    RunConfig {
        results_path: dir.join("test_results_detailed.txt"),
        ..RunConfig::default()
    }
}

#[test]
fn test_default_config_points_at_tests_results() {
    let config = RunConfig::default();
    assert_eq!(
        config.results_path,
        PathBuf::from("tests/results/test_results_detailed.txt")
    );
    assert_eq!(config.seed, None);
    assert_eq!(config.summary_json, None);
}

#[test]
fn test_run_with_fixed_score() {
    let dir = make_temp_dir();
    let config = config_in(&dir);
    let results_path = config.results_path.clone();
    let mut reporter = Reporter::new(config, FixedScore(0.85));

    let mut console = Vec::new();
    let set = reporter.run(&mut console).unwrap();
    assert_eq!(set.scores(), [0.85; 4]);

    let stdout = String::from_utf8(console).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Optimization Test Results:");
    assert_eq!(lines[2], format!("Accuracy       : 0.85 |{}", "#".repeat(17)));
    assert_eq!(
        lines[7],
        format!("Generated text-based results in {}", results_path.display())
    );

    let file = std::fs::read_to_string(&results_path).unwrap();
    let file_lines = file.lines().collect::<Vec<_>>();
    assert_eq!(file_lines.len(), 5);
    assert_eq!(file_lines[0], "Detailed Test Metrics (Text Plot)");
    assert_eq!(file_lines[1], "Accuracy: 0.85");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_results_file_lines_match_category_pattern() {
    let dir = make_temp_dir();
    let config = config_in(&dir);
    let results_path = config.results_path.clone();
    let mut reporter = Reporter::new(config, RngScoreSource::seeded(5));
    reporter.run(&mut std::io::sink()).unwrap();

    let file = std::fs::read_to_string(&results_path).unwrap();
    let names = ["Accuracy", "Fairness", "Robustness", "Explainability"];
    for (line, name) in file.lines().skip(1).zip(names) {
        let (label, value) = line.split_once(": ").unwrap();
        assert_eq!(label, name);
        let score = value.parse::<f64>().unwrap();
        assert!((0.7..=1.0).contains(&score));
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_second_run_overwrites_first() {
    let dir = make_temp_dir();
    let config = config_in(&dir);
    let results_path = config.results_path.clone();

    Reporter::new(config.clone(), FixedScore(0.75))
        .run(&mut std::io::sink())
        .unwrap();
    let second = Reporter::new(config, FixedScore(0.95))
        .run(&mut std::io::sink())
        .unwrap();

    let file = std::fs::read_to_string(&results_path).unwrap();
    assert_eq!(file.lines().count(), 5);
    assert!(!file.contains("0.75"));
    assert_eq!(
        file,
        crate::report::results_file::render_results_file(&second)
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_dir_fails_after_chart() {
    let dir = make_temp_dir();
    let config = RunConfig {
        results_path: dir.join("missing").join("test_results_detailed.txt"),
        ..RunConfig::default()
    };
    let results_path = config.results_path.clone();
    let mut reporter = Reporter::new(config, FixedScore(0.85));

    let mut console = Vec::new();
    let err = reporter.run(&mut console).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
    assert!(!results_path.exists());

    let stdout = String::from_utf8(console).unwrap();
    assert!(stdout.starts_with("Optimization Test Results:\n"));
    assert_eq!(stdout.lines().count(), 7);
    assert!(!stdout.contains("Generated text-based results"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_summary_json_written_when_configured() {
    let dir = make_temp_dir();
    let summary_path = dir.join("summary.json");
    let config = RunConfig {
        seed: Some(11),
        summary_json: Some(summary_path.clone()),
        ..config_in(&dir)
    };
    let mut reporter = Reporter::new(config, RngScoreSource::seeded(11));
    let set = reporter.run(&mut std::io::sink()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(value["seed"], 11);
    assert_eq!(value["metrics"][0]["score"], set.scores()[0]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_seeded_runs_write_identical_files() {
    let dir_a = make_temp_dir();
    let dir_b = make_temp_dir();
    let config_a = config_in(&dir_a);
    let config_b = config_in(&dir_b);
    let (path_a, path_b) = (config_a.results_path.clone(), config_b.results_path.clone());

    Reporter::new(config_a, RngScoreSource::seeded(2024))
        .run(&mut std::io::sink())
        .unwrap();
    Reporter::new(config_b, RngScoreSource::seeded(2024))
        .run(&mut std::io::sink())
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(path_a).unwrap(),
        std::fs::read_to_string(path_b).unwrap()
    );

    std::fs::remove_dir_all(&dir_a).unwrap();
    std::fs::remove_dir_all(&dir_b).unwrap();
}
