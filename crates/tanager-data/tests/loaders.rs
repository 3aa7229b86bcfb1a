//! Loader behavior against real directory trees.

use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tanager_config::DataConfig;
use tanager_data::{LoadError, list_projects, load_distribution, load_statistics};
use tempfile::TempDir;

const HEADER: &str = "num_generations,pop_size,worst_fit,best_fit,med_fit,average_fit,std_fit";

fn statistics_csv(rows: usize) -> String {
    let mut body = format!("{HEADER}\n");
    for g in 0..rows {
        let average = 100.0 / (g as f64 + 1.0);
        let std = 0.1 * g as f64 + 0.3;
        body.push_str(&format!("{g},50,{},{},{average},{average},{std}\n", average * 2.0, average / 2.0));
    }
    body
}

fn project(root: &Path, name: &str) -> std::path::PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).expect("project dir should create");
    dir
}

#[test]
fn nonexistent_root_enumerates_nothing() {
    let temp = TempDir::new().expect("tempdir should create");
    for missing in ["a", "a/b/c", "does-not-exist"] {
        let projects = list_projects(&temp.path().join(missing)).expect("no error");
        assert!(projects.is_empty());
    }
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(47)]
fn single_file_yields_exact_bounds(#[case] rows: usize) {
    let temp = TempDir::new().expect("tempdir should create");
    let dir = project(temp.path(), "run");
    std::fs::write(
        dir.join("tanager-statistics-file-2024.csv"),
        statistics_csv(rows),
    )
    .expect("stats should write");

    let loaded = load_statistics(&dir, &DataConfig::default()).expect("stats should load");
    let series = &loaded.series;

    assert!(loaded.warning.is_none());
    assert_eq!(series.len(), rows);
    assert_eq!(series.generation_count, rows);

    let records = tanager_data::statistics::read_statistics_file(&loaded.path)
        .expect("stats should parse");
    for (i, record) in records.iter().enumerate() {
        assert_eq!(series.generations[i] as usize, i);
        assert_eq!(series.upper[i], record.average + record.std_dev);
        assert_eq!(series.lower[i], record.average - record.std_dev);
    }
}

#[test]
fn no_matching_file_signals_no_statistics_file() {
    let temp = TempDir::new().expect("tempdir should create");
    let dir = project(temp.path(), "empty");
    std::fs::write(dir.join("statistics.csv"), statistics_csv(3)).expect("file should write");

    let err = load_statistics(&dir, &DataConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::NoStatisticsFile { .. }));
}

#[test]
fn missing_project_dir_signals_no_statistics_file() {
    let temp = TempDir::new().expect("tempdir should create");
    let err = load_statistics(&temp.path().join("gamma"), &DataConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::NoStatisticsFile { .. }));
}

#[test]
fn multiple_files_pick_first_and_warn_once() {
    let temp = TempDir::new().expect("tempdir should create");
    let dir = project(temp.path(), "multi");
    std::fs::write(dir.join("tanager-statistics-file-b.csv"), statistics_csv(2))
        .expect("file should write");
    std::fs::write(dir.join("tanager-statistics-file-a.csv"), statistics_csv(5))
        .expect("file should write");
    std::fs::write(dir.join("tanager-statistics-file-c.csv"), statistics_csv(1))
        .expect("file should write");

    let loaded = load_statistics(&dir, &DataConfig::default()).expect("stats should load");
    assert_eq!(loaded.path, dir.join("tanager-statistics-file-a.csv"));
    assert_eq!(loaded.series.len(), 5);

    let warning = loaded.warning.expect("one warning expected");
    assert_eq!(warning.ignored.len(), 2);
}

#[test]
fn distribution_follows_selected_generation() {
    let temp = TempDir::new().expect("tempdir should create");
    let dir = project(temp.path(), "run");
    std::fs::write(
        dir.join("tanager-population-file-1.tsv"),
        "id\ti0\ti1\ttotal\tflag\ng0\t1\t2\t3\ta\ng1\t3\t5\t8\tb\n",
    )
    .expect("table should write");

    let first = load_distribution(&dir, 0, &DataConfig::default()).expect("row 0");
    let second = load_distribution(&dir, 1, &DataConfig::default()).expect("row 1");

    assert_eq!(first.values, vec![1.0, 2.0]);
    assert_eq!(second.values, vec![3.0, 5.0]);
}
