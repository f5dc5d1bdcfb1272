// tests/integration_run.rs
//! End-to-end runs through the CLI handlers: config + query log on disk,
//! build/eval/explore pipelines, error-to-exit-code contract.

use hoproute_core::cli::handlers;
use hoproute_core::config::Config;
use hoproute_core::error::HopRouteError;
use hoproute_core::exit::HopRouteExit;
use hoproute_core::explore;
use hoproute_core::graph::order::OrderingStrategy;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_fixture(dir: &Path, config: &str, queries: &str) -> PathBuf {
    let path = dir.join("hoproute.toml");
    fs::write(&path, config).unwrap();
    fs::write(dir.join("queries.json"), queries).unwrap();
    path
}

fn standard_fixture(dir: &Path) -> PathBuf {
    write_fixture(
        dir,
        r#"
node_count = 20
edge_budget = 35
max_degree = 2
top_k = 3
hop_budget = 25
"#,
        "[[5, 0], [6, 0], [7, 0], [5, 1], [6, 1], [9, 2], [0, 19], [3, 3]]",
    )
}

#[test]
fn test_build_with_verification_succeeds() {
    let temp = tempdir().unwrap();
    let path = standard_fixture(temp.path());

    let exit = handlers::handle_build(&path, None, true, false).unwrap();
    assert_eq!(exit, HopRouteExit::Success);
}

#[test]
fn test_build_json_output() {
    let temp = tempdir().unwrap();
    let path = standard_fixture(temp.path());

    let exit = handlers::handle_build(&path, Some(OrderingStrategy::Interleaved), true, true)
        .unwrap();
    assert_eq!(exit, HopRouteExit::Success);
}

#[test]
fn test_eval_succeeds() {
    let temp = tempdir().unwrap();
    let path = standard_fixture(temp.path());

    let exit = handlers::handle_eval(&path, None, None, false).unwrap();
    assert_eq!(exit, HopRouteExit::Success);

    let exit = handlers::handle_eval(&path, Some(OrderingStrategy::Interleaved), Some(3), true)
        .unwrap();
    assert_eq!(exit, HopRouteExit::Success);
}

#[test]
fn test_explore_picks_a_strategy() {
    let temp = tempdir().unwrap();
    let path = standard_fixture(temp.path());

    let config = Config::load(&path).unwrap();
    let queries = config.load_queries(temp.path()).unwrap();
    let report = explore::run(&config, &queries).unwrap();

    assert_eq!(report.candidates.len(), OrderingStrategy::ALL.len());
    assert!(report
        .candidates
        .iter()
        .any(|c| c.strategy == report.best));
    // Hop budget 25 covers any path in a 20-node topology.
    for c in &report.candidates {
        assert_eq!(c.found, c.evaluated);
    }

    let exit = handlers::handle_explore(&path, true).unwrap();
    assert_eq!(exit, HopRouteExit::Success);
}

#[test]
fn test_budget_exceeded_surfaces_from_handler() {
    let temp = tempdir().unwrap();
    let path = write_fixture(
        temp.path(),
        "node_count = 10\nedge_budget = 5\n",
        "[[0, 1]]",
    );

    let err = handlers::handle_build(&path, None, false, false).unwrap_err();
    let route_err = err.downcast_ref::<HopRouteError>().unwrap();
    assert!(matches!(route_err, HopRouteError::BudgetExceeded(_)));
    assert_eq!(
        HopRouteExit::from_error(route_err),
        HopRouteExit::BudgetExceeded
    );
}

#[test]
fn test_out_of_range_log_rejected_as_invalid_input() {
    // The ranker consumes the log first, so a malformed log fails the whole
    // run with InvalidInput rather than building on bad frequencies.
    let temp = tempdir().unwrap();
    let path = write_fixture(
        temp.path(),
        "node_count = 10\nedge_budget = 15\n",
        "[[0, 10]]",
    );

    let err = handlers::handle_eval(&path, None, None, false).unwrap_err();
    let route_err = err.downcast_ref::<HopRouteError>().unwrap();
    assert!(matches!(route_err, HopRouteError::InvalidInput(_)));
    assert_eq!(
        HopRouteExit::from_error(route_err),
        HopRouteExit::InvalidInput
    );
}

#[test]
fn test_missing_query_file_is_io_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("hoproute.toml");
    fs::write(&path, "node_count = 10\nedge_budget = 15\n").unwrap();

    let err = handlers::handle_eval(&path, None, None, false).unwrap_err();
    let route_err = err.downcast_ref::<HopRouteError>().unwrap();
    assert!(matches!(route_err, HopRouteError::Io { .. }));
    assert_eq!(HopRouteExit::from_error(route_err), HopRouteExit::Error);
}
