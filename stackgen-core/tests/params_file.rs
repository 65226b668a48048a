//! Parameter-file loading tests for `stackgen-core`.

use std::fs;

use rstest::rstest;
use stackgen_core::{ClusterParams, ParamsError};
use tempfile::TempDir;

fn write_params(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("cluster.yaml");
    fs::write(&path, body).expect("write params file");
    path
}

#[test]
fn full_file_overrides_every_default() {
    let dir = TempDir::new().unwrap();
    let path = write_params(
        &dir,
        "replicas: 5\ndatabase_cpu: '2'\ndatabase_mem: 4G\nworker_cpu: '0.5'\nworker_mem: 512M\n",
    );
    let p = ClusterParams::load_at(&path).expect("load");
    assert_eq!(
        p,
        ClusterParams {
            replicas: 5,
            database_cpu: "2".into(),
            database_mem: "4G".into(),
            worker_cpu: "0.5".into(),
            worker_mem: "512M".into(),
        }
    );
}

#[test]
fn empty_file_is_all_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_params(&dir, "\n");
    assert_eq!(ClusterParams::load_at(&path).unwrap(), ClusterParams::default());
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = ClusterParams::load_at(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ParamsError::NotFound { .. }), "got {err:?}");
}

#[rstest]
#[case("unknown_key", "replica: 3\n")]
#[case("non_integer_replicas", "replicas: three\n")]
#[case("negative_replicas", "replicas: -2\n")]
#[case("not_a_mapping", "- replicas\n")]
fn malformed_file_is_parse_error(#[case] label: &str, #[case] body: &str) {
    let dir = TempDir::new().unwrap();
    let path = write_params(&dir, body);
    let err = ClusterParams::load_at(&path).unwrap_err();
    match err {
        ParamsError::Parse { path: p, .. } => assert_eq!(p, path, "[{label}] path"),
        other => panic!("[{label}] expected Parse, got {other:?}"),
    }
}

#[test]
fn parse_error_message_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_params(&dir, "replicas: [\n");
    let msg = ClusterParams::load_at(&path).unwrap_err().to_string();
    assert!(msg.contains("cluster.yaml"), "message: {msg}");
}
