//! Tests for the lab config watcher.

use super::*;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::broadcast;

#[test]
fn watcher_accepts_missing_file() {
    let watcher = ConfigWatcher::new(
        PathBuf::from("/tmp/nonexistent_labshell_config.json"),
        Duration::from_millis(500),
    );
    assert!(watcher.is_ok());
}

#[test]
fn watcher_rejects_path_without_file_name() {
    assert!(ConfigWatcher::new(PathBuf::from("/"), Duration::from_millis(50)).is_err());
}

#[test]
fn watcher_keeps_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let watcher = ConfigWatcher::new(path.clone(), Duration::from_millis(50)).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[tokio::test]
async fn burst_of_writes_sends_one_signal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let watcher = ConfigWatcher::new(path.clone(), Duration::from_millis(200)).unwrap();
    let (tx, mut rx) = broadcast::channel(4);
    let task = tokio::spawn(async move { watcher.watch(tx).await });
    tokio::time::sleep(Duration::from_millis(200)).await;

    for i in 0..3 {
        std::fs::write(&path, format!("{{\"n\": {i}}}")).unwrap();
    }

    let signal = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(matches!(signal, Ok(Ok(()))));
    let extra = tokio::time::timeout(Duration::from_millis(500), rx.recv()).await;
    assert!(extra.is_err(), "burst must coalesce into one signal");

    task.abort();
}
