//! Bridge over the native backend behind a worker, against a real directory

use std::sync::Arc;

use sysprobe_providers::{BenchmarkConfig, NativeBackend, SystemInfoConfig};
use sysprobe_server::{BackendBridge, BackendWorker};
use tempfile::TempDir;

fn native_bridge() -> (BackendBridge, Arc<NativeBackend>) {
    let benchmark = BenchmarkConfig {
        batch_size: 8,
        ..BenchmarkConfig::default()
    };
    let backend = Arc::new(NativeBackend::new(
        SystemInfoConfig { sample_cpu: false },
        benchmark,
    ));
    let (invoker, _worker) = BackendWorker::spawn(backend.clone(), 8);
    (BackendBridge::new(Arc::new(invoker)), backend)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_system_info_through_worker() {
    let (bridge, _) = native_bridge();
    let info = bridge.get_system_info().await.expect("system info");

    assert!(info.cpu_cores >= 1);
    assert!(info.total_memory > 0);
    assert!(info.used_memory <= info.total_memory);
    assert!(!info.os.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_disk_measurements_through_worker() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().to_str().expect("utf-8 temp path");
    let (bridge, backend) = native_bridge();

    let write_speed = bridge.get_write_speed(path).await.expect("write speed");
    let read_speed = bridge.get_read_speed(path).await.expect("read speed");
    let write_delay = bridge.get_write_delay(path).await.expect("write delay");

    assert!(write_speed > 0);
    assert!(read_speed > 0);
    assert!(write_delay >= 0.0);

    let snapshot = backend.last_measurements();
    assert_eq!(snapshot.write_speed, Some(write_speed));
    assert_eq!(snapshot.read_speed, Some(read_speed));

    // Scratch data is cleaned up after every run
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_directory_fails_with_command_name() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("does-not-exist");
    let (bridge, _) = native_bridge();

    let err = bridge
        .get_write_speed(missing.to_str().expect("utf-8 path"))
        .await
        .expect_err("missing directory");
    assert_eq!(err.command.as_deref(), Some("get_4k_write_speed"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_read_delay_on_file() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("sample.txt");
    std::fs::write(&file, b"hello").expect("write sample");
    let (bridge, _) = native_bridge();

    let delay = bridge
        .get_read_delay(file.to_str().expect("utf-8 path"))
        .await
        .expect("read delay");
    assert!(delay >= 0.0);
}
