//! Native backend tests against the real system

use sysprobe_domain::Backend;
use sysprobe_providers::{BenchmarkConfig, NativeBackend, SystemInfoConfig};
use tempfile::TempDir;

fn backend() -> NativeBackend {
    NativeBackend::new(
        SystemInfoConfig { sample_cpu: false },
        BenchmarkConfig {
            batch_size: 8,
            ..BenchmarkConfig::default()
        },
    )
}

#[tokio::test]
async fn test_sys_info_snapshot() {
    let info = backend().get_sys_info().await.expect("system info");

    assert!(!info.os.is_empty());
    assert!(info.cpu_usage >= 0.0);
    assert!(info.used_memory <= info.total_memory);
}

#[tokio::test]
async fn test_os_identifier_is_stable() {
    let backend = backend();
    let first = backend.get_sys_info().await.expect("first");
    let second = backend.get_sys_info().await.expect("second");
    assert_eq!(first.os, second.os);
}

#[tokio::test]
async fn test_speeds_recorded_as_last_measurements() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().to_str().expect("utf-8 path");
    let backend = backend();

    let read = backend.get_4k_read_speed(path).await.expect("read speed");
    let write = backend.get_4k_write_speed(path).await.expect("write speed");

    let last = backend.last_measurements();
    assert_eq!(last.read_speed, Some(read));
    assert_eq!(last.write_speed, Some(write));
}

#[tokio::test]
async fn test_delays_are_milliseconds() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("probe.txt"), b"x").expect("write");
    let path = dir.path().to_str().expect("utf-8 path");
    let backend = backend();

    let read_ms = backend.get_read_delay(path).await.expect("read delay");
    let write_ms = backend.get_write_delay(path).await.expect("write delay");

    let last = backend.last_measurements();
    let read_micros = last.read_delay_micros.expect("read delay recorded");
    let write_micros = last.write_delay_micros.expect("write delay recorded");
    assert!((read_ms - read_micros as f64 / 1000.0).abs() < 1e-9);
    assert!((write_ms - write_micros as f64 / 1000.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_failure_is_attributed_to_command() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("missing");

    let err = backend()
        .get_4k_write_speed(missing.to_str().expect("utf-8 path"))
        .await
        .expect_err("missing directory");
    assert_eq!(err.command.as_deref(), Some("get_4k_write_speed"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_read_and_write_speed() {
    let read_dir = TempDir::new().expect("temp dir");
    let write_dir = TempDir::new().expect("temp dir");
    let backend = backend();

    let (read, write) = tokio::join!(
        backend.get_4k_read_speed(read_dir.path().to_str().expect("utf-8")),
        backend.get_4k_write_speed(write_dir.path().to_str().expect("utf-8")),
    );

    assert!(read.expect("read speed") > 0);
    assert!(write.expect("write speed") > 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_read_and_write_on_same_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().to_str().expect("utf-8 path");
    let backend = backend();

    for round in 0..10 {
        let (read, write, delay) = tokio::join!(
            backend.get_4k_read_speed(path),
            backend.get_4k_write_speed(path),
            backend.get_write_delay(path),
        );
        assert!(read.expect("read speed") > 0, "round {round}");
        assert!(write.expect("write speed") > 0, "round {round}");
        assert!(delay.expect("write delay") >= 0.0, "round {round}");
    }

    let leftovers = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(leftovers, 0);
}
