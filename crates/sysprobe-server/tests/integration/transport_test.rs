//! Transport tests: in-process and message-channel invokers

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use sysprobe_domain::{Backend, BackendError, Command, CommandInvoker, CommandRequest, PathArgs};
use sysprobe_server::{BackendBridge, BackendWorker, LocalInvoker};
use tokio::sync::Notify;

use crate::test_utils::mock_backend::MockBackend;

fn path_request(command: Command, path: &str) -> CommandRequest {
    CommandRequest::with_args(command, &PathArgs::new(path)).expect("request")
}

#[tokio::test]
async fn test_local_invoker_routes_to_backend() {
    let backend = Arc::new(MockBackend::new());
    let invoker = LocalInvoker::new(Arc::clone(&backend) as Arc<dyn Backend>);

    let value = invoker
        .invoke(path_request(Command::Get4kReadSpeed, "/data"))
        .await
        .expect("read speed");

    assert_eq!(value, json!(4096));
    assert_eq!(backend.recorded_paths(), vec!["/data"]);
}

#[tokio::test]
async fn test_channel_invoker_round_trip() {
    let backend = Arc::new(MockBackend::new());
    let (invoker, _worker) = BackendWorker::spawn(backend, 4);

    let value = invoker
        .invoke(CommandRequest::new(Command::GetSysInfo))
        .await
        .expect("sys info");
    assert_eq!(value["os"], "TestOS 1.0");
    assert!(!invoker.is_closed());
}

#[tokio::test]
async fn test_channel_invoker_propagates_backend_failure() {
    let backend = Arc::new(MockBackend::failing(BackendError::new("No such file")));
    let (invoker, _worker) = BackendWorker::spawn(backend, 4);

    let err = invoker
        .invoke(path_request(Command::GetWriteDelay, "/missing"))
        .await
        .expect_err("failure");
    assert_eq!(
        err,
        BackendError::for_command("get_write_delay", "No such file")
    );
}

#[tokio::test]
async fn test_stopped_worker_reports_dispatch_error() {
    let backend = Arc::new(MockBackend::new());
    let (invoker, worker) = BackendWorker::spawn(backend, 1);
    worker.abort();
    let _ = worker.await;

    let err = invoker
        .invoke(CommandRequest::new(Command::GetSysInfo))
        .await
        .expect_err("worker gone");

    assert!(invoker.is_closed());
    assert_eq!(err.command.as_deref(), Some("get_sys_info"));
    assert!(err.message.contains("dispatch failed"));
}

#[tokio::test]
async fn test_worker_stops_when_invokers_dropped() {
    let backend = Arc::new(MockBackend::new());
    let (invoker, worker) = BackendWorker::spawn(backend, 1);
    drop(invoker);

    tokio::time::timeout(Duration::from_secs(5), worker)
        .await
        .expect("worker should stop")
        .expect("worker should not panic");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_read_and_write_run_concurrently_through_channel() {
    // The read blocks until the write has started, so serialized dispatch
    // would hang here.
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(MockBackend::gated(Arc::clone(&gate)));
    let (invoker, _worker) = BackendWorker::spawn(backend, 4);
    let bridge = BackendBridge::new(Arc::new(invoker));

    let outcome = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(
            bridge.get_read_speed("/data"),
            bridge.get_write_speed("/data")
        )
    })
    .await
    .expect("concurrent calls must not serialize");

    assert_eq!(outcome.0.expect("read"), 4096);
    assert_eq!(outcome.1.expect("write"), 2048);
}

#[tokio::test]
async fn test_concurrent_calls_through_local_invoker() {
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(MockBackend::gated(Arc::clone(&gate)));
    let bridge = BackendBridge::new(Arc::new(LocalInvoker::new(backend)));

    let (read, write) = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(
            bridge.get_read_speed("/data"),
            bridge.get_write_speed("/data")
        )
    })
    .await
    .expect("concurrent calls must not serialize");

    assert_eq!(read.expect("read"), 4096);
    assert_eq!(write.expect("write"), 2048);
}
