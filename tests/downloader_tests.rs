//! Tests for the downloader module functionality.
//!
//! This file contains all tests for the downloader module, including tests for:
//! - DownloaderBuilder pattern and getters
//! - Streaming transfers, timestamps and failure isolation
//! - The concurrency bound

use canvas_dl::download::Status;
use canvas_dl::downloader::{DownloaderBuilder, DEFAULT_CHUNK_SIZE};
use reqwest::StatusCode;
use std::fs::{self, File};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

#[test]
fn test_downloader_creation() {
    let downloader = DownloaderBuilder::new().build().unwrap();

    assert_eq!(downloader.concurrent_downloads(), 5);
    assert_eq!(downloader.chunk_size(), DEFAULT_CHUNK_SIZE);
    assert!(downloader.style_options().is_enabled());
}

#[test]
fn test_downloader_getters() {
    let downloader = hidden_downloader_builder()
        .concurrent_downloads(3)
        .chunk_size(1024)
        .build()
        .unwrap();

    assert_eq!(downloader.concurrent_downloads(), 3);
    assert_eq!(downloader.chunk_size(), 1024);
    assert!(!downloader.style_options().is_enabled());
    assert_eq!(downloader.gate().stats().acquired, 0);
}

#[test]
fn test_downloader_zero_concurrency_is_raised() {
    let downloader = hidden_downloader_builder()
        .concurrent_downloads(0)
        .build()
        .unwrap();
    assert_eq!(downloader.concurrent_downloads(), 1);
}

#[test]
fn test_downloader_debug() {
    let downloader = DownloaderBuilder::new().build().unwrap();
    let debug_str = format!("{:?}", downloader);

    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("config"));
}

#[tokio::test]
async fn test_download_writes_file_and_restores_mtime() {
    let server = MockServer::start().await;
    let content = create_test_content(3 * DEFAULT_CHUNK_SIZE + 17);
    let url = mount_file(&server, "L1.pdf", content.clone()).await;
    let temp_dir = create_temp_dir();
    let task = task_in(temp_dir.path(), 1, "L1.pdf", &url);

    let downloader = hidden_downloader_builder().build().unwrap();
    let summaries = downloader.download(&[task.clone()]).await;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].status(), &Status::Success);
    assert_eq!(summaries[0].size(), content.len() as u64);
    assert_eq!(fs::read(&task.destination).unwrap(), content);

    let modified = fs::metadata(&task.destination).unwrap().modified().unwrap();
    assert_eq!(modified, SystemTime::from(timestamp(TEST_UPDATED_AT)));
}

#[tokio::test]
async fn test_download_creates_folder_hierarchy() {
    let server = MockServer::start().await;
    let url = mount_file(&server, "w1.pdf", create_test_content(64)).await;
    let temp_dir = create_temp_dir();

    let mut file = file_entry(1, "w1.pdf", &url);
    file.folder_path = "Lectures/Week 1".to_string();
    let task = canvas_dl::DownloadTask::plan(file, temp_dir.path(), false);

    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&[task])
        .await;

    assert!(summaries[0].is_success());
    assert_file_size(&temp_dir.path().join("Lectures/Week 1/w1.pdf"), 64);
}

#[tokio::test]
async fn test_remote_error_creates_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/files/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let temp_dir = create_temp_dir();
    let url = format!("{}/files/missing.pdf", server.uri());
    let task = task_in(temp_dir.path(), 1, "missing.pdf", &url);

    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&[task.clone()])
        .await;

    assert_eq!(summaries[0].status(), &Status::RemoteError(StatusCode::NOT_FOUND));
    assert_file_missing(&task.destination);
}

#[tokio::test]
async fn test_truncated_body_leaves_partial_file() {
    let announced = 4096;
    let sent = create_test_content(1000);
    let url = spawn_truncated_server(announced, sent).await;
    let temp_dir = create_temp_dir();
    let task = task_in(temp_dir.path(), 1, "truncated.pdf", &url);

    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&[task.clone()])
        .await;

    assert!(matches!(summaries[0].status(), Status::LocalError(_)));
    assert_file_exists(&task.destination);
    let written = fs::metadata(&task.destination).unwrap().len();
    assert!(written < announced as u64, "wrote {} bytes", written);
}

#[tokio::test]
async fn test_failures_are_isolated() {
    let server = MockServer::start().await;
    let good = mount_file(&server, "good.pdf", create_test_content(256)).await;
    Mock::given(method("GET"))
        .and(path_regex("^/files/bad"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let bad = format!("{}/files/bad.pdf", server.uri());
    let temp_dir = create_temp_dir();

    let tasks = vec![
        task_in(temp_dir.path(), 1, "bad.pdf", &bad),
        task_in(temp_dir.path(), 2, "good.pdf", &good),
        task_in(temp_dir.path(), 3, "unreachable.pdf", "http://127.0.0.1:1/none.pdf"),
    ];
    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&tasks)
        .await;

    assert_eq!(summaries.len(), 3);
    assert_eq!(
        summaries[0].status(),
        &Status::RemoteError(StatusCode::INTERNAL_SERVER_ERROR)
    );
    assert_eq!(summaries[1].status(), &Status::Success);
    assert!(matches!(summaries[2].status(), Status::LocalError(_)));
    assert_file_size(&tasks[1].destination, 256);
}

#[tokio::test]
async fn test_summaries_follow_task_order() {
    let server = MockServer::start().await;
    // The first file is the slowest one.
    Mock::given(method("GET"))
        .and(path_regex("^/files/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(create_test_content(32))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    let fast = mount_file(&server, "fast.pdf", create_test_content(32)).await;
    let slow = format!("{}/files/slow.pdf", server.uri());
    let temp_dir = create_temp_dir();

    let tasks = vec![
        task_in(temp_dir.path(), 1, "slow.pdf", &slow),
        task_in(temp_dir.path(), 2, "fast.pdf", &fast),
    ];
    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&tasks)
        .await;

    let labels: Vec<_> = summaries.iter().map(|s| s.task().label()).collect();
    assert_eq!(labels, vec!["slow.pdf", "fast.pdf"]);
}

#[tokio::test]
async fn test_concurrency_is_bounded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/files/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(create_test_content(512))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;
    let temp_dir = create_temp_dir();

    let tasks: Vec<_> = (0..12)
        .map(|i| {
            let url = format!("{}/files/{}.pdf", server.uri(), i);
            task_in(temp_dir.path(), i, &format!("{}.pdf", i), &url)
        })
        .collect();

    let downloader = hidden_downloader_builder().build().unwrap();
    let summaries = downloader.download(&tasks).await;

    assert!(summaries.iter().all(|s| s.is_success()));
    let stats = downloader.gate().stats();
    assert_eq!(stats.capacity, 5);
    assert!(stats.peak <= 5, "peak was {}", stats.peak);
    assert!(stats.peak >= 1);
    assert_eq!(stats.acquired, 12);
    assert_eq!(stats.acquired, stats.released);
    assert_eq!(stats.in_flight, 0);
}

#[tokio::test]
async fn test_lines_are_reserved_per_task_across_batches() {
    let server = MockServer::start().await;
    let url = mount_file(&server, "a.pdf", create_test_content(16)).await;
    let temp_dir = create_temp_dir();
    let downloader = hidden_downloader_builder().build().unwrap();

    downloader
        .download(&[
            task_in(temp_dir.path(), 1, "a.pdf", &url),
            task_in(temp_dir.path(), 2, "b.pdf", &url),
        ])
        .await;
    downloader
        .download(&[task_in(temp_dir.path(), 3, "c.pdf", &url)])
        .await;

    assert_eq!(downloader.lines().reserved(), 3);
}

#[tokio::test]
async fn test_on_complete_called_for_every_outcome() {
    let server = MockServer::start().await;
    let good = mount_file(&server, "good.pdf", create_test_content(8)).await;
    let temp_dir = create_temp_dir();
    let completed = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));

    let downloader = {
        let completed = completed.clone();
        let failed = failed.clone();
        hidden_downloader_builder()
            .on_complete(move |summary| {
                completed.fetch_add(1, Ordering::SeqCst);
                if !summary.is_success() {
                    failed.fetch_add(1, Ordering::SeqCst);
                }
            })
            .build()
            .unwrap()
    };

    let missing = format!("{}/files/missing.pdf", server.uri());
    downloader
        .download(&[
            task_in(temp_dir.path(), 1, "good.pdf", &good),
            task_in(temp_dir.path(), 2, "missing.pdf", &missing),
        ])
        .await;

    assert_eq!(completed.load(Ordering::SeqCst), 2);
    assert_eq!(failed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_existing_file_is_overwritten() {
    let server = MockServer::start().await;
    let url = mount_file(&server, "L1.pdf", create_test_content(10)).await;
    let temp_dir = create_temp_dir();
    let task = task_in(temp_dir.path(), 1, "L1.pdf", &url);
    fs::write(&task.destination, create_test_content(100)).unwrap();

    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&[task.clone()])
        .await;

    assert!(summaries[0].is_success());
    assert_file_size(&task.destination, 10);
}

#[tokio::test]
async fn test_locked_destination_is_left_alone() {
    let server = MockServer::start().await;
    let url = mount_file(&server, "L1.pdf", create_test_content(512)).await;
    let temp_dir = create_temp_dir();
    let task = task_in(temp_dir.path(), 1, "L1.pdf", &url);

    // Another writer holds the destination for the whole download.
    fs::write(&task.destination, b"held by someone else").unwrap();
    let holder = File::options().write(true).open(&task.destination).unwrap();
    holder.lock().unwrap();

    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&[task.clone()])
        .await;

    assert!(matches!(summaries[0].status(), Status::LocalError(_)));
    assert_eq!(fs::read(&task.destination).unwrap(), b"held by someone else");

    holder.unlock().unwrap();
    drop(holder);
}

#[tokio::test]
async fn test_lock_is_released_after_download() {
    let server = MockServer::start().await;
    let url = mount_file(&server, "L1.pdf", create_test_content(64)).await;
    let temp_dir = create_temp_dir();
    let task = task_in(temp_dir.path(), 1, "L1.pdf", &url);

    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&[task.clone()])
        .await;
    assert!(summaries[0].is_success());

    let file = File::options().write(true).open(&task.destination).unwrap();
    assert!(file.try_lock().is_ok());
}

#[tokio::test]
async fn test_escaping_file_name_is_refused() {
    let server = MockServer::start().await;
    let url = mount_file(&server, "escape.pdf", create_test_content(64)).await;
    let temp_dir = create_temp_dir();
    let course_dir = temp_dir.path().join("CS101");

    let tasks = vec![
        task_in(&course_dir, 1, "../escape.pdf", &url),
        task_in(&course_dir, 2, "kept.pdf", &url),
    ];
    let summaries = hidden_downloader_builder()
        .build()
        .unwrap()
        .download(&tasks)
        .await;

    assert!(matches!(summaries[0].status(), Status::LocalError(_)));
    assert!(summaries[1].is_success());
    assert_file_missing(&temp_dir.path().join("escape.pdf"));
    assert_eq!(list_files(temp_dir.path()), vec!["CS101/kept.pdf"]);
}
