#![allow(dead_code)]

use std::fs;
use std::path::Path;

use canvas_dl::api::{CanvasApi, Credentials, FileEntry};
use canvas_dl::download::DownloadTask;
use canvas_dl::downloader::DownloaderBuilder;
use canvas_dl::http::{bearer_headers, create_http_client, HttpClientConfig};
use canvas_dl::ArchiverBuilder;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_TOKEN: &str = "test-token";
pub const API_PREFIX: &str = "/api/v1";
pub const TEST_UPDATED_AT: &str = "2024-01-15T10:30:00Z";
pub const TEST_CREATED_AT: &str = "2023-09-01T08:00:00Z";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Parse an RFC 3339 timestamp
pub fn timestamp(value: &str) -> DateTime<Utc> {
    value.parse().expect("Invalid test timestamp")
}

// === Canvas API Helpers ===

/// API base URL served by the mock server
pub fn api_base(server: &MockServer) -> String {
    format!("{}{}/", server.uri(), API_PREFIX)
}

/// Credentials pointing at the mock server
pub fn test_credentials(server: &MockServer) -> Credentials {
    Credentials::new(&api_base(server), TEST_TOKEN).expect("Failed to create credentials")
}

/// API accessor authenticated with the test token
pub fn test_api(server: &MockServer) -> CanvasApi {
    let client = create_http_client(HttpClientConfig {
        proxy: None,
        headers: Some(bearer_headers(TEST_TOKEN).expect("Invalid token")),
    })
    .expect("Failed to create client");
    CanvasApi::new(client, test_credentials(server).base_url().clone())
}

/// Archiver against the mock server, without progress bars
pub fn test_archiver_builder(server: &MockServer, directory: &Path) -> ArchiverBuilder {
    ArchiverBuilder::new(test_credentials(server))
        .directory(directory.to_path_buf())
        .style_options(canvas_dl::StyleOptions::hidden())
}

/// Full request path of an API endpoint
pub fn api_path(endpoint: &str) -> String {
    format!("{}/{}", API_PREFIX, endpoint)
}

/// Serve `body` as JSON for GET requests to an API endpoint
pub async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(api_path(endpoint)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer GET requests to an API endpoint with a bare status
pub async fn mount_status(server: &MockServer, endpoint: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(api_path(endpoint)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve two pages of an API endpoint linked through a `Link` header
pub async fn mount_two_pages(server: &MockServer, endpoint: &str, first: Value, second: Value) {
    let next = format!("{}{}?page=2&per_page=100", server.uri(), api_path(endpoint));
    let first_link = format!("{}{}?page=1&per_page=100", server.uri(), api_path(endpoint));

    Mock::given(method("GET"))
        .and(path(api_path(endpoint)))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(second))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path(endpoint)))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!(r#"<{}>; rel="next", <{}>; rel="first""#, next, first_link),
                )
                .set_body_json(first),
        )
        .mount(server)
        .await;
}

/// Serve a file body at `/files/{name}` and return its URL
pub async fn mount_file(server: &MockServer, name: &str, content: Vec<u8>) -> String {
    let file_path = format!("/files/{}", name);
    Mock::given(method("GET"))
        .and(path(file_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
    format!("{}{}", server.uri(), file_path)
}

// === JSON Fixtures ===

pub fn course_json(id: u64, name: &str) -> Value {
    json!({ "id": id, "name": name, "course_code": name, "workflow_state": "available" })
}

pub fn folder_json(id: u64, full_name: &str, parent_folder_id: Option<u64>) -> Value {
    let name = full_name.rsplit('/').next().unwrap_or(full_name);
    json!({
        "id": id,
        "name": name,
        "full_name": full_name,
        "parent_folder_id": parent_folder_id,
        "files_count": 0,
    })
}

pub fn file_json(id: u64, display_name: &str, url: &str, folder_id: u64) -> Value {
    json!({
        "id": id,
        "display_name": display_name,
        "filename": display_name,
        "url": url,
        "size": 0,
        "created_at": TEST_CREATED_AT,
        "updated_at": TEST_UPDATED_AT,
        "folder_id": folder_id,
    })
}

// === Download Helpers ===

/// Creates a file entry at the course root
pub fn file_entry(id: u64, display_name: &str, url: &str) -> FileEntry {
    FileEntry {
        id,
        display_name: display_name.to_string(),
        url: url.to_string(),
        created_at: Some(timestamp(TEST_CREATED_AT)),
        updated_at: Some(timestamp(TEST_UPDATED_AT)),
        folder_id: None,
        folder_path: String::new(),
    }
}

/// Creates a download task writing below `dir`
pub fn task_in(dir: &Path, id: u64, display_name: &str, url: &str) -> DownloadTask {
    DownloadTask::plan(file_entry(id, display_name, url), dir, false)
}

/// Downloader builder without progress bars
pub fn hidden_downloader_builder() -> DownloaderBuilder {
    DownloaderBuilder::hidden()
}

/// Serve one response announcing `announced` bytes but closing after `sent`.
///
/// Returns the URL of the served file.
pub async fn spawn_truncated_server(announced: usize, sent: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buffer).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buffer[..n]),
                }
            }

            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/pdf\r\nContent-Length: {}\r\n\r\n",
                announced
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&sent).await;
            let _ = socket.flush().await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/files/truncated.pdf", address)
}

// === Assertion Helpers ===

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that nothing exists at the given path
pub fn assert_file_missing(path: &Path) {
    assert!(!path.exists(), "File should not exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

/// Every regular file below `root`, relative to it, sorted
pub fn list_files(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, found: &mut Vec<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, found);
            } else if let Ok(relative) = path.strip_prefix(root) {
                found.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut found = Vec::new();
    walk(root, root, &mut found);
    found.sort();
    found
}
