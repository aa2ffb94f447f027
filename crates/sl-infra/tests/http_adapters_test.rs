//! Tests for the reqwest adapters against a local mock server.

use mockito::Matcher;
use sl_core::ports::{
    ActionTransportPort, DownloadError, DownloadPort, DownloadRequest, FileUploadPort,
    TransportError, UploadFile,
};
use sl_core::{ActionCode, ActionRecord, FileReference, ItemContent};
use sl_infra::{Endpoints, HttpActionTransport, HttpDownloader, HttpFileUploader};

fn record(action: ActionCode, content: &str) -> ActionRecord {
    ActionRecord::new(
        "item_1".into(),
        action,
        "|",
        &ItemContent::PlainText {
            text: content.into(),
        },
    )
}

#[tokio::test]
async fn action_is_posted_as_encoded_form_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/items/groceries")
        .match_header(
            "content-type",
            "application/x-www-form-urlencoded; charset=UTF-8",
        )
        .match_body("h%7Csalt%26%23124%3Bpepper")
        .with_status(204)
        .create_async()
        .await;

    let transport = HttpActionTransport::new(
        reqwest::Client::new(),
        Endpoints::new(&server.url(), "/", "groceries"),
    );

    transport
        .send(&record(ActionCode::Highlight, "salt|pepper"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_reported_with_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/items/groceries")
        .with_status(500)
        .create_async()
        .await;

    let transport = HttpActionTransport::new(
        reqwest::Client::new(),
        Endpoints::new(&server.url(), "/", "groceries"),
    );

    let err = transport
        .send(&record(ActionCode::Create, "milk"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransportError::Status {
            status: 500,
            reason: "Internal Server Error".into()
        }
    );
    assert_eq!(err.to_string(), "500 Internal Server Error");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on the discard port.
    let transport = HttpActionTransport::new(
        reqwest::Client::new(),
        Endpoints::new("http://127.0.0.1:9", "/", "groceries"),
    );

    let err = transport
        .send(&record(ActionCode::Create, "milk"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Network(_)));
}

#[tokio::test]
async fn upload_returns_server_file_metadata() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/base/upload-file/notes")
        .match_body(Matcher::Regex(r#"name="file"; filename="invoice.pdf""#.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"fileId":"abc123.pdf","originalName":"invoice.pdf","mimeType":"application/pdf"}"#)
        .create_async()
        .await;

    let uploader = HttpFileUploader::new(
        reqwest::Client::new(),
        Endpoints::new(&server.url(), "/base/", "notes"),
    );

    let uploaded = uploader
        .upload(UploadFile {
            file_name: "invoice.pdf".into(),
            bytes: b"%PDF-1.7".to_vec(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(uploaded.file_id, "abc123.pdf");
    assert_eq!(
        FileReference::from(uploaded).encode(),
        "file://abc123.pdf::invoice.pdf::application/pdf"
    );
}

#[tokio::test]
async fn upload_rejection_is_a_status_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload-file/notes")
        .with_status(403)
        .with_body(r#"{"error":"File upload disabled"}"#)
        .create_async()
        .await;

    let uploader = HttpFileUploader::new(
        reqwest::Client::new(),
        Endpoints::new(&server.url(), "/", "notes"),
    );

    let err = uploader
        .upload(UploadFile {
            file_name: "a.txt".into(),
            bytes: b"a".to_vec(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 403, .. }));
}

#[tokio::test]
async fn file_download_is_saved_under_original_name() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/download-file/notes/abc123.pdf")
        .match_query(Matcher::UrlEncoded("filename".into(), "invoice.pdf".into()))
        .with_status(200)
        .with_body("pdf-bytes")
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let downloader = HttpDownloader::new(
        reqwest::Client::new(),
        Endpoints::new(&server.url(), "/", "notes"),
        dir.path(),
    );

    let path = downloader
        .download(&DownloadRequest::File(FileReference::new(
            "abc123.pdf",
            "invoice.pdf",
            "application/pdf",
        )))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(path, dir.path().join("invoice.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), b"pdf-bytes");
}

#[tokio::test]
async fn missing_file_download_reports_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/download-file/notes/gone.pdf")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let downloader = HttpDownloader::new(
        reqwest::Client::new(),
        Endpoints::new(&server.url(), "/", "notes"),
        dir.path(),
    );

    let err = downloader
        .download(&DownloadRequest::File(FileReference::new(
            "gone.pdf",
            "gone.pdf",
            "application/pdf",
        )))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DownloadError::Transport(TransportError::Status {
            status: 404,
            reason: "Not Found".into(),
        })
    );
    assert!(!dir.path().join("gone.pdf").exists());
}

#[tokio::test]
async fn inline_data_is_decoded_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let downloader = HttpDownloader::new(
        reqwest::Client::new(),
        Endpoints::new("http://127.0.0.1:9", "/", "notes"),
        dir.path().join("nested"),
    );

    let path = downloader
        .download(&DownloadRequest::InlineData {
            data_url: "data:text/plain;base64,aGVsbG8=".into(),
            filename: "download".into(),
        })
        .await
        .unwrap();

    assert_eq!(std::fs::read(path).unwrap(), b"hello");
}
