//! Static file serving module
//!
//! Serves the GUI page from disk so it can be edited without a rebuild.

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Serve the GUI page from the configured public directory
pub async fn serve_index(public_dir: &str) -> Response<Full<Bytes>> {
    let path = Path::new(public_dir).join(INDEX_FILE);

    match fs::read_to_string(&path).await {
        Ok(content) => build_html_response(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            logger::log_warning(&format!("GUI page not found: {}", path.display()));
            build_404_response()
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read {}: {e}", path.display()));
            build_500_response()
        }
    }
}

/// Build generic HTML response
fn build_html_response(content: String) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build HTML response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build 404 response: {e}"));
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 500 Internal Server Error response
fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build 500 response: {e}"));
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}
