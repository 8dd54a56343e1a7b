// Keyword API handlers module

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};

use super::response::{bad_request, json_response, server_error};
use super::types::{KeywordResponse, SetVhdRequest, StatusResponse, UpdateResponse};
use crate::config::AppState;
use crate::logger;
use crate::store::KeywordStore;

/// GET /api/boot-image-select
pub fn current_keyword(state: &AppState) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &KeywordResponse {
            success: true,
            boot_image_selected: state.store.load(),
            timestamp: logger::iso_timestamp(),
        },
    )
}

/// GET /api/status
pub fn status(state: &AppState) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &StatusResponse {
            success: true,
            status: "running",
            boot_image_selected: state.store.load(),
            uptime: state.uptime_secs(),
            timestamp: logger::iso_timestamp(),
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

/// POST /api/set-vhd
pub async fn set_keyword(
    req: Request<hyper::body::Incoming>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => return bad_request(&format!("Failed to read request body: {e}")),
    };

    apply_update(&body, &state.store)
}

/// Parse, validate and persist an update request body
fn apply_update(body: &[u8], store: &KeywordStore) -> Response<Full<Bytes>> {
    let request: SetVhdRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => return bad_request(&format!("Invalid JSON body: {e}")),
    };

    let Some(keyword) = normalize_keyword(&request.boot_image_selected) else {
        return bad_request("VHD keyword must not be empty");
    };

    match store.save(&keyword) {
        Ok(()) => {
            logger::log_keyword_updated(&keyword);
            json_response(
                StatusCode::OK,
                &UpdateResponse {
                    success: true,
                    boot_image_selected: keyword,
                    message: "VHD keyword updated".to_string(),
                },
            )
        }
        Err(e) => server_error(&e),
    }
}

/// Trim and uppercase a raw keyword; `None` when empty after trimming
fn normalize_keyword(raw: &str) -> Option<String> {
    let keyword = raw.trim().to_uppercase();
    if keyword.is_empty() {
        None
    } else {
        Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> KeywordStore {
        KeywordStore::new(dir.path().join("vhd-config.json"))
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_keyword("  abc "), Some("ABC".to_string()));
        assert_eq!(normalize_keyword("sdhd"), Some("SDHD".to_string()));
        // Interior characters are preserved as-is
        assert_eq!(normalize_keyword("a b"), Some("A B".to_string()));
    }

    #[test]
    fn normalize_rejects_blank_input() {
        assert_eq!(normalize_keyword(""), None);
        assert_eq!(normalize_keyword("   "), None);
        assert_eq!(normalize_keyword("\t\n"), None);
    }

    #[tokio::test]
    async fn valid_update_persists_normalized_keyword() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let response = apply_update(br#"{"BootImageSelected": " abc "}"#, &store);
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["BootImageSelected"], "ABC");
        assert_eq!(store.load(), "ABC");
    }

    #[tokio::test]
    async fn repeated_update_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let first = body_json(apply_update(br#"{"BootImageSelected": "abc"}"#, &store)).await;
        let second = body_json(apply_update(br#"{"BootImageSelected": "abc"}"#, &store)).await;
        assert_eq!(first, second);
        assert_eq!(store.load(), "ABC");
    }

    #[tokio::test]
    async fn blank_keyword_is_rejected_and_store_untouched() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("KEEP").unwrap();

        let response = apply_update(br#"{"BootImageSelected": "   "}"#, &store);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert_eq!(store.load(), "KEEP");
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let response = apply_update(br#"{}"#, &store);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let response = apply_update(b"this is not json", &store);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert!(value["error"].as_str().unwrap().contains("Invalid JSON"));
    }
}
