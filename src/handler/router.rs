//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: maps (method, path) to a fixed
//! route table and dispatches to the matching handler.

use crate::api::{handlers, response};
use crate::config::AppState;
use crate::handler::static_files;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// The fixed set of routes this server answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// GET / - the GUI page
    Index,
    /// GET /api/boot-image-select
    Keyword,
    /// GET /api/status
    Status,
    /// POST /api/set-vhd
    SetKeyword,
    /// OPTIONS on any path - CORS preflight
    Preflight,
    NotFound,
}

/// Resolve a request to its route
pub fn resolve(method: &Method, path: &str) -> Route {
    match (method, path) {
        (&Method::GET, "/") => Route::Index,
        (&Method::GET, "/api/boot-image-select") => Route::Keyword,
        (&Method::GET, "/api/status") => Route::Status,
        (&Method::POST, "/api/set-vhd") => Route::SetKeyword,
        (&Method::OPTIONS, _) => Route::Preflight,
        _ => Route::NotFound,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();

    if state.settings.logging.access_log {
        logger::log_request(req.method(), &path);
    }

    let response = match resolve(req.method(), &path) {
        Route::Index => static_files::serve_index(&state.settings.server.public_dir).await,
        Route::Keyword => handlers::current_keyword(&state),
        Route::Status => handlers::status(&state),
        Route::SetKeyword => handlers::set_keyword(req, &state).await,
        Route::Preflight => response::options_response(),
        Route::NotFound => response::not_found(),
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_routes_resolve() {
        assert_eq!(resolve(&Method::GET, "/"), Route::Index);
        assert_eq!(resolve(&Method::GET, "/api/boot-image-select"), Route::Keyword);
        assert_eq!(resolve(&Method::GET, "/api/status"), Route::Status);
        assert_eq!(resolve(&Method::POST, "/api/set-vhd"), Route::SetKeyword);
    }

    #[test]
    fn options_matches_any_path() {
        assert_eq!(resolve(&Method::OPTIONS, "/"), Route::Preflight);
        assert_eq!(resolve(&Method::OPTIONS, "/api/set-vhd"), Route::Preflight);
        assert_eq!(resolve(&Method::OPTIONS, "/anything"), Route::Preflight);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(resolve(&Method::GET, "/does-not-exist"), Route::NotFound);
        assert_eq!(resolve(&Method::POST, "/api/unknown"), Route::NotFound);
        // A known path with the wrong method is not found either
        assert_eq!(resolve(&Method::POST, "/api/status"), Route::NotFound);
        assert_eq!(resolve(&Method::GET, "/api/set-vhd"), Route::NotFound);
        assert_eq!(resolve(&Method::DELETE, "/"), Route::NotFound);
    }
}
