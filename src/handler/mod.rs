//! Request handling module
//!
//! Hyper service entry point plus the cross-cutting header injection every
//! response passes through. Composition instead of subclassing: the static
//! file logic stays header-agnostic and the wrapper here appends the
//! development headers on the way out.

mod listing;
mod static_files;

use crate::config::{Config, HttpConfig};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Generic over the request body since it is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    let response = if matches!(*method, Method::GET | Method::HEAD) {
        static_files::serve(&config.serving, path, is_head).await
    } else {
        http::build_405_response()
    };

    Ok(inject_dev_headers(response, &config.http))
}

/// Append the development headers to an outgoing response.
///
/// Applied to every response regardless of status: The Bunker loads ES6
/// modules that fail same-origin checks without the CORS header, and any
/// cached asset goes stale the moment a game file is edited.
fn inject_dev_headers(
    mut response: Response<Full<Bytes>>,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();

    match HeaderValue::from_str(&http_config.cors_origin) {
        Ok(value) => {
            headers.insert("Access-Control-Allow-Origin", value);
        }
        Err(e) => logger::log_warning(&format!("Invalid CORS origin in config: {e}")),
    }

    match HeaderValue::from_str(&http_config.cache_control) {
        Ok(value) => {
            headers.insert("Cache-Control", value);
        }
        Err(e) => logger::log_warning(&format!("Invalid cache control in config: {e}")),
    }

    response
}
