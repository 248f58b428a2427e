//! Static file serving module
//!
//! Resolves request paths against the serving root the way a classic
//! directory server does: percent decoding, traversal guard, index file
//! resolution, directory listings.

use crate::config::ServingConfig;
use crate::handler::listing;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve the decoded request path from the configured root.
pub async fn serve(serving: &ServingConfig, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let decoded = percent_decode(path);

    let Some(resolved) = resolve_path(&serving.root, &decoded) else {
        return http::build_404_response();
    };

    if resolved.is_dir() {
        if !decoded.ends_with('/') {
            // Browsers need the trailing slash for relative links inside
            // the directory page to resolve.
            return http::build_redirect_response(&format!("{decoded}/"));
        }
        for index_file in &serving.index_files {
            let candidate = resolved.join(index_file);
            if candidate.is_file() {
                return serve_file(&candidate, is_head).await;
            }
        }
        return match listing::render(&resolved, &decoded).await {
            Some(html) => http::response::build_html_response(html, is_head),
            None => http::build_404_response(),
        };
    }

    serve_file(&resolved, is_head).await
}

async fn serve_file(file_path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return http::build_404_response();
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    http::response::build_file_response(content, content_type, is_head)
}

/// Resolve a decoded request path to a filesystem path inside `root`.
///
/// Canonicalization doubles as the existence check and resolves symlinks,
/// so `..` segments and links pointing outside the root are both caught.
/// Returns `None` for anything missing or escaping.
fn resolve_path(root: &str, decoded: &str) -> Option<PathBuf> {
    let root_canonical = Path::new(root).canonicalize().ok()?;
    let candidate = root_canonical.join(decoded.trim_start_matches('/'));

    let candidate_canonical = candidate.canonicalize().ok()?;
    if !candidate_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!("Path traversal attempt blocked: {decoded}"));
        return None;
    }
    Some(candidate_canonical)
}

/// Decode %XX escapes in a request path. Invalid escapes pass through.
fn percent_decode(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push(u8::try_from(hi * 16 + lo).unwrap_or(b'%'));
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rgs-static-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("/space%20taxi/"), "/space taxi/");
        assert_eq!(percent_decode("/plain.js"), "/plain.js");
        assert_eq!(percent_decode("/100%25"), "/100%");
        // Truncated or invalid escapes pass through untouched
        assert_eq!(percent_decode("/bad%2"), "/bad%2");
        assert_eq!(percent_decode("/bad%zz"), "/bad%zz");
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let root = temp_root("traversal");
        std::fs::create_dir_all(root.join("inner")).unwrap();

        assert!(resolve_path(root.to_str().unwrap(), "/../../etc/passwd").is_none());
        assert!(resolve_path(&format!("{}/inner", root.display()), "/../").is_none());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_resolve_finds_existing_file() {
        let root = temp_root("resolve");
        std::fs::write(root.join("game.js"), b"export {};").unwrap();

        let resolved = resolve_path(root.to_str().unwrap(), "/game.js").unwrap();
        assert!(resolved.ends_with("game.js"));
        assert!(resolve_path(root.to_str().unwrap(), "/missing.js").is_none());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_serve_file_bytes() {
        let root = temp_root("bytes");
        std::fs::write(root.join("data.json"), b"{\"lives\":3}").unwrap();

        let serving = ServingConfig {
            root: root.to_str().unwrap().to_string(),
            index_files: vec!["index.html".to_string()],
        };
        let resp = serve(&serving, "/data.json", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_directory_redirect_and_index() {
        let root = temp_root("dirs");
        std::fs::create_dir_all(root.join("games")).unwrap();
        std::fs::write(root.join("games/index.html"), b"<html></html>").unwrap();

        let serving = ServingConfig {
            root: root.to_str().unwrap().to_string(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
        };

        let redirect = serve(&serving, "/games", false).await;
        assert_eq!(redirect.status(), 301);
        assert_eq!(redirect.headers().get("Location").unwrap(), "/games/");

        let index = serve(&serving, "/games/", false).await;
        assert_eq!(index.status(), 200);
        assert_eq!(
            index.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_listing_when_no_index() {
        let root = temp_root("listing");
        std::fs::create_dir_all(root.join("assets")).unwrap();
        std::fs::write(root.join("assets/sprite.png"), b"png").unwrap();

        let serving = ServingConfig {
            root: root.to_str().unwrap().to_string(),
            index_files: vec!["index.html".to_string()],
        };
        let resp = serve(&serving, "/assets/", false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );

        std::fs::remove_dir_all(&root).unwrap();
    }
}
