//! Directory listing module
//!
//! Renders the fallback HTML index for directories that have no index
//! file, in the style browsers expect from a plain directory server.

use std::fmt::Write;
use std::path::Path;
use tokio::fs;

/// Render a sorted listing for `dir`, shown under the request path
/// `display_path` (always slash-terminated by the caller).
///
/// Returns `None` when the directory cannot be read.
pub async fn render(dir: &Path, display_path: &str) -> Option<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await.ok()?;
    while let Ok(Some(entry)) = read_dir.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = html_escape(display_path);
    let mut html = String::with_capacity(512 + entries.len() * 64);
    html.push_str("<!DOCTYPE HTML>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>Directory listing for {title}</title>");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>Directory listing for {title}</h1>\n<hr>\n<ul>");
    for name in &entries {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            percent_encode(name),
            html_escape(name)
        );
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    Some(html)
}

/// Escape text for inclusion in HTML element content or attributes.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Encode a file name for use inside an href. Unreserved characters and
/// the slash suffix on directories pass through untouched.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
