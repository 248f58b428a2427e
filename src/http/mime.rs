//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension. The
//! table covers the asset types the games collection ships; anything else
//! falls back to `application/octet-stream`.

/// Get MIME Content-Type based on file extension
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        // Markup and styles
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",

        // Scripts and data (The Bunker ships ES6 modules as plain .js)
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Some("css")), "text/css");
        assert_eq!(content_type_for(Some("js")), "application/javascript");
        assert_eq!(content_type_for(Some("mjs")), "application/javascript");
        assert_eq!(content_type_for(Some("json")), "application/json");
        assert_eq!(content_type_for(Some("png")), "image/png");
        assert_eq!(content_type_for(Some("wav")), "audio/wav");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type_for(None), "application/octet-stream");
    }
}
