// Configuration types module
// Defines the immutable startup configuration

use serde::Deserialize;

/// Main configuration structure
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub serving: ServingConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Static serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServingConfig {
    /// Directory the server exposes
    pub root: String,
    /// Files tried, in order, when a directory is requested
    pub index_files: Vec<String>,
}

/// HTTP configuration
///
/// Header values appended to every response; see `handler::inject_dev_headers`.
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub cors_origin: String,
    pub cache_control: String,
}
