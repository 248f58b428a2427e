// Configuration module entry point
// Loads defaults, the optional config file, and the CLI port override

mod types;

use std::net::SocketAddr;

pub use types::{Config, HttpConfig, ServerConfig, ServingConfig};

impl Config {
    /// Load configuration from defaults plus an optional `server.toml`.
    ///
    /// The command-line port, when given, wins over both. No environment
    /// variables are consulted.
    pub fn load(port_override: Option<u16>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("serving.root", ".")?
            .set_default("serving.index_files", vec!["index.html", "index.htm"])?
            .set_default("http.cors_origin", "*")?
            .set_default("http.cache_control", "no-store")?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        if let Some(port) = port_override {
            cfg.server.port = port;
        }
        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
