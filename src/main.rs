//! Retro games static file server
//!
//! Serves the games collection out of the working directory over plain
//! HTTP, with the two development headers every response needs and a
//! banner telling you where to point the browser.

use clap::Parser;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod net;
mod server;

/// Static file server for the retro games collection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on (default 8080)
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::Config::load(cli.port)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;

    let signal_handler = Arc::new(server::signal::SignalHandler::new());
    server::signal::start_signal_handler(Arc::clone(&signal_handler));

    logger::log_server_start(cfg.server.port, &net::local_ip());

    let shutdown = Arc::clone(&signal_handler.shutdown);
    server::run(listener, Arc::new(cfg), shutdown).await;

    logger::log_server_stopped();
    Ok(())
}
