//! Server module
//!
//! Listener construction and the accept/serve loop.

pub mod signal;

use crate::config::Config;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Create the listening socket.
///
/// `SO_REUSEADDR` lets a freshly restarted server rebind while the old
/// socket is still in TIME_WAIT. Bind errors propagate to `main`.
pub fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Accept connections until the shutdown notification fires.
///
/// Requests are stateless file reads, so nothing needs draining: tasks
/// still in flight when this returns are simply dropped with the runtime.
pub async fn run(listener: TcpListener, config: Arc<Config>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }
}

/// Serve one connection on its own task.
fn handle_connection(stream: tokio::net::TcpStream, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
