//! LAN-facing IP discovery
//!
//! Uses the UDP connect trick: connecting a datagram socket sends nothing
//! on the wire, it only makes the OS pick a source address and route. The
//! address read back is the one other devices on the LAN would dial.

use std::net::UdpSocket;

/// External address used to force route selection. Never actually contacted.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Shown when no route to the probe address exists.
const FALLBACK: &str = "localhost";

/// Best-effort string form of this host's LAN-facing IPv4 address.
///
/// Display-only, never used for binding. Never fails: any probe error
/// yields `"localhost"`.
pub fn local_ip() -> String {
    probe().unwrap_or_else(|| FALLBACK.to_string())
}

fn probe() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(PROBE_ADDR).ok()?;
    let addr = socket.local_addr().ok()?;
    Some(addr.ip().to_string())
}
