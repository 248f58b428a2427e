//! Logger module
//!
//! Startup banner, shutdown line, and error-only logging.
//!
//! There is deliberately no per-request access log: the games poll assets
//! constantly and a line per request would drown the console. Only genuine
//! server-side faults reach stderr.

use chrono::Local;

const RULE: &str = "==================================================";

/// Print the startup banner with local and LAN access URLs.
pub fn log_server_start(port: u16, local_ip: &str) {
    println!();
    println!("{RULE}");
    println!("   RETRO GAMES SERVER");
    println!("{RULE}");
    println!();
    println!("   Local:   http://localhost:{port}");
    println!("   Network: http://{local_ip}:{port}");
    println!();
    println!("   Games available:");
    println!("   - Space Taxi");
    println!("   - Space Taxi VS");
    println!("   - The Bunker");
    println!();
    println!("   Press Ctrl+C to stop the server");
    println!("{RULE}");
    println!();
}

/// Print the shutdown acknowledgment.
pub fn log_server_stopped() {
    println!("\n   Server stopped.");
}

fn write_error(message: &str) {
    eprintln!("{} {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_width() {
        // The banner frame is fifty columns wide.
        assert_eq!(RULE.len(), 50);
        assert!(RULE.chars().all(|c| c == '='));
    }
}
