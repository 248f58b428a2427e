//! Network helper module
//!
//! Currently only hosts the LAN address probe used by the startup banner.

mod local_ip;

pub use local_ip::local_ip;
