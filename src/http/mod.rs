//! HTTP protocol layer module
//!
//! Content-type inference and response builders, decoupled from path
//! resolution and routing.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_405_response, build_redirect_response};
