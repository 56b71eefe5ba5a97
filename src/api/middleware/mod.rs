//! API middleware components

pub mod logging;
pub mod security;

pub use logging::{REQUEST_ID_HEADER, logging_middleware};
pub use security::security_headers_middleware;
