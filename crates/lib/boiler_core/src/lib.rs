//! # boiler_core
//!
//! Client-side session and authorization core for the Boiler Admin dashboard.
//!
//! Decodes bearer tokens issued by the auth service, keeps the current
//! session in sync with persisted token storage, and decides what a
//! navigation to a given route should do.

pub mod auth;
pub mod config;
pub mod guard;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod session;
pub mod storage;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
