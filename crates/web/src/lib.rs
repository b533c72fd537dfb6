//! Todo web server library.
//!
//! Exposes the building blocks (config, state, error handling, rendering,
//! router) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
