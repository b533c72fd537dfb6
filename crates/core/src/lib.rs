//! Domain types and pure logic for the todo application.
//!
//! No database, no async, no I/O. Everything in this crate is
//! unit-testable in isolation; the `db` and `web` crates build on it.

pub mod error;
pub mod todo;
pub mod transfer;
pub mod types;
