//! HTTP handlers.

pub mod health;
pub mod todos;
pub mod transfer;
