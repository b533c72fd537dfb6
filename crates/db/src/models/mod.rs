//! Row models and DTOs.

pub mod todo;
