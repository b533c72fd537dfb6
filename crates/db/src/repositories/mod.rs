//! Repository layer.
//!
//! Repositories are zero-sized structs providing async CRUD methods that
//! accept `&SqlitePool` as the first argument.

pub mod todo_repo;

pub use todo_repo::TodoRepo;
