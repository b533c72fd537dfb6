/// Row identifier used for the `todos` table.
pub type DbId = i64;
