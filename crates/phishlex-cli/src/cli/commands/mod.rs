//! CLI command handlers, one per file.

mod extract;
mod health;
mod predict;
mod schema;

pub use extract::run_extract;
pub use health::run_health;
pub use predict::run_predict;
pub use schema::run_schema;
