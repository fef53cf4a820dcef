//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post repository via SeaORM
//!
//! Without `postgres` (`--no-default-features`) only the in-memory
//! repository is available.

pub mod database;
pub mod memory;
pub mod telemetry;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
