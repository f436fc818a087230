//! Configuration loaded from environment variables.
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`database`]: PostgreSQL connection pool initialization

pub mod cors;
pub mod database;
