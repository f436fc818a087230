//! Shared utilities for the classdex API.
//!
//! - [`errors`]: Application error type and HTTP mapping
//! - [`filter`]: Composable listing predicates with LIKE escaping
//! - [`invite`]: Class invite-code generation
//! - [`pagination`]: Pagination parameter normalization and envelope metadata
//! - [`query`]: Count/list query plan shared by both execution modes
//! - [`topology`]: Role-conditional join topology selection

pub mod errors;
pub mod filter;
pub mod invite;
pub mod pagination;
pub mod query;
pub mod topology;
