//! # Classdex API
//!
//! A catalog query API built with Rust, Axum, and PostgreSQL over a small
//! academic schema: departments own subjects, subjects own classes, classes
//! are taught by teachers and attended by students through enrollments.
//!
//! ## Overview
//!
//! Every listing endpoint follows the same pattern:
//!
//! 1. Normalize pagination parameters ([`utils::pagination`])
//! 2. Build one composable filter from the optional search and scope
//!    parameters ([`utils::filter`])
//! 3. Select the join topology, branching on role for user-centric queries
//!    ([`utils::topology`])
//! 4. Run a count query and a listing query from the same plan so the two
//!    can never disagree ([`utils::query`])
//! 5. Wrap results in a `{data, pagination}` envelope
//!
//! ## Role-conditional traversal
//!
//! A user's relation to classes depends on role:
//!
//! ```text
//! teacher: users ──────────────▶ classes ──▶ subjects ──▶ departments
//!                 (teacher_id)
//! student: users ─▶ enrollments ─▶ classes ──▶ subjects ──▶ departments
//! ```
//!
//! Roles outside this closed set have no traversal rule; user-scoped
//! listings answer with a well-formed empty envelope instead of an error.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Database pool and CORS configuration
//! ├── modules/          # Feature modules
//! │   ├── departments/
//! │   ├── subjects/
//! │   ├── classes/
//! │   └── users/
//! └── utils/            # Pagination, filter, topology, query plan, errors
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
