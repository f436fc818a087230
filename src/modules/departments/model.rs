use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

pub const DEPARTMENT_BASE: &str = "departments d";
pub const DEPARTMENT_KEY: &str = "d.id";
pub const DEPARTMENT_ORDER: &str = "d.created_at DESC, d.id DESC";
pub const DEPARTMENT_COLUMNS: &str =
    "d.id, d.code, d.name, d.description, d.created_at, d.updated_at";

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Department {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DepartmentWithStats {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub subject_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct DepartmentFilterParams {
    /// Substring match on name or code
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedDepartmentsResponse {
    pub data: Vec<DepartmentWithStats>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentDetailResponse {
    pub data: DepartmentWithStats,
}

/// Envelope for departments reached through a user traversal; no stats,
/// identical shape for the teacher and the student path.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUserDepartmentsResponse {
    pub data: Vec<Department>,
    pub pagination: PaginationMeta,
}
