use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::departments::model::Department;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

pub const SUBJECT_BASE: &str = "subjects s";
pub const SUBJECT_KEY: &str = "s.id";
pub const SUBJECT_ORDER: &str = "s.created_at DESC, s.id DESC";
pub const SUBJECT_COLUMNS: &str =
    "s.id, s.department_id, s.name, s.code, s.description, s.created_at, s.updated_at";

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: Uuid,
    pub department_id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectDto {
    pub department_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateSubjectResponse {
    pub id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct SubjectFilterParams {
    /// Substring match on name or code
    pub search: Option<String>,
    /// Department name-or-code pattern scoping the listing
    pub department: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedSubjectsResponse {
    pub data: Vec<Subject>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectDetail {
    #[serde(flatten)]
    pub subject: Subject,
    pub department: Department,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectDetailResponse {
    pub data: SubjectDetail,
}
