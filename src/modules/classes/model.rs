use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::departments::model::Department;
use crate::modules::subjects::model::Subject;
use crate::modules::users::model::User;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

pub const CLASS_BASE: &str = "classes c";
pub const CLASS_KEY: &str = "c.id";
pub const CLASS_ORDER: &str = "c.created_at DESC, c.id DESC";
pub const CLASS_COLUMNS: &str =
    "c.id, c.subject_id, c.teacher_id, c.name, c.invite_code, c.schedule, c.created_at, c.updated_at";

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub name: String,
    pub invite_code: String,
    pub schedule: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub schedule: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateClassResponse {
    pub id: Uuid,
    pub invite_code: String,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ClassFilterParams {
    /// Substring match on class name
    pub search: Option<String>,
    /// Subject-name pattern scoping the listing
    pub subject: Option<String>,
    /// Teacher-name pattern scoping the listing
    pub teacher: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedClassesResponse {
    pub data: Vec<Class>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassDetail {
    #[serde(flatten)]
    pub class: Class,
    pub subject: Subject,
    pub department: Department,
    pub teacher: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassDetailResponse {
    pub data: ClassDetail,
}
