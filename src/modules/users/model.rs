use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

pub const USER_BASE: &str = "users u";
pub const USER_KEY: &str = "u.id";
pub const USER_ORDER: &str = "u.created_at DESC, u.id DESC";
pub const USER_COLUMNS: &str =
    "u.id, u.name, u.email, u.email_verified, u.image, u.role, u.created_at, u.updated_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Teacher,
    Student,
    Admin,
}

impl UserRole {
    /// Equality-filter parsing for `/users?role=`. The full role set is
    /// accepted here; traversal endpoints use the closed teacher/student set
    /// instead.
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct UserFilterParams {
    /// Substring match on name or email
    pub search: Option<String>,
    /// Exact role filter: teacher, student, or admin
    pub role: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Parameters for listings scoped by a user (`/users/{id}/classes` etc.),
/// where the traversal role comes from the stored user rather than the query.
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct UserScopedFilterParams {
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Parameters for membership listings (`/subjects/{id}/users`,
/// `/classes/{id}/users`), where `role` is required and must be exactly
/// `teacher` or `student`.
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct MemberFilterParams {
    pub role: Option<String>,
    /// Substring match on name or email
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    pub data: User,
}
