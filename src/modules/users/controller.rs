use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::PaginatedClassesResponse;
use crate::modules::departments::model::PaginatedUserDepartmentsResponse;
use crate::modules::subjects::model::PaginatedSubjectsResponse;
use crate::modules::users::model::{
    PaginatedUsersResponse, UserDetailResponse, UserFilterParams, UserScopedFilterParams,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/users",
    params(UserFilterParams),
    responses(
        (status = 200, description = "Paginated list of users", body = PaginatedUsersResponse),
        (status = 400, description = "Unrecognized role filter")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let users = UserService::get_users(&state.db, filters).await?;

    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserDetailResponse),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDetailResponse>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;

    Ok(Json(UserDetailResponse { data: user }))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/classes",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        UserScopedFilterParams
    ),
    responses(
        (status = 200, description = "Classes the user teaches or attends; empty envelope for other roles", body = PaginatedClassesResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_classes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filters): Query<UserScopedFilterParams>,
) -> Result<Json<PaginatedClassesResponse>, AppError> {
    let classes = UserService::get_user_classes(&state.db, id, filters).await?;

    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/subjects",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        UserScopedFilterParams
    ),
    responses(
        (status = 200, description = "Subjects reachable through the user's classes", body = PaginatedSubjectsResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_subjects(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filters): Query<UserScopedFilterParams>,
) -> Result<Json<PaginatedSubjectsResponse>, AppError> {
    let subjects = UserService::get_user_subjects(&state.db, id, filters).await?;

    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/departments",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        UserScopedFilterParams
    ),
    responses(
        (status = 200, description = "Departments reachable through the user's classes", body = PaginatedUserDepartmentsResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_departments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filters): Query<UserScopedFilterParams>,
) -> Result<Json<PaginatedUserDepartmentsResponse>, AppError> {
    let departments = UserService::get_user_departments(&state.db, id, filters).await?;

    Ok(Json(departments))
}
