use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::{
    ClassDetailResponse, ClassFilterParams, CreateClassDto, CreateClassResponse,
    PaginatedClassesResponse,
};
use crate::modules::classes::service::ClassService;
use crate::modules::users::model::{MemberFilterParams, PaginatedUsersResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created with a generated invite code", body = CreateClassResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Referenced subject or teacher not found")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<CreateClassResponse>), AppError> {
    let created = ClassService::create_class(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/classes",
    params(ClassFilterParams),
    responses(
        (status = 200, description = "Paginated list of classes", body = PaginatedClassesResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(filters): Query<ClassFilterParams>,
) -> Result<Json<PaginatedClassesResponse>, AppError> {
    let classes = ClassService::get_classes(&state.db, filters).await?;

    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class details with subject, department, and teacher", body = ClassDetailResponse),
        (status = 400, description = "Malformed class ID"),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassDetailResponse>, AppError> {
    let class = ClassService::get_class(&state.db, id).await?;

    Ok(Json(ClassDetailResponse { data: class }))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}/users",
    params(
        ("id" = Uuid, Path, description = "Class ID"),
        MemberFilterParams
    ),
    responses(
        (status = 200, description = "Users teaching or enrolled in the class", body = PaginatedUsersResponse),
        (status = 400, description = "Missing or unrecognized role"),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class_users(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filters): Query<MemberFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let users = ClassService::get_class_users(&state.db, id, filters).await?;

    Ok(Json(users))
}
