use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::subjects::model::{
    CreateSubjectDto, CreateSubjectResponse, PaginatedSubjectsResponse, SubjectDetailResponse,
    SubjectFilterParams,
};
use crate::modules::subjects::service::SubjectService;
use crate::modules::users::model::{MemberFilterParams, PaginatedUsersResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = CreateSubjectResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Referenced department not found")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<CreateSubjectResponse>), AppError> {
    let created = SubjectService::create_subject(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    params(SubjectFilterParams),
    responses(
        (status = 200, description = "Paginated list of subjects", body = PaginatedSubjectsResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects(
    State(state): State<AppState>,
    Query(filters): Query<SubjectFilterParams>,
) -> Result<Json<PaginatedSubjectsResponse>, AppError> {
    let subjects = SubjectService::get_subjects(&state.db, filters).await?;

    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(
        ("id" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject details with its department", body = SubjectDetailResponse),
        (status = 400, description = "Malformed subject ID"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubjectDetailResponse>, AppError> {
    let subject = SubjectService::get_subject(&state.db, id).await?;

    Ok(Json(SubjectDetailResponse { data: subject }))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}/users",
    params(
        ("id" = Uuid, Path, description = "Subject ID"),
        MemberFilterParams
    ),
    responses(
        (status = 200, description = "Users teaching or enrolled in the subject", body = PaginatedUsersResponse),
        (status = 400, description = "Missing or unrecognized role"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subject_users(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filters): Query<MemberFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let users = SubjectService::get_subject_users(&state.db, id, filters).await?;

    Ok(Json(users))
}
