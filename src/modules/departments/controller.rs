use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::departments::model::{
    DepartmentDetailResponse, DepartmentFilterParams, PaginatedDepartmentsResponse,
};
use crate::modules::departments::service::DepartmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/departments",
    params(DepartmentFilterParams),
    responses(
        (status = 200, description = "Paginated list of departments", body = PaginatedDepartmentsResponse)
    ),
    tag = "Departments"
)]
#[instrument(skip(state))]
pub async fn get_departments(
    State(state): State<AppState>,
    Query(filters): Query<DepartmentFilterParams>,
) -> Result<Json<PaginatedDepartmentsResponse>, AppError> {
    let departments = DepartmentService::get_departments(&state.db, filters).await?;

    Ok(Json(departments))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department details", body = DepartmentDetailResponse),
        (status = 400, description = "Malformed department ID"),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
#[instrument(skip(state))]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartmentDetailResponse>, AppError> {
    let department = DepartmentService::get_department(&state.db, id).await?;

    Ok(Json(DepartmentDetailResponse { data: department }))
}
