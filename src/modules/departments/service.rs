use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::departments::model::{
    DEPARTMENT_BASE, DEPARTMENT_COLUMNS, DEPARTMENT_KEY, DEPARTMENT_ORDER, DepartmentFilterParams,
    DepartmentWithStats, PaginatedDepartmentsResponse,
};
use crate::utils::errors::AppError;
use crate::utils::filter::Filter;
use crate::utils::pagination::PaginationMeta;
use crate::utils::query::QueryPlan;

pub struct DepartmentService;

impl DepartmentService {
    #[instrument(skip(db))]
    pub async fn get_departments(
        db: &PgPool,
        filters: DepartmentFilterParams,
    ) -> Result<PaginatedDepartmentsResponse, AppError> {
        let page = filters.pagination.page();
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut filter = Filter::new();
        if let Some(search) = &filters.search {
            filter.search(&["d.name", "d.code"], search);
        }

        // The subject join is aggregate-only; grouping keeps one row per
        // department no matter how many subjects hang off it.
        let plan = QueryPlan::new(
            DEPARTMENT_BASE,
            DEPARTMENT_KEY,
            format!("{DEPARTMENT_COLUMNS}, COUNT(DISTINCT s.id) AS subject_count"),
            DEPARTMENT_ORDER,
        )
        .join("LEFT JOIN subjects s ON s.department_id = d.id")
        .filter(filter)
        .group_by(DEPARTMENT_COLUMNS);

        let total = plan.fetch_count(db).await?;
        let departments = plan
            .fetch_page::<DepartmentWithStats>(db, limit, offset)
            .await?;

        Ok(PaginatedDepartmentsResponse {
            data: departments,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_department(
        db: &PgPool,
        department_id: Uuid,
    ) -> Result<DepartmentWithStats, AppError> {
        let department = sqlx::query_as::<_, DepartmentWithStats>(
            r#"SELECT
                d.id,
                d.code,
                d.name,
                d.description,
                COUNT(DISTINCT s.id) AS subject_count,
                d.created_at,
                d.updated_at
               FROM departments d
               LEFT JOIN subjects s ON s.department_id = d.id
               WHERE d.id = $1
               GROUP BY d.id, d.code, d.name, d.description, d.created_at, d.updated_at"#,
        )
        .bind(department_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Department not found")))?;

        Ok(department)
    }
}
