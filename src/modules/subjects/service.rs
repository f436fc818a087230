use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::departments::model::Department;
use crate::modules::subjects::model::{
    CreateSubjectDto, CreateSubjectResponse, PaginatedSubjectsResponse, SUBJECT_BASE,
    SUBJECT_COLUMNS, SUBJECT_KEY, SUBJECT_ORDER, Subject, SubjectDetail, SubjectFilterParams,
};
use crate::modules::users::model::{
    MemberFilterParams, PaginatedUsersResponse, USER_BASE, USER_COLUMNS, USER_KEY, USER_ORDER,
    User,
};
use crate::utils::errors::AppError;
use crate::utils::filter::Filter;
use crate::utils::pagination::PaginationMeta;
use crate::utils::query::QueryPlan;
use crate::utils::topology::RolePath;

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db))]
    pub async fn create_subject(
        db: &PgPool,
        dto: CreateSubjectDto,
    ) -> Result<CreateSubjectResponse, AppError> {
        let department_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM departments WHERE id = $1)")
                .bind(dto.department_id)
                .fetch_one(db)
                .await?;

        if !department_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Department not found")));
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO subjects (department_id, name, code, description)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(dto.department_id)
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(&dto.description)
        .fetch_one(db)
        .await?;

        Ok(CreateSubjectResponse { id })
    }

    #[instrument(skip(db))]
    pub async fn get_subjects(
        db: &PgPool,
        filters: SubjectFilterParams,
    ) -> Result<PaginatedSubjectsResponse, AppError> {
        let page = filters.pagination.page();
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut filter = Filter::new();
        if let Some(search) = &filters.search {
            filter.search(&["s.name", "s.code"], search);
        }
        if let Some(department) = &filters.department {
            filter.search(&["d.name", "d.code"], department);
        }

        let mut plan = QueryPlan::new(SUBJECT_BASE, SUBJECT_KEY, SUBJECT_COLUMNS, SUBJECT_ORDER);
        if filters.department.is_some() {
            // Many-to-one hop; scoping predicate makes the join selective,
            // no fan-out to collapse.
            plan = plan.join("LEFT JOIN departments d ON d.id = s.department_id");
        }
        let plan = plan.filter(filter);

        let total = plan.fetch_count(db).await?;
        let subjects = plan.fetch_page::<Subject>(db, limit, offset).await?;

        Ok(PaginatedSubjectsResponse {
            data: subjects,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_subject(db: &PgPool, subject_id: Uuid) -> Result<SubjectDetail, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            r#"SELECT id, department_id, name, code, description, created_at, updated_at
               FROM subjects WHERE id = $1"#,
        )
        .bind(subject_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        let department = sqlx::query_as::<_, Department>(
            r#"SELECT id, code, name, description, created_at, updated_at
               FROM departments WHERE id = $1"#,
        )
        .bind(subject.department_id)
        .fetch_one(db)
        .await?;

        Ok(SubjectDetail {
            subject,
            department,
        })
    }

    #[instrument(skip(db))]
    pub async fn get_subject_users(
        db: &PgPool,
        subject_id: Uuid,
        filters: MemberFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let role = filters
            .role
            .as_deref()
            .and_then(RolePath::parse)
            .ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("role must be \"teacher\" or \"student\""))
            })?;

        let subject_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM subjects WHERE id = $1)")
                .bind(subject_id)
                .fetch_one(db)
                .await?;

        if !subject_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Subject not found")));
        }

        let page = filters.pagination.page();
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let topology = role.users_for_subject();
        let mut filter = Filter::new();
        filter.eq_id(topology.scope_col, subject_id);
        if let Some(search) = &filters.search {
            filter.search(&["u.name", "u.email"], search);
        }

        // A teacher owning several classes of this subject appears in several
        // joined rows; grouping collapses them before pagination.
        let plan = QueryPlan::new(USER_BASE, USER_KEY, USER_COLUMNS, USER_ORDER)
            .joins(topology.joins)
            .filter(filter)
            .group_when(topology.fan_out, USER_COLUMNS);

        let total = plan.fetch_count(db).await?;
        let users = plan.fetch_page::<User>(db, limit, offset).await?;

        Ok(PaginatedUsersResponse {
            data: users,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }
}
