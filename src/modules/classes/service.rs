use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::{
    CLASS_BASE, CLASS_COLUMNS, CLASS_KEY, CLASS_ORDER, Class, ClassDetail, ClassFilterParams,
    CreateClassDto, CreateClassResponse, PaginatedClassesResponse,
};
use crate::modules::departments::model::Department;
use crate::modules::subjects::model::Subject;
use crate::modules::users::model::{
    MemberFilterParams, PaginatedUsersResponse, USER_BASE, USER_COLUMNS, USER_KEY, USER_ORDER,
    User,
};
use crate::utils::errors::AppError;
use crate::utils::filter::Filter;
use crate::utils::invite::generate_invite_code;
use crate::utils::pagination::PaginationMeta;
use crate::utils::query::QueryPlan;
use crate::utils::topology::RolePath;

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db))]
    pub async fn create_class(
        db: &PgPool,
        dto: CreateClassDto,
    ) -> Result<CreateClassResponse, AppError> {
        let subject_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM subjects WHERE id = $1)")
                .bind(dto.subject_id)
                .fetch_one(db)
                .await?;

        if !subject_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Subject not found")));
        }

        // The referenced user must exist; whether it actually holds the
        // teacher role is left to operator discipline, as in the original
        // data model.
        let teacher_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(dto.teacher_id)
                .fetch_one(db)
                .await?;

        if !teacher_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        let invite_code = generate_invite_code();
        let schedule = dto.schedule.unwrap_or_default();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO classes (subject_id, teacher_id, name, invite_code, schedule)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id"#,
        )
        .bind(dto.subject_id)
        .bind(dto.teacher_id)
        .bind(&dto.name)
        .bind(&invite_code)
        .bind(&schedule)
        .fetch_one(db)
        .await?;

        Ok(CreateClassResponse { id, invite_code })
    }

    #[instrument(skip(db))]
    pub async fn get_classes(
        db: &PgPool,
        filters: ClassFilterParams,
    ) -> Result<PaginatedClassesResponse, AppError> {
        let page = filters.pagination.page();
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut filter = Filter::new();
        if let Some(search) = &filters.search {
            filter.search(&["c.name"], search);
        }
        if let Some(subject) = &filters.subject {
            filter.search(&["s.name"], subject);
        }
        if let Some(teacher) = &filters.teacher {
            filter.search(&["t.name"], teacher);
        }

        let mut plan = QueryPlan::new(CLASS_BASE, CLASS_KEY, CLASS_COLUMNS, CLASS_ORDER);
        if filters.subject.is_some() {
            plan = plan.join("LEFT JOIN subjects s ON s.id = c.subject_id");
        }
        if filters.teacher.is_some() {
            plan = plan.join("LEFT JOIN users t ON t.id = c.teacher_id");
        }
        let plan = plan.filter(filter);

        let total = plan.fetch_count(db).await?;
        let classes = plan.fetch_page::<Class>(db, limit, offset).await?;

        Ok(PaginatedClassesResponse {
            data: classes,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_class(db: &PgPool, class_id: Uuid) -> Result<ClassDetail, AppError> {
        let class = sqlx::query_as::<_, Class>(
            r#"SELECT id, subject_id, teacher_id, name, invite_code, schedule, created_at, updated_at
               FROM classes WHERE id = $1"#,
        )
        .bind(class_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))?;

        let subject = sqlx::query_as::<_, Subject>(
            r#"SELECT id, department_id, name, code, description, created_at, updated_at
               FROM subjects WHERE id = $1"#,
        )
        .bind(class.subject_id)
        .fetch_one(db)
        .await?;

        let department = sqlx::query_as::<_, Department>(
            r#"SELECT id, code, name, description, created_at, updated_at
               FROM departments WHERE id = $1"#,
        )
        .bind(subject.department_id)
        .fetch_one(db)
        .await?;

        let teacher = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, email_verified, image, role, created_at, updated_at
               FROM users WHERE id = $1"#,
        )
        .bind(class.teacher_id)
        .fetch_one(db)
        .await?;

        Ok(ClassDetail {
            class,
            subject,
            department,
            teacher,
        })
    }

    #[instrument(skip(db))]
    pub async fn get_class_users(
        db: &PgPool,
        class_id: Uuid,
        filters: MemberFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let role = filters
            .role
            .as_deref()
            .and_then(RolePath::parse)
            .ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("role must be \"teacher\" or \"student\""))
            })?;

        let class_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM classes WHERE id = $1)")
                .bind(class_id)
                .fetch_one(db)
                .await?;

        if !class_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        let page = filters.pagination.page();
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let topology = role.users_for_class();
        let mut filter = Filter::new();
        filter.eq_id(topology.scope_col, class_id);
        if let Some(search) = &filters.search {
            filter.search(&["u.name", "u.email"], search);
        }

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
