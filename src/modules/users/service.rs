use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::{
    CLASS_BASE, CLASS_COLUMNS, CLASS_KEY, CLASS_ORDER, Class, PaginatedClassesResponse,
};
use crate::modules::departments::model::{
    DEPARTMENT_BASE, DEPARTMENT_COLUMNS, DEPARTMENT_KEY, DEPARTMENT_ORDER, Department,
    PaginatedUserDepartmentsResponse,
};
use crate::modules::subjects::model::{
    PaginatedSubjectsResponse, SUBJECT_BASE, SUBJECT_COLUMNS, SUBJECT_KEY, SUBJECT_ORDER, Subject,
};
use crate::modules::users::model::{
    PaginatedUsersResponse, USER_BASE, USER_COLUMNS, USER_KEY, USER_ORDER, User, UserFilterParams,
    UserRole, UserScopedFilterParams,
};
use crate::utils::errors::AppError;
use crate::utils::filter::Filter;
use crate::utils::pagination::PaginationMeta;
use crate::utils::query::QueryPlan;
use crate::utils::topology::RolePath;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        filters: UserFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let page = filters.pagination.page();
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut filter = Filter::new();
        if let Some(search) = &filters.search {
            filter.search(&["u.name", "u.email"], search);
        }
        if let Some(role) = &filters.role {
            let role = UserRole::parse(role).ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!(
                    "role must be \"teacher\", \"student\", or \"admin\""
                ))
            })?;
            filter.eq_role("u.role", role);
        }

        let plan = QueryPlan::new(USER_BASE, USER_KEY, USER_COLUMNS, USER_ORDER).filter(filter);

        let total = plan.fetch_count(db).await?;
        let users = plan.fetch_page::<User>(db, limit, offset).await?;

        Ok(PaginatedUsersResponse {
            data: users,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, email_verified, image, role, created_at, updated_at
               FROM users WHERE id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    /// Classes reachable by a user: owned classes for a teacher, enrolled
    /// classes for a student, a well-formed empty envelope for anyone else.
    #[instrument(skip(db))]
    pub async fn get_user_classes(
        db: &PgPool,
        user_id: Uuid,
        filters: UserScopedFilterParams,
    ) -> Result<PaginatedClassesResponse, AppError> {
        let user = Self::get_user(db, user_id).await?;
        let page = filters.pagination.page();

        let Some(path) = RolePath::of_user(user.role) else {
            return Ok(PaginatedClassesResponse {
                data: Vec::new(),
                pagination: PaginationMeta::empty(page),
            });
        };

        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let topology = path.classes_for_user();
        let mut filter = Filter::new();
        filter.eq_id(topology.scope_col, user_id);
        if let Some(search) = &filters.search {
            filter.search(&["c.name"], search);
        }

        let plan = QueryPlan::new(CLASS_BASE, CLASS_KEY, CLASS_COLUMNS, CLASS_ORDER)
            .joins(topology.joins)
            .filter(filter)
            .group_when(topology.fan_out, CLASS_COLUMNS);

        let total = plan.fetch_count(db).await?;
        let classes = plan.fetch_page::<Class>(db, limit, offset).await?;

        Ok(PaginatedClassesResponse {
            data: classes,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_user_subjects(
        db: &PgPool,
        user_id: Uuid,
        filters: UserScopedFilterParams,
    ) -> Result<PaginatedSubjectsResponse, AppError> {
        let user = Self::get_user(db, user_id).await?;
        let page = filters.pagination.page();

        let Some(path) = RolePath::of_user(user.role) else {
            return Ok(PaginatedSubjectsResponse {
                data: Vec::new(),
                pagination: PaginationMeta::empty(page),
            });
        };

        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let topology = path.subjects_for_user();
        let mut filter = Filter::new();
        filter.eq_id(topology.scope_col, user_id);
        if let Some(search) = &filters.search {
            filter.search(&["s.name", "s.code"], search);
        }

        // A teacher with two classes of the same subject reaches that subject
        // through two joined rows; grouping keeps the subject on one page
        // exactly once.
        let plan = QueryPlan::new(SUBJECT_BASE, SUBJECT_KEY, SUBJECT_COLUMNS, SUBJECT_ORDER)
            .joins(topology.joins)
            .filter(filter)
            .group_when(topology.fan_out, SUBJECT_COLUMNS);

        let total = plan.fetch_count(db).await?;
        let subjects = plan.fetch_page::<Subject>(db, limit, offset).await?;

        Ok(PaginatedSubjectsResponse {
            data: subjects,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_user_departments(
        db: &PgPool,
        user_id: Uuid,
        filters: UserScopedFilterParams,
    ) -> Result<PaginatedUserDepartmentsResponse, AppError> {
        let user = Self::get_user(db, user_id).await?;
        let page = filters.pagination.page();

        let Some(path) = RolePath::of_user(user.role) else {
            return Ok(PaginatedUserDepartmentsResponse {
                data: Vec::new(),
                pagination: PaginationMeta::empty(page),
            });
        };

        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let topology = path.departments_for_user();
        let mut filter = Filter::new();
        filter.eq_id(topology.scope_col, user_id);
        if let Some(search) = &filters.search {
            filter.search(&["d.name", "d.code"], search);
        }

        let plan = QueryPlan::new(
            DEPARTMENT_BASE,
            DEPARTMENT_KEY,
            DEPARTMENT_COLUMNS,
            DEPARTMENT_ORDER,
        )
        .joins(topology.joins)
        .filter(filter)
        .group_when(topology.fan_out, DEPARTMENT_COLUMNS);

        let total = plan.fetch_count(db).await?;
        let departments = plan.fetch_page::<Department>(db, limit, offset).await?;

        Ok(PaginatedUserDepartmentsResponse {
            data: departments,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }
}
