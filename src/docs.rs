use utoipa::OpenApi;

use crate::modules::classes::model::{
    Class, ClassDetail, ClassDetailResponse, ClassFilterParams, CreateClassDto,
    CreateClassResponse, PaginatedClassesResponse,
};
use crate::modules::departments::model::{
    Department, DepartmentDetailResponse, DepartmentFilterParams, DepartmentWithStats,
    PaginatedDepartmentsResponse, PaginatedUserDepartmentsResponse,
};
use crate::modules::subjects::model::{
    CreateSubjectDto, CreateSubjectResponse, PaginatedSubjectsResponse, Subject, SubjectDetail,
    SubjectDetailResponse, SubjectFilterParams,
};
use crate::modules::users::model::{
    MemberFilterParams, PaginatedUsersResponse, User, UserDetailResponse, UserFilterParams,
    UserRole, UserScopedFilterParams,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::departments::controller::get_departments,
        crate::modules::departments::controller::get_department,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::get_subject_users,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::get_class_users,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::get_user_classes,
        crate::modules::users::controller::get_user_subjects,
        crate::modules::users::controller::get_user_departments,
    ),
    components(
        schemas(
            Department,
            DepartmentWithStats,
            DepartmentFilterParams,
            DepartmentDetailResponse,
            PaginatedDepartmentsResponse,
            PaginatedUserDepartmentsResponse,
            Subject,
            SubjectDetail,
            SubjectDetailResponse,
            SubjectFilterParams,
            CreateSubjectDto,
            CreateSubjectResponse,
            PaginatedSubjectsResponse,
            Class,
            ClassDetail,
            ClassDetailResponse,
            ClassFilterParams,
            CreateClassDto,
            CreateClassResponse,
            PaginatedClassesResponse,
            User,
            UserRole,
            UserDetailResponse,
            UserFilterParams,
            UserScopedFilterParams,
            MemberFilterParams,
            PaginatedUsersResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    tags(
        (name = "Departments", description = "Department catalog"),
        (name = "Subjects", description = "Subjects and their members"),
        (name = "Classes", description = "Classes and their members"),
        (name = "Users", description = "Users and their reachable catalog entities")
    ),
    info(
        title = "Classdex API",
        description = "Catalog query API for departments, subjects, classes, and enrollments",
        version = env!("CARGO_PKG_VERSION")
    )
)]
pub struct ApiDoc;
