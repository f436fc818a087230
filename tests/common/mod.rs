use axum::body::Body;
use axum::http::{Request, StatusCode};
use classdex::config::cors::CorsConfig;
use classdex::router::init_router;
use classdex::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();
    (status, body)
}

pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();
    (status, body)
}

pub async fn create_department(pool: &PgPool, code: &str, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO departments (code, name, description) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(name)
    .bind(Some("Test department"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_subject(pool: &PgPool, department_id: Uuid, name: &str, code: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO subjects (department_id, name, code) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(department_id)
    .bind(name)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// role is one of: "teacher", "student", "admin"
pub async fn create_user(pool: &PgPool, name: &str, email: &str, role: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, role) VALUES ($1, $2, $3::user_role) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_class(pool: &PgPool, subject_id: Uuid, teacher_id: Uuid, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO classes (subject_id, teacher_id, name, invite_code)
           VALUES ($1, $2, $3, $4) RETURNING id"#,
    )
    .bind(subject_id)
    .bind(teacher_id)
    .bind(name)
    .bind(format!("tc{}", &Uuid::new_v4().simple().to_string()[..6]))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn enroll(pool: &PgPool, student_id: Uuid, class_id: Uuid) {
    sqlx::query("INSERT INTO enrollments (student_id, class_id) VALUES ($1, $2)")
        .bind(student_id)
        .bind(class_id)
        .execute(pool)
        .await
        .unwrap();
}

pub fn unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
