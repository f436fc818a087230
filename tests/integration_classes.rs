mod common;

use axum::http::StatusCode;
use common::{
    create_class, create_department, create_subject, create_user, enroll, get_json, post_json,
    setup_test_app, unique_email,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_class(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    let subject = create_subject(&pool, cs, "Algorithms", "CS201").await;
    let teacher = create_user(&pool, "Teacher T", &unique_email(), "teacher").await;

    let app = setup_test_app(pool);
    let (status, body) = post_json(
        app,
        "/api/classes",
        json!({
            "subject_id": subject,
            "teacher_id": teacher,
            "name": "Algorithms A",
            "schedule": ["Mon 09:00", "Wed 09:00"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some());
    assert_eq!(body["invite_code"].as_str().unwrap().len(), 8);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_class_unknown_subject(pool: PgPool) {
    let teacher = create_user(&pool, "Teacher T", &unique_email(), "teacher").await;

    let app = setup_test_app(pool);
    let (status, _) = post_json(
        app,
        "/api/classes",
        json!({
            "subject_id": Uuid::new_v4(),
            "teacher_id": teacher,
            "name": "Algorithms A"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_class_unknown_teacher(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    let subject = create_subject(&pool, cs, "Algorithms", "CS201").await;

    let app = setup_test_app(pool);
    let (status, _) = post_json(
        app,
        "/api/classes",
        json!({
            "subject_id": subject,
            "teacher_id": Uuid::new_v4(),
            "name": "Algorithms A"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_classes_scoped_by_subject_and_teacher(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    let algorithms = create_subject(&pool, cs, "Algorithms", "CS201").await;
    let databases = create_subject(&pool, cs, "Databases", "CS301").await;
    let alice = create_user(&pool, "Alice", &unique_email(), "teacher").await;
    let bob = create_user(&pool, "Bob", &unique_email(), "teacher").await;
    create_class(&pool, algorithms, alice, "Algorithms A").await;
    create_class(&pool, algorithms, bob, "Algorithms B").await;
    create_class(&pool, databases, alice, "Databases A").await;

    let app = setup_test_app(pool);

    let (status, body) = get_json(app.clone(), "/api/classes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 3);

    // Subject scope matches the subject's name pattern
    let (_, body) = get_json(app.clone(), "/api/classes?subject=Algo").await;
    assert_eq!(body["pagination"]["total"], 2);

    // Teacher scope matches the owner's name pattern
    let (_, body) = get_json(app.clone(), "/api/classes?teacher=Alice").await;
    assert_eq!(body["pagination"]["total"], 2);

    let (_, body) = get_json(app, "/api/classes?subject=Algo&teacher=Alice").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Algorithms A");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_detail_embeds_lineage(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    let subject = create_subject(&pool, cs, "Algorithms", "CS201").await;
    let teacher = create_user(&pool, "Teacher T", &unique_email(), "teacher").await;
    let class = create_class(&pool, subject, teacher, "Algorithms A").await;

    let app = setup_test_app(pool);
    let (status, body) = get_json(app, &format!("/api/classes/{class}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Algorithms A");
    assert_eq!(body["data"]["subject"]["name"], "Algorithms");
    assert_eq!(body["data"]["department"]["code"], "CS");
    assert_eq!(body["data"]["teacher"]["name"], "Teacher T");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_detail_not_found(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _) = get_json(app, &format!("/api/classes/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_users_by_role(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    let subject = create_subject(&pool, cs, "Algorithms", "CS201").await;
    let teacher = create_user(&pool, "Teacher T", &unique_email(), "teacher").await;
    let s1 = create_user(&pool, "Student One", &unique_email(), "student").await;
    let s2 = create_user(&pool, "Student Two", &unique_email(), "student").await;
    let class = create_class(&pool, subject, teacher, "Algorithms A").await;
    enroll(&pool, s1, class).await;
    enroll(&pool, s2, class).await;

    let app = setup_test_app(pool);

    let (status, body) =
        get_json(app.clone(), &format!("/api/classes/{class}/users?role=student")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 2);

    let (status, body) =
        get_json(app.clone(), &format!("/api/classes/{class}/users?role=teacher")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Teacher T");

    // Student search narrows within the class roster
    let (_, body) = get_json(
        app,
        &format!("/api/classes/{class}/users?role=student&search=One"),
    )
    .await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Student One");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_users_requires_recognized_role(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    let subject = create_subject(&pool, cs, "Algorithms", "CS201").await;
    let teacher = create_user(&pool, "Teacher T", &unique_email(), "teacher").await;
    let class = create_class(&pool, subject, teacher, "Algorithms A").await;

    let app = setup_test_app(pool);

    let (status, _) = get_json(app.clone(), &format!("/api/classes/{class}/users")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(app, &format!("/api/classes/{class}/users?role=banana")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_users_unknown_class(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _) = get_json(
        app,
        &format!("/api/classes/{}/users?role=student", Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
