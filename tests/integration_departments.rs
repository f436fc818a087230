mod common;

use axum::http::StatusCode;
use common::{create_department, create_subject, get_json, setup_test_app};
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_departments_with_subject_counts(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    create_subject(&pool, cs, "Algorithms", "CS201").await;
    create_subject(&pool, cs, "Databases", "CS301").await;
    create_department(&pool, "MATH", "Mathematics").await;

    let app = setup_test_app(pool);
    let (status, body) = get_json(app, "/api/departments").await;

    assert_eq!(status, StatusCode::OK);
    // Two subjects fan the CS row out through the join; the listing still
    // returns one row per department and counts departments, not joined rows.
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let cs_row = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["code"] == "CS")
        .expect("CS department missing");
    assert_eq!(cs_row["subject_count"], 2);

    let math_row = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["code"] == "MATH")
        .expect("MATH department missing");
    assert_eq!(math_row["subject_count"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_name_or_code(pool: PgPool) {
    create_department(&pool, "CS", "Computer Science").await;
    create_department(&pool, "MATH", "Mathematics").await;

    let app = setup_test_app(pool);

    let (status, body) = get_json(app.clone(), "/api/departments?search=comput").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["code"], "CS");

    // Code column participates in the same OR group
    let (status, body) = get_json(app, "/api/departments?search=MATH").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Mathematics");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    create_department(&pool, "HUB1", "50%-Hub").await;
    create_department(&pool, "HUB2", "500-Hub").await;

    let app = setup_test_app(pool);

    // An unescaped %50%-Hub% pattern would match both rows.
    let (status, body) = get_json(app.clone(), "/api/departments?search=50%25-Hub").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "50%-Hub");

    let (_, body) = get_json(app, "/api/departments?search=500-Hub").await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "500-Hub");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pagination_window_and_total_pages(pool: PgPool) {
    for i in 0..3 {
        create_department(&pool, &format!("D{i}"), &format!("Department {i}")).await;
    }

    let app = setup_test_app(pool);
    let (status, body) = get_json(app, "/api/departments?page=2&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["limit"], 2);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["total_pages"], 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_numeric_pagination_falls_back_to_defaults(pool: PgPool) {
    create_department(&pool, "CS", "Computer Science").await;

    let app = setup_test_app(pool);
    let (status, body) = get_json(app, "/api/departments?page=abc&limit=-5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    // Negative limits clamp to the floor rather than erroring
    assert_eq!(body["pagination"]["limit"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_department_detail(pool: PgPool) {
    let cs = create_department(&pool, "CS", "Computer Science").await;
    create_subject(&pool, cs, "Algorithms", "CS201").await;

    let app = setup_test_app(pool);
    let (status, body) = get_json(app, &format!("/api/departments/{cs}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["code"], "CS");
    assert_eq!(body["data"]["subject_count"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_department_detail_not_found(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _) = get_json(app, &format!("/api/departments/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_department_id_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _) = get_json(app, "/api/departments/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
