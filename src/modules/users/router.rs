use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    get_user, get_user_classes, get_user_departments, get_user_subjects, get_users,
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/{id}", get(get_user))
        .route("/{id}/classes", get(get_user_classes))
        .route("/{id}/subjects", get(get_user_subjects))
        .route("/{id}/departments", get(get_user_departments))
}
