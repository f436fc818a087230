use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_subject, get_subject, get_subject_users, get_subjects};

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subject).get(get_subjects))
        .route("/{id}", get(get_subject))
        .route("/{id}/users", get(get_subject_users))
}
