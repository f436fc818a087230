use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_class, get_class, get_class_users, get_classes};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route("/{id}", get(get_class))
        .route("/{id}/users", get(get_class_users))
}
