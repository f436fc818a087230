use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_department, get_departments};

pub fn init_departments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_departments))
        .route("/{id}", get(get_department))
}
