//! Route definitions for the actor pages, including the root redirect.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::index))
        .route("/actors", get(actors::list))
        .route("/actors.json", get(actors::list_json))
        .route("/actors/{id}", get(actors::edit).post(actors::update))
        .route("/actors/{id}/delete", post(actors::delete))
}
