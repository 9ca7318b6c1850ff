//! Route definitions for the film pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/films", get(films::list))
}
