pub mod actors;
pub mod films;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /                       -> redirect to the actor list
/// GET  /actors                 -> paginated actor list (HTML)
/// GET  /actors.json            -> actor list with nested films (JSON)
/// GET  /actors/{id}            -> edit form
/// POST /actors/{id}            -> update
/// POST /actors/{id}/delete     -> delete
/// GET  /films                  -> paginated film list (HTML)
/// GET  /health                 -> liveness
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(actors::router())
        .merge(films::router())
        .merge(health::router())
}
