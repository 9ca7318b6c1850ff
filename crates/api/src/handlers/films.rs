//! Handler for the film list page.
//!
//! Films are managed at the repository level only; the HTTP surface is
//! the read-only paginated list.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use marquee_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::flash;
use crate::query::FilmListParams;
use crate::state::AppState;
use crate::views;

/// GET /films — the paginated film list.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FilmListParams>,
    jar: CookieJar,
) -> AppResult<Response> {
    let page = FilmRepo::page(
        &state.pool,
        params.page.max(0),
        state.config.page_size,
        params.sort_by,
        params.order,
        &params.filter,
    )
    .await?;

    let (jar, notice) = flash::take(jar);
    let html = views::film_list(
        &page,
        params.sort_by,
        params.order,
        &params.filter,
        notice.as_deref(),
    );
    Ok((jar, Html(html)).into_response())
}
