//! Handlers for the actor pages: list (HTML and JSON), edit form,
//! update, and delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::actor::ActorWithFilms;
use marquee_db::repositories::{ActorRepo, FilmRepo};

use crate::error::{AppError, AppResult};
use crate::flash;
use crate::forms::ActorForm;
use crate::query::ActorListParams;
use crate::state::AppState;
use crate::views;

/// The default list view: page 0, sorted by first name ascending, no
/// filter. Every write redirects back here.
const HOME: &str = "/actors?page=0&sortBy=first_name&order=asc&filter=";

/// GET / — redirect to the default actor list.
pub async fn index() -> Redirect {
    Redirect::to(HOME)
}

/// GET /actors — the paginated actor list.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActorListParams>,
    jar: CookieJar,
) -> AppResult<Response> {
    let page = ActorRepo::page(
        &state.pool,
        params.page.max(0),
        state.config.page_size,
        params.sort_by,
        params.order,
        &params.filter,
    )
    .await?;

    let (jar, notice) = flash::take(jar);
    let html = views::actor_list(
        &page,
        params.sort_by,
        params.order,
        &params.filter,
        notice.as_deref(),
    );
    Ok((jar, Html(html)).into_response())
}

/// GET /actors.json — the full actor list with nested films.
pub async fn list_json(State(state): State<AppState>) -> AppResult<Json<Vec<ActorWithFilms>>> {
    let actors = ActorRepo::list_with_films(&state.pool).await?;
    Ok(Json(actors))
}

/// GET /actors/{id} — the edit form, pre-filled.
///
/// The actor lookup and the film options list are fetched concurrently
/// and joined before rendering.
pub async fn edit(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Html<String>> {
    let (actor, options) = tokio::try_join!(
        ActorRepo::find_by_id(&state.pool, id),
        FilmRepo::options(&state.pool),
    )?;

    let actor = actor.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Actor",
        id,
    }))?;

    let form = ActorForm::from_actor(&actor);
    let errors = validator::ValidationErrors::new();
    Ok(Html(views::actor_edit(id, &form, &errors, &options)))
}

/// POST /actors/{id} — handle the edit form submission.
///
/// Validation failures re-render the form with field errors and a 400
/// status; a successful write redirects to the list with a flash
/// notice; an unknown id is a 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
    Form(input): Form<ActorForm>,
) -> AppResult<Response> {
    if let Err(errors) = input.validate() {
        let options = FilmRepo::options(&state.pool).await?;
        let html = views::actor_edit(id, &input, &errors, &options);
        return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
    }

    match ActorRepo::update(&state.pool, id, &input.to_update()).await? {
        Some(_) => {
            let jar = flash::set(
                jar,
                format!("Actor {} has been updated", input.first_name),
            );
            Ok((jar, Redirect::to(HOME)).into_response())
        }
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        })),
    }
}

/// POST /actors/{id}/delete — delete and redirect.
///
/// Deliberately lenient: the redirect and notice happen whether or not
/// the actor existed, so repeated deletes are idempotent.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
) -> Response {
    ActorRepo::delete(&state.pool, id).await;
    let jar = flash::set(jar, "Actor has been deleted");
    (jar, Redirect::to(HOME)).into_response()
}
