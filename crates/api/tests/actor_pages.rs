//! HTTP-level integration tests for the actor pages: list, edit form,
//! update, delete, and the JSON listing.

mod common;

use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::StatusCode;
use common::{body_json, body_string, get, get_with_cookie, post_form};
use sqlx::PgPool;

use marquee_db::models::actor::NewActor;
use marquee_db::models::film::NewFilm;
use marquee_db::repositories::{ActorRepo, FilmRepo};

const HOME: &str = "/actors?page=0&sortBy=first_name&order=asc&filter=";

async fn seed_actor(pool: &PgPool, first: &str, last: &str) -> i64 {
    ActorRepo::insert(
        pool,
        &NewActor {
            first_name: first.to_string(),
            last_name: last.to_string(),
        },
    )
    .await
    .unwrap()
}

async fn seed_film(pool: &PgPool, title: &str) -> i64 {
    FilmRepo::insert(
        pool,
        &NewFilm {
            title: title.to_string(),
            description: format!("About {title}"),
        },
    )
    .await
    .unwrap()
}

async fn link(pool: &PgPool, film_id: i64, actor_id: i64) {
    sqlx::query("INSERT INTO film_actor (film_id, actor_id) VALUES ($1, $2)")
        .bind(film_id)
        .bind(actor_id)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Index and list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_index_redirects_to_default_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], HOME);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_renders_seeded_actors(pool: PgPool) {
    seed_actor(&pool, "Ada", "Lovelace").await;
    seed_actor(&pool, "Grace", "Hopper").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/actors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("2 actors found"));
    assert!(body.contains("Ada"));
    assert!(body.contains("Hopper"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filter_excludes_non_matching(pool: PgPool) {
    seed_actor(&pool, "Ada", "Lovelace").await;
    seed_actor(&pool, "Grace", "Hopper").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/actors?filter=ada").await;
    let body = body_string(response).await;

    assert!(body.contains("1 actors found"));
    assert!(body.contains("Lovelace"));
    assert!(!body.contains("Hopper"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_huge_page_number_renders_empty_list(pool: PgPool) {
    seed_actor(&pool, "Ada", "Lovelace").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/actors?page=9223372036854775807").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Nothing to display"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_sort_column_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/actors?sortBy=evil;drop").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Edit form
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_prefills_form_and_options(pool: PgPool) {
    let id = seed_actor(&pool, "Ada", "Lovelace").await;
    seed_film(&pool, "Conceiving Ada").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/actors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("value=\"Ada\""));
    assert!(body.contains("value=\"Lovelace\""));
    assert!(body.contains("Conceiving Ada"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_missing_actor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/actors/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_validation_failure_rerenders_form(pool: PgPool) {
    let id = seed_actor(&pool, "Ada", "Lovelace").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/actors/{id}"),
        "first_name=&last_name=Lovelace",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("First name is required"));
    assert!(body.contains("value=\"Lovelace\""));

    // Nothing was persisted.
    let actor = ActorRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(actor.first_name, "Ada");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_success_redirects_with_flash(pool: PgPool) {
    let id = seed_actor(&pool, "Ada", "Lovelace").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/actors/{id}"), "first_name=Ada&last_name=King").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], HOME);
    // Percent-encoded so the value stays within cookie syntax.
    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("flash=Actor%20Ada%20has%20been%20updated"));

    let actor = ActorRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(actor.last_name, "King");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_flash_notice_is_shown_once(pool: PgPool) {
    seed_actor(&pool, "Ada", "Lovelace").await;

    let app = common::build_test_app(pool);
    let response =
        get_with_cookie(app, "/actors", "flash=Actor%20Ada%20has%20been%20updated").await;
    assert_eq!(response.status(), StatusCode::OK);

    // The notice is rendered and the cookie is cleared in one response.
    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with("flash="));
    let body = body_string(response).await;
    assert!(body.contains("Actor Ada has been updated"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_actor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/actors/999999", "first_name=Ada&last_name=King").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_redirects_and_removes_row(pool: PgPool) {
    let id = seed_actor(&pool, "Ada", "Lovelace").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/actors/{id}/delete"), "").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], HOME);
    assert!(ActorRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_actor_still_redirects(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/actors/999999/delete", "").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], HOME);
}

// ---------------------------------------------------------------------------
// JSON listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_actors_json_nests_films_one_way(pool: PgPool) {
    let actor_id = seed_actor(&pool, "Ada", "Lovelace").await;
    let film_id = seed_film(&pool, "Conceiving Ada").await;
    link(&pool, film_id, actor_id).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/actors.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let actors = json.as_array().unwrap();
    assert_eq!(actors.len(), 1);

    let actor = &actors[0];
    assert_eq!(actor["first_name"], "Ada");
    assert_eq!(actor["films"][0]["title"], "Conceiving Ada");
    // The relation is serialized from the actor side only.
    assert!(actor["films"][0].get("actors").is_none());
}
