//! Repository for the `actor` table.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};

use marquee_core::paging::{Page, SortOrder};
use marquee_core::types::DbId;

use crate::models::actor::{Actor, ActorSortColumn, ActorWithFilms, NewActor, UpdateActor};
use crate::models::film::Film;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, created_at, updated_at";

/// One row of the actor/film join used to assemble [`ActorWithFilms`].
#[derive(Debug, FromRow)]
struct FilmCredit {
    actor_id: DbId,
    #[sqlx(flatten)]
    film: Film,
}

/// Provides paged search and CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Return one page of actors whose first name contains `filter`
    /// case-insensitively (empty filter matches all), ordered by `sort`
    /// in `order` with an `id` tie-break so the total order is stable.
    ///
    /// Also reports the total number of matching rows for the
    /// pagination UI.
    pub async fn page(
        pool: &PgPool,
        page: i64,
        page_size: i64,
        sort: ActorSortColumn,
        order: SortOrder,
        filter: &str,
    ) -> Result<Page<Actor>, sqlx::Error> {
        let pattern = format!("%{filter}%");

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM actor WHERE first_name ILIKE $1")
                .bind(&pattern)
                .fetch_one(pool)
                .await?;

        // `sort` and `order` are closed enums, so the interpolation below
        // cannot carry untrusted input.
        let query = format!(
            "SELECT {COLUMNS} FROM actor
             WHERE first_name ILIKE $1
             ORDER BY {} {}, id ASC
             LIMIT $2 OFFSET $3",
            sort.as_sql(),
            order.as_sql()
        );
        // Saturate so an absurd page number yields an empty page rather
        // than overflowing into a negative offset.
        let items = sqlx::query_as::<_, Actor>(&query)
            .bind(&pattern)
            .bind(page_size)
            .bind(page.saturating_mul(page_size))
            .fetch_all(pool)
            .await?;

        Ok(Page {
            items,
            page,
            page_size,
            total,
        })
    }

    /// Find an actor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actor WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new actor, returning the database-assigned id.
    pub async fn insert(pool: &PgPool, input: &NewActor) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO actor (first_name, last_name) VALUES ($1, $2) RETURNING id")
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Overwrite an actor's name fields inside a read-modify-write
    /// transaction. The film relation is left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM actor WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query(
            "UPDATE actor SET first_name = $2, last_name = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(id))
    }

    /// Delete an actor by ID.
    ///
    /// Returns `Some(id)` when a row was removed. Both a missing row and
    /// a store failure collapse to `None`; failures are logged, never
    /// propagated.
    pub async fn delete(pool: &PgPool, id: DbId) -> Option<DbId> {
        match sqlx::query("DELETE FROM actor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
        {
            Ok(result) if result.rows_affected() > 0 => Some(id),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(id, error = %err, "actor delete failed");
                None
            }
        }
    }

    /// Every actor with its nested films, ordered by actor id, for the
    /// JSON list endpoint. Two queries, joined in memory.
    pub async fn list_with_films(pool: &PgPool) -> Result<Vec<ActorWithFilms>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actor ORDER BY id ASC");
        let actors = sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await?;

        let credits = sqlx::query_as::<_, FilmCredit>(
            "SELECT fa.actor_id, f.id, f.title, f.description, f.created_at, f.updated_at
             FROM film_actor fa
             JOIN film f ON f.id = fa.film_id
             ORDER BY fa.actor_id, f.title ASC",
        )
        .fetch_all(pool)
        .await?;

        let mut films_by_actor: HashMap<DbId, Vec<Film>> = HashMap::new();
        for credit in credits {
            films_by_actor
                .entry(credit.actor_id)
                .or_default()
                .push(credit.film);
        }

        Ok(actors
            .into_iter()
            .map(|actor| {
                let films = films_by_actor.remove(&actor.id).unwrap_or_default();
                ActorWithFilms {
                    id: actor.id,
                    first_name: actor.first_name,
                    last_name: actor.last_name,
                    films,
                }
            })
            .collect())
    }

    /// The cast of one film, ordered by last name. The inverse direction
    /// of the relation is only ever exposed through this query.
    pub async fn list_for_film(pool: &PgPool, film_id: DbId) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT a.id, a.first_name, a.last_name, a.created_at, a.updated_at
             FROM actor a
             JOIN film_actor fa ON fa.actor_id = a.id
             WHERE fa.film_id = $1
             ORDER BY a.last_name ASC, a.id ASC",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await
    }
}
