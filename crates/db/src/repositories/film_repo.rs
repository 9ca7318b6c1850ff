//! Repository for the `film` table.

use sqlx::PgPool;

use marquee_core::paging::{Page, SortOrder};
use marquee_core::types::DbId;

use crate::models::film::{Film, FilmOption, FilmSortColumn, NewFilm, UpdateFilm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Provides paged search and CRUD operations for films, plus the
/// option list backing the actor edit form's film picker.
pub struct FilmRepo;

impl FilmRepo {
    /// Return one page of films whose title contains `filter`
    /// case-insensitively, ordered by `sort` in `order` with an `id`
    /// tie-break. Reports the total matching row count.
    pub async fn page(
        pool: &PgPool,
        page: i64,
        page_size: i64,
        sort: FilmSortColumn,
        order: SortOrder,
        filter: &str,
    ) -> Result<Page<Film>, sqlx::Error> {
        let pattern = format!("%{filter}%");

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM film WHERE title ILIKE $1")
            .bind(&pattern)
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM film
             WHERE title ILIKE $1
             ORDER BY {} {}, id ASC
             LIMIT $2 OFFSET $3",
            sort.as_sql(),
            order.as_sql()
        );
        // Saturate so an absurd page number yields an empty page rather
        // than overflowing into a negative offset.
        let items = sqlx::query_as::<_, Film>(&query)
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

    /// Find a film by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film WHERE id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new film, returning the database-assigned id.
    pub async fn insert(pool: &PgPool, input: &NewFilm) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO film (title, description) VALUES ($1, $2) RETURNING id")
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a film's title and description inside a
    /// read-modify-write transaction. The actor relation is left
    /// untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilm,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM film WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query(
            "UPDATE film SET title = $2, description = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(id))
    }

    /// Delete a film by ID. Missing rows and store failures both
    /// collapse to `None`; failures are logged, never propagated.
    pub async fn delete(pool: &PgPool, id: DbId) -> Option<DbId> {
        match sqlx::query("DELETE FROM film WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
        {
            Ok(result) if result.rows_affected() > 0 => Some(id),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(id, error = %err, "film delete failed");
                None
            }
        }
    }

    /// All films as picker options, ordered alphabetically by title,
    /// with ids rendered as strings.
    pub async fn options(pool: &PgPool) -> Result<Vec<FilmOption>, sqlx::Error> {
        let rows: Vec<(DbId, String)> =
            sqlx::query_as("SELECT id, title FROM film ORDER BY title ASC, id ASC")
                .fetch_all(pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, title)| FilmOption {
                value: id.to_string(),
                label: title,
            })
            .collect())
    }

    /// The films one actor appears in, ordered by title.
    pub async fn list_for_actor(pool: &PgPool, actor_id: DbId) -> Result<Vec<Film>, sqlx::Error> {
        sqlx::query_as::<_, Film>(
            "SELECT f.id, f.title, f.description, f.created_at, f.updated_at
             FROM film f
             JOIN film_actor fa ON fa.film_id = f.id
             WHERE fa.actor_id = $1
             ORDER BY f.title ASC, f.id ASC",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}
