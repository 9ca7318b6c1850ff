//! Film entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use marquee_core::types::{DbId, Timestamp};

/// A film row from the `film` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new film.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFilm {
    pub title: String,
    pub description: String,
}

/// DTO for updating a film's mutable scalar fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFilm {
    pub title: String,
    pub description: String,
}

/// One entry of the film picker on the actor edit form.
///
/// `value` is the film id rendered as a string, ready for an HTML
/// `<option>` element; entries are ordered alphabetically by label.
#[derive(Debug, Clone, Serialize)]
pub struct FilmOption {
    pub value: String,
    pub label: String,
}

/// Columns the film list view may sort by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmSortColumn {
    #[default]
    Title,
    Id,
}

impl FilmSortColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            FilmSortColumn::Title => "title",
            FilmSortColumn::Id => "id",
        }
    }
}
