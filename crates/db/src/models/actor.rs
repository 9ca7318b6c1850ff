//! Actor entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use marquee_core::types::{DbId, Timestamp};

use crate::models::film::Film;

/// An actor row from the `actor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new actor. The id is assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActor {
    pub first_name: String,
    pub last_name: String,
}

/// DTO for updating an actor's mutable scalar fields.
///
/// The film relation is never written through an update; it is a shared
/// association maintained separately.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActor {
    pub first_name: String,
    pub last_name: String,
}

/// An actor together with its films, as served by the JSON list endpoint.
///
/// The relation is serialized from this side only; [`Film`] carries no
/// actor back-reference, so the payload cannot cycle.
#[derive(Debug, Clone, Serialize)]
pub struct ActorWithFilms {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub films: Vec<Film>,
}

/// Columns the actor list view may sort by.
///
/// A closed enumeration: the `sortBy` query parameter deserializes into
/// this type, so arbitrary strings never reach query construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorSortColumn {
    #[default]
    FirstName,
    LastName,
    Id,
}

impl ActorSortColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            ActorSortColumn::FirstName => "first_name",
            ActorSortColumn::LastName => "last_name",
            ActorSortColumn::Id => "id",
        }
    }
}
