//! Shared query parameter types for list handlers.
//!
//! `sortBy` and `order` deserialize into closed enums, so an unknown
//! column or direction is rejected with 400 at extraction time and never
//! reaches query construction.

use serde::Deserialize;

use marquee_core::paging::SortOrder;
use marquee_db::models::actor::ActorSortColumn;
use marquee_db::models::film::FilmSortColumn;

/// `GET /actors?page=&sortBy=&order=&filter=`
#[derive(Debug, Deserialize)]
pub struct ActorListParams {
    #[serde(default)]
    pub page: i64,
    #[serde(default, rename = "sortBy")]
    pub sort_by: ActorSortColumn,
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub filter: String,
}

/// `GET /films?page=&sortBy=&order=&filter=`
#[derive(Debug, Deserialize)]
pub struct FilmListParams {
    #[serde(default)]
    pub page: i64,
    #[serde(default, rename = "sortBy")]
    pub sort_by: FilmSortColumn,
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub filter: String,
}
