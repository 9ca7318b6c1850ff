//! Form DTOs bound from edit-form submissions.
//!
//! Required-field enforcement lives here, before the repository layer is
//! invoked; repositories perform no validation of their own.

use serde::Deserialize;
use validator::Validate;

use marquee_db::models::actor::{Actor, UpdateActor};

/// The actor edit form: first and last name, both required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActorForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

impl ActorForm {
    /// Pre-fill the form from an existing actor.
    pub fn from_actor(actor: &Actor) -> Self {
        Self {
            first_name: actor.first_name.clone(),
            last_name: actor.last_name.clone(),
        }
    }

    /// The repository DTO carrying the mutable scalar fields.
    pub fn to_update(&self) -> UpdateActor {
        UpdateActor {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
