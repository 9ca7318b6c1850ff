pub mod actors;
pub mod films;
pub mod health;
