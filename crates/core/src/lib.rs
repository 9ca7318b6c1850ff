//! Shared domain types for the marquee workspace.

pub mod error;
pub mod paging;
pub mod types;
