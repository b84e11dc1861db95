//! Model to entity mappers
//!
//! This module provides conversions between API models and domain entities (roster-core).
//! - `From<Model> for Entity` / `TryFrom<Model> for Entity`: decode responses into domain objects
//! - `CreatePageRequest::for_member`: prepare entity data for a write

mod coc;
mod notion;

pub use notion::rows_from_query;
