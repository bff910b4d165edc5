//! Core types - pure abstractions shared across the codebase.

mod language;
mod path;

pub use language::{Language, UnknownLanguage};
pub use path::RoutePath;
