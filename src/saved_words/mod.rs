//! Saved-word bookmarks backed by `saved_words.json`. Adds are idempotent
//! per word id; removal filters every matching record.

mod handler;
mod routes;

pub use routes::routes;
