//! Example sentences backed by `sentences.json`.

mod handler;
mod routes;

pub use routes::routes;
