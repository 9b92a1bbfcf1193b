//! Words Store
//!
//! Vocabulary entries backed by `words.json`. Listing auto-seeds the store
//! from `seeds.json` the first time it is read empty:
//!
//! - seeded entries get sequential ids `w1, w2, …`
//! - user-added entries get clock-derived ids
//!
//! # Usage
//!
//! ```rust,ignore
//! use shobdokosh::words;
//!
//! let app = Router::new()
//!     .nest("/api", words::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod routes;

pub use routes::routes;
