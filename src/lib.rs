//! Content core for a news/blog module inside a larger CMS.
//!
//! The interesting parts live in the save pipeline: URL-segment (slug)
//! resolution with collision disambiguation, append-only rename history for
//! redirect-on-rename, and idempotent de-duplication of free-text author
//! names. Persistence is delegated to repository ports with a PostgreSQL
//! implementation under [`infrastructure`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
