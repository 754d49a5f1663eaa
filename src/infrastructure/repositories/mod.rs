// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_author;
mod postgres_comment;
mod postgres_holder;
mod postgres_news;
mod postgres_rename;
mod postgres_tag;

pub use error::map_sqlx;
pub use postgres_author::PostgresAuthorRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_holder::PostgresHolderRepository;
pub use postgres_news::{PostgresNewsReadRepository, PostgresNewsWriteRepository};
pub use postgres_rename::PostgresRenameRepository;
pub use postgres_tag::PostgresTagRepository;
