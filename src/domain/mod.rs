pub mod author;
pub mod comment;
pub mod errors;
pub mod holder;
pub mod member;
pub mod news;
pub mod rename;
pub mod slugging;
pub mod tag;
