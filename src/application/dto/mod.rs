pub mod auth;
pub mod news;
pub mod tags;

pub use auth::AuthenticatedMember;
pub use news::{CommentDto, NewsItemDto, NewsLookup, RenameRecordDto};
pub use tags::TagDto;
