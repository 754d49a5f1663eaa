pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{notification_due, NewNewsItem, NewsItem, NewsItemUpdate};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use value_objects::{
    AuthorName, ExternalLink, NewsItemId, NewsKind, NewsTitle, UrlSegment, PAGINATION_MARKER,
};
