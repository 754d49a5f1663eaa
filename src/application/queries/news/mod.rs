mod comments;
mod get_by_slug;
mod history;
mod list;
mod service;

pub use get_by_slug::GetNewsBySlugQuery;
pub use service::NewsQueryService;
