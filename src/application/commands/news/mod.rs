mod capability;
mod create;
mod delete;
mod pipeline;
mod service;
mod update;

pub use create::{CreateNewsCommand, CreateNewsCommandBuilder};
pub use delete::DeleteNewsCommand;
pub use service::NewsCommandService;
pub use update::UpdateNewsCommand;
