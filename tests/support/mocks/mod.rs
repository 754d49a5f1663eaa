#![allow(dead_code)]

pub mod notifier;
pub mod repos;
pub mod time;

pub use notifier::CountingNotifier;
pub use repos::{
    InMemoryAuthorRepo, InMemoryCommentRepo, InMemoryHolderRepo, InMemoryNewsStore,
    InMemoryTagRepo,
};
pub use time::{fixed_now, FixedClock};
