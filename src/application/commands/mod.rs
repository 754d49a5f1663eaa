pub mod news;
pub mod tags;
