pub mod social;
pub mod time;
pub mod util;
