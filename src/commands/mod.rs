//! CLI commands

pub mod list;
pub mod ls;
pub mod open;
pub mod products;
pub mod utils;
