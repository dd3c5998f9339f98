//! jetbrains-projects library
//!
//! Reads the recent-projects records JetBrains IDEs keep in their
//! configuration directories and turns them into launcher items.
//!
//! # Disclaimer
//!
//! This tool is not affiliated with or endorsed by JetBrains s.r.o.
//! It only reads locally stored IDE configuration and never modifies it.

pub mod alfred;
pub mod config;
pub mod error;
pub mod filter;
pub mod jetbrains;
pub mod logging;
