//! Core JetBrains IDE operations

pub mod discovery;
pub mod product;
pub mod project;
pub mod recent;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
pub use product::{load_product, Product};
pub use project::Project;

/// Projects from a record file, newest first
pub fn load_projects(record: &Path) -> Result<Vec<Project>> {
    let entries = recent::read_recent_projects(record)?;
    Ok(recent::sort_by_recency(entries)
        .into_iter()
        .map(Project::from)
        .collect())
}

/// Recently opened projects of the newest installed version of `product`
pub fn recent_projects(product: &Product, config: &Config) -> anyhow::Result<Vec<Project>> {
    let root = product.preferences_root(config)?;
    let record = discovery::find_recent_projects_file(&root, product)?;
    tracing::debug!("Reading {}", record.display());
    Ok(load_projects(&record)?)
}
