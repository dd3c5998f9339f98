//! List command - Show recent projects in the terminal

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;

use super::utils;
use jetbrains_projects::config::Config;
use jetbrains_projects::error::ProjectsError;
use jetbrains_projects::filter::filter_and_sort;
use jetbrains_projects::jetbrains::{self, load_product, product, Project};

/// A project together with the IDE it was opened in
#[derive(Debug, Serialize)]
pub struct ListedProject {
    pub ide: String,
    #[serde(flatten)]
    pub project: Project,
}

impl ListedProject {
    fn new(ide: &str, project: Project) -> Self {
        Self {
            ide: ide.to_string(),
            project,
        }
    }
}

impl AsRef<Project> for ListedProject {
    fn as_ref(&self) -> &Project {
        &self.project
    }
}

/// Options for the list command
pub struct ListOptions {
    /// Product keyword; all products when None
    pub keyword: Option<String>,
    /// Query, matched like the launcher does
    pub filter: Option<String>,
    /// Limit number of results
    pub limit: Option<usize>,
    /// Print JSON instead of a table
    pub json: bool,
}

/// Collect projects for one product, or every product with a readable record
pub fn collect(keyword: Option<&str>, config: &Config) -> Result<Vec<ListedProject>> {
    let products = match keyword {
        Some(keyword) => vec![load_product(keyword, config)?],
        None => product::all_products(config),
    };

    let mut listed = Vec::new();
    for product in &products {
        match jetbrains::recent_projects(product, config) {
            Ok(projects) => {
                listed.extend(
                    projects
                        .into_iter()
                        .map(|p| ListedProject::new(product.name(), p)),
                );
            }
            Err(e) => {
                let recoverable = e
                    .downcast_ref::<ProjectsError>()
                    .is_some_and(|err| err.is_recoverable());
                if !recoverable {
                    return Err(e);
                }
                // Most products aren't installed; only mention it when asked for one
                if keyword.is_some() {
                    tracing::warn!("{:#}", e);
                } else {
                    tracing::debug!("Skipping {}: {:#}", product.keyword, e);
                }
            }
        }
    }

    // Stable, so each IDE's record order survives ties
    listed.sort_by(|a, b| b.project.last_opened.cmp(&a.project.last_opened));
    Ok(listed)
}

/// Execute the list command and return formatted output
pub fn execute(options: ListOptions, config: &Config) -> Result<String> {
    let listed = collect(options.keyword.as_deref(), config)?;
    let mut listed = match options.filter.as_deref() {
        Some(query) => filter_and_sort(query, listed),
        None => listed,
    };

    let total_count = listed.len();
    if let Some(n) = options.limit {
        listed.truncate(n);
    }

    if options.json {
        return serde_json::to_string_pretty(&listed).context("Failed to serialize projects");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("IDE"),
        Cell::new("Name"),
        Cell::new("Path"),
        Cell::new("Last opened"),
    ]);

    for project in &listed {
        table.add_row(vec![
            Cell::new(&project.ide),
            Cell::new(&project.project.name),
            Cell::new(&project.project.path),
            Cell::new(utils::format_last_opened(project.project.last_opened)),
        ]);
    }

    let mut output = table.to_string();
    if listed.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} projects",
            listed.len(),
            total_count
        ));
    } else {
        output.push_str(&format!("\n\n{} projects found", total_count));
    }

    Ok(output)
}
