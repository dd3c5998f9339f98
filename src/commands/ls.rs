//! Ls command - Alfred script filter over an IDE's recent projects

use anyhow::{Context, Result};

use super::utils;
use jetbrains_projects::alfred::{Item, Mod, Output};
use jetbrains_projects::config::Config;
use jetbrains_projects::error::ProjectsError;
use jetbrains_projects::filter::filter_and_sort;
use jetbrains_projects::jetbrains::{self, load_product, Product, Project};

/// Execute the ls command and return the script filter JSON
pub fn execute(app_keyword: &str, query: &str, config: &Config) -> Result<String> {
    let product = load_product(app_keyword, config)?;

    let projects = match jetbrains::recent_projects(&product, config) {
        Ok(projects) => projects,
        Err(e) => {
            if let Some(err) = e
                .downcast_ref::<ProjectsError>()
                .filter(|err| err.is_recoverable())
            {
                tracing::warn!("{}", err);
                return render(&fallback_output(app_keyword, err));
            }
            return Err(e);
        }
    };

    // Autocompleting an item yields `|<path>|`, which opens its submenu
    if let Some(path) = selected_path(query) {
        if let Some(project) = projects.iter().find(|p| p.path == path) {
            let running = utils::is_process_running(&product.keyword);
            return render(&manage_output(project, &product, running));
        }
        tracing::debug!("No project at {}, searching for it instead", path);
        return render(&list_output(app_keyword, projects, path));
    }

    render(&list_output(app_keyword, projects, query))
}

fn render(output: &Output) -> Result<String> {
    output.to_json().context("Failed to serialize script filter output")
}

/// Path between the first `|` and the next `|` at least one character later
///
/// `||x|` selects `|x`.
pub fn selected_path(query: &str) -> Option<&str> {
    let start = query.find('|')? + 1;
    let first = query[start..].chars().next()?;
    let body = start + first.len_utf8();
    let end = body + query[body..].find('|')?;
    Some(&query[start..end])
}

/// One item per matching project
pub fn list_output(app_keyword: &str, projects: Vec<Project>, query: &str) -> Output {
    let items = filter_and_sort(query, projects)
        .into_iter()
        .map(|project| {
            let mut item = Item::new(&project.name, &project.path, &project.path);
            item.add_mod("alt", Mod::new("", "Press ⇥ (tab) to manage item", false));
            item
        })
        .collect();

    Output::new(items).with_variable("app_keyword", app_keyword)
}

/// Actions for a single project
///
/// The remove and delete items only set variables; the workflow acts on them.
/// They are withheld while the IDE runs since it would rewrite its record.
pub fn manage_output(project: &Project, product: &Product, running: bool) -> Output {
    let app = product.name();
    let open_item = Item::new(
        format!("Open {} in {}", project.name, app),
        "Open this project in the IDE",
        &project.path,
    )
    .autocomplete("");

    let mut items = Vec::new();
    if running {
        items.push(
            Item::new(
                format!("⚠️ Quit {} to see all options", app),
                "Action this item to go back to main list",
                "",
            )
            .valid(false)
            .autocomplete(""),
        );
        items.push(open_item);
    } else {
        items.push(
            Item::new(
                format!("Remove {} from list", project.name),
                "The project will remain on your drive",
                &project.path,
            )
            .variable("remove_from_list", true)
            .autocomplete(""),
        );
        items.push(
            Item::new(
                format!("🛑Delete {} from disk", project.name),
                "The project will be moved to the trash and removed from the list",
                &project.path,
            )
            .variable("delete_from_disk", true)
            .autocomplete(""),
        );
        items.push(open_item);
        items.push(
            Item::new("⬅︎ Go back", "Action this item to go back to main list", "")
                .valid(false)
                .autocomplete(""),
        );
    }

    for item in &mut items {
        item.add_mod(
            "alt",
            Mod::new("", "Press ⇥ (tab) to return to main list", false),
        );
    }

    Output::new(items).with_variable("app_keyword", product.keyword.as_str())
}

/// Single "Open <app>" item shown when no projects can be read
pub fn fallback_output(app_keyword: &str, err: &ProjectsError) -> Output {
    let reason = match err {
        ProjectsError::NoPreferences { .. } => "no preferences were found",
        ProjectsError::RecordNotFound { .. } => "the projects file was not found",
        _ => "the projects file could not be read",
    };
    let item = Item::new(
        format!("Open {}", app_keyword),
        format!("This is a backup option since {} for {}", reason, app_keyword),
        "",
    )
    .autocomplete("");

    Output::new(vec![item]).with_variable("app_keyword", app_keyword)
}
