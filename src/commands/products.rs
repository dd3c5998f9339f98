//! Products command - Show known IDEs and their installed versions

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use jetbrains_projects::config::Config;
use jetbrains_projects::jetbrains::discovery;
use jetbrains_projects::jetbrains::product::{self, Product};

/// Newest configuration folder name of an installed product
pub fn installed_version(product: &Product, config: &Config) -> Option<String> {
    let root = product.preferences_root(config).ok()?;
    let folder = discovery::latest_preferences_folder(&root, product).ok()?;
    folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Execute the products command and return formatted output
pub fn execute(config: &Config) -> Result<String> {
    let products = product::all_products(config);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Keyword"),
        Cell::new("Name"),
        Cell::new("Bundle ID"),
        Cell::new("Installed"),
    ]);

    let mut installed_count = 0;
    for product in &products {
        let installed = match installed_version(product, config) {
            Some(version) => {
                installed_count += 1;
                version.green().to_string()
            }
            None => "-".dimmed().to_string(),
        };
        table.add_row(vec![
            Cell::new(&product.keyword),
            Cell::new(product.name()),
            Cell::new(&product.bundle_id),
            Cell::new(installed),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\n{} products known, {} installed",
        products.len(),
        installed_count
    ));
    Ok(output)
}
