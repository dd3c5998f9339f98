//! Known JetBrains products
//!
//! Each product names the folder prefix its versioned configuration
//! directories use, e.g. `PyCharm2023.3` for `PyCharm`.

use serde::Deserialize;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::error::{ProjectsError, Result};

pub const DEFAULT_VENDOR: &str = "JetBrains";

/// Product fields as they appear in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductSpec {
    pub folder_name: String,
    pub bundle_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub preferences_path: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Identifier used on the command line and by the launcher
    pub keyword: String,
    /// Prefix of the versioned configuration folders
    pub folder_name: String,
    /// macOS bundle identifier
    pub bundle_id: String,
    pub display_name: Option<String>,
    /// Directory under the platform config dir holding the product folders
    pub vendor: String,
    /// Explicit preferences directory, bypassing the vendor lookup
    pub preferences_path: Option<String>,
    /// Launcher command used where `open -b` is unavailable
    pub command: Option<String>,
}

impl Product {
    pub fn from_spec(keyword: &str, spec: ProductSpec) -> Self {
        Self {
            keyword: keyword.to_string(),
            folder_name: spec.folder_name,
            bundle_id: spec.bundle_id,
            display_name: spec.display_name,
            vendor: spec.vendor.unwrap_or_else(|| DEFAULT_VENDOR.to_string()),
            preferences_path: spec.preferences_path,
            command: spec.command,
        }
    }

    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.folder_name)
    }

    /// Command to launch the IDE with outside macOS
    pub fn launcher_command(&self) -> &str {
        self.command.as_deref().unwrap_or(&self.keyword)
    }

    /// Directory that holds this product's versioned configuration folders
    pub fn preferences_root(&self, config: &Config) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.preferences_path {
            return Ok(config::expand_tilde(path));
        }
        if self.vendor == DEFAULT_VENDOR {
            if let Some(root) = config.preferences_root_override() {
                return Ok(root);
            }
        }
        config::vendor_config_dir(&self.vendor)
    }
}

// (keyword, folder_name, bundle_id, display_name, vendor, command)
const BUILTIN: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("androidstudio", "AndroidStudio", "com.google.android.studio", "Android Studio", "Google", "studio"),
    ("appcode", "AppCode", "com.jetbrains.AppCode", "AppCode", DEFAULT_VENDOR, "appcode"),
    ("aqua", "Aqua", "com.jetbrains.aqua", "Aqua", DEFAULT_VENDOR, "aqua"),
    ("clion", "CLion", "com.jetbrains.CLion", "CLion", DEFAULT_VENDOR, "clion"),
    ("datagrip", "DataGrip", "com.jetbrains.datagrip", "DataGrip", DEFAULT_VENDOR, "datagrip"),
    ("dataspell", "DataSpell", "com.jetbrains.dataspell", "DataSpell", DEFAULT_VENDOR, "dataspell"),
    ("goland", "GoLand", "com.jetbrains.goland", "GoLand", DEFAULT_VENDOR, "goland"),
    ("intellij", "IntelliJIdea", "com.jetbrains.intellij", "IntelliJ IDEA", DEFAULT_VENDOR, "idea"),
    ("intellijce", "IdeaIC", "com.jetbrains.intellij.ce", "IntelliJ IDEA CE", DEFAULT_VENDOR, "idea"),
    ("phpstorm", "PhpStorm", "com.jetbrains.PhpStorm", "PhpStorm", DEFAULT_VENDOR, "phpstorm"),
    ("pycharm", "PyCharm", "com.jetbrains.pycharm", "PyCharm", DEFAULT_VENDOR, "pycharm"),
    ("pycharmce", "PyCharmCE", "com.jetbrains.pycharm.ce", "PyCharm CE", DEFAULT_VENDOR, "pycharm"),
    ("rider", "Rider", "com.jetbrains.rider", "Rider", DEFAULT_VENDOR, "rider"),
    ("rubymine", "RubyMine", "com.jetbrains.rubymine", "RubyMine", DEFAULT_VENDOR, "rubymine"),
    ("rustrover", "RustRover", "com.jetbrains.rustrover", "RustRover", DEFAULT_VENDOR, "rustrover"),
    ("webstorm", "WebStorm", "com.jetbrains.WebStorm", "WebStorm", DEFAULT_VENDOR, "webstorm"),
    ("writerside", "Writerside", "com.jetbrains.writerside", "Writerside", DEFAULT_VENDOR, "writerside"),
];

/// Built-in products merged with the ones from the config file
///
/// Config entries replace built-ins with the same keyword. The result is
/// sorted by keyword.
pub fn all_products(config: &Config) -> Vec<Product> {
    let mut products: Vec<Product> = BUILTIN
        .iter()
        .filter(|(keyword, ..)| !config.products.contains_key(*keyword))
        .map(
            |&(keyword, folder_name, bundle_id, display_name, vendor, command)| Product {
                keyword: keyword.to_string(),
                folder_name: folder_name.to_string(),
                bundle_id: bundle_id.to_string(),
                display_name: Some(display_name.to_string()),
                vendor: vendor.to_string(),
                preferences_path: None,
                command: Some(command.to_string()),
            },
        )
        .collect();

    products.extend(
        config
            .products
            .iter()
            .map(|(keyword, spec)| Product::from_spec(keyword, spec.clone())),
    );
    products.sort_by(|a, b| a.keyword.cmp(&b.keyword));
    products
}

/// Look up a product by keyword
pub fn load_product(keyword: &str, config: &Config) -> Result<Product> {
    all_products(config)
        .into_iter()
        .find(|p| p.keyword == keyword)
        .ok_or_else(|| ProjectsError::UnknownProduct {
            keyword: keyword.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(folder_name: &str) -> ProductSpec {
        ProductSpec {
            folder_name: folder_name.to_string(),
            bundle_id: format!("com.example.{}", folder_name.to_lowercase()),
            display_name: None,
            vendor: None,
            preferences_path: None,
            command: None,
        }
    }

    #[test]
    fn test_load_builtin_product() {
        let clion = load_product("clion", &Config::default()).unwrap();
        assert_eq!(clion.folder_name, "CLion");
        assert_eq!(clion.bundle_id, "com.jetbrains.CLion");
        assert_eq!(clion.vendor, DEFAULT_VENDOR);
    }

    #[test]
    fn test_unknown_product() {
        let err = load_product("notepad", &Config::default()).unwrap_err();
        assert!(matches!(err, ProjectsError::UnknownProduct { .. }));
    }

    #[test]
    fn test_android_studio_uses_google_vendor() {
        let studio = load_product("androidstudio", &Config::default()).unwrap();
        assert_eq!(studio.vendor, "Google");
        assert_eq!(studio.name(), "Android Studio");
    }

    #[test]
    fn test_name_falls_back_to_folder_name() {
        let product = Product::from_spec("fleet", spec("Fleet"));
        assert_eq!(product.name(), "Fleet");
        assert_eq!(product.launcher_command(), "fleet");
        assert_eq!(product.vendor, DEFAULT_VENDOR);
    }

    #[test]
    fn test_config_overrides_builtin() {
        let mut config = Config::default();
        config.products.insert("goland".to_string(), spec("GoLandEAP"));
        config.products.insert("fleet".to_string(), spec("Fleet"));

        let products = all_products(&config);
        let goland: Vec<_> = products.iter().filter(|p| p.keyword == "goland").collect();
        assert_eq!(goland.len(), 1);
        assert_eq!(goland[0].folder_name, "GoLandEAP");
        assert!(products.iter().any(|p| p.keyword == "fleet"));

        let keywords: Vec<_> = products.iter().map(|p| p.keyword.as_str()).collect();
        let mut sorted = keywords.clone();
        sorted.sort();
        assert_eq!(keywords, sorted);
    }

    #[test]
    fn test_preferences_root_overrides() {
        let config = Config {
            preferences_root: Some("/srv/jetbrains".to_string()),
            ..Config::default()
        };
        let goland = load_product("goland", &config).unwrap();
        assert_eq!(
            goland.preferences_root(&config).unwrap(),
            PathBuf::from("/srv/jetbrains")
        );

        // Only JetBrains-vendored products follow the override
        let studio = load_product("androidstudio", &config).unwrap();
        if let Ok(root) = studio.preferences_root(&config) {
            assert!(root.ends_with("Google"));
        }

        let mut custom = Product::from_spec("fleet", spec("Fleet"));
        custom.preferences_path = Some("/opt/fleet".to_string());
        assert_eq!(
            custom.preferences_root(&config).unwrap(),
            PathBuf::from("/opt/fleet")
        );
    }
}
