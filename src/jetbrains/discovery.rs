//! Locating the recent-projects record of an installed IDE
//!
//! IDEs keep one configuration folder per major version, e.g.
//! `~/Library/Application Support/JetBrains/GoLand2023.3/`. The record lives
//! in `options/recentProjects.xml` (Rider: `options/recentSolutions.xml`) of
//! the newest folder.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use super::product::Product;
use crate::error::{ProjectsError, Result};

pub const RECORD_FILES: &[&str] = &["recentProjects.xml", "recentSolutions.xml"];

/// Numeric version parsed from a folder suffix like `2023.3` or `4.1`
#[derive(Debug, Clone)]
pub struct FolderVersion(Vec<u32>);

impl FolderVersion {
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.split('.')
            .map(|part| part.parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }
}

impl Ord for FolderVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Missing components count as zero so 2023.1 == 2023.1.0
        let len = self.0.len().max(other.0.len());
        (0..len)
            .map(|i| {
                let a = self.0.get(i).copied().unwrap_or(0);
                let b = other.0.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for FolderVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FolderVersion {}

impl PartialOrd for FolderVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn should_ignore_folder(folder_name: &str) -> bool {
    folder_name.contains("backup")
}

/// Version of a configuration folder belonging to `product`
///
/// Returns None for other products' folders, including ones whose name
/// merely starts with the same prefix (`PyCharmCE2023.1` is not `PyCharm`).
pub fn folder_version(folder_name: &str, product: &Product) -> Option<FolderVersion> {
    if should_ignore_folder(folder_name) {
        return None;
    }
    let suffix = folder_name.strip_prefix(&product.folder_name)?;
    FolderVersion::parse(suffix)
}

/// All configuration folders for a product, newest first
pub fn find_preferences_folders(root: &Path, product: &Product) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(ProjectsError::Io {
                path: root.to_path_buf(),
                source,
            })
        }
    };

    let mut folders: Vec<(FolderVersion, PathBuf)> = entries
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            folder_version(&name, product).map(|v| (v, entry.path()))
        })
        .collect();

    folders.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    Ok(folders.into_iter().map(|(_, path)| path).collect())
}

pub fn latest_preferences_folder(root: &Path, product: &Product) -> Result<PathBuf> {
    find_preferences_folders(root, product)?
        .into_iter()
        .next()
        .ok_or_else(|| ProjectsError::NoPreferences {
            product: product.name().to_string(),
            root: root.to_path_buf(),
        })
}

/// Path to the recent-projects record inside a preferences folder
pub fn recent_projects_file_in(preferences_folder: &Path) -> Result<PathBuf> {
    let options = preferences_folder.join("options");
    let found = RECORD_FILES
        .iter()
        .map(|name| options.join(name))
        .find(|path| path.is_file());
    found.ok_or(ProjectsError::RecordNotFound { dir: options })
}

/// Locate the record of the newest installed version of `product`
pub fn find_recent_projects_file(root: &Path, product: &Product) -> Result<PathBuf> {
    let folder = latest_preferences_folder(root, product)?;
    tracing::debug!("Using preferences folder {}", folder.display());
    recent_projects_file_in(&folder)
}
