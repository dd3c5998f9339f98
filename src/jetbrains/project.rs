//! Projects as shown in the launcher

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::recent::RecentEntry;
use crate::config;

/// Characters that start a new word when abbreviating a project name
pub const BREAK_CHARACTERS: &[char] = &['_', '-', ' '];

/// File an IDE keeps a renamed project's display name in
pub const NAME_FILE: &str = ".idea/.name";

/// Query match quality, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    Abbreviation,
    Name,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    /// Path as recorded by the IDE, `~` for the home directory
    pub path: String,
    pub abbreviation: String,
    pub last_opened: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(path: &str, last_opened: Option<DateTime<Utc>>) -> Self {
        let name = custom_name(&config::expand_tilde(path))
            .unwrap_or_else(|| default_name(path).to_string());
        let abbreviation = abbreviate(&name);
        Self {
            name,
            path: path.to_string(),
            abbreviation,
            last_opened,
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.path.to_lowercase().contains(&query)
            || self.abbreviation.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
    }

    pub fn match_rank(&self, query: &str) -> MatchRank {
        let query = query.to_lowercase();
        if query == self.abbreviation.to_lowercase() {
            MatchRank::Abbreviation
        } else if self.name.to_lowercase().contains(&query) {
            MatchRank::Name
        } else {
            MatchRank::Other
        }
    }
}

impl AsRef<Project> for Project {
    fn as_ref(&self) -> &Project {
        self
    }
}

impl From<RecentEntry> for Project {
    fn from(entry: RecentEntry) -> Self {
        Self::new(&entry.path, entry.last_opened)
    }
}

/// Name from `.idea/.name`, if the project has one
fn custom_name(project_dir: &Path) -> Option<String> {
    let content = fs::read_to_string(project_dir.join(NAME_FILE)).ok()?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Last path component, or the whole path if it has none
fn default_name(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(path)
}

/// First character plus every character following a break character
///
/// `my-awesome-project` abbreviates to `map`.
pub fn abbreviate(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut abbreviation = String::from(first);
    let mut previous_was_break = false;
    for c in chars {
        if BREAK_CHARACTERS.contains(&c) {
            previous_was_break = true;
        } else if previous_was_break {
            abbreviation.push(c);
            previous_was_break = false;
        }
    }
    abbreviation
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("my-awesome-project"), "map");
        assert_eq!(abbreviate("spring-petclinic"), "sp");
        assert_eq!(abbreviate("snake_case__name"), "scn");
        assert_eq!(abbreviate("My Project (42)"), "MP(");
        assert_eq!(abbreviate("single"), "s");
        assert_eq!(abbreviate(""), "");
        assert_eq!(abbreviate("-leading"), "-");
    }

    #[test]
    fn test_default_name() {
        assert_eq!(default_name("~/Documents/spring-petclinic"), "spring-petclinic");
        assert_eq!(default_name("/srv/app/"), "app");
        assert_eq!(default_name("C:\\work\\game"), "game");
        assert_eq!(default_name("/"), "/");
    }

    #[test]
    fn test_get_project() {
        let project = Project::new("/nonexistent/Documents/spring-petclinic", None);
        assert_eq!(project.name, "spring-petclinic");
        assert_eq!(project.abbreviation, "sp");
        assert_eq!(project.path, "/nonexistent/Documents/spring-petclinic");
    }

    #[test]
    fn test_custom_name_from_idea_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".idea")).unwrap();
        fs::write(dir.path().join(NAME_FILE), "custom_project_name\n").unwrap();

        let project = Project::new(&dir.path().to_string_lossy(), None);
        assert_eq!(project.name, "custom_project_name");
        assert_eq!(project.abbreviation, "cpn");
    }

    #[test]
    fn test_blank_custom_name_ignored() {
        let dir = TempDir::new().unwrap();
        let project_dir = dir.path().join("fallback-name");
        fs::create_dir_all(project_dir.join(".idea")).unwrap();
        fs::write(project_dir.join(NAME_FILE), "  \n").unwrap();

        let project = Project::new(&project_dir.to_string_lossy(), None);
        assert_eq!(project.name, "fallback-name");
    }

    #[test]
    fn test_initials_prefix_matches() {
        let project = Project::new("/nonexistent/my-awesome-project", None);
        assert!(project.matches_query("map"));
        assert!(project.matches_query("ma"));
        assert!(project.matches_query("MAP"));
        assert!(project.matches_query("awesome"));
        assert!(project.matches_query("nonexistent"));
        assert!(!project.matches_query("xyz"));
    }

    #[test]
    fn test_project_match_rank() {
        let project = Project::new("/nonexistent/Documents/spring-petclinic", None);
        assert_eq!(project.match_rank("sp"), MatchRank::Abbreviation);
        assert_eq!(project.match_rank("spring-petclinic"), MatchRank::Name);
        assert_eq!(project.match_rank("Documents"), MatchRank::Other);
        assert!(MatchRank::Abbreviation < MatchRank::Name);
        assert!(MatchRank::Name < MatchRank::Other);
    }

    #[test]
    fn test_project_equals() {
        let a = Project::new("/nonexistent/Documents/spring-petclinic", None);
        let b = Project::new("/nonexistent/Documents/spring-petclinic", None);
        assert_eq!(a, b);
        assert_ne!(a, Project::new("/nonexistent/other", None));
    }
}
