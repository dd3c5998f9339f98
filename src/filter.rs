//! Query filtering

use crate::jetbrains::Project;

/// Keep projects matching `query`, best match first
///
/// The sort is stable, so projects of equal rank stay in recency order.
/// An empty query returns every project unchanged.
pub fn filter_and_sort<T: AsRef<Project>>(query: &str, projects: Vec<T>) -> Vec<T> {
    let query = query.trim();
    if query.is_empty() {
        return projects;
    }
    let mut results: Vec<T> = projects
        .into_iter()
        .filter(|p| p.as_ref().matches_query(query))
        .collect();
    results.sort_by_key(|p| p.as_ref().match_rank(query));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(paths: &[&str]) -> Vec<Project> {
        paths.iter().map(|p| Project::new(p, None)).collect()
    }

    fn names(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_filter_projects() {
        let all = projects(&[
            "/nonexistent/Documents/spring-petclinic",
            "/nonexistent/Desktop/trash/My Project (42)",
        ]);
        let filtered = filter_and_sort("petclinic", all.clone());
        assert_eq!(filtered, vec![all[0].clone()]);
    }

    #[test]
    fn test_filter_projects_no_query() {
        let all = projects(&["/nonexistent/a", "/nonexistent/b"]);
        assert_eq!(filter_and_sort("", all.clone()), all);
        assert_eq!(filter_and_sort("   ", all.clone()), all);
    }

    #[test]
    fn test_initials_query_finds_project() {
        let all = projects(&["/nonexistent/backend", "/nonexistent/my-awesome-project"]);
        assert_eq!(names(&filter_and_sort("map", all)), vec!["my-awesome-project"]);
    }

    #[test]
    fn test_rank_order_then_recency() {
        // Input is in recency order
        let all = projects(&[
            "/nonexistent/sp/recent-path-match",
            "/nonexistent/spaceship",
            "/nonexistent/spring-petclinic",
            "/nonexistent/old-spa",
        ]);
        let filtered = filter_and_sort("sp", all);
        assert_eq!(
            names(&filtered),
            vec!["spring-petclinic", "spaceship", "old-spa", "recent-path-match"]
        );
    }

    #[test]
    fn test_no_matches() {
        let all = projects(&["/nonexistent/alpha"]);
        assert!(filter_and_sort("zzz", all).is_empty());
    }
}
