//! Project list loading.
//!
//! The project list is a JSON array of [`Project`] records. Loading is the
//! only failure that reaches a page visitor: [`crate::generate`] turns any
//! [`ProjectsError`] into the gallery's fixed error message.

use crate::date::parse_date;
use crate::types::Project;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and parse the project list at `path`.
pub fn load_projects(path: &Path) -> Result<Vec<Project>, ProjectsError> {
    let content = fs::read_to_string(path)?;
    parse_projects(&content)
}

/// Parse a project list from JSON text.
pub fn parse_projects(json: &str) -> Result<Vec<Project>, ProjectsError> {
    Ok(serde_json::from_str(json)?)
}

/// Sort projects newest first.
///
/// The sort is stable. Projects whose date cannot be parsed go after every
/// dated project, in their original order.
pub fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{project, project_ids};
    use tempfile::TempDir;

    #[test]
    fn parse_minimal_project() {
        let json = r#"[{"id": "a", "title": "A", "date": "2024-01-01", "images": ["1.jpg"]}]"#;
        let projects = parse_projects(json).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].link, None);
        assert_eq!(projects[0].images, vec!["1.jpg"]);
    }

    #[test]
    fn parse_missing_images_is_empty() {
        let json = r#"[{"id": "a", "title": "A", "date": "2024-01-01"}]"#;
        let projects = parse_projects(json).unwrap();
        assert!(projects[0].images.is_empty());
        assert_eq!(projects[0].cover_image(), None);
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let json = r#"[{"id": "a", "title": "A", "date": "2024", "images": [], "tags": ["x"]}]"#;
        assert!(parse_projects(json).is_ok());
    }

    #[test]
    fn parse_rejects_non_array() {
        let result = parse_projects(r#"{"id": "a"}"#);
        assert!(matches!(result, Err(ProjectsError::Json(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_projects(&tmp.path().join("projects.json"));
        assert!(matches!(result, Err(ProjectsError::Io(_))));
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.json");
        fs::write(
            &path,
            r#"[{"id": "a", "title": "A", "link": "https://a.example", "date": "2024-05", "images": ["1.jpg", "2.jpg"]}]"#,
        )
        .unwrap();
        let projects = load_projects(&path).unwrap();
        assert_eq!(projects[0].link.as_deref(), Some("https://a.example"));
        assert_eq!(projects[0].images.len(), 2);
    }

    #[test]
    fn sort_newest_first_orders_by_date() {
        let mut projects = vec![
            project("old", "2019-06-01", 1),
            project("new", "2024-02-10", 1),
            project("mid", "2021-11", 1),
        ];
        sort_newest_first(&mut projects);
        assert_eq!(project_ids(&projects), vec!["new", "mid", "old"]);
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let mut projects = vec![
            project("first", "2024-01-01", 1),
            project("second", "2024-01-01", 1),
        ];
        sort_newest_first(&mut projects);
        assert_eq!(project_ids(&projects), vec!["first", "second"]);
    }

    #[test]
    fn sort_puts_undated_last() {
        let mut projects = vec![
            project("undated-a", "someday", 1),
            project("dated", "2020-01-01", 1),
            project("undated-b", "", 1),
        ];
        sort_newest_first(&mut projects);
        assert_eq!(
            project_ids(&projects),
            vec!["dated", "undated-a", "undated-b"]
        );
    }
}
