//! Shared test utilities for the project-gallery test suite.
//!
//! Builders for sample projects and small HTML lookups used by the renderer,
//! runtime and output tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let projects = vec![project("harbor", "2024-03-15", 6)];
//! let html = render_page(&outcome, &config).into_string();
//! assert_eq!(container_inner(&html), "<p>Error loading gallery. Please refresh the page.</p>");
//! ```

use crate::generate::CONTAINER_ID;
use crate::types::Project;

// =========================================================================
// Project builders
// =========================================================================

/// A project with `image_count` images named `img/<id>/<n>.jpg`.
///
/// The title is `"<id> title"` so tests can tell ids and titles apart.
pub fn project(id: &str, date: &str, image_count: usize) -> Project {
    Project {
        id: id.to_string(),
        title: format!("{id} title"),
        link: None,
        date: date.to_string(),
        images: (0..image_count)
            .map(|i| format!("img/{id}/{i}.jpg"))
            .collect(),
    }
}

/// A two-image project dated March 2024 with an external link.
pub fn project_with_link(id: &str, link: &str) -> Project {
    Project {
        link: Some(link.to_string()),
        ..project(id, "2024-03-15", 2)
    }
}

/// Ids in order.
pub fn project_ids(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

// =========================================================================
// HTML lookups
// =========================================================================

/// Inner HTML of the gallery container. Panics if the container is missing.
///
/// Works on a full page or on the container element alone, relying on maud
/// emitting no whitespace between tags.
pub fn container_inner(html: &str) -> &str {
    let marker = format!(r#"id="{CONTAINER_ID}""#);
    let attr = html
        .find(&marker)
        .unwrap_or_else(|| panic!("no #{CONTAINER_ID} in: {html}"));
    let open_end = attr + html[attr..].find('>').expect("unterminated container tag") + 1;
    let rest = &html[open_end..];
    let scope = match rest.find("</main>") {
        Some(end) => &rest[..end],
        None => rest,
    };
    let close = scope.rfind("</div>").expect("container not closed");
    &scope[..close]
}
