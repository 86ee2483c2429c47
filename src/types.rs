//! Shared types used by the loader, the renderer and the slideshow runtime.

use serde::{Deserialize, Serialize};

/// One entry of `projects.json`.
///
/// ```json
/// {
///   "id": "harbor-lights",
///   "title": "Harbor Lights",
///   "link": "https://example.com/harbor",
///   "date": "2024-03-15",
///   "images": ["img/harbor/1.jpg", "img/harbor/2.jpg"]
/// }
/// ```
///
/// `date` is kept as written; see [`crate::date`] for how it is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub date: String,
    /// Image locations in slideshow order. A missing array loads as empty.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    /// The image shown when the card is first rendered.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Slide direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Next => f.write_str("next"),
            Direction::Prev => f.write_str("prev"),
        }
    }
}
