//! HTML gallery generation.
//!
//! Loads the project list, sorts it newest first and renders one card per
//! project into the page's `#gallery-container`.
//!
//! ## Card Markup
//!
//! The slideshow runtime binds to these hooks, so they are stable:
//!
//! ```text
//! div.gallery-item[data-project=<id>][data-images=<JSON list>]
//! ├── div.image-container
//! │   ├── img.current-image          first image of the project
//! │   ├── button.nav-arrow.prev
//! │   ├── button.nav-arrow.next
//! │   └── div.dots
//! │       └── span.dot[data-index=<i>]   first one also .active
//! ├── a[href=<link>] > h3            anchor only when the project has a link
//! └── p.project-date                 "March 2024"
//! ```
//!
//! The container carries the slideshow timings as `data-autoplay-ms`,
//! `data-start-delay-ms`, `data-transition-ms` and `data-settle-ms`, read by
//! the embedded `static/slideshow.js` runtime.
//!
//! ## Failure
//!
//! If the project list cannot be read or parsed, the container holds a single
//! paragraph with the configured error message instead of cards. Rendering
//! happens in memory before anything is written, so there is never a partial
//! set of cards next to the message.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated values are escaped.

use crate::config::{self, GalleryConfig};
use crate::date::format_month_year;
use crate::projects::{self, ProjectsError};
use crate::types::Project;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Element id of the page container the cards are rendered into.
pub const CONTAINER_ID: &str = "gallery-container";

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/slideshow.js");

/// A rendered card, in page order.
#[derive(Debug, Clone, PartialEq)]
pub struct CardHandle {
    /// Value of the card's `data-project` attribute.
    pub project_id: String,
}

/// Markup for all cards plus the handles the slideshow attaches to.
#[derive(Debug)]
pub struct RenderedGallery {
    pub markup: Markup,
    pub cards: Vec<CardHandle>,
}

/// Result of a generate run.
#[derive(Debug)]
pub enum GalleryOutcome {
    /// Cards were rendered for every project, newest first.
    Rendered { projects: Vec<Project> },
    /// The project list could not be loaded; the error message was rendered.
    Unavailable { reason: ProjectsError },
}

/// Load projects from `projects_path` and write `output_dir/index.html`.
///
/// Project-list failures are not errors here: they produce the fallback page
/// and [`GalleryOutcome::Unavailable`]. Only failing to write the output is.
pub fn generate(
    projects_path: &Path,
    output_dir: &Path,
    config: &GalleryConfig,
) -> Result<GalleryOutcome, GenerateError> {
    let outcome = match projects::load_projects(projects_path) {
        Ok(mut projects) => {
            projects::sort_newest_first(&mut projects);
            info!(
                count = projects.len(),
                path = %projects_path.display(),
                "loaded projects"
            );
            GalleryOutcome::Rendered { projects }
        }
        Err(reason) => {
            error!(path = %projects_path.display(), %reason, "error loading projects");
            GalleryOutcome::Unavailable { reason }
        }
    };

    fs::create_dir_all(output_dir)?;
    let page = render_page(&outcome, config);
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, page.into_string())?;
    info!(path = %index_path.display(), "wrote gallery page");

    Ok(outcome)
}

/// Full stylesheet: config-driven custom properties followed by static rules.
pub fn stylesheet(config: &GalleryConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme, &config.slideshow),
        CSS_STATIC
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                // Config-authored CSS, not visitor content
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// The card's image list as the JSON array the slideshow runtime reads.
fn images_json(images: &[String]) -> String {
    serde_json::to_string(images).unwrap_or_else(|_| "[]".to_string())
}

/// Renders one project card.
pub fn render_card(project: &Project) -> Markup {
    html! {
        div.gallery-item
            data-project=(project.id)
            data-images=(images_json(&project.images)) {
            div.image-container {
                img.current-image src=[project.cover_image()] alt=(project.title);
                button.nav-arrow.prev aria-label="Previous image" { "‹" }
                button.nav-arrow.next aria-label="Next image" { "›" }
                div.dots {
                    @for i in 0..project.images.len() {
                        span.dot.active[i == 0] data-index=(i) {}
                    }
                }
            }
            @if let Some(link) = &project.link {
                a href=(link) {
                    h3 { (project.title) }
                }
            } @else {
                h3 { (project.title) }
            }
            p.project-date { (format_month_year(&project.date)) }
        }
    }
}

/// Renders cards for `projects` in the order given.
pub fn render_gallery(projects: &[Project]) -> RenderedGallery {
    let markup = html! {
        @for project in projects {
            (render_card(project))
        }
    };
    let cards = projects
        .iter()
        .map(|p| CardHandle {
            project_id: p.id.clone(),
        })
        .collect();
    RenderedGallery { markup, cards }
}

/// Renders the gallery container for a generate outcome.
pub fn render_container(outcome: &GalleryOutcome, config: &GalleryConfig) -> Markup {
    let timing = &config.slideshow;
    html! {
        div.gallery-grid id=(CONTAINER_ID)
            data-autoplay-ms=(timing.autoplay_interval_ms)
            data-start-delay-ms=(timing.start_delay_ms)
            data-transition-ms=(timing.transition_ms)
            data-settle-ms=(timing.settle_ms) {
            @match outcome {
                GalleryOutcome::Rendered { projects } => {
                    (render_gallery(projects).markup)
                }
                GalleryOutcome::Unavailable { .. } => {
                    p { (config.error_message) }
                }
            }
        }
    }
}

/// Renders the complete gallery page.
pub fn render_page(outcome: &GalleryOutcome, config: &GalleryConfig) -> Markup {
    let content = html! {
        header.site-header {
            h1 { (config.title) }
        }
        main.gallery-page {
            (render_container(outcome, config))
        }
    };
    base_document(&config.title, &stylesheet(config), content)
}

// ============================================================================
// Tests
// ============================================================================
