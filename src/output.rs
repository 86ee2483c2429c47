//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Projects
//! 001 Harbor Lights (6 images)
//!     Id: harbor-lights
//!     Date: March 2024
//!     Link: https://example.com/harbor
//! 002 Field Notes (no images)
//!     Id: field-notes
//!     Date: Invalid Date
//! ==> 2 projects are valid
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html → dist/index.html
//!     001 Harbor Lights (6 images)
//!     002 Field Notes (no images)
//! Generated 2 cards
//! ```
//!
//! ## Simulate
//!
//! ```text
//!      0ms  harbor-lights  autoplay started
//!   3000ms  harbor-lights  slide 0 → 1 (next)
//!   3450ms  harbor-lights  settled at 1
//! ==> harbor-lights at image 2 of 6
//! ```

use crate::date::format_month_year;
use crate::gallery::GalleryEvent;
use crate::generate::GalleryOutcome;
use crate::slideshow::{Action, SlideEvent, SlideshowController};
use crate::types::Project;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Positional index + title + image count.
///
/// ```text
/// 001 Harbor Lights (6 images)
/// 002 Field Notes (1 image)
/// 003 Sketches (no images)
/// ```
fn project_header(index: usize, project: &Project) -> String {
    let count = match project.images.len() {
        0 => "no images".to_string(),
        1 => "1 image".to_string(),
        n => format!("{} images", n),
    };
    format!("{} {} ({})", format_index(index), project.title, count)
}

// ============================================================================
// Check
// ============================================================================

/// Format the project inventory in page order.
pub fn format_check_output(projects: &[Project]) -> Vec<String> {
    let mut lines = vec!["Projects".to_string()];
    for (i, project) in projects.iter().enumerate() {
        lines.push(project_header(i + 1, project));
        lines.push(format!("{}Id: {}", indent(1), project.id));
        lines.push(format!(
            "{}Date: {}",
            indent(1),
            format_month_year(&project.date)
        ));
        if let Some(link) = &project.link {
            lines.push(format!("{}Link: {}", indent(1), link));
        }
    }
    lines.push(match projects.len() {
        1 => "==> 1 project is valid".to_string(),
        n => format!("==> {} projects are valid", n),
    });
    lines
}

/// Print the project inventory to stdout.
pub fn print_check_output(projects: &[Project]) {
    for line in format_check_output(projects) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the result of a build.
pub fn format_build_output(outcome: &GalleryOutcome, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "index.html \u{2192} {}",
        output_dir.join("index.html").display()
    )];
    match outcome {
        GalleryOutcome::Rendered { projects } => {
            for (i, project) in projects.iter().enumerate() {
                lines.push(format!("{}{}", indent(1), project_header(i + 1, project)));
            }
            let noun = if projects.len() == 1 { "card" } else { "cards" };
            lines.push(format!("Generated {} {}", projects.len(), noun));
        }
        GalleryOutcome::Unavailable { reason } => {
            lines.push(format!("{}Gallery unavailable: {}", indent(1), reason));
            lines.push("Generated error page".to_string());
        }
    }
    lines
}

/// Print the result of a build to stdout.
pub fn print_build_output(outcome: &GalleryOutcome, output_dir: &Path) {
    for line in format_build_output(outcome, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Simulate
// ============================================================================

fn describe_action(action: &Action) -> String {
    match action {
        Action::Next => "next".to_string(),
        Action::Prev => "prev".to_string(),
        Action::SelectDot(i) => format!("dot {}", i),
        Action::JumpTo(i) => format!("jump to {}", i),
    }
}

fn describe_event(event: &SlideEvent) -> String {
    match event {
        SlideEvent::Started {
            from,
            to,
            direction,
        } => format!("slide {} \u{2192} {} ({})", from, to, direction),
        SlideEvent::Settled { index } => format!("settled at {}", index),
        SlideEvent::Jumped { from, to } => format!("jump {} \u{2192} {}", from, to),
        SlideEvent::Dropped { action } => {
            format!("dropped {} (transition running)", describe_action(action))
        }
        SlideEvent::Ignored { action } => format!("ignored {}", describe_action(action)),
        SlideEvent::AutoplayStarted => "autoplay started".to_string(),
        SlideEvent::AutoplayStopped => "autoplay stopped".to_string(),
    }
}

/// Format one slideshow event as a time-stamped line.
pub fn format_gallery_event(event: &GalleryEvent) -> String {
    format!(
        "{:>6}ms  {}  {}",
        event.at_ms,
        event.project_id,
        describe_event(&event.event)
    )
}

/// Where a slideshow has ended up, 1-based. Mid-slide this is the target.
pub fn format_slideshow_position(slideshow: &SlideshowController) -> String {
    format!(
        "==> {} at image {} of {}",
        slideshow.project_id(),
        slideshow.current_index() + 1,
        slideshow.image_count()
    )
}

/// Format a simulate run: the event log, then the card's final position.
pub fn format_simulate_output(
    events: &[GalleryEvent],
    slideshow: &SlideshowController,
) -> Vec<String> {
    let mut lines: Vec<String> = events.iter().map(format_gallery_event).collect();
    lines.push(format_slideshow_position(slideshow));
    lines
}

/// Print a simulate run to stdout.
pub fn print_simulate_output(events: &[GalleryEvent], slideshow: &SlideshowController) {
    for line in format_simulate_output(events, slideshow) {
        println!("{}", line);
    }
}
