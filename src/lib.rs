//! # Project Gallery
//!
//! Renders a list of projects as gallery cards and drives a slideshow on each
//! card: autoplay while the pointer is over it, directional slide
//! transitions, arrow and dot navigation.
//!
//! # Architecture
//!
//! ```text
//! projects.json ──▶ projects ──▶ generate ──▶ dist/index.html (+ slideshow.js)
//!                                   │
//!                                   └─ card handles ──▶ gallery ──▶ slideshow (one per card)
//!                                                          │
//!                                                          └─ timers (virtual clock)
//! ```
//!
//! Rendering is a pure function from a project list to markup. The
//! interactive half runs on a single-threaded, virtual-time event loop: every
//! suspension in a slideshow is a timer, so a whole browsing session can be
//! replayed deterministically from a script. The built page embeds
//! `static/slideshow.js`, which runs the same state machine in the browser
//! with the timings from `gallery.toml`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`projects`] | Loads `projects.json` and sorts it newest first |
//! | [`date`] | Lenient date parsing and "Month Year" captions |
//! | [`generate`] | Renders cards and the page with Maud, writes `index.html` |
//! | [`slideshow`] | Per-card state machine: navigation, transitions, autoplay |
//! | [`view`] | What a card shows at any instant: image layers and dots |
//! | [`timers`] | Deterministic `setTimeout` / `setInterval` queue |
//! | [`gallery`] | Attaches slideshows to rendered cards, routes events and timers |
//! | [`script`] | Text format for scripted interaction sessions |
//! | [`config`] | `gallery.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types (`Project`, `Direction`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Dropped, Not Queued
//!
//! A card accepts navigation only while idle. Clicks or autoplay ticks that
//! arrive during a slide are discarded, which keeps at most one transition
//! per card in flight and makes the state machine two states wide.
//!
//! ## Fixed Settle Delay
//!
//! A transition ends when its settle timer fires, not when an animation
//! reports completion. The delay is configurable and validated to cover the
//! start delay plus the animation itself.
//!
//! ## All-or-Nothing Container
//!
//! The page is rendered in memory and written once. When the project list
//! cannot be loaded the container holds only the error message; there is no
//! partial gallery next to it.

pub mod config;
pub mod date;
pub mod gallery;
pub mod generate;
pub mod output;
pub mod projects;
pub mod script;
pub mod slideshow;
pub mod timers;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
