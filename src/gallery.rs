//! Gallery runtime: one slideshow per rendered card on a shared event loop.
//!
//! [`Gallery::attach`] walks the rendered cards in page order and looks up
//! each card's images by its `data-project` id. Cards whose project has no
//! images stay static. All controllers share one [`TimerQueue`]; the owner
//! drives time forward with [`Gallery::advance_by`] and feeds pointer and
//! click interactions through [`Gallery::interact`].
//!
//! Cards never share state. A timer carries the index of the card that
//! scheduled it and is routed back to that card only.

use crate::config::SlideshowSettings;
use crate::generate::CardHandle;
use crate::slideshow::{CardTimer, Interaction, SlideEvent, SlideshowController};
use crate::timers::{Scheduler, TimerQueue};
use crate::types::Project;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum GalleryError {
    #[error("No slideshow attached to card {0}")]
    UnknownCard(usize),
    #[error("No slideshow attached for project '{0}'")]
    UnknownProject(String),
}

/// A slideshow event stamped with when and where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEvent {
    pub at_ms: u64,
    pub card: usize,
    pub project_id: String,
    pub event: SlideEvent,
}

/// Every attached slideshow plus the timer queue they share.
#[derive(Debug)]
pub struct Gallery {
    slideshows: Vec<SlideshowController>,
    timers: TimerQueue<CardTimer>,
    log: Vec<GalleryEvent>,
}

impl Gallery {
    /// Attach a slideshow to each rendered card that has images.
    ///
    /// Card numbers are positions in `cards`. If several projects share an
    /// id, the last one's images win.
    pub fn attach(cards: &[CardHandle], projects: &[Project], settings: SlideshowSettings) -> Self {
        let images_by_id: HashMap<&str, &[String]> = projects
            .iter()
            .map(|p| (p.id.as_str(), p.images.as_slice()))
            .collect();

        let slideshows: Vec<_> = cards
            .iter()
            .enumerate()
            .filter_map(|(card, handle)| {
                let images = images_by_id.get(handle.project_id.as_str())?;
                SlideshowController::attach(card, &handle.project_id, images.to_vec(), settings)
            })
            .collect();
        debug!(
            cards = cards.len(),
            attached = slideshows.len(),
            "gallery: slideshows attached"
        );

        Self {
            slideshows,
            timers: TimerQueue::new(),
            log: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    pub fn slideshows(&self) -> &[SlideshowController] {
        &self.slideshows
    }

    /// The slideshow attached to card number `card`.
    pub fn slideshow(&self, card: usize) -> Option<&SlideshowController> {
        self.slideshows.iter().find(|s| s.card() == card)
    }

    /// Card number of the first card showing `project_id`.
    pub fn card_for_project(&self, project_id: &str) -> Result<usize, GalleryError> {
        self.slideshows
            .iter()
            .find(|s| s.project_id() == project_id)
            .map(SlideshowController::card)
            .ok_or_else(|| GalleryError::UnknownProject(project_id.to_string()))
    }

    fn position(&self, card: usize) -> Result<usize, GalleryError> {
        self.slideshows
            .iter()
            .position(|s| s.card() == card)
            .ok_or(GalleryError::UnknownCard(card))
    }

    fn record(&mut self, pos: usize, events: impl IntoIterator<Item = SlideEvent>) {
        let at_ms = self.timers.now();
        let slideshow = &self.slideshows[pos];
        for event in events {
            self.log.push(GalleryEvent {
                at_ms,
                card: slideshow.card(),
                project_id: slideshow.project_id().to_string(),
                event,
            });
        }
    }

    /// Deliver a pointer or click interaction to card number `card`.
    pub fn interact(
        &mut self,
        card: usize,
        interaction: Interaction,
    ) -> Result<Vec<SlideEvent>, GalleryError> {
        let pos = self.position(card)?;
        let events = self.slideshows[pos].handle(interaction, &mut self.timers);
        self.record(pos, events.iter().copied());
        Ok(events)
    }

    /// Advance virtual time by `ms`, firing every timer that comes due.
    ///
    /// The clock stops at `u64::MAX`. With autoplay running every interval
    /// tick is logged, so callers bound `ms` (see [`crate::script::MAX_WAIT_MS`]).
    pub fn advance_by(&mut self, ms: u64) {
        let deadline = self.timers.now().saturating_add(ms);
        while let Some(fired) = self.timers.pop_due(deadline) {
            let CardTimer { card, kind } = fired.payload;
            let Ok(pos) = self.position(card) else {
                continue;
            };
            let event = self.slideshows[pos].on_timer(kind, &mut self.timers);
            self.record(pos, event);
        }
        self.timers.advance_clock(deadline);
    }

    /// Drain the event log.
    pub fn take_events(&mut self) -> Vec<GalleryEvent> {
        std::mem::take(&mut self.log)
    }
}
