//! Per-card slideshow state machine.
//!
//! Each rendered card gets one [`SlideshowController`]. It owns the card's
//! navigation state, its autoplay timer, and the [`CardView`] it animates.
//!
//! ## States
//!
//! ```text
//!            next / prev / select_dot
//!   Idle(i) ──────────────────────────▶ Transitioning(i, j, dir)
//!      ▲                                        │
//!      └──────────── settle timer ──────────────┘
//! ```
//!
//! Navigation is only accepted from `Idle`. Anything requested while a slide
//! is in flight is dropped, never queued, so two slides cannot overlap.
//!
//! ## Timers
//!
//! A slide schedules two one-shot timers: `BeginSlide` after
//! `start_delay_ms` (the layers are staged off-screen first, then animated)
//! and `Settle` after `settle_ms`, which ends the transition. The settle
//! timer is a fixed delay, not an animation-finished signal.
//!
//! Autoplay is an interval timer firing `next()`. Starting autoplay always
//! clears the previous timer, so a card has at most one live autoplay timer.
//! Manual navigation restarts it; pointer-leave stops it and jumps back to
//! the first image without animating.

use crate::config::SlideshowSettings;
use crate::timers::{Scheduler, TimerId};
use crate::types::Direction;
use crate::view::CardView;
use tracing::debug;

/// Navigation state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Idle {
        index: usize,
    },
    Transitioning {
        from: usize,
        to: usize,
        direction: Direction,
    },
}

/// What a card timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Autoplay,
    BeginSlide,
    Settle,
}

/// Timer payload: which card, which timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTimer {
    pub card: usize,
    pub kind: TimerKind,
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    SelectDot(usize),
    JumpTo(usize),
}

/// A pointer or click interaction on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    PrevClick,
    NextClick,
    DotClick(usize),
    PointerEnter,
    PointerLeave,
}

/// Observable result of an action or timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    /// A slide began moving from `from` to `to`.
    Started {
        from: usize,
        to: usize,
        direction: Direction,
    },
    /// A slide finished; the card is idle at `index`.
    Settled { index: usize },
    /// The main image was swapped without animation.
    Jumped { from: usize, to: usize },
    /// The action arrived mid-transition and was discarded.
    Dropped { action: Action },
    /// The action would not change anything.
    Ignored { action: Action },
    AutoplayStarted,
    AutoplayStopped,
}

/// Slideshow for a single card.
#[derive(Debug)]
pub struct SlideshowController {
    card: usize,
    project_id: String,
    images: Vec<String>,
    settings: SlideshowSettings,
    state: SlideState,
    autoplay: Option<TimerId>,
    view: CardView,
}

impl SlideshowController {
    /// Attach a controller to card number `card`.
    ///
    /// Returns `None` for a project without images; such a card stays static.
    pub fn attach(
        card: usize,
        project_id: &str,
        images: Vec<String>,
        settings: SlideshowSettings,
    ) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let view = CardView::new(&images);
        Some(Self {
            card,
            project_id: project_id.to_string(),
            images,
            settings,
            state: SlideState::Idle { index: 0 },
            autoplay: None,
            view,
        })
    }

    pub fn card(&self) -> usize {
        self.card
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    pub fn view(&self) -> &CardView {
        &self.view
    }

    /// Index of the image being shown, or being slid in.
    pub fn current_index(&self) -> usize {
        match self.state {
            SlideState::Idle { index } => index,
            SlideState::Transitioning { to, .. } => to,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, SlideState::Transitioning { .. })
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    fn timer(&self, kind: TimerKind) -> CardTimer {
        CardTimer {
            card: self.card,
            kind,
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Slide to the following image, wrapping to the first.
    pub fn next<S: Scheduler<CardTimer>>(&mut self, scheduler: &mut S) -> SlideEvent {
        let target = (self.current_index() + 1) % self.images.len();
        self.slide_to(Action::Next, target, Direction::Next, scheduler)
    }

    /// Slide to the preceding image, wrapping to the last.
    pub fn prev<S: Scheduler<CardTimer>>(&mut self, scheduler: &mut S) -> SlideEvent {
        let n = self.images.len();
        let target = (self.current_index() + n - 1) % n;
        self.slide_to(Action::Prev, target, Direction::Prev, scheduler)
    }

    /// Slide to image `index`, in the direction of travel along the dots.
    pub fn select_dot<S: Scheduler<CardTimer>>(
        &mut self,
        index: usize,
        scheduler: &mut S,
    ) -> SlideEvent {
        let action = Action::SelectDot(index);
        if self.is_animating() {
            return self.drop_action(action);
        }
        let current = self.current_index();
        if index == current || index >= self.images.len() {
            return SlideEvent::Ignored { action };
        }
        let direction = if index > current {
            Direction::Next
        } else {
            Direction::Prev
        };
        self.slide_to(action, index, direction, scheduler)
    }

    /// Show image `index` immediately, without a transition.
    pub fn jump_to(&mut self, index: usize) -> SlideEvent {
        let action = Action::JumpTo(index);
        if self.is_animating() {
            return self.drop_action(action);
        }
        let from = self.current_index();
        if index == from || index >= self.images.len() {
            return SlideEvent::Ignored { action };
        }
        self.state = SlideState::Idle { index };
        self.view.activate_dot(index);
        self.view.swap(&self.images[index]);
        debug!(card = self.card, from, to = index, "slideshow: jump");
        SlideEvent::Jumped { from, to: index }
    }

    fn drop_action(&self, action: Action) -> SlideEvent {
        debug!(card = self.card, ?action, "slideshow: dropped during transition");
        SlideEvent::Dropped { action }
    }

    fn slide_to<S: Scheduler<CardTimer>>(
        &mut self,
        action: Action,
        to: usize,
        direction: Direction,
        scheduler: &mut S,
    ) -> SlideEvent {
        let from = match self.state {
            SlideState::Idle { index } => index,
            SlideState::Transitioning { .. } => return self.drop_action(action),
        };
        // Single-image cards wrap onto themselves
        if to == from {
            return SlideEvent::Ignored { action };
        }

        self.state = SlideState::Transitioning {
            from,
            to,
            direction,
        };
        self.view.activate_dot(to);
        self.view.stage_slide(&self.images[to], direction);
        scheduler.set_timeout(self.settings.start_delay_ms, self.timer(TimerKind::BeginSlide));
        scheduler.set_timeout(self.settings.settle_ms, self.timer(TimerKind::Settle));

        debug!(card = self.card, from, to, %direction, "slideshow: slide started");
        SlideEvent::Started {
            from,
            to,
            direction,
        }
    }

    // ------------------------------------------------------------------------
    // Autoplay
    // ------------------------------------------------------------------------

    /// (Re)start the autoplay interval. Any previous timer is cleared first.
    pub fn start_autoplay<S: Scheduler<CardTimer>>(&mut self, scheduler: &mut S) -> SlideEvent {
        if let Some(id) = self.autoplay.take() {
            scheduler.clear(id);
        }
        let id = scheduler.set_interval(
            self.settings.autoplay_interval_ms,
            self.timer(TimerKind::Autoplay),
        );
        self.autoplay = Some(id);
        SlideEvent::AutoplayStarted
    }

    /// Stop autoplay. Returns `None` when it was not running.
    pub fn stop_autoplay<S: Scheduler<CardTimer>>(
        &mut self,
        scheduler: &mut S,
    ) -> Option<SlideEvent> {
        let id = self.autoplay.take()?;
        scheduler.clear(id);
        Some(SlideEvent::AutoplayStopped)
    }

    // ------------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------------

    /// Handle a pointer or click interaction.
    pub fn handle<S: Scheduler<CardTimer>>(
        &mut self,
        interaction: Interaction,
        scheduler: &mut S,
    ) -> Vec<SlideEvent> {
        match interaction {
            Interaction::PrevClick => self.manual(Action::Prev, scheduler),
            Interaction::NextClick => self.manual(Action::Next, scheduler),
            Interaction::DotClick(index) => self.manual(Action::SelectDot(index), scheduler),
            Interaction::PointerEnter => vec![self.start_autoplay(scheduler)],
            Interaction::PointerLeave => {
                let mut events: Vec<SlideEvent> =
                    self.stop_autoplay(scheduler).into_iter().collect();
                if self.current_index() != 0 {
                    events.push(self.jump_to(0));
                }
                events
            }
        }
    }

    /// Manual navigation: pauses autoplay around the action and restarts it.
    fn manual<S: Scheduler<CardTimer>>(
        &mut self,
        action: Action,
        scheduler: &mut S,
    ) -> Vec<SlideEvent> {
        if self.is_animating() {
            return vec![self.drop_action(action)];
        }
        let current = self.current_index();
        if matches!(action, Action::SelectDot(index) if index == current) {
            return vec![SlideEvent::Ignored { action }];
        }

        let mut events: Vec<SlideEvent> = self.stop_autoplay(scheduler).into_iter().collect();
        events.push(match action {
            Action::Next => self.next(scheduler),
            Action::Prev => self.prev(scheduler),
            Action::SelectDot(index) => self.select_dot(index, scheduler),
            Action::JumpTo(index) => self.jump_to(index),
        });
        events.push(self.start_autoplay(scheduler));
        events
    }

    /// Handle one of this card's timers firing.
    pub fn on_timer<S: Scheduler<CardTimer>>(
        &mut self,
        kind: TimerKind,
        scheduler: &mut S,
    ) -> Option<SlideEvent> {
        match kind {
            TimerKind::Autoplay => Some(self.next(scheduler)),
            TimerKind::BeginSlide => {
                if let SlideState::Transitioning { direction, .. } = self.state {
                    self.view
                        .begin_slide(direction, self.settings.transition_ms);
                }
                None
            }
            TimerKind::Settle => {
                let SlideState::Transitioning { to, .. } = self.state else {
                    return None;
                };
                self.view.settle(&self.images[to]);
                self.state = SlideState::Idle { index: to };
                debug!(card = self.card, index = to, "slideshow: settled");
                Some(SlideEvent::Settled { index: to })
            }
        }
    }
}
