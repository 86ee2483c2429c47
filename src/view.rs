//! Presentation model of one gallery card.
//!
//! Mirrors the parts of a rendered card the slideshow touches: the main
//! `img.current-image`, the overlay image inserted on attach, and the
//! indicator dots. The controller mutates it exactly the way a browser
//! runtime would mutate the corresponding elements, so tests can assert on
//! what a visitor would see at any instant.

use crate::types::Direction;

/// Horizontal offset as a percentage of the container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateX(pub i32);

impl TranslateX {
    pub const CENTER: TranslateX = TranslateX(0);

    /// Off-screen position on the side a slide comes in from.
    pub fn entering(direction: Direction) -> Self {
        match direction {
            Direction::Next => TranslateX(100),
            Direction::Prev => TranslateX(-100),
        }
    }

    /// Off-screen position on the side a slide leaves towards.
    pub fn leaving(direction: Direction) -> Self {
        match direction {
            Direction::Next => TranslateX(-100),
            Direction::Prev => TranslateX(100),
        }
    }

    pub fn to_css(self) -> String {
        format!("translateX({}%)", self.0)
    }
}

/// CSS transition applied to an image's transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    None,
    Slide {
        duration_ms: u64,
    },
}

impl Transition {
    pub fn to_css(self) -> String {
        match self {
            Transition::None => "none".to_string(),
            Transition::Slide { duration_ms } => {
                format!("transform {}s ease-in-out", duration_ms as f64 / 1000.0)
            }
        }
    }
}

/// One `<img>` element's observable state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageLayer {
    pub src: String,
    pub transform: TranslateX,
    pub transition: Transition,
    pub visible: bool,
    pub z_index: u8,
}

impl ImageLayer {
    /// Inline style a browser runtime would carry for this layer.
    pub fn style(&self) -> String {
        format!(
            "transform: {}; transition: {}; opacity: {}; z-index: {};",
            self.transform.to_css(),
            self.transition.to_css(),
            if self.visible { 1 } else { 0 },
            self.z_index
        )
    }
}

/// Observable state of a card's image container.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub main: ImageLayer,
    pub overlay: ImageLayer,
    dots: Vec<bool>,
}

impl CardView {
    /// Card as rendered: first image shown, first dot active, overlay hidden.
    pub fn new(images: &[String]) -> Self {
        let mut dots = vec![false; images.len()];
        if let Some(first) = dots.first_mut() {
            *first = true;
        }
        Self {
            main: ImageLayer {
                src: images.first().cloned().unwrap_or_default(),
                visible: true,
                ..ImageLayer::default()
            },
            overlay: ImageLayer::default(),
            dots,
        }
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        self.dots.get(index).copied().unwrap_or(false)
    }

    /// The active dot, if exactly one is active.
    pub fn active_dot(&self) -> Option<usize> {
        let mut active = self.dots.iter().enumerate().filter(|(_, on)| **on);
        match (active.next(), active.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    /// Mark `index` active and every other dot inactive.
    pub fn activate_dot(&mut self, index: usize) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            *dot = i == index;
        }
    }

    /// Stage a slide: overlay carries the incoming image just off-screen.
    pub fn stage_slide(&mut self, incoming: &str, direction: Direction) {
        self.overlay.src = incoming.to_string();
        self.overlay.visible = true;
        self.overlay.z_index = 1;
        self.main.transform = TranslateX::CENTER;
        self.overlay.transform = TranslateX::entering(direction);
    }

    /// Start the slide: both layers animate towards their end positions.
    pub fn begin_slide(&mut self, direction: Direction, duration_ms: u64) {
        let transition = Transition::Slide { duration_ms };
        self.main.transition = transition;
        self.overlay.transition = transition;
        self.main.transform = TranslateX::leaving(direction);
        self.overlay.transform = TranslateX::CENTER;
    }

    /// Finish the slide: main image takes the new source, overlay resets.
    pub fn settle(&mut self, src: &str) {
        self.main.src = src.to_string();
        self.main.transform = TranslateX::CENTER;
        self.main.transition = Transition::None;
        self.overlay.visible = false;
        self.overlay.transform = TranslateX::CENTER;
        self.overlay.transition = Transition::None;
        self.overlay.z_index = 0;
    }

    /// Swap the main image without animation.
    pub fn swap(&mut self, src: &str) {
        self.main.src = src.to_string();
    }
}
