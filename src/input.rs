//! Input router: clicks, keys and swipes onto lightbox operations.
//!
//! The host forwards raw page events as [`InputEvent`]s. Routing only starts
//! after [`InputRouter::bind`], which succeeds once per router.

use crate::lightbox::{Lightbox, Phase};
use crate::surface::{MenuProbe, Surface};

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Which element received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A grid item, carrying its `data-index`.
    Thumbnail { index: usize },
    PrevButton,
    NextButton,
    CloseButton,
    /// The overlay root itself, outside the content card.
    Backdrop,
    /// Anywhere inside the content card that is not a control.
    Card,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Click(ClickTarget),
    KeyDown(Key),
    TouchStart { touches: usize, position: Point },
    /// `position` is the first changed touch, if the event had one.
    TouchEnd { position: Option<Point> },
}

/// The lightbox operation an event turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    Opened(usize),
    Next,
    Previous,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right: go back.
    Right,
    /// Finger moved left: go forward.
    Left,
}

/// Classify a touch displacement.
///
/// A swipe needs more horizontal travel than `threshold` and than the
/// vertical drift; anything else is a tap or a scroll.
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<SwipeDirection> {
    if dx.abs() <= threshold || dx.abs() <= dy.abs() {
        return None;
    }
    Some(if dx > 0.0 {
        SwipeDirection::Right
    } else {
        SwipeDirection::Left
    })
}

/// Tracks a single-finger touch from start to end.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    /// Arm on a single-touch start; multi-touch starts are ignored.
    pub fn begin(&mut self, touches: usize, position: Point) {
        if touches == 1 {
            self.start = Some(position);
        }
    }

    pub fn end(&mut self, position: Option<Point>, threshold: f32) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let end = position?;
        classify_swipe(end.x - start.x, end.y - start.y, threshold)
    }
}

#[derive(Debug, Clone)]
pub struct InputRouter {
    bound: bool,
    swipe: SwipeTracker,
    swipe_threshold: f32,
}

impl InputRouter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            bound: false,
            swipe: SwipeTracker::default(),
            swipe_threshold,
        }
    }

    /// Start routing. Returns `false` if already bound.
    pub fn bind(&mut self) -> bool {
        if self.bound {
            log::debug!("input router already bound");
            return false;
        }
        self.bound = true;
        true
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn dispatch<S: Surface, M: MenuProbe>(
        &mut self,
        lightbox: &mut Lightbox<S, M>,
        event: &InputEvent,
    ) -> Option<Routed> {
        if !self.bound {
            return None;
        }

        match *event {
            InputEvent::Click(target) => match target {
                ClickTarget::Thumbnail { index } => {
                    let index = i64::try_from(index).unwrap_or(0);
                    lightbox.open_at(index).map(Routed::Opened)
                }
                ClickTarget::PrevButton => lightbox.previous().map(|_| Routed::Previous),
                ClickTarget::NextButton => lightbox.next().map(|_| Routed::Next),
                ClickTarget::CloseButton | ClickTarget::Backdrop => {
                    lightbox.close().then_some(Routed::Close)
                }
                ClickTarget::Card => None,
            },
            InputEvent::KeyDown(key) => {
                // Keys stay live through the close transition, like the buttons.
                if lightbox.phase() == Phase::Closed {
                    return None;
                }
                match key {
                    Key::Escape => lightbox.close().then_some(Routed::Close),
                    Key::ArrowLeft => lightbox.previous().map(|_| Routed::Previous),
                    Key::ArrowRight => lightbox.next().map(|_| Routed::Next),
                    Key::Other => None,
                }
            }
            InputEvent::TouchStart { touches, position } => {
                self.swipe.begin(touches, position);
                None
            }
            InputEvent::TouchEnd { position } => {
                match self.swipe.end(position, self.swipe_threshold)? {
                    SwipeDirection::Right => lightbox.previous().map(|_| Routed::Previous),
                    SwipeDirection::Left => lightbox.next().map(|_| Routed::Next),
                }
            }
        }
    }
}
