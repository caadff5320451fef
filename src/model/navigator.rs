//! Slide navigation state
//!
//! This module follows the Elm Architecture pattern:
//! - The current index changes only through the `update` function
//! - All transitions are explicit `Message` variants, named in past tense
//! - Out-of-range requests are ignored rather than reported

use serde::{Deserialize, Serialize};

pub const DEFAULT_SWIPE_THRESHOLD: i32 = 50;

pub enum Message {
    /// A specific slide was requested by index
    SlideRequested(usize),
    PreviousRequested,
    NextRequested,
    FirstRequested,
    LastRequested,
    /// A horizontal drag finished; coordinates are in pixels
    Swiped { start_x: i32, end_x: i32 },
}

/// Visual state of one slide relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideVisual {
    Inactive,
    Active,
    Prev,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
    swipe_threshold: i32,
}

impl Navigator {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    pub fn with_swipe_threshold(mut self, threshold: i32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn slide_visual(&self, position: usize) -> SlideVisual {
        if position == self.current {
            SlideVisual::Active
        } else if position < self.current {
            SlideVisual::Prev
        } else {
            SlideVisual::Inactive
        }
    }

    pub fn visuals(&self) -> Vec<SlideVisual> {
        (0..self.total).map(|i| self.slide_visual(i)).collect()
    }

    pub fn is_dot_active(&self, position: usize) -> bool {
        position == self.current
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current + 1 >= self.total
    }

    /// Whether a horizontal drag is long enough to count as a swipe
    pub fn is_swipe(&self, start_x: i32, end_x: i32) -> bool {
        start_x.saturating_sub(end_x).saturating_abs() > self.swipe_threshold
    }

    /// One-based counter text, e.g. `3 / 10`
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }

    /// Applies a navigation message. Returns the newly activated index when
    /// a slide change was accepted, so the caller can restart its reveal.
    pub fn update(&mut self, message: Message) -> Option<usize> {
        match message {
            Message::SlideRequested(index) => {
                if index >= self.total {
                    log::debug!("ignoring out-of-range slide {index} (total {})", self.total);
                    return None;
                }
                self.current = index;
                Some(index)
            }
            Message::PreviousRequested => {
                let index = self.current.checked_sub(1)?;
                self.update(Message::SlideRequested(index))
            }
            Message::NextRequested => {
                if self.next_disabled() {
                    return None;
                }
                self.update(Message::SlideRequested(self.current + 1))
            }
            Message::FirstRequested => self.update(Message::SlideRequested(0)),
            Message::LastRequested => {
                let index = self.total.checked_sub(1)?;
                self.update(Message::SlideRequested(index))
            }
            Message::Swiped { start_x, end_x } => {
                if !self.is_swipe(start_x, end_x) {
                    return None;
                }
                if start_x > end_x {
                    self.update(Message::NextRequested)
                } else {
                    self.update(Message::PreviousRequested)
                }
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(0)
    }
}
