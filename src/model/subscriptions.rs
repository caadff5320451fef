//! Input subscriptions of a presentation session
//!
//! The controller registers the input sources it listens to when the
//! session starts and unregisters them on teardown. Input from a source that
//! is not subscribed is dropped by the translator.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Key presses anywhere
    Keyboard,
    /// Clicks on the prev/next controls
    NavigationControls,
    /// Clicks on a progress dot
    ProgressDots,
    /// Press/release drags used for swiping
    Pointer,
}

impl InputSource {
    pub const ALL: [InputSource; 4] = [
        InputSource::Keyboard,
        InputSource::NavigationControls,
        InputSource::ProgressDots,
        InputSource::Pointer,
    ];
}

pub enum Message {
    AllRegistered,
    AllUnregistered,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscriptions {
    active: HashSet<InputSource>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subscribed(&self, source: InputSource) -> bool {
        self.active.contains(&source)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::AllRegistered => self.active.extend(InputSource::ALL),
            Message::AllUnregistered => self.active.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unsubscribed() {
        let subs = Subscriptions::new();
        assert!(subs.is_empty());
        assert!(!subs.is_subscribed(InputSource::Keyboard));
    }

    #[test]
    fn test_register_and_unregister_all() {
        let mut subs = Subscriptions::new();
        subs.update(Message::AllRegistered);
        assert!(InputSource::ALL.iter().all(|s| subs.is_subscribed(*s)));

        subs.update(Message::AllUnregistered);
        assert!(subs.is_empty());
    }
}
