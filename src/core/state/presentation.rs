use std::time::Duration;

use crate::{
    domain::deck::Deck,
    infrastructure::config::Config,
    model::{
        navigator::{Message as NavigatorMessage, Navigator},
        reveal::{Message as RevealMessage, RevealAnimator, RevealEvent},
        subscriptions::{InputSource, Message as SubscriptionMessage, Subscriptions},
    },
};

/// The presentation session: one deck, its navigator and its animator.
///
/// Every slide change goes through [`PresentationState::go_to`], which
/// restarts the animator synchronously for the newly active slide.
#[derive(Debug, Clone, Default)]
pub struct PresentationState {
    deck: Deck,
    navigator: Navigator,
    animator: RevealAnimator,
    subscriptions: Subscriptions,
}

impl PresentationState {
    pub fn new(deck: Deck, config: &Config) -> Self {
        let navigator =
            Navigator::new(deck.len()).with_swipe_threshold(config.navigation.swipe_threshold_px);
        Self {
            deck,
            navigator,
            animator: RevealAnimator::new(config.reveal.timing()),
            subscriptions: Subscriptions::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn animator(&self) -> &RevealAnimator {
        &self.animator
    }

    pub fn is_subscribed(&self, source: InputSource) -> bool {
        self.subscriptions.is_subscribed(source)
    }

    pub fn is_live(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Registers input and activates the first slide.
    pub fn start(&mut self, now: Duration) -> Vec<RevealEvent> {
        log::info!("starting presentation with {} slides", self.deck.len());
        self.subscriptions.update(SubscriptionMessage::AllRegistered);
        self.go_to(NavigatorMessage::SlideRequested(0), now)
    }

    pub fn go_to(&mut self, message: NavigatorMessage, now: Duration) -> Vec<RevealEvent> {
        let Some(index) = self.navigator.update(message) else {
            return vec![];
        };
        let Some(slide) = self.deck.slide(index) else {
            return vec![];
        };
        log::debug!("slide {} activated", index + 1);
        self.animator.update(RevealMessage::Restarted {
            slide_index: index,
            slide,
            now,
        })
    }

    pub fn advance(&mut self, now: Duration) -> Vec<RevealEvent> {
        self.animator.update(RevealMessage::TimersDue { now })
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.animator.next_deadline()
    }

    /// Cancels every pending reveal timer and stops listening for input.
    pub fn teardown(&mut self) {
        self.animator.update(RevealMessage::Cancelled);
        self.subscriptions
            .update(SubscriptionMessage::AllUnregistered);
        log::info!("presentation torn down");
    }
}
