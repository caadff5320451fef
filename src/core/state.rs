pub mod pointer;
pub mod presentation;
pub mod system;

use crate::{domain::deck::Deck, infrastructure::config::Config};

pub use pointer::PointerState;
pub use presentation::PresentationState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub presentation: PresentationState,
    pub pointer: PointerState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(deck: Deck, config: Config) -> Self {
        Self {
            presentation: PresentationState::new(deck, &config),
            pointer: PointerState::default(),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }
}
