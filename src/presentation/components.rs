//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod presenter;

pub use presenter::PresenterComponent;

pub struct Components {
    pub presenter: PresenterComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            presenter: PresenterComponent::new(),
        }
    }

    /// Main rendering entry point
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        self.presenter.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
