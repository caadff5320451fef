//! Presenter component
//!
//! Draws the active slide with its header, status line, progress dots and
//! navigation bar. Stateless: every frame is derived from `AppState`.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        layout::ScreenLayout,
        widgets::{
            header::HeaderWidget,
            nav_bar::NavBarWidget,
            progress_dots::ProgressDotsWidget,
            slide::{SlideWidget, ViewContext},
            status_bar::StatusBarWidget,
        },
    },
};

#[derive(Debug, Clone, Default)]
pub struct PresenterComponent;

impl PresenterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let presentation = &state.presentation;
        let navigator = presentation.navigator();
        let current = navigator.current();
        let slide = presentation.deck().slide(current);
        let layout = ScreenLayout::new(area);

        frame.render_widget(
            HeaderWidget::new(
                presentation.deck().title.as_deref(),
                slide.and_then(|s| s.title.as_deref()),
                styles,
            ),
            layout.header,
        );

        if let Some(slide) = slide {
            let ctx = ViewContext {
                animator: presentation.animator(),
                styles,
            };
            frame.render_widget(SlideWidget::new(slide, current, ctx), layout.slide);
        }

        frame.render_widget(
            StatusBarWidget::new(state.system.status_message.as_deref(), styles),
            layout.status,
        );
        frame.render_widget(ProgressDotsWidget::new(navigator, styles), layout.dots);
        frame.render_widget(NavBarWidget::new(navigator, styles), layout.nav);
    }
}
