use ratatui::prelude::*;

use crate::{
    model::navigator::{Navigator, SlideVisual},
    presentation::{
        config::{styles, Styles},
        layout::dot_rects,
    },
};

pub const ACTIVE_DOT: &str = "●";
pub const INACTIVE_DOT: &str = "○";

/// One dot per slide; only the current slide's dot is active. Dots of
/// slides already passed are styled as visited.
pub struct ProgressDotsWidget<'a> {
    navigator: &'a Navigator,
    styles: &'a Styles,
}

impl<'a> ProgressDotsWidget<'a> {
    pub fn new(navigator: &'a Navigator, styles: &'a Styles) -> Self {
        Self { navigator, styles }
    }
}

impl Widget for ProgressDotsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let visuals = self.navigator.visuals();
        let dots = dot_rects(area, self.navigator.total(), self.navigator.current());
        for (i, rect) in dots {
            let symbol = if self.navigator.is_dot_active(i) {
                ACTIVE_DOT
            } else {
                INACTIVE_DOT
            };
            let key = match visuals.get(i) {
                Some(SlideVisual::Active) => styles::DOT_ACTIVE,
                Some(SlideVisual::Prev) => styles::DOT_VISITED,
                _ => styles::DOT_INACTIVE,
            };
            buf.set_string(rect.x, rect.y, symbol, self.styles.get_or_default(key));
        }
    }
}
