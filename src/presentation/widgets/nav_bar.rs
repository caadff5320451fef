use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    model::navigator::Navigator,
    presentation::{
        config::{styles, Styles},
        layout::{NavBarLayout, NEXT_LABEL, PREV_LABEL},
    },
};

/// Prev control, slide counter and next control on a single row
pub struct NavBarWidget<'a> {
    navigator: &'a Navigator,
    styles: &'a Styles,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(navigator: &'a Navigator, styles: &'a Styles) -> Self {
        Self { navigator, styles }
    }

    fn control_style(&self, disabled: bool) -> Style {
        self.styles.get_or_default(if disabled {
            styles::CONTROL_DISABLED
        } else {
            styles::CONTROL
        })
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = NavBarLayout::new(area);

        Paragraph::new(PREV_LABEL)
            .style(self.control_style(self.navigator.prev_disabled()))
            .render(layout.prev, buf);

        Paragraph::new(self.navigator.counter())
            .style(self.styles.get_or_default(styles::COUNTER))
            .alignment(Alignment::Center)
            .render(layout.counter, buf);

        Paragraph::new(NEXT_LABEL)
            .style(self.control_style(self.navigator.next_disabled()))
            .render(layout.next, buf);
    }
}
