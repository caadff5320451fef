use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::config::{styles, Styles};

pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    styles: &'a Styles,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, styles: &'a Styles) -> Self {
        Self { message, styles }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let Some(message) = self.message else {
            return;
        };
        Paragraph::new(message)
            .style(self.styles.get_or_default(styles::STATUS))
            .render(area, buf);
    }
}
