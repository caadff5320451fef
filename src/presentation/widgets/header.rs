use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::config::{styles, Styles};

pub const TITLE_SEPARATOR: &str = " · ";

/// Deck title followed by the current slide's title, when either is set
pub struct HeaderWidget<'a> {
    deck_title: Option<&'a str>,
    slide_title: Option<&'a str>,
    styles: &'a Styles,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(deck_title: Option<&'a str>, slide_title: Option<&'a str>, styles: &'a Styles) -> Self {
        Self {
            deck_title,
            slide_title,
            styles,
        }
    }

    pub fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        if let Some(title) = self.deck_title {
            spans.push(Span::styled(title, self.styles.get_or_default(styles::DECK_TITLE)));
        }
        if let Some(title) = self.slide_title {
            if !spans.is_empty() {
                spans.push(Span::raw(TITLE_SEPARATOR));
            }
            spans.push(Span::styled(title, self.styles.get_or_default(styles::SLIDE_TITLE)));
        }
        Line::from(spans)
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("Deck"), Some("Intro"), "Deck · Intro")]
    #[case(Some("Deck"), None, "Deck")]
    #[case(None, Some("Intro"), "Intro")]
    #[case(None, None, "")]
    fn test_line(#[case] deck: Option<&str>, #[case] slide: Option<&str>, #[case] expected: &str) {
        let styles = Styles::default();
        let line = HeaderWidget::new(deck, slide, &styles).line();
        assert_eq!(line.to_string(), expected);
    }
}
