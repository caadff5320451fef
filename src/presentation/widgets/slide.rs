use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        deck::{Element, ElementKind, ElementPath, Slide},
        text::{line_count, wrap_lines},
    },
    model::reveal::{ElementView, RevealAnimator},
    presentation::config::{styles, Styles},
};

pub const TYPING_CURSOR: &str = "▌";
pub const FRAME_GUTTER: &str = "│ ";
pub const LIST_BULLET: &str = "• ";
pub const IMAGE_PREFIX: &str = "[image] ";

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub animator: &'a RevealAnimator,
    pub styles: &'a Styles,
}

/// Renders one slide's elements top to bottom, applying the reveal state
/// of each element.
#[derive(Clone, Copy)]
pub struct SlideWidget<'a> {
    slide: &'a Slide,
    index: usize,
    ctx: ViewContext<'a>,
}

impl<'a> SlideWidget<'a> {
    pub fn new(slide: &'a Slide, index: usize, ctx: ViewContext<'a>) -> Self {
        Self { slide, index, ctx }
    }

    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        self.slide
            .elements
            .iter()
            .enumerate()
            .flat_map(|(i, element)| self.element_lines(element, &ElementPath::root_child(i), width))
            .collect()
    }

    fn view(&self, path: &ElementPath) -> Option<&'a ElementView> {
        self.ctx.animator.view(self.index, path)
    }

    fn element_lines(&self, element: &Element, path: &ElementPath, width: usize) -> Vec<Line<'static>> {
        if element.kind.is_text_like() {
            return self.text_lines(element, path, width);
        }

        let mut lines = match element.kind {
            ElementKind::ListItem => {
                self.prefixed(element, path, width, LIST_BULLET, Style::default(), true)
            }
            ElementKind::Card
            | ElementKind::DetailItem
            | ElementKind::TechGroup
            | ElementKind::Hero => {
                let revealed = self.view(path).is_some_and(|v| v.revealed);
                let key = if revealed {
                    styles::REVEALED_FRAME
                } else {
                    styles::FRAME
                };
                let gutter = self.ctx.styles.get_or_default(key);
                self.prefixed(element, path, width, FRAME_GUTTER, gutter, false)
            }
            ElementKind::Image => {
                let caption = format!("{IMAGE_PREFIX}{}", element.text);
                let style = self.ctx.styles.get_or_default(styles::IMAGE);
                let mut lines = styled_rows(&caption, width, style);
                lines.extend(self.children_lines(element, path, width));
                lines
            }
            _ => {
                let style = self.ctx.styles.get_or_default(styles::TEXT);
                let mut lines = if element.text.is_empty() {
                    vec![]
                } else {
                    styled_rows(&element.text, width, style)
                };
                lines.extend(self.children_lines(element, path, width));
                lines
            }
        };

        if self.view(path).is_some_and(|v| v.transparent) {
            lines = vec![Line::default(); lines.len()];
        }
        lines
    }

    fn text_lines(&self, element: &Element, path: &ElementPath, width: usize) -> Vec<Line<'static>> {
        let mut lines = self.own_text_lines(element, path, width);
        lines.extend(self.children_lines(element, path, width));
        lines
    }

    fn own_text_lines(&self, element: &Element, path: &ElementPath, width: usize) -> Vec<Line<'static>> {
        let key = match element.kind {
            ElementKind::Heading => styles::HEADING,
            ElementKind::Subtitle | ElementKind::Tagline => styles::SUBTITLE,
            _ => styles::TEXT,
        };
        let style = self.ctx.styles.get_or_default(key);

        let Some(view) = self.view(path) else {
            return styled_rows(&element.text, width, style);
        };
        // Hidden and partially typed text keep the height of the full text
        let full = self
            .ctx
            .animator
            .captured_text(self.index, path)
            .unwrap_or(&element.text);
        let reserved = view
            .reserved_lines
            .max(line_count(full, width.max(1)))
            .max(1);
        if !view.visible {
            return vec![Line::default(); reserved];
        }

        let mut lines = styled_rows(&view.displayed, width, style);
        if view.typing {
            let cursor = Span::styled(
                TYPING_CURSOR,
                self.ctx.styles.get_or_default(styles::TYPING_CURSOR),
            );
            if let Some(last) = lines.last_mut() {
                last.push_span(cursor);
            }
        }
        if lines.len() < reserved {
            lines.resize(reserved, Line::default());
        }
        lines
    }

    fn children_lines(&self, element: &Element, path: &ElementPath, width: usize) -> Vec<Line<'static>> {
        element
            .children
            .iter()
            .enumerate()
            .flat_map(|(i, child)| self.element_lines(child, &path.child(i), width))
            .collect()
    }

    /// Draws the element's own text and children behind a prefix column.
    /// With `first_only`, rows after the first get blank padding instead.
    fn prefixed(
        &self,
        element: &Element,
        path: &ElementPath,
        width: usize,
        prefix: &'static str,
        prefix_style: Style,
        first_only: bool,
    ) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(prefix.width());
        let text_style = self.ctx.styles.get_or_default(styles::TEXT);
        let mut body = if element.text.is_empty() {
            vec![]
        } else {
            styled_rows(&element.text, inner, text_style)
        };
        body.extend(self.children_lines(element, path, inner));
        if body.is_empty() {
            body.push(Line::default());
        }

        let padding = " ".repeat(prefix.width());
        body.into_iter()
            .enumerate()
            .map(|(i, line)| {
                let head = if i == 0 || !first_only {
                    Span::styled(prefix, prefix_style)
                } else {
                    Span::raw(padding.clone())
                };
                let mut spans = vec![head];
                spans.extend(line.spans);
                Line::from(spans)
            })
            .collect()
    }
}

fn styled_rows(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_lines(text, width.max(1))
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::reveal::{Message, RevealTiming};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn render(slide: &Slide, animator: &RevealAnimator, width: u16, height: u16) -> Vec<String> {
        let styles = Styles::default();
        let ctx = ViewContext {
            animator,
            styles: &styles,
        };
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        SlideWidget::new(slide, 0, ctx).render(area, &mut buf);
        rows(&buf)
    }

    fn slide() -> Slide {
        Slide::new(vec![
            Element::text(ElementKind::Heading, "Hello"),
            Element::new(ElementKind::Card)
                .with_children(vec![Element::text(ElementKind::Paragraph, "Inside")]),
            Element::new(ElementKind::List).with_children(vec![
                Element::text(ElementKind::ListItem, "first"),
                Element::new(ElementKind::ListItem)
                    .with_children(vec![Element::text(ElementKind::Paragraph, "second")]),
            ]),
            Element::text(ElementKind::Image, "logo"),
        ])
    }

    fn restarted(slide: &Slide, now: Duration) -> RevealAnimator {
        let mut animator = RevealAnimator::new(RevealTiming::default());
        animator.update(Message::Restarted {
            slide_index: 0,
            slide,
            now,
        });
        animator
    }

    #[test]
    fn test_untouched_slide_renders_as_authored() {
        let slide = slide();
        let animator = RevealAnimator::default();
        assert_eq!(
            render(&slide, &animator, 20, 6),
            vec!["Hello", "│ Inside", "• first", "• second", "[image] logo", ""]
        );
    }

    #[test]
    fn test_typing_shows_cursor_and_hides_pending_bubbles() {
        let slide = slide();
        let animator = restarted(&slide, Duration::ZERO);
        assert_eq!(
            render(&slide, &animator, 20, 6),
            vec!["H▌", "", "", "", "", ""]
        );
    }

    #[test]
    fn test_revealed_bubble_is_drawn() {
        let slide = slide();
        let mut animator = restarted(&slide, Duration::ZERO);
        // "Hello": 5 chars, exhausted at 75 ms, complete at 125 ms
        animator.update(Message::TimersDue {
            now: Duration::from_millis(125),
        });
        assert_eq!(
            render(&slide, &animator, 20, 6),
            vec!["Hello", "│ Inside", "", "", "", ""]
        );
    }

    #[test]
    fn test_hidden_text_keeps_reserved_rows() {
        let slide = Slide::new(vec![
            Element::text(ElementKind::Paragraph, "one\ntwo\nthree"),
            Element::text(ElementKind::Paragraph, "after"),
        ]);
        let animator = restarted(&slide, Duration::ZERO);
        // The first paragraph is typing, the second is hidden but still holds its row
        let rendered = render(&slide, &animator, 20, 4);
        assert_eq!(rendered, vec!["o▌", "", "", ""]);
        assert_eq!(
            animator
                .view(0, &ElementPath::root_child(1))
                .map(|v| v.reserved_lines),
            Some(1)
        );
    }

    fn line_counts(slide: &Slide, animator: &RevealAnimator, width: usize) -> usize {
        let styles = Styles::default();
        let ctx = ViewContext {
            animator,
            styles: &styles,
        };
        SlideWidget::new(slide, 0, ctx).lines(width).len()
    }

    #[test]
    fn test_wrapped_text_keeps_height_while_hidden_and_typing() {
        let slide = Slide::new(vec![
            Element::text(ElementKind::Heading, "X"),
            Element::text(ElementKind::Paragraph, "aaa bbb ccc ddd"),
            Element::text(ElementKind::Heading, "Z"),
        ]);
        // Width 4 wraps the paragraph to four rows
        let authored = line_counts(&slide, &RevealAnimator::default(), 4);
        assert_eq!(authored, 6);

        let mut animator = restarted(&slide, Duration::ZERO);
        assert_eq!(line_counts(&slide, &animator, 4), authored);

        // "X" completes at 65 ms, then the paragraph types "aaa b" by 125 ms
        animator.update(Message::TimersDue { now: ms(125) });
        assert_eq!(
            animator
                .view(0, &ElementPath::root_child(1))
                .map(|v| v.displayed.as_str()),
            Some("aaa b")
        );
        assert_eq!(line_counts(&slide, &animator, 4), authored);

        animator.update(Message::TimersDue { now: ms(10_000) });
        assert_eq!(line_counts(&slide, &animator, 4), authored);
    }

    #[test]
    fn test_children_of_text_are_drawn() {
        let slide = Slide::new(vec![Element::text(ElementKind::Description, "intro")
            .with_children(vec![Element::text(ElementKind::Card, "boxed")])]);
        let mut animator = restarted(&slide, Duration::ZERO);
        assert_eq!(render(&slide, &animator, 20, 2), vec!["i▌", ""]);

        animator.update(Message::TimersDue { now: ms(10_000) });
        assert_eq!(render(&slide, &animator, 20, 2), vec!["intro", "│ boxed"]);
    }

    #[test]
    fn test_narrow_area_wraps_inside_gutter() {
        let slide = Slide::new(vec![Element::text(ElementKind::Card, "aaa bbb")]);
        let animator = RevealAnimator::default();
        assert_eq!(render(&slide, &animator, 5, 2), vec!["│ aaa", "│ bbb"]);
    }
}
