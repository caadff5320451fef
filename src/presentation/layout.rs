//! Screen layout shared by rendering and pointer hit testing

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

pub const PREV_LABEL: &str = "◀ Prev";
pub const NEXT_LABEL: &str = "Next ▶";
pub const DOT_SPACING: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub slide: Rect,
    pub status: Rect,
    pub dots: Rect,
    pub nav: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // Deck and slide titles
                Constraint::Min(0),    // Slide content
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Progress dots
                Constraint::Length(1), // Prev / counter / next
            ],
        )
        .split(area);

        Self {
            header: chunks[0],
            slide: chunks[1],
            status: chunks[2],
            dots: chunks[3],
            nav: chunks[4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBarLayout {
    pub prev: Rect,
    pub counter: Rect,
    pub next: Rect,
}

impl NavBarLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Length(PREV_LABEL.width() as u16),
                Constraint::Min(0),
                Constraint::Length(NEXT_LABEL.width() as u16),
            ],
        )
        .split(area);

        Self {
            prev: chunks[0],
            counter: chunks[1],
            next: chunks[2],
        }
    }
}

/// Slide index and one-cell rect of every progress dot drawn in `area`.
///
/// When there are more slides than fit, a window of dots around `current`
/// is drawn instead, so the active dot is always visible.
pub fn dot_rects(area: Rect, total: usize, current: usize) -> Vec<(usize, Rect)> {
    if total == 0 || area.width == 0 || area.height == 0 {
        return vec![];
    }
    let capacity = (usize::from(area.width) + 1) / usize::from(DOT_SPACING);
    let count = total.min(capacity);
    let first = current.saturating_sub(count / 2).min(total - count);

    // count <= capacity, so the strip never exceeds the area width
    let needed = (count * usize::from(DOT_SPACING) - 1) as u16;
    let start = area.x + (area.width - needed) / 2;
    (0..count)
        .map(|i| {
            let x = start + (i as u16) * DOT_SPACING;
            (first + i, Rect::new(x, area.y, 1, 1))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Prev,
    Next,
    Dot(usize),
}

/// Maps a cell of the full screen `area` to the control drawn there.
pub fn hit_test(
    area: Rect,
    total: usize,
    current: usize,
    column: u16,
    row: u16,
) -> Option<HitTarget> {
    let position = Position::new(column, row);
    let screen = ScreenLayout::new(area);

    let nav = NavBarLayout::new(screen.nav);
    if nav.prev.contains(position) {
        return Some(HitTarget::Prev);
    }
    if nav.next.contains(position) {
        return Some(HitTarget::Next);
    }

    dot_rects(screen.dots, total, current)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(index, _)| HitTarget::Dot(index))
}
