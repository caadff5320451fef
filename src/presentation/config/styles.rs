use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

pub const DECK_TITLE: &str = "deck_title";
pub const SLIDE_TITLE: &str = "slide_title";
pub const HEADING: &str = "heading";
pub const SUBTITLE: &str = "subtitle";
pub const TEXT: &str = "text";
pub const TYPING_CURSOR: &str = "typing_cursor";
pub const FRAME: &str = "frame";
pub const REVEALED_FRAME: &str = "revealed_frame";
pub const IMAGE: &str = "image";
pub const DOT_ACTIVE: &str = "dot_active";
pub const DOT_INACTIVE: &str = "dot_inactive";
pub const DOT_VISITED: &str = "dot_visited";
pub const CONTROL: &str = "control";
pub const CONTROL_DISABLED: &str = "control_disabled";
pub const COUNTER: &str = "counter";
pub const STATUS: &str = "status";

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Looks up a named style, falling back to the terminal default
    pub fn get_or_default(&self, key: &str) -> Style {
        self.0.get(key).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| (key, parse_style(&raw)))
            .collect();
        Ok(Styles(styles))
    }
}

/// Parses strings such as `"bold yellow on black"`. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match line.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (line, None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Ok(color) = Color::from_str(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background
        .map(str::trim)
        .and_then(|bg| Color::from_str(bg).ok())
    {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word.to_ascii_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}
