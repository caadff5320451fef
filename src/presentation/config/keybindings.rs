use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::{Display, EnumString};

/// Commands a key sequence can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Action {
    PrevSlide,
    NextSlide,
    FirstSlide,
    LastSlide,
    Quit,
    Suspend,
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.len() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Empty key: {raw}"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Parses `<ctrl-c>` or `<g><g>` style sequences.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            let seq = seq.strip_suffix('>').unwrap_or(seq);
            parse_key_event(seq)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<left>", KeyEvent::new(KeyCode::Left, KeyModifiers::NONE))]
    #[case("<Right>", KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))]
    #[case("<space>", KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE))]
    #[case("<q>", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))]
    #[case("<Ctrl-c>", KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    #[case(
        "<ctrl-alt-x>",
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT)
    )]
    #[case("<shift-n>", KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT))]
    fn test_parse_single_key(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_sequence(raw), Ok(vec![expected]));
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ])
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_key_sequence("<nope>").is_err());
        assert!(parse_key_sequence("<left").is_err());
    }

    #[test]
    fn test_deserialize_bindings() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<Left>": "PrevSlide", "<End>": "LastSlide" }"#).unwrap();
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::End, KeyModifiers::NONE)]),
            Some(&Action::LastSlide)
        );
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_deserialize_unknown_action_fails() {
        let parsed: Result<KeyBindings, _> = json5::from_str(r#"{ "<Left>": "Explode" }"#);
        assert!(parsed.is_err());
    }
}
