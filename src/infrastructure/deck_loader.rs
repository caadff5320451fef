//! Loads the deck shown by the presenter

use std::path::Path;

use color_eyre::eyre::{bail, Result, WrapErr};

use crate::domain::deck::Deck;

const DEMO_DECK: &str = include_str!("../../decks/demo.json5");

pub fn parse_deck(source: &str) -> Result<Deck> {
    let deck: Deck = json5::from_str(source).wrap_err("invalid deck")?;
    if deck.is_empty() {
        bail!("deck has no slides");
    }
    Ok(deck)
}

/// Reads the deck at `path`, or the bundled demo deck when `None`.
pub fn load_deck(path: Option<&Path>) -> Result<Deck> {
    let Some(path) = path else {
        log::info!("no deck given, using the bundled demo");
        return parse_deck(DEMO_DECK).wrap_err("bundled demo deck is broken");
    };

    let source = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read deck {}", path.display()))?;
    let deck =
        parse_deck(&source).wrap_err_with(|| format!("failed to load deck {}", path.display()))?;
    log::info!("loaded {} slides from {}", deck.len(), path.display());
    Ok(deck)
}
