//! Domain logic
//!
//! This module contains the presentation domain, independent of any terminal:
//! - Deck, slide and element descriptions
//! - Reveal classification and discovery
//! - Text layout utilities

pub mod classify;
pub mod deck;
pub mod text;
