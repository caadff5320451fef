//! Reveal classification
//!
//! Decides, from the structure of a slide alone, which elements animate and
//! how. Nothing here depends on a terminal or on rendering state.

use serde::{Deserialize, Serialize};

use super::deck::{Deck, ElementKind, ElementPath, Slide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Text,
    Bubble,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealKind {
    Text,
    Bubble,
}

/// One entry of a slide's reveal sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animatable {
    pub path: ElementPath,
    pub kind: RevealKind,
}

/// Classifies an element given the kinds of its strict ancestors (slide root
/// excluded).
///
/// - Text inside an atomic container is part of that container's reveal.
/// - A bubble inside another bubble is revealed by the outermost one.
pub fn classify(kind: ElementKind, ancestry: &[ElementKind]) -> Classification {
    if kind.is_text_like() {
        if ancestry.iter().any(|k| k.is_atomic()) {
            Classification::Skip
        } else {
            Classification::Text
        }
    } else if kind.is_bubble_like() {
        if ancestry.iter().any(|k| k.is_bubble_like()) {
            Classification::Skip
        } else {
            Classification::Bubble
        }
    } else {
        Classification::Skip
    }
}

/// Builds the ordered reveal sequence of a slide.
pub fn discover(slide: &Slide) -> Vec<Animatable> {
    let mut found = Vec::new();
    slide.walk(|path, element, ancestry| {
        let kind = match classify(element.kind, ancestry) {
            Classification::Text => RevealKind::Text,
            Classification::Bubble => RevealKind::Bubble,
            Classification::Skip => return,
        };
        found.push(Animatable {
            path: path.clone(),
            kind,
        });
    });
    found
}

/// Reveal sequence of one slide, as printed by `--plan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlidePlan {
    pub slide: usize,
    pub title: Option<String>,
    pub steps: Vec<Animatable>,
}

pub fn plan(deck: &Deck) -> Vec<SlidePlan> {
    deck.slides
        .iter()
        .enumerate()
        .map(|(index, slide)| SlidePlan {
            slide: index,
            title: slide.title.clone(),
            steps: discover(slide),
        })
        .collect()
}
