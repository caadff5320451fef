use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Structural kind of a slide element.
///
/// Kinds fall into three categories: text-like kinds are typed out
/// character by character, bubble-like kinds fade in as a unit, and
/// `Container` is structural only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementKind {
    // Text-like
    Heading,
    Subtitle,
    Tagline,
    Description,
    Paragraph,

    // Bubble-like
    Hero,
    Card,
    Grid,
    Group,
    List,
    ListItem,
    Image,
    DetailItem,
    TechGroup,

    Container,
}

impl ElementKind {
    pub fn is_text_like(self) -> bool {
        matches!(
            self,
            ElementKind::Heading
                | ElementKind::Subtitle
                | ElementKind::Tagline
                | ElementKind::Description
                | ElementKind::Paragraph
        )
    }

    pub fn is_bubble_like(self) -> bool {
        matches!(
            self,
            ElementKind::Hero
                | ElementKind::Card
                | ElementKind::Grid
                | ElementKind::Group
                | ElementKind::List
                | ElementKind::ListItem
                | ElementKind::Image
                | ElementKind::DetailItem
                | ElementKind::TechGroup
        )
    }

    /// Atomic containers absorb their text into their own single reveal.
    pub fn is_atomic(self) -> bool {
        matches!(
            self,
            ElementKind::Card
                | ElementKind::DetailItem
                | ElementKind::TechGroup
                | ElementKind::ListItem
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            text: String::new(),
            children: vec![],
        }
    }

    pub fn text(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: vec![],
        }
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }
}

/// Position of an element inside its slide, as child indices from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    pub fn root_child(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for ElementPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Slide {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            title: None,
            elements,
        }
    }

    pub fn element(&self, path: &ElementPath) -> Option<&Element> {
        let (first, rest) = path.indices().split_first()?;
        let mut current = self.elements.get(*first)?;
        for index in rest {
            current = current.children.get(*index)?;
        }
        Some(current)
    }

    /// Visits every element in document (pre-order) order together with the
    /// kinds of its strict ancestors, outermost first. The slide root itself
    /// is not part of the ancestry.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&ElementPath, &'a Element, &[ElementKind]),
    {
        let mut ancestry = Vec::new();
        for (index, element) in self.elements.iter().enumerate() {
            walk_element(
                element,
                ElementPath::root_child(index),
                &mut ancestry,
                &mut visit,
            );
        }
    }
}

fn walk_element<'a, F>(
    element: &'a Element,
    path: ElementPath,
    ancestry: &mut Vec<ElementKind>,
    visit: &mut F,
) where
    F: FnMut(&ElementPath, &'a Element, &[ElementKind]),
{
    visit(&path, element, ancestry);
    ancestry.push(element.kind);
    for (index, child) in element.children.iter().enumerate() {
        walk_element(child, path.child(index), ancestry, visit);
    }
    ancestry.pop();
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            title: None,
            slides,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}
