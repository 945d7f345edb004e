//! Renderable snapshot of the current slide.

use slidecast_core::{SlideElement, SlideKind, UnitContent};
use std::fmt;

/// What an element shows once revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    /// Plain text
    Text(String),
    /// An image and, when resolved, its URL
    Image {
        /// Search query / alt text
        description: String,
        /// Resolved location
        url: Option<String>,
    },
}

impl From<UnitContent<'_>> for ElementContent {
    fn from(content: UnitContent<'_>) -> Self {
        match content {
            UnitContent::Text(text) => ElementContent::Text(text.to_string()),
            UnitContent::Image { description, url } => ElementContent::Image {
                description: description.to_string(),
                url: url.map(str::to_string),
            },
        }
    }
}

/// One element of the current slide.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct FrameElement {
    element: SlideElement,
    sequence: Option<u32>,
    revealed: bool,
    content: ElementContent,
}

impl FrameElement {
    pub(crate) fn new(
        element: SlideElement,
        sequence: Option<u32>,
        revealed: bool,
        content: ElementContent,
    ) -> Self {
        Self {
            element,
            sequence,
            revealed,
            content,
        }
    }
}

/// The slide under the cursor with per-element visibility.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Frame {
    slide_index: usize,
    kind: SlideKind,
    global: u32,
    elements: Vec<FrameElement>,
}

impl Frame {
    pub(crate) fn new(
        slide_index: usize,
        kind: SlideKind,
        global: u32,
        elements: Vec<FrameElement>,
    ) -> Self {
        Self {
            slide_index,
            kind,
            global,
            elements,
        }
    }

    /// Elements currently visible.
    pub fn revealed(&self) -> impl Iterator<Item = &FrameElement> {
        self.elements.iter().filter(|e| e.revealed)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[slide {} {} | unit {}]",
            self.slide_index + 1,
            self.kind,
            self.global
        )?;
        for element in self.revealed() {
            match &element.content {
                ElementContent::Text(text) => write!(f, "\n  {}: {}", element.element, text)?,
                ElementContent::Image { description, url } => write!(
                    f,
                    "\n  {}: {} <{}>",
                    element.element,
                    description,
                    url.as_deref().unwrap_or("no image")
                )?,
            }
        }
        Ok(())
    }
}
