//! The slide model.
//!
//! A slide is one of four templates, discriminated on the wire by a `type`
//! tag. Each template splits its content into narration units; every unit
//! carries the narration to be spoken while it is revealed and, once the
//! deck has been numbered, its global sequence number (`mp3`).

use serde::{Deserialize, Serialize};

/// The closed set of slide templates.
///
/// # Examples
///
/// ```
/// use slidecast_core::SlideKind;
/// use std::str::FromStr;
///
/// assert_eq!(SlideKind::from_str("title-bullets").unwrap(), SlideKind::TitleBullets);
/// assert_eq!(SlideKind::SideBySideImages.to_string(), "side-by-side-images");
/// assert!(SlideKind::from_str("quote").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SlideKind {
    /// Text in the center of the slide
    Statement,
    /// A title with bullets underneath
    TitleBullets,
    /// One image in the middle of the slide
    MiddleImage,
    /// Two images side by side
    SideBySideImages,
}

/// A text element with its own narration (titles and bullets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarratedText {
    /// Text shown on the slide
    pub value: String,
    /// Narration spoken when the element is revealed
    pub narration: String,
    /// Global sequence number, assigned by the linearizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp3: Option<u32>,
}

impl NarratedText {
    /// Create an unnumbered text element.
    pub fn new(value: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            narration: narration.into(),
            mp3: None,
        }
    }
}

/// One half of a side-by-side slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUnit {
    /// Description of the image, used as the search query
    pub value: String,
    /// Narration spoken when the image is revealed
    pub narration: String,
    /// Global sequence number, assigned by the linearizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp3: Option<u32>,
    /// Resolved image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ImageUnit {
    /// Create an unnumbered, unresolved image unit.
    pub fn new(value: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            narration: narration.into(),
            mp3: None,
            image_url: None,
        }
    }
}

/// One slide of a presentation.
///
/// # Examples
///
/// ```
/// use slidecast_core::{Slide, SlideKind};
///
/// let json = r#"{"type":"statement","statement":"Rust is fast","narration":"Rust compiles to native code.","mp3":1}"#;
/// let slide: Slide = serde_json::from_str(json).unwrap();
/// assert_eq!(slide.kind(), SlideKind::Statement);
/// assert_eq!(slide.unit_count(), 1);
/// assert_eq!(slide.sequence_numbers(), vec![Some(1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Slide {
    /// Text in the center of the slide, one narration unit
    Statement {
        /// Displayed text
        statement: String,
        /// Narration for the statement
        narration: String,
        /// Global sequence number
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mp3: Option<u32>,
    },
    /// Title plus bullets, one unit for the title and one per bullet
    TitleBullets {
        /// Slide title
        title: NarratedText,
        /// Bullets in display order
        #[serde(default)]
        bullets: Vec<NarratedText>,
    },
    /// A single centered image, one narration unit
    MiddleImage {
        /// Description of the image, used as the search query
        image_description: String,
        /// Resolved image location
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        /// Narration for the image
        narration: String,
        /// Global sequence number
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mp3: Option<u32>,
    },
    /// Two images, each its own narration unit
    SideBySideImages {
        /// Left image
        first_image_description: ImageUnit,
        /// Right image
        second_image_description: ImageUnit,
    },
}

/// Which element of a slide a narration unit reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SlideElement {
    /// The statement text
    #[display("statement")]
    Statement,
    /// A title
    #[display("title")]
    Title,
    /// A bullet, by position
    #[display("bullet {}", _0)]
    Bullet(usize),
    /// The single image of a middle-image slide
    #[display("image")]
    Image,
    /// The left image of a side-by-side slide
    #[display("first image")]
    FirstImage,
    /// The right image of a side-by-side slide
    #[display("second image")]
    SecondImage,
}

/// What a revealed unit shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitContent<'a> {
    /// Plain text
    Text(&'a str),
    /// An image, possibly not yet resolved
    Image {
        /// Search query / alt text
        description: &'a str,
        /// Resolved location
        url: Option<&'a str>,
    },
}

/// Borrowed view of one narration unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationUnit<'a> {
    /// Element revealed by this unit
    pub element: SlideElement,
    /// Displayed content
    pub content: UnitContent<'a>,
    /// Spoken narration
    pub narration: &'a str,
    /// Global sequence number, if assigned
    pub sequence: Option<u32>,
}

impl Slide {
    /// The template tag of this slide.
    pub fn kind(&self) -> SlideKind {
        match self {
            Slide::Statement { .. } => SlideKind::Statement,
            Slide::TitleBullets { .. } => SlideKind::TitleBullets,
            Slide::MiddleImage { .. } => SlideKind::MiddleImage,
            Slide::SideBySideImages { .. } => SlideKind::SideBySideImages,
        }
    }

    /// Narration units in reveal order.
    ///
    /// Title-bullets yields the title then each bullet; side-by-side yields
    /// first then second; the other templates yield their single unit.
    pub fn units(&self) -> Vec<NarrationUnit<'_>> {
        match self {
            Slide::Statement {
                statement,
                narration,
                mp3,
            } => vec![NarrationUnit {
                element: SlideElement::Statement,
                content: UnitContent::Text(statement),
                narration,
                sequence: *mp3,
            }],
            Slide::TitleBullets { title, bullets } => {
                let mut units = Vec::with_capacity(bullets.len() + 1);
                units.push(NarrationUnit {
                    element: SlideElement::Title,
                    content: UnitContent::Text(&title.value),
                    narration: &title.narration,
                    sequence: title.mp3,
                });
                units.extend(bullets.iter().enumerate().map(|(i, bullet)| NarrationUnit {
                    element: SlideElement::Bullet(i),
                    content: UnitContent::Text(&bullet.value),
                    narration: &bullet.narration,
                    sequence: bullet.mp3,
                }));
                units
            }
            Slide::MiddleImage {
                image_description,
                image_url,
                narration,
                mp3,
            } => vec![NarrationUnit {
                element: SlideElement::Image,
                content: UnitContent::Image {
                    description: image_description,
                    url: image_url.as_deref(),
                },
                narration,
                sequence: *mp3,
            }],
            Slide::SideBySideImages {
                first_image_description: first,
                second_image_description: second,
            } => [(SlideElement::FirstImage, first), (SlideElement::SecondImage, second)]
                .into_iter()
                .map(|(element, unit)| NarrationUnit {
                    element,
                    content: UnitContent::Image {
                        description: &unit.value,
                        url: unit.image_url.as_deref(),
                    },
                    narration: &unit.narration,
                    sequence: unit.mp3,
                })
                .collect(),
        }
    }

    /// Number of narration units on this slide.
    pub fn unit_count(&self) -> usize {
        match self {
            Slide::Statement { .. } | Slide::MiddleImage { .. } => 1,
            Slide::TitleBullets { bullets, .. } => 1 + bullets.len(),
            Slide::SideBySideImages { .. } => 2,
        }
    }

    /// Sequence numbers of this slide's units in reveal order.
    pub fn sequence_numbers(&self) -> Vec<Option<u32>> {
        self.units().iter().map(|u| u.sequence).collect()
    }

    /// Narrations of this slide's units in reveal order.
    pub fn narrations(&self) -> Vec<&str> {
        self.units().iter().map(|u| u.narration).collect()
    }
}
