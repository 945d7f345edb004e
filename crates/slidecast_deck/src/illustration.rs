//! Illustration fan-out.
//!
//! Every image-bearing unit (one per middle-image slide, two per
//! side-by-side slide) is searched independently and the first hit's URL is
//! written back onto that unit. Lookups resolve concurrently; write-back
//! happens afterwards in slide order, so the result does not depend on which
//! lookup finishes first.

use futures::future::join_all;
use slidecast_core::Slide;
use slidecast_error::{ProviderError, ProviderErrorKind, SlidecastResult};
use slidecast_interface::ImageSearch;
use slidecast_rate_limit::{RateLimiter, TierConfig};
use std::sync::Arc;

/// Which image of a slide a lookup is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// The image of a middle-image slide
    Middle,
    /// The left image of a side-by-side slide
    First,
    /// The right image of a side-by-side slide
    Second,
}

/// One pending image lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Position of the slide in the deck
    pub slide: usize,
    /// Image on that slide
    pub slot: ImageSlot,
    /// Search query
    pub query: String,
}

/// Lookups needed for `slides`, skipping units that already have a URL.
pub fn image_requests(slides: &[Slide]) -> Vec<ImageRequest> {
    let mut requests = Vec::new();
    for (index, slide) in slides.iter().enumerate() {
        match slide {
            Slide::MiddleImage {
                image_description,
                image_url: None,
                ..
            } => requests.push(ImageRequest {
                slide: index,
                slot: ImageSlot::Middle,
                query: image_description.clone(),
            }),
            Slide::SideBySideImages {
                first_image_description: first,
                second_image_description: second,
            } => {
                for (slot, unit) in [(ImageSlot::First, first), (ImageSlot::Second, second)] {
                    if unit.image_url.is_none() {
                        requests.push(ImageRequest {
                            slide: index,
                            slot,
                            query: unit.value.clone(),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    requests
}

/// Write `url` onto the unit of `slide` named by `slot`.
///
/// Returns false when the slot does not exist on that slide.
pub fn apply_image(slide: &mut Slide, slot: ImageSlot, url: String) -> bool {
    match (slide, slot) {
        (Slide::MiddleImage { image_url, .. }, ImageSlot::Middle) => {
            *image_url = Some(url);
            true
        }
        (
            Slide::SideBySideImages {
                first_image_description,
                ..
            },
            ImageSlot::First,
        ) => {
            first_image_description.image_url = Some(url);
            true
        }
        (
            Slide::SideBySideImages {
                second_image_description,
                ..
            },
            ImageSlot::Second,
        ) => {
            second_image_description.image_url = Some(url);
            true
        }
        _ => false,
    }
}

/// Resolves image descriptions to URLs.
#[derive(Clone)]
pub struct IllustrationResolver {
    search: Arc<dyn ImageSearch>,
    limiter: RateLimiter<TierConfig>,
}

impl IllustrationResolver {
    /// Create a resolver limited by `tier`.
    pub fn new(search: Arc<dyn ImageSearch>, tier: TierConfig) -> Self {
        Self {
            search,
            limiter: RateLimiter::new(tier),
        }
    }

    /// Find the image URL for one query.
    ///
    /// # Errors
    ///
    /// Search failures, or [`ProviderErrorKind::EmptyResponse`] when the
    /// search returns no hits.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_unit(&self, query: &str) -> SlidecastResult<String> {
        let search = &self.search;
        let hits = self
            .limiter
            .execute(move || async move { search.search(query).await })
            .await?;

        hits.into_iter()
            .map(|hit| hit.original)
            .find(|url| !url.is_empty())
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::EmptyResponse(format!(
                    "image search for '{}'",
                    query
                )))
                .into()
            })
    }

    /// Resolve every unresolved image of `slides`.
    ///
    /// Failed lookups leave their unit without a URL.
    #[tracing::instrument(skip(self, slides), fields(slides = slides.len()))]
    pub async fn resolve_all(&self, mut slides: Vec<Slide>) -> Vec<Slide> {
        let requests = image_requests(&slides);
        let lookups = requests.iter().map(|request| async move {
            match self.resolve_unit(&request.query).await {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!(
                        slide = request.slide,
                        slot = ?request.slot,
                        error = %e,
                        "Image resolution failed"
                    );
                    None
                }
            }
        });
        let urls = join_all(lookups).await;

        let mut resolved = 0usize;
        for (request, url) in requests.iter().zip(urls) {
            if let (Some(url), Some(slide)) = (url, slides.get_mut(request.slide)) {
                if apply_image(slide, request.slot, url) {
                    resolved += 1;
                }
            }
        }

        tracing::info!(
            resolved,
            requested = requests.len(),
            "Image resolution finished"
        );
        slides
    }
}
