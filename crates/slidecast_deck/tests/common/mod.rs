//! Fake collaborators for deck generation tests.
#![allow(dead_code)]

use async_trait::async_trait;
use rand::Rng;
use slidecast_core::{GenerateRequest, GenerateResponse};
use slidecast_error::{ProviderError, ProviderErrorKind, SlidecastResult};
use slidecast_interface::{ImageHit, ImageSearch, LanguageModel, SpeechClip, SpeechSynthesizer};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const COMPLETION: &str = r#"{"slides": [
  {"type": "statement", "statement": "Borrowing", "narration": "Borrowing lends access without moving."},
  {"type": "title-bullets",
   "title": {"value": "Two kinds", "narration": "There are two kinds of borrow."},
   "bullets": [
     {"value": "Shared", "narration": "Shared borrows allow reading."},
     {"value": "Mutable", "narration": "Mutable borrows are exclusive."}
   ]},
  {"type": "middle-image", "imageDescription": "borrow checker diagram", "narration": "Here is the checker at work."},
  {"type": "side-by-side-images",
   "firstImageDescription": {"value": "shared reference", "narration": "On the left, many readers."},
   "secondImageDescription": {"value": "mutable reference", "narration": "On the right, one writer."}},
  {"type": "middle-image", "imageDescription": "lifetime annotation", "narration": "Lifetimes tie it together."}
]}"#;

fn permanent(message: &str) -> ProviderError {
    ProviderError::new(ProviderErrorKind::HttpStatus {
        status_code: 400,
        message: message.to_string(),
    })
}

async fn jitter(max_ms: u64) {
    if max_ms > 0 {
        let ms = rand::thread_rng().gen_range(0..=max_ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Returns a canned completion and counts calls.
pub struct ScriptedModel {
    pub completion: String,
    pub calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn new(completion: &str) -> Arc<Self> {
        Arc::new(Self {
            completion: completion.to_string(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn generate(&self, _req: &GenerateRequest) -> SlidecastResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GenerateResponse {
            text: self.completion.clone(),
            model: Some("scripted".to_string()),
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Always fails with a permanent provider error.
pub struct BrokenModel;

#[async_trait]
impl LanguageModel for BrokenModel {
    async fn generate(&self, _req: &GenerateRequest) -> SlidecastResult<GenerateResponse> {
        Err(permanent("model unavailable").into())
    }

    fn provider_name(&self) -> &'static str {
        "broken"
    }

    fn model_name(&self) -> &str {
        "broken"
    }
}

/// Speaks the narration back as bytes, after a random delay.
pub struct FakeVoice {
    pub fail_on: HashSet<String>,
    pub max_delay_ms: u64,
    pub calls: AtomicUsize,
    pub active: AtomicUsize,
    pub peak: AtomicUsize,
}

impl FakeVoice {
    pub fn new(max_delay_ms: u64) -> Arc<Self> {
        Self::failing(&[], max_delay_ms)
    }

    pub fn failing(narrations: &[&str], max_delay_ms: u64) -> Arc<Self> {
        Arc::new(Self {
            fail_on: narrations.iter().map(|n| n.to_string()).collect(),
            max_delay_ms,
            calls: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeVoice {
    async fn synthesize(&self, text: &str) -> SlidecastResult<SpeechClip> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        jitter(self.max_delay_ms).await;
        self.active.fetch_sub(1, Ordering::SeqCst);

        if self.fail_on.contains(text) {
            return Err(permanent("voice rejected text").into());
        }
        Ok(SpeechClip::mp3(text.as_bytes().to_vec()))
    }

    fn voice(&self) -> &str {
        "fake"
    }
}

/// Returns `https://img.test/{query}` after a random delay.
pub struct FakeSearch {
    pub fail_on: HashSet<String>,
    pub empty_on: HashSet<String>,
    pub max_delay_ms: u64,
    pub calls: AtomicUsize,
}

impl FakeSearch {
    pub fn new(max_delay_ms: u64) -> Arc<Self> {
        Self::failing(&[], &[], max_delay_ms)
    }

    pub fn failing(fail_on: &[&str], empty_on: &[&str], max_delay_ms: u64) -> Arc<Self> {
        Arc::new(Self {
            fail_on: fail_on.iter().map(|q| q.to_string()).collect(),
            empty_on: empty_on.iter().map(|q| q.to_string()).collect(),
            max_delay_ms,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ImageSearch for FakeSearch {
    async fn search(&self, query: &str) -> SlidecastResult<Vec<ImageHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        jitter(self.max_delay_ms).await;

        if self.fail_on.contains(query) {
            return Err(permanent("search failed").into());
        }
        if self.empty_on.contains(query) {
            return Ok(Vec::new());
        }
        Ok(vec![
            ImageHit {
                original: format!("https://img.test/{}", query.replace(' ', "-")),
                title: None,
                thumbnail: None,
            },
            ImageHit {
                original: "https://img.test/second-best".to_string(),
                title: None,
                thumbnail: None,
            },
        ])
    }
}
