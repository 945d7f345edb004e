//! Fakes for chat service tests.
#![allow(dead_code)]

use async_trait::async_trait;
use slidecast_chat::{ChatService, InMemoryTranscriptRepository};
use slidecast_core::{GenerateRequest, GenerateResponse};
use slidecast_deck::{DeckGenerator, IllustrationResolver, NarrationSynthesizer};
use slidecast_error::{ProviderError, ProviderErrorKind, SlidecastResult};
use slidecast_interface::{ImageHit, ImageSearch, LanguageModel, SpeechClip, SpeechSynthesizer};
use slidecast_rate_limit::{LanguageModelConfig, TierConfig};
use slidecast_storage::MemoryStorage;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SLIDES: &str = r#"{"slides":[
  {"type":"statement","statement":"Traits","narration":"Traits describe shared behaviour."},
  {"type":"title-bullets","title":{"value":"Uses","narration":"Traits have two common uses."},
   "bullets":[{"value":"Bounds","narration":"They bound generics."}]}
]}"#;

/// Answers title prompts with a quoted title and everything else with slides.
pub struct RoutingModel {
    pub title: String,
    pub slides: Option<String>,
    pub title_calls: AtomicUsize,
    pub slide_calls: AtomicUsize,
}

impl RoutingModel {
    pub fn new(title: &str, slides: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            title: title.to_string(),
            slides: slides.map(str::to_string),
            title_calls: AtomicUsize::new(0),
            slide_calls: AtomicUsize::new(0),
        })
    }

    pub fn titles(&self) -> usize {
        self.title_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for RoutingModel {
    async fn generate(&self, req: &GenerateRequest) -> SlidecastResult<GenerateResponse> {
        let asks_title = req
            .messages
            .iter()
            .any(|m| m.content.starts_with("Generate a single sentence short title"));
        let text = if asks_title {
            self.title_calls.fetch_add(1, Ordering::SeqCst);
            self.title.clone()
        } else {
            self.slide_calls.fetch_add(1, Ordering::SeqCst);
            self.slides.clone().ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::HttpStatus {
                    status_code: 400,
                    message: "no slides today".to_string(),
                })
            })?
        };
        Ok(GenerateResponse { text, model: None })
    }

    fn provider_name(&self) -> &'static str {
        "routing"
    }

    fn model_name(&self) -> &str {
        "routing"
    }
}

pub struct EchoVoice;

#[async_trait]
impl SpeechSynthesizer for EchoVoice {
    async fn synthesize(&self, text: &str) -> SlidecastResult<SpeechClip> {
        Ok(SpeechClip::mp3(text.as_bytes().to_vec()))
    }

    fn voice(&self) -> &str {
        "echo"
    }
}

pub struct StaticSearch;

#[async_trait]
impl ImageSearch for StaticSearch {
    async fn search(&self, query: &str) -> SlidecastResult<Vec<ImageHit>> {
        Ok(vec![ImageHit {
            original: format!("https://img.test/{}", query.replace(' ', "-")),
            title: None,
            thumbnail: None,
        }])
    }
}

pub fn service(model: Arc<RoutingModel>) -> (ChatService, InMemoryTranscriptRepository) {
    let repository = InMemoryTranscriptRepository::new();
    let generator = DeckGenerator::new(
        model,
        NarrationSynthesizer::new(
            Arc::new(EchoVoice),
            Arc::new(MemoryStorage::new()),
            TierConfig::fan_out("voice", 5),
        ),
        IllustrationResolver::new(Arc::new(StaticSearch), TierConfig::fan_out("images", 5)),
        LanguageModelConfig::default(),
    );
    let service = ChatService::new(
        Arc::new(repository.clone()),
        generator,
        LanguageModelConfig::default(),
    );
    (service, repository)
}
