mod common;

use common::{BrokenModel, COMPLETION, FakeSearch, FakeVoice, ScriptedModel};
use slidecast_core::SlideDeck;
use slidecast_deck::{DeckGenerator, IllustrationResolver, NarrationSynthesizer};
use slidecast_error::{DeckErrorKind, SlidecastErrorKind};
use slidecast_interface::LanguageModel;
use slidecast_rate_limit::{LanguageModelConfig, TierConfig};
use slidecast_storage::MemoryStorage;
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn build(
    model: Arc<dyn LanguageModel>,
    voice: Arc<FakeVoice>,
    search: Arc<FakeSearch>,
    storage: MemoryStorage,
) -> DeckGenerator {
    DeckGenerator::new(
        model,
        NarrationSynthesizer::new(voice, Arc::new(storage), TierConfig::fan_out("voice", 5)),
        IllustrationResolver::new(search, TierConfig::fan_out("images", 5)),
        LanguageModelConfig::default(),
    )
}

#[tokio::test]
async fn test_generates_a_complete_deck() {
    let storage = MemoryStorage::new();
    let model = ScriptedModel::new(COMPLETION);
    let generator = build(model.clone(), FakeVoice::new(2), FakeSearch::new(2), storage.clone());

    let deck = generator.generate("How does borrowing work?").await.unwrap();

    assert!(uuid::Uuid::parse_str(&deck.id).is_ok());
    assert_eq!(deck.slides.len(), 5);
    assert_eq!(deck.unit_count(), 7);
    let numbers: Vec<u32> = deck.sequence_numbers().into_iter().flatten().collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(deck.audio.len(), 7);
    assert_eq!(
        deck.audio[0].path,
        format!("memory://{}/output1.mp3", deck.id)
    );
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    assert_eq!(storage.len().await, 7);

    let json = serde_json::to_string(&deck).unwrap();
    let reparsed: SlideDeck = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, deck);
}

#[tokio::test]
async fn test_each_deck_gets_a_fresh_id() {
    let generator = build(
        ScriptedModel::new(COMPLETION),
        FakeVoice::new(0),
        FakeSearch::new(0),
        MemoryStorage::new(),
    );
    let a = generator.generate("q").await.unwrap();
    let b = generator.generate("q").await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_model_failure_is_fatal_and_starts_no_fan_out() {
    let voice = FakeVoice::new(0);
    let search = FakeSearch::new(0);
    let generator = build(Arc::new(BrokenModel), voice.clone(), search.clone(), MemoryStorage::new());

    let err = generator.generate("q").await.unwrap_err();

    assert!(matches!(err.kind(), SlidecastErrorKind::Provider(_)));
    assert_eq!(voice.calls.load(Ordering::SeqCst), 0);
    assert_eq!(search.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_slide_is_fatal_before_any_fan_out() {
    let voice = FakeVoice::new(0);
    let search = FakeSearch::new(0);
    let storage = MemoryStorage::new();
    let completion = r#"{"slides": [
        {"type": "middle-image", "imageDescription": "x", "narration": "n"},
        {"type": "video", "url": "clip.mp4"}
    ]}"#;
    let generator = build(
        ScriptedModel::new(completion),
        voice.clone(),
        search.clone(),
        storage.clone(),
    );

    let err = generator.generate("q").await.unwrap_err();

    match err.kind() {
        SlidecastErrorKind::Deck(e) => assert!(matches!(
            &e.kind,
            DeckErrorKind::UnknownSlideType { index: 1, found } if found == "video"
        )),
        other => panic!("unexpected error {other}"),
    }
    assert_eq!(voice.calls.load(Ordering::SeqCst), 0);
    assert_eq!(search.calls.load(Ordering::SeqCst), 0);
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_empty_completion_is_fatal() {
    let generator = build(
        ScriptedModel::new("  "),
        FakeVoice::new(0),
        FakeSearch::new(0),
        MemoryStorage::new(),
    );
    let err = generator.generate("q").await.unwrap_err();
    assert!(matches!(err.kind(), SlidecastErrorKind::Generation(_)));
}

#[tokio::test]
async fn test_unit_failures_degrade_instead_of_failing() {
    let voice = FakeVoice::failing(&["Here is the checker at work."], 2);
    let search = FakeSearch::failing(&["borrow checker diagram"], &[], 2);
    let generator = build(ScriptedModel::new(COMPLETION), voice, search, MemoryStorage::new());

    let deck = generator.generate("q").await.unwrap();

    let indices: Vec<u32> = deck.audio.iter().map(|a| a.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 6, 7]);
    match &deck.slides[2] {
        slidecast_core::Slide::MiddleImage { image_url, mp3, .. } => {
            assert!(image_url.is_none());
            assert_eq!(*mp3, Some(5));
        }
        other => panic!("unexpected slide {other:?}"),
    }
}
