mod common;

use common::{COMPLETION, FakeSearch, FakeVoice, ScriptedModel};
use slidecast_core::{Slide, SlideDeck};
use slidecast_deck::{
    DeckGenerator, IllustrationResolver, NarrationSynthesizer, linearize, parse_slides,
};
use slidecast_rate_limit::{LanguageModelConfig, TierConfig};
use slidecast_storage::{MediaStorage, MemoryStorage};
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn generator(voice: Arc<FakeVoice>, search: Arc<FakeSearch>, storage: MemoryStorage) -> DeckGenerator {
    DeckGenerator::new(
        ScriptedModel::new(COMPLETION),
        NarrationSynthesizer::new(voice, Arc::new(storage), TierConfig::fan_out("voice", 5)),
        IllustrationResolver::new(search, TierConfig::fan_out("images", 5)),
        LanguageModelConfig::default(),
    )
}

fn image_urls(deck: &SlideDeck) -> Vec<Option<String>> {
    deck.slides
        .iter()
        .flat_map(|slide| match slide {
            Slide::MiddleImage { image_url, .. } => vec![image_url.clone()],
            Slide::SideBySideImages {
                first_image_description,
                second_image_description,
            } => vec![
                first_image_description.image_url.clone(),
                second_image_description.image_url.clone(),
            ],
            _ => vec![],
        })
        .collect()
}

#[tokio::test]
async fn test_synthesis_stores_one_clip_per_unit() {
    let storage = MemoryStorage::new();
    let voice = FakeVoice::new(3);
    let synthesizer =
        NarrationSynthesizer::new(voice.clone(), Arc::new(storage.clone()), TierConfig::fan_out("voice", 5));
    let linearized = linearize(parse_slides(COMPLETION).unwrap());

    let audio = synthesizer.synthesize_all("deck-a", &linearized).await;

    let indices: Vec<u32> = audio.iter().map(|a| a.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(audio[2].path, "memory://deck-a/output3.mp3");
    assert_eq!(storage.len().await, 7);
    assert_eq!(
        storage.retrieve("deck-a/output3.mp3").await.unwrap(),
        b"Shared borrows allow reading.".to_vec()
    );
}

#[tokio::test]
async fn test_synthesis_failure_only_drops_that_unit() {
    let storage = MemoryStorage::new();
    let voice = FakeVoice::failing(&["Shared borrows allow reading."], 3);
    let synthesizer =
        NarrationSynthesizer::new(voice, Arc::new(storage.clone()), TierConfig::fan_out("voice", 5));
    let linearized = linearize(parse_slides(COMPLETION).unwrap());

    let audio = synthesizer.synthesize_all("deck-b", &linearized).await;

    let indices: Vec<u32> = audio.iter().map(|a| a.index).collect();
    assert_eq!(indices, vec![1, 2, 4, 5, 6, 7]);
    assert!(!storage.keys().await.contains(&"deck-b/output3.mp3".to_string()));
}

#[tokio::test]
async fn test_synthesis_respects_fan_out_limit() {
    let voice = FakeVoice::new(10);
    let synthesizer = NarrationSynthesizer::new(
        voice.clone(),
        Arc::new(MemoryStorage::new()),
        TierConfig::fan_out("voice", 2),
    );
    let slides: Vec<Slide> = (0..12)
        .map(|i| Slide::Statement {
            statement: format!("s{i}"),
            narration: format!("n{i}"),
            mp3: None,
        })
        .collect();

    let audio = synthesizer.synthesize_all("deck-c", &linearize(slides)).await;

    assert_eq!(audio.len(), 12);
    assert!(voice.peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(voice.calls.load(Ordering::SeqCst), 12);
}

#[tokio::test]
async fn test_illustration_writes_first_hit_onto_each_unit() {
    let resolver = IllustrationResolver::new(FakeSearch::new(3), TierConfig::fan_out("images", 5));
    let slides = linearize(parse_slides(COMPLETION).unwrap()).slides;

    let resolved = resolver.resolve_all(slides).await;
    let deck = SlideDeck {
        id: "x".to_string(),
        slides: resolved,
        audio: vec![],
    };

    assert_eq!(
        image_urls(&deck),
        vec![
            Some("https://img.test/borrow-checker-diagram".to_string()),
            Some("https://img.test/shared-reference".to_string()),
            Some("https://img.test/mutable-reference".to_string()),
            Some("https://img.test/lifetime-annotation".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_illustration_failures_leave_url_unset() {
    let search = FakeSearch::failing(&["shared reference"], &["lifetime annotation"], 3);
    let resolver = IllustrationResolver::new(search.clone(), TierConfig::fan_out("images", 5));
    let slides = linearize(parse_slides(COMPLETION).unwrap()).slides;

    let resolved = resolver.resolve_all(slides).await;
    let deck = SlideDeck {
        id: "x".to_string(),
        slides: resolved,
        audio: vec![],
    };

    let urls = image_urls(&deck);
    assert!(urls[0].is_some());
    assert!(urls[1].is_none());
    assert!(urls[2].is_some());
    assert!(urls[3].is_none());
    assert_eq!(search.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_assembled_deck_is_independent_of_completion_order() {
    let mut decks = Vec::new();
    for _ in 0..5 {
        let generator = generator(FakeVoice::new(15), FakeSearch::new(15), MemoryStorage::new());
        let slides = generator.draft_slides("borrowing").await.unwrap();
        decks.push(generator.assemble("same-id", slides).await);
    }

    let first = &decks[0];
    assert_eq!(first.audio.len(), 7);
    assert_eq!(image_urls(first).iter().flatten().count(), 4);
    for deck in &decks[1..] {
        assert_eq!(deck, first);
    }
}
