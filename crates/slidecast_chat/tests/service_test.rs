mod common;

use common::{service, RoutingModel, SLIDES};
use slidecast_chat::{RenderedTurn, TranscriptRepository, PLACEHOLDER_TITLE};
use slidecast_core::{Role, SlideDeck};
use slidecast_error::{ChatErrorKind, SlidecastErrorKind};

#[tokio::test]
async fn test_ask_in_new_chat_records_both_turns() {
    let model = RoutingModel::new("\"Rust Traits Explained\"", Some(SLIDES));
    let (service, repository) = service(model.clone());

    let answer = service.ask(None, "  What are traits?  ").await.unwrap();

    assert_eq!(answer.deck().unit_count(), 3);
    assert_eq!(answer.deck().audio.len(), 3);
    assert_eq!(model.titles(), 1);

    let messages = repository.list_messages(answer.chat().id).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].text, "What are traits?");
    assert_eq!(messages[1].role, Role::Assistant);

    let stored = SlideDeck::from_transcript_text(&messages[1].text).unwrap();
    assert_eq!(&stored, answer.deck());
}

#[tokio::test]
async fn test_listed_titles_are_cleaned() {
    let (service, _) = service(RoutingModel::new("  \"Rust Traits Explained\" ", Some(SLIDES)));
    service.ask(None, "What are traits?").await.unwrap();

    let chats = service.list_chats().await.unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].title, "Rust Traits Explained");
}

#[tokio::test]
async fn test_empty_title_falls_back() {
    let (service, _) = service(RoutingModel::new("   ", Some(SLIDES)));
    let answer = service.ask(None, "What are traits?").await.unwrap();

    assert_eq!(answer.chat().title, "Convo");
}

#[tokio::test]
async fn test_placeholder_title_is_regenerated() {
    let model = RoutingModel::new("Traits", Some(SLIDES));
    let (service, repository) = service(model.clone());
    let chat = repository.create_chat(PLACEHOLDER_TITLE).await.unwrap();

    let answer = service.ask(Some(chat.id), "What are traits?").await.unwrap();

    assert_eq!(answer.chat().title, "Traits");
    assert_eq!(model.titles(), 1);

    service.ask(Some(chat.id), "And generics?").await.unwrap();
    assert_eq!(model.titles(), 1);
}

#[tokio::test]
async fn test_failed_generation_keeps_only_the_question() {
    let (service, repository) = service(RoutingModel::new("Traits", None));
    let chat = repository.create_chat("Traits").await.unwrap();

    let err = service.ask(Some(chat.id), "What are traits?").await.unwrap_err();
    assert!(matches!(err.kind(), SlidecastErrorKind::Provider(_)));

    let messages = repository.list_messages(chat.id).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::User);
}

#[tokio::test]
async fn test_rejects_empty_question() {
    let (service, repository) = service(RoutingModel::new("Traits", Some(SLIDES)));

    let err = service.ask(None, " \n ").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        SlidecastErrorKind::Chat(e) if e.kind == ChatErrorKind::EmptyQuestion
    ));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_unknown_chat_is_not_found() {
    let (service, _) = service(RoutingModel::new("Traits", Some(SLIDES)));

    let err = service.ask(Some(42), "What are traits?").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        SlidecastErrorKind::Chat(e) if e.kind == ChatErrorKind::ChatNotFound(42)
    ));
}

#[tokio::test]
async fn test_transcript_autoplays_latest_deck_only() {
    let (service, _) = service(RoutingModel::new("Traits", Some(SLIDES)));
    let first = service.ask(None, "What are traits?").await.unwrap();
    let id = first.chat().id;
    service.ask(Some(id), "And generics?").await.unwrap();

    let turns = service.transcript(id).await.unwrap();
    let autoplay: Vec<Option<bool>> = turns
        .iter()
        .map(|t| match t {
            RenderedTurn::Presentation { autoplay, .. } => Some(*autoplay),
            _ => None,
        })
        .collect();
    assert_eq!(autoplay, vec![None, Some(false), None, Some(true)]);
}
