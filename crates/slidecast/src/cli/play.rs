//! `play` command handler: playback with a timer standing in for audio.

use slidecast::{
    JsonError, Playback, PlaybackEngine, PlaybackSession, SlideDeck, SlidecastResult,
    StorageError, StorageErrorKind,
};
use std::path::Path;
use std::time::Duration;

/// Load a deck file and step through it, printing each frame.
pub async fn play(path: &Path, step_ms: u64) -> SlidecastResult<()> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    let deck: SlideDeck =
        serde_json::from_str(&text).map_err(|e| JsonError::new(e.to_string()))?;
    tracing::info!(deck_id = %deck.id, slides = deck.slides.len(), "Playing deck");

    let session = PlaybackSession::spawn(PlaybackEngine::new(deck));
    let mut directive = session.start().await?;

    loop {
        match &directive {
            Playback::Play { sequence, path } => {
                print_frame(&session).await?;
                println!("  > playing #{} {}", sequence, path);
                tokio::time::sleep(Duration::from_millis(step_ms)).await;
                directive = session.unit_finished().await?;
            }
            Playback::Stalled { sequence } => {
                print_frame(&session).await?;
                println!("  > no audio for #{}, stopping", sequence);
                break;
            }
            Playback::Ended => {
                println!("  > end of deck");
                break;
            }
        }
    }

    session.shutdown().await?;
    Ok(())
}

async fn print_frame(session: &PlaybackSession) -> SlidecastResult<()> {
    if let Some(frame) = session.frame().await? {
        println!("{}", frame);
    }
    Ok(())
}
