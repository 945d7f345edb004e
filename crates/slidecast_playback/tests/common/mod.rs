//! Deck builders and a fake "unit finished" driver.
#![allow(dead_code)]

use slidecast_core::{AudioAsset, ImageUnit, NarratedText, Slide, SlideDeck};
use slidecast_playback::{Playback, PlaybackEngine};

pub fn statement(n: u32) -> Slide {
    Slide::Statement {
        statement: format!("statement {n}"),
        narration: format!("narration {n}"),
        mp3: Some(n),
    }
}

/// Title at `first`, bullets numbered after it.
pub fn title_bullets(first: u32, bullets: u32) -> Slide {
    let mut title = NarratedText::new(format!("title {first}"), format!("narration {first}"));
    title.mp3 = Some(first);
    Slide::TitleBullets {
        title,
        bullets: (1..=bullets)
            .map(|i| {
                let n = first + i;
                let mut bullet = NarratedText::new(format!("bullet {n}"), format!("narration {n}"));
                bullet.mp3 = Some(n);
                bullet
            })
            .collect(),
    }
}

pub fn middle_image(n: u32) -> Slide {
    Slide::MiddleImage {
        image_description: format!("image {n}"),
        image_url: Some(format!("https://img.test/{n}.png")),
        narration: format!("narration {n}"),
        mp3: Some(n),
    }
}

/// Left image at `first`, right image at `first + 1`.
pub fn side_by_side(first: u32) -> Slide {
    let unit = |n: u32| {
        let mut unit = ImageUnit::new(format!("image {n}"), format!("narration {n}"));
        unit.mp3 = Some(n);
        unit
    };
    Slide::SideBySideImages {
        first_image_description: unit(first),
        second_image_description: unit(first + 1),
    }
}

pub fn clips(indices: impl IntoIterator<Item = u32>) -> Vec<AudioAsset> {
    indices
        .into_iter()
        .map(|i| AudioAsset::new(i, format!("deck/output{i}.mp3")))
        .collect()
}

pub fn deck(slides: Vec<Slide>, audio: Vec<AudioAsset>) -> SlideDeck {
    SlideDeck {
        id: "deck".to_string(),
        slides,
        audio,
    }
}

/// statement, title-bullets(2), middle-image, side-by-side: seven units.
pub fn mixed_deck() -> SlideDeck {
    deck(
        vec![statement(1), title_bullets(2, 2), middle_image(5), side_by_side(6)],
        clips(1..=7),
    )
}

/// Start the engine and feed finish events until it stops playing.
///
/// Returns every directive in order, the start directive included.
pub fn drive(engine: &mut PlaybackEngine) -> Vec<Playback> {
    let mut directives = vec![engine.start()];
    while directives.last().is_some_and(Playback::is_play) {
        directives.push(engine.unit_finished());
    }
    directives
}
