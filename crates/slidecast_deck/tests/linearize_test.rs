use slidecast_core::{ImageUnit, NarratedText, Slide};
use slidecast_deck::{linearize, number_slide};

fn statement(narration: &str) -> Slide {
    Slide::Statement {
        statement: "text".to_string(),
        narration: narration.to_string(),
        mp3: None,
    }
}

fn title_bullets(title: &str, bullets: &[&str]) -> Slide {
    Slide::TitleBullets {
        title: NarratedText::new("title", title),
        bullets: bullets
            .iter()
            .map(|b| NarratedText::new("bullet", *b))
            .collect(),
    }
}

fn middle_image(narration: &str) -> Slide {
    Slide::MiddleImage {
        image_description: "a picture".to_string(),
        image_url: None,
        narration: narration.to_string(),
        mp3: None,
    }
}

fn side_by_side(first: &str, second: &str) -> Slide {
    Slide::SideBySideImages {
        first_image_description: ImageUnit::new("left", first),
        second_image_description: ImageUnit::new("right", second),
    }
}

#[test]
fn test_mixed_deck_numbers_in_reveal_order() {
    let result = linearize(vec![
        statement("stmt"),
        title_bullets("title", &["b1", "b2"]),
        middle_image("img"),
    ]);

    assert_eq!(result.narrations, vec!["stmt", "title", "b1", "b2", "img"]);
    let numbers: Vec<u32> = result
        .slides
        .iter()
        .flat_map(Slide::sequence_numbers)
        .flatten()
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_three_bullets_consume_four_numbers() {
    let (slide, narrations, next) = number_slide(title_bullets("t", &["a", "b", "c"]), 10);
    assert_eq!(
        slide.sequence_numbers(),
        vec![Some(10), Some(11), Some(12), Some(13)]
    );
    assert_eq!(narrations, vec!["t", "a", "b", "c"]);
    assert_eq!(next, 14);
}

#[test]
fn test_title_without_bullets_still_takes_one_number() {
    let result = linearize(vec![title_bullets("alone", &[]), statement("after")]);
    assert_eq!(result.slides[0].sequence_numbers(), vec![Some(1)]);
    assert_eq!(result.slides[1].sequence_numbers(), vec![Some(2)]);
}

#[test]
fn test_side_by_side_numbers_first_then_second() {
    let result = linearize(vec![side_by_side("left", "right")]);
    assert_eq!(result.narrations, vec!["left", "right"]);
    match &result.slides[0] {
        Slide::SideBySideImages {
            first_image_description,
            second_image_description,
        } => {
            assert_eq!(first_image_description.mp3, Some(1));
            assert_eq!(second_image_description.mp3, Some(2));
        }
        other => panic!("unexpected slide {other:?}"),
    }
}

#[test]
fn test_numbers_are_dense_and_unique_for_any_deck() {
    let decks = vec![
        vec![],
        vec![statement("a")],
        vec![side_by_side("a", "b"), side_by_side("c", "d")],
        vec![
            title_bullets("t", &["1", "2", "3", "4", "5"]),
            middle_image("m"),
            title_bullets("u", &[]),
            side_by_side("l", "r"),
            statement("s"),
        ],
    ];

    for slides in decks {
        let expected_total: usize = slides.iter().map(Slide::unit_count).sum();
        let result = linearize(slides);
        let mut numbers: Vec<u32> = result
            .slides
            .iter()
            .flat_map(Slide::sequence_numbers)
            .map(|n| n.unwrap())
            .collect();
        numbers.sort();
        let dense: Vec<u32> = (1..=expected_total as u32).collect();
        assert_eq!(numbers, dense);
        assert_eq!(result.narrations.len(), expected_total);
    }
}

#[test]
fn test_existing_numbers_are_overwritten() {
    let stale = Slide::Statement {
        statement: "s".to_string(),
        narration: "n".to_string(),
        mp3: Some(42),
    };
    let result = linearize(vec![stale]);
    assert_eq!(result.slides[0].sequence_numbers(), vec![Some(1)]);
}

#[test]
fn test_narration_position_matches_sequence_number() {
    let result = linearize(vec![
        title_bullets("t", &["a"]),
        side_by_side("l", "r"),
        statement("s"),
    ]);
    for slide in &result.slides {
        for unit in slide.units() {
            let sequence = unit.sequence.unwrap() as usize;
            assert_eq!(result.narrations[sequence - 1], unit.narration);
        }
    }
}
