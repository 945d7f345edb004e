//! Starter questions shown on an empty chat.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A suggested question, split into a lead-in and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Lead-in, e.g. "What is"
    pub title: String,
    /// Remainder of the question
    pub question: String,
}

impl Suggestion {
    /// The full question text.
    pub fn prompt(&self) -> String {
        format!("{} {}", self.title, self.question)
    }
}

const SUGGESTIONS: [(&str, &str); 10] = [
    ("What is", "the Heisenberg Uncertainty Principle in quantum mechanics?"),
    ("What is", "a Riemann surface in complex analysis?"),
    ("How do", "catalysts lower the activation energy of reactions?"),
    ("What is", "CRISPR-Cas9 and how does it edit genes?"),
    ("How do", "externalities affect market efficiency?"),
    ("What does", "the Black-Scholes model calculate?"),
    ("Why is", "Big O notation important for algorithms?"),
    ("What principles", "underpin suspension bridge design?"),
    ("How does", "deforestation impact the carbon cycle?"),
    ("What does", "Porter's Five Forces model analyze?"),
];

/// Number of suggestions shown.
pub const SUGGESTION_COUNT: usize = 4;

/// The full suggestion list in its fixed order.
pub fn all_suggestions() -> Vec<Suggestion> {
    SUGGESTIONS
        .iter()
        .map(|(title, question)| Suggestion {
            title: title.to_string(),
            question: question.to_string(),
        })
        .collect()
}

/// Shuffle the list with `rng` and keep the first `count`.
pub fn pick_suggestions<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Suggestion> {
    let mut all = all_suggestions();
    all.shuffle(rng);
    all.truncate(count);
    all
}

/// Four suggestions in random order.
pub fn suggestions() -> Vec<Suggestion> {
    pick_suggestions(&mut rand::thread_rng(), SUGGESTION_COUNT)
}
