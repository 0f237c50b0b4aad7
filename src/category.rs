//! Category Inference
//!
//! Backfills the category of items persisted before the field existed.
//! Only interrogatives and personal pronouns are recognised; everything else
//! is plain vocabulary. Not used during normal scheduling.

use crate::types::Category;

/// German interrogatives, lowercase
const INTERROGATIVES: &[&str] = &[
    "wer", "wen", "wem", "wessen", "was", "wo", "woher", "wohin", "wann", "warum", "weshalb",
    "wieso", "wie", "wie viel", "wie viele", "wieviel", "welcher", "welche", "welches",
    "welchen", "welchem", "womit", "wozu", "wofür", "worüber", "woran", "worauf",
];

/// Personal pronouns in nominative, accusative and dative, lowercase
const PERSONAL_PRONOUNS: &[&str] = &[
    "ich", "du", "er", "sie", "es", "wir", "ihr", "mich", "dich", "ihn", "uns", "euch", "mir",
    "dir", "ihm", "ihnen",
];

/// Formal address; lowercased these collide with third-person plural
const FORMAL_PRONOUNS: &[&str] = &["Sie", "Ihnen"];

/// Infer a category from the learned term.
pub fn infer_category(term: &str) -> Category {
    let cleaned = clean_term(term);

    if FORMAL_PRONOUNS.contains(&cleaned.as_str()) {
        return Category::PersonalPronoun;
    }

    let lowered = cleaned.to_lowercase();
    if INTERROGATIVES.contains(&lowered.as_str()) {
        Category::Interrogative
    } else if PERSONAL_PRONOUNS.contains(&lowered.as_str()) {
        Category::PersonalPronoun
    } else {
        Category::Vocabulary
    }
}

/// Trim, drop sentence punctuation, collapse inner whitespace.
fn clean_term(term: &str) -> String {
    term.trim_matches(|c: char| c.is_whitespace() || matches!(c, '?' | '!' | '.' | ',' | '¿'))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
