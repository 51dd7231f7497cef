//! Pluralization collaborator used by the naming rules.

/// Decides whether an English word is in plural form.
///
/// The naming rules only need a yes/no answer for the final word of a
/// metadata value, so the contract is a single predicate. Implementations
/// must be deterministic.
pub trait Pluralize: Send + Sync {
    /// Returns `true` if `word` is grammatically plural.
    fn is_plural(&self, word: &str) -> bool;
}

/// Heuristic English pluralization.
///
/// Covers the vocabulary that appears in resource names: a small table of
/// irregular plurals, singular endings that happen to end in `s` (`address`,
/// `status`, `analysis`), and a trailing-`s` default. A richer linguistic
/// service can be injected wherever a [`Pluralize`] is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPlurals;

const IRREGULAR_PLURALS: &[&str] = &[
    "children", "criteria", "data", "feet", "geese", "indices", "matrices", "men", "mice",
    "oxen", "people", "teeth", "vertices", "women",
];

impl Pluralize for EnglishPlurals {
    fn is_plural(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        let lower = word.to_lowercase();
        if IRREGULAR_PLURALS.contains(&lower.as_str()) {
            return true;
        }
        if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
            return false;
        }
        lower.ends_with('s')
    }
}
