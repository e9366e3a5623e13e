//! Fuzzy phrase matching
//!
//! OCR output is noisy (dropped characters, misread glyphs), so exact string
//! equality would miss far too many real hits. Matching is a normalized
//! Levenshtein similarity against a tunable cutoff instead.

use crate::watchlist::WatchList;

/// Reference cutoff; ~one substitution in an eleven-character phrase.
pub const DEFAULT_CUTOFF: f64 = 0.90;

/// Similarity-based matcher over the candidate x watch-list cross product.
#[derive(Debug, Clone, Copy)]
pub struct PhraseMatcher {
    cutoff: f64,
}

impl PhraseMatcher {
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// True if any candidate scores at or above the cutoff against any
    /// watch-list entry. Short-circuits on the first sufficient pair; the
    /// caller only needs a boolean, not the best match.
    ///
    /// Candidates are case-folded here; watch-list entries are already folded
    /// at load time.
    pub fn has_match(&self, candidates: &[String], watch_list: &WatchList) -> bool {
        for candidate in candidates {
            let folded = candidate.to_lowercase();
            for target in watch_list.phrases() {
                let score = strsim::normalized_levenshtein(&folded, target);
                if score >= self.cutoff {
                    log::debug!(
                        "matched '{}' against '{}' (score {:.3} >= {:.2})",
                        folded.trim_end(),
                        target,
                        score,
                        self.cutoff
                    );
                    return true;
                }
            }
        }
        false
    }
}

impl Default for PhraseMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_fold_equality_matches() {
        let list = WatchList::from_phrases(["hello world"]);
        let matcher = PhraseMatcher::default();
        assert!(matcher.has_match(&candidates(&["HELLO WORLD"]), &list));
    }

    #[test]
    fn test_single_substitution_sits_above_cutoff() {
        // distance 1 over 11 characters: 1 - 1/11 = 0.9090..., just over 0.90
        let score = strsim::normalized_levenshtein("hellx world", "hello world");
        assert!((score - (1.0 - 1.0 / 11.0)).abs() < 1e-9);

        let list = WatchList::from_phrases(["hello world"]);
        let matcher = PhraseMatcher::new(DEFAULT_CUTOFF);
        assert!(matcher.has_match(&candidates(&["hellx world"]), &list));
    }

    #[test]
    fn test_two_substitutions_fall_below_cutoff() {
        // distance 2 over 11 characters: 1 - 2/11 = 0.8181..., below 0.90
        let score = strsim::normalized_levenshtein("hellx wxrld", "hello world");
        assert!((score - (1.0 - 2.0 / 11.0)).abs() < 1e-9);

        let list = WatchList::from_phrases(["hello world"]);
        let matcher = PhraseMatcher::new(DEFAULT_CUTOFF);
        assert!(!matcher.has_match(&candidates(&["hellx wxrld"]), &list));
    }

    #[test]
    fn test_empty_sides_never_match() {
        let matcher = PhraseMatcher::default();

        let list = WatchList::from_phrases(["anything"]);
        assert!(!matcher.has_match(&[], &list));

        let empty = WatchList::from_phrases(Vec::<String>::new());
        assert!(!matcher.has_match(&candidates(&["anything"]), &empty));
    }

    #[test]
    fn test_unrelated_text_does_not_match() {
        let list = WatchList::from_phrases(["exalted orb"]);
        let matcher = PhraseMatcher::default();
        assert!(!matcher.has_match(&candidates(&["scroll of wisdom"]), &list));
    }
}
