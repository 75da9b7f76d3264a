// Single-word wildcard search.
//
// Breadth-first over stems: every round extends each live stem by the letters
// allowed at the next pattern position and keeps only the extensions that are
// still dictionary prefixes. Surviving stems are validated as whole words
// once the pattern is used up.

use tracing::{debug, trace};
use wordhoard_core::alphabet::{ALPHABET, WILDCARD};
use wordhoard_core::{CancelToken, Dictionary, SearchError};

/// Result of one search pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Matches, sorted.
    pub matches: Vec<String>,
    /// Number of pattern positions examined before the search finished or
    /// ran out of live stems.
    ///
    /// When there are no matches and `depth` is less than the pattern length,
    /// nothing in the dictionary starts with the first `depth` symbols of the
    /// pattern.
    pub depth: usize,
}

/// Return every dictionary word matching `pattern`, where `?` stands for
/// exactly one letter. The pattern is lowercased first.
pub fn match_pattern(
    dict: &Dictionary,
    pattern: &str,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    let outcome = find_match(dict, &pattern.to_lowercase(), cancel)?;
    debug!(pattern, matches = outcome.matches.len(), "pattern match");
    Ok(outcome.matches)
}

/// Search for `pattern` (already lowercase), also reporting how deep the
/// search got. See [`SearchOutcome::depth`].
pub fn find_match(
    dict: &Dictionary,
    pattern: &str,
    cancel: &CancelToken,
) -> Result<SearchOutcome, SearchError> {
    cancel.check()?;
    let mut stems = vec![String::new()];
    let mut depth = 0;

    for (offset, symbol) in pattern.chars().enumerate() {
        if stems.is_empty() {
            break;
        }
        cancel.check()?;

        let mut next_stems = Vec::with_capacity(stems.len());
        if symbol == WILDCARD {
            for &letter in ALPHABET {
                cancel.check()?;
                extend_stems(dict, &stems, letter as char, &mut next_stems);
            }
        } else {
            extend_stems(dict, &stems, symbol, &mut next_stems);
        }

        trace!(offset, live = next_stems.len(), "expanded stems");
        depth = offset + 1;
        stems = next_stems;
    }

    let mut matches: Vec<String> = stems.into_iter().filter(|s| dict.valid(s)).collect();
    matches.sort_unstable();
    Ok(SearchOutcome { matches, depth })
}

fn extend_stems(dict: &Dictionary, stems: &[String], letter: char, out: &mut Vec<String>) {
    for stem in stems {
        let mut candidate = String::with_capacity(stem.len() + 1);
        candidate.push_str(stem);
        candidate.push(letter);
        if dict.is_prefix(&candidate) {
            out.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn sample() -> Dictionary {
        Dictionary::from_words(["foo", "bar", "baz", "quux"], 10)
    }

    fn run(pattern: &str) -> Vec<String> {
        match_pattern(&sample(), pattern, &CancelToken::none()).unwrap()
    }

    #[test]
    fn no_match() {
        assert!(run("fr?").is_empty());
    }

    #[test]
    fn exact_match() {
        assert_eq!(run("foo"), ["foo"]);
        assert!(run("fob").is_empty());
    }

    #[test]
    fn single_wildcard() {
        assert_eq!(run("fo?"), ["foo"]);
        assert_eq!(run("ba?"), ["bar", "baz"]);
    }

    #[test]
    fn all_wildcards() {
        assert_eq!(run("???"), ["bar", "baz", "foo"]);
        assert_eq!(run("????"), ["quux"]);
        assert!(run("?????").is_empty());
    }

    #[test]
    fn pattern_is_lowercased() {
        assert_eq!(run("BA?"), ["bar", "baz"]);
    }

    #[test]
    fn prefix_is_not_a_match() {
        assert!(run("ba").is_empty());
        assert!(run("").is_empty());
    }

    #[test]
    fn depth_reports_dead_prefix() {
        let dict = sample();
        let outcome = find_match(&dict, "fxo", &CancelToken::none()).unwrap();
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.depth, 2);

        let outcome = find_match(&dict, "xoo", &CancelToken::none()).unwrap();
        assert_eq!(outcome.depth, 1);

        let outcome = find_match(&dict, "foo", &CancelToken::none()).unwrap();
        assert_eq!(outcome.depth, 3);
    }

    #[test]
    fn expired_deadline_is_reported() {
        let cancel = CancelToken::with_deadline(Instant::now());
        let err = match_pattern(&sample(), "???", &cancel).unwrap_err();
        assert_eq!(err, SearchError::DeadlineExceeded);
    }

    #[test]
    fn cancelled_token_is_reported() {
        let cancel = CancelToken::none();
        cancel.cancel();
        let err = match_pattern(&sample(), "foo", &cancel).unwrap_err();
        assert_eq!(err, SearchError::Cancelled);
    }
}
