// Anagram driver.
//
// Walks the permutations of the input letters in lexicographic order and
// runs a pattern search on each. A search that dies after `depth` positions
// proves that no word starts with those symbols, so the walk skips every
// permutation sharing them instead of visiting each one.

use tracing::{debug, trace};
use wordhoard_core::alphabet::WILDCARD;
use wordhoard_core::{CancelToken, Dictionary, SearchError};

use crate::multi::{self, MultiWordOptions};
use crate::pattern::{self, SearchOutcome};
use crate::permutation::PermutationWalker;

/// A symbol of an anagram query. Wildcards order after every letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Symbol {
    Letter(char),
    Wildcard,
}

impl Symbol {
    fn as_char(self) -> char {
        match self {
            Symbol::Letter(c) => c,
            Symbol::Wildcard => WILDCARD,
        }
    }
}

fn symbols(word: &str) -> Vec<Symbol> {
    word.to_lowercase()
        .chars()
        .map(|c| if c == WILDCARD { Symbol::Wildcard } else { Symbol::Letter(c) })
        .collect()
}

/// Return every dictionary word made of exactly the letters of `word`, with
/// `?` standing for any one letter. Sorted, without duplicates.
pub fn anagram(
    dict: &Dictionary,
    word: &str,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    let matches = walk_anagrams(word, cancel, |candidate| {
        pattern::find_match(dict, candidate, cancel)
    })?;
    debug!(word, matches = matches.len(), "anagram");
    Ok(matches)
}

/// Return every phrase made of exactly the letters of `word`, with `?`
/// standing for any one letter.
///
/// Only phrases whose words are in non-decreasing order are returned, so each
/// combination of words appears once (`"a ball"`, never `"ball a"`). The
/// minimum word length is relaxed as described in [`MultiWordOptions`].
pub fn multi_anagram(
    dict: &Dictionary,
    word: &str,
    options: MultiWordOptions,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    let matches = multi::relax(options, |min_word_length| {
        let mut found = walk_anagrams(word, cancel, |candidate| {
            multi::find_multi_match(dict, candidate, min_word_length, cancel)
        })?;
        found.retain(|phrase| is_canonical(phrase));
        Ok(found)
    })?;
    debug!(word, matches = matches.len(), "multi-word anagram");
    Ok(matches)
}

/// Returns `true` if the space-separated words are in non-decreasing order.
fn is_canonical(phrase: &str) -> bool {
    let words: Vec<&str> = phrase.split(' ').collect();
    words.windows(2).all(|pair| pair[0] <= pair[1])
}

fn walk_anagrams<F>(
    word: &str,
    cancel: &CancelToken,
    mut search: F,
) -> Result<Vec<String>, SearchError>
where
    F: FnMut(&str) -> Result<SearchOutcome, SearchError>,
{
    let mut walker = PermutationWalker::new(symbols(word));
    let mut results = Vec::new();
    let mut visited = 0usize;

    while let Some(permutation) = walker.current() {
        cancel.check()?;
        let length = permutation.len();
        let candidate: String = permutation.iter().map(|s| s.as_char()).collect();

        let outcome = search(&candidate)?;
        visited += 1;
        let keep = if outcome.matches.is_empty() {
            outcome.depth
        } else {
            length
        };
        results.extend(outcome.matches);
        walker.advance(keep);
    }

    trace!(visited, "permutations searched");
    results.sort_unstable();
    results.dedup();
    Ok(results)
}
