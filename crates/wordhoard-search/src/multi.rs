// Multi-word wildcard search.
//
// Same breadth-first expansion as the single-word search, but a stem is a
// phrase: the words completed so far plus one word in progress. Whenever the
// word in progress becomes a valid word of at least the minimum length, the
// stem forks: one copy keeps extending the word, the other closes it and
// starts a new one.

use tracing::{debug, trace};
use wordhoard_core::alphabet::{ALPHABET, WILDCARD};
use wordhoard_core::{CancelToken, Dictionary, SearchError};

use crate::pattern::SearchOutcome;

/// Bounds for the minimum word length used when splitting into phrases.
///
/// Searches start at `max_min_word_length` and relax one step at a time down
/// to `min_min_word_length`, stopping at the first length that yields
/// anything. Long minimums keep the search narrow when no split is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiWordOptions {
    pub max_min_word_length: usize,
    pub min_min_word_length: usize,
}

impl Default for MultiWordOptions {
    fn default() -> Self {
        Self {
            max_min_word_length: 5,
            min_min_word_length: 1,
        }
    }
}

impl MultiWordOptions {
    /// Minimum word lengths to try, longest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> {
        let ceiling = self.max_min_word_length.max(1);
        let floor = self.min_min_word_length.clamp(1, ceiling);
        (floor..=ceiling).rev()
    }
}

#[derive(Debug, Clone, Default)]
struct Phrase {
    words: Vec<String>,
    current: String,
}

impl Phrase {
    fn joined(&self) -> String {
        let mut out = String::new();
        for word in &self.words {
            out.push_str(word);
            out.push(' ');
        }
        out.push_str(&self.current);
        out
    }
}

/// Return every phrase matching `pattern`, where `?` stands for exactly one
/// letter and words are separated by single spaces in the output.
///
/// A one-word phrase counts: if the whole pattern is a word of sufficient
/// length it is returned as is.
pub fn multi_match(
    dict: &Dictionary,
    pattern: &str,
    options: MultiWordOptions,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    let pattern = pattern.to_lowercase();
    let matches = relax(options, |min_word_length| {
        Ok(find_multi_match(dict, &pattern, min_word_length, cancel)?.matches)
    })?;
    debug!(%pattern, matches = matches.len(), "multi-word match");
    Ok(matches)
}

/// Run `search` with decreasing minimum word lengths until it finds
/// something.
pub(crate) fn relax<F>(options: MultiWordOptions, mut search: F) -> Result<Vec<String>, SearchError>
where
    F: FnMut(usize) -> Result<Vec<String>, SearchError>,
{
    for min_word_length in options.lengths() {
        let matches = search(min_word_length)?;
        if !matches.is_empty() {
            trace!(min_word_length, "multi-word search settled");
            return Ok(matches);
        }
    }
    Ok(Vec::new())
}

/// Search for phrases matching `pattern` (already lowercase) whose words are
/// all at least `min_word_length` letters long.
pub fn find_multi_match(
    dict: &Dictionary,
    pattern: &str,
    min_word_length: usize,
    cancel: &CancelToken,
) -> Result<SearchOutcome, SearchError> {
    cancel.check()?;
    let length = pattern.chars().count();
    let mut stems = vec![Phrase::default()];
    let mut depth = 0;

    for (offset, symbol) in pattern.chars().enumerate() {
        if stems.is_empty() {
            break;
        }
        cancel.check()?;

        // A word closed on the last position would leave an empty word behind.
        let can_split = offset + 1 < length;
        let mut next_stems = Vec::with_capacity(stems.len());
        if symbol == WILDCARD {
            for &letter in ALPHABET {
                cancel.check()?;
                extend_phrases(
                    dict,
                    &stems,
                    letter as char,
                    min_word_length,
                    can_split,
                    &mut next_stems,
                );
            }
        } else {
            extend_phrases(dict, &stems, symbol, min_word_length, can_split, &mut next_stems);
        }

        trace!(offset, live = next_stems.len(), "expanded phrases");
        depth = offset + 1;
        stems = next_stems;
    }

    let mut matches: Vec<String> = stems
        .iter()
        .filter(|p| p.current.len() >= min_word_length && dict.valid(&p.current))
        .map(Phrase::joined)
        .collect();
    matches.sort_unstable();
    matches.dedup();
    Ok(SearchOutcome { matches, depth })
}

fn extend_phrases(
    dict: &Dictionary,
    stems: &[Phrase],
    letter: char,
    min_word_length: usize,
    can_split: bool,
    out: &mut Vec<Phrase>,
) {
    for stem in stems {
        let mut candidate = String::with_capacity(stem.current.len() + 1);
        candidate.push_str(&stem.current);
        candidate.push(letter);

        if can_split && candidate.len() >= min_word_length && dict.valid(&candidate) {
            let mut words = stem.words.clone();
            words.push(candidate.clone());
            out.push(Phrase {
                words,
                current: String::new(),
            });
        }
        if dict.is_prefix(&candidate) {
            out.push(Phrase {
                words: stem.words.clone(),
                current: candidate,
            });
        }
    }
}
