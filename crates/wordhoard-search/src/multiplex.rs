// Fan-out of one query over several dictionaries.
//
// Every dictionary gets its own rayon task. Results come back in dictionary
// order. The first failing task records its error and cancels a child token
// shared by the others, so they stop early; the caller's token is untouched.

use std::sync::{Mutex, PoisonError};

use hashbrown::HashSet;
use rayon::prelude::*;
use tracing::{debug, warn};
use wordhoard_core::{CancelToken, Dictionary, SearchError};

use crate::multi::MultiWordOptions;
use crate::{anagram, decode, multi, off_by_one, pattern, words};

/// Options for [`Multiplexer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplexOptions {
    /// Drop from each result list the entries that an earlier dictionary
    /// already returned.
    pub dedupe: bool,
}

impl Default for MultiplexOptions {
    fn default() -> Self {
        Self { dedupe: true }
    }
}

/// Runs queries against an ordered list of dictionaries, most important
/// first.
#[derive(Debug, Clone, Copy)]
pub struct Multiplexer<'a> {
    dictionaries: &'a [Dictionary],
    options: MultiplexOptions,
}

impl<'a> Multiplexer<'a> {
    pub fn new(dictionaries: &'a [Dictionary]) -> Self {
        Self::with_options(dictionaries, MultiplexOptions::default())
    }

    pub fn with_options(dictionaries: &'a [Dictionary], options: MultiplexOptions) -> Self {
        Self {
            dictionaries,
            options,
        }
    }

    pub fn dictionaries(&self) -> &'a [Dictionary] {
        self.dictionaries
    }

    /// Run `query` against every dictionary concurrently.
    ///
    /// Returns one result list per dictionary, in dictionary order. If any
    /// query fails, the first error observed is returned and every result is
    /// discarded.
    pub fn run<F>(&self, cancel: &CancelToken, query: F) -> Result<Vec<Vec<String>>, SearchError>
    where
        F: Fn(&Dictionary, &CancelToken) -> Result<Vec<String>, SearchError> + Sync,
    {
        let token = cancel.child();
        let first_error: Mutex<Option<SearchError>> = Mutex::new(None);

        let results: Vec<Option<Vec<String>>> = self
            .dictionaries
            .par_iter()
            .enumerate()
            .map(|(index, dict)| match query(dict, &token) {
                Ok(found) => Some(found),
                Err(err) => {
                    let mut slot = first_error.lock().unwrap_or_else(PoisonError::into_inner);
                    if slot.is_none() {
                        warn!(dictionary = index, error = %err, "search unwound");
                        *slot = Some(err);
                    }
                    drop(slot);
                    token.cancel();
                    None
                }
            })
            .collect();

        let first_error = first_error.into_inner().unwrap_or_else(PoisonError::into_inner);
        if let Some(err) = first_error {
            return Err(err);
        }

        let results: Vec<Vec<String>> = results.into_iter().flatten().collect();
        debug!(
            dictionaries = results.len(),
            matches = results.iter().map(Vec::len).sum::<usize>(),
            dedupe = self.options.dedupe,
            "multiplexed query"
        );
        Ok(if self.options.dedupe {
            dedupe(results)
        } else {
            results
        })
    }

    pub fn match_pattern(
        &self,
        pattern: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| pattern::match_pattern(dict, pattern, token))
    }

    pub fn multi_match(
        &self,
        pattern: &str,
        options: MultiWordOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| multi::multi_match(dict, pattern, options, token))
    }

    pub fn anagram(
        &self,
        word: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| anagram::anagram(dict, word, token))
    }

    pub fn multi_anagram(
        &self,
        word: &str,
        options: MultiWordOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| anagram::multi_anagram(dict, word, options, token))
    }

    pub fn off_by_one(
        &self,
        word: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| off_by_one::off_by_one(dict, word, token))
    }

    pub fn morse_decode(
        &self,
        input: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| decode::morse_decode(dict, input, token))
    }

    pub fn t9_decode(
        &self,
        input: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| decode::t9_decode(dict, input, token))
    }

    pub fn find_words(
        &self,
        text: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| words::find_words(dict, text, token))
    }

    pub fn word_search<S: AsRef<str> + Sync>(
        &self,
        grid: &[S],
        cancel: &CancelToken,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        self.run(cancel, |dict, token| words::word_search(dict, grid, token))
    }
}

/// Remove from each list every entry that appeared in an earlier list.
///
/// Repeats within one list are left alone.
pub fn dedupe(results: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    results
        .into_iter()
        .map(|list| {
            let kept: Vec<String> = list.into_iter().filter(|item| !seen.contains(item)).collect();
            seen.extend(kept.iter().cloned());
            kept
        })
        .collect()
}
