// Read-only term index: an fst map from term to relevance score.

use std::path::Path;

use fst::{Automaton, IntoStreamer, Map, Streamer};
use tracing::{debug, info};

use crate::FstError;

/// A term found in a [`TermIndex`] and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    pub term: String,
    pub score: u64,
}

/// Term index backed by an fst map.
///
/// Keys are terms, values are relevance scores. Building the map is up to
/// the caller (`fst::MapBuilder`); this type only queries it.
pub struct TermIndex {
    map: Map<Vec<u8>>,
}

impl TermIndex {
    /// Wrap a serialized fst map.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FstError> {
        Ok(Self {
            map: Map::new(data)?,
        })
    }

    /// Read a serialized fst map from disk.
    pub fn open(path: &Path) -> Result<Self, FstError> {
        let data = std::fs::read(path)?;
        let index = Self::from_bytes(data)?;
        info!(path = %path.display(), terms = index.len(), "term index loaded");
        Ok(index)
    }

    pub fn from_map(map: Map<Vec<u8>>) -> Self {
        Self { map }
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The serialized map.
    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_fst().as_bytes()
    }

    /// Every term accepted by `automaton`, highest score first, ties broken
    /// by term. At most `limit` matches are returned when a limit is given.
    pub fn search<A: Automaton>(&self, automaton: A, limit: Option<usize>) -> Vec<TermMatch> {
        let mut stream = self.map.search(automaton).into_stream();
        let mut matches = Vec::new();
        while let Some((key, score)) = stream.next() {
            matches.push(TermMatch {
                term: String::from_utf8_lossy(key).into_owned(),
                score,
            });
        }

        matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.term.cmp(&b.term)));
        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        debug!(matches = matches.len(), "term index search");
        matches
    }
}

impl std::fmt::Debug for TermIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermIndex").field("terms", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnagramAutomaton, MorseAutomaton, TermAutomaton};

    fn sample() -> TermIndex {
        let map = Map::from_iter([
            ("bar", 5u64),
            ("baz", 7),
            ("foo", 3),
            ("foo bar", 2),
            ("oof", 3),
            ("quux", 1),
        ])
        .unwrap();
        TermIndex::from_map(map)
    }

    fn terms(matches: &[TermMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.term.as_str()).collect()
    }

    #[test]
    fn anagram_search_orders_by_score_then_term() {
        let index = sample();
        let found = index.search(AnagramAutomaton::new("oof").unwrap(), None);
        assert_eq!(terms(&found), ["foo", "oof"]);
        assert_eq!(found[0].score, 3);

        let found = index.search(AnagramAutomaton::new("ba*").unwrap(), None);
        assert_eq!(terms(&found), ["baz", "bar"]);
    }

    #[test]
    fn anagram_search_spans_spaces() {
        let found = sample().search(AnagramAutomaton::new("rab oof").unwrap(), None);
        assert_eq!(
            found,
            [TermMatch {
                term: "foo bar".to_string(),
                score: 2
            }]
        );
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let found = sample().search(AnagramAutomaton::new("***").unwrap(), Some(2));
        assert_eq!(terms(&found), ["baz", "bar"]);
    }

    #[test]
    fn morse_search() {
        let found = sample().search(MorseAutomaton::new("-... .- .-."), None);
        assert_eq!(terms(&found), ["bar"]);
    }

    #[test]
    fn search_through_term_automaton() {
        let index = sample();
        let automaton = TermAutomaton::from(MorseAutomaton::new("--.-..-..--..-"));
        assert_eq!(terms(&index.search(&automaton, None)), ["quux"]);
        assert!(index.search(TermAutomaton::from(MorseAutomaton::new("")), None).is_empty());
    }

    #[test]
    fn bytes_round_trip() {
        let index = sample();
        let reopened = TermIndex::from_bytes(index.as_bytes().to_vec()).unwrap();
        assert_eq!(reopened.len(), 6);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = TermIndex::from_bytes(vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, FstError::Index(_)));
    }
}
