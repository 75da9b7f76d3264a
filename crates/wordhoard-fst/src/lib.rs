//! Automata for querying `fst` term indexes.
//!
//! A term index is a pre-built [`fst::Map`] from terms to relevance scores.
//! The automata here are driven byte by byte by the index walker, which
//! prunes every subtree the automaton reports it cannot match.
//!
//! # Architecture
//!
//! - [`anagram`] -- Matches terms made of the query letters in any order
//! - [`morse`] -- Matches terms whose Morse encoding is the query
//! - [`index`] -- Read-only term index with ranked search

pub mod anagram;
pub mod index;
pub mod morse;

use fst::Automaton;

pub use anagram::AnagramAutomaton;
pub use index::{TermIndex, TermMatch};
pub use morse::MorseAutomaton;

/// Error type for building automata and opening term indexes.
#[derive(Debug, thiserror::Error)]
pub enum FstError {
    #[error("query is too long: {length} symbols (max {max})")]
    PatternTooLong { length: usize, max: usize },
    #[error("invalid term index: {0}")]
    Index(#[from] fst::Error),
    #[error("term index I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The automata a [`TermIndex`] can be searched with.
#[derive(Debug, Clone)]
pub enum TermAutomaton {
    Anagram(AnagramAutomaton),
    Morse(MorseAutomaton),
}

/// State of a [`TermAutomaton`]; only meaningful to the automaton that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermState {
    Anagram(u64),
    Morse(usize),
    Mismatch,
}

impl Automaton for TermAutomaton {
    type State = TermState;

    fn start(&self) -> TermState {
        match self {
            TermAutomaton::Anagram(a) => TermState::Anagram(a.start()),
            TermAutomaton::Morse(m) => TermState::Morse(m.start()),
        }
    }

    fn is_match(&self, state: &TermState) -> bool {
        match (self, state) {
            (TermAutomaton::Anagram(a), TermState::Anagram(s)) => a.is_match(s),
            (TermAutomaton::Morse(m), TermState::Morse(s)) => m.is_match(s),
            _ => false,
        }
    }

    fn can_match(&self, state: &TermState) -> bool {
        match (self, state) {
            (TermAutomaton::Anagram(a), TermState::Anagram(s)) => a.can_match(s),
            (TermAutomaton::Morse(m), TermState::Morse(s)) => m.can_match(s),
            _ => false,
        }
    }

    fn will_always_match(&self, _state: &TermState) -> bool {
        false
    }

    fn accept(&self, state: &TermState, byte: u8) -> TermState {
        match (self, state) {
            (TermAutomaton::Anagram(a), TermState::Anagram(s)) => {
                TermState::Anagram(a.accept(s, byte))
            }
            (TermAutomaton::Morse(m), TermState::Morse(s)) => TermState::Morse(m.accept(s, byte)),
            _ => TermState::Mismatch,
        }
    }
}

impl From<AnagramAutomaton> for TermAutomaton {
    fn from(automaton: AnagramAutomaton) -> Self {
        TermAutomaton::Anagram(automaton)
    }
}

impl From<MorseAutomaton> for TermAutomaton {
    fn from(automaton: MorseAutomaton) -> Self {
        TermAutomaton::Morse(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<A: Automaton>(automaton: &A, term: &str) -> bool {
        let mut state = automaton.start();
        for &b in term.as_bytes() {
            state = automaton.accept(&state, b);
        }
        automaton.is_match(&state)
    }

    #[test]
    fn dispatches_to_anagram() {
        let automaton = TermAutomaton::from(AnagramAutomaton::new("oof").unwrap());
        assert!(run(&automaton, "foo"));
        assert!(!run(&automaton, "fo"));
    }

    #[test]
    fn dispatches_to_morse() {
        let automaton = TermAutomaton::from(MorseAutomaton::new("-... .- .-."));
        assert!(run(&automaton, "bar"));
        assert!(!run(&automaton, "baz"));
    }

    #[test]
    fn foreign_state_never_matches() {
        let automaton = TermAutomaton::from(MorseAutomaton::new(".-"));
        let state = TermState::Anagram(0);
        assert!(!automaton.is_match(&state));
        assert!(!automaton.can_match(&state));
        assert_eq!(automaton.accept(&state, b'a'), TermState::Mismatch);
    }
}
