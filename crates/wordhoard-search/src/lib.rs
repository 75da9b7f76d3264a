//! Search engine over wordhoard dictionaries.
//!
//! Every search here expands candidates one position at a time and drops a
//! branch as soon as the dictionary says no word starts with it, so the work
//! is bounded by the surviving branches rather than by the full space of
//! wildcard expansions or letter permutations.
//!
//! # Architecture
//!
//! - [`pattern`] -- Breadth-first wildcard match for single words
//! - [`multi`] -- Wildcard match for phrases of several words
//! - [`permutation`] -- Lexicographic permutation walk with skip-ahead
//! - [`anagram`] -- Anagram driver combining the two above
//! - [`off_by_one`] -- Single-substitution neighbours of a word
//! - [`decode`] -- Morse and T9 decoding
//! - [`words`] -- Words hidden in free text and in letter grids
//! - [`multiplex`] -- Concurrent fan-out over several dictionaries
//! - [`transform`] -- Caesar shifts and chunking, no dictionary involved
//!
//! All entry points take a [`CancelToken`](wordhoard_core::CancelToken) and
//! return [`SearchError`](wordhoard_core::SearchError) if it fires; partial
//! results are discarded. No matches is an empty `Vec`, never an error.

pub mod anagram;
pub mod decode;
pub mod multi;
pub mod multiplex;
pub mod off_by_one;
pub mod pattern;
pub mod permutation;
pub mod transform;
pub mod words;

pub use anagram::{anagram, multi_anagram};
pub use decode::{morse_decode, t9_decode};
pub use multi::{MultiWordOptions, multi_match};
pub use multiplex::{MultiplexOptions, Multiplexer};
pub use off_by_one::off_by_one;
pub use pattern::{SearchOutcome, match_pattern};
pub use permutation::PermutationWalker;
pub use transform::{caesar_shift, caesar_shifts, chunk};
pub use words::{find_words, grid_lines, word_search};
