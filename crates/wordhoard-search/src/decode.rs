// Morse and T9 decoding.
//
// Both are depth-first searches over (input offset, decoded prefix) states,
// pruned by the dictionary's prefix test. The work stack is explicit so
// hostile input length cannot exhaust the call stack.

use tracing::debug;
use wordhoard_core::alphabet::{self, MORSE_CODES};
use wordhoard_core::{CancelToken, Dictionary, SearchError};

/// A partially decoded input.
#[derive(Debug)]
struct DecodeState {
    offset: usize,
    prefix: String,
}

/// Return every dictionary word whose Morse encoding, without letter
/// separators, equals `input`.
///
/// Everything other than `.` and `-` is ignored, so `"-... .- .-."` and
/// `"-....-.-."` decode the same. The codebook is not prefix-free, so every
/// segmentation is explored.
pub fn morse_decode(
    dict: &Dictionary,
    input: &str,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    cancel.check()?;
    let signals = alphabet::strip_morse(input);
    let mut results = Vec::new();
    if signals.is_empty() {
        return Ok(results);
    }

    let mut stack = vec![DecodeState {
        offset: 0,
        prefix: String::new(),
    }];
    while let Some(state) = stack.pop() {
        cancel.check()?;
        let remaining = &signals[state.offset..];
        for (letter, code) in (b'a'..=b'z').zip(MORSE_CODES) {
            if !remaining.starts_with(code) {
                continue;
            }
            let mut next = state.prefix.clone();
            next.push(letter as char);
            let offset = state.offset + code.len();
            if offset == signals.len() {
                if dict.valid(&next) {
                    results.push(next);
                }
            } else if dict.is_prefix(&next) {
                stack.push(DecodeState { offset, prefix: next });
            }
        }
    }

    results.sort_unstable();
    results.dedup();
    debug!(input, matches = results.len(), "morse decode");
    Ok(results)
}

/// Return every dictionary word typed by the key sequence `input` on a phone
/// keypad (digits 2-9).
///
/// Input containing anything else, including `0` for space, has no decoding;
/// phrases must be split and decoded word by word.
pub fn t9_decode(
    dict: &Dictionary,
    input: &str,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    cancel.check()?;
    let mut results = Vec::new();
    if !alphabet::is_valid_t9(input) {
        return Ok(results);
    }

    let keys = input.as_bytes();
    let mut stack = vec![DecodeState {
        offset: 0,
        prefix: String::new(),
    }];
    while let Some(state) = stack.pop() {
        cancel.check()?;
        let Some(letters) = alphabet::t9_letters(keys[state.offset]) else {
            continue;
        };
        for &letter in letters {
            let mut next = state.prefix.clone();
            next.push(letter as char);
            let offset = state.offset + 1;
            if offset == keys.len() {
                if dict.valid(&next) {
                    results.push(next);
                }
            } else if dict.is_prefix(&next) {
                stack.push(DecodeState { offset, prefix: next });
            }
        }
    }

    results.sort_unstable();
    debug!(input, matches = results.len(), "t9 decode");
    Ok(results)
}
