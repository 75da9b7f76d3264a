// Morse automaton: accepts terms whose letters spell out the query signals.

use fst::Automaton;
use wordhoard_core::alphabet;

const ERROR: usize = usize::MAX;

/// Matches terms whose Morse encoding, without separators, equals the query.
///
/// Only `.` and `-` in the query are kept. Term bytes are case-folded and
/// spaces are skipped; any other byte without a Morse code kills the match.
/// The state is the number of query signals consumed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorseAutomaton {
    signals: String,
}

impl MorseAutomaton {
    pub fn new(query: &str) -> Self {
        Self {
            signals: alphabet::strip_morse(query),
        }
    }

    /// The query with everything but dots and dashes removed.
    pub fn signals(&self) -> &str {
        &self.signals
    }
}

impl Automaton for MorseAutomaton {
    type State = usize;

    fn start(&self) -> usize {
        0
    }

    fn is_match(&self, state: &usize) -> bool {
        *state == self.signals.len()
    }

    fn can_match(&self, state: &usize) -> bool {
        *state <= self.signals.len()
    }

    fn will_always_match(&self, _state: &usize) -> bool {
        false
    }

    fn accept(&self, state: &usize, byte: u8) -> usize {
        if byte == b' ' {
            return *state;
        }
        let Some(remaining) = self.signals.get(*state..) else {
            return ERROR;
        };
        match alphabet::morse_code(byte) {
            Some(code) if remaining.starts_with(code) => state + code.len(),
            _ => ERROR,
        }
    }
}
