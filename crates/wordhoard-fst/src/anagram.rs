// Anagram automaton: accepts terms that use every query symbol exactly once.
//
// State is a bitmask of unused query symbols. Bit 62 marks a state that can
// never match again.

use fst::Automaton;

use crate::FstError;

/// Wildcard symbol, standing for any one byte.
pub const WILDCARD: u8 = b'*';

/// Maximum number of query symbols.
pub const MAX_SYMBOLS: usize = 61;

const ERROR_MASK: u64 = 1 << 62;

/// Matches terms made of exactly the query's symbols, in any order.
///
/// Spaces are ignored on both sides, so a query can match a multi-word term.
/// Each incoming byte consumes the first unused query symbol it fits. Literal
/// symbols sit before wildcards, so a byte only falls back to a wildcard when
/// no matching literal is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramAutomaton {
    symbols: Vec<u8>,
}

impl AnagramAutomaton {
    /// Build an automaton for `query` (lowercased, spaces dropped, wildcards
    /// moved to the end).
    pub fn new(query: &str) -> Result<Self, FstError> {
        let lowered = query.to_lowercase();
        let mut symbols: Vec<u8> = lowered
            .bytes()
            .filter(|&b| b != b' ' && b != WILDCARD)
            .collect();
        let wildcards = lowered.bytes().filter(|&b| b == WILDCARD).count();
        symbols.resize(symbols.len() + wildcards, WILDCARD);

        if symbols.len() > MAX_SYMBOLS {
            return Err(FstError::PatternTooLong {
                length: symbols.len(),
                max: MAX_SYMBOLS,
            });
        }
        Ok(Self { symbols })
    }

    /// The query symbols in matching order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

impl Automaton for AnagramAutomaton {
    type State = u64;

    fn start(&self) -> u64 {
        // At most 61 symbols, so the shift cannot overflow.
        (1u64 << self.symbols.len()) - 1
    }

    fn is_match(&self, state: &u64) -> bool {
        *state == 0
    }

    fn can_match(&self, state: &u64) -> bool {
        state & ERROR_MASK == 0
    }

    fn will_always_match(&self, _state: &u64) -> bool {
        false
    }

    fn accept(&self, state: &u64, byte: u8) -> u64 {
        if byte == b' ' {
            return *state;
        }
        for (i, &symbol) in self.symbols.iter().enumerate() {
            let bit = 1u64 << i;
            if (symbol == byte || symbol == WILDCARD) && state & bit != 0 {
                return state & !bit;
            }
        }
        state | ERROR_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(query: &str, term: &str) -> bool {
        let automaton = AnagramAutomaton::new(query).unwrap();
        let mut state = automaton.start();
        for &b in term.as_bytes() {
            state = automaton.accept(&state, b);
        }
        automaton.is_match(&state)
    }

    #[test]
    fn any_order() {
        assert!(matches("oof", "foo"));
        assert!(matches("rab", "bar"));
        assert!(!matches("rab", "baz"));
    }

    #[test]
    fn every_symbol_must_be_used() {
        assert!(!matches("foox", "foo"));
        assert!(!matches("fo", "foo"));
    }

    #[test]
    fn wildcards() {
        assert!(matches("*oo", "foo"));
        assert!(matches("b*r", "bar"));
        assert!(matches("***", "baz"));
        assert!(!matches("**", "baz"));
    }

    #[test]
    fn spaces_are_ignored() {
        assert!(matches("foo bar", "barfoo"));
        assert!(matches("oofrab", "foo bar"));
    }

    #[test]
    fn uppercase_query() {
        assert!(matches("OOF", "foo"));
    }

    #[test]
    fn wildcards_are_moved_last() {
        let automaton = AnagramAutomaton::new("*a*b").unwrap();
        assert_eq!(automaton.symbols(), b"ab**");
        assert_eq!(automaton.start(), 0b1111);
    }

    #[test]
    fn error_state_is_sticky() {
        let automaton = AnagramAutomaton::new("ab").unwrap();
        let state = automaton.accept(&automaton.start(), b'x');
        assert!(!automaton.can_match(&state));
        let state = automaton.accept(&state, b'a');
        assert!(!automaton.can_match(&state));
        assert!(!automaton.is_match(&state));
    }

    #[test]
    fn length_limit() {
        assert!(AnagramAutomaton::new(&"a".repeat(MAX_SYMBOLS)).is_ok());
        let err = AnagramAutomaton::new(&"a".repeat(MAX_SYMBOLS + 1)).unwrap_err();
        assert!(matches!(err, FstError::PatternTooLong { length: 62, max: 61 }));
    }
}
