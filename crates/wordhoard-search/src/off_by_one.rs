// Words one substitution away from the input.

use hashbrown::HashSet;
use tracing::debug;
use wordhoard_core::alphabet::WILDCARD;
use wordhoard_core::{CancelToken, Dictionary, SearchError};

use crate::pattern;

/// Return every dictionary word of the same length that differs from `word`
/// in exactly one position. The input itself is never included.
///
/// `word` is expected to be a single lowercase `a`-`z` word; it is lowercased
/// defensively.
pub fn off_by_one(
    dict: &Dictionary,
    word: &str,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    cancel.check()?;
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let mut found = HashSet::new();

    for i in 0..chars.len() {
        let probe: String = chars
            .iter()
            .enumerate()
            .map(|(j, &c)| if i == j { WILDCARD } else { c })
            .collect();
        for candidate in pattern::find_match(dict, &probe, cancel)?.matches {
            if candidate != word {
                found.insert(candidate);
            }
        }
    }

    let mut result: Vec<String> = found.into_iter().collect();
    result.sort_unstable();
    debug!(%word, matches = result.len(), "off by one");
    Ok(result)
}
