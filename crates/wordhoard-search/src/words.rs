// Word spotting in free text and letter grids.

use tracing::debug;
use wordhoard_core::{CancelToken, Dictionary, SearchError};

/// Return every dictionary word occurring as a contiguous run of letters in
/// `text`, in order of occurrence. Repeats and overlapping words are kept.
///
/// Anything that is not an ASCII letter breaks a run.
pub fn find_words(
    dict: &Dictionary,
    text: &str,
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    cancel.check()?;
    let text = text.to_ascii_lowercase();
    let bytes = text.as_bytes();
    let mut found = Vec::new();

    for start in 0..bytes.len() {
        cancel.check()?;
        let mut end = start;
        // Only ASCII bytes are consumed, so both ends stay on char boundaries.
        while end < bytes.len() && bytes[end].is_ascii_lowercase() {
            end += 1;
            let candidate = &text[start..end];
            if !dict.is_prefix(candidate) {
                break;
            }
            if dict.valid(candidate) {
                found.push(candidate.to_owned());
            }
        }
    }

    Ok(found)
}

/// Every straight line through `grid`, each followed by its reverse.
///
/// Lines are produced in this order: rows top to bottom, columns left to
/// right, up-right diagonals (read bottom-left to top-right), then down-right
/// diagonals (read top-left to bottom-right). Single-cell diagonals are left
/// out. Short rows are padded with spaces, which no word crosses.
pub fn grid_lines<S: AsRef<str>>(grid: &[S]) -> Vec<String> {
    let cells: Vec<Vec<char>> = grid.iter().map(|row| row.as_ref().chars().collect()).collect();
    let rows = cells.len();
    let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let at = |r: usize, c: usize| cells[r].get(c).copied().unwrap_or(' ');

    let mut lines = Vec::new();
    let mut push = |line: String| {
        let reversed: String = line.chars().rev().collect();
        lines.push(line);
        lines.push(reversed);
    };

    for r in 0..rows {
        push((0..cols).map(|c| at(r, c)).collect());
    }
    for c in 0..cols {
        push((0..rows).map(|r| at(r, c)).collect());
    }

    // Up-right: r + c is constant.
    for sum in 0..rows + cols - 1 {
        let first = sum.min(rows - 1);
        let last = sum.saturating_sub(cols - 1);
        if first > last {
            push((last..=first).rev().map(|r| at(r, sum - r)).collect());
        }
    }

    // Down-right: c - r is constant. Start on the left column bottom-up,
    // then along the top row.
    let starts = (1..rows).rev().map(|r| (r, 0)).chain((0..cols).map(|c| (0, c)));
    for (r0, c0) in starts {
        let len = (rows - r0).min(cols - c0);
        if len >= 2 {
            push((0..len).map(|i| at(r0 + i, c0 + i)).collect());
        }
    }

    lines
}

/// Run [`find_words`] over every line of a letter grid. The result is
/// sorted; a word found along several lines is listed once per line.
pub fn word_search<S: AsRef<str>>(
    dict: &Dictionary,
    grid: &[S],
    cancel: &CancelToken,
) -> Result<Vec<String>, SearchError> {
    let mut found = Vec::new();
    for line in grid_lines(grid) {
        found.extend(find_words(dict, &line, cancel)?);
    }
    found.sort_unstable();
    debug!(rows = grid.len(), matches = found.len(), "word search");
    Ok(found)
}
