// Text transforms used alongside the searches: Caesar shifts and chunking.
//
// These never consult a dictionary.

const ALPHABET_LEN: i32 = 26;

/// Shift every ASCII letter in `input` by `count` places, wrapping within its
/// case. Negative counts shift backwards; other characters are kept as is.
pub fn caesar_shift(input: &str, count: i32) -> String {
    let shift = count.rem_euclid(ALPHABET_LEN) as u8;
    input
        .chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a', shift),
            'A'..='Z' => rotate(c, b'A', shift),
            other => other,
        })
        .collect()
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    (base + (c as u8 - base + shift) % ALPHABET_LEN as u8) as char
}

/// All 25 non-trivial shifts of `input`, by 1 through 25 in order.
pub fn caesar_shifts(input: &str) -> [String; 25] {
    std::array::from_fn(|i| caesar_shift(input, i as i32 + 1))
}

/// Split `input` into consecutive pieces of the given lengths, in characters.
///
/// The lengths are cycled until the input runs out; the last piece may be
/// shorter. Zero lengths are ignored, and with no usable length the whole
/// input is one piece.
pub fn chunk(input: &str, parts: &[usize]) -> Vec<String> {
    let lengths: Vec<usize> = parts.iter().copied().filter(|&n| n > 0).collect();
    if input.is_empty() {
        return Vec::new();
    }
    if lengths.is_empty() {
        return vec![input.to_owned()];
    }

    let mut chars = input.chars().peekable();
    let mut pieces = Vec::new();
    for &len in lengths.iter().cycle() {
        if chars.peek().is_none() {
            break;
        }
        pieces.push(chars.by_ref().take(len).collect());
    }
    pieces
}
