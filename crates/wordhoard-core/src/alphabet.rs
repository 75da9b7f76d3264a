// Alphabet, word validation and the fixed Morse / T9 codebooks.

/// The letters every dictionary word is made of.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Pattern symbol matching exactly one unknown letter.
pub const WILDCARD: char = '?';

/// Morse codebook, indexed by `letter - b'a'`.
///
/// Not prefix-free: `e` (`.`) is a prefix of `a` (`.-`), `i` (`..`) and many
/// more, so decoding a run of signals without separators is ambiguous.
pub const MORSE_CODES: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

/// Phone keypad letters for digits 2-9, indexed by `digit - b'2'`.
pub const T9_KEYS: [&[u8]; 8] = [b"abc", b"def", b"ghi", b"jkl", b"mno", b"pqrs", b"tuv", b"wxyz"];

/// Returns `true` if the word is non-empty and consists of `a`-`z` only.
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Returns `true` if the input is non-empty and consists of the digits 2-9
/// only. Digit 0 (space) is rejected: phrases are decoded word by word.
pub fn is_valid_t9(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| (b'2'..=b'9').contains(&b))
}

/// Look up the Morse code for a letter. Uppercase letters are folded.
pub fn morse_code(letter: u8) -> Option<&'static str> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(MORSE_CODES[(lower - b'a') as usize])
    } else {
        None
    }
}

/// Look up the letters on a T9 key.
pub fn t9_letters(digit: u8) -> Option<&'static [u8]> {
    if (b'2'..=b'9').contains(&digit) {
        Some(T9_KEYS[(digit - b'2') as usize])
    } else {
        None
    }
}

/// Remove everything except dots and dashes from a Morse input.
pub fn strip_morse(input: &str) -> String {
    input.chars().filter(|&c| c == '.' || c == '-').collect()
}

/// Encode a word as Morse without separators. Non-letters are skipped.
pub fn to_morse(word: &str) -> String {
    word.bytes().filter_map(morse_code).collect()
}
