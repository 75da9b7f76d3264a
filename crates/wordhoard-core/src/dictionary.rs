// Probabilistic dictionary: layered Bloom filters answering "is this a word"
// and "is this the start of a word".
//
// Layout:
//   - primary: every word, tight false-positive rate
//   - secondaries[0], secondaries[1]: alternating halves of the words, same rate
//   - roots: every non-empty prefix of every word, loose rate
//
// `valid` requires the primary and at least one secondary, which lowers the
// compound false-positive rate below the primary's alone. `is_prefix` only
// steers the search; final answers are always re-checked with `valid`.

use std::io::{BufRead, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::alphabet::is_valid_word;
use crate::bloom::BloomFilter;
use crate::format::{self, FILTER_COUNT, HEADER_SIZE};
use crate::{DictionaryError, FormatError};

/// Filter sizing parameters.
///
/// These are tuning constants, not derived bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictionaryOptions {
    /// Target false-positive rate of the primary and secondary word filters.
    pub word_false_positive_rate: f64,
    /// Target false-positive rate of the prefix filter.
    pub prefix_false_positive_rate: f64,
    /// The prefix filter is sized for `estimated_count * prefix_capacity_factor`
    /// prefixes.
    pub prefix_capacity_factor: usize,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            word_false_positive_rate: 0.001,
            prefix_false_positive_rate: 0.1,
            prefix_capacity_factor: 10,
        }
    }
}

/// An immutable word/prefix oracle.
///
/// Built once with a [`DictionaryBuilder`], then only read. All queries are
/// pure reads, so a `Dictionary` can be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    primary: BloomFilter,
    secondaries: [BloomFilter; 2],
    roots: BloomFilter,
}

/// Insert-only builder for a [`Dictionary`].
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    dictionary: Dictionary,
    next_secondary: usize,
    skipped: usize,
}

impl DictionaryBuilder {
    /// Create a builder sized for roughly `estimated_count` words.
    pub fn new(estimated_count: usize, options: DictionaryOptions) -> Self {
        let half = estimated_count / 2;
        let prefixes = estimated_count.saturating_mul(options.prefix_capacity_factor);
        Self {
            dictionary: Dictionary {
                primary: BloomFilter::with_estimates(
                    estimated_count,
                    options.word_false_positive_rate,
                ),
                secondaries: [
                    BloomFilter::with_estimates(half, options.word_false_positive_rate),
                    BloomFilter::with_estimates(half, options.word_false_positive_rate),
                ],
                roots: BloomFilter::with_estimates(prefixes, options.prefix_false_positive_rate),
            },
            next_secondary: 0,
            skipped: 0,
        }
    }

    /// Add a word.
    ///
    /// Words that are not entirely `a`-`z` are skipped and `false` is
    /// returned; nothing is inserted for them.
    pub fn insert(&mut self, word: &str) -> bool {
        if !is_valid_word(word) {
            self.skipped += 1;
            return false;
        }

        let dict = &mut self.dictionary;
        dict.primary.insert(word.as_bytes());
        dict.secondaries[self.next_secondary].insert(word.as_bytes());
        self.next_secondary = 1 - self.next_secondary;

        for end in 1..=word.len() {
            dict.roots.insert(&word.as_bytes()[..end]);
        }
        true
    }

    /// Number of words rejected by [`insert`](Self::insert) so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Finish building.
    pub fn build(self) -> Dictionary {
        debug!(
            words = self.dictionary.primary.len(),
            skipped = self.skipped,
            "dictionary built"
        );
        self.dictionary
    }
}

impl Dictionary {
    /// Start building a dictionary with default options.
    pub fn builder(estimated_count: usize) -> DictionaryBuilder {
        DictionaryBuilder::new(estimated_count, DictionaryOptions::default())
    }

    /// Build a dictionary from a sequence of words.
    ///
    /// Invalid words are skipped.
    pub fn from_words<I, S>(words: I, estimated_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder(estimated_count);
        for word in words {
            builder.insert(word.as_ref());
        }
        builder.build()
    }

    /// Build a dictionary from a line-per-word reader.
    ///
    /// Lines are trimmed and lowercased; lines that are not UTF-8, or still
    /// not plain `a`-`z` words afterwards, are skipped. Only I/O failures are
    /// errors.
    pub fn from_reader<R: BufRead>(
        reader: R,
        estimated_count: usize,
        options: DictionaryOptions,
    ) -> Result<Self, DictionaryError> {
        let mut builder = DictionaryBuilder::new(estimated_count, options);
        for line in reader.split(b'\n') {
            let line = line?;
            match std::str::from_utf8(&line) {
                Ok(text) => {
                    builder.insert(&text.trim().to_lowercase());
                }
                Err(_) => builder.skipped += 1,
            }
        }
        Ok(builder.build())
    }

    /// Probably a complete dictionary word. Never false for an inserted word.
    pub fn valid(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        self.primary.contains(bytes) && self.secondaries.iter().any(|s| s.contains(bytes))
    }

    /// Probably a prefix of some dictionary word (a word is its own prefix).
    /// Never false for a real prefix.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.roots.contains(prefix.as_bytes())
    }

    /// Number of words inserted.
    pub fn word_count(&self) -> u64 {
        self.primary.len()
    }

    fn filters(&self) -> [&BloomFilter; FILTER_COUNT] {
        [
            &self.primary,
            &self.secondaries[0],
            &self.secondaries[1],
            &self.roots,
        ]
    }

    /// Serialize the four filters, in order primary, secondary A, secondary B,
    /// prefixes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let filters = self.filters();
        let size = HEADER_SIZE + filters.iter().map(|f| f.encoded_len()).sum::<usize>();
        let mut out = Vec::with_capacity(size);
        format::write_header(&mut out, FILTER_COUNT as u16);
        for filter in filters {
            filter.encode_into(&mut out);
        }
        out
    }

    /// Deserialize a dictionary produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        format::parse_header(data)?;

        let mut offset = HEADER_SIZE;
        let mut next = || -> Result<BloomFilter, FormatError> {
            let (filter, end) = BloomFilter::decode(data, offset)?;
            offset = end;
            Ok(filter)
        };
        let primary = next()?;
        let secondary_a = next()?;
        let secondary_b = next()?;
        let roots = next()?;

        if offset != data.len() {
            return Err(FormatError::InvalidFilter(format!(
                "{} trailing bytes after last filter",
                data.len() - offset
            )));
        }

        Ok(Self {
            primary,
            secondaries: [secondary_a, secondary_b],
            roots,
        })
    }

    /// Write the serialized dictionary to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), DictionaryError> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Read a serialized dictionary from `reader`.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, DictionaryError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data)?)
    }

    /// Save to a file, replacing it if it exists.
    pub fn save(&self, path: &Path) -> Result<(), DictionaryError> {
        std::fs::write(path, self.to_bytes())?;
        info!(path = %path.display(), words = self.word_count(), "dictionary saved");
        Ok(())
    }

    /// Load from a file written by [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let data = std::fs::read(path)?;
        let dictionary = Self::from_bytes(&data)?;
        info!(path = %path.display(), words = dictionary.word_count(), "dictionary loaded");
        Ok(dictionary)
    }
}
