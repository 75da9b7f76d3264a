// Bloom filter: a probabilistic set with no false negatives.
//
// The hash function and the bit layout are part of the on-disk dictionary
// format; changing either requires a format version bump.

use crate::FormatError;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Size of the per-filter header in the binary encoding.
///
/// - bytes 0..8: bit count `m`
/// - bytes 8..12: hash count `k`
/// - bytes 12..16: reserved (zero)
/// - bytes 16..24: number of inserted elements
pub const FILTER_HEADER_SIZE: usize = 24;

/// A fixed-size Bloom filter over byte strings.
#[derive(Clone, PartialEq, Eq)]
pub struct BloomFilter {
    bits: Vec<u64>,
    bit_count: u64,
    hash_count: u32,
    inserted: u64,
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bit_count", &self.bit_count)
            .field("hash_count", &self.hash_count)
            .field("inserted", &self.inserted)
            .finish()
    }
}

impl BloomFilter {
    /// Create a filter sized for `capacity` elements at the given
    /// false-positive rate.
    ///
    /// `m = ceil(-n ln p / ln²2)`, `k = ceil(ln 2 · m / n)`. Capacities below
    /// one are treated as one, and the rate is clamped into `(0, 1)`.
    pub fn with_estimates(capacity: usize, false_positive_rate: f64) -> Self {
        let n = capacity.max(1) as f64;
        let p = false_positive_rate.clamp(f64::MIN_POSITIVE, 0.999_999);
        let ln2 = std::f64::consts::LN_2;
        let bit_count = ((-n * p.ln()) / (ln2 * ln2)).ceil().max(1.0) as u64;
        let hash_count = (ln2 * bit_count as f64 / n).ceil().max(1.0) as u32;
        Self::with_size(bit_count, hash_count)
    }

    /// Create an empty filter with an explicit bit count and hash count.
    pub fn with_size(bit_count: u64, hash_count: u32) -> Self {
        let bit_count = bit_count.max(1);
        Self {
            bits: vec![0; word_count(bit_count)],
            bit_count,
            hash_count: hash_count.max(1),
            inserted: 0,
        }
    }

    /// Number of bits in the filter.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Number of hash probes per element.
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }

    /// Number of `insert` calls made on this filter.
    pub fn len(&self) -> u64 {
        self.inserted
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Add an element.
    pub fn insert(&mut self, item: &[u8]) {
        let (h1, h2) = hash_pair(item);
        for i in 0..self.hash_count {
            let bit = probe(h1, h2, i, self.bit_count);
            self.bits[(bit / 64) as usize] |= 1 << (bit % 64);
        }
        self.inserted += 1;
    }

    /// Test an element. `false` is definitive; `true` may be a false positive.
    pub fn contains(&self, item: &[u8]) -> bool {
        let (h1, h2) = hash_pair(item);
        (0..self.hash_count).all(|i| {
            let bit = probe(h1, h2, i, self.bit_count);
            self.bits[(bit / 64) as usize] & (1 << (bit % 64)) != 0
        })
    }

    /// Length of this filter's binary encoding.
    pub fn encoded_len(&self) -> usize {
        FILTER_HEADER_SIZE + self.bits.len() * 8
    }

    /// Append the binary encoding of this filter to `out`.
    ///
    /// All integers are little-endian.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.hash_count.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&self.inserted.to_le_bytes());
        let words: Vec<u64> = self.bits.iter().map(|w| w.to_le()).collect();
        out.extend_from_slice(bytemuck::cast_slice::<u64, u8>(&words));
    }

    /// Decode a filter starting at `offset`.
    ///
    /// Returns the filter and the offset immediately after its encoding.
    pub fn decode(data: &[u8], offset: usize) -> Result<(Self, usize), FormatError> {
        let header_end = offset + FILTER_HEADER_SIZE;
        if header_end > data.len() {
            return Err(FormatError::TooShort {
                expected: header_end,
                actual: data.len(),
            });
        }

        let header = &data[offset..header_end];
        let bit_count = read_u64(&header[0..8]);
        let hash_count = read_u32(&header[8..12]);
        let inserted = read_u64(&header[16..24]);

        if bit_count == 0 {
            return Err(FormatError::InvalidFilter("zero bit count".to_string()));
        }
        if hash_count == 0 {
            return Err(FormatError::InvalidFilter("zero hash count".to_string()));
        }

        let words = word_count(bit_count);
        let body_len = words
            .checked_mul(8)
            .ok_or_else(|| FormatError::InvalidFilter(format!("bit count {bit_count} overflows")))?;
        let end = header_end + body_len;
        if end > data.len() {
            return Err(FormatError::TooShort {
                expected: end,
                actual: data.len(),
            });
        }

        // Copy into an owned, aligned buffer; the source slice may not be
        // 8-byte aligned.
        let mut bits = vec![0u64; words];
        bytemuck::cast_slice_mut::<u64, u8>(&mut bits).copy_from_slice(&data[header_end..end]);
        for word in &mut bits {
            *word = u64::from_le(*word);
        }

        Ok((
            Self {
                bits,
                bit_count,
                hash_count,
                inserted,
            },
            end,
        ))
    }
}

fn word_count(bit_count: u64) -> usize {
    bit_count.div_ceil(64) as usize
}

fn read_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

/// FNV-1a over the bytes.
fn fnv1a(item: &[u8]) -> u64 {
    item.iter()
        .fold(FNV_OFFSET, |h, &b| (h ^ b as u64).wrapping_mul(FNV_PRIME))
}

/// SplitMix64 finalizer.
fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// The two base hashes for double hashing. `h2` is forced odd.
fn hash_pair(item: &[u8]) -> (u64, u64) {
    let h1 = mix(fnv1a(item));
    let h2 = mix(h1 ^ GOLDEN_GAMMA) | 1;
    (h1, h2)
}

#[inline]
fn probe(h1: u64, h2: u64, i: u32, bit_count: u64) -> u64 {
    h1.wrapping_add((i as u64).wrapping_mul(h2)) % bit_count
}
