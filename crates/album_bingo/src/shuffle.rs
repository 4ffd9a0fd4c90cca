//! Seeded, platform-independent shuffling.
//!
//! Boards must come out identical for the same seed on every machine and in
//! every release, so this module never touches an ambient random source.
//! Text seeds are hashed with 32-bit FNV-1a over their UTF-16 code units,
//! the stream comes from Mulberry32, and the permutation is a Fisher-Yates
//! walk from the last index down to 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seed driving board generation: free text or a raw 32-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Integer seed used as-is.
    Numeric(u32),
    /// Text seed, hashed with FNV-1a.
    Text(String),
}

impl Seed {
    /// Integer form of the seed, before the zero adjustment.
    pub fn to_u32(&self) -> u32 {
        match self {
            Seed::Numeric(n) => *n,
            Seed::Text(text) => fnv1a_32(text),
        }
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Seed::Numeric(n)
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Numeric(n) => write!(f, "{}", n),
            Seed::Text(text) => write!(f, "{}", text),
        }
    }
}

/// 32-bit FNV-1a over the UTF-16 code units of `text`.
pub fn fnv1a_32(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Small stateful Mulberry32 generator.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Creates a generator; seed `0` is treated as `1`.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Creates a generator from a board seed.
    pub fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.to_u32())
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform index in `[0, bound)`, computed as `floor(next_f64() * bound)`.
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }
}

/// Shuffles `items` in place with Fisher-Yates.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut SeededRng) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Returns a seeded permutation of `items`, leaving the input untouched.
#[instrument(skip(items), fields(len = items.len(), seed = %seed))]
pub fn shuffle<T: Clone>(items: &[T], seed: &Seed) -> Vec<T> {
    let mut out = items.to_vec();
    let mut rng = SeededRng::from_seed(seed);
    shuffle_in_place(&mut out, &mut rng);
    debug!("Shuffled sequence");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_values() {
        assert_eq!(fnv1a_32(""), 2_166_136_261);
        assert_eq!(fnv1a_32("a"), 3_826_002_220);
        assert_eq!(fnv1a_32("abc"), 440_920_331);
    }

    #[test]
    fn test_mulberry_first_outputs() {
        let mut rng = SeededRng::new(1);
        assert_eq!(rng.next_u32(), 2_693_262_067);
        assert_eq!(rng.next_u32(), 11_749_833);
        assert_eq!(rng.next_u32(), 2_265_367_787);
    }

    #[test]
    fn test_zero_seed_behaves_like_one() {
        let mut zero = SeededRng::new(0);
        let mut one = SeededRng::new(1);
        for _ in 0..16 {
            assert_eq!(zero.next_u32(), one.next_u32());
        }
    }

    #[test]
    fn test_known_permutation() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(
            shuffle(&items, &Seed::from("abc")),
            vec![7, 8, 1, 3, 2, 4, 6, 0, 9, 5]
        );
        assert_eq!(
            shuffle(&items, &Seed::Numeric(0)),
            vec![7, 8, 3, 2, 1, 5, 9, 4, 0, 6]
        );
    }

    #[test]
    fn test_below_stays_in_bounds() {
        let mut rng = SeededRng::new(99);
        for bound in 1..200 {
            assert!(rng.below(bound) < bound);
        }
    }

    #[test]
    fn test_short_inputs() {
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty, &Seed::Numeric(5)).is_empty());
        assert_eq!(shuffle(&[42], &Seed::Numeric(5)), vec![42]);
    }

    #[test]
    fn test_seed_serde_untagged() {
        let text: Seed = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(text, Seed::Text("abc".to_string()));
        let number: Seed = serde_json::from_str("17").unwrap();
        assert_eq!(number, Seed::Numeric(17));
    }
}
