//! Leetspeak substitutions (a -> 4/@, e -> 3, ...)

use crate::generate::Odometer;
use crate::store::Wordlist;

/// Substitution table, keyed by lowercase source character
pub const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('e', &['3']),
    ('i', &['1', '!']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7']),
    ('l', &['1']),
    ('g', &['9']),
];

/// Words with more substitutable positions than this are skipped
pub const MAX_LEET_POSITIONS: usize = 4;

/// At most this many positions are substituted at once
pub const MAX_SUBSTITUTIONS: usize = 2;

/// Replacements for a character, case-insensitive
pub fn replacements(c: char) -> Option<&'static [char]> {
    let lower = c.to_ascii_lowercase();
    LEET_TABLE
        .iter()
        .find(|(source, _)| *source == lower)
        .map(|(_, targets)| *targets)
}

/// A character index eligible for substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeetPosition {
    pub index: usize,
    pub source: char,
    pub replacements: &'static [char],
}

/// Substitutable positions of `word`, left to right
pub fn leet_positions(word: &str) -> Vec<LeetPosition> {
    word.chars()
        .enumerate()
        .filter_map(|(index, c)| {
            replacements(c).map(|replacements| LeetPosition {
                index,
                source: c.to_ascii_lowercase(),
                replacements,
            })
        })
        .collect()
}

/// k-combinations of `0..n` in lexicographic order
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Rightmost index that can still move
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Every leetspeak variant of `word` substituting one or two positions.
///
/// Empty when the word has no substitutable position or more than
/// [`MAX_LEET_POSITIONS`] of them.
pub fn leet_variants(word: &str) -> Vec<String> {
    let positions = leet_positions(word);
    if positions.is_empty() || positions.len() > MAX_LEET_POSITIONS {
        return Vec::new();
    }

    let original: Vec<char> = word.chars().collect();
    let mut variants = Vec::new();

    for size in 1..=positions.len().min(MAX_SUBSTITUTIONS) {
        for subset in Combinations::new(positions.len(), size) {
            let chosen: Vec<&LeetPosition> = subset.iter().map(|&i| &positions[i]).collect();
            let mut odometer =
                Odometer::new(chosen.iter().map(|p| p.replacements.len()).collect());

            while let Some(picks) = odometer.current() {
                let mut candidate = original.clone();
                for (position, &pick) in chosen.iter().zip(picks) {
                    candidate[position.index] = position.replacements[pick];
                }
                variants.push(candidate.into_iter().collect());
                odometer.step();
            }
        }
    }

    variants
}

/// Add leetspeak variants of every word currently in the store.
///
/// Words added by this call are not transformed again. Returns the number
/// of new words.
pub fn apply_leetspeak(store: &mut Wordlist) -> usize {
    let variants: Vec<String> = store
        .snapshot()
        .iter()
        .flat_map(|word| leet_variants(word))
        .collect();
    store.extend_counting(variants)
}
