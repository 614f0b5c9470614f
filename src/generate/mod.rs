//! Combinatorial word generators
//!
//! Both generators are lazy: they walk an odometer over the character
//! choices of each position, so a count cap stops work without ever
//! materialising the full product.

mod pattern;
mod range;

pub use pattern::{parse_pattern, Pattern, PatternExpander, Slot};
pub use range::LengthRangeExpander;

use crate::store::Wordlist;

/// Progress is reported every this many generated words
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Mixed-radix counter, rightmost position varies fastest
#[derive(Debug, Clone)]
pub(crate) struct Odometer {
    radices: Vec<usize>,
    indices: Vec<usize>,
    done: bool,
}

impl Odometer {
    pub(crate) fn new(radices: Vec<usize>) -> Self {
        let done = radices.is_empty() || radices.iter().any(|&r| r == 0);
        let indices = vec![0; radices.len()];
        Self {
            radices,
            indices,
            done,
        }
    }

    /// Current position, `None` once every combination was visited
    pub(crate) fn current(&self) -> Option<&[usize]> {
        if self.done {
            None
        } else {
            Some(&self.indices)
        }
    }

    pub(crate) fn step(&mut self) {
        if self.done {
            return;
        }
        let mut i = self.radices.len();
        while i > 0 {
            i -= 1;
            self.indices[i] += 1;
            if self.indices[i] < self.radices[i] {
                return;
            }
            self.indices[i] = 0;
        }
        // Carry out of the leftmost position
        self.done = true;
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.done
    }

    /// Number of combinations, `None` on overflow
    pub(crate) fn total(&self) -> Option<u128> {
        if self.radices.is_empty() {
            return Some(0);
        }
        self.radices
            .iter()
            .try_fold(1u128, |acc, &r| acc.checked_mul(r as u128))
    }
}

/// Drain `words` into `store`, stopping once `max_count` words were produced.
///
/// A cap of `None` or `Some(0)` means unlimited. `on_progress` receives the
/// running total every [`PROGRESS_INTERVAL`] words. Returns the number of
/// words produced, duplicates included.
pub fn fill_store<I, F>(
    words: I,
    store: &mut Wordlist,
    max_count: Option<u64>,
    mut on_progress: F,
) -> u64
where
    I: IntoIterator<Item = String>,
    F: FnMut(u64),
{
    let cap = max_count.filter(|&n| n > 0);
    let mut generated = 0u64;

    for word in words {
        store.insert(word);
        generated += 1;

        if generated % PROGRESS_INTERVAL == 0 {
            on_progress(generated);
        }

        if cap.is_some_and(|c| generated >= c) {
            break;
        }
    }

    generated
}

/// Expand `pattern` into `store`; returns the number of words produced
pub fn expand_pattern<F>(
    store: &mut Wordlist,
    pattern: &str,
    max_count: Option<u64>,
    on_progress: F,
) -> u64
where
    F: FnMut(u64),
{
    fill_store(PatternExpander::new(pattern), store, max_count, on_progress)
}

/// Expand every string over `alphabet` with length in `min_len..=max_len`
pub fn expand_charset<F>(
    store: &mut Wordlist,
    alphabet: &str,
    min_len: usize,
    max_len: usize,
    max_count: Option<u64>,
    on_progress: F,
) -> u64
where
    F: FnMut(u64),
{
    let expander = LengthRangeExpander::new(alphabet.chars().collect(), min_len, max_len);
    fill_store(expander, store, max_count, on_progress)
}
