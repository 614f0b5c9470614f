//! Every string over a custom alphabet within a length range

use super::Odometer;

/// Generator over all tuples of `alphabet` with length `min_len..=max_len`,
/// shorter lengths first
pub struct LengthRangeExpander {
    alphabet: Vec<char>,
    length: usize,
    max_len: usize,
    odometer: Odometer,
}

impl LengthRangeExpander {
    /// Create a new expander. Zero-length tuples are never produced, and
    /// an empty alphabet or `min_len > max_len` yields nothing.
    pub fn new(alphabet: Vec<char>, min_len: usize, max_len: usize) -> Self {
        let length = min_len.max(1);
        let odometer = if alphabet.is_empty() || length > max_len {
            Odometer::new(Vec::new())
        } else {
            Odometer::new(vec![alphabet.len(); length])
        };
        Self {
            alphabet,
            length,
            max_len,
            odometer,
        }
    }

    /// Length of the strings currently being produced
    pub fn current_length(&self) -> usize {
        self.length
    }

    pub fn is_exhausted(&self) -> bool {
        self.odometer.is_exhausted()
    }

    /// Total number of strings across the whole range, `None` on overflow
    pub fn total(&self) -> Option<u128> {
        if self.alphabet.is_empty() || self.length > self.max_len {
            return Some(0);
        }
        let base = self.alphabet.len() as u128;
        (self.length..=self.max_len).try_fold(0u128, |acc, len| {
            let len = u32::try_from(len).ok()?;
            acc.checked_add(base.checked_pow(len)?)
        })
    }

    fn advance_length(&mut self) -> bool {
        if self.length >= self.max_len {
            return false;
        }
        self.length += 1;
        self.odometer = Odometer::new(vec![self.alphabet.len(); self.length]);
        true
    }
}

impl Iterator for LengthRangeExpander {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.alphabet.is_empty() {
            return None;
        }
        loop {
            if let Some(indices) = self.odometer.current() {
                let word = indices.iter().map(|&i| self.alphabet[i]).collect();
                self.odometer.step();
                return Some(word);
            }
            if !self.advance_length() {
                return None;
            }
        }
    }
}
