//! Mask-style pattern expansion (`?l?l?d?d`, `pass?d?d`, ...)

use super::Odometer;
use crate::charset::CharsetToken;

/// One position of a parsed pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Literal(char),
    Charset(CharsetToken),
}

impl Slot {
    /// Characters this slot can take, in enumeration order
    pub fn choices(&self) -> &[char] {
        match self {
            Slot::Literal(c) => std::slice::from_ref(c),
            Slot::Charset(token) => token.chars(),
        }
    }
}

/// Parsed pattern
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Parse a pattern string into slots.
///
/// `?` followed by a known marker becomes a charset slot. Anything else is
/// literal, including a `?` with an unknown marker, whose marker is then
/// read as its own literal.
pub fn parse_pattern(pattern: &str) -> Pattern {
    let mut slots = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '?' {
            if let Some(token) = chars.peek().copied().and_then(CharsetToken::from_marker) {
                slots.push(Slot::Charset(token));
                chars.next();
                continue;
            }
        }
        slots.push(Slot::Literal(c));
    }

    Pattern { slots }
}

/// Lazy cartesian product over the slots of a pattern
pub struct PatternExpander {
    pattern: Pattern,
    odometer: Odometer,
}

impl PatternExpander {
    pub fn new(pattern: &str) -> Self {
        Self::from_pattern(parse_pattern(pattern))
    }

    pub fn from_pattern(pattern: Pattern) -> Self {
        let radices = pattern.slots.iter().map(|s| s.choices().len()).collect();
        Self {
            pattern,
            odometer: Odometer::new(radices),
        }
    }

    /// Total number of combinations, `None` when it does not fit in a u128
    pub fn total(&self) -> Option<u128> {
        self.odometer.total()
    }

    pub fn is_exhausted(&self) -> bool {
        self.odometer.is_exhausted()
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl Iterator for PatternExpander {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.odometer.current()?;
        let word = indices
            .iter()
            .zip(&self.pattern.slots)
            .map(|(&i, slot)| slot.choices()[i])
            .collect();
        self.odometer.step();
        Some(word)
    }
}
