//! Character sets addressed by `?x` pattern tokens

/// Lowercase ASCII letters
pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Uppercase ASCII letters
pub const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// ASCII digits
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// ASCII punctuation (no space)
pub const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':',
    ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Letters, digits and punctuation, in that order
pub const ALL_PRINTABLE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':',
    ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Symbolic character class usable in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetToken {
    /// `?l`
    Lowercase,
    /// `?u`
    Uppercase,
    /// `?d`
    Digit,
    /// `?s`
    Punctuation,
    /// `?a`
    All,
}

impl CharsetToken {
    /// Look up a two-character token such as `?l`
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.strip_prefix('?')?.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) => Self::from_marker(marker),
            _ => None,
        }
    }

    /// Look up the character following a `?`
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'l' => Some(Self::Lowercase),
            'u' => Some(Self::Uppercase),
            'd' => Some(Self::Digit),
            's' => Some(Self::Punctuation),
            'a' => Some(Self::All),
            _ => None,
        }
    }

    pub fn chars(&self) -> &'static [char] {
        match self {
            CharsetToken::Lowercase => LOWERCASE,
            CharsetToken::Uppercase => UPPERCASE,
            CharsetToken::Digit => DIGITS,
            CharsetToken::Punctuation => PUNCTUATION,
            CharsetToken::All => ALL_PRINTABLE,
        }
    }
}

impl std::fmt::Display for CharsetToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharsetToken::Lowercase => write!(f, "?l"),
            CharsetToken::Uppercase => write!(f, "?u"),
            CharsetToken::Digit => write!(f, "?d"),
            CharsetToken::Punctuation => write!(f, "?s"),
            CharsetToken::All => write!(f, "?a"),
        }
    }
}

/// Resolve a token string to its characters, `None` when unknown
pub fn resolve(token: &str) -> Option<&'static [char]> {
    CharsetToken::from_token(token).map(|t| t.chars())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(PUNCTUATION.len(), 32);
        assert_eq!(ALL_PRINTABLE.len(), 94);
    }

    #[test]
    fn test_resolve_is_stable() {
        assert_eq!(resolve("?l"), resolve("?l"));
        assert_eq!(resolve("?d"), Some(DIGITS));
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(resolve("?z"), None);
        assert_eq!(resolve("l"), None);
    }

    #[test]
    fn test_all_is_concatenation() {
        let expected: Vec<char> = LOWERCASE
            .iter()
            .chain(UPPERCASE)
            .chain(DIGITS)
            .chain(PUNCTUATION)
            .copied()
            .collect();
        assert_eq!(ALL_PRINTABLE, expected.as_slice());
    }

    #[test]
    fn test_token_and_marker_agree() {
        for marker in ['l', 'u', 'd', 's', 'a', 'x'] {
            assert_eq!(
                CharsetToken::from_token(&format!("?{}", marker)),
                CharsetToken::from_marker(marker)
            );
        }
        assert_eq!(CharsetToken::from_token("?"), None);
        assert_eq!(CharsetToken::from_token("?ll"), None);
        assert_eq!(CharsetToken::from_token("l"), None);
    }

    #[test]
    fn test_display_round_trips_token() {
        for token in ["?l", "?u", "?d", "?s", "?a"] {
            let parsed = CharsetToken::from_token(token).unwrap();
            assert_eq!(parsed.to_string(), token);
        }
    }
}
