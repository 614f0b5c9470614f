//! Prefix/suffix decoration of existing words

use crate::store::Wordlist;

/// Add `prefix + word + suffix` for every word, keeping the originals.
///
/// Empty strings count as absent; with neither part present this is a
/// no-op. Returns the number of new words.
pub fn apply_prefix_suffix(
    store: &mut Wordlist,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> usize {
    let prefix = prefix.unwrap_or_default();
    let suffix = suffix.unwrap_or_default();
    if prefix.is_empty() && suffix.is_empty() {
        return 0;
    }

    let decorated: Vec<String> = store
        .iter()
        .map(|word| format!("{}{}{}", prefix, word, suffix))
        .collect();
    store.extend_counting(decorated)
}

/// Apply each character of `chars` as a suffix, one pass per character.
///
/// Later passes also see words suffixed by earlier ones, so `"!@"` yields
/// `word!`, `word@` and `word!@`.
pub fn apply_special_suffixes(store: &mut Wordlist, chars: &str) -> usize {
    let mut added = 0;
    for c in chars.chars() {
        let mut buf = [0u8; 4];
        added += apply_prefix_suffix(store, None, Some(&*c.encode_utf8(&mut buf)));
    }
    added
}
