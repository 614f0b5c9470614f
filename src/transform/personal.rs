//! Personal-information permutations
//!
//! Base words come from the name-like fields, then get glued to common
//! suffixes/prefixes, date-of-birth fragments and phone-number tails.

use crate::store::Wordlist;
use crate::types::PersonalRecord;

/// Appended to every base word
pub const COMMON_SUFFIXES: &[&str] = &[
    "123", "1234", "12345", "!", "@", "#", "123!", "2023", "2024", "2025",
];

/// Prepended to every base word
pub const COMMON_PREFIXES: &[&str] = &["@", "#", "my"];

/// Phone tails of these lengths are combined with base words
pub const PHONE_TAIL_LENGTHS: &[usize] = &[4, 6, 8];

/// Only the first few base words are paired with each other
const MAX_PAIR_SOURCES: usize = 4;

/// First character uppercased, the rest untouched
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// First character uppercased, the rest lowercased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => {
            let rest = chars.as_str().to_lowercase();
            f.to_uppercase().chain(rest.chars()).collect()
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Base words in field order: name, father name, mother name, place.
///
/// Parents' names get no all-caps variant. Duplicates are kept.
pub fn base_words(record: &PersonalRecord) -> Vec<String> {
    let mut words = Vec::new();

    if let Some(name) = present(&record.name) {
        words.extend([
            name.to_string(),
            name.to_lowercase(),
            name.to_uppercase(),
            title_case(name),
        ]);
    }
    for parent in [&record.father_name, &record.mother_name] {
        if let Some(parent) = present(parent) {
            words.extend([parent.to_string(), parent.to_lowercase(), capitalize(parent)]);
        }
    }
    if let Some(place) = present(&record.place) {
        words.extend([
            place.to_string(),
            place.to_lowercase(),
            place.to_uppercase(),
            title_case(place),
        ]);
    }

    words
}

/// Date-of-birth fragments, read as DDMMYYYY once `/` and `-` are removed.
///
/// Returns nothing when fewer than 8 characters remain.
pub fn date_variants(dob: &str) -> Vec<String> {
    let cleaned: Vec<char> = dob.chars().filter(|c| *c != '/' && *c != '-').collect();
    if cleaned.len() < 8 {
        return Vec::new();
    }

    let part = |range: std::ops::Range<usize>| -> String { cleaned[range].iter().collect() };
    let day = part(0..2);
    let month = part(2..4);
    let year = part(4..8);
    let year_short = part(6..8);

    vec![
        cleaned.iter().collect(),
        format!("{}{}{}", day, month, year),
        format!("{}{}{}", day, month, year_short),
        year.clone(),
        year_short,
        format!("{}{}", day, month),
        format!("{}{}", month, year),
    ]
}

/// Digits of a phone number plus its 4, 6 and 8 digit tails
pub fn phone_variants(phone: &str) -> Vec<String> {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_numeric()).collect();
    if digits.is_empty() {
        return Vec::new();
    }

    let mut variants = vec![digits.iter().collect::<String>()];
    for &len in PHONE_TAIL_LENGTHS {
        let start = digits.len().saturating_sub(len);
        variants.push(digits[start..].iter().collect());
    }
    variants
}

/// Every candidate derived from `record`, in generation order
pub fn personal_candidates(record: &PersonalRecord) -> Vec<String> {
    let bases = base_words(record);
    let dates = present(&record.dob).map(date_variants).unwrap_or_default();
    let phones = present(&record.phone).map(phone_variants).unwrap_or_default();

    let mut out = Vec::new();
    for word in bases.iter().filter(|w| !w.is_empty()) {
        out.push(word.clone());
        out.extend(COMMON_SUFFIXES.iter().map(|s| format!("{}{}", word, s)));
        out.extend(COMMON_PREFIXES.iter().map(|p| format!("{}{}", p, word)));
        for fragment in dates.iter().chain(&phones) {
            out.push(format!("{}{}", word, fragment));
            out.push(format!("{}{}", fragment, word));
        }
    }

    if bases.len() >= 2 {
        let head = &bases[..bases.len().min(MAX_PAIR_SOURCES)];
        for (i, first) in head.iter().enumerate() {
            for second in &head[i + 1..] {
                out.push(format!("{}{}", first, second));
            }
        }
    }

    out
}

/// Insert every personal-info candidate, returns the number of new words
pub fn combine_personal_info(store: &mut Wordlist, record: &PersonalRecord) -> usize {
    store.extend_counting(personal_candidates(record))
}
