//! Transformations over the accumulated wordlist

pub mod affix;
pub mod leet;
pub mod personal;

pub use affix::{apply_prefix_suffix, apply_special_suffixes};
pub use leet::{apply_leetspeak, leet_positions, leet_variants, LeetPosition};
pub use personal::{base_words, combine_personal_info, date_variants, phone_variants};
