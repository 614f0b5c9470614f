//! Integration tests for wordlist-forge

use assert_cmd::Command;
use predicates::prelude::*;
use wordlist_forge::{
    charset, transform, GenerationConfig, PersonalRecord, Step, Wordlist, WordlistForgeError,
    WordlistGenerator,
};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_charset_resolution_is_idempotent() {
    for token in ["?l", "?u", "?d", "?s", "?a"] {
        assert_eq!(charset::resolve(token), charset::resolve(token));
        assert!(charset::resolve(token).is_some());
    }
}

#[test]
fn test_pattern_expansion_count() {
    let mut gen = WordlistGenerator::new();
    gen.expand_pattern("?l?d", None);
    let words = gen.export();
    assert_eq!(words.len(), 260);
    assert!(words.iter().all(|w| {
        let c: Vec<char> = w.chars().collect();
        c.len() == 2 && c[0].is_ascii_lowercase() && c[1].is_ascii_digit()
    }));
}

#[test]
fn test_charset_cap_enforcement() {
    let mut gen = WordlistGenerator::new();
    assert_eq!(gen.expand_charset("ab", 1, 2, Some(3)), 3);
    let words = gen.export();
    assert_eq!(words.len(), 3);
    assert!(words.contains(&"a".to_string()));
    assert!(words.contains(&"b".to_string()));
    assert!(words.contains(&"aa".to_string()));
}

#[test]
fn test_set_semantics_across_transforms() {
    let mut gen = WordlistGenerator::new();
    gen.add_words(["word"]);
    gen.apply_prefix_suffix(None, Some("1"));
    let before = gen.len();
    // Same derived string from a second transform
    gen.apply_prefix_suffix(None, Some("1"));
    assert!(gen.len() <= before + 1);
}

#[test]
fn test_leetspeak_bounds() {
    let mut gen = WordlistGenerator::new();
    gen.add_words(["salted"]);
    assert_eq!(gen.apply_leetspeak(), 0);

    let mut gen = WordlistGenerator::new();
    gen.add_words(["crab"]);
    assert_eq!(gen.apply_leetspeak(), 2);
    assert!(gen.wordlist().contains("cr4b"));
    assert!(gen.wordlist().contains("cr@b"));
}

#[test]
fn test_length_filter_and_limit() {
    let mut gen = WordlistGenerator::new();
    gen.expand_charset("xyz", 1, 6, None);
    gen.filter_by_length(4, 5);
    assert!(gen.export().iter().all(|w| (4..=5).contains(&w.len())));

    let before = gen.len();
    gen.limit_count(100);
    assert_eq!(gen.len(), 100.min(before));
}

#[test]
fn test_personal_variants() {
    let dates = transform::date_variants("15/08/1990");
    for expected in ["15081990", "150890", "1990", "90", "1508", "081990"] {
        assert!(dates.contains(&expected.to_string()));
    }
    assert_eq!(
        transform::phone_variants("+91-912-345-6789"),
        vec!["919123456789", "6789", "456789", "23456789"]
    );
}

#[test]
fn test_end_to_end_personal_scenario() {
    let record = PersonalRecord {
        name: Some("Alex".to_string()),
        dob: Some("15/08/1990".to_string()),
        ..Default::default()
    };

    let mut store = Wordlist::new();
    transform::combine_personal_info(&mut store, &record);
    assert!(store.contains("Alex1990"));

    let mut gen = WordlistGenerator::new();
    let config = GenerationConfig {
        personal: record,
        ..Default::default()
    };
    let report = gen.run(&config).unwrap();
    assert!(report.step(Step::Leetspeak).is_none());
    assert!(gen
        .export()
        .iter()
        .all(|w| (4..=12).contains(&w.chars().count())));
}

#[test]
fn test_run_without_sources_fails() {
    let mut gen = WordlistGenerator::new();
    assert!(matches!(
        gen.run(&GenerationConfig::default()),
        Err(WordlistForgeError::EmptyWordlist)
    ));
}

#[test]
fn test_cli_writes_sorted_wordlist() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("list.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["-p", "ab?d", "--min-len", "3", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Complete! Total words in wordlist: 10"));

    let lines = read_lines(&out);
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.first().map(String::as_str), Some("ab0"));
    assert_eq!(lines.last().map(String::as_str), Some("ab9"));
}

#[test]
fn test_cli_personal_info_with_leetspeak() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("alex.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["--name", "Alex", "--dob", "15/08/1990", "--leetspeak", "-q", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let lines = read_lines(&out);
    assert!(lines.contains(&"Alex1990".to_string()));
    assert!(lines.contains(&"Al3x".to_string()));
    assert!(lines.iter().all(|w| (4..=12).contains(&w.chars().count())));
}

#[test]
fn test_cli_seed_file_and_affixes() {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("seed.txt");
    std::fs::write(&seed, "admin\n\n  root  \n").unwrap();
    let out = dir.path().join("out.txt");
    let report = dir.path().join("report.json");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["--prefix", "x", "--suffix", "!", "-q", "-f"])
        .arg(&seed)
        .arg("-o")
        .arg(&out)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    assert_eq!(
        read_lines(&out),
        vec!["admin", "root", "xadmin!", "xroot!"]
    );

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(report["final_count"], 4);
}

#[test]
fn test_cli_max_words_limits_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("capped.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["-c", "abc", "--min-len", "4", "--max-len", "5", "--max-words", "7", "-q", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(read_lines(&out).len(), 7);
}

#[test]
fn test_cli_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let out = dir.path().join("from_config.txt");
    let config = GenerationConfig {
        pattern: Some("pin?d?d".to_string()),
        max_len: 5,
        output: Some(out.clone()),
        ..Default::default()
    };
    config.save(&config_path).unwrap();

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .arg("-q")
        .assert()
        .success();

    assert_eq!(read_lines(&out).len(), 100);
}

#[test]
fn test_cli_no_words_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.txt");

    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["--leetspeak", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No words generated"));

    assert!(!out.exists());
}

#[test]
fn test_cli_rejects_inverted_lengths() {
    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["-p", "?d", "--min-len", "8", "--max-len", "2", "-o", "x.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Maximum length must be"));
}

#[test]
fn test_cli_requires_output() {
    Command::cargo_bin("wordlist-forge")
        .unwrap()
        .args(["-p", "?d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output filename is required"));
}
