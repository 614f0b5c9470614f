//! Wordlist generator owning the shared store
//!
//! Exposes each generation/transform step as a method and runs the full
//! pipeline from a [`GenerationConfig`], recording a [`GenerationReport`].

use std::path::Path;
use std::time::Instant;

use crate::error::{Result, WordlistForgeError};
use crate::generate;
use crate::store::Wordlist;
use crate::transform;
use crate::types::{GenerationConfig, GenerationReport, PersonalRecord, Step, StepReport};

/// Receives the running total of an expansion every
/// [`generate::PROGRESS_INTERVAL`] words
pub type ProgressCallback = Box<dyn FnMut(Step, u64)>;

/// Wordlist generator
pub struct WordlistGenerator {
    store: Wordlist,
    report: GenerationReport,
    on_progress: Option<ProgressCallback>,
}

impl WordlistGenerator {
    /// Create a generator with an empty store
    pub fn new() -> Self {
        Self {
            store: Wordlist::new(),
            report: GenerationReport::new(),
            on_progress: None,
        }
    }

    /// Install a progress callback for pattern/charset expansion
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    fn progress_sink(&mut self, step: Step) -> impl FnMut(u64) + '_ {
        let callback = &mut self.on_progress;
        move |generated| {
            tracing::debug!(step = %step, generated, "Generation progress");
            if let Some(cb) = callback.as_mut() {
                cb(step, generated);
            }
        }
    }

    fn record(&mut self, report: StepReport) {
        tracing::info!(
            step = %report.step,
            added = report.added,
            removed = report.removed,
            total = self.store.len(),
            "Step complete"
        );
        self.report.push(report);
    }

    /// Expand a `?l?d`-style pattern; returns the number of words produced
    pub fn expand_pattern(&mut self, pattern: &str, max_count: Option<u64>) -> u64 {
        let before = self.store.len();
        let start = Instant::now();

        let expander = generate::PatternExpander::new(pattern);
        tracing::info!(
            pattern = %pattern,
            slots = expander.pattern().len(),
            combinations = ?expander.total(),
            max_count = ?max_count,
            "Expanding pattern"
        );

        // Split borrows: the sink holds the callback, the store is filled
        let mut store = std::mem::take(&mut self.store);
        let generated = generate::fill_store(
            expander,
            &mut store,
            max_count,
            self.progress_sink(Step::Pattern),
        );
        self.store = store;

        tracing::debug!(elapsed_ms = start.elapsed().as_millis() as u64, "Pattern expansion done");
        let mut report = StepReport::added(Step::Pattern, self.store.len() - before);
        report.generated = Some(generated);
        self.record(report);
        generated
    }

    /// Expand every string over `alphabet` of length `min_len..=max_len`
    pub fn expand_charset(
        &mut self,
        alphabet: &str,
        min_len: usize,
        max_len: usize,
        max_count: Option<u64>,
    ) -> u64 {
        let before = self.store.len();

        let expander =
            generate::LengthRangeExpander::new(alphabet.chars().collect(), min_len, max_len);
        tracing::info!(
            min_len,
            max_len,
            combinations = ?expander.total(),
            max_count = ?max_count,
            "Expanding charset"
        );

        let mut store = std::mem::take(&mut self.store);
        let generated = generate::fill_store(
            expander,
            &mut store,
            max_count,
            self.progress_sink(Step::Charset),
        );
        self.store = store;

        let mut report = StepReport::added(Step::Charset, self.store.len() - before);
        report.generated = Some(generated);
        self.record(report);
        generated
    }

    /// Add personal-info permutations; returns the number of new words
    pub fn combine_personal_info(&mut self, record: &PersonalRecord) -> usize {
        let added = transform::combine_personal_info(&mut self.store, record);
        self.record(StepReport::added(Step::PersonalInfo, added));
        added
    }

    /// Add leetspeak variants; returns the number of new words
    pub fn apply_leetspeak(&mut self) -> usize {
        let added = transform::apply_leetspeak(&mut self.store);
        self.record(StepReport::added(Step::Leetspeak, added));
        added
    }

    /// Add decorated copies of every word; returns the number of new words
    pub fn apply_prefix_suffix(&mut self, prefix: Option<&str>, suffix: Option<&str>) -> usize {
        let added = transform::apply_prefix_suffix(&mut self.store, prefix, suffix);
        self.record(StepReport::added(Step::PrefixSuffix, added));
        added
    }

    /// Append each special character as a suffix
    pub fn apply_special_chars(&mut self, chars: &str) -> usize {
        let added = transform::apply_special_suffixes(&mut self.store, chars);
        self.record(StepReport::added(Step::SpecialChars, added));
        added
    }

    /// Keep words of length `min_len..=max_len`; returns the number removed
    pub fn filter_by_length(&mut self, min_len: usize, max_len: usize) -> usize {
        let removed = self.store.filter_by_length(min_len, max_len);
        self.record(StepReport::removed(Step::LengthFilter, removed));
        removed
    }

    /// Truncate to `max_words`; returns the number removed
    pub fn limit_count(&mut self, max_words: usize) -> usize {
        let removed = self.store.limit_count(max_words);
        self.record(StepReport::removed(Step::CountLimit, removed));
        removed
    }

    /// Insert caller-supplied words; returns the number of new words
    pub fn add_words<I>(&mut self, words: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.store.extend_counting(words)
    }

    /// Add the lines of a seed file
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        match self.store.load_file(path) {
            Ok(added) => {
                self.record(StepReport::added(Step::SeedFile, added));
                Ok(added)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read seed file");
                self.report.push(StepReport::failed(Step::SeedFile, e.to_string()));
                Err(e)
            }
        }
    }

    /// Final words, sorted
    pub fn export(&self) -> Vec<String> {
        self.store.export()
    }

    /// Run every configured step in pipeline order.
    ///
    /// A seed file that cannot be read is logged and skipped. Fails with
    /// [`WordlistForgeError::EmptyWordlist`] when nothing survives. Words
    /// from earlier runs stay in the store; the report covers this run only.
    pub fn run(&mut self, config: &GenerationConfig) -> Result<&GenerationReport> {
        config.validate()?;
        self.report = GenerationReport::new();
        if !config.has_source() {
            tracing::warn!("No pattern, charset, seed file or personal info configured");
        }
        let cap = config.max_words;

        if !config.personal.is_empty() {
            self.combine_personal_info(&config.personal);
        }

        if let Some(pattern) = config.pattern.as_deref().filter(|p| !p.is_empty()) {
            self.expand_pattern(pattern, cap);
        }

        if let Some(alphabet) = config.charset.as_deref().filter(|c| !c.is_empty()) {
            self.expand_charset(alphabet, config.min_len, config.max_len, cap);
        }

        if let Some(path) = &config.seed_file {
            // Recoverable: keep whatever the store already holds
            if let Err(e) = self.load_file(path) {
                if !e.is_recoverable() {
                    return Err(e);
                }
            }
        }

        if let Some(chars) = config.special_chars.as_deref().filter(|c| !c.is_empty()) {
            self.apply_special_chars(chars);
        }

        if config.leetspeak {
            self.apply_leetspeak();
        }

        if config.prefix.is_some() || config.suffix.is_some() {
            self.apply_prefix_suffix(config.prefix.as_deref(), config.suffix.as_deref());
        }

        if !self.store.is_empty() {
            self.filter_by_length(config.min_len, config.max_len);
        }

        if let Some(max_words) = cap {
            let max_words = usize::try_from(max_words).unwrap_or(usize::MAX);
            self.limit_count(max_words);
        }

        self.report.finish(self.store.len());

        if self.store.is_empty() {
            return Err(WordlistForgeError::EmptyWordlist);
        }
        Ok(&self.report)
    }
}

impl Default for WordlistGenerator {
    fn default() -> Self {
        Self::new()
    }
}
