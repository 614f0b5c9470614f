//! Wordlist Forge - custom wordlist generation for security testing
//!
//! Run without arguments for the interactive mode, or pass flags for
//! scripted use.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Text};
use tracing_subscriber::EnvFilter;

use wordlist_forge::{
    output, GenerationConfig, GenerationReport, PersonalRecord, Step, WordlistForgeError,
    WordlistGenerator,
};

const DEFAULT_SPECIAL_CHARS: &str = "!@#$%&*_";

#[derive(Parser, Debug)]
#[command(
    name = "wordlist-forge",
    version,
    about = "Generate custom wordlists for security testing",
    after_help = "Examples:\n  \
        wordlist-forge                                   # interactive mode\n  \
        wordlist-forge --name Alex --place Mumbai --phone 9123456789 -o wordlist.txt\n  \
        wordlist-forge -p '?l?l?d?d' --max-words 5000 -o masks.txt"
)]
struct Cli {
    /// Pattern like ?l?l?d?d (?l lower, ?u upper, ?d digit, ?s special, ?a all)
    #[arg(short, long)]
    pattern: Option<String>,
    /// Custom character set expanded over --min-len..--max-len
    #[arg(short, long)]
    charset: Option<String>,
    /// Name for wordlist generation
    #[arg(long)]
    name: Option<String>,
    /// Phone number
    #[arg(long)]
    phone: Option<String>,
    /// Date of birth (DD/MM/YYYY)
    #[arg(long)]
    dob: Option<String>,
    /// Father's name
    #[arg(long)]
    father_name: Option<String>,
    /// Mother's name
    #[arg(long)]
    mother_name: Option<String>,
    /// Place/city name
    #[arg(long)]
    place: Option<String>,
    /// Minimum word length [default: 4]
    #[arg(long)]
    min_len: Option<usize>,
    /// Maximum word length [default: 12]
    #[arg(long)]
    max_len: Option<usize>,
    /// Maximum number of words
    #[arg(long)]
    max_words: Option<u64>,
    /// Prepend string to all words
    #[arg(long)]
    prefix: Option<String>,
    /// Append string to all words
    #[arg(long)]
    suffix: Option<String>,
    /// Append each of these characters as a suffix
    #[arg(long)]
    special_chars: Option<String>,
    /// Apply leetspeak
    #[arg(long)]
    leetspeak: bool,
    /// Read base words from file
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Output filename
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Load options from a JSON config file (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write a JSON report of every step
    #[arg(long)]
    report: Option<PathBuf>,
    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Merge flags over the config file, if any
    fn into_config(self) -> anyhow::Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GenerationConfig::default(),
        };

        let personal = &mut config.personal;
        override_with(&mut personal.name, self.name);
        override_with(&mut personal.phone, self.phone);
        override_with(&mut personal.dob, self.dob);
        override_with(&mut personal.father_name, self.father_name);
        override_with(&mut personal.mother_name, self.mother_name);
        override_with(&mut personal.place, self.place);

        override_with(&mut config.pattern, self.pattern);
        override_with(&mut config.charset, self.charset);
        override_with(&mut config.seed_file, self.file);
        override_with(&mut config.special_chars, self.special_chars);
        override_with(&mut config.prefix, self.prefix);
        override_with(&mut config.suffix, self.suffix);
        override_with(&mut config.max_words, self.max_words);
        override_with(&mut config.output, self.output);
        config.leetspeak |= self.leetspeak;
        if let Some(min_len) = self.min_len {
            config.min_len = min_len;
        }
        if let Some(max_len) = self.max_len {
            config.max_len = max_len;
        }

        Ok(config)
    }
}

fn override_with<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn main() {
    if let Err(e) = wordlist_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    // No arguments at all means interactive mode
    let result = if std::env::args_os().len() <= 1 {
        init_logging(0);
        print_banner();
        run_interactive()
    } else {
        let cli = Cli::parse();
        init_logging(cli.verbose);
        if !cli.quiet {
            print_banner();
        }
        run_cli(cli)
    };

    if let Err(e) = result {
        match e.downcast_ref::<WordlistForgeError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║     Wordlist Forge v{:<34}║", wordlist_forge::VERSION);
    println!("║     For Cybersecurity Research & Penetration Testing  ║");
    println!("╚═══════════════════════════════════════════════════════╝");
    println!();
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let quiet = cli.quiet;
    let report_path = cli.report.clone();
    let config = cli.into_config()?;
    generate_and_save(&config, report_path, quiet)
}

/// Run the pipeline, save the words and optionally the report
fn generate_and_save(
    config: &GenerationConfig,
    report_path: Option<PathBuf>,
    quiet: bool,
) -> anyhow::Result<()> {
    config.validate()?;
    let output_path = config
        .output
        .clone()
        .ok_or_else(|| WordlistForgeError::cli("Output filename is required (-o/--output)"))?;

    let spinner = progress_spinner(quiet);
    let ticker = spinner.clone();
    let mut generator = WordlistGenerator::new().with_progress(Box::new(move |step: Step, generated: u64| {
        ticker.set_message(format!("Generated {} words from {}...", generated, step));
        ticker.tick();
    }));

    let outcome = generator.run(config).cloned();
    spinner.finish_and_clear();

    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            if !quiet {
                print_report(generator.report());
            }
            return Err(e.into());
        }
    };

    if !quiet {
        print_report(&report);
        println!("[*] Saving wordlist to {}...", output_path.display());
    }
    let summary = output::save_wordlist(&output_path, generator.wordlist())?;

    if let Some(path) = report_path {
        report
            .save(&path)
            .with_context(|| format!("writing report {}", path.display()))?;
    }

    if !quiet {
        println!(
            "[✓] Wordlist saved: {} words written to {}",
            summary.words,
            summary.path.display()
        );
        println!("[✓] File size: {:.2} KB", summary.kilobytes());
        println!();
        println!("[✓] Complete! Total words in wordlist: {}", summary.words);
        println!(
            "    ⏱️  Generation time: {:.2}s",
            report.elapsed().num_milliseconds() as f64 / 1000.0
        );
    }

    Ok(())
}

fn progress_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb
}

fn print_report(report: &GenerationReport) {
    for step in &report.steps {
        if let Some(error) = &step.error {
            println!("[!] {}: {}", step.step, error);
            continue;
        }
        match step.step {
            Step::Pattern | Step::Charset => println!(
                "[✓] {} generation complete: {} words ({} new)",
                step.step,
                step.generated.unwrap_or_default(),
                step.added
            ),
            Step::LengthFilter => println!("[*] Filtered by length: {} words removed", step.removed),
            Step::CountLimit => println!("[*] Count limit: {} words removed", step.removed),
            _ => println!("[✓] {} complete: {} new words", step.step, step.added),
        }
    }
}

/// Prompt for every option, then generate
fn run_interactive() -> anyhow::Result<()> {
    let config = prompt_config()?;

    println!();
    println!("{}", "=".repeat(60));
    println!("           GENERATING WORDLIST...");
    println!("{}", "=".repeat(60));
    println!();

    generate_and_save(&config, None, false)
}

fn section(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "-".repeat(60));
}

fn prompt_optional(label: &str) -> wordlist_forge::Result<Option<String>> {
    let value = Text::new(label)
        .with_help_message("Press Enter to skip")
        .prompt()?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn prompt_config() -> wordlist_forge::Result<GenerationConfig> {
    println!("{}", "=".repeat(60));
    println!("           INTERACTIVE WORDLIST GENERATION");
    println!("{}", "=".repeat(60));

    section("[STEP 1] Personal Information (Press Enter to skip)");
    let personal = PersonalRecord {
        name: prompt_optional("Enter name:")?,
        phone: prompt_optional("Enter phone number:")?,
        dob: prompt_optional("Enter date of birth (DD/MM/YYYY):")?,
        father_name: prompt_optional("Enter father's name:")?,
        mother_name: prompt_optional("Enter mother's name:")?,
        place: prompt_optional("Enter place/city:")?,
    };

    section("[STEP 2] Special Characters & Patterns");
    let special_chars = if Confirm::new("Add special characters?")
        .with_default(false)
        .prompt()?
    {
        let custom = Text::new("Enter custom special characters:")
            .with_help_message("Press Enter for common: ! @ # $ % & * _")
            .prompt()?;
        let custom = custom.trim();
        Some(if custom.is_empty() {
            DEFAULT_SPECIAL_CHARS.to_string()
        } else {
            custom.to_string()
        })
    } else {
        None
    };

    let pattern = if Confirm::new("Generate pattern-based words? (e.g., abc123)")
        .with_default(false)
        .prompt()?
    {
        println!("Pattern syntax: ?l=lowercase, ?u=uppercase, ?d=digit, ?s=special, ?a=all");
        println!("Example: ?l?l?d?d generates words like 'ab12', 'xy99'");
        prompt_optional("Enter pattern:")?
    } else {
        None
    };

    let leetspeak = Confirm::new("Apply leetspeak transformations? (a->4, e->3, etc.)")
        .with_default(false)
        .prompt()?;

    section("[STEP 3] Word Length Configuration");
    let min_len = CustomType::<usize>::new("Minimum word length:")
        .with_default(4)
        .with_error_message("Please enter a valid number")
        .with_validator(|v: &usize| {
            Ok(if *v >= 1 {
                Validation::Valid
            } else {
                Validation::Invalid("Minimum length must be at least 1".into())
            })
        })
        .prompt()?;
    let max_len = CustomType::<usize>::new("Maximum word length:")
        .with_default(12.max(min_len))
        .with_error_message("Please enter a valid number")
        .with_validator(move |v: &usize| {
            Ok(if *v >= min_len {
                Validation::Valid
            } else {
                Validation::Invalid(
                    format!("Maximum length must be >= minimum length ({})", min_len).into(),
                )
            })
        })
        .prompt()?;

    section("[STEP 4] Wordlist Size");
    let max_words = Text::new("Maximum number of words:")
        .with_help_message("e.g. 500, 1000, or press Enter for unlimited")
        .with_validator(|v: &str| {
            let v = v.trim();
            Ok(match v.parse::<u64>() {
                _ if v.is_empty() => Validation::Valid,
                Ok(n) if n >= 1 => Validation::Valid,
                Ok(_) => Validation::Invalid("Word count must be at least 1".into()),
                Err(_) => Validation::Invalid("Please enter a valid number".into()),
            })
        })
        .prompt()?;
    let max_words = max_words.trim().parse::<u64>().ok();

    section("[STEP 5] Output Configuration");
    let output = Text::new("Enter output filename (e.g., wordlist.txt):")
        .with_validator(|v: &str| {
            Ok(if v.trim().is_empty() {
                Validation::Invalid("Output filename is required!".into())
            } else {
                Validation::Valid
            })
        })
        .prompt()?;

    Ok(GenerationConfig {
        personal,
        pattern,
        special_chars,
        leetspeak,
        min_len,
        max_len,
        max_words,
        output: Some(PathBuf::from(output::with_txt_extension(output.trim()))),
        ..Default::default()
    })
}
