//! Wordlist Forge - custom wordlist generation for security testing
//!
//! Builds candidate password lists from masks, character ranges, personal
//! details and seed files, then applies leetspeak, prefixes/suffixes and
//! length/count filters over one deduplicated set.

pub mod charset;
pub mod error;
pub mod generate;
pub mod generator;
pub mod output;
pub mod store;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WordlistForgeError};
pub use types::{GenerationConfig, GenerationReport, PersonalRecord, Step, StepReport};

// Re-export main functionality
pub use generator::WordlistGenerator;
pub use store::Wordlist;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
