//! Writing the final wordlist to disk

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordlistForgeError};
use crate::store::Wordlist;

/// What was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub path: PathBuf,
    pub words: usize,
    pub bytes: u64,
}

impl SaveSummary {
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Append `.txt` unless the name already ends with it
pub fn with_txt_extension(name: &str) -> String {
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{}.txt", name)
    }
}

/// Write the words sorted, one per line
pub fn save_wordlist(path: &Path, wordlist: &Wordlist) -> Result<SaveSummary> {
    let io_err =
        |e: std::io::Error| WordlistForgeError::io(e.to_string(), Some(path.display().to_string()));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WordlistForgeError::io(e.to_string(), Some(parent.display().to_string()))
        })?;
    }

    let words = wordlist.export();
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for word in &words {
        writer.write_all(word.as_bytes()).map_err(io_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    let bytes = std::fs::metadata(path).map_err(io_err)?.len();
    tracing::info!(path = %path.display(), words = words.len(), bytes, "Wordlist saved");

    Ok(SaveSummary {
        path: path.to_path_buf(),
        words: words.len(),
        bytes,
    })
}
