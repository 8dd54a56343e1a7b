// Keyword store module
// Persists the single VHD keyword to a JSON file on disk

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::logger;

/// Keyword returned when no stored value exists
pub const DEFAULT_KEYWORD: &str = "SDEZ";

/// The one persisted configuration record.
/// Unknown keys in the file are ignored on read; only `vhdKeyword` is written.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigRecord {
    #[serde(rename = "vhdKeyword", default = "default_keyword")]
    vhd_keyword: String,
}

fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}

/// Durable single-value store for the VHD keyword.
///
/// The file on disk is the sole source of truth: every `load` and `save`
/// re-touches the file, there is no in-memory cache across requests.
pub struct KeywordStore {
    path: PathBuf,
}

impl KeywordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored keyword.
    ///
    /// An absent, unreadable or malformed file falls back to
    /// [`DEFAULT_KEYWORD`]; read failures never propagate.
    pub fn load(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<ConfigRecord>(&content) {
                Ok(record) => record.vhd_keyword,
                Err(e) => {
                    logger::log_warning(&format!(
                        "Failed to parse {}: {e}, using default keyword",
                        self.path.display()
                    ));
                    default_keyword()
                }
            },
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    logger::log_warning(&format!(
                        "Failed to read {}: {e}, using default keyword",
                        self.path.display()
                    ));
                }
                default_keyword()
            }
        }
    }

    /// Overwrite the stored keyword.
    pub fn save(&self, keyword: &str) -> Result<(), String> {
        let record = ConfigRecord {
            vhd_keyword: keyword.to_string(),
        };
        let content = serde_json::to_string_pretty(&record)
            .map_err(|e| format!("Failed to serialize configuration: {e}"))?;

        fs::write(&self.path, content).map_err(|e| {
            let message = format!("Failed to write {}: {e}", self.path.display());
            logger::log_error(&message);
            message
        })
    }
}
