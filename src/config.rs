//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! We look for a lodestar.toml (or the path given on the command line) and, if present, load
//! settings from there. Every key is optional.

use crate::error::ConfigError;
use facet::Facet;
use std::path::Path;
use std::time::Duration;
use std::{fs, io};
use tracing::debug;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_PATH: &str = "lodestar.toml";

#[derive(Facet, Clone, Debug)]
/// Navigation tuning and document preferences.
pub struct Config {
    #[facet(default = 200)]
    /// Length of the fragment-write cool-down window, in milliseconds.
    pub throttle_ms: u64,
    #[facet(default = 0.1875)]
    /// Trailing share of a section's height that no longer counts towards its visibility.
    pub visibility_margin: f64,
    #[facet(default = 5.0)]
    /// Distance within which a section's top counts as aligned with the viewport top.
    pub alignment_tolerance: f64,
    #[facet(default = 48.0)]
    /// Distance scrolled when stepping past either end of the document.
    pub nudge_distance: f64,
    #[facet(default = true)]
    /// Whether a refused full-viewport request shows a notice.
    pub notify_on_refusal: bool,
    #[facet(default = 16.0)]
    /// Layout units per rendered terminal row.
    pub row_height: f64,
    #[facet(default = vec!["Contents".to_string(), "Listing".to_string(), "Index".to_string()])]
    /// Level-2 headings that introduce a listing rather than a content item.
    pub listing_titles: Vec<String>,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes accepted as documents.
    pub file_extensions: Vec<String>,
}

impl Config {
    /// Load configuration from `path`, or lodestar.toml in the working directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_PATH));
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                String::new()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::parse(&contents).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the text does not fit the schema.
    pub fn parse(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// The cool-down window as a duration.
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    #[must_use]
    /// Whether `path` names a visible file with one of the accepted document suffixes.
    pub fn accepts(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        !hidden
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    self.file_extensions
                        .iter()
                        .any(|accepted| accepted.eq_ignore_ascii_case(ext))
                })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
