use serde::Deserialize;
use std::collections::HashMap;

use crate::core::dictionary::Dictionary;
use crate::encoders::algorithms::errors::{
    DictionaryError, DictionaryNotFoundError, find_closest_dictionary,
};

/// Dictionary used when neither the command line nor the settings name one.
pub const DEFAULT_DICTIONARY: &str = "base85";

/// Configuration for a single dictionary loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// The characters comprising the dictionary (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Starting character for range-based dictionary definition
    /// Use with `length` to define sequential Unicode ranges
    #[serde(default)]
    pub start: Option<String>,
    /// Number of characters in range-based dictionary
    /// Use with `start` to define sequential Unicode ranges
    #[serde(default)]
    pub length: Option<usize>,
    /// Human-readable description shown by `config list`
    #[serde(default)]
    pub description: Option<String>,
}

impl DictionaryConfig {
    /// Returns the effective character set, generating from range if needed.
    ///
    /// Priority:
    /// 1. If `chars` is non-empty, use it directly
    /// 2. If `start` + `length` are set, generate sequential range
    pub fn effective_chars(&self) -> Result<String, DictionaryError> {
        // Explicit chars take priority
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        match (&self.start, self.length) {
            (Some(start), Some(length)) => {
                let start_char = start.chars().next().ok_or_else(|| {
                    DictionaryError::InvalidRange(
                        "start must contain at least one character".to_string(),
                    )
                })?;
                Self::generate_range(start_char as u32, length)
            }
            _ => Err(DictionaryError::InvalidRange(
                "dictionary needs either `chars` or both `start` and `length`".to_string(),
            )),
        }
    }

    /// Generate a string of sequential Unicode characters from a range.
    fn generate_range(start: u32, length: usize) -> Result<String, DictionaryError> {
        const MAX_UNICODE: u32 = 0x10FFFF;
        const SURROGATE_START: u32 = 0xD800;
        const SURROGATE_END: u32 = 0xDFFF;

        if length == 0 {
            return Err(DictionaryError::InvalidRange(
                "length must be greater than 0".to_string(),
            ));
        }

        let end = u32::try_from(length - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .filter(|end| *end <= MAX_UNICODE)
            .ok_or_else(|| {
                DictionaryError::InvalidRange(format!(
                    "range of {} from U+{:X} exceeds maximum Unicode codepoint U+{:X}",
                    length, start, MAX_UNICODE
                ))
            })?;

        // Check for surrogate gap crossing
        if start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(DictionaryError::InvalidRange(format!(
                "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
                start, end
            )));
        }

        (start..=end)
            .map(|codepoint| {
                char::from_u32(codepoint).ok_or_else(|| {
                    DictionaryError::InvalidRange(format!("invalid codepoint U+{:X}", codepoint))
                })
            })
            .collect()
    }

    /// Number of symbols this entry defines, without generating them.
    pub fn size(&self) -> usize {
        if !self.chars.is_empty() {
            self.chars.chars().count()
        } else {
            self.length.unwrap_or(0)
        }
    }

    /// Builds the dictionary this entry describes.
    pub fn build(&self) -> Result<Dictionary, DictionaryError> {
        Dictionary::builder()
            .chars_from_str(&self.effective_chars()?)
            .build()
    }
}

/// Collection of dictionary configurations loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct DictionaryRegistry {
    /// Map of dictionary names to their configurations
    #[serde(default)]
    pub dictionaries: HashMap<String, DictionaryConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global settings for base-rc.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Dictionary used when none is given; falls back to `base85`
    #[serde(default)]
    pub default_dictionary: Option<String>,
}

impl DictionaryRegistry {
    /// Parses dictionary configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in dictionary configurations.
    ///
    /// Returns the default dictionaries bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../dictionaries.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in dictionaries (from library)
    /// 2. `~/.config/base-rc/dictionaries.toml` (user overrides)
    /// 3. `./dictionaries.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching dictionary names.
    /// Override files that fail to load are logged and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        let user_config_path = dirs::config_dir()
            .map(|config_dir| config_dir.join("base-rc").join("dictionaries.toml"));
        let local_config_path = std::path::PathBuf::from("dictionaries.toml");

        for path in user_config_path.into_iter().chain([local_config_path]) {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => {
                    tracing::debug!(
                        path = %path.display(),
                        dictionaries = overrides.dictionaries.len(),
                        "loaded dictionary overrides"
                    );
                    config.merge(overrides);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to load dictionary overrides"
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Dictionaries from `other` override dictionaries with the same name in
    /// `self`, and a default dictionary set in `other` replaces ours.
    pub fn merge(&mut self, other: DictionaryRegistry) {
        self.dictionaries.extend(other.dictionaries);
        if other.settings.default_dictionary.is_some() {
            self.settings.default_dictionary = other.settings.default_dictionary;
        }
    }

    /// Retrieves a dictionary configuration by name.
    pub fn get_dictionary(&self, name: &str) -> Option<&DictionaryConfig> {
        self.dictionaries.get(name)
    }

    /// Builds the named dictionary.
    ///
    /// Unknown names fail with a suggestion for the closest registered name.
    pub fn dictionary(&self, name: &str) -> Result<Dictionary, DictionaryError> {
        let config = self.get_dictionary(name).ok_or_else(|| {
            let suggestion = find_closest_dictionary(name, &self.names());
            DictionaryNotFoundError::new(name, suggestion)
        })?;
        config.build()
    }

    /// Name of the dictionary to use when none is given.
    pub fn default_dictionary_name(&self) -> &str {
        self.settings
            .default_dictionary
            .as_deref()
            .unwrap_or(DEFAULT_DICTIONARY)
    }

    /// All dictionary names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.dictionaries.keys().cloned().collect();
        names.sort();
        names
    }
}
