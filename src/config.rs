//! Configuration file support
//!
//! Loads settings from ~/.codebox.toml (or %USERPROFILE%\.codebox.toml on Windows)
//!
//! Example:
//! ```text
//! [vocabulary]
//! builtin = true
//! extra = ["my-macro", "deftest"]
//! exclude = ["print"]
//!
//! [highlight]
//! color = "blue"
//! bold = false
//!
//! [editor]
//! line-numbers = true
//! ```
//!
//! The indent keywords are fixed and cannot be set here.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{EngineError, Result};
use crate::syntax::{Color, HighlightCategory, Style, VocabularySet};

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether the built-in Clojure core forms are part of the vocabulary
    pub builtin_vocabulary: bool,
    /// Additional vocabulary forms
    pub extra_forms: Vec<String>,
    /// Forms removed from the vocabulary
    pub excluded_forms: Vec<String>,
    /// Style used to paint vocabulary spans
    pub highlight: Style,
    /// Whether the host shows line numbers
    pub show_line_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            builtin_vocabulary: true,
            extra_forms: Vec::new(),
            excluded_forms: Vec::new(),
            highlight: HighlightCategory::Vocabulary.default_style(),
            show_line_numbers: false,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codebox.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codebox.toml"))
        }
    }

    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(vocab) = section(table, "vocabulary")? {
            if let Some(value) = vocab.get("builtin") {
                self.builtin_vocabulary = expect_bool("vocabulary.builtin", value)?;
            }
            if let Some(value) = vocab.get("extra") {
                self.extra_forms = expect_strings("vocabulary.extra", value)?;
            }
            if let Some(value) = vocab.get("exclude") {
                self.excluded_forms = expect_strings("vocabulary.exclude", value)?;
            }
        }

        if let Some(highlight) = section(table, "highlight")? {
            if let Some(value) = highlight.get("color") {
                let name = value.as_str().ok_or_else(|| {
                    EngineError::InvalidConfig("highlight.color must be a string".into())
                })?;
                self.highlight.fg = Color::from_name(name).ok_or_else(|| {
                    EngineError::InvalidConfig(format!("unknown color: {name}"))
                })?;
            }
            if let Some(value) = highlight.get("bold") {
                self.highlight.bold = expect_bool("highlight.bold", value)?;
            }
            if let Some(value) = highlight.get("underline") {
                self.highlight.underline = expect_bool("highlight.underline", value)?;
            }
        }

        if let Some(editor) = section(table, "editor")? {
            if let Some(value) = editor.get("line-numbers") {
                self.show_line_numbers = expect_bool("editor.line-numbers", value)?;
            }
        }

        Ok(())
    }

    /// Build the vocabulary these settings describe
    pub fn vocabulary(&self) -> VocabularySet {
        let base = if self.builtin_vocabulary {
            VocabularySet::clojure_core()
        } else {
            VocabularySet::default()
        };
        base.extended(self.extra_forms.iter().cloned())
            .without(&self.excluded_forms)
    }
}

fn section<'a>(table: &'a Table, name: &str) -> Result<Option<&'a Table>> {
    match table.get(name) {
        None => Ok(None),
        Some(Value::Table(t)) => Ok(Some(t)),
        Some(_) => Err(EngineError::InvalidConfig(format!("[{name}] must be a table"))),
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| EngineError::InvalidConfig(format!("{key} must be a boolean")))
}

fn expect_strings(key: &str, value: &Value) -> Result<Vec<String>> {
    let invalid = || EngineError::InvalidConfig(format!("{key} must be a list of strings"));
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
