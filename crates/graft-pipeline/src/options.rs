//! Declared, CLI-style string options.
//!
//! Plugins declare named options with a help string and a default; the
//! host applies explicit values on top, either one at a time (CLI flags)
//! or from an `[options]` table in a TOML file. Setting an undeclared
//! option is rejected so typos surface before the build starts.
//!
//! Option *values* are never validated here; they reach plugins verbatim.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors from option registration and loading.
#[derive(Debug, Error)]
pub enum OptionError {
    /// Option name was never declared.
    #[error("Unknown option: {0}")]
    Unknown(String),
    /// Options file is not valid TOML.
    #[error("Invalid options file: {0}")]
    Parse(#[source] toml::de::Error),
    /// Option value in the file is not a TOML string.
    #[error("Option '{0}' expects a string value")]
    NotAString(String),
    /// I/O error reading the options file.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

/// A declared option.
#[derive(Debug)]
struct Declaration {
    help: String,
    default: String,
}

/// Raw options file as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OptionsFileRaw {
    options: toml::Table,
}

/// Declared-option registry.
///
/// Keys are kebab-case option names (e.g. `mermaid-version`). [`get`]
/// resolves an explicit value first and falls back to the declared
/// default.
///
/// [`get`]: Self::get
#[derive(Debug, Default)]
pub struct Options {
    declared: BTreeMap<String, Declaration>,
    values: BTreeMap<String, String>,
}

impl Options {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option with its help string and default value.
    ///
    /// Declaring the same name again replaces the help and default; any
    /// explicit value already set is kept.
    pub fn declare(&mut self, name: &str, help: &str, default: &str) {
        self.declared.insert(
            name.to_owned(),
            Declaration {
                help: help.to_owned(),
                default: default.to_owned(),
            },
        );
    }

    /// Set an explicit value for a declared option.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::Unknown` if the name was never declared.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), OptionError> {
        if !self.declared.contains_key(name) {
            return Err(OptionError::Unknown(name.to_owned()));
        }
        self.values.insert(name.to_owned(), value.into());
        Ok(())
    }

    /// Resolve an option: explicit value first, declared default second.
    ///
    /// Returns `None` for names that were never declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.values.get(name) {
            return Some(value);
        }
        self.declared.get(name).map(|decl| decl.default.as_str())
    }

    /// Help string of a declared option.
    #[must_use]
    pub fn help(&self, name: &str) -> Option<&str> {
        self.declared.get(name).map(|decl| decl.help.as_str())
    }

    /// Apply an `[options]` table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::Parse` for malformed TOML,
    /// `OptionError::NotAString` for non-string values and
    /// `OptionError::Unknown` for undeclared names.
    pub fn apply_toml(&mut self, text: &str) -> Result<(), OptionError> {
        let raw: OptionsFileRaw = toml::from_str(text).map_err(OptionError::Parse)?;
        for (name, value) in raw.options {
            let toml::Value::String(value) = value else {
                return Err(OptionError::NotAString(name));
            };
            self.set(&name, value)?;
        }
        Ok(())
    }

    /// Read and apply an options file.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::Io` if the file cannot be read, plus the
    /// errors of [`apply_toml`](Self::apply_toml).
    pub fn apply_file(&mut self, path: &Path) -> Result<(), OptionError> {
        let text = std::fs::read_to_string(path).map_err(OptionError::Io)?;
        self.apply_toml(&text)
    }
}
