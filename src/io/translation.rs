//! Localized display names for blueprint output
//!
//! The table is optional: when the language file is absent or cannot be
//! parsed every name stays canonical.

use crate::io::configuration::DEFAULT_SUFFIX_DESCRIPTORS;
use std::collections::HashMap;
use std::path::Path;

/// Ordered positional suffixes with their display descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixDescriptors {
    pairs: Vec<(String, String)>,
}

impl Default for SuffixDescriptors {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX_DESCRIPTORS.iter().copied())
    }
}

impl SuffixDescriptors {
    /// Build from `(suffix, descriptor)` pairs, first match wins
    pub fn new<I, S, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(suffix, descriptor)| (suffix.into(), descriptor.into()))
                .collect(),
        }
    }

    /// Split `name` on the first configured suffix it ends with
    pub fn split<'a>(&'a self, name: &'a str) -> Option<(&'a str, &'a str)> {
        self.pairs.iter().find_map(|(suffix, descriptor)| {
            name.strip_suffix(suffix.as_str())
                .map(|base| (base, descriptor.as_str()))
        })
    }
}

/// Canonical block name to display string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Table from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a flat JSON language object
    ///
    /// Only string values whose key starts with `namespace` are kept,
    /// with the namespace stripped from the key.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `text` is not a JSON object
    pub fn from_json_str(text: &str, namespace: &str) -> serde_json::Result<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(text)?;
        let entries = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let name = key.strip_prefix(namespace)?;
                let text = value.as_str()?;
                Some((name.to_string(), text.to_string()))
            })
            .collect();
        Ok(Self { entries })
    }

    /// Load a language file, falling back to an empty table
    pub fn load(path: &Path, namespace: &str) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no language file");
                return Self::default();
            }
        };

        match Self::from_json_str(&text, namespace) {
            Ok(table) => {
                tracing::info!(entries = table.len(), "translations loaded");
                table
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "language file ignored");
                Self::default()
            }
        }
    }

    /// Number of translated names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no translations are available
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact translation of `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Display string for a canonical block name
    ///
    /// Exact matches win. Otherwise a positional suffix is stripped, the
    /// base translated (or kept as-is) and the descriptor appended. Names
    /// with neither, and every name when the table is empty, are
    /// returned unchanged.
    pub fn translate(&self, name: &str, suffixes: &SuffixDescriptors) -> String {
        if self.is_empty() {
            return name.to_string();
        }

        if let Some(exact) = self.get(name) {
            return exact.to_string();
        }

        suffixes.split(name).map_or_else(
            || name.to_string(),
            |(base, descriptor)| {
                let base = self.get(base).unwrap_or(base);
                format!("{base}{descriptor}")
            },
        )
    }
}
