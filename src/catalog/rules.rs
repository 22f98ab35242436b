//! Name filtering rules applied before any texture is decoded

use crate::catalog::swatch::Classification;
use crate::io::configuration::{DEFAULT_BLACKLIST, DEFAULT_WHITELIST, SWATCH_SIZE};
use crate::io::error::{MapArtError, Result, invalid_dimensions, invalid_parameter};
use serde::Deserialize;
use std::path::Path;

/// Inclusion and exclusion rules for a swatch catalog
///
/// Values are immutable once built, so several rule sets can coexist in
/// one process. Missing fields in a JSON override fall back to the
/// built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogRules {
    /// A name must contain at least one of these substrings
    pub whitelist: Vec<String>,
    /// A name containing any of these substrings is excluded
    pub blacklist: Vec<String>,
    /// Required side length of every swatch in pixels
    pub swatch_size: u32,
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self {
            whitelist: DEFAULT_WHITELIST.iter().map(ToString::to_string).collect(),
            blacklist: DEFAULT_BLACKLIST.iter().map(ToString::to_string).collect(),
            swatch_size: SWATCH_SIZE,
        }
    }
}

impl CatalogRules {
    /// Build rules from explicit lists
    pub fn new<W, B>(whitelist: W, blacklist: B, swatch_size: u32) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            blacklist: blacklist.into_iter().map(Into::into).collect(),
            swatch_size,
        }
    }

    /// Load a rule override from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON,
    /// or describes an unusable swatch size
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MapArtError::FileSystem {
            path: path.to_path_buf(),
            operation: "read rules",
            source: e,
        })?;

        let rules: Self = serde_json::from_str(&text)
            .map_err(|e| invalid_parameter("rules", &path.display(), &e))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the rules can produce a usable catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the swatch size is below 2 pixels
    pub fn validate(&self) -> Result<()> {
        if self.swatch_size < 2 {
            return Err(invalid_dimensions(
                "swatch size",
                self.swatch_size,
                &"swatches must be at least 2x2 pixels",
            ));
        }
        Ok(())
    }

    /// True if any blacklist token occurs in `name`
    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.blacklist.iter().any(|token| name.contains(token.as_str()))
    }

    /// True if any whitelist token occurs in `name`
    pub fn is_whitelisted(&self, name: &str) -> bool {
        self.whitelist.iter().any(|token| name.contains(token.as_str()))
    }

    /// Apply the name rules, returning the exclusion if one applies
    ///
    /// The blacklist always wins over the whitelist.
    pub fn filter_name(&self, name: &str) -> Option<Classification> {
        if self.is_blacklisted(name) {
            Some(Classification::ExcludedBlacklist)
        } else if self.is_whitelisted(name) {
            None
        } else {
            Some(Classification::ExcludedNotWhitelisted)
        }
    }
}
