//! Error catalog
//!
//! Indexes every [`FormulaError`] by short code, extended code and display
//! string. The indices are built once by [`ErrorCatalog::build`] and are
//! read-only afterwards.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::sync::OnceLock;

use ahash::AHashMap;

use crate::error::{Error, LookupKey, Result};
use crate::formula_error::FormulaError;

static GLOBAL_CATALOG: OnceLock<ErrorCatalog> = OnceLock::new();

/// What to do when two catalog entries share a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicateKeyPolicy {
    /// Fail the build with [`Error::DuplicateKey`]
    #[default]
    Reject,
    /// Keep the entry registered last
    Overwrite,
}

/// Catalog construction settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogOptions {
    /// Handling of entries that repeat a key
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl CatalogOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate key policy
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }
}

/// Read-only lookup tables over a fixed set of [`FormulaError`] entries
#[derive(Debug)]
pub struct ErrorCatalog {
    by_byte: AHashMap<u8, FormulaError>,
    by_int: AHashMap<i32, FormulaError>,
    by_text: AHashMap<&'static str, FormulaError>,
    entries: Vec<FormulaError>,
}

impl ErrorCatalog {
    /// Build the three indices over `entries`
    pub fn build(entries: &[FormulaError], options: &CatalogOptions) -> Result<Self> {
        let mut catalog = Self {
            by_byte: AHashMap::with_capacity(entries.len()),
            by_int: AHashMap::with_capacity(entries.len()),
            by_text: AHashMap::with_capacity(entries.len()),
            entries: Vec::with_capacity(entries.len()),
        };

        for &error in entries {
            if let Some(code) = error.code() {
                register(&mut catalog.by_byte, code, error, options, LookupKey::Byte)?;
            }
            register(&mut catalog.by_int, error.long_code(), error, options, LookupKey::Int)?;
            register(&mut catalog.by_text, error.as_str(), error, options, |s| {
                LookupKey::Text(s.to_string())
            })?;
            if !catalog.entries.contains(&error) {
                catalog.entries.push(error);
            }
        }

        Ok(catalog)
    }

    /// The process-wide catalog over [`FormulaError::ALL`]
    pub fn global() -> &'static ErrorCatalog {
        GLOBAL_CATALOG.get_or_init(|| {
            log::debug!("building formula error catalog");
            match ErrorCatalog::build(&FormulaError::ALL, &CatalogOptions::default()) {
                Ok(catalog) => catalog,
                // FormulaError::ALL has distinct keys; the catalog tests cover it
                Err(e) => unreachable!("built-in error catalog is inconsistent: {e}"),
            }
        })
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = FormulaError> + '_ {
        self.entries.iter().copied()
    }

    /// Check if `code` is a known short or extended code
    pub fn is_valid_code(&self, code: i32) -> bool {
        self.byte_entry(code).is_some() || self.by_int.contains_key(&code)
    }

    /// Look up an entry by its short code
    pub fn for_byte(&self, code: u8) -> Result<FormulaError> {
        self.by_byte
            .get(&code)
            .copied()
            .ok_or(Error::UnknownCode(LookupKey::Byte(code)))
    }

    /// Look up an entry by extended code, falling back to the short code
    ///
    /// Callers may pass either representation.
    pub fn for_int(&self, code: i32) -> Result<FormulaError> {
        self.by_int
            .get(&code)
            .copied()
            .or_else(|| self.byte_entry(code))
            .ok_or(Error::UnknownCode(LookupKey::Int(code)))
    }

    /// Look up an entry by its exact display string
    pub fn for_string(&self, text: &str) -> Result<FormulaError> {
        self.by_text
            .get(text)
            .copied()
            .ok_or_else(|| Error::UnknownCode(LookupKey::Text(text.to_string())))
    }

    /// Display string for `code`
    ///
    /// Never fails: unknown codes produce `~non~std~err(<code>)~`, which
    /// cannot be mistaken for a standard Excel error.
    pub fn text(&self, code: i32) -> Cow<'static, str> {
        match self.for_int(code) {
            Ok(error) => Cow::Borrowed(error.as_str()),
            Err(_) => {
                log::trace!("no catalog entry for error code {code}");
                Cow::Owned(format!("~non~std~err({code})~"))
            }
        }
    }

    fn byte_entry(&self, code: i32) -> Option<FormulaError> {
        u8::try_from(code)
            .ok()
            .and_then(|b| self.by_byte.get(&b).copied())
    }
}

fn register<K, F>(
    index: &mut AHashMap<K, FormulaError>,
    key: K,
    error: FormulaError,
    options: &CatalogOptions,
    to_lookup_key: F,
) -> Result<()>
where
    K: Eq + Hash + Copy,
    F: Fn(K) -> LookupKey,
{
    match index.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(error);
        }
        Entry::Occupied(mut slot) => match options.duplicate_keys {
            DuplicateKeyPolicy::Reject => {
                return Err(Error::DuplicateKey {
                    key: to_lookup_key(key),
                    first: *slot.get(),
                    second: error,
                });
            }
            DuplicateKeyPolicy::Overwrite => {
                log::warn!(
                    "{} replaces {:?} with {:?}",
                    to_lookup_key(key),
                    slot.get(),
                    error
                );
                slot.insert(error);
            }
        },
    }
    Ok(())
}
