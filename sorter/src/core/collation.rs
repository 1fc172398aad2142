//! Locale-aware text ordering for textual columns.
//!
//! Comparison runs at primary ("base") strength: case and diacritics do not
//! distinguish two names, only base letters do.

use std::cmp::Ordering;
use std::fmt;

use anyhow::{Result, anyhow};
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_locale_core::Locale;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "ko";

/// Base-strength collator bound to a single locale.
pub struct Collation {
    locale: Locale,
    collator: CollatorBorrowed<'static>,
}

/// Parse a BCP-47 locale tag without loading collation data.
pub fn parse_locale(tag: &str) -> Result<Locale> {
    tag.parse()
        .map_err(|err| anyhow!("invalid locale '{}': {}", tag, err))
}

impl Collation {
    /// Build a collator for a BCP-47 locale tag (e.g. `ko`, `en-US`).
    pub fn new(tag: &str) -> Result<Self> {
        let locale = parse_locale(tag)?;
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Primary);
        let collator = Collator::try_new(CollatorPreferences::from(locale.clone()), options)
            .map_err(|err| anyhow!("no collation data for locale '{}': {}", tag, err))?;
        Ok(Self { locale, collator })
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale", &self.locale.to_string())
            .field("strength", &"primary")
            .finish()
    }
}
