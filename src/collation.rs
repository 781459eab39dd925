//! Case-insensitive comparison profiles.
//!
//! Equality is canonical caseless matching: elements are decomposed,
//! case folded, then decomposed again, so composed and decomposed
//! spellings of the same user-perceived character compare equal.

use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::UnicodeNormalization;

use crate::errors::ParseLocaleError;

/// Environment variables consulted for the ambient locale, in glibc
/// precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_COLLATE", "LANG"];

/// A case-insensitive comparison profile.
///
/// Unicode defines exactly one locale tailoring for case folding: the
/// dotted and dotless I rules shared by Turkish and Azerbaijani. Every
/// other locale folds with the default mappings, so two profiles cover
/// all locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collation {
    /// Default Unicode case folding.
    Root,
    /// Turkic tailoring: `I` pairs with `ı` and `İ` pairs with `i`.
    Turkic,
}

impl Collation {
    /// Reduce one text element to its fold key.
    ///
    /// Two elements are equal under this profile exactly when their
    /// fold keys are byte-equal, which makes the key usable as a hash
    /// table key for case-insensitive lookups.
    pub fn fold_key(&self, element: &str) -> String {
        match self {
            Collation::Root => element.chars().nfd().case_fold().nfd().collect(),
            Collation::Turkic => turkic_key(element),
        }
    }

    /// Compare two strings for equality under this profile.
    pub fn eq_ignore_case(&self, left: &str, right: &str) -> bool {
        self.fold_key(left) == self.fold_key(right)
    }

    /// Resolve the ambient locale from the process environment.
    ///
    /// Checks `LC_ALL`, `LC_COLLATE` and `LANG` in glibc precedence
    /// order: the first variable that is set and non-empty decides.
    /// `LC_ALL=C` therefore resolves [Collation::Root] even when a
    /// lower-precedence variable names a Turkic locale, as does any
    /// other setting without a recognizable Turkic tag. With none set
    /// the result is [Collation::Root].
    pub fn from_env() -> Self {
        for name in &LOCALE_VARS {
            let value = match env::var(name) {
                Ok(value) => value,
                Err(_) => continue,
            };

            // Empty counts as unset and falls through; anything else
            // ends the search. LC_ALL=C must force the POSIX locale,
            // not defer to LC_COLLATE or LANG.
            if value.is_empty() {
                continue;
            }

            // Locale settings look like "tr_TR.UTF-8@euro"; the codeset
            // and modifier are not part of the tag.
            let tag = value.split(&['.', '@'][..]).next().unwrap_or("");
            return tag.parse().unwrap_or(Collation::Root);
        }
        Collation::Root
    }
}

impl Default for Collation {
    fn default() -> Self {
        Collation::Root
    }
}

impl FromStr for Collation {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref TAG: Regex =
                Regex::new(r"^(?P<primary>[A-Za-z]{2,8})([-_][0-9A-Za-z]+)*$").unwrap();
        };

        let cap = match TAG.captures(s) {
            None => return Err(ParseLocaleError::InvalidTag(s.to_string())),
            Some(c) => c,
        };

        match cap["primary"].to_ascii_lowercase().as_str() {
            "tr" | "az" => Ok(Collation::Turkic),
            _ => Ok(Collation::Root),
        }
    }
}

/// Fold key under the Turkic tailoring from CaseFolding.txt: `I` folds
/// to `ı` (U+0131) and `İ` folds to `i`.
///
/// Decomposition runs before the tailoring, so the tailoring has to
/// catch `İ` in its decomposed spelling, `I` followed by a combining
/// dot above. That keeps `İ` equal to `i` in both spellings, while a
/// bare `I` still folds dotless.
fn turkic_key(element: &str) -> String {
    let mut premapped = String::new();
    let mut decomposed = element.chars().nfd().peekable();

    while let Some(c) = decomposed.next() {
        match c {
            'I' if decomposed.peek() == Some(&'\u{307}') => {
                decomposed.next();
                premapped.push('i');
            }
            'I' => premapped.push('\u{131}'),
            _ => premapped.push(c),
        }
    }

    premapped.chars().case_fold().nfd().collect()
}
