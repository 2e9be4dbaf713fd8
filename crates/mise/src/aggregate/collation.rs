//! Natural-language ordering for item names and units.
//!
//! Comparison uses the CLDR collation tables for the selected locale, then
//! the raw string as a tie-break so distinct inputs never compare equal.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_locale_core::locale;
use serde::{Deserialize, Serialize};

static HEBREW: LazyLock<CollatorBorrowed<'static>> = LazyLock::new(|| {
    Collator::try_new(locale!("he").into(), CollatorOptions::default())
        .expect("compiled collation data includes he")
});

static ROOT: LazyLock<CollatorBorrowed<'static>> = LazyLock::new(|| {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
        .expect("compiled collation data includes root")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Hebrew tailoring: Hebrew script sorts before Latin.
    #[default]
    He,
    /// CLDR root order.
    Root,
}

impl Collation {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator().compare(a, b).then_with(|| a.cmp(b))
    }

    fn collator(&self) -> &'static CollatorBorrowed<'static> {
        match self {
            Collation::He => &HEBREW,
            Collation::Root => &ROOT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(collation: Collation, values: &[&str]) -> Vec<String> {
        let mut values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        values.sort_by(|a, b| collation.compare(a, b));
        values
    }

    #[test]
    fn test_hebrew_alphabetical_order() {
        assert_eq!(
            sorted(Collation::He, &["תפוח", "בצל", "אורז", "גזר"]),
            vec!["אורז", "בצל", "גזר", "תפוח"]
        );
    }

    #[test]
    fn test_hebrew_sorts_before_latin() {
        assert_eq!(
            sorted(Collation::He, &["Onion", "בצל", "alpha", "Alpha", "גזר"]),
            vec!["בצל", "גזר", "alpha", "Alpha", "Onion"]
        );
    }

    #[test]
    fn test_root_keeps_latin_first() {
        assert_eq!(
            sorted(Collation::Root, &["בצל", "Onion", "alpha"]),
            vec!["alpha", "Onion", "בצל"]
        );
    }

    #[test]
    fn test_shorter_word_first() {
        assert_eq!(
            sorted(Collation::He, &["לימונים", "לימון"]),
            vec!["לימון", "לימונים"]
        );
    }

    #[test]
    fn test_points_ignored_at_primary_level() {
        assert_eq!(Collation::He.compare("בָּצָל", "בצלים"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(
            sorted(Collation::Root, &["beta", "Alpha", "alpha", "Beta"]),
            vec!["alpha", "Alpha", "beta", "Beta"]
        );
    }

    #[test]
    fn test_equal_only_when_identical() {
        assert_eq!(Collation::He.compare("kg", "kg"), Ordering::Equal);
        assert_ne!(Collation::He.compare("KG", "kg"), Ordering::Equal);
    }
}
