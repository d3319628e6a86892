//! Orderings the listing page offers and the comparator behind each one.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

use crate::products::Product;
use crate::CoreError;

/// Ordering selected on the listing page.
///
/// The wire form (query string, CLI flag) is camelCase: `recommended`,
/// `newest`, `popular`, `priceHigh`, `priceLow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Upstream order, untouched.
    #[default]
    Recommended,
    /// Highest `id` first.
    Newest,
    /// Alphabetical by title. There is no popularity signal in the catalog;
    /// the name is kept for the selector but the ordering is by title.
    Popular,
    PriceHigh,
    PriceLow,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Recommended,
        SortOption::Newest,
        SortOption::Popular,
        SortOption::PriceHigh,
        SortOption::PriceLow,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Recommended => "recommended",
            SortOption::Newest => "newest",
            SortOption::Popular => "popular",
            SortOption::PriceHigh => "priceHigh",
            SortOption::PriceLow => "priceLow",
        }
    }

    /// Human-readable label shown in the sort selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Recommended => "Recommended",
            SortOption::Newest => "Newest First",
            SortOption::Popular => "Popular",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::PriceLow => "Price: Low to High",
        }
    }

    /// Parses a selector value, treating anything unrecognized (including an
    /// absent value) as [`SortOption::Recommended`].
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSortOption(s.to_string()))
    }
}

/// Returns a sorted copy of `products`; the input slice is never reordered.
///
/// The sort is stable: products with equal keys keep their relative input
/// order. No secondary key is applied.
#[must_use]
pub fn apply_sort(products: &[Product], option: SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match option {
        SortOption::Recommended => {}
        SortOption::Newest => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOption::Popular => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOption::PriceHigh => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::PriceLow => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
    sorted
}

thread_local! {
    // Root-locale UCA collation from the compiled CLDR data.
    static TITLE_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compares titles with Unicode collation for the root locale: accents and
/// case only matter once the base letters tie, and lowercase sorts before
/// uppercase (`apple` < `Éclair` < `Zebra`, `mug` < `Mug`).
///
/// If the collation data cannot be loaded the titles fall back to plain
/// code-point order.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod tests;
