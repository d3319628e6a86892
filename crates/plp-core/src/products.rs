use serde::{Deserialize, Serialize};

/// One catalog item as returned by the upstream products endpoint.
///
/// Upstream records carry more fields (`description`, `category`, `rating`);
/// only the four the listing page uses are kept and the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream identifier. Assumed unique within a response, never checked.
    pub id: i64,
    pub title: String,
    /// Amount in the store currency, exactly as the endpoint sent it.
    pub price: f64,
    /// Absolute URI of the product image.
    pub image: String,
}

impl Product {
    /// Price as shown on a card: `$` followed by the number's shortest
    /// decimal form. No rounding and no padding of decimal places, so `10`
    /// renders as `$10` and `22.3` as `$22.3`.
    ///
    /// Magnitudes at or above `1e21` or below `1e-6` switch to exponent
    /// form with a signed exponent (`$1e+21`, `$1e-7`), the same text a
    /// browser prints for such numbers.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", format_number(self.price))
    }
}

fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}
