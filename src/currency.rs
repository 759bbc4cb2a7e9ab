//! Display symbols for ISO 4217 currency codes.

/// Returns the display symbol for a currency code, falling back to the bare
/// code for currencies with no common symbol or not in the table. Dollar and
/// yen symbols are disambiguated with a country prefix.
pub fn symbol(code: &str) -> &str {
    match code {
        "USD" => "US $",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "JP ¥",
        "CNY" => "CN ¥",
        "CAD" => "CA $",
        "AUD" => "AU $",
        "NZD" => "NZ $",
        "HKD" => "HK $",
        "SGD" => "SG $",
        "INR" => "₹",
        "KRW" => "₩",
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(symbol("USD"), "US $");
        assert_eq!(symbol("EUR"), "€");
        assert_eq!(symbol("GBP"), "£");
    }

    #[test]
    fn unknown_codes_fall_back_to_the_code() {
        assert_eq!(symbol("CHF"), "CHF");
        assert_eq!(symbol("XTS"), "XTS");
    }
}
