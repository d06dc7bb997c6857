/// Width of the country code assumed when converting an international number
/// to local dialing format. Three digits matches codes like +250.
pub const DEFAULT_COUNTRY_CODE_DIGITS: usize = 3;

/// Normalizes a raw phone number with the default country-code width.
pub fn normalize(raw: &str) -> String {
    normalize_with_country_code(raw, DEFAULT_COUNTRY_CODE_DIGITS)
}

/// Normalizes a raw phone number into local dialing format.
///
/// Whitespace, hyphens, and parentheses are stripped. A `+` prefix is taken
/// as an international number: the `+` and the next `country_code_digits`
/// characters are dropped and replaced with a leading `0`. Anything else is
/// returned as-is; digit count and remaining characters are not validated.
///
/// The fixed-width country code assumption is wrong for 1- and 2-digit codes,
/// which is why the width is a parameter on this one function rather than
/// baked into call sites.
pub fn normalize_with_country_code(raw: &str, country_code_digits: usize) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    match cleaned.strip_prefix('+') {
        Some(rest) => {
            let national = rest.get(country_code_digits..).unwrap_or("");
            format!("0{}", national)
        }
        None => cleaned,
    }
}
