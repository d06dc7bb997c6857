use crate::domain::model::Platform;
use crate::utils::error::Result;
use url::Url;

/// Builds the tel: URL handed to the dialer.
///
/// The two platforms disagree on how much escaping their dialers accept:
/// iOS wants the whole USSD code percent-encoded, while Android dialers take
/// literal `*` and digits but reject a literal `#`. Both behaviors are kept
/// as-is; collapsing them breaks one dialer or the other.
pub fn dial_url(dial_code: &str, platform: Platform) -> Result<Url> {
    let encoded = match platform {
        Platform::Ios => encode_component(dial_code),
        Platform::Android => dial_code.replace('#', "%23"),
    };

    let url = Url::parse(&format!("tel:{}", encoded))?;
    Ok(url)
}

/// Percent-encodes a string following JavaScript `encodeURIComponent` rules:
/// ASCII alphanumerics and `-_.!~*'()` pass through, every other byte of the
/// UTF-8 encoding becomes `%XX`.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_encodes_only_hash() {
        let url = dial_url("*182*1*1*0788123456*1000#", Platform::Android).unwrap();
        assert_eq!(url.as_str(), "tel:*182*1*1*0788123456*1000%23");
    }

    #[test]
    fn test_android_encodes_every_hash() {
        let url = dial_url("*182#1#", Platform::Android).unwrap();
        assert_eq!(url.as_str(), "tel:*182%231%23");
    }

    #[test]
    fn test_ios_keeps_asterisks_and_encodes_hash() {
        // encodeURIComponent leaves `*` unescaped, so the iOS path differs
        // from Android only on characters outside the unreserved set.
        let url = dial_url("*182*1*1*0788123456*1000#", Platform::Ios).unwrap();
        assert_eq!(url.as_str(), "tel:*182*1*1*0788123456*1000%23");
    }

    #[test]
    fn test_ios_encodes_plus_and_spaces() {
        assert_eq!(encode_component("+250 788#"), "%2B250%20788%23");
    }

    #[test]
    fn test_encode_component_unreserved_set() {
        let s = "AZaz09-_.!~*'()";
        assert_eq!(encode_component(s), s);
    }
}
