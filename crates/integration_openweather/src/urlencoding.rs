//! URL encoding utility for query parameters
//!
//! City queries carry spaces, commas and non-ASCII characters.

/// Percent-encode a string for use in URL query parameters
///
/// Encodes all characters except unreserved characters (`A-Z`, `a-z`, `0-9`,
/// `-`, `_`, `.`, `~`). Spaces are encoded as `+`.
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for b in c.to_string().as_bytes() {
                    result.push_str(&format!("%{b:02X}"));
                }
            },
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_simple_text() {
        assert_eq!(encode("new york"), "new+york");
    }

    #[test]
    fn encode_special_chars() {
        assert_eq!(encode("city,us"), "city%2Cus");
    }

    #[test]
    fn encode_unreserved_chars() {
        assert_eq!(encode("abc-123_test.file~v2"), "abc-123_test.file~v2");
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn encode_unicode() {
        let encoded = encode("München");
        assert!(encoded.starts_with("M%C3%BC"));
    }
}
