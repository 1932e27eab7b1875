//! Built-in dictionaries.
//!
//! The base-x alphabets and the RFC 4648 dictionaries are constants. They are
//! turned into [`Dictionary`] values once, on first use, and shared read-only
//! by every encode and decode call afterwards.

use std::sync::LazyLock;

use crate::core::config::EncodingMode;
use crate::core::dictionary::Dictionary;

/// The base-x alphabets, in catalog order: `(name, characters)`.
pub const BASEX_ALPHABETS: [(&str, &str); 11] = [
    ("basex2", "01"),
    ("basex8", "01234567"),
    ("basex11", "0123456789a"),
    ("basex16", "0123456789abcdef"),
    ("basex32", "0123456789ABCDEFGHJKMNPQRSTVWXYZ"),
    ("basex32z", "ybndrfg8ejkmcpqxot1uwisza345h769"),
    ("basex36", "0123456789abcdefghijklmnopqrstuvwxyz"),
    (
        "basex58",
        "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
    ),
    (
        "basex62",
        "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    ),
    (
        "basex64",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    ),
    (
        "basex66",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.~",
    ),
];

const RFC4648_BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const RFC4648_BASE64URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const RFC4648_BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn builtin(name: &str, chars: &str, mode: EncodingMode, padding: Option<char>) -> Dictionary {
    // The tables above are fixed; a failure here is a typo in this file.
    Dictionary::new_with_mode(name, chars, mode, padding)
        .unwrap_or_else(|e| panic!("built-in dictionary is invalid: {}", e))
}

static BASEX: LazyLock<Vec<Dictionary>> = LazyLock::new(|| {
    BASEX_ALPHABETS
        .iter()
        .map(|(name, chars)| builtin(name, chars, EncodingMode::Radix, None))
        .collect()
});

static BASE64: LazyLock<Dictionary> =
    LazyLock::new(|| builtin("base64", RFC4648_BASE64, EncodingMode::Chunked, Some('=')));

static BASE64URL: LazyLock<Dictionary> =
    LazyLock::new(|| builtin("base64url", RFC4648_BASE64URL, EncodingMode::Chunked, None));

static BASE32: LazyLock<Dictionary> =
    LazyLock::new(|| builtin("base32", RFC4648_BASE32, EncodingMode::Chunked, Some('=')));

/// All base-x dictionaries in catalog order.
pub fn basex() -> &'static [Dictionary] {
    &BASEX
}

/// Looks up a base-x dictionary by name (e.g. `basex58`).
pub fn basex_by_name(name: &str) -> Option<&'static Dictionary> {
    BASEX.iter().find(|d| d.name() == name)
}

/// RFC 4648 standard base64, padded with `=`.
pub fn base64() -> &'static Dictionary {
    &BASE64
}

/// RFC 4648 URL-safe base64, unpadded.
pub fn base64url() -> &'static Dictionary {
    &BASE64URL
}

/// RFC 4648 base32, padded with `=`.
pub fn base32() -> &'static Dictionary {
    &BASE32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basex_radices() {
        let radices: Vec<usize> = basex().iter().map(Dictionary::base).collect();
        assert_eq!(radices, vec![2, 8, 11, 16, 32, 32, 36, 58, 62, 64, 66]);
    }

    #[test]
    fn test_basex_are_radix_mode() {
        for dict in basex() {
            assert_eq!(dict.mode(), &EncodingMode::Radix, "{}", dict.name());
            assert_eq!(dict.padding(), None);
        }
    }

    #[test]
    fn test_alphabet_length_matches_radix_in_name() {
        for (name, chars) in BASEX_ALPHABETS {
            let digits: String = name.chars().filter(char::is_ascii_digit).collect();
            let radix: usize = digits.parse().unwrap();
            assert_eq!(chars.chars().count(), radix, "{}", name);
        }
    }

    #[test]
    fn test_basex66_is_uri_unreserved() {
        let dict = basex_by_name("basex66").unwrap();
        assert!(dict.decode_char('~').is_some());
        assert!(dict.decode_char('!').is_none());
    }

    #[test]
    fn test_basex_by_name() {
        let dict = basex_by_name("basex58").unwrap();
        assert_eq!(dict.base(), 58);
        assert_eq!(dict.zero_char(), '1');
        assert!(basex_by_name("base58").is_none());
    }

    #[test]
    fn test_shared_instance() {
        assert!(std::ptr::eq(base64(), base64()));
        assert!(std::ptr::eq(
            basex_by_name("basex66").unwrap(),
            &basex()[10]
        ));
    }

    #[test]
    fn test_rfc_dictionaries() {
        assert_eq!(base64().padding(), Some('='));
        assert_eq!(base64url().padding(), None);
        assert_eq!(base32().base(), 32);
        assert_eq!(base32().mode(), &EncodingMode::Chunked);
    }
}
