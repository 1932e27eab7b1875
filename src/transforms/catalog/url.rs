//! Percent-encoding in its three browser flavours.

use std::fmt::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::transforms::{Descriptor, Options, Output, TransformError};

use super::lossy_text;

/// Everything but the characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn is_escape_unreserved(unit: u16) -> bool {
    u8::try_from(unit)
        .is_ok_and(|b| b.is_ascii_alphanumeric() || b"@*_+-./".contains(&b))
}

/// Legacy `escape`, applied to UTF-16 code units.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for unit in text.encode_utf16() {
        if is_escape_unreserved(unit) {
            out.push(unit as u8 as char);
        } else if unit < 0x100 {
            let _ = write!(out, "%{:02X}", unit);
        } else {
            let _ = write!(out, "%u{:04X}", unit);
        }
    }
    out
}

fn hex_unit(digits: &[u16]) -> Option<u16> {
    digits.iter().try_fold(0u16, |acc, &d| {
        let digit = char::from_u32(d as u32)?.to_digit(16)?;
        Some(acc << 4 | digit as u16)
    })
}

/// Legacy `unescape`: `%XX` and `%uXXXX` become code units; anything
/// malformed is kept verbatim.
fn unescape(text: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;

    while i < units.len() {
        if units[i] == u16::from(b'%') {
            if units.get(i + 1) == Some(&u16::from(b'u'))
                && let Some(unit) = units.get(i + 2..i + 6).and_then(hex_unit)
            {
                out.push(unit);
                i += 6;
                continue;
            }
            if let Some(unit) = units.get(i + 1..i + 3).and_then(hex_unit) {
                out.push(unit);
                i += 3;
                continue;
            }
        }
        out.push(units[i]);
        i += 1;
    }

    String::from_utf16_lossy(&out)
}

/// `encodeURIComponent` over the UTF-8 text.
pub(super) fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `decodeURIComponent`: every `%` must start a valid escape and the decoded
/// bytes must be UTF-8.
pub(super) fn decode_uri_component(text: &str) -> Result<String, TransformError> {
    let bytes = text.as_bytes();
    for (i, _) in text.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(TransformError::MalformedUri);
        }
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| TransformError::MalformedUri)
}

fn encurlesc(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(escape(&lossy_text(input))))
}

fn decurlesc(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(unescape(&lossy_text(input))))
}

fn encuricomp(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(encode_uri_component(&lossy_text(input))))
}

fn decuricomp(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    decode_uri_component(&lossy_text(input)).map(Output::Text)
}

fn encurl(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input {
        let _ = write!(out, "%{:02x}", byte);
    }
    Ok(Output::Text(out))
}

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("encurlesc", "Encode URL (escape)", "URL", encurlesc),
        Descriptor::new("decurlesc", "Decode URL (unescape)", "URL", decurlesc),
        Descriptor::new("encuricomp", "Encode URL (encodeURIComponent)", "URL", encuricomp)
            .with_aliases(&["urlencode"]),
        Descriptor::new("decuricomp", "Decode URL (decodeURIComponent)", "URL", decuricomp)
            .with_aliases(&["urldecode"]),
        Descriptor::new("encurl", "Encode URL (all)", "URL", encurl),
        Descriptor::new("decurl", "Decode URL (all)", "URL", decurlesc),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transforms::{RawOptions, run};

    fn apply(name: &str, input: &str) -> String {
        String::from_utf8(run(name, input.as_bytes(), &RawOptions::new()).unwrap()).unwrap()
    }

    #[test]
    fn test_escape_legacy_rules() {
        assert_eq!(escape("a b+c/é€"), "a%20b+c/%E9%u20AC");
        assert_eq!(escape("@*_+-./"), "@*_+-./");
    }

    #[test]
    fn test_unescape_passes_malformed_through() {
        assert_eq!(unescape("%E9%u20AC%20"), "é€ ");
        assert_eq!(unescape("100%"), "100%");
        assert_eq!(unescape("%zz%u12"), "%zz%u12");
        assert_eq!(unescape("%u00e9"), "é");
    }

    #[test]
    fn test_uri_component() {
        assert_eq!(apply("encuricomp", "a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(apply("encuricomp", "-_.!~*'()"), "-_.!~*'()");
        assert_eq!(apply("decuricomp", "a%20b%26c%3Dd%2F%C3%A9"), "a b&c=d/é");
    }

    #[test]
    fn test_decuricomp_malformed() {
        for bad in ["%", "%2", "%zz", "%C3"] {
            let err = run("decuricomp", bad.as_bytes(), &RawOptions::new()).unwrap_err();
            assert!(
                matches!(err, Error::Transform { cause: TransformError::MalformedUri, .. }),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_encurl_every_byte() {
        assert_eq!(apply("encurl", "Hi!"), "%48%69%21");
        assert_eq!(run("encurl", &[0xff], &RawOptions::new()).unwrap(), b"%ff");
        assert_eq!(apply("decurl", "%48%69%21"), "Hi!");
    }
}
