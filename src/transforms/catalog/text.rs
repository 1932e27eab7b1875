//! Letter rotation, character-set conversions and punycode.

use crate::transforms::{Descriptor, OptionSchema, Options, Output, TransformError};

use super::lossy_text;

fn rotate(byte: u8, shift: u8) -> u8 {
    match byte {
        b'a'..=b'z' => b'a' + (byte - b'a' + shift) % 26,
        b'A'..=b'Z' => b'A' + (byte - b'A' + shift) % 26,
        _ => byte,
    }
}

fn rot(input: &[u8], options: &Options) -> Result<Output, TransformError> {
    // range-validated to 0..=26 before dispatch
    let shift = (options.int("shift")? % 26) as u8;
    Ok(Output::Bytes(input.iter().map(|&b| rotate(b, shift)).collect()))
}

/// Bytes read as 7-bit ASCII: the high bit is dropped.
fn encascii(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(input.iter().map(|&b| (b & 0x7f) as char).collect()))
}

/// Text written one byte per character, keeping the low 8 bits of each
/// code point.
fn decascii(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Bytes(
        lossy_text(input)
            .chars()
            .map(|c| (c as u32 & 0xff) as u8)
            .collect(),
    ))
}

/// Bytes read as UTF-16LE code units. A dangling odd byte is dropped and
/// unpaired surrogates become U+FFFD.
fn encutf16le(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    let units: Vec<u16> = input
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok(Output::Text(String::from_utf16_lossy(&units)))
}

fn decutf16le(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Bytes(
        lossy_text(input)
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect(),
    ))
}

fn encpunycode(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    idna::punycode::encode_str(&lossy_text(input))
        .map(Output::Text)
        .ok_or(TransformError::Punycode)
}

fn decpunycode(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    idna::punycode::decode_to_string(&lossy_text(input))
        .map(Output::Text)
        .ok_or(TransformError::Punycode)
}

pub(super) fn rot_descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("rot", "Rot", "Crypto", rot)
            .with_aliases(&["rot13"])
            .with_option(
                "shift",
                OptionSchema::Range {
                    min: 0,
                    max: 26,
                    default: 13,
                },
            ),
    ]
}

pub(super) fn charset_descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("encascii", "Encode ASCII", "Chars", encascii),
        Descriptor::new("decascii", "Decode ASCII", "Chars", decascii),
        Descriptor::new("encutf16le", "Encode UTF16LE", "Chars", encutf16le),
        Descriptor::new("decutf16le", "Decode UTF16LE", "Chars", decutf16le),
    ]
}

pub(super) fn punycode_descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("encpunycode", "Encode Punycode", "Punycode", encpunycode),
        Descriptor::new("decpunycode", "Decode Punycode", "Punycode", decpunycode),
    ]
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::transforms::{RawOptions, run};

    fn shift(value: &str) -> RawOptions {
        RawOptions::from([("shift".to_string(), value.to_string())])
    }

    #[test]
    fn test_rot_default_is_13() {
        let default = run("rot", b"Hello, World!", &RawOptions::new()).unwrap();
        let explicit = run("rot", b"Hello, World!", &shift("13")).unwrap();
        assert_eq!(default, b"Uryyb, Jbeyq!");
        assert_eq!(default, explicit);
    }

    #[test]
    fn test_rot_bounds() {
        assert_eq!(run("rot", b"abcXYZ", &shift("0")).unwrap(), b"abcXYZ");
        assert_eq!(run("rot", b"abcXYZ", &shift("26")).unwrap(), b"abcXYZ");
        assert_eq!(run("rot", b"abcXYZ", &shift("1")).unwrap(), b"bcdYZA");
    }

    #[test]
    fn test_rot_out_of_range_rejected() {
        let err = run("rot", b"abc", &shift("27")).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { .. }));
    }

    #[test]
    fn test_encascii_masks_high_bit() {
        assert_eq!(run("encascii", &[0x48, 0xe9], &RawOptions::new()).unwrap(), b"Hi");
    }

    #[test]
    fn test_decascii_truncates_code_points() {
        assert_eq!(
            run("decascii", "Aé".as_bytes(), &RawOptions::new()).unwrap(),
            vec![0x41, 0xe9]
        );
    }

    #[test]
    fn test_utf16le_roundtrip() {
        let raw = RawOptions::new();
        let encoded = run("decutf16le", "hé€".as_bytes(), &raw).unwrap();
        assert_eq!(encoded, vec![0x68, 0x00, 0xe9, 0x00, 0xac, 0x20]);
        assert_eq!(run("encutf16le", &encoded, &raw).unwrap(), "hé€".as_bytes());
    }

    #[test]
    fn test_punycode() {
        let raw = RawOptions::new();
        assert_eq!(run("encpunycode", "münchen".as_bytes(), &raw).unwrap(), b"mnchen-3ya");
        assert_eq!(
            run("decpunycode", b"mnchen-3ya", &raw).unwrap(),
            "münchen".as_bytes()
        );
    }
}
