//! Base encodings: RFC 4648 dictionaries, hex and the base-x alphabets.

use crate::core::alphabets;
use crate::core::config::EncodingMode;
use crate::core::dictionary::Dictionary;
use crate::encoders::{chunked, math};
use crate::transforms::{Descriptor, Options, Output, Transform, TransformError};

use super::{encoded_text, unwrapped_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

/// Encodes or decodes with a shared built-in dictionary, using whichever
/// algorithm the dictionary's mode calls for.
struct DictionaryCodec {
    dictionary: &'static Dictionary,
    direction: Direction,
}

impl Transform for DictionaryCodec {
    fn apply(&self, input: &[u8], _: &Options) -> Result<Output, TransformError> {
        let dictionary = self.dictionary;
        match (self.direction, dictionary.mode()) {
            (Direction::Encode, EncodingMode::Radix) => {
                Ok(Output::Text(math::encode(input, dictionary)))
            }
            (Direction::Encode, EncodingMode::Chunked) => {
                Ok(Output::Text(chunked::encode_chunked(input, dictionary)))
            }
            (Direction::Decode, EncodingMode::Radix) => {
                Ok(Output::Bytes(math::decode(&encoded_text(input), dictionary)?))
            }
            (Direction::Decode, EncodingMode::Chunked) => Ok(Output::Bytes(
                chunked::decode_chunked(&unwrapped_text(input), dictionary)?,
            )),
        }
    }
}

fn codec_pair(
    dictionary: &'static Dictionary,
    suffix: &str,
    label: &str,
    group: &'static str,
) -> [Descriptor; 2] {
    [
        Descriptor::new(
            format!("enc{}", suffix),
            format!("Encode {}", label),
            group,
            DictionaryCodec {
                dictionary,
                direction: Direction::Encode,
            },
        ),
        Descriptor::new(
            format!("dec{}", suffix),
            format!("Decode {}", label),
            group,
            DictionaryCodec {
                dictionary,
                direction: Direction::Decode,
            },
        ),
    ]
}

/// `encbase64`, `decbase64`, `encbase64url`, `decbase64url`, `encbase32`, `decbase32`.
pub(super) fn rfc4648() -> Vec<Descriptor> {
    let mut descriptors = Vec::with_capacity(6);
    descriptors.extend(codec_pair(alphabets::base64(), "base64", "Base64", "Base64"));
    descriptors.extend(codec_pair(
        alphabets::base64url(),
        "base64url",
        "Base64 (URL-safe)",
        "Base64",
    ));
    descriptors.extend(codec_pair(alphabets::base32(), "base32", "Base32", "Base32"));
    descriptors
}

/// Base64 in either RFC 4648 alphabet, padding optional. ASCII whitespace
/// anywhere in the text is skipped.
pub(super) fn decode_base64_lenient(text: &str) -> Result<Vec<u8>, TransformError> {
    let standard: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    Ok(chunked::decode_chunked(&standard, alphabets::base64())?)
}

fn enchex(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(hex::encode(input)))
}

fn dechex(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Bytes(hex::decode(encoded_text(input).as_bytes())?))
}

/// `enchex`, `dechex`.
pub(super) fn hex_codec() -> Vec<Descriptor> {
    vec![
        Descriptor::new("enchex", "Encode Hex", "Binary", enchex).with_aliases(&["hex"]),
        Descriptor::new("dechex", "Decode Hex", "Binary", dechex).with_aliases(&["unhex"]),
    ]
}

fn basex_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `enc<alphabet>` / `dec<alphabet>` for every base-x alphabet.
pub(super) fn basex() -> Vec<Descriptor> {
    alphabets::basex()
        .iter()
        .flat_map(|dictionary| {
            codec_pair(
                dictionary,
                dictionary.name(),
                &basex_label(dictionary.name()),
                "Base X",
            )
        })
        .collect()
}
