//! The built-in transform catalog.

mod base;
mod datauri;
mod hash;
mod json;
mod markup;
mod text;
mod url;
mod utils;

use std::borrow::Cow;

use super::{Descriptor, Options, Output, TransformError};

/// Input bytes as text. Invalid UTF-8 sequences become U+FFFD.
pub(super) fn lossy_text(input: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(input)
}

/// Encoded text handed to a decoder, with surrounding ASCII whitespace
/// removed.
pub(super) fn encoded_text(input: &[u8]) -> Cow<'_, str> {
    match lossy_text(input) {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim_ascii()),
        Cow::Owned(s) => Cow::Owned(s.trim_ascii().to_string()),
    }
}

/// Encoded text with every ASCII whitespace character removed, so line-wrapped
/// base64 and base32 decode as one block.
pub(super) fn unwrapped_text(input: &[u8]) -> String {
    lossy_text(input)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect()
}

fn none(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Bytes(input.to_vec()))
}

/// Every built-in descriptor, in listing order.
pub(crate) fn builtin_descriptors() -> Vec<Descriptor> {
    let mut descriptors = vec![Descriptor::new("none", "None", "General", none)];
    descriptors.extend(hash::descriptors());
    descriptors.extend(base::rfc4648());
    descriptors.extend(text::rot_descriptors());
    descriptors.extend(text::charset_descriptors());
    descriptors.extend(base::hex_codec());
    descriptors.extend(url::descriptors());
    descriptors.extend(markup::descriptors());
    descriptors.extend(datauri::descriptors());
    descriptors.extend(text::punycode_descriptors());
    descriptors.extend(json::descriptors());
    descriptors.extend(utils::descriptors());
    descriptors.extend(utils::programming_descriptors());
    descriptors.extend(base::basex());
    descriptors
}
