//! HTML and XML character references.

use std::fmt::Write;

use crate::transforms::{Descriptor, Options, Output, TransformError};

use super::lossy_text;

const XML_ENTITIES: [(&str, char); 5] = [
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
];

/// Escapes ASCII runs with `escape_ascii` and every other character as a
/// hexadecimal character reference.
fn escape_markup(text: &str, escape_ascii: impl Fn(&str, &mut String)) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0;

    for (i, c) in text.char_indices() {
        if !c.is_ascii() {
            escape_ascii(&text[run..i], &mut out);
            let _ = write!(out, "&#x{:x};", c as u32);
            run = i + c.len_utf8();
        }
    }
    escape_ascii(&text[run..], &mut out);
    out
}

fn escape_xml_ascii(text: &str, out: &mut String) {
    for c in text.chars() {
        match XML_ENTITIES.iter().find(|(_, entity)| *entity == c) {
            Some((name, _)) => {
                let _ = write!(out, "&{};", name);
            }
            None => out.push(c),
        }
    }
}

/// Character for the body of a reference (`amp`, `#38`, `#x26`).
fn xml_reference(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code);
    }
    XML_ENTITIES
        .iter()
        .find(|(name, _)| *name == body)
        .map(|(_, c)| *c)
}

/// Decodes the five XML entities and numeric references. Unknown or
/// unterminated references are left as they are.
fn unescape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail[1..].find(';').and_then(|end| {
            let body = &tail[1..=end];
            xml_reference(body).map(|c| (c, end + 2))
        }) {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn enchtmlents(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(escape_markup(&lossy_text(input), |run, out| {
        html_escape::encode_safe_to_string(run, out);
    })))
}

fn dechtmlents(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(
        html_escape::decode_html_entities(&lossy_text(input)).into_owned(),
    ))
}

fn encxmlents(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(escape_markup(
        &lossy_text(input),
        escape_xml_ascii,
    )))
}

fn decxmlents(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(unescape_xml(&lossy_text(input))))
}

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("enchtmlents", "Encode HTML Entities", "HTML", enchtmlents),
        Descriptor::new("dechtmlents", "Decode HTML Entities", "HTML", dechtmlents),
        Descriptor::new("encxmlents", "Encode XML Entities", "XML", encxmlents),
        Descriptor::new("decxmlents", "Decode XML Entities", "XML", decxmlents),
    ]
}
