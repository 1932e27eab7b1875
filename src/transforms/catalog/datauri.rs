use crate::core::alphabets;
use crate::encoders::chunked;
use crate::transforms::{Descriptor, OptionSchema, Options, Output, TransformError};

use super::base::decode_base64_lenient;
use super::url::{decode_uri_component, encode_uri_component};
use super::{encoded_text, lossy_text};

fn encdatauri(input: &[u8], options: &Options) -> Result<Output, TransformError> {
    let mimetype = options.str("mimetype")?;
    let (suffix, data) = if options.bool("base64")? {
        (";base64", chunked::encode_chunked(input, alphabets::base64()))
    } else {
        ("", lossy_text(input).into_owned())
    };

    Ok(Output::Text(format!(
        "data:{}{},{}",
        mimetype,
        suffix,
        encode_uri_component(&data)
    )))
}

fn decdatauri(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    let text = encoded_text(input);
    let (header, payload) = text.split_once(',').ok_or(TransformError::InvalidDataUri)?;
    let data = decode_uri_component(payload)?;

    if header.to_ascii_lowercase().contains(";base64") {
        Ok(Output::Bytes(decode_base64_lenient(&data)?))
    } else {
        Ok(Output::Text(data))
    }
}

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("encdatauri", "Encode Data URI", "Data URI", encdatauri)
            .with_option(
                "mimetype",
                OptionSchema::String {
                    default: "text/html",
                },
            )
            .with_option("base64", OptionSchema::Boolean { default: true }),
        Descriptor::new("decdatauri", "Decode Data URI", "Data URI", decdatauri),
    ]
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::transforms::{RawOptions, TransformError, run};

    fn raw(pairs: &[(&str, &str)]) -> RawOptions {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encdatauri_defaults() {
        let out = run("encdatauri", b"<b>hi</b>", &RawOptions::new()).unwrap();
        assert_eq!(out, b"data:text/html;base64,PGI%2BaGk8L2I%2B");
    }

    #[test]
    fn test_encdatauri_plain() {
        let options = raw(&[("mimetype", "text/plain"), ("base64", "false")]);
        let out = run("encdatauri", b"a b", &options).unwrap();
        assert_eq!(out, b"data:text/plain,a%20b");
    }

    #[test]
    fn test_decdatauri_roundtrip() {
        let input = [0u8, 1, 2, 250, 251, 252];
        let uri = run("encdatauri", &input, &RawOptions::new()).unwrap();
        assert_eq!(run("decdatauri", &uri, &RawOptions::new()).unwrap(), input);
    }

    #[test]
    fn test_decdatauri_header_case_insensitive() {
        let out = run("decdatauri", b"data:text/plain;BASE64,aGk=\n", &RawOptions::new()).unwrap();
        assert_eq!(out, b"hi");
        let out = run("decdatauri", b"data:,a%20b", &RawOptions::new()).unwrap();
        assert_eq!(out, b"a b");
    }

    #[test]
    fn test_decdatauri_wrapped_payload() {
        let out = run("decdatauri", b"data:;base64,aGVs\nbG8=\n", &RawOptions::new()).unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_decdatauri_without_separator() {
        let err = run("decdatauri", b"data:text/plain", &RawOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::Transform {
                cause: TransformError::InvalidDataUri,
                ..
            }
        ));
    }
}
