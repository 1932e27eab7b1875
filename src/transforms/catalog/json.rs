use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json_path::JsonPath;

use crate::transforms::{Descriptor, OptionSchema, Options, Output, TransformError};

fn parse(input: &[u8]) -> Result<Value, TransformError> {
    Ok(serde_json::from_slice(input)?)
}

fn prettifyjson(input: &[u8], options: &Options) -> Result<Output, TransformError> {
    let value = parse(input)?;
    let width = options.int("indent")? as usize;
    if width == 0 {
        return Ok(Output::Text(serde_json::to_string(&value)?));
    }

    let indent = " ".repeat(width);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(Output::Bytes(out))
}

fn uglifyjson(input: &[u8], _: &Options) -> Result<Output, TransformError> {
    Ok(Output::Text(serde_json::to_string(&parse(input)?)?))
}

/// First node matched by `path`. Strings come out raw, `null` and no match
/// as nothing.
fn jsonpath(input: &[u8], options: &Options) -> Result<Output, TransformError> {
    let path = JsonPath::parse(options.str("path")?)
        .map_err(|e| TransformError::JsonPath(e.to_string()))?;
    let value = parse(input)?;

    let text = match path.query(&value).first() {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(node) => serde_json::to_string(node)?,
    };
    Ok(Output::Text(text))
}

pub(super) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::new("prettifyjson", "Prettify JSON", "JSON", prettifyjson)
            .with_aliases(&["prettyjson"])
            .with_option(
                "indent",
                OptionSchema::Range {
                    min: 0,
                    max: 8,
                    default: 1,
                },
            ),
        Descriptor::new("uglifyjson", "Uglify JSON", "JSON", uglifyjson)
            .with_aliases(&["minifyjson"]),
        Descriptor::new("jsonpath", "Extract JSON Path", "JSON", jsonpath)
            .with_option("path", OptionSchema::String { default: "$" }),
    ]
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::transforms::{RawOptions, TransformError, run};

    fn path(p: &str) -> RawOptions {
        RawOptions::from([("path".to_string(), p.to_string())])
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_prettify_default_indent_keeps_key_order() {
        let out = run("prettifyjson", br#"{"b":1,"a":[true,null]}"#, &RawOptions::new()).unwrap();
        assert_eq!(
            text(out),
            "{\n \"b\": 1,\n \"a\": [\n  true,\n  null\n ]\n}"
        );
    }

    #[test]
    fn test_prettify_indent_option() {
        let indent = |n: &str| RawOptions::from([("indent".to_string(), n.to_string())]);
        let out = run("prettifyjson", br#"{"a":1}"#, &indent("4")).unwrap();
        assert_eq!(text(out), "{\n    \"a\": 1\n}");
        let out = run("prettifyjson", br#"{ "a" : 1 }"#, &indent("0")).unwrap();
        assert_eq!(text(out), r#"{"a":1}"#);
    }

    #[test]
    fn test_prettify_invalid_json_reports_parser_message() {
        let err = run("prettifyjson", b"not valid json", &RawOptions::new()).unwrap_err();
        match err {
            Error::Transform {
                cause: TransformError::Json(cause),
                ..
            } => assert!(cause.to_string().contains("expected"), "{}", cause),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_uglify() {
        let out = run("uglifyjson", b"{ \"a\" : [ 1, 2 ],\n \"b\": \"x\" }\n", &RawOptions::new()).unwrap();
        assert_eq!(text(out), r#"{"a":[1,2],"b":"x"}"#);
    }

    #[test]
    fn test_jsonpath_scalar() {
        let out = run("jsonpath", br#"{"a":{"b":1}}"#, &path("$.a.b")).unwrap();
        assert_eq!(text(out), "1");
    }

    #[test]
    fn test_jsonpath_string_is_raw() {
        let out = run("jsonpath", br#"{"name":"transform"}"#, &path("$.name")).unwrap();
        assert_eq!(text(out), "transform");
    }

    #[test]
    fn test_jsonpath_default_returns_document() {
        let out = run("jsonpath", br#"{"a": [1, 2]}"#, &RawOptions::new()).unwrap();
        assert_eq!(text(out), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_jsonpath_no_match_or_null_is_empty() {
        assert!(run("jsonpath", br#"{"a":1}"#, &path("$.missing")).unwrap().is_empty());
        assert!(run("jsonpath", br#"{"a":null}"#, &path("$.a")).unwrap().is_empty());
    }

    #[test]
    fn test_jsonpath_bad_path() {
        let err = run("jsonpath", br#"{"a":1}"#, &path("a.b[")).unwrap_err();
        assert!(matches!(
            err,
            Error::Transform {
                cause: TransformError::JsonPath(_),
                ..
            }
        ));
    }
}
