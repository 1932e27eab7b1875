use std::io::{self, Write};

use serde_json::{Map, Value, json};
use transform_d::error::Error;
use transform_d::{Descriptor, TransformRegistry};

use crate::cli::args::DescribeArgs;

fn to_json(descriptor: &Descriptor) -> Result<Value, serde_json::Error> {
    let mut options = Map::new();
    for (name, schema) in &descriptor.options {
        options.insert(name.to_string(), serde_json::to_value(schema)?);
    }

    Ok(json!({
        "name": descriptor.name,
        "title": descriptor.title,
        "group": descriptor.group,
        "aliases": descriptor.aliases,
        "options": options,
    }))
}

fn to_text(descriptor: &Descriptor) -> String {
    let mut lines = vec![
        format!("{} - {}", descriptor.name, descriptor.title),
        format!("  group:   {}", descriptor.group),
    ];
    if !descriptor.aliases.is_empty() {
        lines.push(format!("  aliases: {}", descriptor.aliases.join(", ")));
    }

    if descriptor.options.is_empty() {
        lines.push("  options: none".to_string());
    } else {
        lines.push("  options:".to_string());
        let width = descriptor
            .options
            .iter()
            .map(|(name, _)| name.len() + 2)
            .max()
            .unwrap_or(0);
        for (name, schema) in &descriptor.options {
            let flag = format!("--{}", name);
            lines.push(format!("    {:<width$}  {}", flag, schema.describe()));
        }
    }
    lines.join("\n")
}

pub fn handle(args: DescribeArgs) -> Result<(), Error> {
    let descriptor = TransformRegistry::global().lookup(&args.transform)?;
    let mut out = io::stdout().lock();

    if args.json {
        let json = to_json(descriptor)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .map_err(io::Error::from)?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "{}", to_text(descriptor))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> &'static Descriptor {
        TransformRegistry::global().lookup(name).unwrap()
    }

    #[test]
    fn test_text_lists_options() {
        let text = to_text(lookup("rot"));
        assert!(text.starts_with("rot - Rot\n  group:   Crypto\n  aliases: rot13"));
        assert!(text.contains("--shift  range 0..=26 (default: 13)"), "{}", text);
    }

    #[test]
    fn test_text_without_options() {
        assert!(to_text(lookup("md5")).ends_with("options: none"));
    }

    #[test]
    fn test_json_keeps_option_order() {
        let value = to_json(lookup("hexdump")).unwrap();
        let names: Vec<&String> = value["options"].as_object().unwrap().keys().collect();
        assert_eq!(names, ["width", "format", "caps"]);
        assert_eq!(value["options"]["format"]["type"], "select");
        assert_eq!(value["aliases"][0], "xxd");
    }
}
