use std::io::{self, Write};

use transform_d::error::Error;
use transform_d::{TransformRegistry, TransformSummary};

use crate::cli::args::ShowArgs;

/// Catalog rows in enumeration order, optionally limited to one group.
fn rows<'a>(registry: &'a TransformRegistry, group: Option<&str>) -> Vec<TransformSummary<'a>> {
    registry
        .enumerate()
        .filter(|row| group.is_none_or(|g| row.group.eq_ignore_ascii_case(g)))
        .collect()
}

pub fn handle(args: ShowArgs) -> Result<(), Error> {
    let registry = TransformRegistry::global();
    let rows = rows(registry, args.group.as_deref());

    if rows.is_empty()
        && let Some(group) = &args.group
    {
        log::warn!(
            "no transforms in group '{}'; groups are: {}",
            group,
            registry.groups().join(", ")
        );
    }

    let mut out = io::stdout().lock();

    if args.json {
        let json = serde_json::to_string_pretty(&rows).map_err(io::Error::from)?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let title_width = rows.iter().map(|r| r.title.len()).max().unwrap_or(0);
    for row in &rows {
        writeln!(
            out,
            "{:<name_width$}  {:<title_width$}  {}",
            row.name, row.title, row.group
        )?;
    }
    Ok(())
}
