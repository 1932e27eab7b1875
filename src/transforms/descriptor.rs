use std::fmt;

use super::options::OptionSchema;
use super::Transform;

/// Metadata and implementation for one catalog entry.
pub struct Descriptor {
    /// Unique, case-sensitive lookup key and CLI sub-command token
    pub name: String,
    /// Human-readable label
    pub title: String,
    /// Display category; no behavioral effect
    pub group: &'static str,
    /// Additional exact-match lookup names
    pub aliases: &'static [&'static str],
    /// Declared options, in display order
    pub options: Vec<(&'static str, OptionSchema)>,
    pub transform: Box<dyn Transform>,
}

impl Descriptor {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        group: &'static str,
        transform: impl Transform + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            group,
            aliases: &[],
            options: Vec::new(),
            transform: Box::new(transform),
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_option(mut self, name: &'static str, schema: OptionSchema) -> Self {
        self.options.push((name, schema));
        self
    }

    /// Schema for a declared option.
    pub fn option(&self, name: &str) -> Option<&OptionSchema> {
        self.options
            .iter()
            .find(|(option, _)| *option == name)
            .map(|(_, schema)| schema)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("group", &self.group)
            .field("aliases", &self.aliases)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
