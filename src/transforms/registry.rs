use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error as ThisError;

use super::catalog;
use super::descriptor::Descriptor;
use crate::encoders::algorithms::find_closest_name;
use crate::error::Error;

/// One row of the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformSummary<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub group: &'a str,
}

/// Why a descriptor could not be added to a registry.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum RegistrationError {
    #[error("name '{name}' of transform '{transform}' is already registered")]
    DuplicateName { name: String, transform: String },
}

/// Ordered catalog of transforms with exact-name lookup.
///
/// Entries keep their registration order for listing. Names and aliases
/// share one lookup index and must all be distinct.
#[derive(Debug, Default)]
pub struct TransformRegistry {
    entries: Vec<Descriptor>,
    index: HashMap<String, usize>,
}

static GLOBAL: LazyLock<TransformRegistry> = LazyLock::new(TransformRegistry::builtin);

impl TransformRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the built-in catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for descriptor in catalog::builtin_descriptors() {
            // The catalog is fixed; a collision here is a bug in catalog/.
            if let Err(e) = registry.register(descriptor) {
                panic!("built-in transform catalog is inconsistent: {}", e);
            }
        }
        log::debug!("built transform catalog with {} entries", registry.len());
        registry
    }

    /// The process-wide catalog, built on first use and never mutated.
    pub fn global() -> &'static TransformRegistry {
        &GLOBAL
    }

    /// Appends a descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if its name or any alias is already taken.
    pub fn register(&mut self, descriptor: Descriptor) -> Result<(), RegistrationError> {
        let keys: Vec<&str> = std::iter::once(descriptor.name.as_str())
            .chain(descriptor.aliases.iter().copied())
            .collect();

        for (i, key) in keys.iter().enumerate() {
            if self.index.contains_key(*key) || keys[..i].contains(key) {
                return Err(RegistrationError::DuplicateName {
                    name: key.to_string(),
                    transform: descriptor.name.clone(),
                });
            }
        }

        let position = self.entries.len();
        for key in keys {
            self.index.insert(key.to_string(), position);
        }
        self.entries.push(descriptor);
        Ok(())
    }

    /// Exact-match lookup by name or registered alias.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Exact-match lookup, with a spelling suggestion on failure.
    pub fn lookup(&self, name: &str) -> Result<&Descriptor, Error> {
        self.get(name).ok_or_else(|| Error::UnrecognizedTransform {
            name: name.to_string(),
            suggestion: find_closest_name(name, self.entries.iter().map(|d| d.name.as_str())),
        })
    }

    /// `(name, title, group)` for every entry, in registration order.
    pub fn enumerate(&self) -> impl Iterator<Item = TransformSummary<'_>> {
        self.entries.iter().map(|d| TransformSummary {
            name: &d.name,
            title: &d.title,
            group: d.group,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.entries.iter()
    }

    /// Distinct groups in first-appearance order.
    pub fn groups(&self) -> Vec<&'static str> {
        let mut groups: Vec<&'static str> = Vec::new();
        for d in &self.entries {
            if !groups.contains(&d.group) {
                groups.push(d.group);
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
