//! Prefix-to-IRI context used when compacting expanded documents.
//!
//! A [`Context`] is an immutable value. Registering a prefix returns a new
//! context and never changes one that is already in use, so compaction calls
//! can share a context across threads without synchronization. Rebinding an
//! existing prefix to a different IRI is rejected because it would silently
//! change the meaning of previously compacted output.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::iris;

/// A prefix together with the namespace IRI it abbreviates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaMapping {
    /// Short prefix, e.g. `"wot"`.
    pub prefix: &'static str,
    /// Namespace IRI, e.g. `"https://www.w3.org/2019/wot/td#"`.
    pub iri: &'static str,
}

impl SchemaMapping {
    /// Builds the absolute IRI of `local` inside this namespace.
    ///
    /// `WOT.iri("PropertyAffordance")` yields
    /// `"https://www.w3.org/2019/wot/td#PropertyAffordance"`.
    #[must_use]
    pub fn iri(&self, local: &str) -> String {
        format!("{}{local}", self.iri)
    }
}

/// WoT Thing Description vocabulary.
pub const WOT: SchemaMapping = SchemaMapping {
    prefix: "wot",
    iri: iris::TD,
};

/// WoT hypermedia controls vocabulary.
pub const HYPERMEDIA: SchemaMapping = SchemaMapping {
    prefix: "hypermedia",
    iri: iris::HYPERMEDIA,
};

/// RDF syntax vocabulary.
pub const RDF_TYPE: SchemaMapping = SchemaMapping {
    prefix: "rdftype",
    iri: iris::RDF,
};

/// WoT JSON Schema vocabulary.
pub const JSON_SCHEMA: SchemaMapping = SchemaMapping {
    prefix: "jsonschema",
    iri: iris::JSON_SCHEMA,
};

/// Mappings every [`Context`] starts with.
pub const BUILTIN_MAPPINGS: [SchemaMapping; 4] = [WOT, HYPERMEDIA, RDF_TYPE, JSON_SCHEMA];

/// An immutable prefix registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    prefixes: BTreeMap<String, String>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            prefixes: BUILTIN_MAPPINGS
                .iter()
                .map(|m| (m.prefix.to_owned(), m.iri.to_owned()))
                .collect(),
        }
    }
}

impl Context {
    /// Returns a copy of this context that also maps `mapping.prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if the prefix is empty, contains `:`
    /// or starts with `@`, or if the IRI is empty. Returns
    /// [`Error::PrefixConflict`] if the prefix is already bound to another IRI.
    pub fn with_mapping(&self, mapping: SchemaMapping) -> Result<Self> {
        self.with_prefix(mapping.prefix, mapping.iri)
    }

    /// Like [`Context::with_mapping`] for prefixes only known at runtime.
    ///
    /// # Errors
    ///
    /// Same as [`Context::with_mapping`].
    pub fn with_prefix(&self, prefix: &str, iri: &str) -> Result<Self> {
        validate(prefix, iri)?;
        match self.prefixes.get(prefix) {
            Some(existing) if existing == iri => Ok(self.clone()),
            Some(existing) => Err(Error::PrefixConflict {
                prefix: prefix.to_owned(),
                existing: existing.clone(),
                requested: iri.to_owned(),
            }),
            None => {
                let mut next = self.clone();
                next.prefixes.insert(prefix.to_owned(), iri.to_owned());
                Ok(next)
            }
        }
    }

    /// The IRI bound to `prefix`, if any.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Iterates `(prefix, iri)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns `true` if no prefix is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Renders the `@context` object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut ctx = Map::new();
        for (prefix, iri) in &self.prefixes {
            ctx.insert(prefix.clone(), Value::String(iri.clone()));
        }
        Value::Object(ctx)
    }

    /// Shortens `iri` to `prefix:local` using the longest matching namespace.
    ///
    /// IRIs outside every registered namespace, and IRIs equal to a namespace
    /// itself, are returned unchanged.
    #[must_use]
    pub fn compact_iri(&self, iri: &str) -> String {
        self.prefixes
            .iter()
            .filter_map(|(prefix, ns)| {
                iri.strip_prefix(ns.as_str())
                    .filter(|local| !local.is_empty())
                    .map(|local| (ns.len(), prefix, local))
            })
            .max_by_key(|(len, _, _)| *len)
            .map_or_else(|| iri.to_owned(), |(_, prefix, local)| format!("{prefix}:{local}"))
    }
}

fn validate(prefix: &str, iri: &str) -> Result<()> {
    let reason = if prefix.is_empty() {
        Some("prefix must not be empty")
    } else if prefix.contains(':') {
        Some("prefix must not contain ':'")
    } else if prefix.starts_with('@') {
        Some("prefix must not start with '@'")
    } else if iri.is_empty() {
        Some("IRI must not be empty")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(Error::InvalidPrefix {
            prefix: prefix.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}
