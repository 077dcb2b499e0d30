//! Turning raw documents into the expanded model and back.
//!
//! JSON-LD expansion is delegated to an [`Expander`].
//! [`JsonLdExpander`](crate::expansion::JsonLdExpander) expands compact
//! documents against bundled contexts; [`PreExpanded`] accepts documents an
//! upstream processor already expanded and refuses everything else.
//!
//! Compaction is done natively: for a context made only of prefix
//! definitions it reduces to IRI shortening plus collapsing of value objects
//! and single-element arrays.

use std::io::Read;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::model::{ActionAffordance, PropertyAffordance, ThingDescription};

/// A JSON-LD expansion processor.
pub trait Expander {
    /// Expands `document` into a list of node objects.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::Expansion`] when the document cannot
    /// be expanded.
    fn expand(&self, document: &Value) -> Result<Vec<Value>>;
}

/// Accepts documents that are already in expanded form.
///
/// A single node object or an array of node objects passes through
/// unchanged. Compact documents (anything carrying `@context`) are refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreExpanded;

impl Expander for PreExpanded {
    fn expand(&self, document: &Value) -> Result<Vec<Value>> {
        let nodes = match document {
            Value::Array(items) => items.clone(),
            Value::Object(_) => vec![document.clone()],
            _ => {
                return Err(Error::Expansion(
                    "expected a node object or an array of node objects".to_owned(),
                ))
            }
        };
        for node in &nodes {
            match node {
                Value::Object(map) if map.contains_key("@context") => {
                    return Err(Error::Expansion(
                        "document carries @context and is not expanded".to_owned(),
                    ))
                }
                Value::Object(_) => {}
                _ => {
                    return Err(Error::Expansion(
                        "expanded document contains a non-object node".to_owned(),
                    ))
                }
            }
        }
        Ok(nodes)
    }
}

/// Parses, expands and decodes the first Thing Description in `bytes`.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed input, any error of the expander,
/// [`Error::EmptyExpansion`] when no node is produced and [`Error::Decode`]
/// when the node does not fit the model.
pub fn from_bytes<E: Expander + ?Sized>(bytes: &[u8], expander: &E) -> Result<ThingDescription> {
    let document: Value = serde_json::from_slice(bytes)?;
    from_value(&document, expander)
}

/// Like [`from_bytes`], reading the document from `reader`.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`from_bytes`].
pub fn from_reader<R: Read, E: Expander + ?Sized>(
    mut reader: R,
    expander: &E,
) -> Result<ThingDescription> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_bytes(&bytes, expander)
}

/// Expands `document` and decodes its first node.
///
/// # Errors
///
/// See [`from_bytes`].
pub fn from_value<E: Expander + ?Sized>(
    document: &Value,
    expander: &E,
) -> Result<ThingDescription> {
    let nodes = expander.expand(document)?;
    if nodes.len() > 1 {
        debug!(
            "expansion yielded {} nodes, decoding the first one only",
            nodes.len()
        );
    }
    let first = nodes.into_iter().next().ok_or(Error::EmptyExpansion)?;
    from_expanded(first)
}

/// Decodes a single expanded node object.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the node does not fit the model.
pub fn from_expanded(node: Value) -> Result<ThingDescription> {
    let thing: ThingDescription = serde_json::from_value(node).map_err(Error::Decode)?;
    debug!(
        "decoded thing {} ({} properties, {} actions)",
        thing.id,
        thing.properties.len(),
        thing.actions.len()
    );
    Ok(thing)
}

/// Expands `document` and decodes every node it yields.
///
/// # Errors
///
/// Fails on the first node that cannot be decoded; no partial result is
/// returned.
pub fn things_from_expanded<E: Expander + ?Sized>(
    document: &Value,
    expander: &E,
) -> Result<Vec<ThingDescription>> {
    expander
        .expand(document)?
        .into_iter()
        .map(from_expanded)
        .collect()
}

/// Compacts any expanded entity with `context`.
///
/// # Errors
///
/// Returns [`Error::Json`] if `expanded` cannot be represented as JSON.
pub fn compact<T: Serialize + ?Sized>(expanded: &T, context: &Context) -> Result<Value> {
    let value = serde_json::to_value(expanded)?;
    let compacted = compact_value(&value, context);
    let mut document = Map::new();
    document.insert("@context".to_owned(), context.to_json());
    match compacted {
        Value::Object(map) => document.extend(map),
        Value::Array(items) => {
            document.insert("@graph".to_owned(), Value::Array(items));
        }
        other => {
            document.insert("@graph".to_owned(), Value::Array(vec![other]));
        }
    }
    Ok(Value::Object(document))
}

fn compact_value(value: &Value, context: &Context) -> Value {
    match value {
        Value::Array(items) => {
            let mut compacted: Vec<Value> =
                items.iter().map(|item| compact_value(item, context)).collect();
            if compacted.len() == 1 {
                compacted.remove(0)
            } else {
                Value::Array(compacted)
            }
        }
        Value::Object(map) => {
            if let (Some(literal), 1) = (map.get("@value"), map.len()) {
                return literal.clone();
            }
            let mut out = Map::new();
            for (key, member) in map {
                let compacted = match key.as_str() {
                    "@id" | "@type" => compact_iris(member, context),
                    "@index" | "@value" | "@language" => member.clone(),
                    _ => compact_value(member, context),
                };
                let key = if key.starts_with('@') {
                    key.clone()
                } else {
                    context.compact_iri(key)
                };
                out.insert(key, compacted);
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

fn compact_iris(value: &Value, context: &Context) -> Value {
    match value {
        Value::String(iri) => Value::String(context.compact_iri(iri)),
        Value::Array(items) if items.len() == 1 => compact_iris(&items[0], context),
        Value::Array(items) => items.iter().map(|item| compact_iris(item, context)).collect(),
        other => other.clone(),
    }
}

impl ThingDescription {
    /// Compacts this thing with `context`.
    ///
    /// # Errors
    ///
    /// See [`compact`].
    pub fn compact(&self, context: &Context) -> Result<Value> {
        compact(self, context)
    }
}

impl PropertyAffordance {
    /// Compacts this property affordance with `context`.
    ///
    /// # Errors
    ///
    /// See [`compact`].
    pub fn compact(&self, context: &Context) -> Result<Value> {
        compact(self, context)
    }
}

impl ActionAffordance {
    /// Compacts this action affordance with `context`.
    ///
    /// # Errors
    ///
    /// See [`compact`].
    pub fn compact(&self, context: &Context) -> Result<Value> {
        compact(self, context)
    }
}
