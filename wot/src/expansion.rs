//! JSON-LD expansion of Thing Descriptions without network access.
//!
//! [`JsonLdExpander`] implements the JSON-LD 1.1 expansion algorithm for the
//! context features Thing Descriptions use: prefixes and term definitions,
//! `@vocab`, keyword aliases, `@type` coercion to `@id` / `@vocab` /
//! datatypes, `@index` and `@set` containers and property-scoped contexts.
//! Remote contexts are resolved through a [`DocumentLoader`]; the default
//! [`StaticLoader`] serves the WoT TD 1.0 context from a copy compiled into
//! the crate and refuses everything else.
//!
//! Features outside that set (`@reverse`, `@nest`, `@included`, `@import`,
//! `@list` and language containers) are reported as [`Error::Expansion`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::processing::Expander;

/// IRI under which the WoT Thing Description 1.0 context is published.
pub const TD_V1_CONTEXT_IRI: &str = "https://www.w3.org/2019/wot/td/v1";

/// The bundled TD 1.0 context document.
pub const TD_V1_CONTEXT: &str = include_str!("contexts/td-v1.jsonld");

const KEYWORDS: [&str; 23] = [
    "@base",
    "@container",
    "@context",
    "@direction",
    "@graph",
    "@id",
    "@import",
    "@included",
    "@index",
    "@json",
    "@language",
    "@list",
    "@nest",
    "@none",
    "@prefix",
    "@propagate",
    "@protected",
    "@reverse",
    "@set",
    "@type",
    "@value",
    "@version",
    "@vocab",
];

fn is_keyword(value: &str) -> bool {
    KEYWORDS.contains(&value)
}

/// Resolves context IRIs to context documents.
pub trait DocumentLoader {
    /// Returns the document published at `iri`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextNotBundled`] for unknown IRIs and
    /// [`Error::Json`] if the document is not valid JSON.
    fn load(&self, iri: &str) -> Result<Value>;
}

/// A loader serving a fixed set of documents from memory.
///
/// [`StaticLoader::default`] knows the TD 1.0 context. Further documents are
/// registered with [`StaticLoader::with_document`].
#[derive(Debug, Clone)]
pub struct StaticLoader {
    documents: BTreeMap<String, Cow<'static, str>>,
}

impl StaticLoader {
    /// A loader without any document.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            documents: BTreeMap::new(),
        }
    }

    /// Returns this loader extended with `document` served at `iri`.
    #[must_use]
    pub fn with_document(
        mut self,
        iri: impl Into<String>,
        document: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.documents.insert(iri.into(), document.into());
        self
    }

    /// Returns `true` if a document is registered for `iri`.
    #[must_use]
    pub fn contains(&self, iri: &str) -> bool {
        self.documents.contains_key(iri)
    }
}

impl Default for StaticLoader {
    fn default() -> Self {
        Self::empty().with_document(TD_V1_CONTEXT_IRI, TD_V1_CONTEXT)
    }
}

impl DocumentLoader for StaticLoader {
    fn load(&self, iri: &str) -> Result<Value> {
        let text = self
            .documents
            .get(iri)
            .ok_or_else(|| Error::ContextNotBundled(iri.to_owned()))?;
        Ok(serde_json::from_str(text)?)
    }
}

/// Expands compact JSON-LD documents using contexts from a [`DocumentLoader`].
///
/// Already expanded input passes through unchanged, so the expander can be
/// used for both forms.
#[derive(Debug, Clone, Default)]
pub struct JsonLdExpander<L = StaticLoader> {
    loader: L,
}

impl JsonLdExpander {
    /// An expander backed by the bundled TD context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: DocumentLoader> JsonLdExpander<L> {
    /// An expander resolving remote contexts through `loader`.
    pub fn with_loader(loader: L) -> Self {
        Self { loader }
    }

    /// The loader used for remote contexts.
    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl<L: DocumentLoader> Expander for JsonLdExpander<L> {
    fn expand(&self, document: &Value) -> Result<Vec<Value>> {
        let mut run = Expansion {
            loader: &self.loader,
            loading: Vec::new(),
            cache: BTreeMap::new(),
        };
        let expanded = run.element(&ActiveContext::default(), None, document)?;
        let nodes = match expanded {
            Value::Object(mut map) if map.len() == 1 && map.contains_key("@graph") => {
                into_items(map.remove("@graph").unwrap_or(Value::Null))
            }
            other => into_items(other),
        };
        debug!(
            "expanded document into {} node objects ({} context documents loaded)",
            nodes.len(),
            run.cache.len()
        );
        Ok(nodes)
    }
}

#[derive(Debug, Clone, Default)]
struct Term {
    iri: String,
    coercion: Option<String>,
    index_container: bool,
    scoped: Option<Value>,
}

/// Term definitions in effect. A `None` entry is a term explicitly mapped to
/// null, which removes the key from the output.
#[derive(Debug, Clone, Default)]
struct ActiveContext {
    terms: BTreeMap<String, Option<Term>>,
    vocab: Option<String>,
}

impl ActiveContext {
    fn term(&self, key: &str) -> Option<&Term> {
        self.terms.get(key).and_then(Option::as_ref)
    }

    /// IRI expansion. `vocab` selects vocabulary-relative resolution, used
    /// for keys and types; `@id` values are document-relative and stay as
    /// written when not absolute.
    fn expand_iri(&self, value: &str, vocab: bool) -> Option<String> {
        if is_keyword(value) {
            return Some(value.to_owned());
        }
        if vocab {
            if let Some(entry) = self.terms.get(value) {
                return entry.as_ref().map(|t| t.iri.clone());
            }
        }
        if let Some((prefix, suffix)) = value.split_once(':') {
            if prefix == "_" || suffix.starts_with("//") {
                return Some(value.to_owned());
            }
            return match self.term(prefix) {
                Some(term) => Some(format!("{}{suffix}", term.iri)),
                None => Some(value.to_owned()),
            };
        }
        match (&self.vocab, vocab) {
            (Some(base), true) => Some(format!("{base}{value}")),
            _ => Some(value.to_owned()),
        }
    }
}

struct Expansion<'l, L: ?Sized> {
    loader: &'l L,
    loading: Vec<String>,
    cache: BTreeMap<String, Value>,
}

impl<L: DocumentLoader + ?Sized> Expansion<'_, L> {
    fn remote(&mut self, iri: &str) -> Result<Value> {
        if let Some(document) = self.cache.get(iri) {
            return Ok(document.clone());
        }
        let document = self.loader.load(iri)?;
        debug!("loaded context document {iri}");
        self.cache.insert(iri.to_owned(), document.clone());
        Ok(document)
    }

    fn context(&mut self, active: &ActiveContext, local: &Value) -> Result<ActiveContext> {
        let items = match local {
            Value::Array(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        let mut result = active.clone();
        for item in items {
            match item {
                Value::Null => result = ActiveContext::default(),
                Value::String(iri) => {
                    if self.loading.contains(iri) {
                        return Err(Error::Expansion(format!("context {iri} includes itself")));
                    }
                    let document = self.remote(iri)?;
                    let embedded = document.get("@context").ok_or_else(|| {
                        Error::Expansion(format!("{iri} has no @context member"))
                    })?;
                    self.loading.push(iri.clone());
                    let processed = self.context(&result, embedded);
                    self.loading.pop();
                    result = processed?;
                }
                Value::Object(map) => result = define_terms(result, map)?,
                _ => {
                    return Err(Error::Expansion(
                        "a local context must be an object, a string or null".to_owned(),
                    ))
                }
            }
        }
        Ok(result)
    }

    fn element(
        &mut self,
        active: &ActiveContext,
        property: Option<&str>,
        element: &Value,
    ) -> Result<Value> {
        match element {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => {
                let mut out = Vec::new();
                for item in items {
                    out.extend(into_items(self.element(active, property, item)?));
                }
                Ok(Value::Array(out))
            }
            Value::Object(map) => self.object(active, property, map),
            scalar => Ok(match property {
                // Free-floating scalars carry no information.
                None => Value::Null,
                Some(property) => expand_value(active, property, scalar),
            }),
        }
    }

    fn object(
        &mut self,
        active: &ActiveContext,
        property: Option<&str>,
        map: &Map<String, Value>,
    ) -> Result<Value> {
        let mut ctx = Cow::Borrowed(active);
        let scoped = property
            .and_then(|p| active.term(p))
            .and_then(|t| t.scoped.as_ref());
        if let Some(scoped) = scoped {
            ctx = Cow::Owned(self.context(active, scoped)?);
        }
        if let Some(local) = map.get("@context") {
            ctx = Cow::Owned(self.context(&ctx, local)?);
        }
        let is_value = map.contains_key("@value");

        let mut result = Map::new();
        for (key, value) in map {
            if key == "@context" {
                continue;
            }
            let Some(expanded) = ctx.expand_iri(key, true) else {
                continue;
            };
            if is_keyword(&expanded) {
                self.keyword(&ctx, property, &expanded, value, is_value, &mut result)?;
                continue;
            }
            if !expanded.contains(':') {
                continue;
            }
            let values = match ctx.term(key) {
                Some(term) if term.index_container && value.is_object() => {
                    self.index_map(&ctx, key, value)?
                }
                _ => self.element(&ctx, Some(key.as_str()), value)?,
            };
            if values.is_null() {
                continue;
            }
            if let Value::Array(existing) = result
                .entry(expanded)
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                existing.extend(into_items(values));
            }
        }

        if let Some(is_null) = result.get("@value").map(Value::is_null) {
            return Ok(if is_null {
                Value::Null
            } else {
                Value::Object(result)
            });
        }
        if result.contains_key("@set") {
            if result.len() > 1 {
                return Err(Error::Expansion(
                    "@set objects must not carry other members".to_owned(),
                ));
            }
            return Ok(result.remove("@set").unwrap_or(Value::Null));
        }
        let only_id = result.len() == 1 && result.contains_key("@id");
        if property.is_none() && (result.is_empty() || only_id) {
            return Ok(Value::Null);
        }
        Ok(Value::Object(result))
    }

    fn keyword(
        &mut self,
        ctx: &ActiveContext,
        property: Option<&str>,
        keyword: &str,
        value: &Value,
        is_value: bool,
        result: &mut Map<String, Value>,
    ) -> Result<()> {
        let expanded = match keyword {
            "@id" => {
                let id = value
                    .as_str()
                    .ok_or_else(|| Error::Expansion("@id must be a string".to_owned()))?;
                Value::String(ctx.expand_iri(id, false).unwrap_or_else(|| id.to_owned()))
            }
            "@type" => {
                let types = match value {
                    Value::String(t) => vec![t.as_str()],
                    Value::Array(items) => items
                        .iter()
                        .map(|item| {
                            item.as_str().ok_or_else(|| {
                                Error::Expansion("@type entries must be strings".to_owned())
                            })
                        })
                        .collect::<Result<Vec<_>>>()?,
                    _ => return Err(Error::Expansion("@type must be a string".to_owned())),
                };
                let mut iris = types.into_iter().filter_map(|t| ctx.expand_iri(t, true));
                if is_value {
                    iris.next().map_or(Value::Null, Value::String)
                } else {
                    Value::Array(iris.map(Value::String).collect())
                }
            }
            "@value" => {
                if value.is_object() || value.is_array() {
                    return Err(Error::Expansion("@value must be a scalar".to_owned()));
                }
                value.clone()
            }
            "@index" | "@language" | "@direction" => value.clone(),
            "@graph" => Value::Array(into_items(self.element(ctx, None, value)?)),
            "@set" => self.element(ctx, property, value)?,
            "@list" | "@reverse" | "@included" | "@nest" | "@json" => {
                return Err(Error::Expansion(format!("{keyword} is not supported")));
            }
            _ => return Ok(()),
        };
        result.insert(keyword.to_owned(), expanded);
        Ok(())
    }

    /// Expands an `@index` container map, tagging each node with its key.
    fn index_map(&mut self, ctx: &ActiveContext, property: &str, value: &Value) -> Result<Value> {
        let Value::Object(entries) = value else {
            return self.element(ctx, Some(property), value);
        };
        let mut out = Vec::new();
        for (index, item) in entries {
            for mut node in into_items(self.element(ctx, Some(property), item)?) {
                if let Value::Object(node) = &mut node {
                    node.entry("@index").or_insert_with(|| Value::String(index.clone()));
                }
                out.push(node);
            }
        }
        Ok(Value::Array(out))
    }
}

fn expand_value(ctx: &ActiveContext, property: &str, value: &Value) -> Value {
    let coercion = ctx.term(property).and_then(|t| t.coercion.as_deref());
    let mut object = Map::new();
    match (coercion, value) {
        (Some(kind @ ("@id" | "@vocab")), Value::String(id)) => {
            let iri = ctx.expand_iri(id, kind == "@vocab").unwrap_or_else(|| id.clone());
            object.insert("@id".to_owned(), Value::String(iri));
        }
        (Some(datatype), _) if !datatype.starts_with('@') => {
            object.insert("@value".to_owned(), value.clone());
            object.insert("@type".to_owned(), Value::String(datatype.to_owned()));
        }
        _ => {
            object.insert("@value".to_owned(), value.clone());
        }
    }
    Value::Object(object)
}

fn into_items(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn define_terms(mut active: ActiveContext, local: &Map<String, Value>) -> Result<ActiveContext> {
    if local.contains_key("@import") {
        return Err(Error::Expansion("@import is not supported".to_owned()));
    }
    if let Some(vocab) = local.get("@vocab") {
        active.vocab = match vocab {
            Value::Null => None,
            Value::String(vocab) => active.expand_iri(vocab, true),
            _ => return Err(Error::Expansion("@vocab must be a string".to_owned())),
        };
    }
    let mut defined = BTreeMap::new();
    for term in local.keys().filter(|k| !k.starts_with('@')) {
        create_term(&mut active, local, term, &mut defined)?;
    }
    Ok(active)
}

/// Defines `term` from `local`, first defining any term of the same local
/// context it depends on. `defined` holds `false` while a definition is in
/// progress so that cycles are detected.
fn create_term(
    active: &mut ActiveContext,
    local: &Map<String, Value>,
    term: &str,
    defined: &mut BTreeMap<String, bool>,
) -> Result<()> {
    match defined.get(term) {
        Some(true) => return Ok(()),
        Some(false) => {
            return Err(Error::Expansion(format!(
                "cyclic IRI mapping involving '{term}'"
            )))
        }
        None => {}
    }
    defined.insert(term.to_owned(), false);
    let entry = match local.get(term) {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(Term {
            iri: expand_in_context(active, local, id, defined)?,
            ..Term::default()
        }),
        Some(Value::Object(definition)) => {
            expanded_definition(active, local, term, definition, defined)?
        }
        Some(_) => {
            return Err(Error::Expansion(format!(
                "definition of '{term}' must be a string or an object"
            )))
        }
    };
    active.terms.insert(term.to_owned(), entry);
    defined.insert(term.to_owned(), true);
    Ok(())
}

fn expanded_definition(
    active: &mut ActiveContext,
    local: &Map<String, Value>,
    term: &str,
    definition: &Map<String, Value>,
    defined: &mut BTreeMap<String, bool>,
) -> Result<Option<Term>> {
    for unsupported in ["@reverse", "@nest"] {
        if definition.contains_key(unsupported) {
            return Err(Error::Expansion(format!(
                "term '{term}' uses {unsupported}, which is not supported"
            )));
        }
    }
    let iri = match definition.get("@id") {
        Some(Value::Null) => return Ok(None),
        Some(Value::String(id)) => expand_in_context(active, local, id, defined)?,
        Some(_) => return Err(Error::Expansion(format!("@id of '{term}' must be a string"))),
        None => match term.split_once(':') {
            Some((prefix, suffix)) => {
                if local.contains_key(prefix) {
                    create_term(active, local, prefix, defined)?;
                }
                match active.term(prefix) {
                    Some(p) => format!("{}{suffix}", p.iri),
                    None => term.to_owned(),
                }
            }
            None => match &active.vocab {
                Some(vocab) => format!("{vocab}{term}"),
                None => {
                    return Err(Error::Expansion(format!(
                        "term '{term}' has no IRI mapping"
                    )))
                }
            },
        },
    };
    let coercion = match definition.get("@type") {
        None => None,
        Some(Value::String(t)) if t == "@id" || t == "@vocab" => Some(t.clone()),
        Some(Value::String(t)) => Some(expand_in_context(active, local, t, defined)?),
        Some(_) => return Err(Error::Expansion(format!("@type of '{term}' must be a string"))),
    };
    let index_container = match definition.get("@container") {
        None | Some(Value::Null) => false,
        Some(container) => has_index_container(term, container)?,
    };
    Ok(Some(Term {
        iri,
        coercion,
        index_container,
        scoped: definition.get("@context").cloned(),
    }))
}

fn has_index_container(term: &str, container: &Value) -> Result<bool> {
    let kinds = match container {
        Value::String(kind) => vec![kind.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    let mut index = false;
    for kind in kinds {
        match kind {
            "@index" => index = true,
            "@set" => {}
            other => {
                return Err(Error::Expansion(format!(
                    "container {other} of '{term}' is not supported"
                )))
            }
        }
    }
    Ok(index)
}

/// IRI expansion while a local context is processed: terms of `local` the
/// value refers to are defined first.
fn expand_in_context(
    active: &mut ActiveContext,
    local: &Map<String, Value>,
    value: &str,
    defined: &mut BTreeMap<String, bool>,
) -> Result<String> {
    if is_keyword(value) {
        return Ok(value.to_owned());
    }
    if local.contains_key(value) {
        create_term(active, local, value, defined)?;
    }
    if let Some((prefix, _)) = value.split_once(':') {
        if local.contains_key(prefix) {
            create_term(active, local, prefix, defined)?;
        }
    }
    active
        .expand_iri(value, true)
        .ok_or_else(|| Error::Expansion(format!("'{value}' is mapped to null")))
}
