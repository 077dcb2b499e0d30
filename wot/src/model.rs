//! Expanded Thing Description model.
//!
//! These types mirror the output of JSON-LD expansion for the subset of the
//! WoT Thing Description vocabulary the matching engine understands. Every
//! field is keyed on its absolute IRI (see [`iris`]); unknown keys are
//! ignored on decode and empty fields are omitted on encode.

use serde::{Deserialize, Serialize};

use crate::node::{BooleanNode, IdNode, Node, StringNode, Zero};

/// A Thing Description in expanded form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThingDescription {
    /// Identifier of the thing (`@id`).
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Semantic types (`@type`).
    #[serde(rename = "@type", skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// `td:name`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#name",
        skip_serializing_if = "Node::is_empty"
    )]
    pub name: StringNode,
    /// `td:hasActionAffordance`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#hasActionAffordance",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub actions: Vec<ActionAffordance>,
    /// `td:hasPropertyAffordance`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#hasPropertyAffordance",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<PropertyAffordance>,
}

/// An action exposed by a thing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionAffordance {
    /// Name of the action inside its thing (`@index`).
    #[serde(rename = "@index", skip_serializing_if = "String::is_empty")]
    pub index: String,
    /// Semantic types (`@type`).
    #[serde(rename = "@type", skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// `td:hasForm`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#hasForm",
        skip_serializing_if = "Node::is_empty"
    )]
    pub form: Node<Form>,
    /// `td:hasInputSchema`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#hasInputSchema",
        skip_serializing_if = "Node::is_empty"
    )]
    pub input: Node<DataSchema>,
    /// `td:isIdempotent`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#isIdempotent",
        skip_serializing_if = "Node::is_empty"
    )]
    pub is_idempotent: BooleanNode,
    /// `td:isSafe`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#isSafe",
        skip_serializing_if = "Node::is_empty"
    )]
    pub is_safe: BooleanNode,
}

/// A property exposed by a thing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyAffordance {
    /// Name of the property inside its thing (`@index`).
    #[serde(rename = "@index", skip_serializing_if = "String::is_empty")]
    pub index: String,
    /// Semantic types (`@type`).
    #[serde(rename = "@type", skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// JSON Schema data type (`rdf:type`, e.g. `jsonschema:ObjectSchema`).
    #[serde(
        rename = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
        skip_serializing_if = "Node::is_empty"
    )]
    pub data_type: IdNode,
    /// Nested schema members (`jsonschema:properties`).
    #[serde(
        rename = "https://www.w3.org/2019/wot/json-schema#properties",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<DataProperty>,
    /// `td:hasForm`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#hasForm",
        skip_serializing_if = "Node::is_empty"
    )]
    pub form: Node<Form>,
    /// `td:isObservable`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/td#isObservable",
        skip_serializing_if = "Node::is_empty"
    )]
    pub is_observable: BooleanNode,
}

/// A data schema, used as the input of an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSchema {
    /// JSON Schema data type.
    #[serde(
        rename = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
        skip_serializing_if = "Node::is_empty"
    )]
    pub data_type: IdNode,
    /// Nested schema members.
    #[serde(
        rename = "https://www.w3.org/2019/wot/json-schema#properties",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<DataProperty>,
}

/// A named member of a data schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataProperty {
    /// Member name (`@index`).
    #[serde(rename = "@index", skip_serializing_if = "String::is_empty")]
    pub index: String,
    /// Semantic types (`@type`).
    #[serde(rename = "@type", skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// JSON Schema data type.
    #[serde(
        rename = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
        skip_serializing_if = "Node::is_empty"
    )]
    pub data_type: IdNode,
}

/// Hypermedia binding of an affordance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    /// `hypermedia:forContentType`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/hypermedia#forContentType",
        skip_serializing_if = "Node::is_empty"
    )]
    pub content_type: StringNode,
    /// `hypermedia:hasOperationType`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/hypermedia#hasOperationType",
        skip_serializing_if = "Node::is_empty"
    )]
    pub operation: IdNode,
    /// `hypermedia:hasTarget`.
    #[serde(
        rename = "https://www.w3.org/2019/wot/hypermedia#hasTarget",
        skip_serializing_if = "Node::is_empty"
    )]
    pub href: IdNode,
}

impl Zero for Form {
    fn zero() -> &'static Self {
        static ZERO: Form = Form {
            content_type: Node::new(),
            operation: Node::new(),
            href: Node::new(),
        };
        &ZERO
    }
}

impl Zero for DataSchema {
    fn zero() -> &'static Self {
        static ZERO: DataSchema = DataSchema {
            data_type: Node::new(),
            properties: Vec::new(),
        };
        &ZERO
    }
}

impl ActionAffordance {
    /// The action's form (first-or-default).
    #[must_use]
    pub fn form(&self) -> &Form {
        self.form.first_or_default()
    }

    /// The action's input schema (first-or-default).
    #[must_use]
    pub fn input(&self) -> &DataSchema {
        self.input.first_or_default()
    }
}

impl PropertyAffordance {
    /// The property's form (first-or-default).
    #[must_use]
    pub fn form(&self) -> &Form {
        self.form.first_or_default()
    }
}

/// Vocabulary IRIs the expanded model is keyed on.
pub mod iris {
    /// WoT Thing Description namespace.
    pub const TD: &str = "https://www.w3.org/2019/wot/td#";
    /// WoT hypermedia controls namespace.
    pub const HYPERMEDIA: &str = "https://www.w3.org/2019/wot/hypermedia#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// WoT JSON Schema namespace.
    pub const JSON_SCHEMA: &str = "https://www.w3.org/2019/wot/json-schema#";

    /// `td:name`.
    pub const TD_NAME: &str = "https://www.w3.org/2019/wot/td#name";
    /// `td:hasActionAffordance`.
    pub const TD_HAS_ACTION_AFFORDANCE: &str =
        "https://www.w3.org/2019/wot/td#hasActionAffordance";
    /// `td:hasPropertyAffordance`.
    pub const TD_HAS_PROPERTY_AFFORDANCE: &str =
        "https://www.w3.org/2019/wot/td#hasPropertyAffordance";
    /// `td:hasForm`.
    pub const TD_HAS_FORM: &str = "https://www.w3.org/2019/wot/td#hasForm";
    /// `td:hasInputSchema`.
    pub const TD_HAS_INPUT_SCHEMA: &str = "https://www.w3.org/2019/wot/td#hasInputSchema";
    /// `td:isIdempotent`.
    pub const TD_IS_IDEMPOTENT: &str = "https://www.w3.org/2019/wot/td#isIdempotent";
    /// `td:isSafe`.
    pub const TD_IS_SAFE: &str = "https://www.w3.org/2019/wot/td#isSafe";
    /// `td:isObservable`.
    pub const TD_IS_OBSERVABLE: &str = "https://www.w3.org/2019/wot/td#isObservable";
    /// `rdf:type`, used by the TD context for JSON Schema data types.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `jsonschema:properties`.
    pub const JSON_SCHEMA_PROPERTIES: &str = "https://www.w3.org/2019/wot/json-schema#properties";
    /// `hypermedia:forContentType`.
    pub const HCTL_FOR_CONTENT_TYPE: &str =
        "https://www.w3.org/2019/wot/hypermedia#forContentType";
    /// `hypermedia:hasOperationType`.
    pub const HCTL_HAS_OPERATION_TYPE: &str =
        "https://www.w3.org/2019/wot/hypermedia#hasOperationType";
    /// `hypermedia:hasTarget`.
    pub const HCTL_HAS_TARGET: &str = "https://www.w3.org/2019/wot/hypermedia#hasTarget";

    /// `jsonschema:ObjectSchema`.
    pub const JSON_SCHEMA_OBJECT: &str = "https://www.w3.org/2019/wot/json-schema#ObjectSchema";
    /// `jsonschema:BooleanSchema`.
    pub const JSON_SCHEMA_BOOLEAN: &str = "https://www.w3.org/2019/wot/json-schema#BooleanSchema";
    /// `jsonschema:IntegerSchema`.
    pub const JSON_SCHEMA_INTEGER: &str = "https://www.w3.org/2019/wot/json-schema#IntegerSchema";
    /// `jsonschema:NumberSchema`.
    pub const JSON_SCHEMA_NUMBER: &str = "https://www.w3.org/2019/wot/json-schema#NumberSchema";
    /// `jsonschema:StringSchema`.
    pub const JSON_SCHEMA_STRING: &str = "https://www.w3.org/2019/wot/json-schema#StringSchema";
}
