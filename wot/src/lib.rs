//! Constraint matching over expanded WoT Thing Descriptions.
//!
//! The `wot-affordances` crate answers "which things, properties and actions
//! match these semantics?" for a collection of W3C Web of Things Thing
//! Descriptions in expanded JSON-LD form. Callers describe what they need as
//! a partial [`ThingConstraint`]; every field left unset is a wildcard.
//!
//! # Entry Point
//!
//! ```
//! use wot_affordances::{processing, PreExpanded, ThingConstraint, ThingDescriptionSet};
//!
//! let expanded = br#"[{
//!     "@id": "urn:lamp",
//!     "@type": ["http://iotschema.org/BinarySwitchControl"],
//!     "https://www.w3.org/2019/wot/td#hasPropertyAffordance": [{ "@index": "on" }]
//! }]"#;
//! let thing = processing::from_bytes(expanded, &PreExpanded).unwrap();
//! let set: ThingDescriptionSet = [thing].into_iter().collect();
//!
//! let constraint = ThingConstraint {
//!     types: Some(vec!["http://iotschema.org/BinarySwitchControl".to_owned()]),
//!     ..ThingConstraint::default()
//! };
//! assert_eq!(set.property_affordances(&constraint).len(), 1);
//! ```
//!
//! # Compact Documents
//!
//! Thing Descriptions in their usual compact form are expanded by
//! [`JsonLdExpander`], which resolves the TD 1.0 context from a bundled copy.
//!
//! ```
//! use wot_affordances::{processing, JsonLdExpander};
//!
//! let compact = br#"{
//!     "@context": "https://www.w3.org/2019/wot/td/v1",
//!     "id": "urn:lamp",
//!     "name": "Lamp",
//!     "actions": { "toggle": { "safe": false } }
//! }"#;
//! let thing = processing::from_bytes(compact, &JsonLdExpander::new()).unwrap();
//! assert_eq!(thing.actions[0].index, "toggle");
//! ```
//!
//! # Compaction
//!
//! ```
//! use wot_affordances::{context, Context, ThingDescription};
//!
//! let ctx = Context::default().with_mapping(context::WOT).unwrap();
//! let compacted = ThingDescription::default().compact(&ctx).unwrap();
//! assert!(compacted["@context"]["wot"].is_string());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod constraint;
pub mod context;
pub mod error;
pub mod expansion;
pub mod matching;
pub mod model;
pub mod node;
pub mod processing;
pub mod set;

pub use constraint::{
    ActionConstraint, DataPropertyConstraint, InputConstraint, PropertyConstraint,
    ThingConstraint,
};
pub use context::{Context, SchemaMapping};
pub use error::{Error, Result};
pub use expansion::{DocumentLoader, JsonLdExpander, StaticLoader};
pub use matching::{all_types_contained, Fulfills};
pub use model::{
    ActionAffordance, DataProperty, DataSchema, Form, PropertyAffordance, ThingDescription,
};
pub use node::{BooleanNode, BooleanValue, IdNode, IdValue, Node, StringNode, StringValue, Zero};
pub use processing::{Expander, PreExpanded};
pub use set::ThingDescriptionSet;
