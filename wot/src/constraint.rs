//! Partial matching criteria.
//!
//! Every constraint mirrors one document entity field by field, and every
//! field is optional: `None` leaves the field unconstrained. There is no way
//! to demand that a field be absent. `Default` therefore yields the universal
//! wildcard for each constraint type.
//!
//! Constraints are serde-enabled so they can be supplied as JSON, e.g.
//!
//! ```json
//! {
//!   "type": ["http://iotschema.org/BinarySwitchControl"],
//!   "property": {
//!     "type": ["http://iotschema.org/SwitchStatus"],
//!     "dataProperty": { "type": ["http://iotschema.org/StatusData"] }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Criteria for a whole Thing Description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThingConstraint {
    /// Required thing identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Semantic types the thing must carry (subset check).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Required thing name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// At least one property affordance must satisfy this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertyConstraint>,
    /// At least one action affordance must satisfy this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionConstraint>,
}

/// Criteria for a property affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PropertyConstraint {
    /// Required property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Semantic types the property must carry.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Required data type IRI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Required observability flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_observable: Option<bool>,
    /// At least one nested data property must satisfy this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_property: Option<DataPropertyConstraint>,
}

/// Criteria for an action affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ActionConstraint {
    /// Required action name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Semantic types the action must carry.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Required idempotency flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_idempotent: Option<bool>,
    /// Required safety flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_safe: Option<bool>,
    /// The action's input schema must satisfy this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputConstraint>,
}

/// Criteria for the input schema of an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct InputConstraint {
    /// Required data type IRI of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// At least one schema member must satisfy this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_property: Option<DataPropertyConstraint>,
}

/// Criteria for a data schema member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct DataPropertyConstraint {
    /// Required member name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Semantic types the member must carry.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Required data type IRI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl ThingConstraint {
    /// Copy of this constraint with the property criteria removed.
    #[must_use]
    pub fn without_property(&self) -> Self {
        Self {
            property: None,
            ..self.clone()
        }
    }

    /// Copy of this constraint with the action criteria removed.
    #[must_use]
    pub fn without_action(&self) -> Self {
        Self {
            action: None,
            ..self.clone()
        }
    }
}
