//! Constraint evaluation.
//!
//! A constraint is fulfilled when every set scalar field equals the entity's
//! first-or-default value, every set type list is contained in the entity's
//! types, and every set nested constraint is fulfilled by at least one child.
//!
//! The one exception is an action's input: it is matched against the single
//! resolved input schema of the action, not existentially over a list.

use crate::constraint::{
    ActionConstraint, DataPropertyConstraint, InputConstraint, PropertyConstraint,
    ThingConstraint,
};
use crate::model::{
    ActionAffordance, DataProperty, DataSchema, PropertyAffordance, ThingDescription,
};

/// Boolean satisfaction of a constraint `C` by an entity.
pub trait Fulfills<C: ?Sized> {
    /// Returns `true` if `self` satisfies every criterion set in `constraint`.
    fn fulfills(&self, constraint: &C) -> bool;
}

/// Returns `true` iff every element of `required` occurs in `given`.
///
/// An empty `required` list is always contained. Order and duplicates are
/// irrelevant on both sides.
#[must_use]
pub fn all_types_contained<R, G>(required: &[R], given: &[G]) -> bool
where
    R: AsRef<str>,
    G: AsRef<str>,
{
    required
        .iter()
        .all(|r| given.iter().any(|g| g.as_ref() == r.as_ref()))
}

fn text_matches(expected: Option<&str>, actual: &str) -> bool {
    expected.map_or(true, |expected| expected == actual)
}

fn flag_matches(expected: Option<bool>, actual: bool) -> bool {
    expected.map_or(true, |expected| expected == actual)
}

fn types_match(required: Option<&[String]>, given: &[String]) -> bool {
    required.map_or(true, |required| all_types_contained(required, given))
}

impl Fulfills<ThingConstraint> for ThingDescription {
    fn fulfills(&self, c: &ThingConstraint) -> bool {
        text_matches(c.id.as_deref(), &self.id)
            && types_match(c.types.as_deref(), &self.types)
            && text_matches(c.name.as_deref(), self.name.value())
            && c
                .property
                .as_ref()
                .map_or(true, |pc| self.properties.iter().any(|p| p.fulfills(pc)))
            && c
                .action
                .as_ref()
                .map_or(true, |ac| self.actions.iter().any(|a| a.fulfills(ac)))
    }
}

impl Fulfills<PropertyConstraint> for PropertyAffordance {
    fn fulfills(&self, c: &PropertyConstraint) -> bool {
        text_matches(c.index.as_deref(), &self.index)
            && types_match(c.types.as_deref(), &self.types)
            && text_matches(c.data_type.as_deref(), self.data_type.value())
            && flag_matches(c.is_observable, self.is_observable.value())
            && c
                .data_property
                .as_ref()
                .map_or(true, |dc| self.properties.iter().any(|d| d.fulfills(dc)))
    }
}

impl Fulfills<ActionConstraint> for ActionAffordance {
    fn fulfills(&self, c: &ActionConstraint) -> bool {
        text_matches(c.index.as_deref(), &self.index)
            && types_match(c.types.as_deref(), &self.types)
            && flag_matches(c.is_idempotent, self.is_idempotent.value())
            && flag_matches(c.is_safe, self.is_safe.value())
            && c
                .input
                .as_ref()
                .map_or(true, |ic| self.input().fulfills(ic))
    }
}

impl Fulfills<InputConstraint> for DataSchema {
    fn fulfills(&self, c: &InputConstraint) -> bool {
        text_matches(c.data_type.as_deref(), self.data_type.value())
            && c
                .data_property
                .as_ref()
                .map_or(true, |dc| self.properties.iter().any(|d| d.fulfills(dc)))
    }
}

impl Fulfills<DataPropertyConstraint> for DataProperty {
    fn fulfills(&self, c: &DataPropertyConstraint) -> bool {
        text_matches(c.index.as_deref(), &self.index)
            && types_match(c.types.as_deref(), &self.types)
            && text_matches(c.data_type.as_deref(), self.data_type.value())
    }
}

impl ThingDescription {
    /// Every property affordance of this thing that fulfills `constraint`.
    #[must_use]
    pub fn property_affordances(
        &self,
        constraint: &PropertyConstraint,
    ) -> Vec<&PropertyAffordance> {
        self.properties
            .iter()
            .filter(|p| p.fulfills(constraint))
            .collect()
    }

    /// Every action affordance of this thing that fulfills `constraint`.
    #[must_use]
    pub fn action_affordances(&self, constraint: &ActionConstraint) -> Vec<&ActionAffordance> {
        self.actions
            .iter()
            .filter(|a| a.fulfills(constraint))
            .collect()
    }
}
