//! Keyed collections of Thing Descriptions and the set-level queries.
//!
//! Affordance queries run in two phases. The thing-level constraint is first
//! evaluated with the affordance-specific sub-constraint stripped, which
//! rejects documents failing on identity, type or the opposite affordance
//! kind. Only the surviving documents are walked to collect the individual
//! affordances that satisfy the original sub-constraint.

use std::collections::btree_map::{self, BTreeMap};

use log::debug;

use crate::constraint::ThingConstraint;
use crate::matching::Fulfills;
use crate::model::{ActionAffordance, PropertyAffordance, ThingDescription};

/// Thing Descriptions keyed by identifier.
///
/// Appending a description whose identifier is already present replaces the
/// stored one. Iteration follows identifier order; callers should not rely
/// on any particular order of query results across documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThingDescriptionSet {
    things: BTreeMap<String, ThingDescription>,
}

impl ThingDescriptionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `thing`, returning the description it replaced, if any.
    pub fn append(&mut self, thing: ThingDescription) -> Option<ThingDescription> {
        self.things.insert(thing.id.clone(), thing)
    }

    /// Removes the description with identifier `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<ThingDescription> {
        self.things.remove(id)
    }

    /// Looks up a description by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ThingDescription> {
        self.things.get(id)
    }

    /// Number of descriptions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.things.len()
    }

    /// Returns `true` if the set holds no description.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    /// Iterates all descriptions.
    pub fn iter(&self) -> btree_map::Values<'_, String, ThingDescription> {
        self.things.values()
    }

    /// Every description that fulfills `constraint`.
    #[must_use]
    pub fn things(&self, constraint: &ThingConstraint) -> Vec<&ThingDescription> {
        let found: Vec<_> = self.iter().filter(|t| t.fulfills(constraint)).collect();
        debug!("thing query matched {} of {} things", found.len(), self.len());
        found
    }

    /// Every property affordance matching `constraint.property`, drawn from
    /// the descriptions that fulfill the rest of `constraint`.
    ///
    /// Without a property constraint all properties of those descriptions
    /// are returned.
    #[must_use]
    pub fn property_affordances(&self, constraint: &ThingConstraint) -> Vec<&PropertyAffordance> {
        let gate = constraint.without_property();
        let mut gated = 0usize;
        let mut found = Vec::new();
        for thing in self.iter().filter(|t| t.fulfills(&gate)) {
            gated += 1;
            match &constraint.property {
                Some(pc) => found.extend(thing.properties.iter().filter(|p| p.fulfills(pc))),
                None => found.extend(thing.properties.iter()),
            }
        }
        debug!(
            "property query: {gated} of {} things passed the gate, {} affordances matched",
            self.len(),
            found.len()
        );
        found
    }

    /// Every action affordance matching `constraint.action`, drawn from the
    /// descriptions that fulfill the rest of `constraint`.
    ///
    /// Without an action constraint all actions of those descriptions are
    /// returned.
    #[must_use]
    pub fn action_affordances(&self, constraint: &ThingConstraint) -> Vec<&ActionAffordance> {
        let gate = constraint.without_action();
        let mut gated = 0usize;
        let mut found = Vec::new();
        for thing in self.iter().filter(|t| t.fulfills(&gate)) {
            gated += 1;
            match &constraint.action {
                Some(ac) => found.extend(thing.actions.iter().filter(|a| a.fulfills(ac))),
                None => found.extend(thing.actions.iter()),
            }
        }
        debug!(
            "action query: {gated} of {} things passed the gate, {} affordances matched",
            self.len(),
            found.len()
        );
        found
    }
}

impl FromIterator<ThingDescription> for ThingDescriptionSet {
    fn from_iter<I: IntoIterator<Item = ThingDescription>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<ThingDescription> for ThingDescriptionSet {
    fn extend<I: IntoIterator<Item = ThingDescription>>(&mut self, iter: I) {
        for thing in iter {
            self.append(thing);
        }
    }
}

impl<'a> IntoIterator for &'a ThingDescriptionSet {
    type Item = &'a ThingDescription;
    type IntoIter = btree_map::Values<'a, String, ThingDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
