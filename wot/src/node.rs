//! Multi-valued node wrappers.
//!
//! Expanded JSON-LD encodes every property value as an array, even when the
//! vocabulary allows only one value. [`Node`] keeps that sequence intact (so
//! the model re-serializes to the same shape) and exposes the logical scalar
//! through [`Node::first_or_default`]: the first element, or a static zero
//! value when the sequence is empty.
//!
//! Matching compares against that resolved value, so an empty boolean node
//! behaves exactly like an explicit `false`.

use serde::{Deserialize, Serialize};

/// Types with a static zero value used when a [`Node`] is empty.
pub trait Zero: 'static {
    /// Returns the shared zero instance.
    fn zero() -> &'static Self;
}

/// An ordered sequence of values for a single JSON-LD property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node<T>(Vec<T>);

impl<T> Node<T> {
    /// Creates an empty node.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a node holding exactly one value.
    #[must_use]
    pub fn single(value: T) -> Self {
        Self(vec![value])
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    /// Returns the number of values in the node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the node carries no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates all values in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Borrows the underlying sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Zero> Node<T> {
    /// Returns the first value, or `T`'s zero value if the node is empty.
    #[must_use]
    pub fn first_or_default(&self) -> &T {
        self.0.first().unwrap_or_else(|| T::zero())
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Node<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> FromIterator<T> for Node<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A literal string value (`{"@value": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringValue {
    /// The literal.
    #[serde(rename = "@value")]
    pub value: String,
}

/// A literal boolean value (`{"@value": true}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanValue {
    /// The literal.
    #[serde(rename = "@value")]
    pub value: bool,
}

/// A node reference (`{"@id": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdValue {
    /// The referenced IRI.
    #[serde(rename = "@id")]
    pub id: String,
}

impl Zero for StringValue {
    fn zero() -> &'static Self {
        static ZERO: StringValue = StringValue {
            value: String::new(),
        };
        &ZERO
    }
}

impl Zero for BooleanValue {
    fn zero() -> &'static Self {
        static ZERO: BooleanValue = BooleanValue { value: false };
        &ZERO
    }
}

impl Zero for IdValue {
    fn zero() -> &'static Self {
        static ZERO: IdValue = IdValue { id: String::new() };
        &ZERO
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        Self { value }
    }
}

impl From<&str> for IdValue {
    fn from(id: &str) -> Self {
        Self { id: id.to_owned() }
    }
}

/// Node of string literals.
pub type StringNode = Node<StringValue>;
/// Node of boolean literals.
pub type BooleanNode = Node<BooleanValue>;
/// Node of IRI references.
pub type IdNode = Node<IdValue>;

impl StringNode {
    /// The first literal, or `""`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.first_or_default().value
    }
}

impl BooleanNode {
    /// The first literal, or `false`.
    #[must_use]
    pub fn value(&self) -> bool {
        self.first_or_default().value
    }
}

impl IdNode {
    /// The first referenced IRI, or `""`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.first_or_default().id
    }
}
