use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{util::stringify, IntoValue, Value};

/// The value of an attribute.
#[derive(Clone, PartialEq, Default)]
pub enum AttrValue<'bump> {
    /// No value; the attribute is omitted.
    #[default]
    Null,
    /// A single value.
    Scalar(Value<'bump>),
    /// A list of values, rendered space-separated.
    List(BumpVec<'bump, Value<'bump>>),
}
impl<'bump> AttrValue<'bump> {
    /// Returns `true` if the attribute would be omitted: `Null`, `false`, the empty
    /// string, or an empty list.
    pub fn is_falsy(&self) -> bool {
        match self {
            AttrValue::Null => true,
            AttrValue::Scalar(value) => value.is_falsy(),
            AttrValue::List(values) => values.is_empty(),
        }
    }

    /// Returns the value as a string slice if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Scalar(value) => value.as_str(),
            _ => None,
        }
    }

    /// The stringified value, with list items joined by spaces. `None` for `Null`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            AttrValue::Null => None,
            AttrValue::Scalar(value) => Some(stringify(value).into_owned()),
            AttrValue::List(values) => Some(
                values
                    .iter()
                    .map(|v| stringify(v))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}
impl fmt::Debug for AttrValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => f.write_str("nil"),
            AttrValue::Scalar(value) => fmt::Debug::fmt(value, f),
            AttrValue::List(values) => f.debug_list().entries(values.iter()).finish(),
        }
    }
}

/// A key-value pair for an attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The value of the attribute.
    pub value: AttrValue<'bump>,
}
impl<'bump> Attribute<'bump> {
    /// Create an attribute from a key and anything convertible to a value.
    pub fn new(bump: &'bump Bump, key: &str, value: impl IntoAttrValue<'bump>) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: value.into_attr_value(bump),
        }
    }

    /// Create a boolean attribute set to `true`.
    pub fn boolean(bump: &'bump Bump, key: &str) -> Self {
        Self::new(bump, key, true)
    }
}

/// An attributes map: unique string keys, insertion-ordered, compared as a map.
///
/// ```
/// use hiccup::{bumpalo::Bump, Attrs};
///
/// let bump = Bump::new();
/// let mut attrs = Attrs::from_iter_in(&bump, [("class", "a"), ("id", "x")]);
/// attrs.update(Attrs::from_iter_in(&bump, [("class", "b")]));
/// assert_eq!(attrs.get("class").and_then(|v| v.as_str()), Some("b"));
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Clone)]
pub struct Attrs<'bump> {
    entries: BumpVec<'bump, Attribute<'bump>>,
}
impl<'bump> Attrs<'bump> {
    /// Create an empty map in `bump`.
    pub fn new_in(bump: &'bump Bump) -> Self {
        Self {
            entries: BumpVec::new_in(bump),
        }
    }

    /// Create a map from attributes; later keys replace earlier ones.
    pub fn from_iter_in(
        bump: &'bump Bump,
        iter: impl IntoIterator<Item = impl IntoAttribute<'bump>>,
    ) -> Self {
        let mut attrs = Self::new_in(bump);
        for attribute in iter {
            attrs.insert(attribute.into_attribute(bump));
        }
        attrs
    }

    /// The allocator the map lives in.
    pub fn bump(&self) -> &'bump Bump {
        self.entries.bump()
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&AttrValue<'bump>> {
        self.entries
            .iter()
            .find(|a| a.key.as_str() == key)
            .map(|a| &a.value)
    }

    /// Returns `true` if `key` is present, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert an attribute, replacing the value of an existing key in place.
    pub fn insert(&mut self, attribute: Attribute<'bump>) {
        match self.entries.iter_mut().find(|a| a.key == attribute.key) {
            Some(existing) => existing.value = attribute.value,
            None => self.entries.push(attribute),
        }
    }

    /// Set `key` to `value`.
    pub fn set(&mut self, key: &str, value: impl IntoAttrValue<'bump>) {
        let bump = self.bump();
        self.insert(Attribute::new(bump, key, value));
    }

    /// Chaining form of [`Attrs::set`].
    pub fn with(mut self, key: &str, value: impl IntoAttrValue<'bump>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue<'bump>> {
        let index = self.entries.iter().position(|a| a.key.as_str() == key)?;
        Some(self.entries.remove(index).value)
    }

    /// Copy every entry of `other` into this map; `other` wins on shared keys.
    pub fn update(&mut self, other: Attrs<'bump>) {
        for attribute in other.entries {
            self.insert(attribute);
        }
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute<'bump>> {
        self.entries.iter()
    }
}
impl PartialEq for Attrs<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|a| other.get(a.key.as_str()) == Some(&a.value))
    }
}
impl fmt::Debug for Attrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|a| (a.key.as_str(), &a.value)))
            .finish()
    }
}
impl<'bump> IntoIterator for Attrs<'bump> {
    type Item = Attribute<'bump>;
    type IntoIter = bumpalo::collections::vec::IntoIter<'bump, Attribute<'bump>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
impl<'a, 'bump> IntoIterator for &'a Attrs<'bump> {
    type Item = &'a Attribute<'bump>;
    type IntoIter = std::slice::Iter<'a, Attribute<'bump>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Trait for types that can be converted into an [`AttrValue`] with a bump allocator.
///
/// Scalars become [`AttrValue::Scalar`], `None` becomes [`AttrValue::Null`], and
/// vectors and arrays become [`AttrValue::List`].
pub trait IntoAttrValue<'bump> {
    /// Convert this value into an [`AttrValue`] using the given bump allocator.
    fn into_attr_value(self, bump: &'bump Bump) -> AttrValue<'bump>;
}
impl<'bump> IntoAttrValue<'bump> for AttrValue<'bump> {
    fn into_attr_value(self, _bump: &'bump Bump) -> AttrValue<'bump> {
        self
    }
}
impl<'bump, T: IntoAttrValue<'bump>> IntoAttrValue<'bump> for Option<T> {
    fn into_attr_value(self, bump: &'bump Bump) -> AttrValue<'bump> {
        match self {
            Some(value) => value.into_attr_value(bump),
            None => AttrValue::Null,
        }
    }
}
impl<'bump, T: IntoValue<'bump>> IntoAttrValue<'bump> for Vec<T> {
    fn into_attr_value(self, bump: &'bump Bump) -> AttrValue<'bump> {
        AttrValue::List(BumpVec::from_iter_in(
            self.into_iter().map(|v| v.into_value(bump)),
            bump,
        ))
    }
}
impl<'bump, T: IntoValue<'bump>, const N: usize> IntoAttrValue<'bump> for [T; N] {
    fn into_attr_value(self, bump: &'bump Bump) -> AttrValue<'bump> {
        AttrValue::List(BumpVec::from_iter_in(
            self.into_iter().map(|v| v.into_value(bump)),
            bump,
        ))
    }
}

/// Trait for types that can be converted into an [`Attribute`] with a bump allocator.
pub trait IntoAttribute<'bump> {
    /// Convert this value into an [`Attribute`] using the given bump allocator.
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump>;
}
impl<'bump> IntoAttribute<'bump> for Attribute<'bump> {
    fn into_attribute(self, _bump: &'bump Bump) -> Attribute<'bump> {
        self
    }
}
impl<'bump> IntoAttribute<'bump> for &str {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::boolean(bump, self)
    }
}
impl<'bump, K: AsRef<str>, V: IntoAttrValue<'bump>> IntoAttribute<'bump> for (K, V) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0.as_ref(), self.1)
    }
}
