use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;
use num::rational::Ratio;

use crate::{util::format_float, AttrValue, IntoAttrValue, IntoNode, Node, Uri};

/// A scalar leaf in the tree or in an attribute.
#[derive(Clone, PartialEq)]
pub enum Value<'bump> {
    /// A string value.
    String(BumpString<'bump>),
    /// An integer value.
    Int(i128),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// An exact fraction, rendered as its decimal value.
    Fraction(Ratio<i64>),
    /// A URI, rendered as its reconstructed URL.
    Uri(Uri),
}
impl<'bump> Value<'bump> {
    /// Create a string value in `bump`.
    pub fn string(bump: &'bump Bump, s: &str) -> Self {
        Value::String(BumpString::from_str_in(s, bump))
    }

    /// Returns the value as a string slice if this is a String variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Bool variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` for `false` and the empty string, the values an attribute is
    /// dropped for. Zero is not falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}
impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s.as_str()),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Fraction(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Value::Uri(uri) => write!(f, "uri({:?})", uri.to_string()),
        }
    }
}

/// Trait for types that can be converted into a [`Value`] with a bump allocator.
pub trait IntoValue<'bump> {
    /// Convert this value into a [`Value`] using the given bump allocator.
    fn into_value(self, bump: &'bump Bump) -> Value<'bump>;
}
impl<'bump> IntoValue<'bump> for Value<'bump> {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        self
    }
}
impl<'bump> IntoValue<'bump> for BumpString<'bump> {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::String(self)
    }
}
impl<'bump> IntoValue<'bump> for &str {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        Value::string(bump, self)
    }
}
impl<'bump> IntoValue<'bump> for String {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        Value::string(bump, &self)
    }
}
impl<'bump> IntoValue<'bump> for &String {
    fn into_value(self, bump: &'bump Bump) -> Value<'bump> {
        Value::string(bump, self)
    }
}
impl<'bump> IntoValue<'bump> for bool {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Bool(self)
    }
}
impl<'bump> IntoValue<'bump> for Ratio<i64> {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Fraction(self)
    }
}
impl<'bump> IntoValue<'bump> for Uri {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Uri(self)
    }
}
impl<'bump> IntoValue<'bump> for &Uri {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Uri(self.clone())
    }
}

macro_rules! numeric_values {
    ($variant:ident as $repr:ty: $($t:ty),*) => {
        $(
            impl<'bump> IntoValue<'bump> for $t {
                fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
                    Value::$variant(<$repr>::from(self))
                }
            }
        )*
    };
}
numeric_values!(Int as i128: i8, i16, i32, i64, i128, u8, u16, u32, u64);
numeric_values!(Float as f64: f32, f64);

impl<'bump> IntoValue<'bump> for usize {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Int(self as i128)
    }
}
impl<'bump> IntoValue<'bump> for isize {
    fn into_value(self, _bump: &'bump Bump) -> Value<'bump> {
        Value::Int(self as i128)
    }
}

// Scalars are nodes and attribute values through their `Value`.
macro_rules! scalar_conversions {
    ($($t:ty),*) => {
        $(
            impl<'bump> IntoNode<'bump> for $t {
                fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
                    Node::Value(self.into_value(bump))
                }
            }
            impl<'bump> IntoAttrValue<'bump> for $t {
                fn into_attr_value(self, bump: &'bump Bump) -> AttrValue<'bump> {
                    AttrValue::Scalar(self.into_value(bump))
                }
            }
        )*
    };
}
scalar_conversions!(
    &str, String, &String, bool, Ratio<i64>, Uri, &Uri, i8, i16, i32, i64, i128, isize, u8, u16,
    u32, u64, usize, f32, f64
);

impl<'bump> IntoNode<'bump> for Value<'bump> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        Node::Value(self)
    }
}
impl<'bump> IntoAttrValue<'bump> for Value<'bump> {
    fn into_attr_value(self, _bump: &'bump Bump) -> AttrValue<'bump> {
        AttrValue::Scalar(self)
    }
}
impl<'bump> IntoNode<'bump> for BumpString<'bump> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        Node::Value(Value::String(self))
    }
}
impl<'bump> IntoAttrValue<'bump> for BumpString<'bump> {
    fn into_attr_value(self, _bump: &'bump Bump) -> AttrValue<'bump> {
        AttrValue::Scalar(Value::String(self))
    }
}
