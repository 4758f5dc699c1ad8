//! Building trees from JSON documents.
//!
//! JSON has the same shapes as markup data: arrays are element lists, objects are
//! attribute maps and everything else is a value.

use bumpalo::Bump;
use serde_json::{Map, Number, Value as Json};

use crate::{AttrValue, Attrs, Node, Value};

impl<'bump> Node<'bump> {
    /// Convert a JSON document into a node.
    ///
    /// ```
    /// use hiccup::{bumpalo::Bump, render, Node};
    ///
    /// let bump = Bump::new();
    /// let json = serde_json::json!(["p", {"class": "note"}, "Hi ", 3]);
    /// let node = Node::from_json(&bump, &json);
    /// assert_eq!(render([node]).unwrap(), r#"<p class="note">Hi 3</p>"#);
    /// ```
    pub fn from_json(bump: &'bump Bump, json: &Json) -> Self {
        match json {
            Json::Null => Node::Null,
            Json::Array(items) => {
                Node::list(bump, items.iter().map(|item| Node::from_json(bump, item)))
            }
            Json::Object(map) => Node::Attrs(attrs_from_json(bump, map)),
            scalar => scalar_from_json(bump, scalar).map_or(Node::Null, Node::Value),
        }
    }
}

fn attrs_from_json<'bump>(bump: &'bump Bump, map: &Map<String, Json>) -> Attrs<'bump> {
    let mut attrs = Attrs::new_in(bump);
    for (key, value) in map {
        attrs.set(key, attr_value_from_json(bump, value));
    }
    attrs
}

fn attr_value_from_json<'bump>(bump: &'bump Bump, json: &Json) -> AttrValue<'bump> {
    match json {
        Json::Null => AttrValue::Null,
        Json::Array(items) if items.iter().all(is_scalar) => AttrValue::List(
            bumpalo::collections::Vec::from_iter_in(
                items.iter().filter_map(|item| scalar_from_json(bump, item)),
                bump,
            ),
        ),
        // Nested structure has no markup form; keep it as its JSON text.
        Json::Array(_) | Json::Object(_) => {
            AttrValue::Scalar(Value::string(bump, &json.to_string()))
        }
        scalar => scalar_from_json(bump, scalar).map_or(AttrValue::Null, AttrValue::Scalar),
    }
}

fn is_scalar(json: &Json) -> bool {
    matches!(json, Json::Bool(_) | Json::Number(_) | Json::String(_))
}

fn scalar_from_json<'bump>(bump: &'bump Bump, json: &Json) -> Option<Value<'bump>> {
    match json {
        Json::Bool(b) => Some(Value::Bool(*b)),
        Json::Number(n) => Some(number(n)),
        Json::String(s) => Some(Value::string(bump, s)),
        Json::Null | Json::Array(_) | Json::Object(_) => None,
    }
}

fn number<'bump>(n: &Number) -> Value<'bump> {
    if let Some(i) = n.as_i64() {
        Value::Int(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Int(u.into())
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
