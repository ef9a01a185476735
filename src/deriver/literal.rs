//! Reference deriver for object-literal expressions.
//!
//! Real SDK pipelines inject a deriver backed by full type information;
//! this one covers the common case of handlers returning object literals,
//! which is enough to exercise the analyzer end-to-end.

use anyhow::Result;
use serde_json::Value;

use crate::core::ast::HandlerNode;
use crate::core::ShapeDescription;

use super::TypeDeriver;

/// Derives shapes from object-literal expressions.
///
/// Each top-level property maps to a primitive type name (`number`,
/// `string`, `boolean`, `null`), a nested shape for object values, or
/// `unknown`. Nodes that are not object literals derive as an empty shape.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralShapeDeriver;

impl TypeDeriver for LiteralShapeDeriver {
    fn serialize_node(&self, node: &HandlerNode) -> Result<ShapeDescription> {
        Ok(object_shape(node).unwrap_or_default())
    }
}

/// Shape of an object literal, `None` when `node` is not one.
fn object_shape(node: &HandlerNode) -> Option<ShapeDescription> {
    let HandlerNode::Other { kind, children, .. } = node else {
        return None;
    };
    if kind != "object" {
        return None;
    }

    let mut shape = ShapeDescription::new();
    for entry in children {
        match entry {
            HandlerNode::Other { kind, children, .. } if kind == "pair" => {
                let mut parts = children.iter();
                let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                    continue;
                };
                if let Some(name) = property_name(key) {
                    shape.insert(name, type_of(value));
                }
            }
            // { ok } shorthand property, value type unknown
            HandlerNode::Other { kind, text, .. }
                if kind == "shorthand_property_identifier" =>
            {
                shape.insert(text.clone(), Value::String("unknown".to_string()));
            }
            _ => {}
        }
    }
    Some(shape)
}

/// Property key text: identifiers verbatim, string keys unquoted.
fn property_name(node: &HandlerNode) -> Option<String> {
    match node {
        HandlerNode::Identifier { name } => Some(name.clone()),
        HandlerNode::NumericLiteral { text } => Some(text.clone()),
        HandlerNode::Other { kind, text, .. } if kind == "property_identifier" => {
            Some(text.clone())
        }
        HandlerNode::Other { kind, text, .. } if kind == "string" => Some(
            text.trim_matches(|quote| quote == '\'' || quote == '"')
                .to_string(),
        ),
        _ => None,
    }
}

fn type_of(node: &HandlerNode) -> Value {
    match node {
        HandlerNode::NumericLiteral { .. } => Value::String("number".to_string()),
        HandlerNode::Other { kind, .. } if kind == "string" || kind == "template_string" => {
            Value::String("string".to_string())
        }
        HandlerNode::Other { kind, .. } if kind == "true" || kind == "false" => {
            Value::String("boolean".to_string())
        }
        HandlerNode::Other { kind, .. } if kind == "null" => Value::String("null".to_string()),
        other => match object_shape(other) {
            Some(shape) => Value::Object(shape),
            None => Value::String("unknown".to_string()),
        },
    }
}
