// Forma - JSON Schema Composition Toolkit
//
// Copyright (c) 2026 Forma contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structural validation of generated (or externally supplied) schemas.

use forma_core::FormaError;
use serde_json::Value as JsonValue;

const VALID_TYPES: [&str; 7] = [
    "null", "boolean", "object", "array", "number", "string", "integer",
];

/// Validate a JSON Schema document for structural correctness.
///
/// Checks that:
/// - the root is an object with a `$schema` field,
/// - every node has a `type` drawn from the JSON Schema primitive types,
/// - `properties` maps keys to object-valued subschemas, recursively,
/// - `required` is an array of strings, each naming a property of the same
///   node (unknown names are rejected except in aggregate-required roots,
///   which list keys from deeper levels — pass `allow_foreign_required`).
///
/// # Errors
///
/// Returns [`FormaError::validation`] naming the offending node.
pub fn validate_schema(schema: &JsonValue) -> Result<(), FormaError> {
    validate_schema_with(schema, false)
}

/// [`validate_schema`] with control over foreign keys in the root `required`.
pub fn validate_schema_with(
    schema: &JsonValue,
    allow_foreign_required: bool,
) -> Result<(), FormaError> {
    let obj = schema
        .as_object()
        .ok_or_else(|| FormaError::validation("schema must be an object"))?;

    if !obj.contains_key("$schema") {
        return Err(FormaError::validation("schema must have a $schema field"));
    }

    validate_node(schema, "#", allow_foreign_required)
}

fn validate_node(
    node: &JsonValue,
    path: &str,
    allow_foreign_required: bool,
) -> Result<(), FormaError> {
    let obj = node
        .as_object()
        .ok_or_else(|| FormaError::validation(format!("{}: subschema must be an object", path)))?;

    let node_type = obj
        .get("type")
        .and_then(|t| t.as_str())
        .ok_or_else(|| FormaError::validation(format!("{}: missing or non-string type", path)))?;

    if !VALID_TYPES.contains(&node_type) {
        return Err(FormaError::validation(format!(
            "{}: invalid type '{}', expected one of {:?}",
            path, node_type, VALID_TYPES
        )));
    }

    let properties = obj.get("properties").and_then(|p| p.as_object());

    if let Some(props) = properties {
        for (key, subschema) in props {
            // Only the root may tolerate foreign required keys.
            validate_node(subschema, &format!("{}/{}", path, key), false)?;
        }
    }

    if let Some(required) = obj.get("required") {
        let entries = required.as_array().ok_or_else(|| {
            FormaError::validation(format!("{}: required must be an array", path))
        })?;
        for entry in entries {
            let key = entry.as_str().ok_or_else(|| {
                FormaError::validation(format!("{}: required entries must be strings", path))
            })?;
            let known = properties.is_some_and(|p| p.contains_key(key));
            if !known && !allow_foreign_required {
                return Err(FormaError::validation(format!(
                    "{}: required key '{}' names no property",
                    path, key
                )));
            }
        }
    }

    if let Some(items) = obj.get("items") {
        validate_node(items, &format!("{}/items", path), false)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_minimal_schema() {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "properties": {}
        });
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_rejects_missing_schema_field() {
        let schema = json!({"type": "object"});
        assert!(validate_schema(&schema).is_err());
    }

    #[test]
    fn test_rejects_invalid_type() {
        let schema = json!({
            "$schema": "x",
            "type": "record"
        });
        let err = validate_schema(&schema).unwrap_err();
        assert!(err.message.contains("record"));
    }

    #[test]
    fn test_rejects_unknown_required_key() {
        let schema = json!({
            "$schema": "x",
            "type": "object",
            "properties": {"name": {"type": "string"}},
            "required": ["name", "ghost"]
        });
        assert!(validate_schema(&schema).is_err());
        assert!(validate_schema_with(&schema, true).is_ok());
    }

    #[test]
    fn test_validates_nested_properties() {
        let schema = json!({
            "$schema": "x",
            "type": "object",
            "properties": {
                "address": {
                    "type": "object",
                    "properties": {"city": {"type": "bogus"}},
                    "required": []
                }
            }
        });
        let err = validate_schema(&schema).unwrap_err();
        assert!(err.message.contains("#/address/city"));
    }
}
