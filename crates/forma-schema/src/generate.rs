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

//! Schema generation: the pure walk from a field list to a [`SchemaRoot`].

use crate::SchemaConfig;
use forma_core::{Field, FieldSpec, FieldTree};
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};

/// The JSON Schema draft this generator emits.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// The generated JSON Schema document.
///
/// Serializes with the conventional key order: `$schema`, `$id`, `title`,
/// `description`, `type`, `properties`, `required`. Property order inside
/// `properties` is field definition order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaRoot {
    /// Draft URI, always [`DRAFT_2020_12`].
    #[serde(rename = "$schema")]
    pub schema: String,
    /// Deterministic identifier derived from the title, see [`derive_id`].
    #[serde(rename = "$id")]
    pub id: String,
    /// Schema title, verbatim from the input.
    pub title: String,
    /// Schema description, verbatim from the input.
    pub description: String,
    /// Root type, always `"object"`.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property schemas keyed by field key, in definition order.
    pub properties: Map<String, JsonValue>,
    /// Required property keys, deduplicated in first-occurrence order.
    pub required: Vec<String>,
}

impl SchemaRoot {
    /// The generated schema as a `serde_json::Value`.
    ///
    /// Infallible in practice: the document is built from JSON-native parts.
    pub fn to_value(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

/// Derive the lowercase, hyphenated slug of a title.
///
/// Whitespace runs collapse to a single `-`; the result is deterministic and
/// idempotent (`slug(slug(t)) == slug(t)`).
pub fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Derive the schema `$id` from a title: `<base_url>/<slug>.schema.json`.
pub fn derive_id(title: &str, base_url: &str) -> String {
    format!("{}/{}.schema.json", base_url.trim_end_matches('/'), slug(title))
}

/// Generate a JSON Schema document from an ordered field list.
///
/// The walk is recursive, depth-first, and preserves sibling order. It is
/// pure and total: no mutation of the input, no I/O, and no failure modes
/// over a structurally valid tree. Duplicate sibling keys overwrite earlier
/// properties (ordinary map insertion, last-write-wins).
///
/// # Examples
///
/// ```
/// use forma_core::{Field, FieldId, FieldKind};
/// use forma_schema::{generate, SchemaConfig};
///
/// let mut name = Field::new(FieldId::new("f1"), "name", FieldKind::String);
/// name.required = true;
///
/// let schema = generate("Person", "", &[name], &SchemaConfig::default());
/// assert_eq!(schema.id, "https://example.com/person.schema.json");
/// assert_eq!(schema.required, vec!["name"]);
/// ```
pub fn generate(
    title: &str,
    description: &str,
    fields: &[Field],
    config: &SchemaConfig,
) -> SchemaRoot {
    let mut required = Vec::new();
    let properties = build_properties(fields, config, &mut required, true);

    SchemaRoot {
        schema: DRAFT_2020_12.to_string(),
        id: derive_id(title, &config.base_url),
        title: title.to_string(),
        description: description.to_string(),
        schema_type: "object".to_string(),
        properties,
        required: dedup_first(required),
    }
}

/// Generate a schema from a whole [`FieldTree`].
pub fn generate_tree(tree: &FieldTree, config: &SchemaConfig) -> SchemaRoot {
    generate(&tree.title, &tree.description, &tree.fields, config)
}

fn build_properties(
    fields: &[Field],
    config: &SchemaConfig,
    required: &mut Vec<String>,
    top_level: bool,
) -> Map<String, JsonValue> {
    let mut properties = Map::with_capacity(fields.len());

    for field in fields {
        if field.required && (top_level || config.aggregate_required) {
            required.push(field.key.clone());
        }
        properties.insert(field.key.clone(), field_to_schema(field, config, required));
    }

    properties
}

fn field_to_schema(
    field: &Field,
    config: &SchemaConfig,
    required: &mut Vec<String>,
) -> JsonValue {
    let mut node = Map::with_capacity(6);

    match &field.spec {
        FieldSpec::String {
            min_length,
            max_length,
            ..
        } => {
            node.insert("type".to_string(), json!("string"));
            node.insert("description".to_string(), json!(describe(field, "field")));
            if let Some(min) = min_length {
                node.insert("minLength".to_string(), json!(min));
            }
            if let Some(max) = max_length {
                node.insert("maxLength".to_string(), json!(max));
            }
        }
        FieldSpec::Number {
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
            ..
        } => {
            node.insert("type".to_string(), json!("number"));
            node.insert("description".to_string(), json!(describe(field, "field")));
            // A flagged bound is exclusive *instead of* inclusive; the two
            // keywords are never emitted together for the same bound.
            if let Some(min) = minimum {
                let keyword = if *exclusive_minimum {
                    "exclusiveMinimum"
                } else {
                    "minimum"
                };
                node.insert(keyword.to_string(), json!(min));
            }
            if let Some(max) = maximum {
                let keyword = if *exclusive_maximum {
                    "exclusiveMaximum"
                } else {
                    "maximum"
                };
                node.insert(keyword.to_string(), json!(max));
            }
        }
        FieldSpec::Nested { properties } => {
            node.insert("type".to_string(), json!("object"));
            node.insert(
                "description".to_string(),
                json!(describe(field, "nested object")),
            );
            let child_props = build_properties(properties, config, required, false);
            node.insert("properties".to_string(), JsonValue::Object(child_props));
            let own_required: Vec<String> = properties
                .iter()
                .filter(|f| f.required)
                .map(|f| f.key.clone())
                .collect();
            node.insert("required".to_string(), json!(dedup_first(own_required)));
        }
    }

    JsonValue::Object(node)
}

fn describe(field: &Field, suffix: &str) -> String {
    match field.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => description.to_string(),
        None => format!("{} {}", field.key, suffix),
    }
}

fn dedup_first(keys: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keys.len());
    for key in keys {
        if !out.contains(&key) {
            out.push(key);
        }
    }
    out
}
