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

//! Randomized, schema-driven sampling.
//!
//! Operates on an already-generated JSON Schema rather than the field tree.
//! Inside object subschemas, required properties always appear and optional
//! ones appear with [`SampleConfig::optional_probability`], drawn
//! independently per property per invocation, so repeated calls on the same
//! schema produce different documents. The rng is supplied by the caller;
//! tests seed it for reproducibility.

use crate::SampleConfig;
use forma_schema::SchemaRoot;
use rand::Rng;
use serde_json::{json, Map, Value as JsonValue};

/// Generate a randomized sample document from a generated schema.
///
/// Every top-level property is included (the root is the document being
/// illustrated); probabilistic inclusion applies inside object subschemas,
/// per [`sample_node`].
pub fn from_schema(
    schema: &SchemaRoot,
    config: &SampleConfig,
    rng: &mut impl Rng,
) -> JsonValue {
    let mut out = Map::with_capacity(schema.properties.len());
    for (key, node) in &schema.properties {
        out.insert(key.clone(), sample_node(key, node, config, rng));
    }
    JsonValue::Object(out)
}

/// [`from_schema`] with the process-wide default random source.
pub fn from_schema_default(schema: &SchemaRoot) -> JsonValue {
    from_schema(schema, &SampleConfig::default(), &mut rand::thread_rng())
}

/// Generate a sample value for a single schema node.
///
/// Dispatches on the node's `type`:
///
/// - `string`: first `enum` entry if any, else `"Sample <name>"`;
/// - `number`/`integer`: `1001` when the property name contains `"id"`
///   (case-sensitive), else `42`;
/// - `boolean`: `true`; `null`: `null`;
/// - `array`: a one-element array sampled from `items`, or `[]` without
///   `items`;
/// - `object`: each property included if listed in the node's `required`
///   array, otherwise with the configured probability;
/// - anything else (including a missing `type`): `null` — sampling stays
///   total over malformed nodes.
pub fn sample_node(
    name: &str,
    node: &JsonValue,
    config: &SampleConfig,
    rng: &mut impl Rng,
) -> JsonValue {
    match node.get("type").and_then(|t| t.as_str()) {
        Some("string") => node
            .get("enum")
            .and_then(|e| e.as_array())
            .and_then(|values| values.first())
            .cloned()
            .unwrap_or_else(|| json!(format!("Sample {}", name))),
        Some("number") | Some("integer") => {
            if name.contains("id") {
                json!(1001)
            } else {
                json!(42)
            }
        }
        Some("boolean") => json!(true),
        Some("null") => JsonValue::Null,
        Some("array") => match node.get("items") {
            Some(items) => json!([sample_node(name, items, config, rng)]),
            None => json!([]),
        },
        Some("object") => {
            let mut out = Map::new();
            let Some(properties) = node.get("properties").and_then(|p| p.as_object()) else {
                return JsonValue::Object(out);
            };
            let required: Vec<&str> = node
                .get("required")
                .and_then(|r| r.as_array())
                .map(|entries| entries.iter().filter_map(|e| e.as_str()).collect())
                .unwrap_or_default();

            for (key, subschema) in properties {
                if required.contains(&key.as_str())
                    || rng.gen_bool(config.optional_probability)
                {
                    out.insert(key.clone(), sample_node(key, subschema, config, rng));
                }
            }
            JsonValue::Object(out)
        }
        _ => JsonValue::Null,
    }
}
