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

//! Deterministic, field-driven sampling.
//!
//! Walks the field tree directly; presence is unconditional, so the output's
//! key set equals the generated schema's `properties` key set at every level.

use forma_core::{Field, FieldSpec, FieldTree};
use serde_json::{json, Map, Value as JsonValue};

/// Generate deterministic sample data from an ordered field list.
///
/// - string fields emit their default value, or `"Sample <key>"` when the
///   default is empty;
/// - number fields emit their default value (a zero default stays `0`);
/// - nested fields recurse.
///
/// Every field appears in the output regardless of `required`. Duplicate
/// sibling keys overwrite earlier entries, mirroring the schema generator.
///
/// # Examples
///
/// ```
/// use forma_core::{Field, FieldId, FieldKind};
/// use forma_sample::from_fields;
///
/// let name = Field::new(FieldId::new("f1"), "name", FieldKind::String);
/// let sample = from_fields(&[name]);
/// assert_eq!(sample["name"], "Sample text");
/// ```
pub fn from_fields(fields: &[Field]) -> Map<String, JsonValue> {
    let mut out = Map::with_capacity(fields.len());

    for field in fields {
        let value = match &field.spec {
            FieldSpec::String { default_value, .. } => {
                if default_value.is_empty() {
                    json!(format!("Sample {}", field.key))
                } else {
                    json!(default_value)
                }
            }
            FieldSpec::Number { default_value, .. } => json!(default_value),
            FieldSpec::Nested { properties } => JsonValue::Object(from_fields(properties)),
        };
        out.insert(field.key.clone(), value);
    }

    out
}

/// Generate deterministic sample data from a whole [`FieldTree`].
pub fn from_tree(tree: &FieldTree) -> Map<String, JsonValue> {
    from_fields(&tree.fields)
}
