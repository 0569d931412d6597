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

//! Property-based tests over randomly generated field trees.

use forma::sample::from_fields;
use forma::schema::{derive_id, generate, slug, validate_schema, validate_schema_with};
use forma::{to_canonical_json, Field, FieldId, FieldKind, FieldSpec, SchemaConfig};
use proptest::prelude::*;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashSet;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn arb_string_field() -> impl Strategy<Value = Field> {
    (
        arb_key(),
        any::<bool>(),
        "[ -~]{0,12}",
        proptest::option::of(0u64..20),
        proptest::option::of(20u64..200),
    )
        .prop_map(|(key, required, default_value, min_length, max_length)| {
            let mut field = Field::new(FieldId::new("p"), key, FieldKind::String);
            field.required = required;
            field.spec = FieldSpec::String {
                default_value,
                min_length,
                max_length,
            };
            field
        })
}

fn arb_number_field() -> impl Strategy<Value = Field> {
    (
        arb_key(),
        any::<bool>(),
        -1000.0..1000.0f64,
        proptest::option::of(-100.0..0.0f64),
        proptest::option::of(0.0..100.0f64),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(key, required, default, min, max, excl_min, excl_max)| {
            let mut field = Field::new(FieldId::new("p"), key, FieldKind::Number);
            field.required = required;
            field.spec = FieldSpec::Number {
                default_value: default,
                minimum: min,
                maximum: max,
                exclusive_minimum: excl_min,
                exclusive_maximum: excl_max,
            };
            field
        })
}

/// Siblings with duplicate keys collapse to one property in the output, which
/// would make a parallel field/schema walk ambiguous. Generated trees keep the
/// first sibling per key.
fn dedup_siblings(fields: Vec<Field>) -> Vec<Field> {
    let mut seen = HashSet::new();
    fields
        .into_iter()
        .filter(|f| seen.insert(f.key.clone()))
        .collect()
}

fn arb_field() -> impl Strategy<Value = Field> {
    let leaf = prop_oneof![arb_string_field(), arb_number_field()];
    leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_key(), any::<bool>(), prop::collection::vec(inner, 0..4)).prop_map(
            |(key, required, children)| {
                let mut field = Field::new(FieldId::new("p"), key, FieldKind::Nested);
                field.required = required;
                field.spec = FieldSpec::Nested {
                    properties: dedup_siblings(children),
                };
                field
            },
        )
    })
}

fn arb_fields() -> impl Strategy<Value = Vec<Field>> {
    prop::collection::vec(arb_field(), 0..6).prop_map(dedup_siblings)
}

/// Walk fields and generated properties in parallel, asserting that each
/// level's `required` list contains exactly the keys flagged at that level.
fn check_required_scoping(
    fields: &[Field],
    properties: &Map<String, JsonValue>,
    required: &[String],
) {
    for field in fields {
        assert_eq!(
            required.iter().any(|k| k == &field.key),
            field.required,
            "key '{}' required flag must match its own level's list",
            field.key
        );
        if let Some(children) = field.children() {
            let node = properties[&field.key].as_object().unwrap();
            let child_props = node["properties"].as_object().unwrap();
            let child_required: Vec<String> = node["required"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap().to_string())
                .collect();
            check_required_scoping(children, child_props, &child_required);
        }
    }
}

fn collect_required_keys(fields: &[Field], out: &mut Vec<String>) {
    for field in fields {
        if field.required {
            out.push(field.key.clone());
        }
        if let Some(children) = field.children() {
            collect_required_keys(children, out);
        }
    }
}

fn assert_key_sets_match(sample: &Map<String, JsonValue>, properties: &Map<String, JsonValue>) {
    let sample_keys: Vec<&String> = sample.keys().collect();
    let schema_keys: Vec<&String> = properties.keys().collect();
    assert_eq!(sample_keys, schema_keys);

    for (key, node) in properties {
        if node["type"] == "object" {
            assert_key_sets_match(
                sample[key].as_object().unwrap(),
                node["properties"].as_object().unwrap(),
            );
        }
    }
}

proptest! {
    #[test]
    fn prop_required_is_scoped_per_level(fields in arb_fields()) {
        let schema = generate("T", "", &fields, &SchemaConfig::default());
        check_required_scoping(&fields, &schema.properties, &schema.required);
    }

    #[test]
    fn prop_aggregate_root_lists_every_required_key(fields in arb_fields()) {
        let config = SchemaConfig::builder().aggregate_required(true).build();
        let schema = generate("T", "", &fields, &config);

        let mut expected = Vec::new();
        collect_required_keys(&fields, &mut expected);

        let root: HashSet<&String> = schema.required.iter().collect();
        for key in &expected {
            prop_assert!(root.contains(key), "aggregate root missing '{}'", key);
        }
        // No duplicates in the flattened list.
        prop_assert_eq!(root.len(), schema.required.len());
    }

    #[test]
    fn prop_generated_schemas_validate(fields in arb_fields()) {
        let scoped = generate("T", "", &fields, &SchemaConfig::default());
        prop_assert!(validate_schema(&scoped.to_value()).is_ok());

        let config = SchemaConfig::builder().aggregate_required(true).build();
        let aggregate = generate("T", "", &fields, &config);
        prop_assert!(validate_schema_with(&aggregate.to_value(), true).is_ok());
    }

    #[test]
    fn prop_deterministic_sample_mirrors_schema(fields in arb_fields()) {
        let schema = generate("T", "", &fields, &SchemaConfig::default());
        let sample = from_fields(&fields);
        assert_key_sets_match(&sample, &schema.properties);
    }

    #[test]
    fn prop_canonical_rendering_round_trips(fields in arb_fields()) {
        let schema = generate("T", "", &fields, &SchemaConfig::default());
        let value = schema.to_value();

        let first = to_canonical_json(&value).unwrap();
        let second = to_canonical_json(&value).unwrap();
        prop_assert_eq!(&first, &second);

        let parsed: JsonValue = serde_json::from_str(&first).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn prop_slug_is_idempotent(title in "[ a-zA-Z0-9]{0,24}") {
        prop_assert_eq!(slug(&slug(&title)), slug(&title));
        prop_assert_eq!(
            derive_id(&title, "https://example.com"),
            derive_id(&slug(&title), "https://example.com")
        );
    }

    #[test]
    fn prop_generation_does_not_mutate_input(fields in arb_fields()) {
        let before = fields.clone();
        let _ = generate("T", "", &fields, &SchemaConfig::default());
        let _ = from_fields(&fields);
        prop_assert_eq!(fields, before);
    }
}
