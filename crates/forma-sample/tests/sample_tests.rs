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

//! Integration tests for both sampling modes.

use forma_sample::{from_fields, from_schema, sample_node, SampleConfig};
use forma_schema::{generate, SchemaConfig};
use forma_test::fixtures;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Map, Value as JsonValue};

// ==================== Field-Driven (deterministic) ====================

#[test]
fn test_person_sample() {
    let sample = from_fields(&fixtures::person_fields());
    assert_eq!(
        JsonValue::Object(sample),
        json!({"name": "Sample name", "age": 0.0})
    );
}

#[test]
fn test_nested_sample_uses_defaults() {
    let sample = from_fields(&fixtures::address_fields());
    assert_eq!(sample["address"]["city"], "Springfield");
    assert_eq!(sample["address"]["zip"], "Sample zip");
}

#[test]
fn test_required_flag_does_not_affect_presence() {
    let fields = fixtures::wide_fields(8);
    let sample = from_fields(&fields);
    assert_eq!(sample.len(), 8, "every field appears, required or not");
}

/// Recursively assert sample keys == schema property keys.
fn assert_key_sets_match(sample: &Map<String, JsonValue>, properties: &Map<String, JsonValue>) {
    let sample_keys: Vec<&String> = sample.keys().collect();
    let schema_keys: Vec<&String> = properties.keys().collect();
    assert_eq!(sample_keys, schema_keys);

    for (key, node) in properties {
        if node["type"] == "object" {
            let child_props = node["properties"].as_object().unwrap();
            let child_sample = sample[key].as_object().unwrap();
            assert_key_sets_match(child_sample, child_props);
        }
    }
}

#[test]
fn test_deterministic_sample_mirrors_schema_key_sets() {
    for fields in [
        fixtures::person_fields(),
        fixtures::address_fields(),
        fixtures::all_kinds_fields(),
        fixtures::deep_fields(6),
        fixtures::duplicate_key_fields(),
    ] {
        let schema = generate("T", "", &fields, &SchemaConfig::default());
        let sample = from_fields(&fields);
        assert_key_sets_match(&sample, &schema.properties);
    }
}

// ==================== Schema-Driven (randomized) ====================

#[test]
fn test_top_level_properties_are_all_sampled() {
    let schema = generate("T", "", &fixtures::person_fields(), &SchemaConfig::default());
    let mut rng = StdRng::seed_from_u64(1);
    let sample = from_schema(&schema, &SampleConfig::default(), &mut rng);

    assert_eq!(sample["name"], "Sample name");
    assert_eq!(sample["age"], 42);
}

#[test]
fn test_required_children_always_present() {
    let schema = generate("T", "", &fixtures::address_fields(), &SchemaConfig::default());
    let address_node = &schema.properties["address"];
    let config = SampleConfig::default();
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..100 {
        let value = sample_node("address", address_node, &config, &mut rng);
        assert!(
            value.get("city").is_some(),
            "required child must appear in every sample"
        );
    }
}

#[test]
fn test_optional_inclusion_frequency() {
    // One optional child, sampled 1000 times: expect inclusion near 750.
    let node = json!({
        "type": "object",
        "properties": {"note": {"type": "string"}},
        "required": []
    });
    let config = SampleConfig::default();
    let mut rng = StdRng::seed_from_u64(3);

    let mut included = 0;
    for _ in 0..1000 {
        let value = sample_node("o", &node, &config, &mut rng);
        if value.get("note").is_some() {
            included += 1;
        }
    }

    assert!(
        (700..=800).contains(&included),
        "optional child included {} times out of 1000, expected ~750",
        included
    );
}

#[test]
fn test_two_invocations_differ_for_optional_fields() {
    let node = json!({
        "type": "object",
        "properties": {
            "a": {"type": "string"},
            "b": {"type": "string"},
            "c": {"type": "string"},
            "d": {"type": "string"},
            "e": {"type": "string"}
        },
        "required": []
    });
    let config = SampleConfig::default();
    let mut rng = StdRng::seed_from_u64(4);

    // With five optional fields, 32 draws virtually guarantee two distinct
    // key sets from the same schema.
    let first = sample_node("o", &node, &config, &mut rng);
    let differs = (0..31).any(|_| sample_node("o", &node, &config, &mut rng) != first);
    assert!(differs, "randomized sampling should vary across invocations");
}

#[test]
fn test_sample_keys_are_schema_keys() {
    let schema = generate(
        "T",
        "",
        &fixtures::all_kinds_fields(),
        &SchemaConfig::default(),
    );
    let mut rng = StdRng::seed_from_u64(5);
    let sample = from_schema(&schema, &SampleConfig::default(), &mut rng);

    for key in sample.as_object().unwrap().keys() {
        assert!(
            schema.properties.contains_key(key),
            "sample key '{}' missing from schema",
            key
        );
    }
}

#[test]
fn test_id_heuristic_applies_to_nested_names() {
    let schema = generate(
        "T",
        "",
        &fixtures::all_kinds_fields(),
        &SchemaConfig::default(),
    );
    let meta = &schema.properties["meta"];
    let mut rng = StdRng::seed_from_u64(6);
    let value = sample_node("meta", meta, &SampleConfig::default(), &mut rng);

    // version_id is required, so it is always present; its name contains "id".
    assert_eq!(value["version_id"], 1001);
}
