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

//! Canonical field-tree fixtures shared across the Forma test suites.

use crate::FieldBuilder;
use forma_core::{Field, FieldTree};

/// The worked Person example: a required `name` string with an empty default
/// and an optional `age` number with `minimum: 0`.
pub fn person_fields() -> Vec<Field> {
    vec![
        FieldBuilder::string("f1", "name")
            .required(true)
            .default_value("")
            .build(),
        FieldBuilder::number("f2", "age")
            .default_number(0.0)
            .minimum(0.0)
            .build(),
    ]
}

/// A `Person` tree around [`person_fields`].
pub fn person_tree() -> FieldTree {
    let mut tree = FieldTree::new("Person", "A person record");
    tree.fields = person_fields();
    tree.reconcile_ids();
    tree
}

/// A nested `address` object holding a required `city` string.
pub fn address_fields() -> Vec<Field> {
    vec![FieldBuilder::nested("f1", "address")
        .child(
            FieldBuilder::string("f2", "city")
                .required(true)
                .default_value("Springfield")
                .build(),
        )
        .child(FieldBuilder::string("f3", "zip").default_value("").build())
        .build()]
}

/// One field of every kind, exercising all constraint attributes.
pub fn all_kinds_fields() -> Vec<Field> {
    vec![
        FieldBuilder::string("f1", "title")
            .required(true)
            .description("display title")
            .default_value("Untitled")
            .min_length(0)
            .max_length(120)
            .build(),
        FieldBuilder::number("f2", "score")
            .minimum(0.0)
            .exclusive_minimum(true)
            .maximum(100.0)
            .build(),
        FieldBuilder::nested("f3", "meta")
            .child(
                FieldBuilder::number("f4", "version_id")
                    .required(true)
                    .default_number(1.0)
                    .build(),
            )
            .build(),
    ]
}

/// Two siblings sharing a key; the later one wins in generated maps.
pub fn duplicate_key_fields() -> Vec<Field> {
    vec![
        FieldBuilder::string("f1", "value").default_value("first").build(),
        FieldBuilder::number("f2", "value").default_number(2.0).build(),
    ]
}

/// A linear chain of nested fields `level0 > level1 > ...` ending in a
/// string leaf, `depth` objects deep.
pub fn deep_fields(depth: usize) -> Vec<Field> {
    let mut current = FieldBuilder::string("leaf", "leaf")
        .required(true)
        .default_value("")
        .build();
    for level in (0..depth).rev() {
        current = FieldBuilder::nested(&format!("n{}", level), &format!("level{}", level))
            .required(true)
            .child(current)
            .build();
    }
    vec![current]
}

/// A flat tree with `n` string fields, for throughput benchmarks.
pub fn wide_fields(n: usize) -> Vec<Field> {
    (0..n)
        .map(|i| {
            FieldBuilder::string(&format!("f{}", i + 1), &format!("field_{}", i + 1))
                .required(i % 2 == 0)
                .build()
        })
        .collect()
}
