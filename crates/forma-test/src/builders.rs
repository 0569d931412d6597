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

//! Fluent builders for constructing field fixtures in tests.
//!
//! These builders panic on misuse (e.g., setting `min_length` on a number
//! field); they are test support, and a panic pinpoints the broken fixture.

use forma_core::{Field, FieldId, FieldKind, FieldSpec};

/// Builder for creating customizable [`Field`] fixtures.
///
/// # Examples
///
/// ```
/// use forma_test::FieldBuilder;
///
/// let name = FieldBuilder::string("f1", "name")
///     .required(true)
///     .default_value("")
///     .min_length(1)
///     .build();
///
/// assert!(name.required);
/// assert_eq!(name.key, "name");
/// ```
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Start a string field.
    pub fn string(id: &str, key: &str) -> Self {
        Self {
            field: Field::new(FieldId::new(id), key, FieldKind::String),
        }
    }

    /// Start a number field.
    pub fn number(id: &str, key: &str) -> Self {
        Self {
            field: Field::new(FieldId::new(id), key, FieldKind::Number),
        }
    }

    /// Start a nested field.
    pub fn nested(id: &str, key: &str) -> Self {
        Self {
            field: Field::new(FieldId::new(id), key, FieldKind::Nested),
        }
    }

    /// Set the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.field.required = required;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.field.description = Some(description.into());
        self
    }

    /// Set the string default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        match &mut self.field.spec {
            FieldSpec::String { default_value, .. } => *default_value = value.into(),
            other => panic!("default_value on non-string field ({:?})", other.kind()),
        }
        self
    }

    /// Set the numeric default value.
    pub fn default_number(mut self, value: f64) -> Self {
        match &mut self.field.spec {
            FieldSpec::Number { default_value, .. } => *default_value = value,
            other => panic!("default_number on non-number field ({:?})", other.kind()),
        }
        self
    }

    /// Set the minimum length constraint.
    pub fn min_length(mut self, value: u64) -> Self {
        match &mut self.field.spec {
            FieldSpec::String { min_length, .. } => *min_length = Some(value),
            other => panic!("min_length on non-string field ({:?})", other.kind()),
        }
        self
    }

    /// Set the maximum length constraint.
    pub fn max_length(mut self, value: u64) -> Self {
        match &mut self.field.spec {
            FieldSpec::String { max_length, .. } => *max_length = Some(value),
            other => panic!("max_length on non-string field ({:?})", other.kind()),
        }
        self
    }

    /// Set the minimum bound.
    pub fn minimum(mut self, value: f64) -> Self {
        match &mut self.field.spec {
            FieldSpec::Number { minimum, .. } => *minimum = Some(value),
            other => panic!("minimum on non-number field ({:?})", other.kind()),
        }
        self
    }

    /// Set the maximum bound.
    pub fn maximum(mut self, value: f64) -> Self {
        match &mut self.field.spec {
            FieldSpec::Number { maximum, .. } => *maximum = Some(value),
            other => panic!("maximum on non-number field ({:?})", other.kind()),
        }
        self
    }

    /// Mark the minimum bound exclusive.
    pub fn exclusive_minimum(mut self, flag: bool) -> Self {
        match &mut self.field.spec {
            FieldSpec::Number {
                exclusive_minimum, ..
            } => *exclusive_minimum = flag,
            other => panic!("exclusive_minimum on non-number field ({:?})", other.kind()),
        }
        self
    }

    /// Mark the maximum bound exclusive.
    pub fn exclusive_maximum(mut self, flag: bool) -> Self {
        match &mut self.field.spec {
            FieldSpec::Number {
                exclusive_maximum, ..
            } => *exclusive_maximum = flag,
            other => panic!("exclusive_maximum on non-number field ({:?})", other.kind()),
        }
        self
    }

    /// Append a child to a nested field.
    pub fn child(mut self, child: Field) -> Self {
        match self.field.children_mut() {
            Some(children) => children.push(child),
            None => panic!("child on non-nested field ({:?})", self.field.kind()),
        }
        self
    }

    /// Build the field.
    pub fn build(self) -> Field {
        self.field
    }
}
