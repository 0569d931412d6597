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

//! JSON Schema (draft 2020-12) generation from Forma field trees.
//!
//! The generator is a pure, depth-first walk over an ordered field list:
//!
//! - string fields emit `minLength`/`maxLength` when present,
//! - number fields emit inclusive or exclusive bounds (a flagged bound uses
//!   the numeric `exclusiveMinimum`/`exclusiveMaximum` keyword *instead of*
//!   the inclusive one),
//! - nested fields recurse into an object subschema with its own scoped
//!   `required` list,
//! - `$id` derives deterministically from the title
//!   (`https://example.com/<slug>.schema.json` by default).
//!
//! # Examples
//!
//! ```rust
//! use forma_core::{Field, FieldId, FieldKind, FieldSpec};
//! use forma_schema::{generate, SchemaConfig};
//!
//! let mut age = Field::new(FieldId::new("f1"), "age", FieldKind::Number);
//! age.spec = FieldSpec::Number {
//!     default_value: 0.0,
//!     minimum: Some(0.0),
//!     maximum: None,
//!     exclusive_minimum: false,
//!     exclusive_maximum: false,
//! };
//!
//! let schema = generate("Person", "", &[age], &SchemaConfig::default());
//! assert_eq!(schema.properties["age"]["minimum"], 0.0);
//! ```
//!
//! # Required-key scoping
//!
//! By default `required` is scoped to the object level it annotates. The
//! historical aggregate behavior (nested required keys flattened into the
//! root list as well) stays available through
//! [`SchemaConfig::builder`]`.aggregate_required(true)`.

mod config;
mod generate;
mod validate;

pub use config::{SchemaConfig, SchemaConfigBuilder};
pub use generate::{derive_id, generate, generate_tree, slug, SchemaRoot, DRAFT_2020_12};
pub use validate::{validate_schema, validate_schema_with};
