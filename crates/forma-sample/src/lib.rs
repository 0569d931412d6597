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

//! Sample data generation for Forma.
//!
//! Two distinct, named modes coexist deliberately; they are never merged:
//!
//! - **Field-driven** ([`from_fields`], [`from_tree`]): deterministic walk
//!   over the field tree. Every field appears; defaults (or `"Sample <key>"`
//!   placeholders) supply the values. The sample's key set equals the
//!   generated schema's `properties` key set, recursively.
//! - **Schema-driven** ([`from_schema`], [`sample_node`]): randomized walk
//!   over an already-generated JSON Schema. Required object properties are
//!   always present; optional ones appear with a configurable probability
//!   (default 0.75), so roughly three of four samples include any given
//!   optional property.
//!
//! # Examples
//!
//! ```rust
//! use forma_sample::{from_fields, from_schema, SampleConfig};
//! use forma_schema::{generate, SchemaConfig};
//! use forma_test::fixtures;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let fields = fixtures::person_fields();
//!
//! // Deterministic
//! let sample = from_fields(&fields);
//! assert_eq!(sample["name"], "Sample name");
//!
//! // Randomized, seeded for reproducibility
//! let schema = generate("Person", "", &fields, &SchemaConfig::default());
//! let mut rng = StdRng::seed_from_u64(42);
//! let sample = from_schema(&schema, &SampleConfig::default(), &mut rng);
//! assert!(sample.is_object());
//! ```

mod config;
mod field_driven;
mod schema_driven;

pub use config::{SampleConfig, SampleConfigBuilder};
pub use field_driven::{from_fields, from_tree};
pub use schema_driven::{from_schema, from_schema_default, sample_node};
