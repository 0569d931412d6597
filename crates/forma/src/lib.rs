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

//! # Forma - JSON Schema Composition Toolkit
//!
//! Forma turns an ordered, nestable tree of typed field definitions into a
//! JSON Schema (draft 2020-12) document and matching sample data. The field
//! tree is the single source of truth; the generators are pure functions over
//! read-only snapshots of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use forma::{generate_schema, generate_sample, to_canonical_json, FieldKind, FieldSpec, FieldTree};
//!
//! let mut tree = FieldTree::new("Person", "A person record");
//! let name = tree.append(FieldKind::String);
//! let field = tree.get_mut(&name).unwrap();
//! field.key = "name".to_string();
//! field.required = true;
//! // An empty default makes the sampler fall back to "Sample <key>".
//! field.spec = FieldSpec::String {
//!     default_value: String::new(),
//!     min_length: None,
//!     max_length: None,
//! };
//!
//! let schema = generate_schema(&tree);
//! assert_eq!(schema.required, vec!["name"]);
//!
//! let sample = generate_sample(&tree);
//! assert_eq!(sample["name"], "Sample name");
//!
//! let text = to_canonical_json(&schema.to_value()).unwrap();
//! assert!(text.contains("\"$schema\""));
//! ```
//!
//! ## Modules
//!
//! - [`forma_core`] (re-exported at the root): field model and tree editing
//! - [`schema`]: JSON Schema generation and validation
//! - [`sample`]: deterministic and randomized sample data
//! - [`export`](mod@export): canonical JSON rendering and download filenames

// Re-export core types
pub use forma_core::{
    is_valid_key,
    sanitize_key,
    // Main types
    Field,
    FieldId,
    FieldKind,
    FieldSpec,
    FieldTree,
    // Errors
    FormaError,
    FormaErrorKind,
    IdAllocator,
};

// Re-export schema generation
pub mod schema {
    //! JSON Schema generation utilities
    pub use forma_schema::{
        derive_id, generate, generate_tree, slug, validate_schema, validate_schema_with,
        SchemaConfig, SchemaConfigBuilder, SchemaRoot, DRAFT_2020_12,
    };
}

// Re-export sample generation
pub mod sample {
    //! Sample data generation utilities
    pub use forma_sample::{
        from_fields, from_schema, from_schema_default, from_tree, sample_node, SampleConfig,
        SampleConfigBuilder,
    };
}

// Re-export canonical rendering
pub mod export {
    //! Canonical JSON rendering utilities
    pub use forma_export::{
        sample_filename, schema_filename, to_canonical_json, to_canonical_json_with, ExportConfig,
    };
}

// Most callers want these without the module path.
pub use forma_sample::SampleConfig;
pub use forma_schema::{SchemaConfig, SchemaRoot};

// Convenience functions at crate root

/// Generate a JSON Schema document from a field tree with default settings.
///
/// For a custom `$id` base URL or aggregate `required` behavior, use
/// [`schema::generate_tree`] with a [`SchemaConfig`].
///
/// # Examples
///
/// ```rust
/// use forma::{generate_schema, FieldKind, FieldTree};
///
/// let mut tree = FieldTree::new("Invoice", "");
/// tree.append(FieldKind::Number);
///
/// let schema = generate_schema(&tree);
/// assert_eq!(schema.id, "https://example.com/invoice.schema.json");
/// ```
#[inline]
pub fn generate_schema(tree: &FieldTree) -> SchemaRoot {
    forma_schema::generate_tree(tree, &SchemaConfig::default())
}

/// Generate deterministic sample data from a field tree.
///
/// Every field appears; values come from field defaults or `"Sample <key>"`
/// placeholders. For randomized, schema-driven sampling see
/// [`sample_from_schema`].
#[inline]
pub fn generate_sample(tree: &FieldTree) -> serde_json::Map<String, serde_json::Value> {
    forma_sample::from_tree(tree)
}

/// Generate randomized sample data from a schema with default settings.
///
/// Required object properties always appear; optional ones appear with the
/// default 0.75 probability. Seed an explicit RNG through
/// [`sample::from_schema`] for reproducible output.
#[inline]
pub fn sample_from_schema(schema: &SchemaRoot) -> serde_json::Value {
    forma_sample::from_schema_default(schema)
}

/// Render a document to canonical JSON text (2-space indent, insertion order).
///
/// # Examples
///
/// ```rust
/// use forma::to_canonical_json;
/// use serde_json::json;
///
/// let text = to_canonical_json(&json!({"a": 1})).unwrap();
/// assert_eq!(text, "{\n  \"a\": 1\n}");
/// ```
#[inline]
pub fn to_canonical_json<T: serde::Serialize>(value: &T) -> Result<String, FormaError> {
    forma_export::to_canonical_json(value)
}

/// JSON Schema draft emitted by this library.
pub const SUPPORTED_DRAFT: &str = forma_schema::DRAFT_2020_12;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
