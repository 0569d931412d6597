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

//! Canonical JSON text rendering and export filename derivation.
//!
//! The canonical form is the display/clipboard/download representation both
//! generated documents share: 2-space indentation, key order = insertion
//! order, no trailing whitespace. Rendering the same value always produces
//! the same text, which keeps diffs and content hashes stable.
//!
//! This crate performs no I/O; front ends own file writing.
//!
//! # Examples
//!
//! ```rust
//! use forma_export::{schema_filename, sample_filename, to_canonical_json};
//! use serde_json::json;
//!
//! let text = to_canonical_json(&json!({"name": "Ada"})).unwrap();
//! assert_eq!(text, "{\n  \"name\": \"Ada\"\n}");
//!
//! assert_eq!(schema_filename("My Schema"), "my-schema.schema.json");
//! assert_eq!(sample_filename("My Schema"), "my-schema-sample.json");
//! ```

use forma_core::FormaError;
use forma_schema::slug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Configuration for canonical rendering.
///
/// # Examples
///
/// ```
/// use forma_export::ExportConfig;
///
/// let config = ExportConfig::default();
/// assert_eq!(config.indent_width, 2);
///
/// let wide = ExportConfig::new().with_indent_width(4);
/// assert_eq!(wide.indent_width, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Number of spaces per indentation level.
    pub indent_width: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl ExportConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Render a document to canonical JSON text (2-space indent).
///
/// # Errors
///
/// Returns [`FormaError::conversion`] if the value cannot be serialized
/// (e.g., a non-finite float reached the boundary).
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, FormaError> {
    to_canonical_json_with(value, &ExportConfig::default())
}

/// [`to_canonical_json`] with a custom [`ExportConfig`].
pub fn to_canonical_json_with<T: Serialize>(
    value: &T,
    config: &ExportConfig,
) -> Result<String, FormaError> {
    let indent = " ".repeat(config.indent_width);
    let mut out = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| FormaError::conversion(format!("canonical rendering failed: {}", e)))?;

    String::from_utf8(out)
        .map_err(|e| FormaError::conversion(format!("canonical output not UTF-8: {}", e)))
}

/// Download filename for a generated schema: `<slug>.schema.json`.
pub fn schema_filename(title: &str) -> String {
    format!("{}.schema.json", slug(title))
}

/// Download filename for generated sample data: `<slug>-sample.json`.
pub fn sample_filename(title: &str) -> String {
    format!("{}-sample.json", slug(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_space_indent_and_no_trailing_whitespace() {
        let value = json!({"a": {"b": 1}, "c": [1, 2]});
        let text = to_canonical_json(&value).unwrap();

        assert!(text.contains("\n  \"a\""));
        assert!(text.contains("\n    \"b\": 1"));
        for line in text.lines() {
            assert_eq!(line, line.trim_end(), "no trailing whitespace");
        }
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let value = json!({"z": 1, "a": 2});
        let first = to_canonical_json(&value).unwrap();
        let second = to_canonical_json(&value).unwrap();
        assert_eq!(first, second);

        // Insertion order is preserved, not sorted.
        assert!(first.find("\"z\"").unwrap() < first.find("\"a\"").unwrap());
    }

    #[test]
    fn test_custom_indent_width() {
        let value = json!({"a": 1});
        let config = ExportConfig::new().with_indent_width(4);
        let text = to_canonical_json_with(&value, &config).unwrap();
        assert!(text.contains("\n    \"a\": 1"));
    }

    #[test]
    fn test_filenames_derive_from_slug() {
        assert_eq!(schema_filename("Invoice Line"), "invoice-line.schema.json");
        assert_eq!(sample_filename("Invoice Line"), "invoice-line-sample.json");
    }
}
