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

//! Schema generation configuration.

/// Configuration for JSON Schema generation.
///
/// # Examples
///
/// ```
/// use forma_schema::SchemaConfig;
///
/// let config = SchemaConfig::default();
/// assert_eq!(config.base_url, "https://example.com");
/// assert!(!config.aggregate_required);
///
/// let config = SchemaConfig::builder()
///     .base_url("https://schemas.acme.dev")
///     .aggregate_required(true)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Base URL the `$id` is derived under:
    /// `<base_url>/<slug>.schema.json`.
    pub base_url: String,
    /// When true, required keys from every nesting level are also flattened
    /// into the root `required` list, in depth-first visit order. This
    /// reproduces the aggregate-index behavior some existing consumers
    /// depend on; the default scopes `required` to the object it annotates.
    pub aggregate_required: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            aggregate_required: false,
        }
    }
}

impl SchemaConfig {
    /// Create a new builder for SchemaConfig.
    pub fn builder() -> SchemaConfigBuilder {
        SchemaConfigBuilder::default()
    }
}

/// Builder for [`SchemaConfig`].
#[derive(Debug, Default)]
pub struct SchemaConfigBuilder {
    base_url: Option<String>,
    aggregate_required: bool,
}

impl SchemaConfigBuilder {
    /// Set the base URL for `$id` derivation. A trailing slash is trimmed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Also flatten nested required keys into the root `required` list.
    pub fn aggregate_required(mut self, aggregate: bool) -> Self {
        self.aggregate_required = aggregate;
        self
    }

    /// Build the SchemaConfig.
    pub fn build(self) -> SchemaConfig {
        let defaults = SchemaConfig::default();
        SchemaConfig {
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            aggregate_required: self.aggregate_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = SchemaConfig::builder()
            .base_url("https://schemas.acme.dev/")
            .build();
        assert_eq!(config.base_url, "https://schemas.acme.dev");
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(SchemaConfig::builder().build(), SchemaConfig::default());
    }
}
