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

//! Validate command - JSON Schema structural validation

use super::read_file;
use colored::Colorize;
use forma_schema::validate_schema_with;
use serde_json::Value as JsonValue;

/// Validate a JSON Schema document for structural correctness.
///
/// Checks that the root carries a `$schema` field, every node's `type` is a
/// known primitive, and `required` entries name real properties. Schemas
/// generated with aggregate required lists carry nested keys at the root;
/// pass `allow_aggregate` to accept those.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is not JSON, or fails
/// validation.
///
/// # Output
///
/// Prints a summary to stdout including the validation status (✓ or ✗),
/// title, and property counts.
pub fn validate(file: &str, allow_aggregate: bool) -> Result<(), String> {
    let content = read_file(file)?;

    let schema: JsonValue = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid JSON in '{}': {}", file, e))?;

    match validate_schema_with(&schema, allow_aggregate) {
        Ok(()) => {
            println!("{} {}", "✓".green().bold(), file);
            if let Some(title) = schema.get("title").and_then(|t| t.as_str()) {
                println!("  Title: {}", title);
            }
            let properties = schema
                .get("properties")
                .and_then(|p| p.as_object())
                .map_or(0, |p| p.len());
            let required = schema
                .get("required")
                .and_then(|r| r.as_array())
                .map_or(0, |r| r.len());
            println!("  Properties: {}", properties);
            println!("  Required: {}", required);
            if allow_aggregate {
                println!("  Mode: aggregate (root may require nested keys)");
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(format!("{}", e))
        }
    }
}
