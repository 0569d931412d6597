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

//! Generate command - schema and sample file output

use super::{load_tree, schema_config};
use colored::Colorize;
use forma_export::{sample_filename, schema_filename, to_canonical_json};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Generate both export artifacts from a field-tree document.
///
/// Writes `<slug>.schema.json` (the JSON Schema) and `<slug>-sample.json`
/// (deterministic sample data) into `out_dir`, creating the directory when
/// it does not exist. Both files are canonical JSON: 2-space indent, key
/// order preserved.
///
/// # Arguments
///
/// * `file` - Path to the field-tree JSON file
/// * `out_dir` - Directory the artifacts are written into
/// * `base_url` - Base URL for `$id` derivation, defaulting to
///   `https://example.com`
/// * `aggregate_required` - Also flatten nested required keys into the root
///   `required` list
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or parsed, or if writing either
/// artifact fails.
pub fn generate(
    file: &str,
    out_dir: &str,
    base_url: Option<&str>,
    aggregate_required: bool,
) -> Result<(), String> {
    let tree = load_tree(file)?;
    let config = schema_config(base_url, aggregate_required);

    let schema = forma_schema::generate_tree(&tree, &config);
    let sample = forma_sample::from_tree(&tree);

    let schema_text = to_canonical_json(&schema.to_value()).map_err(|e| e.to_string())?;
    let sample_text =
        to_canonical_json(&JsonValue::Object(sample)).map_err(|e| e.to_string())?;

    let dir = Path::new(out_dir);
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create '{}': {}", out_dir, e))?;

    let schema_path = dir.join(schema_filename(&tree.title));
    let sample_path = dir.join(sample_filename(&tree.title));

    fs::write(&schema_path, schema_text)
        .map_err(|e| format!("Failed to write '{}': {}", schema_path.display(), e))?;
    fs::write(&sample_path, sample_text)
        .map_err(|e| format!("Failed to write '{}': {}", sample_path.display(), e))?;

    println!("{} {}", "✓".green().bold(), schema_path.display());
    println!("{} {}", "✓".green().bold(), sample_path.display());
    Ok(())
}
