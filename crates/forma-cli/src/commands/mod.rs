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

//! CLI command implementations

mod generate;
mod inspect;
mod sample;
mod schema;
mod validate;

pub use generate::generate;
pub use inspect::inspect;
pub use sample::sample;
pub use schema::schema;
pub use validate::validate;

use forma_core::FieldTree;
use forma_schema::SchemaConfig;
use std::fs;
use std::io::{self, Write};

/// Default maximum input size (64 MB). Field trees and schemas are small;
/// anything past this is almost certainly not one.
/// Can be overridden via the `FORMA_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("FORMA_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is not UTF-8, or exceeds the
/// maximum allowed size (configurable via `FORMA_MAX_FILE_SIZE`).
pub fn read_file(path: &str) -> Result<String, String> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Failed to get metadata for '{}': {}", path, e))?;

    let max_file_size = get_max_file_size();

    if metadata.len() > max_file_size {
        return Err(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes.\n\
             To process larger files, set FORMA_MAX_FILE_SIZE environment variable (in bytes).",
            path,
            metadata.len(),
            max_file_size
        ));
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if file creation or writing fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| format!("Failed to write '{}': {}", p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e)),
    }
}

/// Load and deserialize a field-tree document, resuming the id allocator so
/// later edits never reuse an id present in the file.
pub fn load_tree(path: &str) -> Result<FieldTree, String> {
    let content = read_file(path)?;
    let mut tree: FieldTree = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid field tree in '{}': {}", path, e))?;
    tree.reconcile_ids();
    Ok(tree)
}

fn schema_config(base_url: Option<&str>, aggregate_required: bool) -> SchemaConfig {
    let mut builder = SchemaConfig::builder().aggregate_required(aggregate_required);
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    builder.build()
}
