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

//! Schema command - print the generated JSON Schema

use super::{load_tree, schema_config, write_output};
use forma_export::to_canonical_json;

/// Generate a JSON Schema from a field-tree document and print it.
///
/// The output is canonical JSON text; property order inside `properties` is
/// field definition order.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or parsed, or if writing the
/// output fails.
pub fn schema(
    file: &str,
    output: Option<&str>,
    base_url: Option<&str>,
    aggregate_required: bool,
) -> Result<(), String> {
    let tree = load_tree(file)?;
    let config = schema_config(base_url, aggregate_required);

    let schema = forma_schema::generate_tree(&tree, &config);
    let mut text = to_canonical_json(&schema.to_value()).map_err(|e| e.to_string())?;
    text.push('\n');

    write_output(&text, output)
}
