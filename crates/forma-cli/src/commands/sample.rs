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

//! Sample command - deterministic or randomized sample data

use super::{load_tree, schema_config, write_output};
use forma_export::to_canonical_json;
use forma_sample::SampleConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value as JsonValue;

/// Generate sample data from a field-tree document and print it.
///
/// Without `from_schema`, the walk is deterministic: every field appears,
/// valued by its default (or a `"Sample <key>"` placeholder). With
/// `from_schema`, the sample is drawn from the generated schema instead:
/// required object properties always appear and optional ones appear with
/// `probability` (default 0.75). A `seed` makes the randomized mode
/// reproducible.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or parsed, or if writing the
/// output fails.
pub fn sample(
    file: &str,
    output: Option<&str>,
    from_schema: bool,
    seed: Option<u64>,
    probability: Option<f64>,
) -> Result<(), String> {
    let tree = load_tree(file)?;

    let value = if from_schema {
        let schema = forma_schema::generate_tree(&tree, &schema_config(None, false));
        let config = match probability {
            Some(p) => SampleConfig::builder().optional_probability(p).build(),
            None => SampleConfig::default(),
        };
        match seed {
            Some(s) => {
                let mut rng = StdRng::seed_from_u64(s);
                forma_sample::from_schema(&schema, &config, &mut rng)
            }
            None => forma_sample::from_schema(&schema, &config, &mut rand::thread_rng()),
        }
    } else {
        JsonValue::Object(forma_sample::from_tree(&tree))
    };

    let mut text = to_canonical_json(&value).map_err(|e| e.to_string())?;
    text.push('\n');

    write_output(&text, output)
}
