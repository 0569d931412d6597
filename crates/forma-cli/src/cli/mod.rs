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

//! CLI command definitions and argument parsing.

use crate::commands;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// Most commands take a field-tree document as input; `validate` takes an
/// already-generated JSON Schema document.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate schema and sample files from a field tree
    ///
    /// Writes `<slug>.schema.json` and `<slug>-sample.json` into the output
    /// directory, where `<slug>` derives from the tree's title.
    Generate {
        /// Input field-tree JSON file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = ".")]
        out: String,

        /// Base URL for `$id` derivation
        #[arg(long)]
        base_url: Option<String>,

        /// Flatten nested required keys into the root required list
        #[arg(long)]
        aggregate_required: bool,
    },

    /// Print the generated JSON Schema
    Schema {
        /// Input field-tree JSON file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Base URL for `$id` derivation
        #[arg(long)]
        base_url: Option<String>,

        /// Flatten nested required keys into the root required list
        #[arg(long)]
        aggregate_required: bool,
    },

    /// Print generated sample data
    ///
    /// The default walk is deterministic: every field appears, valued by its
    /// default. With `--from-schema` the sample is drawn from the generated
    /// schema instead, including optional properties probabilistically.
    Sample {
        /// Input field-tree JSON file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Randomized, schema-driven sampling
        #[arg(long)]
        from_schema: bool,

        /// RNG seed for reproducible randomized samples
        #[arg(long, requires = "from_schema")]
        seed: Option<u64>,

        /// Inclusion probability for optional properties, clamped to [0, 1]
        #[arg(long, requires = "from_schema")]
        probability: Option<f64>,
    },

    /// Validate a JSON Schema document
    ///
    /// Checks the document's structure: `$schema` presence, known primitive
    /// types, and `required` entries naming real properties.
    Validate {
        /// Input JSON Schema file
        #[arg(value_name = "FILE")]
        file: String,

        /// Allow root required keys that name nested properties
        #[arg(long)]
        allow_aggregate: bool,
    },

    /// Show field tree structure and statistics
    Inspect {
        /// Input field-tree JSON file
        #[arg(value_name = "FILE")]
        file: String,

        /// Show constraint details per field
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O, parsing, generation, or validation fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Generate {
                file,
                out,
                base_url,
                aggregate_required,
            } => commands::generate(&file, &out, base_url.as_deref(), aggregate_required),
            Commands::Schema {
                file,
                output,
                base_url,
                aggregate_required,
            } => commands::schema(
                &file,
                output.as_deref(),
                base_url.as_deref(),
                aggregate_required,
            ),
            Commands::Sample {
                file,
                output,
                from_schema,
                seed,
                probability,
            } => commands::sample(&file, output.as_deref(), from_schema, seed, probability),
            Commands::Validate {
                file,
                allow_aggregate,
            } => commands::validate(&file, allow_aggregate),
            Commands::Inspect { file, verbose } => commands::inspect(&file, verbose),
        }
    }
}
