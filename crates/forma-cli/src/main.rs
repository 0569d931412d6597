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

//! Forma Command Line Interface

use clap::Parser;
use forma_cli::cli::Commands;
use std::process::ExitCode;

/// Forma - JSON Schema composition toolkit
///
/// A command-line interface for turning field-tree documents into JSON
/// Schema (draft 2020-12) and matching sample data, plus validation and
/// inspection of the results.
///
/// # Examples
///
/// ```bash
/// # Write person.schema.json and person-sample.json next to the input
/// forma generate person.forma.json --out dist/
///
/// # Print the generated schema to stdout
/// forma schema person.forma.json
///
/// # Reproducible randomized sample data
/// forma sample person.forma.json --from-schema --seed 42
///
/// # Validate a schema document
/// forma validate person.schema.json
/// ```
#[derive(Parser)]
#[command(name = "forma")]
#[command(author, version, about = "Forma - JSON Schema composition toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
