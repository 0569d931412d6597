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

//! Forma CLI library for command-line parsing and execution.
//!
//! The input to most commands is a field-tree document: a JSON file with a
//! `title`, an optional `description`, and a `fields` array in the flat,
//! `type`-tagged wire shape of `forma-core`.
//!
//! # Commands
//!
//! ## Generation
//!
//! - **generate**: Write `<slug>.schema.json` and `<slug>-sample.json` to a
//!   directory
//! - **schema**: Print the generated JSON Schema
//! - **sample**: Print sample data (deterministic, or randomized with
//!   `--from-schema`)
//!
//! ## Validation & Inspection
//!
//! - **validate**: Structurally validate a JSON Schema document
//! - **inspect**: Show the field tree and its statistics
//!
//! # Examples
//!
//! ```no_run
//! use forma_cli::commands::{schema, validate};
//!
//! # fn main() -> Result<(), String> {
//! // Print the schema generated from a field tree
//! schema("person.forma.json", None, None, false)?;
//!
//! // Validate a schema document
//! validate("person.schema.json", false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), String>` for consistent error handling.
//! Errors are descriptive and include the offending file path.

pub mod cli;
pub mod commands;
