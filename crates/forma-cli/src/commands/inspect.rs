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

//! Inspect command - field tree visualization

use super::load_tree;
use colored::Colorize;
use forma_core::{Field, FieldSpec};

/// Inspect and visualize a field-tree document.
///
/// Displays the tree in a human-readable, indented format with color
/// highlighting, followed by summary statistics. In verbose mode, each
/// field's constraints (length and numeric bounds, default values) are
/// shown inline.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn inspect(file: &str, verbose: bool) -> Result<(), String> {
    let tree = load_tree(file)?;

    println!("{}", "Field Tree".bold().underline());
    println!();
    println!("{}  {}", "Title:".cyan(), tree.title);
    if !tree.description.is_empty() {
        println!("{}  {}", "Description:".cyan(), tree.description);
    }

    println!();
    println!("{}", "Fields:".cyan());
    if tree.is_empty() {
        println!("  (none)");
    } else {
        print_fields(&tree.fields, 1, verbose);
    }

    println!();
    println!("{}", "Stats:".cyan());
    println!("  Fields: {}", tree.field_count());
    println!("  Depth: {}", tree.max_depth());
    println!(
        "  Required: {}",
        tree.fields.iter().filter(|f| f.required).count()
    );

    Ok(())
}

fn print_fields(fields: &[Field], indent: usize, verbose: bool) {
    let prefix = "  ".repeat(indent);

    for field in fields {
        let mut line = format!(
            "{}{} [{}]: {}",
            prefix,
            field.key.yellow(),
            field.id.as_str().dimmed(),
            field.kind().to_string().green()
        );
        if field.required {
            line.push_str(&format!(" {}", "(required)".magenta()));
        }
        println!("{}", line);

        if verbose {
            for detail in constraint_lines(field) {
                println!("{}  {}", prefix, detail.dimmed());
            }
        }

        if let Some(children) = field.children() {
            print_fields(children, indent + 1, verbose);
        }
    }
}

fn constraint_lines(field: &Field) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(description) = &field.description {
        lines.push(format!("description: {}", description));
    }

    match &field.spec {
        FieldSpec::String {
            default_value,
            min_length,
            max_length,
        } => {
            if !default_value.is_empty() {
                lines.push(format!("default: \"{}\"", default_value));
            }
            if let Some(min) = min_length {
                lines.push(format!("minLength: {}", min));
            }
            if let Some(max) = max_length {
                lines.push(format!("maxLength: {}", max));
            }
        }
        FieldSpec::Number {
            default_value,
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
        } => {
            lines.push(format!("default: {}", default_value));
            if let Some(min) = minimum {
                let keyword = if *exclusive_minimum {
                    "exclusiveMinimum"
                } else {
                    "minimum"
                };
                lines.push(format!("{}: {}", keyword, min));
            }
            if let Some(max) = maximum {
                let keyword = if *exclusive_maximum {
                    "exclusiveMaximum"
                } else {
                    "maximum"
                };
                lines.push(format!("{}: {}", keyword, max));
            }
        }
        FieldSpec::Nested { properties } => {
            lines.push(format!("children: {}", properties.len()));
        }
    }

    lines
}
