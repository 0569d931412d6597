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

//! Core data model for Forma: typed field definitions and the field tree.
//!
//! A [`FieldTree`] is the single input both generators consume. It is an
//! ordered, recursively nestable collection of [`Field`]s, each carrying a
//! stable [`FieldId`], a property key, a required flag, and kind-specific
//! constraints in a [`FieldSpec`] tagged union.
//!
//! The tree is owned data built by append-only construction; a field can
//! never reference an ancestor, so cycles are structurally impossible. The
//! generators in `forma-schema` and `forma-sample` take read-only snapshots
//! and return newly allocated documents.
//!
//! # Examples
//!
//! ```rust
//! use forma_core::{FieldKind, FieldTree};
//!
//! let mut tree = FieldTree::new("Person", "A person record");
//! let name = tree.append(FieldKind::String);
//! tree.get_mut(&name).unwrap().key = "name".to_string();
//! tree.get_mut(&name).unwrap().required = true;
//!
//! let address = tree.append(FieldKind::Nested);
//! tree.append_child(&address, FieldKind::String).unwrap();
//!
//! assert_eq!(tree.field_count(), 3);
//! assert_eq!(tree.max_depth(), 2);
//! ```
//!
//! # Serde
//!
//! With the `serde` feature, fields round-trip through the flat, internally
//! tagged wire shape exchanged with UI layers:
//!
//! ```json
//! {"id": "f1", "key": "name", "required": true,
//!  "type": "string", "defaultValue": "", "minLength": 3}
//! ```

mod error;
mod field;
mod tree;

pub use error::{FormaError, FormaErrorKind};
pub use field::{Field, FieldId, FieldKind, FieldSpec};
pub use tree::{is_valid_key, sanitize_key, FieldTree, IdAllocator};
