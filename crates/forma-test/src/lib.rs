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

//! Shared test fixtures and builders for the Forma crates.
//!
//! Eliminates fixture duplication across the generator and CLI test suites.
//!
//! # Quick Start
//!
//! ```rust
//! use forma_test::{fixtures, FieldBuilder};
//!
//! // Pre-built fixtures
//! let fields = fixtures::person_fields();
//! let tree = fixtures::person_tree();
//!
//! // Custom fixtures
//! let field = FieldBuilder::number("f9", "age").minimum(0.0).build();
//! ```

mod builders;
pub mod fixtures;

pub use builders::FieldBuilder;
