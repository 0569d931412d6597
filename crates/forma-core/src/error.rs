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

//! Error types for Forma.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormaErrorKind {
    /// Unrecognized field kind requested at construction.
    UnsupportedKind,
    /// Field operation failed (unknown id, wrong kind for operation).
    Field,
    /// Generated or supplied schema failed structural validation.
    Validation,
    /// Error during serialization or document conversion.
    Conversion,
    /// I/O error (file operations in front ends).
    Io,
}

impl fmt::Display for FormaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedKind => write!(f, "UnsupportedKindError"),
            Self::Field => write!(f, "FieldError"),
            Self::Validation => write!(f, "ValidationError"),
            Self::Conversion => write!(f, "ConversionError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error raised by the Forma core or one of its generators.
///
/// The generators themselves are total over structurally valid trees, so in
/// practice errors come from field construction ([`FormaErrorKind::UnsupportedKind`]),
/// tree edits addressing a missing field, or serialization at the boundary.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct FormaError {
    /// The kind of error.
    pub kind: FormaErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Additional context (e.g., "while retagging field f3").
    pub context: Option<String>,
}

impl FormaError {
    /// Create a new error.
    pub fn new(kind: FormaErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind

    pub fn unsupported_kind(message: impl Into<String>) -> Self {
        Self::new(FormaErrorKind::UnsupportedKind, message)
    }

    pub fn field(message: impl Into<String>) -> Self {
        Self::new(FormaErrorKind::Field, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FormaErrorKind::Validation, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(FormaErrorKind::Conversion, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(FormaErrorKind::Io, message)
    }
}
