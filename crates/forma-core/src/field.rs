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

//! Field definitions: the typed, recursively nestable building blocks of a
//! schema under construction.
//!
//! A [`Field`] carries identity and naming common to every kind, plus a
//! kind-specific payload in [`FieldSpec`]. The payload is a tagged union with
//! exhaustive matching at every consumer; there is no open-ended dispatch.

use crate::{FormaError, FormaErrorKind};
use std::fmt;
use std::str::FromStr;

/// Discriminator for the supported field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A string-valued field with optional length bounds.
    String,
    /// A numeric field with optional inclusive or exclusive bounds.
    Number,
    /// An object-valued field holding an ordered list of child fields.
    Nested,
}

impl FieldKind {
    /// All supported kinds, in display order.
    pub const ALL: [FieldKind; 3] = [FieldKind::String, FieldKind::Number, FieldKind::Nested];

    /// The lowercase tag used on the wire and in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FormaError;

    /// Parse a kind tag. An unrecognized tag is a hard error
    /// ([`FormaErrorKind::UnsupportedKind`]), never coerced to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "nested" => Ok(Self::Nested),
            other => Err(FormaError::unsupported_kind(format!(
                "unsupported field kind: {}",
                other
            ))),
        }
    }
}

/// Opaque, stable field identity.
///
/// Assigned once at creation by the owning tree's allocator and never reused,
/// even after removal. Identity survives kind changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldId(String);

impl FieldId {
    /// Wrap an externally supplied id (e.g., read from a serialized tree).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
fn is_false(b: &bool) -> bool {
    !*b
}

/// Kind-specific payload of a field.
///
/// Serialized internally tagged as `type`, so the wire form is flat:
/// `{"type": "string", "defaultValue": "", "minLength": 3}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum FieldSpec {
    /// String field payload.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    String {
        /// Value emitted by the deterministic sampler when non-empty.
        #[cfg_attr(feature = "serde", serde(default))]
        default_value: String,
        /// Minimum length constraint; `Some(0)` is a real constraint.
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        min_length: Option<u64>,
        /// Maximum length constraint.
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        max_length: Option<u64>,
    },
    /// Number field payload.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Number {
        /// Value emitted by the deterministic sampler.
        #[cfg_attr(feature = "serde", serde(default))]
        default_value: f64,
        /// Lower bound.
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        minimum: Option<f64>,
        /// Upper bound.
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        maximum: Option<f64>,
        /// When true, `minimum` is emitted as an exclusive bound.
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
        exclusive_minimum: bool,
        /// When true, `maximum` is emitted as an exclusive bound.
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
        exclusive_maximum: bool,
    },
    /// Nested object payload: an ordered, recursive list of child fields.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Nested {
        /// Direct children, in definition order.
        #[cfg_attr(feature = "serde", serde(default))]
        properties: Vec<Field>,
    },
}

impl FieldSpec {
    /// Default payload for a kind, matching the field factory defaults.
    pub fn defaults(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => Self::String {
                default_value: "Sample text".to_string(),
                min_length: None,
                max_length: None,
            },
            FieldKind::Number => Self::Number {
                default_value: 0.0,
                minimum: None,
                maximum: None,
                exclusive_minimum: false,
                exclusive_maximum: false,
            },
            FieldKind::Nested => Self::Nested {
                properties: Vec::new(),
            },
        }
    }

    /// The kind tag of this payload.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::String { .. } => FieldKind::String,
            Self::Number { .. } => FieldKind::Number,
            Self::Nested { .. } => FieldKind::Nested,
        }
    }
}

/// One user-defined entry in the schema being built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Stable identity, unique within the owning tree.
    pub id: FieldId,
    /// Property name under which this field appears in its parent's
    /// `properties` map. Uniqueness across siblings is not enforced;
    /// a duplicate key overwrites earlier properties (last-write-wins).
    pub key: String,
    /// Whether the key is listed in the enclosing object's `required` list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
    /// Optional human-readable description carried into the schema.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Kind-specific payload.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub spec: FieldSpec,
}

impl Field {
    /// Create a field of the given kind with factory defaults for the payload.
    pub fn new(id: FieldId, key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            key: key.into(),
            required: false,
            description: None,
            spec: FieldSpec::defaults(kind),
        }
    }

    /// Create a field from a kind tag, failing on an unrecognized tag.
    pub fn of_kind(id: FieldId, key: impl Into<String>, kind: &str) -> Result<Self, FormaError> {
        Ok(Self::new(id, key, kind.parse()?))
    }

    /// The kind of this field.
    pub fn kind(&self) -> FieldKind {
        self.spec.kind()
    }

    /// Returns true if this field holds child fields.
    pub fn is_nested(&self) -> bool {
        matches!(self.spec, FieldSpec::Nested { .. })
    }

    /// Direct children of a nested field, if any.
    pub fn children(&self) -> Option<&[Field]> {
        match &self.spec {
            FieldSpec::Nested { properties } => Some(properties),
            _ => None,
        }
    }

    /// Mutable access to the children of a nested field.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Field>> {
        match &mut self.spec {
            FieldSpec::Nested { properties } => Some(properties),
            _ => None,
        }
    }

    /// Switch this field to another kind.
    ///
    /// Incompatible constraint attributes are discarded and replaced with the
    /// new kind's defaults; `id`, `key`, `required`, and `description` are
    /// preserved. Retagging to the current kind leaves the payload untouched.
    pub fn retag(&mut self, kind: FieldKind) {
        if self.kind() != kind {
            self.spec = FieldSpec::defaults(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_roundtrip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = "date".parse::<FieldKind>().unwrap_err();
        assert_eq!(err.kind, FormaErrorKind::UnsupportedKind);
        assert!(err.message.contains("date"));
    }

    #[test]
    fn test_factory_defaults() {
        let f = Field::new(FieldId::new("f1"), "name", FieldKind::String);
        assert!(!f.required);
        assert_eq!(
            f.spec,
            FieldSpec::String {
                default_value: "Sample text".to_string(),
                min_length: None,
                max_length: None,
            }
        );

        let n = Field::new(FieldId::new("f2"), "age", FieldKind::Number);
        match n.spec {
            FieldSpec::Number { default_value, .. } => assert_eq!(default_value, 0.0),
            _ => panic!("expected number payload"),
        }
    }

    #[test]
    fn test_retag_preserves_common_attributes() {
        let mut f = Field::new(FieldId::new("f1"), "age", FieldKind::Number);
        f.required = true;
        f.description = Some("age in years".to_string());

        f.retag(FieldKind::String);

        assert_eq!(f.id, FieldId::new("f1"));
        assert_eq!(f.key, "age");
        assert!(f.required);
        assert_eq!(f.description.as_deref(), Some("age in years"));
        assert_eq!(f.kind(), FieldKind::String);
    }

    #[test]
    fn test_retag_same_kind_keeps_payload() {
        let mut f = Field::new(FieldId::new("f1"), "name", FieldKind::String);
        if let FieldSpec::String { min_length, .. } = &mut f.spec {
            *min_length = Some(3);
        }
        f.retag(FieldKind::String);
        assert_eq!(
            f.children(),
            None,
            "string field never exposes children"
        );
        match f.spec {
            FieldSpec::String { min_length, .. } => assert_eq!(min_length, Some(3)),
            _ => panic!("expected string payload"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_shape_is_flat_and_tagged() {
        let mut f = Field::new(FieldId::new("f1"), "name", FieldKind::String);
        f.required = true;
        if let FieldSpec::String {
            default_value,
            min_length,
            ..
        } = &mut f.spec
        {
            default_value.clear();
            *min_length = Some(3);
        }

        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["type"], "string");
        assert_eq!(json["defaultValue"], "");
        assert_eq!(json["minLength"], 3);
        assert!(json.get("maxLength").is_none());
        assert!(json.get("description").is_none());

        let back: Field = serde_json::from_value(json).unwrap();
        assert_eq!(back, f);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_shape_rejects_unknown_tag() {
        let json = serde_json::json!({
            "id": "f1",
            "key": "when",
            "required": false,
            "type": "date",
            "defaultValue": ""
        });
        assert!(serde_json::from_value::<Field>(json).is_err());
    }
}
