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

//! The field tree: an ordered, recursively nestable collection of fields
//! rooted at the schema's top-level object.
//!
//! The tree is built by append-only construction with owned child storage,
//! so it is rooted, finite, and acyclic by construction. Generators receive
//! a read-only view and never mutate it; all edits go through the methods
//! here, driven by the UI layer one mutation at a time.

use crate::{Field, FieldId, FieldKind, FormaError};

/// Monotonic id allocator. Ids are assigned once and never reused, even
/// after the field they named has been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator starting at `f1`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> FieldId {
        let id = FieldId::new(format!("f{}", self.next));
        self.next += 1;
        id
    }

    /// Advance the counter past an externally observed numeric suffix.
    /// Used when resuming a tree read from disk so old ids are never reissued.
    pub fn advance_past(&mut self, seen: u64) {
        if seen >= self.next {
            self.next = seen + 1;
        }
    }
}

/// A schema under construction: title, description, and the ordered roots
/// of the field tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldTree {
    /// Schema title; the `$id` and export filenames derive from it.
    pub title: String,
    /// Schema description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Top-level fields in definition order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<Field>,
    #[cfg_attr(feature = "serde", serde(skip))]
    ids: IdAllocator,
}

impl FieldTree {
    /// Create an empty tree.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Append a top-level field of the given kind with factory defaults.
    ///
    /// The new field gets a fresh id `fN` and the placeholder key `field_N`.
    pub fn append(&mut self, kind: FieldKind) -> FieldId {
        let field = self.fresh_field(kind);
        let id = field.id.clone();
        self.fields.push(field);
        id
    }

    /// Append a child field under the nested field `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`FormaError::field`] if `parent` does not exist or is not a
    /// nested field.
    pub fn append_child(
        &mut self,
        parent: &FieldId,
        kind: FieldKind,
    ) -> Result<FieldId, FormaError> {
        let field = self.fresh_field(kind);
        let id = field.id.clone();

        let target = self
            .get_mut(parent)
            .ok_or_else(|| FormaError::field(format!("no field with id {}", parent)))?;
        match target.children_mut() {
            Some(children) => {
                children.push(field);
                Ok(id)
            }
            None => Err(FormaError::field(format!(
                "field {} is not nested and cannot hold children",
                parent
            ))
            .with_context(format!("kind is {}", target.kind()))),
        }
    }

    /// Remove a field by id at any depth. Returns true if a field was removed.
    /// The id is retired either way; it will never be reissued.
    pub fn remove(&mut self, id: &FieldId) -> bool {
        remove_in(&mut self.fields, id)
    }

    /// Find a field by id at any depth.
    pub fn get(&self, id: &FieldId) -> Option<&Field> {
        find_in(&self.fields, id)
    }

    /// Find a field by id at any depth, mutably.
    pub fn get_mut(&mut self, id: &FieldId) -> Option<&mut Field> {
        find_in_mut(&mut self.fields, id)
    }

    /// Switch the kind of the field `id`, preserving identity, key, required
    /// flag, and description. Incompatible constraints are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`FormaError::field`] if no field has the given id.
    pub fn retag(&mut self, id: &FieldId, kind: FieldKind) -> Result<(), FormaError> {
        let field = self
            .get_mut(id)
            .ok_or_else(|| FormaError::field(format!("no field with id {}", id)))?;
        field.retag(kind);
        Ok(())
    }

    /// Total number of fields at all depths.
    pub fn field_count(&self) -> usize {
        count_in(&self.fields)
    }

    /// Depth of the deepest field. An empty tree has depth 0, a flat tree 1.
    pub fn max_depth(&self) -> usize {
        depth_of(&self.fields)
    }

    /// Returns true if the tree has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resume the id allocator past every `fN`-shaped id already in the tree.
    /// Call after constructing a tree from external data so future ids stay
    /// unique.
    pub fn reconcile_ids(&mut self) {
        let mut max_seen = 0u64;
        walk(&self.fields, &mut |field| {
            if let Some(n) = numeric_suffix(field.id.as_str()) {
                max_seen = max_seen.max(n);
            }
        });
        self.ids.advance_past(max_seen);
    }

    fn fresh_field(&mut self, kind: FieldKind) -> Field {
        let id = self.ids.allocate();
        let key = format!("field_{}", &id.as_str()[1..]);
        Field::new(id, key, kind)
    }
}

fn numeric_suffix(id: &str) -> Option<u64> {
    id.strip_prefix('f')?.parse().ok()
}

fn walk(fields: &[Field], visit: &mut impl FnMut(&Field)) {
    for field in fields {
        visit(field);
        if let Some(children) = field.children() {
            walk(children, visit);
        }
    }
}

fn find_in<'a>(fields: &'a [Field], id: &FieldId) -> Option<&'a Field> {
    for field in fields {
        if &field.id == id {
            return Some(field);
        }
        if let Some(children) = field.children() {
            if let Some(found) = find_in(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn find_in_mut<'a>(fields: &'a mut [Field], id: &FieldId) -> Option<&'a mut Field> {
    for field in fields {
        if &field.id == id {
            return Some(field);
        }
        if let Some(children) = field.children_mut() {
            if let Some(found) = find_in_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_in(fields: &mut Vec<Field>, id: &FieldId) -> bool {
    if let Some(pos) = fields.iter().position(|f| &f.id == id) {
        fields.remove(pos);
        return true;
    }
    for field in fields.iter_mut() {
        if let Some(children) = field.children_mut() {
            if remove_in(children, id) {
                return true;
            }
        }
    }
    false
}

fn count_in(fields: &[Field]) -> usize {
    fields
        .iter()
        .map(|f| 1 + f.children().map_or(0, count_in))
        .sum()
}

fn depth_of(fields: &[Field]) -> usize {
    fields
        .iter()
        .map(|f| 1 + f.children().map_or(0, depth_of))
        .max()
        .unwrap_or(0)
}

/// Returns true if `key` is a well-formed property key:
/// ASCII letter or underscore first, then letters, digits, or underscores.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rewrite `key` into well-formed, lowercase form: invalid characters become
/// underscores and a leading digit gets an underscore prefix. An empty input
/// stays empty.
pub fn sanitize_key(key: &str) -> String {
    let mut out: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_append_assigns_fresh_ids_and_keys() {
        let mut tree = FieldTree::new("Product", "");
        let a = tree.append(FieldKind::String);
        let b = tree.append(FieldKind::Number);

        assert_eq!(a.as_str(), "f1");
        assert_eq!(b.as_str(), "f2");
        assert_eq!(tree.get(&a).unwrap().key, "field_1");
        assert_eq!(tree.field_count(), 2);
    }

    #[test]
    fn test_ids_are_never_reused_after_removal() {
        let mut tree = FieldTree::new("Product", "");
        let a = tree.append(FieldKind::String);
        assert!(tree.remove(&a));
        let b = tree.append(FieldKind::String);
        assert_ne!(a, b);
        assert_eq!(b.as_str(), "f2");
    }

    #[test]
    fn test_append_child_requires_nested_parent() {
        let mut tree = FieldTree::new("Product", "");
        let scalar = tree.append(FieldKind::String);
        let nested = tree.append(FieldKind::Nested);

        assert!(tree.append_child(&scalar, FieldKind::Number).is_err());

        let child = tree.append_child(&nested, FieldKind::Number).unwrap();
        assert_eq!(tree.get(&child).unwrap().kind(), FieldKind::Number);
        assert_eq!(tree.field_count(), 3);
        assert_eq!(tree.max_depth(), 2);
    }

    #[test]
    fn test_append_child_missing_parent() {
        let mut tree = FieldTree::new("Product", "");
        let ghost = FieldId::new("f99");
        assert!(tree.append_child(&ghost, FieldKind::String).is_err());
    }

    #[test]
    fn test_remove_at_depth() {
        let mut tree = FieldTree::new("Product", "");
        let nested = tree.append(FieldKind::Nested);
        let inner = tree.append_child(&nested, FieldKind::Nested).unwrap();
        let leaf = tree.append_child(&inner, FieldKind::String).unwrap();

        assert!(tree.remove(&leaf));
        assert!(!tree.remove(&leaf));
        assert_eq!(tree.field_count(), 2);
    }

    #[test]
    fn test_retag_through_tree() {
        let mut tree = FieldTree::new("Product", "");
        let id = tree.append(FieldKind::Nested);
        tree.append_child(&id, FieldKind::String).unwrap();

        tree.retag(&id, FieldKind::Number).unwrap();
        let field = tree.get(&id).unwrap();
        assert_eq!(field.kind(), FieldKind::Number);
        assert_eq!(field.children(), None, "children are discarded");
        assert_eq!(tree.field_count(), 1);
    }

    #[test]
    fn test_reconcile_ids_resumes_counter() {
        let mut tree = FieldTree::new("Product", "");
        tree.fields.push(Field::new(
            FieldId::new("f7"),
            "imported",
            FieldKind::String,
        ));
        tree.reconcile_ids();
        let next = tree.append(FieldKind::String);
        assert_eq!(next.as_str(), "f8");
    }

    #[test]
    fn test_key_validation() {
        assert!(is_valid_key("name"));
        assert!(is_valid_key("_private"));
        assert!(is_valid_key("field_2"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("2fast"));
        assert!(!is_valid_key("first name"));
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("First Name"), "first_name");
        assert_eq!(sanitize_key("2fast"), "_2fast");
        assert_eq!(sanitize_key("ok_key"), "ok_key");
        assert_eq!(sanitize_key(""), "");
    }

    proptest! {
        #[test]
        fn prop_sanitized_nonempty_keys_are_valid(key in ".{1,40}") {
            let cleaned = sanitize_key(&key);
            prop_assert!(is_valid_key(&cleaned));
        }
    }
}
