//! Disjoint-set union over arbitrary vertex labels.
//!
//! Labels are interned into a dense arena: each registered vertex owns one
//! slot in `parent`, and the label map only translates labels to slots. The
//! parent links therefore never form ownership cycles, and the invariant
//! that walking parents from any slot terminates at a root holds because a
//! union only ever re-points a root at another root.

use std::{collections::HashMap, sync::Arc};

use thiserror::Error;

use crate::{
    error::define_error_codes,
    graph::{Vertex, label},
};

/// Errors returned by [`DisjointSet`] lookups.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The vertex was never registered with [`DisjointSet::make_set`].
    #[error("vertex `{vertex}` is not registered in the disjoint set")]
    UnknownVertex {
        /// Rendered label of the unknown vertex.
        vertex: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The vertex was never registered.
        UnknownVertex => [UnknownVertex { .. }] => "DISJOINT_SET_UNKNOWN_VERTEX",
    }
}

/// Partition of vertices into connectivity classes with path compression.
///
/// Merging is deterministic: [`DisjointSet::union`] always attaches the root
/// of the first argument under the root of the second. No rank heuristic is
/// applied, which keeps the compressed shape reproducible for a given call
/// sequence.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// set.make_set(["a", "b", "c"]);
/// assert!(set.union(&"a", &"b")?);
/// assert!(!set.union(&"b", &"a")?);
/// assert_eq!(set.find(&"a")?, "b");
/// assert!(set.same_set(&"a", &"b")?);
/// assert!(!set.same_set(&"a", &"c")?);
/// assert_eq!(set.set_count(), 2);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<V> {
    slots: HashMap<V, usize>,
    labels: Vec<V>,
    parent: Vec<usize>,
    sets: usize,
}

impl<V> Default for DisjointSet<V> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            labels: Vec::new(),
            parent: Vec::new(),
            sets: 0,
        }
    }
}

impl<V: Vertex> DisjointSet<V> {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every vertex as a singleton class.
    ///
    /// Vertices that are already registered keep their current class, so
    /// calling this again with a superset only adds the new vertices.
    pub fn make_set<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in vertices {
            if self.slots.contains_key(&vertex) {
                continue;
            }
            let slot = self.labels.len();
            self.slots.insert(vertex.clone(), slot);
            self.labels.push(vertex);
            self.parent.push(slot);
            self.sets = self.sets.saturating_add(1);
        }
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when no vertex is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` when `vertex` has been registered.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.slots.contains_key(vertex)
    }

    /// Returns the number of disjoint classes.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the class containing `vertex`.
    ///
    /// Every slot visited on the way to the root is re-pointed directly at
    /// the root, so a second lookup reaches it in one step.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] when `vertex` was never
    /// registered.
    pub fn find(&mut self, vertex: &V) -> Result<V, DisjointSetError> {
        let slot = self.slot_of(vertex)?;
        let root = self.find_slot(slot);
        self.labels
            .get(root)
            .cloned()
            .ok_or_else(|| DisjointSetError::UnknownVertex {
                vertex: label(vertex),
            })
    }

    /// Merges the classes containing `left` and `right`.
    ///
    /// Returns `Ok(true)` when two classes were merged and `Ok(false)` when
    /// both vertices already shared a class.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] when either vertex was
    /// never registered.
    pub fn union(&mut self, left: &V, right: &V) -> Result<bool, DisjointSetError> {
        let left_slot = self.slot_of(left)?;
        let right_slot = self.slot_of(right)?;
        let left_root = self.find_slot(left_slot);
        let right_root = self.find_slot(right_slot);
        if left_root == right_root {
            return Ok(false);
        }
        if let Some(parent) = self.parent.get_mut(left_root) {
            *parent = right_root;
        }
        self.sets = self.sets.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when both vertices belong to the same class.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] when either vertex was
    /// never registered.
    pub fn same_set(&mut self, left: &V, right: &V) -> Result<bool, DisjointSetError> {
        let left_slot = self.slot_of(left)?;
        let right_slot = self.slot_of(right)?;
        Ok(self.find_slot(left_slot) == self.find_slot(right_slot))
    }

    fn slot_of(&self, vertex: &V) -> Result<usize, DisjointSetError> {
        self.slots
            .get(vertex)
            .copied()
            .ok_or_else(|| DisjointSetError::UnknownVertex {
                vertex: label(vertex),
            })
    }

    fn parent_of(&self, slot: usize) -> usize {
        self.parent.get(slot).copied().unwrap_or(slot)
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        loop {
            let parent = self.parent_of(root);
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = slot;
        while current != root {
            let next = self.parent_of(current);
            if let Some(parent) = self.parent.get_mut(current) {
                *parent = root;
            }
            current = next;
        }
        root
    }

    #[cfg(test)]
    fn depth(&self, vertex: &V) -> Option<usize> {
        let mut current = self.slots.get(vertex).copied()?;
        let mut depth = 0;
        loop {
            let parent = self.parent_of(current);
            if parent == current {
                return Some(depth);
            }
            depth += 1;
            current = parent;
        }
    }
}
