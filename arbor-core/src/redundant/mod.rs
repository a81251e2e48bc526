//! Redundant parent-edge resolution for "rooted tree plus one edge" inputs.
//!
//! The input is `n` directed `[parent, child]` edges over the labels
//! `1..=n`. A valid instance is a rooted tree with exactly one extra edge,
//! which shows up as a vertex with two parents, a directed cycle, or both.
//! The resolver names the single edge whose removal restores the tree:
//!
//! - two parents and no cycle: the second parent edge;
//! - two parents and a cycle: the first parent edge when it lies on the
//!   cycle, otherwise the second parent edge;
//! - a cycle only: the edge that closes the cycle in a depth-first search
//!   started from each unvisited label in ascending order.

mod search;

use std::{collections::HashSet, fmt};

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::{
    error::define_error_codes,
    observer::{ResolverObserver, Silent},
};

use self::search::ParentGraph;

/// Directed `[parent, child]` edge between integer labels.
///
/// # Examples
/// ```
/// use arbor_core::ParentEdge;
///
/// let edge = ParentEdge::from([2, 3]);
/// assert_eq!(edge.parent(), 2);
/// assert_eq!(edge.child(), 3);
/// assert_eq!(edge.to_string(), "[2, 3]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParentEdge {
    parent: usize,
    child: usize,
}

impl ParentEdge {
    /// Creates an edge pointing from `parent` to `child`.
    #[must_use]
    pub const fn new(parent: usize, child: usize) -> Self {
        Self { parent, child }
    }

    /// Returns the parent label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the child label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> usize { self.child }
}

impl From<[usize; 2]> for ParentEdge {
    fn from([parent, child]: [usize; 2]) -> Self {
        Self::new(parent, child)
    }
}

impl From<(usize, usize)> for ParentEdge {
    fn from((parent, child): (usize, usize)) -> Self {
        Self::new(parent, child)
    }
}

impl fmt::Display for ParentEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.parent, self.child)
    }
}

/// Ways an edge list can fail to be a "tree plus one edge" instance.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MalformedInput {
    /// No edges were supplied.
    #[error("edge list is empty")]
    Empty,
    /// A label lies outside `1..=vertex_count`.
    #[error("label {label} is outside 1..={vertex_count}")]
    LabelOutOfRange {
        /// Offending label.
        label: usize,
        /// Number of vertices implied by the edge count.
        vertex_count: usize,
    },
    /// The same `[parent, child]` edge appears twice.
    #[error("edge {edge} appears more than once")]
    DuplicateEdge {
        /// Repeated edge.
        edge: ParentEdge,
    },
    /// A vertex has three or more parents.
    #[error("vertex {child} has more than two parents")]
    TooManyParents {
        /// Vertex with the excess parents.
        child: usize,
    },
    /// More than one vertex has two parents.
    #[error("vertices {first} and {second} both have two parents")]
    MultipleTwoParentVertices {
        /// First vertex found with two parents.
        first: usize,
        /// Second vertex found with two parents.
        second: usize,
    },
    /// No single removal leaves a rooted tree over every vertex.
    #[error("removing {edge} does not leave a rooted tree")]
    NotTreePlusOneEdge {
        /// Edge chosen by the defect policy.
        edge: ParentEdge,
    },
}

/// Errors returned by the redundant-edge resolver.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum RedundantEdgeError {
    /// The input does not have the expected shape.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What is wrong with the input.
        reason: MalformedInput,
    },
    /// The input has neither a two-parents nor a cycle defect.
    #[error("input has neither a vertex with two parents nor a directed cycle")]
    NoValidDefectFound,
}

define_error_codes! {
    /// Stable codes describing [`RedundantEdgeError`] variants.
    enum RedundantEdgeErrorCode for RedundantEdgeError {
        /// The input is not a "tree plus one edge" instance.
        MalformedInput => [MalformedInput { .. }] => "REDUNDANT_EDGE_MALFORMED_INPUT",
        /// Neither defect was detected.
        NoValidDefectFound => [NoValidDefectFound] => "REDUNDANT_EDGE_NO_VALID_DEFECT",
    }
}

impl From<MalformedInput> for RedundantEdgeError {
    fn from(reason: MalformedInput) -> Self {
        Self::MalformedInput { reason }
    }
}

/// Which defect selected the removed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    /// A vertex had two parents and there was no cycle.
    SecondParent,
    /// A vertex had two parents and the first parent edge lies on the cycle.
    FirstParentOnCycle,
    /// A vertex had two parents and the cycle runs through the second
    /// parent edge.
    SecondParentOnCycle,
    /// Every vertex had one parent; the edge closes the cycle.
    CycleClosing,
}

impl RemovalReason {
    /// Returns a stable snake-case name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecondParent => "second_parent",
            Self::FirstParentOnCycle => "first_parent_on_cycle",
            Self::SecondParentOnCycle => "second_parent_on_cycle",
            Self::CycleClosing => "cycle_closing",
        }
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The edge to remove, where it sits in the input and why it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    edge: ParentEdge,
    position: usize,
    reason: RemovalReason,
}

impl Resolution {
    /// Returns the edge to remove.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> ParentEdge { self.edge }

    /// Returns the zero-based index of the edge in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> usize { self.position }

    /// Returns the defect that selected the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn reason(&self) -> RemovalReason { self.reason }
}

#[derive(Clone, Copy, Debug)]
struct TwoParents {
    first: usize,
    second: usize,
}

/// Returns the edge whose removal turns `edges` back into a rooted tree.
///
/// # Errors
/// See [`resolve`].
///
/// # Examples
/// ```
/// use arbor_core::{ParentEdge, find_redundant_edge};
///
/// let edges = [[1, 2], [1, 3], [2, 3]].map(ParentEdge::from);
/// assert_eq!(find_redundant_edge(&edges)?, ParentEdge::new(2, 3));
/// # Ok::<(), arbor_core::RedundantEdgeError>(())
/// ```
pub fn find_redundant_edge(edges: &[ParentEdge]) -> Result<ParentEdge, RedundantEdgeError> {
    resolve(edges).map(|resolution| resolution.edge)
}

/// Resolves the redundant edge and reports why it was chosen.
///
/// # Errors
/// - [`RedundantEdgeError::MalformedInput`] when the list is empty, a label
///   lies outside `1..=n`, an edge repeats, a vertex has three parents, two
///   vertices have two parents, or no single removal restores a tree.
/// - [`RedundantEdgeError::NoValidDefectFound`] when neither defect exists.
pub fn resolve(edges: &[ParentEdge]) -> Result<Resolution, RedundantEdgeError> {
    resolve_observed(edges, &mut Silent)
}

/// Resolves the redundant edge, reporting each scanned edge and each
/// detected defect to `observer`.
///
/// # Errors
/// Same conditions as [`resolve`].
#[instrument(name = "redundant.resolve", skip_all, fields(edges = edges.len()))]
pub fn resolve_observed<O>(
    edges: &[ParentEdge],
    observer: &mut O,
) -> Result<Resolution, RedundantEdgeError>
where
    O: ResolverObserver + ?Sized,
{
    let two_parents = scan(edges, observer).inspect_err(|reason| {
        warn!(%reason, "redundant edge input rejected");
    })?;

    let graph = ParentGraph::new(edges);
    let closing = graph.cycle_closing_edge(None);
    if let Some(edge) = closing.and_then(|position| edges.get(position)) {
        observer.cycle_found(*edge);
    }

    let (position, reason) = match (two_parents, closing) {
        (Some(TwoParents { second, .. }), None) => (second, RemovalReason::SecondParent),
        (Some(TwoParents { first, second }), Some(_)) => {
            if graph.cycle_closing_edge(Some(second)).is_some() {
                (first, RemovalReason::FirstParentOnCycle)
            } else {
                (second, RemovalReason::SecondParentOnCycle)
            }
        }
        (None, Some(closing)) => (closing, RemovalReason::CycleClosing),
        (None, None) => {
            warn!("no vertex with two parents and no directed cycle");
            return Err(RedundantEdgeError::NoValidDefectFound);
        }
    };
    let Some(edge) = edges.get(position).copied() else {
        return Err(RedundantEdgeError::NoValidDefectFound);
    };

    if !graph.is_rooted_tree_without(position) {
        let reason = MalformedInput::NotTreePlusOneEdge { edge };
        warn!(%reason, "redundant edge input rejected");
        return Err(reason.into());
    }

    info!(edge = %edge, position, reason = %reason, "redundant edge resolved");
    Ok(Resolution {
        edge,
        position,
        reason,
    })
}

/// Validates labels and uniqueness, tracking the vertex with two parents.
fn scan<O>(edges: &[ParentEdge], observer: &mut O) -> Result<Option<TwoParents>, MalformedInput>
where
    O: ResolverObserver + ?Sized,
{
    let vertex_count = edges.len();
    if vertex_count == 0 {
        return Err(MalformedInput::Empty);
    }

    let mut seen = HashSet::with_capacity(vertex_count);
    let mut first_parent: Vec<Option<usize>> = vec![None; vertex_count + 1];
    let mut two_parents: Option<(usize, TwoParents)> = None;

    for (position, edge) in edges.iter().enumerate() {
        for label in [edge.parent, edge.child] {
            if !(1..=vertex_count).contains(&label) {
                return Err(MalformedInput::LabelOutOfRange {
                    label,
                    vertex_count,
                });
            }
        }
        if !seen.insert(*edge) {
            return Err(MalformedInput::DuplicateEdge { edge: *edge });
        }
        observer.edge_added(*edge);

        let Some(slot) = first_parent.get_mut(edge.child) else {
            continue;
        };
        let Some(first) = *slot else {
            *slot = Some(position);
            continue;
        };
        match two_parents {
            Some((child, _)) if child == edge.child => {
                return Err(MalformedInput::TooManyParents { child });
            }
            Some((child, _)) => {
                return Err(MalformedInput::MultipleTwoParentVertices {
                    first: child,
                    second: edge.child,
                });
            }
            None => {
                two_parents = Some((
                    edge.child,
                    TwoParents {
                        first,
                        second: position,
                    },
                ));
                if let Some(first_edge) = edges.get(first) {
                    observer.two_parents_found(*first_edge, *edge);
                }
            }
        }
    }
    Ok(two_parents.map(|(_, defect)| defect))
}


#[cfg(test)]
mod property;
