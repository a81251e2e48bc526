//! Depth-first cycle search and tree verification over parent edges.
//!
//! Both walks use an explicit stack, so input size is bounded by memory
//! rather than call depth.

use super::ParentEdge;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Parent edges indexed by parent label. Labels are `1..=vertex_count`;
/// slot `0` stays empty.
#[derive(Debug)]
pub(crate) struct ParentGraph<'a> {
    edges: &'a [ParentEdge],
    children: Vec<Vec<usize>>,
}

impl<'a> ParentGraph<'a> {
    /// Builds the graph. Every label must already be within range.
    pub(crate) fn new(edges: &'a [ParentEdge]) -> Self {
        let mut children = vec![Vec::new(); edges.len() + 1];
        for (position, edge) in edges.iter().enumerate() {
            if let Some(slot) = children.get_mut(edge.parent()) {
                slot.push(position);
            }
        }
        Self { edges, children }
    }

    fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    fn child_of(&self, position: usize) -> Option<usize> {
        self.edges.get(position).map(|edge| edge.child())
    }

    /// Returns the position of the edge that closes a directed cycle, or
    /// `None` when the graph is acyclic.
    ///
    /// Roots are tried in ascending label order and the search stops at the
    /// first closing edge. `excluded` names an edge position to ignore.
    pub(crate) fn cycle_closing_edge(&self, excluded: Option<usize>) -> Option<usize> {
        let mut marks = vec![Mark::Unvisited; self.vertex_count() + 1];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 1..=self.vertex_count() {
            if marks.get(start) != Some(&Mark::Unvisited) {
                continue;
            }
            set_mark(&mut marks, start, Mark::OnPath);
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (vertex, cursor) = *frame;
                let next = self
                    .children
                    .get(vertex)
                    .and_then(|positions| positions.get(cursor))
                    .copied();
                let Some(position) = next else {
                    set_mark(&mut marks, vertex, Mark::Done);
                    stack.pop();
                    continue;
                };
                frame.1 += 1;
                if excluded == Some(position) {
                    continue;
                }
                let Some(child) = self.child_of(position) else {
                    continue;
                };
                match marks.get(child) {
                    Some(Mark::OnPath) => return Some(position),
                    Some(Mark::Unvisited) => {
                        set_mark(&mut marks, child, Mark::OnPath);
                        stack.push((child, 0));
                    }
                    _ => {}
                }
            }
        }
        None
    }

    /// Returns `true` when dropping the edge at `removed` leaves a tree with
    /// a single root that reaches every vertex.
    pub(crate) fn is_rooted_tree_without(&self, removed: usize) -> bool {
        let vertex_count = self.vertex_count();
        let mut in_degree = vec![0_usize; vertex_count + 1];
        for (position, edge) in self.edges.iter().enumerate() {
            if position == removed {
                continue;
            }
            if let Some(degree) = in_degree.get_mut(edge.child()) {
                *degree += 1;
            }
        }
        if in_degree.iter().skip(1).any(|degree| *degree > 1) {
            return false;
        }
        let mut roots = (1..=vertex_count).filter(|vertex| in_degree.get(*vertex) == Some(&0));
        let (Some(root), None) = (roots.next(), roots.next()) else {
            return false;
        };

        let mut seen = vec![false; vertex_count + 1];
        let mut reached = 0_usize;
        let mut stack = vec![root];
        while let Some(vertex) = stack.pop() {
            match seen.get_mut(vertex) {
                Some(flag) if !*flag => *flag = true,
                _ => continue,
            }
            reached += 1;
            let positions = self.children.get(vertex).map(Vec::as_slice).unwrap_or_default();
            stack.extend(
                positions
                    .iter()
                    .filter(|position| **position != removed)
                    .filter_map(|position| self.child_of(*position)),
            );
        }
        reached == vertex_count
    }
}

fn set_mark(marks: &mut [Mark], vertex: usize, mark: Mark) {
    if let Some(slot) = marks.get_mut(vertex) {
        *slot = mark;
    }
}
