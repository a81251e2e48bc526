//! Property-based tests for the Kruskal spanning forest builder.
//!
//! Small generated graphs (at most eight vertices) are checked against an
//! exhaustive brute-force search over edge subsets, alongside structural
//! invariants (acyclicity, `V - C` edge count) and run-to-run determinism.

mod oracle;
mod strategies;
mod types;
