//! # `topsort` - Kahn topological ordering
//!
//! Orders a set of vertices so that every directed edge is respected, or
//! reports that the graph has a cycle.
//!
//! ## Architecture
//!
//! 1. **Edge-relation adapter** (`graph::edges`, `graph::adjacency`):
//!    - Accepts a positional sequence, a lookup function, or a resumable producer
//!    - Resolves the shape once into a single pull cursor
//!    - Applies an optional vertex filter while building incoming and outgoing lists
//!
//! 2. **Kahn scheduler** (`graph::kahn`):
//!    - Index-based remaining-prerequisite counters
//!    - Configurable frontier discipline (FIFO or LIFO)
//!    - Fails with the unresolved vertex set when a cycle blocks progress
//!
//! ## Guarantees
//!
//! - The output contains every non-filtered vertex exactly once.
//! - Each retained edge is respected in the chosen direction.
//! - Duplicate edges count once per occurrence; self loops are cycles.
//! - Either a complete order or an error is returned, never a prefix.
//!
//! ## Example
//!
//! ```rust
//! use topsort::{toposort, EdgeSource};
//!
//! // B depends on A, C depends on A and B.
//! let edges = EdgeSource::aligned(vec![vec![], vec!["A"], vec!["A", "B"]]);
//! let order = toposort(["A", "B", "C"], edges).unwrap();
//! assert_eq!(order, vec!["A", "B", "C"]);
//! ```
//!
//! Enable the `tracing` feature to emit `tracing` events from the adapter and
//! the scheduler.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{DanglingPolicy, SortOptions, TieBreak};
pub use error::{Result, SortError};
pub use graph::{toposort, toposort_with, Adjacency, EdgeSource, Producer};
