//! Topological ordering of caller-described graphs.
//!
//! Two layers, leaf first:
//! - `edges` / `adjacency`: normalize the edge description and build both
//!   directions of the relation in one walk over the vertices
//! - `kahn`: fixed-point elimination over the built adjacency
//!
//! [`toposort`] and [`toposort_with`] run both layers in one call.

pub mod adjacency;
pub mod edges;
pub mod kahn;

use std::hash::Hash;

pub use adjacency::Adjacency;
pub use edges::{EdgeCursor, EdgeSet, EdgeSource, Producer};
pub use kahn::schedule;

use crate::config::SortOptions;
use crate::error::Result;

/// Sorts `nodes` so that every vertex follows the vertices in its edge set.
///
/// Uses [`SortOptions::default`], no filter and no action.
///
/// # Errors
/// See [`toposort_with`].
pub fn toposort<V, I>(nodes: I, edges: EdgeSource<'_, V>) -> Result<Vec<V>, V>
where
    V: Eq + Hash + Clone,
    I: IntoIterator<Item = V>,
{
    toposort_with(nodes, edges, &SortOptions::default(), |_| false, |_| {})
}

/// Sorts `nodes` with explicit options, filter and per-vertex action.
///
/// `filter` returning `true` drops a vertex from the output. `action` runs once
/// for each vertex as it is appended to the order.
///
/// # Errors
/// - `InvalidInput`, `UnsupportedEdgeSource` or `EdgeSetMissing` from the edge source
/// - `DuplicateVertex` if `nodes` repeats a vertex
/// - `UnknownVertex` for a dangling neighbour under `DanglingPolicy::Reject`
/// - `CyclicGraph` if no complete order exists
pub fn toposort_with<V, I, F, A>(
    nodes: I,
    edges: EdgeSource<'_, V>,
    options: &SortOptions,
    filter: F,
    action: A,
) -> Result<Vec<V>, V>
where
    V: Eq + Hash + Clone,
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> bool,
    A: FnMut(&V),
{
    let adjacency = Adjacency::build(nodes, edges, filter)?;
    adjacency.check_dangling(options.dangling)?;
    schedule(adjacency, options, action)
}
