//! Kahn's algorithm over a prebuilt [`Adjacency`].
//!
//! The scheduler keeps one remaining-prerequisite counter per vertex and never
//! rewrites the adjacency lists themselves. Each occurrence of an edge counts
//! once, so duplicate edges are honoured rather than collapsed, and a vertex
//! listing itself as a neighbour can never be released.
//!
//! ### Complexity
//! | Phase | Cost |
//! |-------|------|
//! | counting prerequisites | \(O(n + m)\) |
//! | draining the frontier | \(O(n + m)\) |

use std::collections::VecDeque;

use super::adjacency::{Adjacency, Parts};
use crate::config::{SortOptions, TieBreak};
use crate::error::{Result, SortError};

mod math_assert;

/// Vertices whose prerequisites are all emitted.
#[derive(Debug)]
struct Frontier {
    queue: VecDeque<usize>,
    tie_break: TieBreak,
}

impl Frontier {
    fn new(tie_break: TieBreak) -> Self {
        Self {
            queue: VecDeque::new(),
            tie_break,
        }
    }

    fn push(&mut self, v: usize) {
        self.queue.push_back(v);
    }

    fn pop(&mut self) -> Option<usize> {
        match self.tie_break {
            TieBreak::Fifo => self.queue.pop_front(),
            TieBreak::Lifo => self.queue.pop_back(),
        }
    }
}

/// Orders every key of `adjacency`, calling `action` as each vertex is emitted.
///
/// With `options.flip_edges == false` the edge set of `v` lists its
/// prerequisites; flipped, it lists its dependents. `action` runs exactly once
/// per emitted vertex, in output order. When a cycle is found `action` has
/// already run for the vertices emitted before it, but no order is returned.
///
/// # Errors
/// `SortError::CyclicGraph` listing every key left with unresolved prerequisites.
pub fn schedule<V, A>(adjacency: Adjacency<V>, options: &SortOptions, mut action: A) -> Result<Vec<V>, V>
where
    A: FnMut(&V),
{
    let Parts {
        vertices,
        outgoing,
        incoming,
        member,
        keys,
    } = adjacency.into_parts();

    let (prerequisites, dependents) = if options.flip_edges {
        (&incoming, &outgoing)
    } else {
        (&outgoing, &incoming)
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = keys.len(),
        flip_edges = options.flip_edges,
        tie_break = ?options.tie_break,
        "scheduling"
    );

    let mut remaining = vec![0usize; vertices.len()];
    let mut frontier = Frontier::new(options.tie_break);
    for &v in &keys {
        remaining[v] = prerequisites[v].iter().filter(|&&p| member[p]).count();
        if remaining[v] == 0 {
            frontier.push(v);
        }
    }

    let mut order = Vec::with_capacity(keys.len());
    while let Some(v) = frontier.pop() {
        action(&vertices[v]);
        order.push(v);

        for &d in &dependents[v] {
            if !member[d] {
                continue;
            }
            remaining[d] -= 1;
            if remaining[d] == 0 {
                frontier.push(d);
            }
        }
    }

    let mut slots: Vec<Option<V>> = vertices.into_iter().map(Some).collect();

    if order.len() < keys.len() {
        let unresolved: Vec<V> = keys
            .iter()
            .filter(|&&v| remaining[v] > 0)
            .filter_map(|&v| slots[v].take())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            emitted = order.len(),
            unresolved = unresolved.len(),
            "cycle detected"
        );

        return Err(SortError::cycle(unresolved));
    }

    #[cfg(debug_assertions)]
    math_assert::validate_order(&order, prerequisites, &member, keys.len());

    #[cfg(feature = "tracing")]
    tracing::debug!(emitted = order.len(), "schedule complete");

    Ok(order.iter().filter_map(|&v| slots[v].take()).collect())
}
