//! Incoming/outgoing adjacency built in a single walk over the vertices.
//!
//! Vertices are interned to dense indices on first sight, whether enumerated or
//! merely named as a neighbour. Only enumerated vertices that survive the filter
//! become keys: the authoritative vertex set handed to the scheduler.
//!
//! A filtered vertex is not a key, yet its edge set is still recorded into its
//! neighbours' incoming lists. The scheduler ignores list entries naming non-keys,
//! so neither filtered nor dangling vertices hold anyone back.

use std::collections::HashMap;
use std::hash::Hash;

use super::edges::EdgeSource;
use crate::config::DanglingPolicy;
use crate::error::{Result, SortError};

/// Both directions of the edge relation, keyed by dense vertex index.
///
/// `outgoing[v]` is the edge set fetched for `v`; `incoming[n]` lists every
/// enumerated vertex whose edge set named `n`, once per occurrence.
#[derive(Debug, Clone)]
pub struct Adjacency<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
    enumerated: Vec<bool>,
    member: Vec<bool>,
    keys: Vec<usize>,
    filtered: Vec<usize>,
}

impl<V> Adjacency<V>
where
    V: Eq + Hash + Clone,
{
    /// Walks `nodes` once, pulling one edge set per vertex from `edges`.
    ///
    /// `filter` is called after each fetch; returning `true` excludes that vertex
    /// from the output. Dangling neighbours are kept for inspection and
    /// can be rejected afterwards with [`Adjacency::check_dangling`].
    ///
    /// # Errors
    /// Any error from resolving or pulling the edge source, or
    /// `SortError::DuplicateVertex` if a vertex is enumerated twice.
    pub fn build<'a, I, F>(nodes: I, edges: EdgeSource<'a, V>, mut filter: F) -> Result<Self, V>
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> bool,
    {
        let mut cursor = edges.into_cursor()?;
        let nodes = nodes.into_iter();
        let mut adj = Self::with_capacity(nodes.size_hint().0);

        for (position, vertex) in nodes.enumerate() {
            let set = cursor.next_edge_set(position, &vertex)?;
            let excluded = filter(&vertex);

            let source = adj.intern(&vertex);
            if adj.enumerated[source] {
                return Err(SortError::DuplicateVertex { vertex, position });
            }
            adj.enumerated[source] = true;

            let targets: Vec<usize> = set.iter().map(|n| adj.intern(n)).collect();
            for &t in &targets {
                adj.incoming[t].push(source);
            }

            if excluded {
                adj.filtered.push(source);
            } else {
                adj.outgoing[source] = targets;
                adj.member[source] = true;
                adj.keys.push(source);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            keys = adj.keys.len(),
            filtered = adj.filtered.len(),
            dangling = adj.dangling().count(),
            "adjacency built"
        );

        Ok(adj)
    }

    /// Applies the dangling-neighbour policy.
    ///
    /// # Errors
    /// `SortError::UnknownVertex` for the first dangling vertex under `Reject`.
    pub fn check_dangling(&self, policy: DanglingPolicy) -> Result<(), V> {
        match policy {
            DanglingPolicy::Ignore => Ok(()),
            DanglingPolicy::Reject => match self.dangling().next() {
                Some(vertex) => Err(SortError::UnknownVertex {
                    vertex: vertex.clone(),
                }),
                None => Ok(()),
            },
        }
    }

    /// Outgoing edge set of `vertex`, if it is a key.
    pub fn outgoing(&self, vertex: &V) -> Option<impl Iterator<Item = &V> + '_> {
        let &i = self.index.get(vertex)?;
        self.member[i]
            .then(|| self.outgoing[i].iter().map(move |&t| &self.vertices[t]))
    }

    /// Vertices whose edge sets named `vertex`, including filtered ones.
    pub fn incoming(&self, vertex: &V) -> Option<impl Iterator<Item = &V> + '_> {
        let &i = self.index.get(vertex)?;
        Some(self.incoming[i].iter().map(move |&s| &self.vertices[s]))
    }

    /// Whether `vertex` will be scheduled.
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.get(vertex).is_some_and(|&i| self.member[i])
    }

    fn intern(&mut self, vertex: &V) -> usize {
        if let Some(&i) = self.index.get(vertex) {
            return i;
        }
        let i = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.index.insert(vertex.clone(), i);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.enumerated.push(false);
        self.member.push(false);
        i
    }
}

impl<V> Adjacency<V> {
    fn with_capacity(n: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
            outgoing: Vec::with_capacity(n),
            incoming: Vec::with_capacity(n),
            enumerated: Vec::with_capacity(n),
            member: Vec::with_capacity(n),
            keys: Vec::with_capacity(n),
            filtered: Vec::new(),
        }
    }

    /// Number of vertices that will be scheduled.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if no vertex survived the walk.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Scheduled vertices in walk order.
    pub fn keys(&self) -> impl Iterator<Item = &V> + '_ {
        self.keys.iter().map(move |&i| &self.vertices[i])
    }

    /// Vertices excluded by the filter, in walk order.
    pub fn filtered(&self) -> impl Iterator<Item = &V> + '_ {
        self.filtered.iter().map(move |&i| &self.vertices[i])
    }

    /// Vertices named as neighbours but never enumerated, in first-seen order.
    pub fn dangling(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices
            .iter()
            .zip(&self.enumerated)
            .filter(|&(_, &seen)| !seen)
            .map(|(v, _)| v)
    }

    /// Splits into raw parts for the scheduler.
    pub(crate) fn into_parts(self) -> Parts<V> {
        Parts {
            vertices: self.vertices,
            outgoing: self.outgoing,
            incoming: self.incoming,
            member: self.member,
            keys: self.keys,
        }
    }
}

/// Index-level view consumed by the scheduler.
pub(crate) struct Parts<V> {
    pub vertices: Vec<V>,
    pub outgoing: Vec<Vec<usize>>,
    pub incoming: Vec<Vec<usize>>,
    pub member: Vec<bool>,
    pub keys: Vec<usize>,
}
