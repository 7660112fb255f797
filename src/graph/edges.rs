//! Edge-relation sources and the uniform pull cursor built from them.
//!
//! Callers describe "the neighbours of vertex `v`" in one of three shapes:
//!
//! - a positional sequence aligned with the vertex list (`EdgeSource::Aligned`),
//! - a function from vertex to edge set (`EdgeSource::Lookup`),
//! - a resumable producer yielding edge sets in vertex order (`EdgeSource::Producer`).
//!
//! The shape is resolved exactly once, before the first vertex is visited, into an
//! [`EdgeCursor`] whose single operation is [`EdgeCursor::next_edge_set`].

use std::collections::HashMap;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SortError};

/// Neighbours reachable from one vertex through one directed relation.
pub type EdgeSet<V> = Vec<V>;

/// A caller-supplied description of the edge relation.
pub enum EdgeSource<'a, V> {
    /// The k-th entry is the edge set of the k-th enumerated vertex.
    Aligned(Vec<EdgeSet<V>>),
    /// Computes the edge set of a vertex on demand.
    Lookup(Box<dyn FnMut(&V) -> EdgeSet<V> + 'a>),
    /// Yields edge sets in vertex order, possibly behind deferred indirection.
    Producer(Producer<'a, V>),
}

impl<'a, V> EdgeSource<'a, V> {
    /// Positional source from any nested iterable.
    pub fn aligned<I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = V>,
    {
        Self::Aligned(sets.into_iter().map(|s| s.into_iter().collect()).collect())
    }

    /// Function source.
    pub fn lookup<F>(f: F) -> Self
    where
        F: FnMut(&V) -> EdgeSet<V> + 'a,
    {
        Self::Lookup(Box::new(f))
    }

    /// Producer source over a live iterator.
    pub fn producer<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = EdgeSet<V>>,
        I::IntoIter: 'a,
    {
        Self::Producer(Producer::cursor(sets))
    }

    /// Resolves this source into its pull cursor.
    ///
    /// # Errors
    /// `SortError::UnsupportedEdgeSource` if a producer chain ends without a cursor.
    pub fn into_cursor(self) -> Result<EdgeCursor<'a, V>, V> {
        let pull = match self {
            Self::Aligned(sets) => Pull::Positional(sets.into_iter()),
            Self::Lookup(f) => Pull::Lookup(f),
            Self::Producer(p) => Pull::Stream(p.resolve()?),
        };
        Ok(EdgeCursor { pull })
    }
}

impl<V> EdgeSource<'static, V>
where
    V: DeserializeOwned + Eq + Hash + 'static,
{
    /// Classifies an untyped JSON edge descriptor.
    ///
    /// An array becomes a positional source, an object keyed by vertex becomes a
    /// lookup (absent keys have no neighbours). Anything else is rejected.
    ///
    /// # Errors
    /// `SortError::InvalidInput` for an unsupported shape or undecodable entries.
    pub fn from_json(value: Value) -> Result<Self, V> {
        match value {
            Value::Array(items) => {
                let sets = items
                    .into_iter()
                    .enumerate()
                    .map(|(k, item)| {
                        serde_json::from_value::<EdgeSet<V>>(item).map_err(|e| {
                            SortError::invalid_input(format!("edge set {k} is malformed: {e}"))
                        })
                    })
                    .collect::<Result<Vec<_>, V>>()?;
                Ok(Self::Aligned(sets))
            }
            Value::Object(map) => {
                let mut table: HashMap<V, EdgeSet<V>> =
                    serde_json::from_value(Value::Object(map)).map_err(|e| {
                        SortError::invalid_input(format!("edge table is malformed: {e}"))
                    })?;
                Ok(Self::lookup(move |v: &V| table.remove(v).unwrap_or_default()))
            }
            other => Err(SortError::invalid_input(format!(
                "expected an array of edge sets or an object keyed by vertex, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A resumable source of edge sets.
pub enum Producer<'a, V> {
    /// A live cursor.
    Cursor(Box<dyn Iterator<Item = EdgeSet<V>> + 'a>),
    /// A factory producing another producer when first used.
    Deferred(Box<dyn FnOnce() -> Producer<'a, V> + 'a>),
    /// A producer whose cursor has already been taken.
    Spent,
}

impl<'a, V> Producer<'a, V> {
    /// Wraps a live iterator.
    pub fn cursor<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = EdgeSet<V>>,
        I::IntoIter: 'a,
    {
        Self::Cursor(Box::new(sets.into_iter()))
    }

    /// Wraps a factory that is only invoked on resolution.
    pub fn deferred<F>(f: F) -> Self
    where
        F: FnOnce() -> Producer<'a, V> + 'a,
    {
        Self::Deferred(Box::new(f))
    }

    /// Moves the producer out, leaving `Spent` behind.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Spent)
    }

    /// Returns true if no cursor can be obtained from this producer without resolving it.
    pub fn is_spent(&self) -> bool {
        matches!(self, Self::Spent)
    }

    /// Follows deferred indirection down to a cursor.
    ///
    /// # Errors
    /// `SortError::UnsupportedEdgeSource` if the chain ends in `Spent`.
    pub fn resolve(self) -> Result<Box<dyn Iterator<Item = EdgeSet<V>> + 'a>, V> {
        let mut current = self;
        loop {
            current = match current {
                Self::Cursor(it) => return Ok(it),
                Self::Deferred(f) => f(),
                Self::Spent => return Err(SortError::UnsupportedEdgeSource),
            };
        }
    }
}

enum Pull<'a, V> {
    Positional(std::vec::IntoIter<EdgeSet<V>>),
    Lookup(Box<dyn FnMut(&V) -> EdgeSet<V> + 'a>),
    Stream(Box<dyn Iterator<Item = EdgeSet<V>> + 'a>),
}

/// Uniform pull interface over any resolved [`EdgeSource`].
pub struct EdgeCursor<'a, V> {
    pull: Pull<'a, V>,
}

impl<V> EdgeCursor<'_, V> {
    /// Fetches the edge set of `vertex`, the vertex at `position` in the walk.
    ///
    /// Positional and producer sources advance by one entry per call and ignore
    /// `vertex`; lookups ignore `position`.
    ///
    /// # Errors
    /// `SortError::EdgeSetMissing` if a positional or producer source is exhausted.
    pub fn next_edge_set(&mut self, position: usize, vertex: &V) -> Result<EdgeSet<V>, V> {
        let next = match &mut self.pull {
            Pull::Positional(sets) => sets.next(),
            Pull::Stream(sets) => sets.next(),
            Pull::Lookup(f) => Some(f(vertex)),
        };
        next.ok_or(SortError::EdgeSetMissing { position })
    }
}
