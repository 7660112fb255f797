//! Sorting options.
//!
//! Options are plain data so they can be embedded in larger configuration
//! documents; every field has a default and may be omitted when deserializing.

use serde::{Deserialize, Serialize};

/// Order in which frontier vertices of equal standing are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Queue: the frontier is drained in discovery order.
    #[default]
    Fifo,
    /// Stack: the most recently discovered vertex is emitted first.
    Lifo,
}

/// Treatment of neighbours that appear in an edge set but were never enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// Edges naming a vertex outside the input are dropped.
    #[default]
    Ignore,
    /// The first such vertex fails the call with `SortError::UnknownVertex`.
    Reject,
}

/// Options controlling a single sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// When false, the edge set of `v` lists what `v` depends on.
    /// When true, it lists the vertices that depend on `v`.
    pub flip_edges: bool,
    /// Frontier discipline.
    pub tie_break: TieBreak,
    /// Handling of neighbours outside the vertex set.
    pub dangling: DanglingPolicy,
}

impl SortOptions {
    /// Options with the edge direction flipped.
    pub fn flipped() -> Self {
        Self {
            flip_edges: true,
            ..Self::default()
        }
    }

    /// Sets the edge direction.
    #[must_use]
    pub fn with_flip_edges(mut self, flip_edges: bool) -> Self {
        self.flip_edges = flip_edges;
        self
    }

    /// Sets the frontier discipline.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the dangling-neighbour policy.
    #[must_use]
    pub fn with_dangling(mut self, dangling: DanglingPolicy) -> Self {
        self.dangling = dangling;
        self
    }

    /// Parses options from a JSON object. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error on malformed input.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_dependency_direction_fifo_and_ignore() {
        let opts = SortOptions::default();
        assert!(!opts.flip_edges);
        assert_eq!(opts.tie_break, TieBreak::Fifo);
        assert_eq!(opts.dangling, DanglingPolicy::Ignore);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let opts = SortOptions::from_json(r#"{ "tie_break": "lifo" }"#).unwrap();
        assert_eq!(opts, SortOptions::default().with_tie_break(TieBreak::Lifo));

        let opts = SortOptions::from_json(r#"{ "flip_edges": true, "dangling": "reject" }"#).unwrap();
        assert!(opts.flip_edges);
        assert_eq!(opts.dangling, DanglingPolicy::Reject);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(SortOptions::from_json(r#"{ "tie_break": "random" }"#).is_err());
    }
}
