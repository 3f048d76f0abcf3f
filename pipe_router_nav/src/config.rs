// Router configuration.
//
// All tunable parameters for grid build and search live in `RouterConfig`,
// which deserializes from JSON with every field optional (missing fields
// take the `Default` value). The CLI loads it with `--config <file>` and
// lets individual flags override it.
//
// The A* heuristic is a selectable strategy rather than a constant. The
// default, `SquaredEuclidean`, reproduces the exploration order of the
// router this grid format comes from; it can overestimate remaining cost
// and therefore does not guarantee a shortest path once obstacles carve up
// the lattice. `Euclidean` is admissible and yields true shortest paths.
//
// See also: `pathfinding.rs` which consumes `heuristic`, `early_exit` and
// `max_expansions`; `grid.rs` which consumes `span` and `skip_penetrable`.

use crate::types::Point3;
use serde::{Deserialize, Serialize};

/// Distance estimate from a node to the goal, added to the accumulated
/// distance to order the A* frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    /// Squared straight-line distance. Not admissible.
    #[default]
    SquaredEuclidean,
    /// Straight-line distance. Admissible on every grid this crate builds.
    Euclidean,
    /// No estimate; the search degenerates to Dijkstra.
    Zero,
}

impl Heuristic {
    pub fn estimate(self, from: Point3, to: Point3) -> f64 {
        match self {
            Heuristic::SquaredEuclidean => from.distance_squared(to),
            Heuristic::Euclidean => from.distance(to),
            Heuristic::Zero => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Lattice spacing in world units. Must be positive.
    pub span: f64,
    pub heuristic: Heuristic,
    /// Stop as soon as the goal is popped from the frontier instead of
    /// draining it. Safe with an admissible heuristic; with
    /// `SquaredEuclidean` it may return a different (costlier) path.
    pub early_exit: bool,
    /// Ignore obstacles flagged `penetrable: true` when removing edges.
    pub skip_penetrable: bool,
    /// Abort the search with `PathError::SearchLimitExceeded` after this many
    /// node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            span: 1.0,
            heuristic: Heuristic::SquaredEuclidean,
            early_exit: false,
            skip_penetrable: false,
            max_expansions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_behavior() {
        let config = RouterConfig::default();
        assert_eq!(config.span, 1.0);
        assert_eq!(config.heuristic, Heuristic::SquaredEuclidean);
        assert!(!config.early_exit);
        assert!(!config.skip_penetrable);
        assert_eq!(config.max_expansions, None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "span": 1.7, "heuristic": "Euclidean" }"#;
        let config: RouterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.span, 1.7);
        assert_eq!(config.heuristic, Heuristic::Euclidean);
        assert!(!config.early_exit);
    }

    #[test]
    fn config_roundtrip_json() {
        let config = RouterConfig {
            span: 0.5,
            heuristic: Heuristic::Zero,
            early_exit: true,
            skip_penetrable: true,
            max_expansions: Some(1000),
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: RouterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn heuristic_estimates() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert_eq!(Heuristic::SquaredEuclidean.estimate(a, b), 25.0);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5.0);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0.0);
    }
}
