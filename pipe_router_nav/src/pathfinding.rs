// A* pathfinding over the navigation grid.
//
// Label-correcting best-first search using a `BinaryHeap` (min-heap via
// reversed ordering) keyed by `f = distance + heuristic(node, goal)`. Ties on
// `f` break on the lower node ID. Stale heap entries are skipped lazily: an
// entry whose recorded distance is worse than the node's current best is
// discarded on pop. A node improved after it was expanded is pushed again
// and re-expanded, since the default heuristic is not consistent.
//
// Per-search distances and parents live in a `SearchState` owned by the
// caller (or created per call), never on the graph, so any number of
// searches can share one `&Graph`. Each search resets its state first.
//
// By default the frontier is drained completely rather than stopping when
// the goal is first popped; `RouterConfig::early_exit` opts into stopping.
//
// See also: `grid.rs` for the `Graph` being searched, `config.rs` for the
// `Heuristic` strategy.
//
// **Critical constraint: determinism.** A search is a pure function of the
// graph, the endpoints and the config. Ordering uses `total_cmp` and node ID
// tie-breaks, so repeated calls return identical routes.

use crate::config::RouterConfig;
use crate::error::PathError;
use crate::grid::Graph;
use crate::types::{NodeId, Point3};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// The result of a successful search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Node IDs from start to goal, inclusive.
    pub nodes: Vec<NodeId>,
    /// World positions of `nodes`.
    pub points: Vec<Point3>,
    /// Sum of edge lengths along the route.
    pub total_distance: f64,
    /// Number of frontier entries expanded during the search.
    pub expansions: u64,
}

impl Route {
    /// Route points as `[x, y, z]` triples.
    pub fn point_arrays(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}

/// Per-search scratch: best known distance and predecessor for every node.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    distance: Vec<f64>,
    parent: Vec<Option<NodeId>>,
}

impl SearchState {
    pub fn new(node_count: usize) -> Self {
        Self {
            distance: vec![f64::INFINITY; node_count],
            parent: vec![None; node_count],
        }
    }

    /// Set every distance to infinity and every parent to none, resizing to
    /// `node_count`.
    pub fn reset(&mut self, node_count: usize) {
        self.distance.clear();
        self.distance.resize(node_count, f64::INFINITY);
        self.parent.clear();
        self.parent.resize(node_count, None);
    }

    /// Best known distance from the start, or infinity if unreached.
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distance
            .get(node.index())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node.index()).copied().flatten()
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }
}

/// Entry in the frontier (min-heap via reversed ordering).
struct OpenEntry {
    node: NodeId,
    f_score: f64,
    /// Distance the entry was pushed with; stale once the node improves.
    g_score: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap: smallest f_score is "greatest".
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.node.0.cmp(&self.node.0))
    }
}

/// Find a route from `start` to `end` with the default config.
pub fn find_path(graph: &Graph, start: NodeId, end: NodeId) -> Result<Route, PathError> {
    find_path_with_config(graph, start, end, &RouterConfig::default())
}

/// Find a route from `start` to `end`.
///
/// Returns `PathError::IndexOutOfRange` for an endpoint outside the graph,
/// `PathError::PathNotFound` when `end` is unreachable from `start`, and
/// `PathError::SearchLimitExceeded` when `config.max_expansions` runs out.
pub fn find_path_with_config(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    config: &RouterConfig,
) -> Result<Route, PathError> {
    let mut state = SearchState::default();
    let expansions = search(graph, start, end, config, &mut state)?;
    let nodes = reconstruct_path(&state, start, end)?;
    let points = nodes.iter().map(|&n| graph.position(n)).collect();
    Ok(Route {
        nodes,
        points,
        total_distance: state.distance(end),
        expansions,
    })
}

/// Snap two world points to their nearest nodes and route between them.
pub fn find_path_between_points(
    graph: &Graph,
    from: Point3,
    to: Point3,
    config: &RouterConfig,
) -> Result<Route, PathError> {
    let start = graph.nearest_node(from).ok_or(PathError::EmptyGraph)?;
    let end = graph.nearest_node(to).ok_or(PathError::EmptyGraph)?;
    find_path_with_config(graph, start, end, config)
}

/// Run the search, filling `state` with distances and parents for every
/// node reached. Returns the number of expansions.
///
/// `state` is reset first, so one buffer can serve many searches. An
/// unreachable `end` is not an error here; it shows up as
/// `state.is_reached(end) == false`.
pub fn search(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    config: &RouterConfig,
    state: &mut SearchState,
) -> Result<u64, PathError> {
    let node_count = graph.node_count();
    for id in [start, end] {
        if !graph.contains_node(id) {
            return Err(PathError::IndexOutOfRange {
                index: id,
                node_count,
            });
        }
    }

    state.reset(node_count);
    let goal = graph.position(end);
    let heuristic = config.heuristic;

    state.distance[start.index()] = 0.0;
    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        node: start,
        f_score: heuristic.estimate(graph.position(start), goal),
        g_score: 0.0,
    });

    let mut expansions: u64 = 0;
    while let Some(current) = open.pop() {
        let ci = current.node.index();
        if current.g_score > state.distance[ci] {
            continue;
        }

        if let Some(limit) = config.max_expansions.filter(|&limit| expansions >= limit) {
            debug!(start = %start, end = %end, limit, "search expansion limit reached");
            return Err(PathError::SearchLimitExceeded { limit });
        }
        expansions += 1;

        if config.early_exit && current.node == end {
            break;
        }

        let current_g = current.g_score;
        for &edge_id in graph.incident_edges(current.node) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let neighbor = edge.other(current.node);
            let ni = neighbor.index();
            let candidate = current_g + edge.length;

            if candidate < state.distance[ni] {
                state.distance[ni] = candidate;
                state.parent[ni] = Some(current.node);
                open.push(OpenEntry {
                    node: neighbor,
                    f_score: candidate + heuristic.estimate(graph.position(neighbor), goal),
                    g_score: candidate,
                });
            }
        }
    }

    debug!(
        start = %start,
        end = %end,
        expansions,
        reached = state.is_reached(end),
        distance = state.distance(end),
        "search finished"
    );
    Ok(expansions)
}

/// Walk parent links from `end` back to `start`. Fails with `PathNotFound`
/// if `end` was never reached or the chain breaks before `start`.
pub fn reconstruct_path(
    state: &SearchState,
    start: NodeId,
    end: NodeId,
) -> Result<Vec<NodeId>, PathError> {
    let not_found = PathError::PathNotFound { start, end };
    if !state.is_reached(end) {
        return Err(not_found);
    }

    let mut nodes = vec![end];
    let mut current = end;
    while current != start {
        current = state.parent(current).ok_or_else(|| not_found.clone())?;
        nodes.push(current);
        // A parent chain longer than the node count must contain a cycle.
        if nodes.len() > state.distance.len() {
            return Err(not_found);
        }
    }
    nodes.reverse();
    Ok(nodes)
}
