// Navigation grid for pipe routing.
//
// The grid is a 3D lattice of `Node`s (points a pipe may pass through)
// connected by `Edge`s (straight or diagonal moves between neighboring
// lattice points). It is built over a room by `build_nav_grid()`, which
// lays out the lattice with `build_grid()` and then deletes every edge whose
// segment touches an obstacle box. `pathfinding.rs` searches the result.
//
// Storage is an index-stable arena: nodes and edges live in `Vec`s addressed
// by `NodeId`/`EdgeId`. Removing an edge leaves a tombstone in the edge arena
// and drops the ID from both endpoints' incident lists; IDs are never reused
// or resurrected. No `HashMap`.
//
// Lattice coordinates map to world space through one function,
// `Graph::lattice_to_world()`: scale by span, translate by the room origin,
// then shift by half the slack left over when the room extents are not a
// multiple of the span. Every position in the graph comes from it.
//
// **Critical constraint: determinism.** Nodes are created in z-outer,
// y-middle, x-inner order and edge IDs in creation order, so a rebuild from
// the same inputs produces identical IDs, positions and surviving edges.

use crate::config::RouterConfig;
use crate::error::GridError;
use crate::export::LineSegment;
use crate::obstacle::BBox;
use crate::types::{EdgeId, GridDims, LatticeCoord, NodeId, Point3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f64::consts::SQRT_2;
use tracing::{debug, warn};

/// Upper bound on incident edges per node: nine relations to earlier
/// neighbors plus their nine mirrors from later ones.
const MAX_INCIDENT_EDGES: usize = 18;

/// A lattice point in the grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub lattice: LatticeCoord,
    pub position: Point3,
    /// Surviving edges touching this node, in creation order.
    pub edges: SmallVec<[EdgeId; MAX_INCIDENT_EDGES]>,
}

/// An undirected move between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    /// `[created_at, earlier_neighbor]`: the node being visited when the
    /// edge was created comes first.
    pub nodes: [NodeId; 2],
    /// Movement cost: `span` for straight moves, `span * sqrt(2)` for
    /// diagonals.
    pub length: f64,
}

impl Edge {
    /// The endpoint that is not `node`. For a node not on this edge the
    /// first endpoint is returned.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.nodes[0] == node {
            self.nodes[1]
        } else {
            self.nodes[0]
        }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.nodes[0] == node || self.nodes[1] == node
    }
}

/// The grid container: node and edge arenas plus the lattice parameters
/// needed to map IDs back to coordinates.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Tombstones, indexed by `EdgeId`.
    removed: Vec<bool>,
    live_edge_count: usize,
    dims: GridDims,
    frame: LatticeFrame,
}

/// Scale and translation from lattice coordinates to world space.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LatticeFrame {
    span: f64,
    origin: Point3,
    /// Half of the slack between the room extents and the lattice extents.
    centering: Point3,
}

impl LatticeFrame {
    /// Order matters: scale, then add the origin, then the centering shift.
    fn to_world(self, coord: LatticeCoord) -> Point3 {
        let scaled = Point3::new(coord.x as f64, coord.y as f64, coord.z as f64) * self.span;
        scaled + self.origin + self.centering
    }
}

impl Graph {
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn span(&self) -> f64 {
        self.frame.span
    }

    pub fn origin(&self) -> Point3 {
        self.frame.origin
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of surviving edges.
    pub fn edge_count(&self) -> usize {
        self.live_edge_count
    }

    /// Number of edges ever created, including removed ones. Every `EdgeId`
    /// of this build is below it.
    pub fn edge_capacity(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get a node by ID. Panics on an out-of-range ID.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a surviving edge by ID. `None` if it was removed or never existed.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        match self.removed.get(id.index()) {
            Some(false) => Some(&self.edges[id.index()]),
            _ => None,
        }
    }

    /// Surviving edges in ascending ID order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .zip(&self.removed)
            .filter(|(_, removed)| !**removed)
            .map(|(e, _)| e)
    }

    /// Surviving edges touching a node.
    pub fn incident_edges(&self, id: NodeId) -> &[EdgeId] {
        &self.nodes[id.index()].edges
    }

    /// World position of a lattice coordinate. The single source of truth
    /// for every node position in the graph.
    pub fn lattice_to_world(&self, coord: LatticeCoord) -> Point3 {
        self.frame.to_world(coord)
    }

    pub fn position(&self, id: NodeId) -> Point3 {
        self.nodes[id.index()].position
    }

    /// Node nearest to a world point by Euclidean distance. Ties resolve to
    /// the lowest ID. Returns `None` for an empty graph.
    pub fn nearest_node(&self, point: Point3) -> Option<NodeId> {
        self.nodes
            .iter()
            .min_by(|a, b| {
                a.position
                    .distance_squared(point)
                    .total_cmp(&b.position.distance_squared(point))
            })
            .map(|n| n.id)
    }

    /// Surviving edges as drawable world-space segments.
    pub fn edge_segments(&self) -> Vec<LineSegment> {
        self.edges()
            .map(|e| LineSegment::new(self.position(e.nodes[0]), self.position(e.nodes[1])))
            .collect()
    }

    fn add_node(&mut self, lattice: LatticeCoord) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            lattice,
            position: Point3::ORIGIN,
            edges: SmallVec::new(),
        });
        id
    }

    /// Connect two existing nodes. The new edge's ID is the current length
    /// of the edge arena.
    fn add_edge(&mut self, from: NodeId, to: NodeId, length: f64) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            nodes: [from, to],
            length,
        });
        self.removed.push(false);
        self.live_edge_count += 1;
        self.nodes[from.index()].edges.push(id);
        self.nodes[to.index()].edges.push(id);
        id
    }

    /// Remove an edge from the graph and from both endpoints. Returns `false`
    /// if the edge was already removed or never existed.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        match self.removed.get(id.index()) {
            Some(false) => {}
            _ => return false,
        }
        self.removed[id.index()] = true;
        self.live_edge_count -= 1;
        let [a, b] = self.edges[id.index()].nodes;
        self.nodes[a.index()].edges.retain(|e| *e != id);
        self.nodes[b.index()].edges.retain(|e| *e != id);
        true
    }

    /// Remove every edge whose segment touches any of `obstacles`. Returns
    /// the number of edges removed.
    ///
    /// Blocked edges are collected in ID order before any removal, so the
    /// result does not depend on obstacle order.
    pub fn remove_blocked_edges<'a, I>(&mut self, obstacles: I) -> usize
    where
        I: IntoIterator<Item = &'a BBox>,
    {
        let blocking: Vec<&BBox> = obstacles
            .into_iter()
            .filter(|b| {
                if b.is_degenerate() {
                    warn!(
                        x = b.x,
                        y = b.y,
                        z = b.z,
                        "ignoring obstacle with non-positive extents"
                    );
                    false
                } else {
                    true
                }
            })
            .collect();
        if blocking.is_empty() {
            return 0;
        }

        let doomed: Vec<EdgeId> = self
            .edges()
            .filter(|e| {
                let start = self.position(e.nodes[0]);
                let end = self.position(e.nodes[1]);
                blocking.iter().any(|b| b.segment_intersects(start, end))
            })
            .map(|e| e.id)
            .collect();

        for &id in &doomed {
            self.remove_edge(id);
        }
        debug!(
            removed = doomed.len(),
            remaining = self.live_edge_count,
            obstacles = blocking.len(),
            "removed edges blocked by obstacles"
        );
        doomed.len()
    }
}

/// One backward-neighbor relation: the lattice offset to an already-created
/// neighbor and whether the move is a diagonal.
struct NeighborRule {
    dx: i32,
    dy: i32,
    dz: i32,
    diagonal: bool,
}

const fn rule(dx: i32, dy: i32, dz: i32, diagonal: bool) -> NeighborRule {
    NeighborRule {
        dx,
        dy,
        dz,
        diagonal,
    }
}

/// Neighbors each node connects to when it is created, in edge-creation
/// order. Every offset points at a node earlier in z/y/x visit order, so
/// each neighboring pair is connected exactly once. Only planar diagonals
/// appear; there are no space-diagonal (`span * sqrt(3)`) moves.
const BACKWARD_NEIGHBORS: [NeighborRule; 9] = [
    rule(-1, 0, 0, false),
    rule(0, -1, 0, false),
    rule(1, -1, 0, true),
    rule(0, 0, -1, false),
    rule(1, 0, -1, true),
    rule(0, 1, -1, true),
    rule(-1, -1, 0, true),
    rule(-1, 0, -1, true),
    rule(0, -1, -1, true),
];

/// Build an obstacle-free lattice graph.
///
/// Layout:
/// 1. **Nodes**: one per lattice cell, visited z-outer, y-middle, x-inner;
///    node IDs follow `GridDims::node_id`.
/// 2. **Edges**: as each node is created it connects to every in-range
///    neighbor in `BACKWARD_NEIGHBORS`, with length `span` or
///    `span * sqrt(2)`.
/// 3. **Positions**: each lattice coordinate goes through
///    `lattice_to_world`, centering `real_extents - count * span` of slack
///    per axis.
///
/// Rejects a non-positive or non-finite `span`, any zero count, and lattices
/// too large to index with 32-bit IDs.
pub fn build_grid(
    origin: Point3,
    span: f64,
    dims: GridDims,
    real_extents: Point3,
) -> Result<Graph, GridError> {
    if !(span.is_finite() && span > 0.0) {
        return Err(GridError::InvalidConfiguration(format!(
            "span must be positive and finite, got {span}"
        )));
    }
    if dims.x_count == 0 || dims.y_count == 0 || dims.z_count == 0 {
        return Err(GridError::InvalidConfiguration(format!(
            "lattice counts must be positive, got {} x {} x {}",
            dims.x_count, dims.y_count, dims.z_count
        )));
    }
    if dims.cell_count() > u32::MAX as u64 {
        return Err(GridError::InvalidConfiguration(format!(
            "lattice of {} cells exceeds the node ID range",
            dims.cell_count()
        )));
    }
    if !origin.is_finite() || !real_extents.is_finite() {
        return Err(GridError::InvalidConfiguration(
            "origin and extents must be finite".into(),
        ));
    }

    debug!(
        %origin,
        span,
        x_count = dims.x_count,
        y_count = dims.y_count,
        z_count = dims.z_count,
        "generating grid"
    );

    let lattice_extent = Point3::new(
        dims.x_count as f64 * span,
        dims.y_count as f64 * span,
        dims.z_count as f64 * span,
    );
    let node_count = dims.cell_count() as usize;
    let mut graph = Graph {
        nodes: Vec::with_capacity(node_count),
        edges: Vec::with_capacity(node_count * BACKWARD_NEIGHBORS.len()),
        removed: Vec::with_capacity(node_count * BACKWARD_NEIGHBORS.len()),
        live_edge_count: 0,
        dims,
        frame: LatticeFrame {
            span,
            origin,
            centering: (real_extents - lattice_extent) * 0.5,
        },
    };

    let diagonal_length = span * SQRT_2;
    for z in 0..dims.z_count {
        for y in 0..dims.y_count {
            for x in 0..dims.x_count {
                let coord = LatticeCoord::new(x, y, z);
                let id = graph.add_node(coord);
                debug_assert_eq!(id, dims.node_id(coord));

                for r in &BACKWARD_NEIGHBORS {
                    let Some(neighbor) = coord.offset(r.dx, r.dy, r.dz) else {
                        continue;
                    };
                    if !dims.contains(neighbor) {
                        continue;
                    }
                    let length = if r.diagonal { diagonal_length } else { span };
                    graph.add_edge(id, dims.node_id(neighbor), length);
                }
            }
        }
    }

    let frame = graph.frame;
    for node in &mut graph.nodes {
        node.position = frame.to_world(node.lattice);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated grid"
    );
    Ok(graph)
}

/// Build a grid over `room` with the given span and remove every edge that
/// touches an obstacle.
///
/// Lattice counts are `floor(extent / span)` per axis, so the lattice may
/// under-cover the room; the leftover is split evenly on both sides.
pub fn build_nav_grid(room: &BBox, obstacles: &[BBox], span: f64) -> Result<Graph, GridError> {
    let mut graph = build_room_grid(room, span)?;
    graph.remove_blocked_edges(obstacles);
    Ok(graph)
}

/// Like `build_nav_grid`, but takes the span from `config` and, when
/// `config.skip_penetrable` is set, ignores obstacles flagged penetrable.
pub fn build_nav_grid_with_config(
    room: &BBox,
    obstacles: &[BBox],
    config: &RouterConfig,
) -> Result<Graph, GridError> {
    let mut graph = build_room_grid(room, config.span)?;
    graph.remove_blocked_edges(
        obstacles
            .iter()
            .filter(|b| !(config.skip_penetrable && b.is_penetrable())),
    );
    Ok(graph)
}

fn build_room_grid(room: &BBox, span: f64) -> Result<Graph, GridError> {
    if !(span.is_finite() && span > 0.0) {
        return Err(GridError::InvalidConfiguration(format!(
            "span must be positive and finite, got {span}"
        )));
    }
    let extents = room.extents();
    let count = |extent: f64, axis: &str| -> Result<u32, GridError> {
        let n = (extent / span).floor();
        if n.is_nan() || n < 1.0 {
            return Err(GridError::InvalidConfiguration(format!(
                "room {axis} extent {extent} holds no lattice cell at span {span}"
            )));
        }
        if n > u32::MAX as f64 {
            return Err(GridError::InvalidConfiguration(format!(
                "room {axis} extent {extent} is too large for span {span}"
            )));
        }
        Ok(n as u32)
    };
    let dims = GridDims::new(
        count(extents.x, "x")?,
        count(extents.y, "y")?,
        count(extents.z, "z")?,
    );
    build_grid(room.min(), span, dims, extents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_grid(n: u32, span: f64) -> Graph {
        let extent = n as f64 * span;
        build_grid(
            Point3::ORIGIN,
            span,
            GridDims::new(n, n, n),
            Point3::new(extent, extent, extent),
        )
        .unwrap()
    }

    /// Every node's incident list matches exactly the surviving edges that
    /// reference it.
    fn assert_incidence_consistent(graph: &Graph) {
        for node in graph.nodes() {
            let mut listed: Vec<EdgeId> = node.edges.to_vec();
            listed.sort();
            let expected: Vec<EdgeId> = graph
                .edges()
                .filter(|e| e.touches(node.id))
                .map(|e| e.id)
                .collect();
            assert_eq!(listed, expected, "incident edges of node {}", node.id);
        }
    }

    #[test]
    fn node_ids_are_dense_and_match_lattice() {
        let graph = build_grid(
            Point3::ORIGIN,
            1.0,
            GridDims::new(4, 3, 2),
            Point3::new(4.0, 3.0, 2.0),
        )
        .unwrap();
        assert_eq!(graph.node_count(), 24);
        for (i, node) in graph.nodes().iter().enumerate() {
            assert_eq!(node.id, NodeId(i as u32));
            assert_eq!(graph.dims().coord_of(node.id), node.lattice);
        }
    }

    #[test]
    fn cube_3x3x3_edge_counts() {
        let graph = cube_grid(3, 1.0);
        assert_eq!(graph.node_count(), 27);
        // 3 straight relations x 18 + 6 diagonal relations x 12.
        assert_eq!(graph.edge_count(), 126);

        let center = graph.dims().node_id(LatticeCoord::new(1, 1, 1));
        assert_eq!(graph.incident_edges(center).len(), MAX_INCIDENT_EDGES);
        let corner = graph.dims().node_id(LatticeCoord::new(0, 0, 0));
        // +x, +y, +z, the (x+1, y+1) and (x+1, z+1) diagonals, and (y+1, z+1).
        assert_eq!(graph.incident_edges(corner).len(), 6);
        assert_incidence_consistent(&graph);
    }

    #[test]
    fn edge_ids_follow_creation_order() {
        let graph = cube_grid(3, 1.0);
        for (i, edge) in graph.edges().enumerate() {
            assert_eq!(edge.id, EdgeId(i as u32));
            assert!(edge.nodes[1] < edge.nodes[0], "edge {} points backward", edge.id);
        }
    }

    #[test]
    fn edge_lengths_match_move_type() {
        let span = 2.5;
        let graph = cube_grid(3, span);
        for edge in graph.edges() {
            let a = graph.position(edge.nodes[0]);
            let b = graph.position(edge.nodes[1]);
            assert!((a.distance(b) - edge.length).abs() < 1e-9);
            assert!(edge.length == span || edge.length == span * SQRT_2);
        }
    }

    #[test]
    fn no_space_diagonals() {
        let graph = cube_grid(2, 1.0);
        let far_corner = graph.dims().node_id(LatticeCoord::new(1, 1, 1));
        let origin = graph.dims().node_id(LatticeCoord::new(0, 0, 0));
        assert!(
            graph
                .edges()
                .all(|e| !(e.touches(origin) && e.touches(far_corner)))
        );
    }

    #[test]
    fn positions_are_exact_without_slack() {
        let span = 0.5;
        let graph = cube_grid(4, span);
        for node in graph.nodes() {
            let c = node.lattice;
            assert_eq!(
                node.position,
                Point3::new(c.x as f64 * span, c.y as f64 * span, c.z as f64 * span)
            );
        }
    }

    #[test]
    fn slack_is_centered() {
        // 5.5 / 1.0 -> 5 cells, 0.5 of slack, shift by 0.25.
        let room = BBox::new(10.0, -2.0, 0.0, 5.5, 2.0, 3.0);
        let graph = build_nav_grid(&room, &[], 1.0).unwrap();
        assert_eq!(graph.dims(), GridDims::new(5, 2, 3));
        assert_eq!(graph.position(NodeId(0)), Point3::new(10.25, -2.0, 0.0));
        let last = NodeId(graph.node_count() as u32 - 1);
        assert_eq!(graph.position(last), Point3::new(14.25, -1.0, 2.0));
    }

    #[test]
    fn rejects_bad_configuration() {
        let ok_extents = Point3::new(1.0, 1.0, 1.0);
        for span in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build_grid(Point3::ORIGIN, span, GridDims::new(1, 1, 1), ok_extents),
                Err(GridError::InvalidConfiguration(_))
            ));
        }
        assert!(build_grid(Point3::ORIGIN, 1.0, GridDims::new(1, 0, 1), ok_extents).is_err());

        // Room thinner than one span along z.
        let room = BBox::new(0.0, 0.0, 0.0, 3.0, 3.0, 0.5);
        assert!(matches!(
            build_nav_grid(&room, &[], 1.0),
            Err(GridError::InvalidConfiguration(_))
        ));
        let inverted = BBox::new(0.0, 0.0, 0.0, 3.0, -3.0, 3.0);
        assert!(build_nav_grid(&inverted, &[], 1.0).is_err());
    }

    #[test]
    fn single_cell_grid_has_no_edges() {
        let graph = cube_grid(1, 1.0);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn remove_edge_is_idempotent() {
        let mut graph = cube_grid(2, 1.0);
        let before = graph.edge_count();
        assert!(graph.remove_edge(EdgeId(0)));
        assert!(!graph.remove_edge(EdgeId(0)));
        assert!(!graph.remove_edge(EdgeId(9999)));
        assert_eq!(graph.edge_count(), before - 1);
        assert!(graph.edge(EdgeId(0)).is_none());
        assert!(graph.edge(EdgeId(1)).is_some());
        assert_eq!(graph.edge_capacity(), before);
        assert_incidence_consistent(&graph);
    }

    #[test]
    fn obstacle_removes_touching_edges() {
        let room = BBox::new(0.0, 0.0, 0.0, 5.0, 4.0, 3.0);
        let cube = BBox::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        let graph = build_nav_grid(&room, std::slice::from_ref(&cube), 1.0).unwrap();

        let dims = graph.dims();
        let id = |x, y, z| dims.node_id(LatticeCoord::new(x, y, z));
        let has_edge = |a: NodeId, b: NodeId| graph.edges().any(|e| e.touches(a) && e.touches(b));

        // Along a box edge and across a box face.
        assert!(!has_edge(id(1, 1, 1), id(2, 1, 1)));
        assert!(!has_edge(id(1, 1, 1), id(2, 2, 1)));
        assert!(!has_edge(id(1, 2, 1), id(2, 1, 1)));
        // Far corner stays connected.
        assert!(has_edge(id(0, 0, 0), id(1, 0, 0)));
        assert!(has_edge(id(4, 3, 2), id(3, 3, 2)));

        for edge in graph.edges() {
            let a = graph.position(edge.nodes[0]);
            let b = graph.position(edge.nodes[1]);
            assert!(!cube.segment_intersects(a, b));
        }
        assert_incidence_consistent(&graph);
    }

    #[test]
    fn degenerate_obstacle_removes_nothing() {
        let room = BBox::new(0.0, 0.0, 0.0, 3.0, 3.0, 3.0);
        let flat = BBox::new(1.0, 1.0, 1.0, 1.0, 1.0, 0.0);
        let clean = build_nav_grid(&room, &[], 1.0).unwrap();
        let graph = build_nav_grid(&room, &[flat], 1.0).unwrap();
        assert_eq!(graph.edge_count(), clean.edge_count());
    }

    #[test]
    fn penetrable_obstacles_skipped_when_configured() {
        let room = BBox::new(0.0, 0.0, 0.0, 4.0, 4.0, 4.0);
        let soft = BBox::new(1.5, 1.5, 1.5, 1.0, 1.0, 1.0).with_penetrable(true);
        let clean = build_nav_grid(&room, &[], 1.0).unwrap();

        let strict = build_nav_grid_with_config(
            &room,
            std::slice::from_ref(&soft),
            &RouterConfig::default(),
        )
        .unwrap();
        assert!(strict.edge_count() < clean.edge_count());

        let lenient = build_nav_grid_with_config(
            &room,
            std::slice::from_ref(&soft),
            &RouterConfig {
                skip_penetrable: true,
                ..RouterConfig::default()
            },
        )
        .unwrap();
        assert_eq!(lenient.edge_count(), clean.edge_count());
    }

    #[test]
    fn nearest_node_snaps_to_lattice() {
        let graph = cube_grid(3, 1.0);
        assert_eq!(
            graph.nearest_node(Point3::new(1.9, 0.2, 1.1)),
            Some(graph.dims().node_id(LatticeCoord::new(2, 0, 1)))
        );
        // Equidistant between nodes 0 and 1: lowest ID wins.
        assert_eq!(graph.nearest_node(Point3::new(0.5, 0.0, 0.0)), Some(NodeId(0)));
    }

    #[test]
    fn edge_segments_follow_surviving_edges() {
        let room = BBox::new(0.0, 0.0, 0.0, 2.0, 1.0, 1.0);
        let graph = build_nav_grid(&room, &[], 1.0).unwrap();
        let segments = graph.edge_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_point, [1.0, 0.0, 0.0]);
        assert_eq!(segments[0].end_point, [0.0, 0.0, 0.0]);
    }
}
