// pipe_router_nav: 3D navigation grid and shortest-path core for pipe routing.
//
// This crate turns a room bounding box plus a list of axis-aligned obstacle
// boxes into a lattice graph of reachable points, strips every edge that
// passes through an obstacle, and routes a lowest-cost path between two
// nodes with A*. It performs no I/O: obstacle files are parsed and results
// are written by callers (see the `pipe_router_cli` crate).
//
// Module overview:
// - `types.rs`:       Point3, LatticeCoord, GridDims, NodeId/EdgeId.
// - `obstacle.rs`:    BBox / ObstacleSet input model + slab segment-vs-box test.
// - `grid.rs`:        Graph arena (nodes, edges, tombstones) + grid builders.
// - `pathfinding.rs`: A* search with externalized per-search state.
// - `config.rs`:      RouterConfig + Heuristic strategy.
// - `export.rs`:      JSON export shape and visualization line segments.
// - `error.rs`:       GridError / PathError.
//
// **Critical constraint: determinism.** Building the same room, obstacles and
// span twice yields identical node positions and identical surviving edge
// IDs. Node and edge IDs are sequential integers assigned in a fixed
// lattice order, and search ties break on node ID.

pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod obstacle;
pub mod pathfinding;
pub mod types;

pub use config::{Heuristic, RouterConfig};
pub use error::{GridError, PathError};
pub use export::{GraphExport, LineSegment};
pub use grid::{Edge, Graph, Node, build_grid, build_nav_grid, build_nav_grid_with_config};
pub use obstacle::{BBox, BoxCategory, ObstacleSet};
pub use pathfinding::{
    Route, SearchState, find_path, find_path_between_points, find_path_with_config,
    reconstruct_path, search,
};
pub use types::{EdgeId, GridDims, LatticeCoord, NodeId, Point3};
