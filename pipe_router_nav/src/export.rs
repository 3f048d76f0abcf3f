// Serializable views of a built graph.
//
// `GraphExport` is the JSON document downstream tools consume:
//
//   { "span": 1.0,
//     "grid": { "nodes": [ { "nodeNr": 0, "x": .., "y": .., "z": .. }, .. ],
//               "edges": [ { "edgeNr": 0, "node1": 1, "node2": 0 }, .. ] } }
//
// Only surviving edges are exported, in ascending edge number; numbers are
// the original creation-time IDs, so gaps mark removed edges.
//
// `LineSegment` is the `{ startPoint, endPoint }` pair used for drawing grid
// edges and obstacle wireframes.

use crate::grid::Graph;
use crate::types::Point3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub span: f64,
    pub grid: GridExport,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridExport {
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<EdgeExport>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeExport {
    pub node_nr: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeExport {
    pub edge_nr: u32,
    pub node1: u32,
    pub node2: u32,
}

impl GraphExport {
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|n| NodeExport {
                node_nr: n.id.0,
                x: n.position.x,
                y: n.position.y,
                z: n.position.z,
            })
            .collect();
        let edges = graph
            .edges()
            .map(|e| EdgeExport {
                edge_nr: e.id.0,
                node1: e.nodes[0].0,
                node2: e.nodes[1].0,
            })
            .collect();
        Self {
            span: graph.span(),
            grid: GridExport { nodes, edges },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&Graph> for GraphExport {
    fn from(graph: &Graph) -> Self {
        Self::from_graph(graph)
    }
}

/// A drawable line between two world points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSegment {
    pub start_point: [f64; 3],
    pub end_point: [f64; 3],
}

impl LineSegment {
    pub fn new(start: Point3, end: Point3) -> Self {
        Self {
            start_point: start.to_array(),
            end_point: end.to_array(),
        }
    }
}
