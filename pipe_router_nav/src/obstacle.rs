// Obstacle input model and segment-vs-box geometry.
//
// A `BBox` is an axis-aligned box given by its minimum corner and its
// extents. The same shape describes both the room that bounds the grid and
// every obstacle inside it. Field names follow the JSON produced by the
// building-model exporter (`x`, `xDist`, `type`, `penetrable`, ...), so an
// `ObstacleSet` deserializes straight from those files.
//
// `BBox::segment_intersects()` is the slab test used by `grid.rs` to strip
// edges that pass through an obstacle. Boxes are closed: a segment that only
// touches a face, edge or corner counts as intersecting.
//
// See also: `grid.rs` (`Graph::remove_blocked_edges`) which runs this test
// against every edge.

use crate::export::LineSegment;
use crate::types::Point3;
use serde::{Deserialize, Serialize};

/// IFC element category attached to an obstacle box. Metadata only; the
/// grid builder never looks at it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BoxCategory {
    IfcBeam,
    IfcCovering,
    IfcDoor,
    IfcFooting,
    IfcFurnishingElement,
    IfcMember,
    IfcOpeningElement,
    IfcRailing,
    IfcSlab,
    IfcSpace,
    IfcStairFlight,
    IfcWall,
    IfcWallStandardCase,
    IfcWindow,
    /// Any category string not listed above, kept verbatim.
    Other(String),
}

impl BoxCategory {
    pub fn as_str(&self) -> &str {
        match self {
            BoxCategory::IfcBeam => "IfcBeam",
            BoxCategory::IfcCovering => "IfcCovering",
            BoxCategory::IfcDoor => "IfcDoor",
            BoxCategory::IfcFooting => "IfcFooting",
            BoxCategory::IfcFurnishingElement => "IfcFurnishingElement",
            BoxCategory::IfcMember => "IfcMember",
            BoxCategory::IfcOpeningElement => "IfcOpeningElement",
            BoxCategory::IfcRailing => "IfcRailing",
            BoxCategory::IfcSlab => "IfcSlab",
            BoxCategory::IfcSpace => "IfcSpace",
            BoxCategory::IfcStairFlight => "IfcStairFlight",
            BoxCategory::IfcWall => "IfcWall",
            BoxCategory::IfcWallStandardCase => "IfcWallStandardCase",
            BoxCategory::IfcWindow => "IfcWindow",
            BoxCategory::Other(s) => s,
        }
    }
}

impl From<String> for BoxCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "IfcBeam" => BoxCategory::IfcBeam,
            "IfcCovering" => BoxCategory::IfcCovering,
            "IfcDoor" => BoxCategory::IfcDoor,
            "IfcFooting" => BoxCategory::IfcFooting,
            "IfcFurnishingElement" => BoxCategory::IfcFurnishingElement,
            "IfcMember" => BoxCategory::IfcMember,
            "IfcOpeningElement" => BoxCategory::IfcOpeningElement,
            "IfcRailing" => BoxCategory::IfcRailing,
            "IfcSlab" => BoxCategory::IfcSlab,
            "IfcSpace" => BoxCategory::IfcSpace,
            "IfcStairFlight" => BoxCategory::IfcStairFlight,
            "IfcWall" => BoxCategory::IfcWall,
            "IfcWallStandardCase" => BoxCategory::IfcWallStandardCase,
            "IfcWindow" => BoxCategory::IfcWindow,
            _ => BoxCategory::Other(s),
        }
    }
}

impl From<BoxCategory> for String {
    fn from(c: BoxCategory) -> Self {
        match c {
            BoxCategory::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// An axis-aligned box: minimum corner plus non-negative extents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub x_dist: f64,
    pub y_dist: f64,
    pub z_dist: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BoxCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penetrable: Option<bool>,
}

impl BBox {
    pub fn new(x: f64, y: f64, z: f64, x_dist: f64, y_dist: f64, z_dist: f64) -> Self {
        Self {
            x,
            y,
            z,
            x_dist,
            y_dist,
            z_dist,
            category: None,
            penetrable: None,
        }
    }

    pub fn from_corners(min: Point3, max: Point3) -> Self {
        let ext = max - min;
        Self::new(min.x, min.y, min.z, ext.x, ext.y, ext.z)
    }

    pub fn with_category(mut self, category: BoxCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_penetrable(mut self, penetrable: bool) -> Self {
        self.penetrable = Some(penetrable);
        self
    }

    pub fn min(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn max(&self) -> Point3 {
        self.min() + self.extents()
    }

    pub fn extents(&self) -> Point3 {
        Point3::new(self.x_dist, self.y_dist, self.z_dist)
    }

    /// `true` when any extent is zero, negative or non-finite. Such a box
    /// blocks nothing.
    pub fn is_degenerate(&self) -> bool {
        let ext = self.extents().to_array();
        !self.min().is_finite() || ext.iter().any(|&e| !(e.is_finite() && e > 0.0))
    }

    pub fn is_penetrable(&self) -> bool {
        self.penetrable == Some(true)
    }

    /// Closed containment test.
    pub fn contains(&self, p: Point3) -> bool {
        let lo = self.min();
        let hi = self.max();
        (lo.x..=hi.x).contains(&p.x) && (lo.y..=hi.y).contains(&p.y) && (lo.z..=hi.z).contains(&p.z)
    }

    /// Slab test: does the segment `start..=end` touch this box?
    ///
    /// For each axis the segment is clipped to the parametric interval where
    /// it lies between the box's two planes; the intervals are intersected
    /// with each other and with `[0, 1]`. An axis the segment runs parallel
    /// to contributes no interval, but rejects outright when the segment's
    /// coordinate on that axis is outside the box. Degenerate boxes never
    /// intersect.
    pub fn segment_intersects(&self, start: Point3, end: Point3) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let lo = self.min().to_array();
        let hi = self.max().to_array();
        let s = start.to_array();
        let d = (end - start).to_array();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            if d[axis] == 0.0 {
                if s[axis] < lo[axis] || s[axis] > hi[axis] {
                    return false;
                }
                continue;
            }
            let t1 = (lo[axis] - s[axis]) / d[axis];
            let t2 = (hi[axis] - s[axis]) / d[axis];
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }

        t_max >= 0.0 && t_min <= 1.0 && t_min <= t_max
    }

    /// The 12 edges of the box, bottom face first, then top face, then the
    /// four verticals. Used to draw obstacles next to the grid.
    pub fn wireframe(&self) -> [LineSegment; 12] {
        let lo = self.min();
        let hi = self.max();
        let bottom = [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
        ];
        let top = bottom.map(|p| Point3::new(p.x, p.y, hi.z));
        let ring = |face: [Point3; 4], i: usize| LineSegment::new(face[i], face[(i + 1) % 4]);
        [
            ring(bottom, 0),
            ring(bottom, 1),
            ring(bottom, 2),
            ring(bottom, 3),
            ring(top, 0),
            ring(top, 1),
            ring(top, 2),
            ring(top, 3),
            LineSegment::new(bottom[0], top[0]),
            LineSegment::new(bottom[1], top[1]),
            LineSegment::new(bottom[2], top[2]),
            LineSegment::new(bottom[3], top[3]),
        ]
    }
}

/// A room plus the obstacles inside it, as read from a building-model file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSet {
    #[serde(rename = "roomBBox")]
    pub room: BBox,
    #[serde(rename = "obstacleBBoxes", default)]
    pub obstacles: Vec<BBox>,
}

impl ObstacleSet {
    /// Obstacles that block routing under the given penetrable policy.
    pub fn blocking(&self, skip_penetrable: bool) -> impl Iterator<Item = &BBox> {
        self.obstacles
            .iter()
            .filter(move |b| !(skip_penetrable && b.is_penetrable()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> BBox {
        BBox::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0)
    }

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn segment_through_interior_intersects() {
        let b = unit_cube();
        assert!(b.segment_intersects(p(0.0, 1.5, 1.5), p(3.0, 1.5, 1.5)));
        assert!(b.segment_intersects(p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)));
        assert!(b.segment_intersects(p(2.0, 1.0, 1.0), p(1.0, 2.0, 2.0)));
    }

    #[test]
    fn segment_outside_box_misses() {
        let b = unit_cube();
        assert!(!b.segment_intersects(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
        assert!(!b.segment_intersects(p(0.0, 0.0, 0.0), p(0.0, 3.0, 3.0)));
        assert!(!b.segment_intersects(p(3.0, 3.0, 3.0), p(4.0, 4.0, 3.0)));
    }

    #[test]
    fn segment_pointing_at_box_but_stopping_short_misses() {
        let b = unit_cube();
        // The ray from (4, 1.5, 1.5) toward -x hits the box at t = 2, past
        // the end of the unit-length segment.
        assert!(!b.segment_intersects(p(4.0, 1.5, 1.5), p(3.0, 1.5, 1.5)));
        // Segment behind the start, pointing away.
        assert!(!b.segment_intersects(p(3.0, 1.5, 1.5), p(4.0, 1.5, 1.5)));
    }

    #[test]
    fn touching_boundary_counts_as_intersecting() {
        let b = unit_cube();
        // Runs along a box edge.
        assert!(b.segment_intersects(p(1.0, 1.0, 1.0), p(2.0, 1.0, 1.0)));
        // Ends exactly on a corner.
        assert!(b.segment_intersects(p(0.0, 1.0, 1.0), p(1.0, 1.0, 1.0)));
    }

    #[test]
    fn axis_parallel_segment_inside_slab() {
        let b = unit_cube();
        // Parallel to y and z, crosses the box along x.
        assert!(b.segment_intersects(p(0.5, 1.5, 1.5), p(1.5, 1.5, 1.5)));
        // Parallel to x, entirely outside in y.
        assert!(!b.segment_intersects(p(0.0, 2.5, 1.5), p(3.0, 2.5, 1.5)));
    }

    #[test]
    fn degenerate_box_blocks_nothing() {
        let flat = BBox::new(1.0, 1.0, 1.0, 1.0, 0.0, 1.0);
        let inverted = BBox::new(1.0, 1.0, 1.0, -1.0, 1.0, 1.0);
        let nan = BBox::new(1.0, 1.0, 1.0, f64::NAN, 1.0, 1.0);
        for b in [flat, inverted, nan] {
            assert!(b.is_degenerate());
            assert!(!b.segment_intersects(p(0.0, 1.5, 1.5), p(3.0, 1.5, 1.5)));
        }
    }

    #[test]
    fn contains_is_closed() {
        let b = unit_cube();
        assert!(b.contains(p(1.0, 1.0, 1.0)));
        assert!(b.contains(p(2.0, 1.5, 2.0)));
        assert!(!b.contains(p(2.1, 1.5, 1.5)));
    }

    #[test]
    fn wireframe_has_twelve_unit_edges() {
        let lines = unit_cube().wireframe();
        assert_eq!(lines.len(), 12);
        for line in &lines {
            let len = Point3::from(line.start_point).distance(Point3::from(line.end_point));
            assert_eq!(len, 1.0);
        }
        assert_eq!(lines[8].start_point, [1.0, 1.0, 1.0]);
        assert_eq!(lines[8].end_point, [1.0, 1.0, 2.0]);
    }

    #[test]
    fn obstacle_set_from_json() {
        let json = r#"{
            "roomBBox": { "x": 0, "y": 0, "z": 0, "xDist": 5, "yDist": 4, "zDist": 3 },
            "obstacleBBoxes": [
                { "x": 1, "y": 1, "z": 1, "xDist": 1, "yDist": 1, "zDist": 1, "type": "IfcWall" },
                { "x": 3, "y": 0, "z": 0, "xDist": 1, "yDist": 1, "zDist": 3,
                  "type": "IfcSomethingNew", "penetrable": true }
            ]
        }"#;
        let set: ObstacleSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.room.x_dist, 5.0);
        assert_eq!(set.obstacles.len(), 2);
        assert_eq!(set.obstacles[0].category, Some(BoxCategory::IfcWall));
        assert_eq!(
            set.obstacles[1].category,
            Some(BoxCategory::Other("IfcSomethingNew".into()))
        );
        assert!(set.obstacles[1].is_penetrable());

        assert_eq!(set.blocking(false).count(), 2);
        assert_eq!(set.blocking(true).count(), 1);
    }

    #[test]
    fn bbox_serializes_with_original_field_names() {
        let b = unit_cube().with_category(BoxCategory::IfcSlab);
        let v = serde_json::to_value(&b).unwrap();
        assert_eq!(v["xDist"], 1.0);
        assert_eq!(v["type"], "IfcSlab");
        assert!(v.get("penetrable").is_none());
    }
}
