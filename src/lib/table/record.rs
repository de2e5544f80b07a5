use std::num;

use crate::geom::V3;
use crate::leaf;

// Columns every export must carry, in the order the builder writes them
pub const COLUMNS: [&str; 8] = [
    "MinX", "MinY", "MinZ",
    "MaxX", "MaxY", "MaxZ",
    "ChildIndex",
    "TriangleCount",
];

// The export marks leaves with a zero child index.
// That sentinel is decoded once here and never looked at again.
// Both integers are kept signed and wide, any value that is not
// a zero child or a positive count simply fails to qualify as a leaf box
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub enum NodeKind {
    Internal { child: num::NonZeroI64, triangles: i64 },
    Leaf { triangles: i64 },
}

impl NodeKind {
    pub fn new(child: i64, triangles: i64) -> Self {
        match num::NonZeroI64::new(child) {
            Some(child) => Self::Internal { child, triangles },
            None => Self::Leaf { triangles },
        }
    }

    pub fn triangles(&self) -> i64 {
        match *self {
            Self::Internal { triangles, .. } | //
            Self::Leaf { triangles } => triangles,
        }
    }
}

/// One row of the node table.
///
/// `min` is not guaranteed to be below `max`,
/// whatever the builder wrote is kept as-is.
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq)]
pub struct NodeRecord {
    pub min: V3<f32>,
    pub max: V3<f32>,
    pub kind: NodeKind,
}

impl NodeRecord {
    pub fn new(min: V3<f32>, max: V3<f32>, child: i64, triangles: i64) -> Self {
        Self { min, max, kind: NodeKind::new(child, triangles) }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn child(&self) -> Option<num::NonZeroI64> {
        match self.kind {
            NodeKind::Internal { child, .. } => Some(child),
            NodeKind::Leaf { .. } => None,
        }
    }

    // Only leaves that still reference geometry are drawn
    pub fn leaf_box(&self) -> Option<leaf::LeafBox> {
        match self.kind {
            NodeKind::Leaf { triangles } if triangles > 0 => //
                Some(leaf::LeafBox::new(self.min, self.max)),
            _ => None,
        }
    }
}

impl<'de> serde::Deserialize<'de> for NodeRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de> {

        // Mirrors the header row, anything else in the row is skipped
        #[derive(serde::Deserialize)]
        struct Intermediate {
            #[serde(rename = "MinX")] min_x: f32,
            #[serde(rename = "MinY")] min_y: f32,
            #[serde(rename = "MinZ")] min_z: f32,
            #[serde(rename = "MaxX")] max_x: f32,
            #[serde(rename = "MaxY")] max_y: f32,
            #[serde(rename = "MaxZ")] max_z: f32,
            #[serde(rename = "ChildIndex")] child: i64,
            #[serde(rename = "TriangleCount")] triangles: i64,
        }

        let Intermediate {
            min_x, min_y, min_z,
            max_x, max_y, max_z,
            child,
            triangles,
        } = Intermediate::deserialize(deserializer)?;

        Ok(Self::new(
            [min_x, min_y, min_z],
            [max_x, max_y, max_z],
            child,
            triangles,
        ))
    }
}
