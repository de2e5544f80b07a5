use crate::geom::{self, V3};
use crate::table;

// The only part of a node that reaches the renderer
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq)]
pub struct LeafBox {
    pub min: V3<f32>,
    pub max: V3<f32>,
}

impl LeafBox {
    pub const fn new(min: V3<f32>, max: V3<f32>) -> Self {
        Self { min, max }
    }

    // True when the builder wrote a max below its min on some axis.
    // These are still drawn
    pub fn is_inverted(&self) -> bool {
        (0..3).any(|axis| self.max[axis] < self.min[axis])
    }

    pub fn bounds(&self) -> geom::Bounds {
        geom::Bounds::new([self.min, self.max])
    }
}

/// Keeps the records that are leaves with at least one triangle,
/// in their original order.
pub fn leaves<'a, I>(records: I) -> impl Iterator<Item = LeafBox> + 'a
    where I: IntoIterator<Item = &'a table::NodeRecord>, I::IntoIter: 'a {

    records
        .into_iter()
        .filter_map(table::NodeRecord::leaf_box)
}
