use std::fmt;

use crate::{leaf, table};

// The same summary the builder prints once it finishes
#[derive(Clone, Copy)]
#[derive(Debug, Default, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct HierarchyStats {
    pub nodes: usize,
    pub leaves: usize,
    pub non_empty: usize,
    pub avg_triangles: i64,
    pub max_triangles: i64,
    pub inverted: usize,
}

impl HierarchyStats {
    pub fn new(records: &[table::NodeRecord]) -> Self {
        let mut stats = Self {
            nodes: records.len(),
            ..Default::default()
        };

        let mut total = 0i64;

        for record in records {
            let table::NodeKind::Leaf { triangles } = record.kind else {
                continue;
            };

            stats.leaves += 1;
            stats.max_triangles = stats.max_triangles.max(triangles);

            if triangles > 0 {
                stats.non_empty += 1;

                total = total.saturating_add(triangles);

                if leaf::LeafBox::new(record.min, record.max).is_inverted() {
                    stats.inverted += 1;
                }
            }
        }

        // Integer mean over populated leaves only
        if stats.non_empty > 0 {
            stats.avg_triangles = total / stats.non_empty as i64;
        }

        stats
    }
}

impl fmt::Display for HierarchyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            nodes,
            leaves,
            non_empty,
            avg_triangles,
            max_triangles,
            inverted,
        } = self;

        write!(f, "\
            total nodes: {nodes}, leaves: {leaves}, \
            non-empty leaves: {non_empty}, \
            avg triangles per leaf (not empty): {avg_triangles}, \
            max triangles in a leaf: {max_triangles}, \
            inverted leaf boxes: {inverted}\
        ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use table::NodeRecord;

    #[test]
    fn counts_match_builder_report() {
        let records = [
            NodeRecord::new([0.; 3], [4.; 3], 1, 0),
            NodeRecord::new([0.; 3], [2.; 3], 0, 3),
            NodeRecord::new([2.; 3], [4.; 3], 0, 6),
            NodeRecord::new([0.; 3], [0.; 3], 0, 0),
            NodeRecord::new([3., 0., 0.], [1., 1., 1.], 0, 1),
        ];

        let stats = HierarchyStats::new(&records);

        assert_eq!(stats, HierarchyStats {
            nodes: 5,
            leaves: 4,
            non_empty: 3,
            avg_triangles: 3,
            max_triangles: 6,
            inverted: 1,
        });
    }

    #[test]
    fn empty_table_has_zero_average() {
        let stats = HierarchyStats::new(&[]);

        assert_eq!(stats, HierarchyStats::default());
        assert!(stats.to_string().contains("total nodes: 0"));
    }
}
