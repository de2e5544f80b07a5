use crate::geom::V3;
use crate::leaf;

// Which extremum each corner takes per axis (true picks max).
// Laid out so 0..4 walk the bottom face and 4..8 the top face
//
// 0:(min,min,min) 1:(max,min,min) 2:(max,max,min) 3:(min,max,min)
// 4:(min,min,max) 5:(max,min,max) 6:(max,max,max) 7:(min,max,max)
const CORNER_MASKS: [[bool; 3]; 8] = [
    [false, false, false],
    [true,  false, false],
    [true,  true,  false],
    [false, true,  false],
    [false, false, true ],
    [true,  false, true ],
    [true,  true,  true ],
    [false, true,  true ],
];

// Corner index pairs joined by an edge
pub const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0), // bottom
    (4, 5), (5, 6), (6, 7), (7, 4), // top
    (0, 4), (1, 5), (2, 6), (3, 7), // verticals
];

#[derive(Clone, Copy)]
#[derive(Debug, PartialEq)]
pub struct Edge {
    pub a: V3<f32>,
    pub b: V3<f32>,
}

impl leaf::LeafBox {
    pub fn corners(&self) -> [V3<f32>; 8] {
        let Self { min, max } = *self;

        CORNER_MASKS.map(|mask| [
            if mask[0] { max[0] } else { min[0] },
            if mask[1] { max[1] } else { min[1] },
            if mask[2] { max[2] } else { min[2] },
        ])
    }

    pub fn edges(&self) -> [Edge; 12] {
        let corners = self.corners();

        EDGES.map(|(a, b)| Edge { a: corners[a], b: corners[b] })
    }
}

// Flattens the wireframes of every box into one stream
pub fn edges<I>(boxes: I) -> impl Iterator<Item = Edge>
    where I: IntoIterator<Item = leaf::LeafBox> {

    boxes.into_iter().flat_map(|leaf| leaf.edges())
}
