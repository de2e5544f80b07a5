pub mod v3;

pub use v3::{V3, V3Ops};

// Running extrema over a set of points.
// Starts inverted so the first point always wins
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq)]
pub struct Bounds {
    pub min: V3<f32>,
    pub max: V3<f32>,
}

impl Default for Bounds {
    fn default() -> Self { Self::empty() }
}

impl Bounds {
    pub const fn empty() -> Self {
        Self {
            min: [f32::MAX; 3],
            max: [f32::MIN; 3],
        }
    }

    pub fn new<P>(points: P) -> Self
        where P: IntoIterator<Item = V3<f32>> {

        let mut bounds = Self::empty();

        for point in points {
            bounds.extend(point);
        }

        bounds
    }

    pub fn extend(&mut self, point: V3<f32>) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] ||
        self.min[1] > self.max[1] ||
        self.min[2] > self.max[2]
    }

    pub fn center(&self) -> V3<f32> {
        self.min.add(self.max).scale(0.5)
    }

    pub fn size(&self) -> V3<f32> {
        self.max.sub(self.min)
    }

    // Empty or flat bounds still need a usable frame,
    // so they are widened to at least a unit on each axis
    pub fn or_unit(self) -> Self {
        if self.is_empty() {
            return Self { min: [-0.5; 3], max: [0.5; 3] };
        }

        let Self { mut min, mut max } = self;

        for axis in 0..3 {
            if max[axis] - min[axis] <= f32::EPSILON {
                min[axis] -= 0.5;
                max[axis] += 0.5;
            }
        }

        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_points() {
        let bounds = Bounds::new([[0., 2., -1.], [3., -2., 4.], [1., 1., 1.]]);

        assert_eq!(bounds.min, [0., -2., -1.]);
        assert_eq!(bounds.max, [3., 2., 4.]);
        assert_eq!(bounds.center(), [1.5, 0., 1.5]);
        assert!(!bounds.is_empty());
    }

    #[test]
    fn empty_bounds_fall_back_to_unit() {
        let bounds = Bounds::new([]);

        assert!(bounds.is_empty());
        assert_eq!(bounds.or_unit().size(), [1.; 3]);
    }

    #[test]
    fn flat_axes_are_widened() {
        let bounds = Bounds::new([[0., 0., 5.], [2., 2., 5.]]).or_unit();

        assert_eq!(bounds.size(), [2., 2., 1.]);
        assert_eq!(bounds.min[2], 4.5);
    }
}
