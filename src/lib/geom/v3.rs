// Opting to use a type alias instead of a new-type.
// Corners come straight out of the table as arrays,
// so there is nothing to wrap or unwrap on the way to the GPU.
pub type V3<T> = [T; 3];

pub trait V3Ops {
    type Ty: Default + num_traits::real::Real;

    fn add(self, b: Self) -> Self;
    fn sub(self, b: Self) -> Self;
    fn scale(self, s: Self::Ty) -> Self;
    fn min(self, b: Self) -> Self;
    fn max(self, b: Self) -> Self;
    fn mag(self) -> Self::Ty;
    fn extent(self) -> Self::Ty;
}

impl<T: Default + num_traits::real::Real> V3Ops for V3<T> {
    type Ty = T;

    fn add(mut self, b: Self) -> Self {
        self[0] = self[0] + b[0];
        self[1] = self[1] + b[1];
        self[2] = self[2] + b[2];
        self
    }

    fn sub(mut self, b: Self) -> Self {
        self[0] = self[0] - b[0];
        self[1] = self[1] - b[1];
        self[2] = self[2] - b[2];
        self
    }

    fn scale(mut self, s: Self::Ty) -> Self {
        self[0] = self[0] * s;
        self[1] = self[1] * s;
        self[2] = self[2] * s;
        self
    }

    // Component-wise, NaN components lose to the other operand
    fn min(mut self, b: Self) -> Self {
        self[0] = self[0].min(b[0]);
        self[1] = self[1].min(b[1]);
        self[2] = self[2].min(b[2]);
        self
    }

    fn max(mut self, b: Self) -> Self {
        self[0] = self[0].max(b[0]);
        self[1] = self[1].max(b[1]);
        self[2] = self[2].max(b[2]);
        self
    }

    fn mag(self) -> Self::Ty {
        self.iter()
            .fold(Self::Ty::default(), |mag, elem| mag + *elem * *elem).sqrt()
    }

    // The largest single component
    fn extent(self) -> Self::Ty {
        self[0].max(self[1]).max(self[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_are_component_wise() {
        let a: V3<f32> = [1., 5., -2.];
        let b: V3<f32> = [3., 0., -4.];

        assert_eq!(a.min(b), [1., 0., -4.]);
        assert_eq!(a.max(b), [3., 5., -2.]);
    }

    #[test]
    fn extent_picks_largest_axis() {
        let v: V3<f32> = [1., 7., 3.];

        assert_eq!(v.extent(), 7.);
        assert_eq!([2f32; 3].sub([1.; 3]).mag(), 3f32.sqrt());
    }
}
