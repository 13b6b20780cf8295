use std::ops::Mul;

/// Width/height pair used for desired sizes, arranged sizes, and viewport
/// extents throughout the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<f32> {
    pub const ZERO: Self = Size {
        width: 0.0,
        height: 0.0,
    };
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_scale() {
        let size = Size::new(400.0_f32, 300.0) * 0.5;
        assert_eq!(size, Size::new(200.0, 150.0));
    }

    #[test]
    fn test_size_zero() {
        assert_eq!(Size::ZERO, Size::new(0.0, 0.0));
    }
}
