use super::Float;

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn as_f32(&self) -> f32 {
        *self
    }

    #[inline]
    fn as_f64(&self) -> f64 {
        *self as f64
    }

    #[inline]
    fn from_float<F: Float>(float: F) -> Self {
        float.as_f32()
    }

    #[inline]
    fn to_bits_u64(&self) -> u64 {
        self.to_bits() as u64
    }

    // =================================== Arithmetic functions ===================================

    #[inline]
    fn abs(&self) -> Self {
        f32::abs(*self)
    }

    #[inline]
    fn powi(&self, n: i32) -> Self {
        f32::powi(*self, n)
    }

    #[inline]
    fn exp(&self) -> Self {
        f32::exp(*self)
    }

    #[inline]
    fn tanh(&self) -> Self {
        f32::tanh(*self)
    }
}
