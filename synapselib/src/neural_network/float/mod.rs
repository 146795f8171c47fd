use std::ops::*;

mod f32;
mod f64;

/// Generic float numbers representation.
///
/// Every type in the neural network module is generic over this trait,
/// so the same network topology can be evaluated with single or double
/// precision numbers.
pub trait Float:
    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> +
    AddAssign + SubAssign + MulAssign + DivAssign + Neg<Output = Self> +
    Default + Clone + Copy + PartialEq + PartialOrd +
    std::fmt::Debug + std::fmt::Display + Send + Sync + Sized + 'static
{
    /// Constant equal to `Self::from_float(0.0)`.
    ///
    /// Use `-Float::ZERO` for negative zero.
    const ZERO: Self;

    /// Constant equal to `Self::from_float(1.0)`.
    const ONE: Self;

    /// Represent current float as machine f32.
    fn as_f32(&self) -> f32;

    /// Represent current float as machine f64 (double precision).
    fn as_f64(&self) -> f64;

    /// Convert given float to another type.
    fn from_float<F: Float>(float: F) -> Self;

    /// Exact bit pattern of the current float widened to 64 bits.
    ///
    /// Two floats of the same type have equal bit patterns only if
    /// they are the same number, so this is used to build lookup keys
    /// from floats without rendering them to strings.
    fn to_bits_u64(&self) -> u64;

    // =================================== Arithmetic functions ===================================

    /// Computes the absolute value of self.
    fn abs(&self) -> Self {
        Self::from_float(self.as_f64().abs())
    }

    /// Raises a number to an integer power.
    fn powi(&self, n: i32) -> Self {
        Self::from_float(self.as_f64().powi(n))
    }

    /// Calculate `e^(self)`.
    fn exp(&self) -> Self {
        Self::from_float(self.as_f64().exp())
    }

    /// Hyperbolic tangent function.
    fn tanh(&self) -> Self {
        Self::from_float(self.as_f64().tanh())
    }
}

#[test]
fn test_float_conversions() {
    let double: f64 = Float::from_float(0.5_f32);
    let single: f32 = Float::from_float(0.25_f64);

    assert_eq!(double, 0.5);
    assert_eq!(single, 0.25);

    assert_eq!(Float::abs(&-3.0_f64), 3.0);
    assert_eq!(Float::powi(&2.0_f32, 3), 8.0);
}

#[test]
fn test_float_bits_are_distinct() {
    assert_ne!((-3.0_f64).to_bits_u64(), 3.0_f64.to_bits_u64());
    assert_ne!(0.0_f64.to_bits_u64(), (-0.0_f64).to_bits_u64());

    assert_eq!(1.5_f32.to_bits_u64(), 1.5_f32.to_bits_u64());
}
