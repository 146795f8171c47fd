use serde::Serialize;

use super::prelude::*;

/// Generic `Vector` type with f32 float type.
pub type Vector32 = Vector<f32>;

/// Generic `Vector` type with f64 float type.
pub type Vector64 = Vector<f64>;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
/// Fixed size list of float numbers.
///
/// Vectors are immutable: their values are set once
/// on construction and can only be read afterwards.
///
/// ```
/// use synapselib::prelude::*;
///
/// let a = Vector64::new([1.0, 2.0, 3.0]);
/// let b = Vector64::new([4.0, 5.0, 6.0]);
///
/// assert_eq!(a.dot(&b), Ok(32.0));
/// ```
pub struct Vector<F: Float> {
    values: Box<[F]>
}

impl<F: Float> Vector<F> {
    #[inline]
    /// Build vector from the given values.
    pub fn new(values: impl Into<Vec<F>>) -> Self {
        Self {
            values: values.into().into_boxed_slice()
        }
    }

    #[inline]
    /// Build vector from optional values. Absent values
    /// produce an empty vector.
    pub fn from_option(values: Option<impl Into<Vec<F>>>) -> Self {
        values.map(Self::new).unwrap_or_default()
    }

    #[inline]
    /// Build vector of `dimensions` zeros.
    pub fn zeros(dimensions: usize) -> Self {
        Self::new(vec![F::ZERO; dimensions])
    }

    #[inline]
    /// Return values of the vector.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    #[inline]
    /// Return amount of values in the vector.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Calculate dot product of current and given vectors.
    ///
    /// Return `NetworkError::DimensionMismatch` if vectors
    /// have different dimensions. Dot product of two empty
    /// vectors is zero.
    pub fn dot(&self, other: &Self) -> NetworkResult<F> {
        if self.dimensions() != other.dimensions() {
            return Err(NetworkError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions()
            });
        }

        let mut output = F::ZERO;

        for (a, b) in self.values.iter().zip(other.values.iter()) {
            output += *a * *b;
        }

        Ok(output)
    }
}

impl<F: Float> From<Vec<F>> for Vector<F> {
    #[inline]
    fn from(values: Vec<F>) -> Self {
        Self::new(values)
    }
}

impl<F: Float, const N: usize> From<[F; N]> for Vector<F> {
    #[inline]
    fn from(values: [F; N]) -> Self {
        Self::new(values)
    }
}

impl<F: Float> std::fmt::Display for Vector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{value}")?;
        }

        write!(f, "]")
    }
}

#[cfg(test)]
fn random_vector(rng: &mut fastrand::Rng, dimensions: usize) -> Vector64 {
    Vector::new((0..dimensions).map(|_| rng.f64() * 200.0 - 100.0).collect::<Vec<_>>())
}

#[test]
fn test_vector_dimensions() {
    assert_eq!(Vector64::new([1.0, 2.0, 3.0]).dimensions(), 3);
    assert_eq!(Vector64::from_option(None::<Vec<f64>>).dimensions(), 0);
    assert_eq!(Vector64::from_option(Some(vec![1.0])).values(), &[1.0]);
    assert_eq!(Vector32::zeros(4).values(), &[0.0; 4]);
}

#[test]
fn test_vector_dot() -> Result<(), NetworkError> {
    let a = Vector64::new([1.0, 2.0, 3.0]);
    let b = Vector64::new([4.0, 5.0, 6.0]);

    assert_eq!(a.dot(&b)?, 32.0);
    assert_eq!(Vector64::default().dot(&Vector64::default())?, 0.0);

    Ok(())
}

#[test]
fn test_vector_dot_dimension_mismatch() {
    let a = Vector64::new([1.0, 2.0, 3.0]);
    let b = Vector64::new([4.0, 5.0]);

    assert_eq!(a.dot(&b), Err(NetworkError::DimensionMismatch { left: 3, right: 2 }));

    assert_eq!(
        a.dot(&b).unwrap_err().to_string(),
        "Vectors should have the same dimensions: 3 and 2"
    );
}

#[test]
/// Dot product is commutative and zero vector cancels everything.
fn test_vector_dot_properties() -> Result<(), NetworkError> {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..100 {
        let dimensions = rng.usize(0..16);

        let a = random_vector(&mut rng, dimensions);
        let b = random_vector(&mut rng, dimensions);

        assert_eq!(a.dot(&b)?, b.dot(&a)?);
        assert_eq!(a.dot(&Vector::zeros(dimensions))?, 0.0);
    }

    Ok(())
}

#[test]
fn test_vector_display() {
    assert_eq!(Vector64::new([0.5, -2.0]).to_string(), "[0.5, -2]");
    assert_eq!(Vector64::default().to_string(), "[]");
}
