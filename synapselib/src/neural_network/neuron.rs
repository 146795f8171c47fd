use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::prelude::*;

/// Generic `Neuron` type with f32 float type.
pub type Neuron32 = Neuron<f32>;

/// Generic `Neuron` type with f64 float type.
pub type Neuron64 = Neuron<f64>;

/// Cache key built from exact bit patterns of the input values.
type InputKey = Box<[u64]>;

#[derive(Debug)]
/// Single neuron representation.
///
/// Neurons have a vector of weights and a single float bias.
/// When an input is given the neuron calculates dot product
/// of its weights and the input values, adds the bias and
/// applies provided activation function to the sum.
///
/// Weights and bias are fixed on construction. By default the
/// neuron memoizes its outputs: the activation function is called
/// at most once for each distinct input, and repeated inputs
/// are answered from the cache. The cache is guarded by a lock,
/// so neurons can be shared between threads.
///
/// ```
/// use synapselib::prelude::*;
///
/// let neuron = Neuron64::new([0.0, 1.0], 4.0);
///
/// let input = NeuronInput::new("x", [2.0, 3.0]);
/// let output = neuron.forward(&input, sigmoid).unwrap();
///
/// assert!((output - 0.999089).abs() < 1e-6);
/// ```
pub struct Neuron<F: Float> {
    weights: Vector<F>,
    bias: F,
    memoize: bool,
    outputs: RwLock<HashMap<InputKey, F>>
}

impl<F: Float> Neuron<F> {
    #[inline]
    /// Build memoized neuron with given weights and bias.
    pub fn new(weights: impl Into<Vector<F>>, bias: F) -> Self {
        Self {
            weights: weights.into(),
            bias,
            memoize: true,
            outputs: RwLock::new(HashMap::new())
        }
    }

    #[inline]
    /// Build neuron from optional weights and bias.
    ///
    /// Absent weights produce an empty weights vector,
    /// absent bias is replaced by zero.
    pub fn from_options(weights: Option<Vector<F>>, bias: Option<F>) -> Self {
        Self::new(weights.unwrap_or_default(), bias.unwrap_or(F::ZERO))
    }

    #[inline]
    /// Enable or disable outputs memoization.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;

        self
    }

    #[inline]
    pub fn weights(&self) -> &Vector<F> {
        &self.weights
    }

    #[inline]
    pub fn bias(&self) -> F {
        self.bias
    }

    #[inline]
    pub fn memoize(&self) -> bool {
        self.memoize
    }

    /// Return amount of memoized outputs.
    pub fn cached_outputs(&self) -> usize {
        self.outputs.read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget all the memoized outputs.
    pub fn clear_cache(&self) {
        self.outputs.write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Calculate sum of inputs multiplied by appropriate weights
    /// plus the neuron's bias.
    pub fn calc_weighted_input(&self, input: &NeuronInput<F>) -> NetworkResult<F> {
        Ok(self.weights.dot(input.values())? + self.bias)
    }

    /// Calculate activated output of the neuron.
    ///
    /// If memoization is enabled and the same input values
    /// were already seen then the stored output is returned
    /// without calling the activation function.
    pub fn forward(
        &self,
        input: &NeuronInput<F>,
        activation_function: impl Fn(F) -> F
    ) -> NetworkResult<F> {
        if !self.memoize {
            return Ok(activation_function(self.calc_weighted_input(input)?));
        }

        let key = Self::input_key(input);

        let cached = self.outputs.read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied();

        if let Some(output) = cached {
            tracing::trace!(input = input.label(), %output, "neuron cache hit");

            return Ok(output);
        }

        let output = activation_function(self.calc_weighted_input(input)?);

        tracing::trace!(input = input.label(), %output, "neuron cache miss");

        self.outputs.write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, output);

        Ok(output)
    }

    /// Checked version of `Neuron::forward` for optional arguments.
    ///
    /// Return `NetworkError::InvalidArgument` if either
    /// the input or the activation function is absent.
    pub fn feed_forward(
        &self,
        input: Option<&NeuronInput<F>>,
        activation_function: Option<&dyn Fn(F) -> F>
    ) -> NetworkResult<F> {
        let input = input.ok_or_else(NetworkError::input_missing)?;
        let activation_function = activation_function.ok_or_else(NetworkError::activation_function_missing)?;

        self.forward(input, activation_function)
    }

    fn input_key(input: &NeuronInput<F>) -> InputKey {
        input.values()
            .values()
            .iter()
            .map(Float::to_bits_u64)
            .collect()
    }
}

impl<F: Float> Clone for Neuron<F> {
    fn clone(&self) -> Self {
        let outputs = self.outputs.read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        Self {
            weights: self.weights.clone(),
            bias: self.bias,
            memoize: self.memoize,
            outputs: RwLock::new(outputs)
        }
    }
}

impl<F: Float> PartialEq for Neuron<F> {
    /// Neurons are equal when they have the same parameters.
    /// Memoized outputs are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.weights == other.weights &&
        self.bias == other.bias &&
        self.memoize == other.memoize
    }
}

#[cfg(test)]
fn counting<F: Float>(output: F, calls: &std::cell::RefCell<Vec<F>>) -> impl Fn(F) -> F + '_ {
    move |x| {
        calls.borrow_mut().push(x);

        output
    }
}

#[test]
fn test_neuron_params() {
    let neuron = Neuron64::new([0.0, 1.0], 4.0);

    assert_eq!(neuron.weights(), &Vector::new([0.0, 1.0]));
    assert_eq!(neuron.bias(), 4.0);
    assert!(neuron.memoize());
    assert_eq!(neuron.cached_outputs(), 0);

    let neuron = Neuron64::from_options(None, Some(4.0));

    assert_eq!(neuron.weights(), &Vector::default());

    let neuron = Neuron64::from_options(Some(Vector::new([0.0, 1.0])), None);

    assert_eq!(neuron.bias(), 0.0);
    assert!(!neuron.with_memoize(false).memoize());
}

#[test]
fn test_neuron_forward() -> Result<(), NetworkError> {
    let neuron = Neuron64::new([0.0, 1.0], 4.0);
    let input = NeuronInput::new("x", [2.0, 3.0]);

    let output = neuron.forward(&input, sigmoid)?;

    assert_eq!((output * 1e6).round() / 1e6, 0.999089);

    Ok(())
}

#[test]
fn test_neuron_forward_dimension_mismatch() {
    let neuron = Neuron64::new([0.0, 1.0], 4.0);
    let input = NeuronInput::new("x", [2.0, 3.0, 4.0]);

    assert_eq!(
        neuron.forward(&input, sigmoid),
        Err(NetworkError::DimensionMismatch { left: 2, right: 3 })
    );

    assert_eq!(neuron.cached_outputs(), 0);
}

#[test]
fn test_neuron_feed_forward_missing_arguments() {
    let input = NeuronInput::new("x", [2.0, 3.0]);

    for neuron in [Neuron64::new([0.0, 1.0], 4.0), Neuron64::from_options(None, None)] {
        assert_eq!(
            neuron.feed_forward(None, Some(&sigmoid::<f64>)),
            Err(NetworkError::InvalidArgument(String::from("input missing")))
        );

        assert_eq!(
            neuron.feed_forward(Some(&input), None),
            Err(NetworkError::InvalidArgument(String::from("activation function missing")))
        );
    }
}

#[test]
fn test_neuron_memoization() -> Result<(), NetworkError> {
    let calls = std::cell::RefCell::new(Vec::new());

    let neuron = Neuron64::new([0.0, 1.0], 4.0);
    let input = NeuronInput::new("x", [2.0, 3.0]);

    assert_eq!(neuron.forward(&input, counting(0.5, &calls))?, 0.5);
    assert_eq!(neuron.cached_outputs(), 1);

    // Same values under a different label are the same input.
    let input = NeuronInput::new("y", [2.0, 3.0]);

    assert_eq!(neuron.forward(&input, counting(0.5, &calls))?, 0.5);

    assert_eq!(calls.borrow().as_slice(), &[7.0]);

    neuron.clear_cache();

    assert_eq!(neuron.cached_outputs(), 0);

    neuron.forward(&input, counting(0.5, &calls))?;

    assert_eq!(calls.borrow().len(), 2);

    Ok(())
}

#[test]
fn test_neuron_without_memoization() -> Result<(), NetworkError> {
    let calls = std::cell::RefCell::new(Vec::new());

    let neuron = Neuron64::new([0.0, 1.0], 4.0).with_memoize(false);
    let input = NeuronInput::new("x", [2.0, 3.0]);

    neuron.forward(&input, counting(0.5, &calls))?;
    neuron.forward(&input, counting(0.5, &calls))?;

    assert_eq!(neuron.cached_outputs(), 0);
    assert_eq!(calls.borrow().as_slice(), &[7.0, 7.0]);

    Ok(())
}

#[test]
/// Memoized zero is still a memoized output.
fn test_neuron_memoized_zero() -> Result<(), NetworkError> {
    let calls = std::cell::RefCell::new(Vec::new());

    let neuron = Neuron64::new([1.0, 1.0], 0.0);
    let input = NeuronInput::new("x", [2.0, -2.0]);

    assert_eq!(neuron.forward(&input, counting(0.0, &calls))?, 0.0);
    assert_eq!(neuron.forward(&input, counting(0.0, &calls))?, 0.0);

    assert_eq!(calls.borrow().len(), 1);

    Ok(())
}

#[test]
/// Negative values must not produce colliding cache keys.
fn test_neuron_negative_inputs() -> Result<(), NetworkError> {
    let neuron = Neuron64::new([1.0, 1.0], 0.0);

    let a = neuron.forward(&NeuronInput::new("x", [-3.0, -5.0]), linear)?;
    let b = neuron.forward(&NeuronInput::new("x", [3.0, -35.0]), linear)?;

    assert_eq!(a, -8.0);
    assert_eq!(b, -32.0);
    assert_eq!(neuron.cached_outputs(), 2);

    Ok(())
}

#[test]
fn test_neuron_shared_between_threads() {
    let neuron = Neuron64::new([0.5, 0.5], 1.0);

    let outputs = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|i| {
                let neuron = &neuron;

                scope.spawn(move || {
                    let input = NeuronInput::new("x", [i as f64 % 2.0, 1.0]);

                    neuron.forward(&input, tanh)
                })
            })
            .collect::<Vec<_>>();

        handles.into_iter()
            .map(|handle| handle.join().expect("thread should not panic"))
            .collect::<Result<Vec<_>, _>>()
    });

    let outputs = outputs.expect("forward pass should succeed");

    assert_eq!(outputs[0], outputs[2]);
    assert_eq!(outputs[1], outputs[3]);
    assert_eq!(neuron.cached_outputs(), 2);
}
