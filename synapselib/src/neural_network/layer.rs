use super::prelude::*;

/// Generic `HiddenLayer` type with f32 float type.
pub type HiddenLayer32 = HiddenLayer<f32>;

/// Generic `HiddenLayer` type with f64 float type.
pub type HiddenLayer64 = HiddenLayer<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Borrowed view of any layer of the neural network.
///
/// Input layers only hold a vector of values, while hidden
/// layers hold neurons and can calculate their outputs.
pub enum Layer<'a, F: Float> {
    Input(&'a InputLayer<F>),
    Hidden(&'a HiddenLayer<F>)
}

impl<F: Float> Layer<'_, F> {
    #[inline]
    pub fn label(&self) -> &str {
        match self {
            Self::Input(layer) => layer.label(),
            Self::Hidden(layer) => layer.label()
        }
    }

    #[inline]
    /// Amount of values produced by the layer.
    pub fn size(&self) -> usize {
        match self {
            Self::Input(layer) => layer.vector().dimensions(),
            Self::Hidden(layer) => layer.size()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// First layer of the neural network holding its input values.
pub struct InputLayer<F: Float> {
    label: String,
    vector: Vector<F>
}

impl<F: Float> InputLayer<F> {
    #[inline]
    pub fn new(label: impl ToString, vector: impl Into<Vector<F>>) -> Self {
        Self {
            label: label.to_string(),
            vector: vector.into()
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn vector(&self) -> &Vector<F> {
        &self.vector
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Group of neurons representation.
///
/// Every neuron of the layer receives the same input, and
/// their outputs form the output vector of the layer in the
/// order the neurons were given. Output layer of the network
/// is a hidden layer as well.
///
/// ```
/// use synapselib::prelude::*;
///
/// let layer = HiddenLayer64::new("Layer1", [
///     Neuron::new([0.0, 1.0], 0.0),
///     Neuron::new([1.0, 0.0], 0.0)
/// ]);
///
/// let output = layer.forward(&NeuronInput::new("input", [2.0, 3.0]), linear).unwrap();
///
/// assert_eq!(output.values(), &[3.0, 2.0]);
/// ```
pub struct HiddenLayer<F: Float> {
    label: String,
    neurons: Vec<Neuron<F>>
}

impl<F: Float> HiddenLayer<F> {
    #[inline]
    pub fn new(label: impl ToString, neurons: impl Into<Vec<Neuron<F>>>) -> Self {
        Self {
            label: label.to_string(),
            neurons: neurons.into()
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    /// Return neurons of the current layer.
    pub fn neurons(&self) -> &[Neuron<F>] {
        &self.neurons
    }

    #[inline]
    /// Amount of neurons in the layer.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Calculate activated outputs of the neurons
    /// (perform forward propagation).
    pub fn forward(
        &self,
        input: &NeuronInput<F>,
        activation_function: impl Fn(F) -> F
    ) -> NetworkResult<Vector<F>> {
        let outputs = self.neurons.iter()
            .map(|neuron| neuron.forward(input, &activation_function))
            .collect::<NetworkResult<Vec<F>>>()?;

        tracing::debug!(layer = %self.label, input = input.label(), outputs = outputs.len(), "layer forward");

        Ok(Vector::new(outputs))
    }

    /// Checked version of `HiddenLayer::forward` for optional arguments.
    pub fn feed_forward(
        &self,
        input: Option<&NeuronInput<F>>,
        activation_function: Option<&dyn Fn(F) -> F>
    ) -> NetworkResult<Vector<F>> {
        let input = input.ok_or_else(NetworkError::input_missing)?;
        let activation_function = activation_function.ok_or_else(NetworkError::activation_function_missing)?;

        self.forward(input, activation_function)
    }
}

#[test]
fn test_input_layer() {
    let layer = InputLayer::new("Input", [2.0_f64, 3.0]);

    assert_eq!(layer.label(), "Input");
    assert_eq!(layer.vector(), &Vector::new([2.0, 3.0]));

    assert_eq!(Layer::Input(&layer).size(), 2);
}

#[test]
fn test_hidden_layer_forward() -> Result<(), NetworkError> {
    let layer = HiddenLayer64::new("Layer1", [
        Neuron::new([0.0, 1.0], 0.0),
        Neuron::new([0.0, 1.0], 0.0)
    ]);

    assert_eq!(Layer::Hidden(&layer).label(), "Layer1");
    assert_eq!(Layer::Hidden(&layer).size(), 2);

    let output = layer.forward(&NeuronInput::new("input", [2.0, 3.0]), sigmoid)?;

    assert_eq!(output.dimensions(), 2);
    assert!((output.values()[0] - 0.9525741268224334).abs() < 1e-12);
    assert_eq!(output.values()[0], output.values()[1]);

    Ok(())
}

#[test]
/// Outputs follow the order of the neurons.
fn test_hidden_layer_neurons_order() -> Result<(), NetworkError> {
    let layer = HiddenLayer64::new("Layer1", [
        Neuron::new([1.0, 0.0, 0.0], 0.0),
        Neuron::new([0.0, 1.0, 0.0], 0.0),
        Neuron::new([0.0, 0.0, 1.0], 0.5)
    ]);

    let output = layer.forward(&NeuronInput::new("input", [1.0, 2.0, 3.0]), linear)?;

    assert_eq!(output.values(), &[1.0, 2.0, 3.5]);

    Ok(())
}

#[test]
fn test_hidden_layer_errors() {
    let layer = HiddenLayer64::new("Layer1", [
        Neuron::new([0.0, 1.0], 0.0)
    ]);

    let input = NeuronInput::new("input", [1.0, 2.0, 3.0]);

    assert_eq!(
        layer.forward(&input, linear),
        Err(NetworkError::DimensionMismatch { left: 2, right: 3 })
    );

    assert_eq!(
        layer.feed_forward(Some(&input), None),
        Err(NetworkError::InvalidArgument(String::from("activation function missing")))
    );

    assert_eq!(
        layer.feed_forward(None, Some(&linear::<f64>)),
        Err(NetworkError::InvalidArgument(String::from("input missing")))
    );
}

#[test]
fn test_empty_hidden_layer() -> Result<(), NetworkError> {
    let layer = HiddenLayer64::new("Empty", Vec::new());

    let output = layer.forward(&NeuronInput::new("input", [1.0]), linear)?;

    assert_eq!(output.dimensions(), 0);

    Ok(())
}
