use super::prelude::*;

/// Generic `NeuralNetwork` type with f32 float type.
pub type NeuralNetwork32 = NeuralNetwork<f32>;

/// Generic `NeuralNetwork` type with f64 float type.
pub type NeuralNetwork64 = NeuralNetwork<f64>;

/// Label of the input passed to the first hidden layer.
pub const NETWORK_INPUT_LABEL: &str = "input";

#[derive(Debug, Clone, PartialEq)]
/// Feed-forward neural network.
///
/// Network consists of an input layer, zero or more hidden
/// layers and an output layer. Values of the input layer are
/// passed through every hidden layer in order, and outputs of
/// the last one are given to the output layer, which produces
/// the network's output vector. Topology can't be changed
/// after the network is built.
///
/// ```
/// use synapselib::prelude::*;
///
/// let network = NeuralNetwork64::new(
///     InputLayer::new("Input", [2.0, 3.0]),
///     [
///         HiddenLayer::new("Layer1", [
///             Neuron::new([0.0, 1.0], 0.0),
///             Neuron::new([0.0, 1.0], 0.0)
///         ])
///     ],
///     HiddenLayer::new("Output", [
///         Neuron::new([0.0, 1.0], 0.0)
///     ])
/// );
///
/// let output = network.forward(sigmoid).unwrap();
///
/// assert!((output.values()[0] - 0.7216325609518421).abs() < 1e-12);
/// ```
pub struct NeuralNetwork<F: Float> {
    input_layer: InputLayer<F>,
    hidden_layers: Vec<HiddenLayer<F>>,
    output_layer: HiddenLayer<F>
}

impl<F: Float> NeuralNetwork<F> {
    #[inline]
    pub fn new(
        input_layer: InputLayer<F>,
        hidden_layers: impl Into<Vec<HiddenLayer<F>>>,
        output_layer: HiddenLayer<F>
    ) -> Self {
        Self {
            input_layer,
            hidden_layers: hidden_layers.into(),
            output_layer
        }
    }

    #[inline]
    /// Append hidden layer right before the output layer.
    pub fn with_hidden_layer(mut self, layer: HiddenLayer<F>) -> Self {
        self.hidden_layers.push(layer);

        self
    }

    #[inline]
    pub fn input_layer(&self) -> &InputLayer<F> {
        &self.input_layer
    }

    #[inline]
    pub fn hidden_layers(&self) -> &[HiddenLayer<F>] {
        &self.hidden_layers
    }

    #[inline]
    pub fn output_layer(&self) -> &HiddenLayer<F> {
        &self.output_layer
    }

    /// Iterate over all the layers of the network, from the
    /// input layer to the output layer.
    pub fn layers(&self) -> impl Iterator<Item = Layer<'_, F>> {
        std::iter::once(Layer::Input(&self.input_layer))
            .chain(self.hidden_layers.iter().map(Layer::Hidden))
            .chain(std::iter::once(Layer::Hidden(&self.output_layer)))
    }

    /// Calculate output of the network (perform forward propagation)
    /// using given activation function for every neuron.
    pub fn forward(&self, activation_function: impl Fn(F) -> F) -> NetworkResult<Vector<F>> {
        let mut input = NeuronInput::new(NETWORK_INPUT_LABEL, self.input_layer.vector().clone());

        for layer in &self.hidden_layers {
            let output = layer.forward(&input, &activation_function)?;

            input = input.with_values(output);
        }

        let output = self.output_layer.forward(&input, &activation_function)?;

        tracing::debug!(output = %output, "network forward");

        Ok(output)
    }

    /// Checked version of `NeuralNetwork::forward` for optional
    /// activation function.
    pub fn feed_forward(&self, activation_function: Option<&dyn Fn(F) -> F>) -> NetworkResult<Vector<F>> {
        let activation_function = activation_function.ok_or_else(NetworkError::activation_function_missing)?;

        self.forward(activation_function)
    }
}

#[cfg(test)]
fn example_network() -> NeuralNetwork64 {
    NeuralNetwork::new(
        InputLayer::new("Input", [2.0, 3.0]),
        [
            HiddenLayer::new("Layer1", [
                Neuron::new([0.0, 1.0], 0.0),
                Neuron::new([0.0, 1.0], 0.0)
            ])
        ],
        HiddenLayer::new("Output", [
            Neuron::new([0.0, 1.0], 0.0)
        ])
    )
}

#[test]
fn test_network_forward() -> anyhow::Result<()> {
    let network = example_network();

    let output = network.forward(sigmoid)?;

    assert_eq!(output.dimensions(), 1);
    assert!((output.values()[0] - 0.7216325609518421).abs() < 1e-12);

    // Memoized outputs give the same result.
    assert_eq!(network.forward(sigmoid)?, output);

    Ok(())
}

#[test]
fn test_network_layers() {
    let network = example_network()
        .with_hidden_layer(HiddenLayer::new("Layer2", [
            Neuron::new([1.0, 1.0], 0.0),
            Neuron::new([1.0, -1.0], 0.0),
            Neuron::new([0.0, 0.0], 1.0)
        ]));

    let layers = network.layers()
        .map(|layer| (layer.label().to_string(), layer.size()))
        .collect::<Vec<_>>();

    assert_eq!(layers, [
        (String::from("Input"), 2),
        (String::from("Layer1"), 2),
        (String::from("Layer2"), 3),
        (String::from("Output"), 1)
    ]);

    assert_eq!(network.hidden_layers().len(), 2);
    assert_eq!(network.output_layer().label(), "Output");
    assert_eq!(network.input_layer().vector().dimensions(), 2);
}

#[test]
/// Network without hidden layers passes its input straight to the output layer.
fn test_network_without_hidden_layers() -> anyhow::Result<()> {
    let network = NeuralNetwork64::new(
        InputLayer::new("Input", [2.0, 3.0]),
        Vec::new(),
        HiddenLayer::new("Output", [
            Neuron::new([1.0, 1.0], 1.0),
            Neuron::new([2.0, 0.0], 0.0)
        ])
    );

    assert_eq!(network.forward(linear)?.values(), &[6.0, 4.0]);

    Ok(())
}

#[test]
fn test_network_errors() {
    let network = NeuralNetwork64::new(
        InputLayer::new("Input", [2.0, 3.0]),
        [
            HiddenLayer::new("Layer1", [
                Neuron::new([0.0, 1.0], 0.0)
            ])
        ],
        HiddenLayer::new("Output", [
            Neuron::new([0.0, 1.0], 0.0)
        ])
    );

    // Layer1 produces a single value while Output expects two.
    assert_eq!(
        network.forward(sigmoid),
        Err(NetworkError::DimensionMismatch { left: 2, right: 1 })
    );

    assert_eq!(
        example_network().feed_forward(None),
        Err(NetworkError::InvalidArgument(String::from("activation function missing")))
    );
}

#[test]
fn test_network_f32() -> Result<(), NetworkError> {
    let network = NeuralNetwork32::new(
        InputLayer::new("Input", [2.0, 3.0]),
        [
            HiddenLayer::new("Layer1", [
                Neuron::new([0.0, 1.0], 0.0),
                Neuron::new([0.0, 1.0], 0.0)
            ])
        ],
        HiddenLayer::new("Output", [
            Neuron::new([0.0, 1.0], 0.0)
        ])
    );

    let output = network.feed_forward(Some(&sigmoid::<f32>))?;

    assert!((output.values()[0] - 0.72163254).abs() < 1e-6);

    Ok(())
}
