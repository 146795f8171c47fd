use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use synapselib::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// JSON description of the neural network layers.
///
/// ```json
/// {
///     "input": { "label": "Input", "values": [2, 3] },
///     "hidden": [
///         { "label": "Layer1", "neurons": [{ "weights": [0, 1], "bias": 0 }] }
///     ],
///     "output": { "label": "Output", "neurons": [{ "weights": [1], "bias": null }] }
/// }
/// ```
pub struct Topology {
    pub input: InputLayerTopology,

    #[serde(default)]
    pub hidden: Vec<HiddenLayerTopology>,

    pub output: HiddenLayerTopology
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLayerTopology {
    #[serde(default)]
    pub label: String,

    pub values: Option<Vec<f64>>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenLayerTopology {
    #[serde(default)]
    pub label: String,

    pub neurons: Vec<NeuronTopology>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronTopology {
    pub weights: Option<Vec<f64>>,
    pub bias: Option<f64>,

    #[serde(default = "default_memoize")]
    pub memoize: bool
}

#[inline]
fn default_memoize() -> bool {
    true
}

impl Default for Topology {
    /// Input `[2, 3]`, one hidden layer of two neurons
    /// and an output layer of one neuron.
    fn default() -> Self {
        let neuron = || NeuronTopology {
            weights: Some(vec![0.0, 1.0]),
            bias: Some(0.0),
            memoize: true
        };

        Self {
            input: InputLayerTopology {
                label: String::from("Input"),
                values: Some(vec![2.0, 3.0])
            },

            hidden: vec![
                HiddenLayerTopology {
                    label: String::from("Layer1"),
                    neurons: vec![neuron(), neuron()]
                }
            ],

            output: HiddenLayerTopology {
                label: String::from("Output"),
                neurons: vec![neuron()]
            }
        }
    }
}

impl Topology {
    #[inline]
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Failed to parse network topology")
    }

    pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read network topology from {path:?}"))?;

        Self::parse(&content)
    }

    /// Build neural network described by the topology.
    pub fn build(&self) -> NeuralNetwork64 {
        NeuralNetwork::new(
            InputLayer::new(&self.input.label, Vector::from_option(self.input.values.clone())),
            self.hidden.iter().map(HiddenLayerTopology::build).collect::<Vec<_>>(),
            self.output.build()
        )
    }
}

impl HiddenLayerTopology {
    pub fn build(&self) -> HiddenLayer64 {
        let neurons = self.neurons.iter()
            .map(|neuron| {
                Neuron::from_options(neuron.weights.clone().map(Vector::new), neuron.bias)
                    .with_memoize(neuron.memoize)
            })
            .collect::<Vec<_>>();

        HiddenLayer::new(&self.label, neurons)
    }
}

#[test]
fn test_default_topology() -> anyhow::Result<()> {
    let network = Topology::default().build();

    let output = network.forward(sigmoid)?;

    assert!((output.values()[0] - 0.7216325609518421).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_parse_topology() -> anyhow::Result<()> {
    let topology = Topology::parse(r#"{
        "input": { "label": "Input", "values": [2, 3] },
        "hidden": [
            {
                "label": "Layer1",
                "neurons": [
                    { "weights": [1, 1], "bias": null },
                    { "weights": [1, -1], "bias": 1, "memoize": false }
                ]
            }
        ],
        "output": {
            "label": "Output",
            "neurons": [{ "weights": [1, 1], "bias": 0.5 }]
        }
    }"#)?;

    let network = topology.build();

    let neurons = network.hidden_layers()[0].neurons();

    assert_eq!(neurons[0].bias(), 0.0);
    assert!(neurons[0].memoize());
    assert!(!neurons[1].memoize());

    // Layer1 = [5, 0], output = 5 + 0 + 0.5
    assert_eq!(network.forward(linear)?.values(), &[5.5]);

    Ok(())
}

#[test]
fn test_parse_topology_without_hidden_layers() -> anyhow::Result<()> {
    let topology = Topology::parse(r#"{
        "input": { "values": null },
        "output": { "neurons": [{ "weights": null, "bias": 2 }] }
    }"#)?;

    let network = topology.build();

    assert!(network.hidden_layers().is_empty());
    assert_eq!(network.forward(linear)?.values(), &[2.0]);

    assert!(Topology::parse("[]").is_err());

    Ok(())
}
