use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
/// Labeled vector passed as an input to the neurons of a layer.
///
/// The label is carried along for identification only
/// and is never interpreted by the network.
pub struct NeuronInput<F: Float> {
    label: String,
    values: Vector<F>
}

impl<F: Float> NeuronInput<F> {
    #[inline]
    pub fn new(label: impl ToString, values: impl Into<Vector<F>>) -> Self {
        Self {
            label: label.to_string(),
            values: values.into()
        }
    }

    #[inline]
    /// Build new input with the same label and given values.
    pub fn with_values(self, values: impl Into<Vector<F>>) -> Self {
        Self {
            label: self.label,
            values: values.into()
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn values(&self) -> &Vector<F> {
        &self.values
    }
}

#[test]
fn test_neuron_input() {
    let input = NeuronInput::new("x", [2.0_f64, 3.0]);

    assert_eq!(input.label(), "x");
    assert_eq!(input.values(), &Vector::new([2.0, 3.0]));

    let input = input.with_values([4.0]);

    assert_eq!(input.label(), "x");
    assert_eq!(input.values().values(), &[4.0]);
}
