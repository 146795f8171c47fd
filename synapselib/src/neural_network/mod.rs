pub mod float;
pub mod activations;
pub mod error;
pub mod vector;
pub mod neuron_input;
pub mod neuron;
pub mod layer;
pub mod network;

pub mod prelude {
    pub use super::float::*;
    pub use super::activations::*;
    pub use super::error::*;
    pub use super::vector::*;
    pub use super::neuron_input::*;
    pub use super::neuron::*;
    pub use super::layer::*;
    pub use super::network::*;
}
