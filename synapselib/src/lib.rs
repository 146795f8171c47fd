pub mod neural_network;
pub mod dataset;

pub mod prelude {
    pub use super::neural_network::prelude::*;
    pub use super::dataset::prelude::*;
}
