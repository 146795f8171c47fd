use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use colorful::Colorful;

use synapselib::prelude::*;

use super::fold::Fold;
use super::topology::Topology;

#[derive(Args)]
pub struct RunCli {
    #[arg(long, short)]
    /// Path to the JSON dataset file.
    pub dataset: PathBuf,

    #[arg(long, short, value_delimiter = ',')]
    /// Comma separated list of dataset columns to shift.
    pub columns: Vec<String>,

    #[arg(long, value_enum, default_value_t = Fold::Mean)]
    /// Fold used to compute columns shifts.
    pub fold: Fold,

    #[arg(long, short, default_value_t = String::from("sigmoid"))]
    /// Activation function of the neurons.
    ///
    /// Supported values: linear, sigmoid (logistic), tanh, relu.
    pub activation: String,

    #[arg(long, short)]
    /// Path to the JSON network topology file.
    ///
    /// Built-in two layers network is used when not specified.
    pub network: Option<PathBuf>
}

impl RunCli {
    pub fn execute(self) -> anyhow::Result<()> {
        let dataset_path = self.dataset.canonicalize().unwrap_or(self.dataset);

        println!("⏳ Reading dataset {dataset_path:?}...");

        let mut dataset = read_dataset(&dataset_path)?;

        shift_dataset(&mut dataset, &self.columns, self.fold.function(), self.fold.initial_value());

        println!("{}", "✅ Shifted dataset:".green());
        println!("{}", serde_json::to_string_pretty(&dataset)?);

        let topology = match &self.network {
            Some(path) => {
                println!("⏳ Reading network topology {path:?}...");

                Topology::read(path)?
            }

            None => Topology::default()
        };

        let network = topology.build();

        for layer in network.layers() {
            println!("{} {} ({} values)", "📖 Layer:".blue(), layer.label().yellow(), layer.size());
        }

        let activation_function = activation_by_name::<f64>(&self.activation);

        if activation_function.is_none() {
            tracing::warn!(activation = %self.activation, "unknown activation function");
        }

        let output = network.feed_forward(activation_function.as_ref().map(|function| function as &dyn Fn(f64) -> f64))
            .with_context(|| format!("Failed to run the network with '{}' activation function", self.activation))?;

        println!("{} {output}", "✅ Network output:".green());

        Ok(())
    }
}
