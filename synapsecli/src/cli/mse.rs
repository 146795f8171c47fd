use std::path::PathBuf;

use clap::Args;
use colorful::Colorful;

use synapselib::prelude::*;

#[derive(Args)]
pub struct MseCli {
    #[arg(long, short)]
    /// Path to the JSON dataset with original values.
    pub dataset: PathBuf,

    #[arg(long, short)]
    /// Path to the JSON dataset with predicted values.
    pub predicted: PathBuf,

    #[arg(long, short)]
    /// Name of the compared column.
    pub column: String
}

impl MseCli {
    pub fn execute(self) -> anyhow::Result<()> {
        let dataset = read_dataset(&self.dataset)?;
        let predicted = read_dataset(&self.predicted)?;

        let error = mean_squared_error(&dataset, &predicted, &self.column)?;

        println!("{} {error}", format!("✅ MSE({}):", self.column).green());

        Ok(())
    }
}
