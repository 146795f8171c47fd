use clap::{Parser, Subcommand};

pub mod topology;
pub mod fold;
pub mod run;
pub mod mse;

#[derive(Parser)]
#[command(version, about)]
pub struct Arguments {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CLI
}

#[derive(Subcommand)]
pub enum CLI {
    /// Shift dataset columns and run the neural network.
    Run(run::RunCli),

    /// Calculate mean squared error between two datasets.
    Mse(mse::MseCli)
}

impl CLI {
    #[inline]
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Self::Run(command) => command.execute(),
            Self::Mse(command) => command.execute()
        }
    }
}

#[test]
fn test_cli_arguments() {
    use clap::CommandFactory;

    Arguments::command().debug_assert();

    let arguments = Arguments::parse_from([
        "synapse", "-vv", "run",
        "--dataset", "boxes.json",
        "--columns", "length,width",
        "--fold", "max"
    ]);

    assert_eq!(arguments.verbose, 2);

    match arguments.command {
        CLI::Run(command) => {
            assert_eq!(command.columns, ["length", "width"]);
            assert_eq!(command.fold, fold::Fold::Max);
            assert_eq!(command.activation, "sigmoid");
            assert!(command.network.is_none());
        }

        CLI::Mse(_) => panic!("run command expected")
    }
}
