use clap::Parser;

pub mod cli;
pub mod logger;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    let arguments = cli::Arguments::parse();

    logger::install_logger(arguments.verbose)?;

    arguments.command.execute()
}
