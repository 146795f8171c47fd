use tracing::Level;

/// Install global compact logger writing to stderr.
///
/// Verbosity is the amount of `-v` flags given to the CLI:
/// warnings only by default, then info, debug and trace.
pub fn install_logger(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE
    };

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
