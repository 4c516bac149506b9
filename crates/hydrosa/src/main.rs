use clap::Parser;
use hydrosa::{Cli, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    run(&cli.command, stdin, stdout)?;

    tracing::debug!("hydrosa finished");
    Ok(())
}
