use crate::cli::Cli;
use clap::Parser;
use mkmk_template::prelude::GeneratorError;
use tracing_subscriber::EnvFilter;

mod cli;
mod regen;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = regen::Regenerator::regenerate(&cli.project, &cli.output, !cli.no_overwrite);
    match result {
        Ok(destination) => println!("🚀 Makefile regenerated at {}", destination.display()),
        Err(error) => {
            match error {
                GeneratorError::InvalidInput(error) => {
                    eprintln!("😢 Invalid input detected: {error}");
                }
                GeneratorError::Filesystem(error) => {
                    eprintln!("😭 Filesystem failure: {error}");
                }
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
