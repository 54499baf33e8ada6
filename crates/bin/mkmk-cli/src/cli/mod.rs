use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name of the package the generated targets operate on
    #[arg(short, long)]
    pub project: String,

    /// Path to the directory that receives the Makefile.
    ///
    /// Any existing Makefile in this directory is replaced unless
    /// --no-overwrite is given, please be sure when running.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Refuse to replace an existing Makefile
    #[arg(long)]
    pub no_overwrite: bool,
}
