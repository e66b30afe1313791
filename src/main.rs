mod cli;
mod elevate;
mod errors;
mod installer;
mod platform;
mod release;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    installer::run(&cli)
}
