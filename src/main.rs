//! CLI entry point for the selection bias figure generator

use clap::Parser;
use stipplemask::io::cli::{Cli, MemeComposer};

fn main() -> stipplemask::Result<()> {
    let cli = Cli::parse();
    let composer = MemeComposer::new(cli);
    composer.compose()
}
