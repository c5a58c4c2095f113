//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod generate;
pub mod serve;

/// Analogy Generator - witty comparisons between any two things
#[derive(Parser)]
#[command(name = "analogy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the generation proxy and form page
    Serve(serve::ServeArgs),

    /// Generate an analogy through a running proxy
    Generate(generate::GenerateArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Generate(args) => generate::execute(args).await,
        }
    }
}
