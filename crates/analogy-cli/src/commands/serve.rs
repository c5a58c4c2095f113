//! Web server command.

use analogy_core::config::ProxyConfig;
use analogy_web::state::AppState;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// TOML file with provider settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Provider API key (overrides config and OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Chat model to use
    #[arg(long)]
    pub model: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./analogy-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = ProxyConfig::load(args.config.as_deref())
        .context("Failed to load proxy configuration")?;
    if let Some(key) = args.api_key {
        config.api_key = Some(key);
    }
    if let Some(model) = args.model {
        config.model = model;
    }

    println!();
    println!("  {} {}", "Analogy".cyan().bold(), "Generator".bold());
    println!();
    println!("  {}      http://{}:{}", "Form".green(), args.host, args.port);
    println!(
        "  {}     http://{}:{}/generate-analogy",
        "Proxy".green(),
        args.host,
        args.port
    );
    println!("  {}     {}", "Model".green(), config.model);
    if config.api_key().is_none() {
        println!(
            "  {}",
            "OPENAI_API_KEY is not set; generation requests will fail".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    tracing::info!(
        model = %config.model,
        base_url = %config.base_url,
        credential = config.api_key().is_some(),
        "Starting generation proxy"
    );

    let state = AppState::from_config(&config).context("Failed to build provider client")?;
    analogy_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
