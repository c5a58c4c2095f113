//! Terminal analogy form.

use analogy_core::client::{ProxyClient, DEFAULT_PROXY_URL};
use analogy_core::form::AnalogyForm;
use analogy_core::share::SocialNetwork;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Input;

use crate::terminal::TerminalEnvironment;

#[derive(Args)]
pub struct GenerateArgs {
    /// First concept (prompted for when omitted)
    pub thing1: Option<String>,

    /// Second concept (prompted for when omitted)
    pub thing2: Option<String>,

    /// Proxy endpoint to call
    #[arg(long, env = "ANALOGY_PROXY_URL", default_value = DEFAULT_PROXY_URL)]
    pub proxy_url: String,

    /// Origin share links point at
    #[arg(long, env = "ANALOGY_ORIGIN", default_value = "http://127.0.0.1:3030")]
    pub origin: String,

    /// Share the result (twitter, tiktok)
    #[arg(long)]
    pub share: Option<SocialNetwork>,

    /// Copy the share link to the clipboard
    #[arg(long)]
    pub copy_link: bool,

    /// Show the analogy carried by a share link instead of generating one
    #[arg(long, conflicts_with_all = ["thing1", "thing2"])]
    pub from_link: Option<String>,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let client = ProxyClient::new(&args.proxy_url);
    let mut form = AnalogyForm::new(args.origin.clone(), client, TerminalEnvironment::default());

    if let Some(link) = &args.from_link {
        if !form.restore_from(link) {
            anyhow::bail!("No analogy found in link: {}", link);
        }
    } else {
        form.set_thing1(concept(args.thing1, "Thing 1")?);
        form.set_thing2(concept(args.thing2, "Thing 2")?);
        form.submit().await?;
    }

    if let Some(analogy) = form.analogy() {
        println!();
        println!("{}", "Your Analogy".bold());
        println!("  {}", analogy.cyan());
    }
    if let Some(link) = form.share_url() {
        println!();
        println!("  {} {}", "Share".dimmed(), link);
    }
    println!();

    if let Some(network) = args.share {
        form.share_to(network)?;
    }
    if args.copy_link {
        form.copy_share_link();
    }

    Ok(())
}

/// Take the concept from the command line or ask for it.
fn concept(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}
