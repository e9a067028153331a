use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "aw")]
#[command(about = "Ad-watch rewards CLI: sign in, watch an ad, earn points")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to client.server_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
