pub mod init;
pub mod phrases;
pub mod show;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the watch face in the terminal")]
    Watch(watch::WatchArgs),
    #[command(about = "Print the face for a single moment")]
    Show(show::ShowArgs),
    #[command(about = "List the phrases for every minute and hour")]
    Phrases(phrases::PhrasesArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Show(args) => show::cmd(args),
            Commands::Phrases(args) => phrases::cmd(args),
        }
    }
}
