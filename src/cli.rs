use crate::commands::init::InitArgs;
use crate::commands::list::ListArgs;
use crate::commands::pull::PullArgs;
use crate::commands::sync::SyncArgs;
use crate::commands::target::TargetArgs;
use crate::config::resolve_config_dir;
use crate::logging;
use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Configuration directory for skillshare (default: ~/.config/skillshare)
    #[arg(short = 'C', long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Print debug logs to stderr (otherwise controlled by SKILLSHARE_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print the resolved configuration directory path and exit
    #[arg(long)]
    pub print_config_dir_path: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration and the source directory
    Init(InitArgs),
    /// Show how every target relates to the source
    Status,
    /// Link every target to the source, migrating existing files first
    Sync(SyncArgs),
    /// Copy skills created inside targets back into the source
    Pull(PullArgs),
    /// List skills in the source directory
    #[command(alias = "ls")]
    List(ListArgs),
    /// Manage configured targets
    #[command(alias = "targets")]
    Target(TargetArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.debug).map_err(|e| anyhow!(t!("errors.logging_init", error = e)))?;

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    if cli.print_config_dir_path {
        println!("{}", config_dir.display());
        return Ok(());
    }

    let Some(command) = &cli.command else {
        let mut command = Cli::command();
        command.print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Init(args) => crate::commands::init::run(&config_dir, args),
        Commands::Status => crate::commands::status::run(&config_dir),
        Commands::Sync(args) => crate::commands::sync::run(&config_dir, args),
        Commands::Pull(args) => crate::commands::pull::run(&config_dir, args),
        Commands::List(args) => crate::commands::list::run(&config_dir, args),
        Commands::Target(args) => crate::commands::target::run(&config_dir, args),
    }
}
