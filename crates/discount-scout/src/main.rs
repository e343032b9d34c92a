// Copyright 2026 Discount Scout Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use discount_scout::catalog::SourceCatalog;
use discount_scout::cli;

#[derive(Parser)]
#[command(
    name = "discount-scout",
    about = "Discount scout: hunt for promo codes across vendor, coupon and discussion sites",
    version,
    after_help = "Run 'discount-scout' with no command to scan every source and print the report."
)]
struct Cli {
    /// Enable verbose/debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan every source and print the report (the default)
    Scan,
    /// Check which of the fixed sources are reachable
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let catalog = SourceCatalog::zerotracegpt();

    match cli.command {
        None | Some(Commands::Scan) => cli::scan_cmd::run(&catalog).await,
        Some(Commands::Doctor) => cli::doctor::run(&catalog).await,
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "discount-scout", &mut std::io::stdout());
            Ok(())
        }
    }
}
