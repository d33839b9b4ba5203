// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contactbook - contact form backend and command-line client.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod serve;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use contactbook_client::{HttpContactService, SortOrder};
use contactbook_core::ContactId;

/// Contactbook - store and manage contact form submissions.
#[derive(Parser, Debug)]
#[command(name = "contactbook", version, about, long_about = None)]
struct Cli {
    /// Read this TOML file instead of the standard lookup locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the contact API server.
    Serve,
    /// List contacts from the configured API.
    List {
        /// default, newest, oldest, name-asc, name-desc or email-asc.
        #[arg(long, default_value_t = SortOrder::Default)]
        sort: SortOrder,
    },
    /// Submit a new contact.
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Delete a contact by id.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => contactbook_config::load_and_validate_path(path),
        None => contactbook_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            contactbook_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server.log_level);

    let Some(command) = cli.command else {
        println!("contactbook: use --help for available commands");
        return ExitCode::SUCCESS;
    };

    let api = HttpContactService::from_config(&config.client);
    let mut stdout = std::io::stdout();
    let result = match command {
        Commands::Serve => {
            return match serve::run_serve(config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{} {e}", "error:".red().bold());
                    ExitCode::FAILURE
                }
            };
        }
        Commands::List { sort } => commands::list(&api, sort, &mut stdout).await,
        Commands::Add {
            name,
            email,
            phone,
            message,
        } => {
            let fields = commands::AddFields {
                name,
                email,
                phone,
                message,
            };
            commands::add(&api, fields, &mut stdout).await
        }
        Commands::Delete { id, yes } => {
            let mut prompt = commands::TerminalPrompt::new(
                yes,
                std::io::stdin().lock(),
                std::io::stderr(),
            );
            commands::delete(&api, &ContactId(id), &mut prompt, &mut stdout).await
        }
        Commands::Config => commands::print_config(&config, &mut stdout),
    };

    result.unwrap_or_else(|e| {
        eprintln!("{} {e}", "error:".red().bold());
        ExitCode::FAILURE
    })
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("contactbook={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
