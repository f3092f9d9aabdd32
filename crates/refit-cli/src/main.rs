//! refit CLI — Gemini-assisted code repair and profile ingestion.
//!
//! This binary provides the `refit` command with subcommands for workspace
//! initialization, project compaction, code fixing, guide generation, and
//! profile loading. See `refit --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod gemini;
mod roles;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Init => commands::init::run(cli.verbose),
        Commands::Compact { project, output } => {
            commands::compact::run(cli.verbose, &project, &output)
        }
        Commands::Fix { context, target } => commands::fix::run(cli.verbose, &context, &target),
        Commands::Guide {
            context,
            output,
            role,
        } => commands::guide::run(cli.verbose, &context, &output, role),
        Commands::Load { data, db } => commands::load::run(cli.verbose, &data, db.as_deref()),
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    std::process::exit(exit_code);
}
