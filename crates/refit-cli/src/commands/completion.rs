use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli_args::Cli;

/// Run `refit completion <shell>` — write a completion script for the given
/// shell to stdout.
pub fn run(shell: Shell) -> i32 {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "refit", &mut std::io::stdout());
    0
}
