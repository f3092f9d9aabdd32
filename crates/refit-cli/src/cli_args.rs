use clap::{Parser, Subcommand};

use crate::roles::Role;

#[derive(Parser, Debug)]
#[command(name = "refit", version, about = "Gemini-assisted code repair and profile ingestion")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Include progress detail in output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Initialize refit in a repository
    Init,

    /// Flatten a project tree into one annotated context document
    Compact {
        /// Project root to compact
        project: String,
        /// Output file for the compacted document
        output: String,
    },

    /// Send a file and its project context to Gemini for correction
    Fix {
        /// Context document (e.g. produced by `refit compact`)
        context: String,
        /// File to fix; the corrected copy lands next to it with a
        /// `-fixed` suffix
        target: String,
    },

    /// Generate a role-specific Markdown guide from a project context
    Guide {
        /// Context document (e.g. produced by `refit compact`)
        context: String,
        /// Output file for the generated guide
        output: String,
        /// Specialist role the guide is written for; prompts
        /// interactively when omitted
        #[arg(long, value_enum)]
        role: Option<Role>,
    },

    /// Scan a profile document and load it into the profile database
    Load {
        /// Document containing the flat profile records
        data: String,
        /// Database path (defaults to the configured one)
        #[arg(long)]
        db: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
