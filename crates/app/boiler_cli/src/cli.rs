use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and manage the Boiler Admin dashboard session.
#[derive(Parser)]
#[command(name = "boiler", version)]
pub struct Cli {
    /// Directory holding the persisted token.
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the CLI version.
    Version,

    /// Print the payload of a token as JSON.
    Decode {
        token: String,
    },

    /// Report the claims the dashboard reads from a token.
    Inspect {
        token: String,
    },

    /// Persist a token and switch to its session.
    Login {
        token: String,

        /// Accepted for parity with the auth service response; not stored.
        #[arg(long)]
        refresh_token: Option<String>,
    },

    /// Clear the persisted token.
    Logout,

    /// Print the current session as JSON.
    Status,

    /// Decide a navigation to a dashboard path.
    Check {
        path: String,
    },

    /// Decide a route access requirement for the current session.
    Evaluate {
        /// One of `public`, `authenticated`, `admin`.
        access: String,
    },

    /// List the sidebar routes visible to the current session.
    Routes,
}
