// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;

mod cli;
mod commands;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    let open = || Context::open(args.storage_dir.clone());

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Decode { token } => commands::decode(token)?,
        Commands::Inspect { token } => commands::inspect(token)?,
        Commands::Login {
            token,
            refresh_token,
        } => commands::login(&open(), token, refresh_token.as_deref())?,
        Commands::Logout => commands::logout(&open())?,
        Commands::Status => commands::status(&open())?,
        Commands::Check { path } => commands::check(&open(), path)?,
        Commands::Evaluate { access } => commands::evaluate_access(&open(), access)?,
        Commands::Routes => commands::routes(&open())?,
    }

    Ok(())
}
