//! Krathub command-line client
//!
//! Logs in against the user service and keeps the session token in local
//! storage between invocations.

pub mod commands;
mod state;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use commands::CommandResult;
use krathub_core::Config;
pub use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "krathub", about = "Krathub account login and session CLI")]
pub struct Cli {
    /// TOML config file
    #[arg(long, env = "KRATHUB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Override the user service address
    #[arg(long, env = "KRATHUB_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Print command results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with email and password
    Login {
        login_id: String,
        #[arg(long, env = "KRATHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Signup {
        name: String,
        email: String,
        #[arg(long, env = "KRATHUB_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to --password
        #[arg(long)]
        password_confirm: Option<String>,
    },
    /// Show the logged-in user, fetching the profile if needed
    Whoami,
    /// Show the local session state without contacting the service
    Status,
    /// Forget the stored session
    Logout,
}

impl Cli {
    pub fn load_config(&self) -> krathub_core::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(base_url) = &self.base_url {
            config.api_base_url = base_url.clone();
        }
        Ok(config)
    }
}

/// Run one command. Returns `false` when the command failed.
pub async fn run(cli: &Cli, state: &AppState) -> anyhow::Result<bool> {
    match &cli.command {
        Command::Login { login_id, password } => {
            emit(cli, commands::auth::login(state, login_id, password).await)
        }
        Command::Signup {
            name,
            email,
            password,
            password_confirm,
        } => {
            let confirm = password_confirm.as_deref().unwrap_or(password);
            emit(
                cli,
                commands::auth::signup(state, name, email, password, confirm).await,
            )
        }
        Command::Whoami => emit(cli, commands::user::whoami(state).await),
        Command::Status => emit(cli, commands::user::status(state)),
        Command::Logout => emit(cli, commands::auth::logout(state)),
    }
}

fn emit<T: Serialize + fmt::Display>(cli: &Cli, result: CommandResult<T>) -> anyhow::Result<bool> {
    let rendered = result.render(cli.json)?;
    if result.success || cli.json {
        println!("{rendered}");
    } else {
        eprintln!("{rendered}");
    }
    Ok(result.success)
}
