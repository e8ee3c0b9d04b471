//! Kraftbox CLI - Database migrations and account management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! kb-cli migrate
//!
//! # Create an admin account
//! kb-cli admin create -e admin@kraftbox.io -n "Site Admin" -p <password> -r admin
//!
//! # Deactivate / reactivate an account
//! kb-cli admin deactivate -e admin@kraftbox.io
//! kb-cli admin activate -e admin@kraftbox.io
//!
//! # List accounts
//! kb-cli admin list
//!
//! # Delete expired sessions
//! kb-cli sessions prune
//! ```
//!
//! Admin accounts are provisioned here and only here; the HTTP surface has
//! no account-creation endpoint.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "kb-cli")]
#[command(author, version, about = "Kraftbox CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Manage bearer-token sessions
    Sessions {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account
    Create {
        /// Email the admin signs in with
        #[arg(short, long)]
        email: String,

        /// Display name shown in the CMS
        #[arg(short, long)]
        name: String,

        /// Initial password (hashed before storage)
        #[arg(short, long)]
        password: String,

        /// Admin role (`admin`, `editor`)
        #[arg(short, long, default_value = "editor")]
        role: String,
    },
    /// Deactivate an account so its tokens stop validating
    Deactivate {
        /// Email of the account to deactivate
        #[arg(short, long)]
        email: String,
    },
    /// Reactivate a previously deactivated account
    Activate {
        /// Email of the account to reactivate
        #[arg(short, long)]
        email: String,
    },
    /// List all admin accounts
    List,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Delete sessions whose expiry has passed
    Prune,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
                role,
            } => {
                commands::admin::create(&email, &name, &password, &role).await?;
            }
            AdminAction::Deactivate { email } => {
                commands::admin::set_active(&email, false).await?;
            }
            AdminAction::Activate { email } => {
                commands::admin::set_active(&email, true).await?;
            }
            AdminAction::List => commands::admin::list().await?,
        },
        Commands::Sessions { action } => match action {
            SessionAction::Prune => commands::sessions::prune().await?,
        },
    }
    Ok(())
}
