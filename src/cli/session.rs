//! Session CLI commands
//!
//! Login, logout and "who am I" against the local session file. Every
//! command goes through the session cache so reads and writes follow the
//! same invalidation rules the reports rely on.

use clap::Subcommand;

use super::context::CliContext;
use crate::auth::Credentials;
use crate::error::FintrackResult;
use crate::models::UserId;

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Log in; reports are then scoped to this user's records
    Login {
        /// Email address
        email: String,

        /// User id to log in as (issued automatically if omitted)
        #[arg(short, long)]
        user_id: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Log out of the current session
    Logout,

    /// Show the logged-in user
    Whoami,
}

/// Handle session commands
pub fn handle_session_command(ctx: &CliContext, cmd: SessionCommands) -> FintrackResult<()> {
    let mut cache = ctx.session_cache();

    match cmd {
        SessionCommands::Login {
            email,
            user_id,
            name,
        } => {
            let mut credentials = Credentials::new(email);
            if let Some(id) = user_id {
                credentials = credentials.with_user_id(UserId::from_raw(id));
            }
            if let Some(name) = name {
                credentials = credentials.with_name(name);
            }

            let user = cache.login(&credentials)?;
            println!("Logged in as {} ({})", user.display_name(), user.id);
        }
        SessionCommands::Logout => {
            cache.logout()?;
            println!("Logged out");
        }
        SessionCommands::Whoami => match cache.get_current_user()? {
            Some(user) => {
                println!("{} ({})", user.display_name(), user.id);
                if !user.email.is_empty() && user.email != user.display_name() {
                    println!("  {}", user.email);
                }
            }
            None => println!("Not logged in"),
        },
    }

    Ok(())
}
