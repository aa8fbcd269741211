pub mod drink;
pub mod history;
pub mod init;
pub mod login;
pub mod logout;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod notify;
pub mod settings;
pub mod signup;
pub mod today;
pub mod whoami;

use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create an account")]
    Signup(signup::SignupArgs),
    #[command(about = "Log in")]
    Login(login::LoginArgs),
    #[command(about = "Log out")]
    Logout,
    #[command(about = "Show the logged-in user")]
    Whoami,
    #[command(about = "Record water intake", arg_required_else_help = true)]
    Drink(drink::DrinkArgs),
    #[command(about = "Show progress towards today's goal")]
    Today(today::TodayArgs),
    #[command(about = "Show recent daily totals")]
    History(history::HistoryArgs),
    #[command(about = "Show or change the daily goal and reminder interval")]
    Settings(settings::SettingsArgs),
    #[command(about = "Show or change wake-up, bedtime and reminder hours")]
    Notify(notify::NotifyArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migrations (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Signup(args) => signup::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Whoami => whoami::cmd(),
            Commands::Drink(args) => drink::cmd(args),
            Commands::Today(args) => today::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Notify(args) => notify::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Opens the store and resolves the logged-in user's email.
///
/// A session whose id no longer belongs to the email it was created for is
/// rejected, so a replaced database cannot hand the session to someone else.
fn current_user() -> Result<(Store, String)> {
    let session = Session::require()?;
    let store = Store::open_default()?;
    let email = session
        .resolve_email(&store)?
        .ok_or_else(|| msg_error_anyhow!(Message::UserNotFound))?;

    Ok((store, email))
}
