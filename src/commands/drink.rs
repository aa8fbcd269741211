use super::{current_user, today::show_progress};
use crate::{libs::messages::Message, msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct DrinkArgs {
    /// Amount in millilitres
    #[arg(required = true)]
    amount: u32,
    /// Day to log against (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

pub fn cmd(args: DrinkArgs) -> Result<()> {
    if args.amount == 0 {
        msg_bail_anyhow!(Message::InvalidAmount);
    }
    let (store, email) = current_user()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    store
        .log_intake(&email, date, args.amount)
        .map_err(|e| msg_error_anyhow!(Message::IntakeLogFailed(e.to_string())))?;
    msg_success!(Message::IntakeLogged(args.amount));

    show_progress(&store, &email, Some(date))
}
