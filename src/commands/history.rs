use super::current_user;
use crate::{
    libs::{config::Config, intake::annotate, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of most recent days to show
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    limit: Option<u32>,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let (store, email) = current_user()?;
    let limit = match args.limit {
        Some(limit) => limit as usize,
        None => Config::read()?.history_limit(),
    };

    let history = store.recent_history(&email, limit)?;
    if history.is_empty() {
        msg_info!(Message::NoHistory);
        return Ok(());
    }

    let goal = store.daily_goal(&email)?;
    msg_print!(Message::HistoryHeader(limit), true);
    View::history(&annotate(&history, goal));
    Ok(())
}
