use super::current_user;
use crate::{libs::messages::Message, msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// New daily goal in millilitres
    #[arg(short, long)]
    goal: Option<u32>,
    /// New reminder interval in minutes
    #[arg(short, long)]
    interval: Option<u32>,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let (store, email) = current_user()?;
    let current_goal = store.daily_goal(&email)?;
    let current_interval = store.reminder_interval(&email)?;

    if args.goal.is_none() && args.interval.is_none() {
        msg_print!(Message::CurrentSettings(current_goal, current_interval));
        return Ok(());
    }

    let goal = args.goal.unwrap_or(current_goal);
    let interval = args.interval.unwrap_or(current_interval);
    if !store.update_goal_and_interval(&email, goal, interval)? {
        msg_bail_anyhow!(Message::SettingsSaveFailed);
    }

    msg_success!(Message::SettingsSaved);
    msg_print!(Message::CurrentSettings(goal, interval));
    Ok(())
}
