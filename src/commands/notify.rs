use super::current_user;
use crate::{
    libs::{
        messages::Message,
        user::{parse_time, NotificationWindow, ReminderWindow},
        view::View,
    },
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Wake-up time (HH:MM)
    #[arg(long, value_parser = parse_hhmm)]
    wake: Option<NaiveTime>,
    /// Bedtime (HH:MM)
    #[arg(long, value_parser = parse_hhmm)]
    bed: Option<NaiveTime>,
    /// First reminder of the day (HH:MM), requires --end
    #[arg(long, value_parser = parse_hhmm)]
    start: Option<NaiveTime>,
    /// Last reminder of the day (HH:MM), requires --start
    #[arg(long, value_parser = parse_hhmm)]
    end: Option<NaiveTime>,
}

fn parse_hhmm(raw: &str) -> Result<NaiveTime, String> {
    parse_time(raw).ok_or_else(|| Message::InvalidTimeFormat(raw.to_string()).to_string())
}

pub fn cmd(args: NotifyArgs) -> Result<()> {
    let (store, email) = current_user()?;
    let current = store.notification_window(&email)?.unwrap_or_default();

    if args.wake.is_none() && args.bed.is_none() && args.start.is_none() && args.end.is_none() {
        msg_print!(Message::NotificationSettingsHeader, true);
        View::notification_window(&current);
        return Ok(());
    }

    let reminders = match (args.start, args.end) {
        (Some(start), Some(end)) => Some(ReminderWindow::new(start, end)),
        (None, None) => None,
        _ => msg_bail_anyhow!(Message::ReminderWindowIncomplete),
    };
    let wake_up = args.wake.unwrap_or(current.wake_up);
    let bed_time = args.bed.unwrap_or(current.bed_time);

    if !store.save_notification_window(&email, wake_up, bed_time, reminders)? {
        msg_bail_anyhow!(Message::NotificationSettingsSaveFailed);
    }

    msg_success!(Message::NotificationSettingsSaved);
    View::notification_window(&NotificationWindow {
        wake_up,
        bed_time,
        reminders: reminders.unwrap_or(current.reminders),
    });
    Ok(())
}
