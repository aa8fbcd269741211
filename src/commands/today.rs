use super::current_user;
use crate::{
    db::store::Store,
    libs::{intake::Progress, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Args)]
pub struct TodayArgs {
    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

pub fn cmd(args: TodayArgs) -> Result<()> {
    let (store, email) = current_user()?;
    show_progress(&store, &email, args.date)
}

/// Prints the total for `date` (today when `None`) against the user's goal.
pub fn show_progress(store: &Store, email: &str, date: Option<NaiveDate>) -> Result<()> {
    let today = Local::now().date_naive();
    let day = date.unwrap_or(today);
    let progress = Progress::new(store.daily_total(email, day)?, store.daily_goal(email)?);

    if day == today {
        msg_print!(Message::DailyProgress(progress.total, progress.goal));
    } else {
        msg_print!(Message::DailyProgressForDate(day.format("%Y-%m-%d").to_string(), progress.total, progress.goal));
    }
    msg_print!(progress.bar(BAR_WIDTH));
    if progress.is_reached() {
        msg_success!(Message::GoalReachedToday);
    }
    Ok(())
}
