use super::intake::HistoryEntry;
use super::user::{NotificationWindow, User};
use prettytable::{row, Table};

const TIME_FORMAT: &str = "%H:%M";

pub struct View {}

impl View {
    pub fn history(entries: &[HistoryEntry]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TOTAL (ML)", "GOAL"]);
        for entry in entries {
            let mark = if entry.goal_achieved { "✅ Goal Achieved" } else { "" };
            table.add_row(row![entry.date.format("%Y-%m-%d"), entry.total, mark]);
        }
        table.printstd();
    }

    pub fn notification_window(window: &NotificationWindow) {
        let mut table = Table::new();

        table.add_row(row!["WAKE UP", "BEDTIME", "REMINDERS FROM", "REMINDERS UNTIL"]);
        table.add_row(row![
            window.wake_up.format(TIME_FORMAT),
            window.bed_time.format(TIME_FORMAT),
            window.reminders.start.format(TIME_FORMAT),
            window.reminders.end.format(TIME_FORMAT)
        ]);
        table.printstd();
    }

    pub fn profile(user: &User) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "DAILY GOAL (ML)", "REMINDER (MIN)"]);
        table.add_row(row![user.id, user.name, user.email, user.daily_goal, user.reminder_interval]);
        table.printstd();
    }
}
