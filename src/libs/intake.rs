//! Intake aggregates and the goal annotations drawn on top of them.

use chrono::NaiveDate;

/// Number of distinct days returned by the history query unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 7;

/// Sum of all intake logged by one user on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyIntake {
    pub date: NaiveDate,
    pub total: u32,
}

/// A history row prepared for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub total: u32,
    pub goal_achieved: bool,
}

/// Marks each day whose total reached the goal. Order is preserved.
pub fn annotate(history: &[DailyIntake], daily_goal: u32) -> Vec<HistoryEntry> {
    history
        .iter()
        .map(|day| HistoryEntry {
            date: day.date,
            total: day.total,
            goal_achieved: day.total >= daily_goal,
        })
        .collect()
}

/// Today's standing against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total: u32,
    pub goal: u32,
}

impl Progress {
    pub fn new(total: u32, goal: u32) -> Self {
        Self { total, goal }
    }

    pub fn is_reached(&self) -> bool {
        self.total >= self.goal
    }

    /// Whole percent of the goal, capped at 100.
    pub fn percent(&self) -> u32 {
        if self.goal == 0 {
            return 100;
        }
        ((u64::from(self.total) * 100 / u64::from(self.goal)).min(100)) as u32
    }

    /// Fixed-width text bar for the terminal.
    pub fn bar(&self, width: usize) -> String {
        let filled = width * self.percent() as usize / 100;
        format!("[{}{}] {}%", "█".repeat(filled), "░".repeat(width - filled), self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, total: u32) -> DailyIntake {
        DailyIntake {
            date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            total,
        }
    }

    #[test]
    fn test_annotate_marks_goal_reached() {
        let history = vec![day(3, 2500), day(2, 2000), day(1, 1999)];
        let entries = annotate(&history, 2000);

        assert_eq!(entries.len(), 3);
        assert!(entries[0].goal_achieved);
        assert!(entries[1].goal_achieved);
        assert!(!entries[2].goal_achieved);
        assert_eq!(entries[2].date, history[2].date);
    }

    #[test]
    fn test_progress_percent_is_capped() {
        assert_eq!(Progress::new(500, 2000).percent(), 25);
        assert_eq!(Progress::new(3000, 2000).percent(), 100);
        assert_eq!(Progress::new(0, 0).percent(), 100);
        assert!(Progress::new(2000, 2000).is_reached());
    }

    #[test]
    fn test_progress_bar_width() {
        let bar = Progress::new(1000, 2000).bar(10);
        assert_eq!(bar, "[█████░░░░░] 50%");
    }
}
