//! Rolling daily history and the progress metrics derived from it.
//!
//! All functions are pure: the caller passes the current snapshot (tasks,
//! streak, motivation, persisted history, today's date) and receives a new
//! history plus a [`ProgressSummary`]. Loading and saving is left to
//! [`crate::storage`].

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::models::{DailyStat, ProgressSummary, Task};

/// Maximum number of days kept in the history.
pub const HISTORY_LIMIT: usize = 30;
/// Length of the consistency window and of the chart series.
pub const WEEK_DAYS: usize = 7;
/// Motivation shown for days without any recorded entry.
pub const NEUTRAL_MOTIVATION: u8 = 5;

/// Number of completed tasks in the snapshot.
pub fn completed_count(tasks: &[Task]) -> u32 {
    tasks.iter().filter(|t| t.completed).count() as u32
}

/// Short English weekday name ("Mon", "Tue", ...).
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Writes today's snapshot into the history.
///
/// Appends a new entry when `today` has none (evicting the oldest entries
/// beyond [`HISTORY_LIMIT`]), otherwise overwrites the counters of the
/// existing entry. `date` and `day` of an existing entry never change.
pub fn record_day(history: &mut Vec<DailyStat>, today: NaiveDate, completed: u32, motivation: u8, streak: u32) {
    if let Some(entry) = history.iter_mut().find(|d| d.date == today) {
        debug!(date = %today, completed, motivation, streak, "updating today's history entry");
        entry.tasks_completed = completed;
        entry.motivation_level = motivation;
        entry.streak = streak;
        return;
    }

    debug!(date = %today, completed, motivation, streak, "appending history entry");
    history.push(DailyStat {
        date: today,
        day: weekday_label(today),
        tasks_completed: completed,
        motivation_level: motivation,
        streak,
    });
    truncate_history(history);
}

fn truncate_history(history: &mut Vec<DailyStat>) {
    if history.len() > HISTORY_LIMIT {
        let excess = history.len() - HISTORY_LIMIT;
        history.drain(..excess);
    }
}

fn last_week(history: &[DailyStat]) -> &[DailyStat] {
    &history[history.len().saturating_sub(WEEK_DAYS)..]
}

/// Share of the trailing seven days with at least one completion, in percent.
///
/// The denominator is always seven: days before the first recorded entry
/// count as inactive.
pub fn weekly_consistency(history: &[DailyStat]) -> u32 {
    let active = last_week(history).iter().filter(|d| d.tasks_completed > 0).count();
    (100.0 * active as f64 / WEEK_DAYS as f64).round() as u32
}

/// `completed * 10 + streak * 5 + round(consistency / 2)`, saturating at `u32::MAX`.
pub fn momentum_points(completed: u32, streak: u32, consistency: u32) -> u32 {
    completed
        .saturating_mul(10)
        .saturating_add(streak.saturating_mul(5))
        .saturating_add((consistency as f64 / 2.0).round() as u32)
}

/// Seven chart points, oldest first.
///
/// With a full week of history the last seven entries are used as they are.
/// Otherwise the window is the seven calendar days ending `today`, with
/// placeholder points for days that have no entry.
pub fn chart_series(history: &[DailyStat], today: NaiveDate) -> Vec<DailyStat> {
    let recent = last_week(history);
    if recent.len() == WEEK_DAYS {
        return recent.to_vec();
    }

    (0..WEEK_DAYS as u64)
        .rev()
        .map(|back| {
            let date = today.checked_sub_days(Days::new(back)).unwrap_or(today);
            recent
                .iter()
                .find(|d| d.date == date)
                .cloned()
                .unwrap_or_else(|| placeholder(date))
        })
        .collect()
}

fn placeholder(date: NaiveDate) -> DailyStat {
    DailyStat {
        date,
        day: weekday_label(date),
        tasks_completed: 0,
        motivation_level: NEUTRAL_MOTIVATION,
        streak: 0,
    }
}

/// Records today's snapshot and derives the summary shown on the progress view.
///
/// Calling it twice on the same date with the same inputs yields the same
/// history and the same summary.
pub fn aggregate(
    tasks: &[Task],
    streak: u32,
    motivation: u8,
    history: Vec<DailyStat>,
    today: NaiveDate,
) -> (Vec<DailyStat>, ProgressSummary) {
    let completed = completed_count(tasks);

    let mut history = history;
    record_day(&mut history, today, completed, motivation, streak);

    let consistency = weekly_consistency(&history);
    let summary = ProgressSummary {
        total_completed: completed,
        current_streak: streak,
        weekly_consistency: consistency,
        momentum_points: momentum_points(completed, streak, consistency),
        chart: chart_series(&history, today),
    };

    (history, summary)
}

/// Restores the history invariants on data read back from disk: one entry
/// per date (the later entry wins, keeping the earlier position) and at
/// most [`HISTORY_LIMIT`] entries.
pub fn sanitize_history(history: Vec<DailyStat>) -> Vec<DailyStat> {
    let mut clean: Vec<DailyStat> = Vec::with_capacity(history.len());
    for entry in history {
        match clean.iter_mut().find(|d| d.date == entry.date) {
            Some(existing) => *existing = entry,
            None => clean.push(entry),
        }
    }
    truncate_history(&mut clean);
    clean
}
