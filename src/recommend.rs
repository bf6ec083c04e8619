use std::fmt;
use std::str::FromStr;

use crate::models::{Difficulty, Task, TaskTemplate};

/// Maximum number of tasks returned by the recommended view.
pub const RECOMMENDED_LIMIT: usize = 3;

/// Which incomplete tasks a [`TaskView`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFilter {
    /// Only tasks matching the recommended tier, capped at [`RECOMMENDED_LIMIT`].
    #[default]
    Recommended,
    /// Every incomplete task, sorted by difficulty then duration.
    All,
}

impl ViewFilter {
    pub fn toggled(self) -> ViewFilter {
        match self {
            ViewFilter::Recommended => ViewFilter::All,
            ViewFilter::All => ViewFilter::Recommended,
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewFilter::Recommended => f.write_str("recommended"),
            ViewFilter::All => f.write_str("all"),
        }
    }
}

impl FromStr for ViewFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recommended" | "rec" => Ok(ViewFilter::Recommended),
            "all" => Ok(ViewFilter::All),
            other => Err(format!("unknown filter '{}' (expected recommended or all)", other)),
        }
    }
}

/// Maps a motivation level to the difficulty tier worth attempting.
///
/// - `..=3`  -> easy
/// - `4..=7` -> medium
/// - `8..`   -> hard
///
/// Values outside 1..=10 are accepted and land in the nearest tier.
pub fn recommended_tier(motivation: u8) -> Difficulty {
    match motivation {
        0..=3 => Difficulty::Easy,
        4..=7 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// Sort key: difficulty score ascending, then duration ascending (missing = 0).
fn sort_key(task: &Task) -> (u8, u32) {
    (task.difficulty.score(), task.duration.unwrap_or(0))
}

/// Stable sort by difficulty, ties broken by duration.
pub fn sort_by_difficulty(tasks: &mut [Task]) {
    tasks.sort_by_key(sort_key);
}

/// Tasks of a single difficulty, in the order they appear in the view.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyGroup {
    pub difficulty: Difficulty,
    pub tasks: Vec<Task>,
}

/// Partitions tasks into easy/medium/hard buckets.
///
/// Each bucket keeps the input order and only non-empty buckets are returned.
pub fn group_by_difficulty(tasks: &[Task]) -> Vec<DifficultyGroup> {
    Difficulty::ALL
        .iter()
        .map(|&difficulty| DifficultyGroup {
            difficulty,
            tasks: tasks.iter().filter(|t| t.difficulty == difficulty).cloned().collect(),
        })
        .filter(|g| !g.tasks.is_empty())
        .collect()
}

/// Render-ready view of the task collection for one motivation level.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub filter: ViewFilter,
    pub tier: Difficulty,
    /// Incomplete tasks kept by the filter.
    pub pending: Vec<Task>,
    /// Completed tasks, sorted by difficulty. Empty when hidden.
    pub completed: Vec<Task>,
}

impl TaskView {
    /// Difficulty buckets of the pending section.
    pub fn groups(&self) -> Vec<DifficultyGroup> {
        group_by_difficulty(&self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }
}

/// Builds the filtered, sorted view shown in the task list.
pub fn build_view(motivation: u8, tasks: &[Task], filter: ViewFilter, hide_completed: bool) -> TaskView {
    let tier = recommended_tier(motivation);

    let pending = match filter {
        ViewFilter::Recommended => tasks
            .iter()
            .filter(|t| !t.completed && t.difficulty == tier)
            .take(RECOMMENDED_LIMIT)
            .cloned()
            .collect(),
        ViewFilter::All => {
            let mut pending: Vec<Task> = tasks.iter().filter(|t| !t.completed).cloned().collect();
            sort_by_difficulty(&mut pending);
            pending
        }
    };

    let completed = if hide_completed {
        Vec::new()
    } else {
        let mut done: Vec<Task> = tasks.iter().filter(|t| t.completed).cloned().collect();
        sort_by_difficulty(&mut done);
        done
    };

    TaskView { filter, tier, pending, completed }
}

/// Base tier a template must have to be offered at this motivation level.
pub fn target_base_difficulty(motivation: u8) -> Difficulty {
    recommended_tier(motivation)
}

/// Templates whose base tier matches the current motivation.
pub fn filter_templates(templates: &[TaskTemplate], motivation: u8) -> Vec<&TaskTemplate> {
    let target = target_base_difficulty(motivation);
    templates.iter().filter(|t| t.base_difficulty == target).collect()
}

/// Difficulty a template is stored with: its base tier, capped by what the
/// current motivation supports.
pub fn effective_difficulty(base: Difficulty, motivation: u8) -> Difficulty {
    base.min(recommended_tier(motivation))
}
