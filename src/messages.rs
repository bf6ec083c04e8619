use crate::models::Difficulty;
use crate::recommend::recommended_tier;

const NO_TASKS: [&str; 3] = [
    "Every journey begins with a single step. Add your first task!",
    "Your potential is limitless. Let's start building momentum.",
    "Today is a fresh start. What would you like to accomplish?",
];

const LOW_PROGRESS: [&str; 3] = [
    "You've started! That takes courage. Keep going.",
    "Progress, not perfection. You're doing great.",
    "Small steps lead to big changes. Nice work!",
];

const MID_PROGRESS: [&str; 3] = [
    "You're making real progress! Keep up the momentum.",
    "Half way there! You should be proud of yourself.",
    "Your effort is paying off. Stay focused!",
];

const HIGH_PROGRESS: [&str; 3] = [
    "Almost there! You're crushing it today.",
    "So close to finishing! You've got this.",
    "Incredible progress! One more push!",
];

const COMPLETE: [&str; 3] = [
    "You did it! All tasks complete. Celebrate this win!",
    "Amazing! You've accomplished everything on your list.",
    "Perfect execution! Take a moment to appreciate your effort.",
];

const LOW_ENERGY: [&str; 3] = [
    "It's okay to take it slow. You showed up, and that matters.",
    "Even on low energy days, small wins count. Be gentle with yourself.",
    "Rest when you need to. Tomorrow is another opportunity.",
];

/// Which family of encouragement lines applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    NoTasks,
    LowEnergy,
    Complete,
    HighProgress,
    MidProgress,
    LowProgress,
}

impl Mood {
    fn lines(self) -> &'static [&'static str; 3] {
        match self {
            Mood::NoTasks => &NO_TASKS,
            Mood::LowEnergy => &LOW_ENERGY,
            Mood::Complete => &COMPLETE,
            Mood::HighProgress => &HIGH_PROGRESS,
            Mood::MidProgress => &MID_PROGRESS,
            Mood::LowProgress => &LOW_PROGRESS,
        }
    }
}

/// Picks the encouragement family from today's progress and motivation.
pub fn mood(completed: usize, total: usize, motivation: u8) -> Mood {
    if total == 0 {
        return Mood::NoTasks;
    }
    if recommended_tier(motivation) == Difficulty::Easy {
        return Mood::LowEnergy;
    }
    let ratio = completed as f64 / total as f64;
    if ratio >= 1.0 {
        Mood::Complete
    } else if ratio >= 0.75 {
        Mood::HighProgress
    } else if ratio >= 0.4 {
        Mood::MidProgress
    } else {
        Mood::LowProgress
    }
}

/// One encouragement line. `pick` chooses among the variants and wraps.
pub fn encouragement(completed: usize, total: usize, motivation: u8, pick: usize) -> &'static str {
    let lines = mood(completed, total, motivation).lines();
    lines[pick % lines.len()]
}

/// Fixed line describing a motivation level.
pub fn motivation_blurb(motivation: u8) -> &'static str {
    match motivation {
        0 | 1 => "That's okay. Let's start with something small.",
        2 => "Even small steps count. You've got this.",
        3 => "Taking it easy is perfectly fine.",
        4 => "Building momentum, one task at a time.",
        5 => "You're in a balanced state. Good for steady progress.",
        6 => "Nice energy! Ready for some productive work.",
        7 => "Feeling motivated! Let's tackle some challenges.",
        8 => "Great energy! Time to make real progress.",
        9 => "You're on fire! Let's accomplish big things.",
        _ => "Maximum power! Nothing can stop you today!",
    }
}

/// Title and description shown when the task list is empty.
pub fn empty_state(motivation: u8) -> (&'static str, &'static str) {
    match recommended_tier(motivation) {
        Difficulty::Easy => ("Start Small", "Add a simple task to get started. Even tiny wins count!"),
        Difficulty::Medium => ("Ready to Begin", "Add some tasks and make progress at your own pace."),
        Difficulty::Hard => ("Let's Go!", "You're full of energy! Add some challenging tasks to tackle."),
    }
}

/// Rounded share of completed tasks, 0 for an empty list.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 * 100.0 / total as f64).round() as u32
}

pub fn streak_banner(streak: u32) -> String {
    if streak > 0 {
        format!("You're on a {}-day streak! Don't break the chain.", streak)
    } else {
        "Complete a task today to start your streak!".to_string()
    }
}
