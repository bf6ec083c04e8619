use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Category, ColorTag, Difficulty, IconTag, TaskTemplate};

type BuiltIn = (&'static str, &'static str, IconTag, ColorTag, [(&'static str, u8); 9]);

const BUILT_IN: [BuiltIn; 6] = [
    (
        "study",
        "Study",
        IconTag::BookOpen,
        ColorTag::Blue,
        [
            ("Review notes for 10 minutes", 1),
            ("Watch an educational video", 1),
            ("Read one chapter of a book", 2),
            ("Practice flashcards", 1),
            ("Complete one practice problem", 2),
            ("Summarize what you learned today", 2),
            ("Study for a full hour", 3),
            ("Complete an online course module", 3),
            ("Write a study guide", 3),
        ],
    ),
    (
        "fitness",
        "Fitness",
        IconTag::Dumbbell,
        ColorTag::Orange,
        [
            ("Do 5 stretches", 1),
            ("Take a 5-minute walk", 1),
            ("10 jumping jacks", 1),
            ("15-minute yoga session", 2),
            ("20 push-ups", 2),
            ("Go for a 20-minute jog", 2),
            ("Full 30-minute workout", 3),
            ("1-hour gym session", 3),
            ("Complete a HIIT workout", 3),
        ],
    ),
    (
        "cleaning",
        "Cleaning",
        IconTag::Sparkles,
        ColorTag::Emerald,
        [
            ("Make your bed", 1),
            ("Clear one surface", 1),
            ("Put away 5 items", 1),
            ("Wipe down kitchen counter", 2),
            ("Do a load of laundry", 2),
            ("Vacuum one room", 2),
            ("Deep clean the bathroom", 3),
            ("Organize a closet", 3),
            ("Full kitchen clean", 3),
        ],
    ),
    (
        "personal",
        "Personal",
        IconTag::User,
        ColorTag::Purple,
        [
            ("Drink a glass of water", 1),
            ("Take 5 deep breaths", 1),
            ("Write down 3 gratitudes", 1),
            ("Journal for 10 minutes", 2),
            ("Call a friend or family member", 2),
            ("Plan tomorrow's schedule", 2),
            ("Review and set weekly goals", 3),
            ("Declutter your digital space", 3),
            ("Create a monthly budget", 3),
        ],
    ),
    (
        "hobby",
        "Hobby",
        IconTag::Palette,
        ColorTag::Pink,
        [
            ("Doodle for 5 minutes", 1),
            ("Listen to a new song", 1),
            ("Take a creative photo", 1),
            ("Practice an instrument for 15 min", 2),
            ("Work on a craft project", 2),
            ("Try a new recipe", 2),
            ("Complete a creative project", 3),
            ("Learn a new skill for 1 hour", 3),
            ("Start a new hobby project", 3),
        ],
    ),
    (
        "mood",
        "Mood Booster",
        IconTag::Heart,
        ColorTag::Rose,
        [
            ("Smile at yourself in the mirror", 1),
            ("Watch a funny video", 1),
            ("Pet an animal or look at cute pictures", 1),
            ("Go outside for fresh air", 2),
            ("Do something kind for someone", 2),
            ("Dance to your favorite song", 2),
            ("Have a self-care session", 3),
            ("Reconnect with an old friend", 3),
            ("Plan something you're excited about", 3),
        ],
    ),
];

/// Duration in minutes given to tasks picked from a template when none is specified.
pub const DEFAULT_TEMPLATE_DURATION: u32 = 15;

/// Category id used for free-form tasks that were not picked from a template.
pub const CUSTOM_TASK_CATEGORY: &str = "custom";

/// The categories that ship with the app.
pub fn builtin_categories() -> Vec<Category> {
    BUILT_IN
        .iter()
        .map(|(id, name, icon, color, templates)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: *icon,
            color: *color,
            tasks: templates
                .iter()
                .filter_map(|(title, base)| {
                    Difficulty::from_score(*base).map(|base_difficulty| TaskTemplate {
                        title: title.to_string(),
                        base_difficulty,
                    })
                })
                .collect(),
        })
        .collect()
}

/// Built-in categories followed by the user's own, in creation order.
pub fn all_categories(custom: &[Category]) -> Vec<Category> {
    let mut all = builtin_categories();
    all.extend(custom.iter().cloned());
    all
}

/// Looks a category up by id (case-insensitive) among built-in and custom ones.
pub fn find_category(custom: &[Category], id: &str) -> Option<Category> {
    all_categories(custom)
        .into_iter()
        .find(|c| c.id.eq_ignore_ascii_case(id.trim()))
}

/// Display name for a task's category reference, falling back to the raw id
/// for categories that no longer exist.
pub fn category_name(custom: &[Category], id: Option<&str>) -> String {
    match id {
        None => "-".to_string(),
        Some(CUSTOM_TASK_CATEGORY) => "Custom".to_string(),
        Some(id) => find_category(custom, id).map(|c| c.name).unwrap_or_else(|| id.to_string()),
    }
}

/// Creates a new, empty custom category with a fresh id.
pub fn new_custom_category(name: &str, icon: IconTag, color: ColorTag) -> Result<Category> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    let suffix = Uuid::new_v4().simple().to_string();
    Ok(Category {
        id: format!("custom-{}", &suffix[..12]),
        name: name.to_string(),
        icon,
        color,
        tasks: Vec::new(),
    })
}
