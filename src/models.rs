use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Difficulty tier assigned to every task.
///
/// Variants are declared in ascending order so the derived `Ord` matches the
/// difficulty score (easy < medium < hard).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Numeric score used for sorting and for template base tiers (1..=3).
    pub fn score(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Inverse of [`Difficulty::score`].
    pub fn from_score(score: u8) -> Option<Difficulty> {
        match score {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}' (expected easy, medium or hard)", other)),
        }
    }
}

/// Represents a single task in the user's list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier.
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub completed: bool,
    /// Soft reference to a [`Category`] id. Unknown ids are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Planned duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub has_timer: bool,
    #[serde(default)]
    pub has_reminder: bool,
    /// Clock string such as `"18:30"`, only meaningful when `has_reminder` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

/// A suggested task inside a category, tagged with its base tier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplate {
    pub title: String,
    /// Persisted as the numeric score 1, 2 or 3.
    #[serde(with = "base_difficulty")]
    pub base_difficulty: Difficulty,
}

mod base_difficulty {
    use super::Difficulty;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Difficulty, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(d.score())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Difficulty, D::Error> {
        let score = u8::deserialize(d)?;
        Difficulty::from_score(score)
            .ok_or_else(|| de::Error::custom(format!("base difficulty must be 1, 2 or 3, got {}", score)))
    }
}

/// A group of task templates. Built-in categories ship with the app;
/// custom ones are created by the user and only ever appended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: IconTag,
    pub color: ColorTag,
    #[serde(default)]
    pub tasks: Vec<TaskTemplate>,
}

// Closed sets of presentation labels. Unknown persisted values fall back to
// the declared default instead of failing the whole slot.
macro_rules! string_tag {
    ($(#[$meta:meta])* $name:ident, default = $default:ident, [$($variant:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                s.parse().unwrap_or_default()
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> Self {
                tag.as_str().to_string()
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| {
                        let names: Vec<&str> = $name::ALL.iter().map(|t| t.as_str()).collect();
                        format!("unknown {} '{}' (expected one of: {})", stringify!($name), s, names.join(", "))
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_tag!(
    /// Icon shown next to a category.
    IconTag,
    default = Star,
    [
        BookOpen, Dumbbell, Sparkles, User, Palette, Heart, Music, Coffee, Briefcase, Home,
        ShoppingCart, Utensils, Camera, Gamepad2, Plane, Star,
    ]
);

string_tag!(
    /// Accent colour of a category.
    ColorTag,
    default = Blue,
    [Blue, Orange, Emerald, Purple, Pink, Rose, Cyan, Amber, Indigo, Teal]
);

/// One snapshot per calendar day in the rolling history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub date: NaiveDate,
    /// Short weekday name, fixed when the entry is created.
    pub day: String,
    pub tasks_completed: u32,
    pub motivation_level: u8,
    pub streak: u32,
}

/// Derived progress metrics; never persisted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_completed: u32,
    pub current_streak: u32,
    /// Percentage of the trailing seven days with at least one completion.
    pub weekly_consistency: u32,
    pub momentum_points: u32,
    /// Exactly seven points, oldest first.
    pub chart: Vec<DailyStat>,
}
