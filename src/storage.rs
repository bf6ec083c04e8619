use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::models::{Category, DailyStat, Task};
use crate::progress::{sanitize_history, NEUTRAL_MOTIVATION};

/// Named slots of the persisted key-value store. Each slot is one JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Motivation,
    Tasks,
    Streak,
    CustomCategories,
    ProgressHistory,
    HideCompleted,
    WaterCount,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::Motivation,
        Slot::Tasks,
        Slot::Streak,
        Slot::CustomCategories,
        Slot::ProgressHistory,
        Slot::HideCompleted,
        Slot::WaterCount,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Slot::Motivation => "motivation",
            Slot::Tasks => "tasks",
            Slot::Streak => "streak",
            Slot::CustomCategories => "customCategories",
            Slot::ProgressHistory => "progressHistory",
            Slot::HideCompleted => "hideCompleted",
            Slot::WaterCount => "waterCount",
        }
    }
}

/// Returns the directory holding all slot files.
///
/// The path is determined in the following order:
/// 1. `MOTITASK_DIR` environment variable.
/// 2. `~/.local/share/motitask` (on Linux).
/// 3. `./motitask` (fallback).
pub fn data_dir() -> PathBuf {
    std::env::var("MOTITASK_DIR").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("motitask");
        p
    })
}

fn slot_path(slot: Slot) -> PathBuf {
    let mut p = data_dir();
    p.push(format!("{}.json", slot.key()));
    p
}

fn read_slot(slot: Slot) -> Option<String> {
    let path = slot_path(slot);
    if !path.exists() {
        return None;
    }
    let mut f = match OpenOptions::new().read(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            warn!(slot = slot.key(), error = %e, "cannot open slot, using default");
            return None;
        }
    };
    let mut s = String::new();
    if let Err(e) = f.read_to_string(&mut s) {
        warn!(slot = slot.key(), error = %e, "cannot read slot, using default");
        return None;
    }
    Some(s)
}

/// Loads a slot. Missing files yield `None`; malformed content is logged
/// and also yields `None` so callers fall back to their default.
pub fn load_slot<T: DeserializeOwned>(slot: Slot) -> Option<T> {
    let s = read_slot(slot)?;
    match serde_json::from_str(&s) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(slot = slot.key(), error = %e, "malformed slot, using default");
            None
        }
    }
}

/// Replaces the whole content of a slot.
pub fn save_slot<T: Serialize + ?Sized>(slot: Slot, value: &T) -> Result<()> {
    let dir = data_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let s = serde_json::to_string_pretty(value)?;
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(slot_path(slot))?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Clamps a motivation value into 1..=10.
pub fn clamp_motivation(value: i64) -> u8 {
    value.clamp(1, 10) as u8
}

pub fn load_motivation() -> u8 {
    load_slot::<i64>(Slot::Motivation)
        .map(clamp_motivation)
        .unwrap_or(NEUTRAL_MOTIVATION)
}

pub fn save_motivation(motivation: u8) -> Result<()> {
    save_slot(Slot::Motivation, &clamp_motivation(motivation as i64))
}

/// Loads all tasks, newest first. Empty when missing or unreadable.
pub fn load_tasks() -> Vec<Task> {
    load_slot(Slot::Tasks).unwrap_or_default()
}

pub fn save_tasks(tasks: &[Task]) -> Result<()> {
    save_slot(Slot::Tasks, tasks)
}

pub fn load_streak() -> u32 {
    load_slot(Slot::Streak).unwrap_or(0)
}

pub fn save_streak(streak: u32) -> Result<()> {
    save_slot(Slot::Streak, &streak)
}

pub fn load_custom_categories() -> Vec<Category> {
    load_slot(Slot::CustomCategories).unwrap_or_default()
}

pub fn save_custom_categories(categories: &[Category]) -> Result<()> {
    save_slot(Slot::CustomCategories, categories)
}

/// Loads the rolling history.
///
/// A slot that is not a JSON array is treated as empty. Entries that do not
/// parse are dropped one by one, and the remaining entries are normalised to
/// one per date and at most thirty.
pub fn load_history() -> Vec<DailyStat> {
    let raw: Vec<serde_json::Value> = match load_slot(Slot::ProgressHistory) {
        Some(v) => v,
        None => return Vec::new(),
    };
    let total = raw.len();
    let entries: Vec<DailyStat> = raw
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();
    if entries.len() < total {
        warn!(
            slot = Slot::ProgressHistory.key(),
            dropped = total - entries.len(),
            "dropped malformed history entries"
        );
    }
    sanitize_history(entries)
}

pub fn save_history(history: &[DailyStat]) -> Result<()> {
    save_slot(Slot::ProgressHistory, history)
}

pub fn load_hide_completed() -> bool {
    load_slot(Slot::HideCompleted).unwrap_or(false)
}

pub fn save_hide_completed(hide: bool) -> Result<()> {
    save_slot(Slot::HideCompleted, &hide)
}

pub fn load_water_count() -> u32 {
    load_slot(Slot::WaterCount).unwrap_or(0)
}

pub fn save_water_count(count: u32) -> Result<()> {
    save_slot(Slot::WaterCount, &count)
}

/// Deletes every slot file.
pub fn delete_database() -> Result<()> {
    for slot in Slot::ALL {
        let path = slot_path(slot);
        if path.exists() {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}
