//! Core of MotiTask: motivation-aware task recommendations and progress
//! tracking.
//!
//! The computational modules ([`recommend`], [`progress`], [`categories`],
//! [`messages`], [`session`]) are pure functions over in-memory snapshots.
//! [`storage`] loads and saves those snapshots as JSON slots, and
//! [`commands`] / [`tui`] are the presentation layer on top.

pub mod categories;
pub mod commands;
pub mod error;
pub mod logging;
pub mod messages;
pub mod models;
pub mod progress;
pub mod recommend;
pub mod session;
pub mod storage;
pub mod tui;

pub use error::{Error, Result};
