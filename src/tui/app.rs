use chrono::Local;
use rand::Rng;
use ratatui::widgets::TableState;
use tracing::warn;

use crate::categories::{all_categories, DEFAULT_TEMPLATE_DURATION};
use crate::error::Result;
use crate::models::{Category, Difficulty, ProgressSummary, Task, TaskTemplate};
use crate::progress::aggregate;
use crate::recommend::{build_view, effective_difficulty, filter_templates, recommended_tier, ViewFilter};
use crate::session::{add_task, delete_task, reset_daily_tasks, toggle_task, NewTask};
use crate::storage::{
    clamp_motivation, load_custom_categories, load_hide_completed, load_history, load_motivation, load_streak,
    load_tasks, load_water_count, save_hide_completed, save_history, save_motivation, save_streak, save_tasks,
    save_water_count,
};

#[derive(PartialEq)]
pub enum InputMode {
    Normal,
    Adding,
}

#[derive(PartialEq)]
pub enum ViewMode {
    Tasks,
    Templates,
    Progress,
}

pub enum DisplayItem {
    Header(String),
    Task(Task),
}

/// A suggestion offered at the current motivation, with its category.
pub struct TemplateRow {
    pub category_id: String,
    pub category_name: String,
    pub template: TaskTemplate,
}

/// State for the multi-step "Add Task" wizard.
#[derive(Default)]
pub struct AddState {
    pub title: String,
    pub difficulty: Option<Difficulty>,
    pub step: usize, // 0: Title, 1: Difficulty, 2: Duration
}

pub struct App {
    pub tasks: Vec<Task>,
    pub motivation: u8,
    pub streak: u32,
    pub water: u32,
    pub hide_completed: bool,
    pub filter: ViewFilter,
    pub custom_categories: Vec<Category>,
    pub display_items: Vec<DisplayItem>,
    pub templates: Vec<TemplateRow>,
    pub summary: Option<ProgressSummary>,
    pub state: TableState,
    pub template_state: TableState,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub add_state: AddState,
    /// Index of the encouragement line shown in the header.
    pub pick: usize,
    /// Last error worth showing to the user.
    pub status: Option<String>,
}

impl App {
    /// Creates a new App instance and loads persisted state.
    pub fn new() -> App {
        let mut app = App {
            tasks: load_tasks(),
            motivation: load_motivation(),
            streak: load_streak(),
            water: load_water_count(),
            hide_completed: load_hide_completed(),
            filter: ViewFilter::Recommended,
            custom_categories: load_custom_categories(),
            display_items: Vec::new(),
            templates: Vec::new(),
            summary: None,
            state: TableState::default(),
            template_state: TableState::default(),
            view_mode: ViewMode::Tasks,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            add_state: AddState::default(),
            pick: rand::thread_rng().gen_range(0..3),
            status: None,
        };
        app.reload();
        app
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    fn report(&mut self, what: &str, res: Result<()>) {
        if let Err(e) = res {
            warn!(error = %e, "{}", what);
            self.status = Some(format!("{}: {}", what, e));
        }
    }

    fn persist_tasks(&mut self) {
        let res = save_tasks(&self.tasks).and_then(|_| save_streak(self.streak));
        self.report("Failed to save tasks", res);
    }

    /// Selects the next row in the current list.
    pub fn next(&mut self) {
        let (len, state) = match self.view_mode {
            ViewMode::Tasks => (self.display_items.len(), &mut self.state),
            ViewMode::Templates => (self.templates.len(), &mut self.template_state),
            ViewMode::Progress => return,
        };
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    /// Selects the previous row in the current list.
    pub fn previous(&mut self) {
        let (len, state) = match self.view_mode {
            ViewMode::Tasks => (self.display_items.len(), &mut self.state),
            ViewMode::Templates => (self.templates.len(), &mut self.template_state),
            ViewMode::Progress => return,
        };
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }

    fn selected_task_id(&self) -> Option<String> {
        if self.view_mode != ViewMode::Tasks {
            return None;
        }
        match self.state.selected().and_then(|i| self.display_items.get(i)) {
            Some(DisplayItem::Task(t)) => Some(t.id.clone()),
            _ => None,
        }
    }

    /// Toggles the selected task between pending and done.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if toggle_task(&mut self.tasks, &mut self.streak, &id).is_ok() {
                self.persist_tasks();
                self.reload();
            }
        }
    }

    /// Deletes the selected task.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if delete_task(&mut self.tasks, &id).is_ok() {
                self.persist_tasks();
                self.reload();
            }
        }
    }

    /// Marks every task as pending again.
    pub fn reset_day(&mut self) {
        if reset_daily_tasks(&mut self.tasks) > 0 {
            self.persist_tasks();
            self.reload();
        }
    }

    /// Rebuilds the task rows and template suggestions from in-memory state.
    pub fn reload(&mut self) {
        let view = build_view(self.motivation, &self.tasks, self.filter, self.hide_completed);

        self.display_items.clear();
        match self.filter {
            ViewFilter::Recommended => {
                if !view.pending.is_empty() {
                    self.display_items
                        .push(DisplayItem::Header(format!("Recommended: {} ({})", view.tier, view.pending.len())));
                    self.display_items.extend(view.pending.iter().cloned().map(DisplayItem::Task));
                }
            }
            ViewFilter::All => {
                for group in view.groups() {
                    self.display_items
                        .push(DisplayItem::Header(format!("{} Tasks ({})", group.difficulty, group.tasks.len())));
                    self.display_items.extend(group.tasks.into_iter().map(DisplayItem::Task));
                }
            }
        }
        if !view.completed.is_empty() {
            self.display_items
                .push(DisplayItem::Header(format!("Completed ({})", view.completed.len())));
            self.display_items.extend(view.completed.into_iter().map(DisplayItem::Task));
        }
        clamp_selection(&mut self.state, self.display_items.len());

        self.templates = all_categories(&self.custom_categories)
            .into_iter()
            .flat_map(|c| {
                filter_templates(&c.tasks, self.motivation)
                    .into_iter()
                    .map(|t| TemplateRow {
                        category_id: c.id.clone(),
                        category_name: c.name.clone(),
                        template: t.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        clamp_selection(&mut self.template_state, self.templates.len());
    }

    pub fn toggle_hide_completed(&mut self) {
        self.hide_completed = !self.hide_completed;
        let res = save_hide_completed(self.hide_completed);
        self.report("Failed to save setting", res);
        self.reload();
    }

    pub fn toggle_filter(&mut self) {
        self.filter = self.filter.toggled();
        self.reload();
    }

    /// Moves motivation by `delta`, staying within 1..=10.
    pub fn adjust_motivation(&mut self, delta: i64) {
        let next = clamp_motivation(self.motivation as i64 + delta);
        if next == self.motivation {
            return;
        }
        self.motivation = next;
        let res = save_motivation(next);
        self.report("Failed to save motivation", res);
        self.reload();
        if self.view_mode == ViewMode::Progress {
            self.refresh_progress();
        }
    }

    pub fn add_water(&mut self) {
        self.water = self.water.saturating_add(1);
        let res = save_water_count(self.water);
        self.report("Failed to save water count", res);
    }

    /// Cycles Tasks -> Templates -> Progress.
    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Tasks => ViewMode::Templates,
            ViewMode::Templates => {
                self.refresh_progress();
                ViewMode::Progress
            }
            ViewMode::Progress => ViewMode::Tasks,
        };
    }

    /// Records today's snapshot and recomputes the progress summary.
    pub fn refresh_progress(&mut self) {
        let today = Local::now().date_naive();
        let (history, summary) = aggregate(&self.tasks, self.streak, self.motivation, load_history(), today);
        let res = save_history(&history);
        self.report("Failed to save history", res);
        self.summary = Some(summary);
    }

    /// Adds the selected suggestion as a new task.
    pub fn add_from_template(&mut self) {
        if self.view_mode != ViewMode::Templates {
            return;
        }
        let Some(row) = self.template_state.selected().and_then(|i| self.templates.get(i)) else {
            return;
        };
        let mut new = NewTask::new(
            row.template.title.clone(),
            effective_difficulty(row.template.base_difficulty, self.motivation),
        );
        new.category = Some(row.category_id.clone());
        new.duration = Some(DEFAULT_TEMPLATE_DURATION);

        if add_task(&mut self.tasks, new).is_ok() {
            self.persist_tasks();
            self.view_mode = ViewMode::Tasks;
            self.reload();
        }
    }

    /// Initiates the "Add Task" wizard.
    pub fn start_add(&mut self) {
        if self.view_mode != ViewMode::Tasks {
            return;
        }
        self.input_mode = InputMode::Adding;
        self.add_state = AddState::default();
        self.input_buffer.clear();
    }

    /// Handles Enter while the "Add Task" wizard is open.
    pub fn handle_input(&mut self) {
        match self.add_state.step {
            0 => {
                // Title
                if !self.input_buffer.trim().is_empty() {
                    self.add_state.title = self.input_buffer.clone();
                    self.add_state.step += 1;
                    self.input_buffer.clear();
                }
            }
            1 => {
                // Difficulty, blank keeps the recommended tier
                let parsed = if self.input_buffer.trim().is_empty() {
                    Ok(recommended_tier(self.motivation))
                } else {
                    self.input_buffer.parse::<Difficulty>()
                };
                if let Ok(d) = parsed {
                    self.add_state.difficulty = Some(d);
                    self.add_state.step += 1;
                    self.input_buffer.clear();
                }
            }
            2 => {
                // Duration (optional)
                let duration = self.input_buffer.trim().parse::<u32>().ok();
                let difficulty = self.add_state.difficulty.unwrap_or(Difficulty::Medium);
                let mut new = NewTask::new(self.add_state.title.clone(), difficulty);
                new.duration = duration;
                if add_task(&mut self.tasks, new).is_ok() {
                    self.persist_tasks();
                }
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.reload();
            }
            _ => {}
        }
    }
}

fn clamp_selection(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
    } else if let Some(i) = state.selected() {
        if i >= len {
            state.select(Some(len - 1));
        }
    } else {
        state.select(Some(0));
    }
}
