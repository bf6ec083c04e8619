use std::io::{self, Write};

use chrono::Local;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use rand::Rng;
use tracing::info;

use crate::categories::{
    all_categories, category_name, find_category, new_custom_category, DEFAULT_TEMPLATE_DURATION,
};
use crate::error::{Error, Result};
use crate::messages::{completion_rate, empty_state, encouragement, motivation_blurb, streak_banner};
use crate::models::{Category, ColorTag, Difficulty, IconTag, ProgressSummary, Task};
use crate::progress::aggregate;
use crate::recommend::{build_view, effective_difficulty, filter_templates, recommended_tier, ViewFilter};
use crate::session::{add_task, delete_task, reset_daily_tasks, resolve_id, short_id, toggle_task, NewTask};
use crate::storage::{
    delete_database, load_custom_categories, load_hide_completed, load_history, load_motivation, load_streak,
    load_tasks, load_water_count, save_custom_categories, save_hide_completed, save_history, save_motivation,
    save_streak, save_tasks, save_water_count,
};

fn difficulty_color(d: Difficulty) -> Color {
    match d {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

/// Adds a free-form task. Returns its id.
#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    title: String,
    difficulty: Difficulty,
    category: Option<String>,
    duration: Option<u32>,
    timer: bool,
    reminder: Option<String>,
    silent: bool,
) -> Result<String> {
    let mut tasks = load_tasks();
    let task = add_task(
        &mut tasks,
        NewTask {
            title,
            difficulty,
            category,
            duration,
            has_timer: timer,
            reminder_time: reminder,
        },
    )?;
    save_tasks(&tasks)?;
    info!(id = %task.id, "task added");
    if !silent {
        println!("Task added (id = {}, {})", short_id(&task.id, &tasks), task.difficulty);
    }
    Ok(task.id)
}

/// Adds a task from the `number`-th template (1-based) that the category
/// offers at the current motivation level. Returns the new task's id.
pub fn cmd_pick(
    category_id: String,
    number: usize,
    duration: Option<u32>,
    timer: bool,
    reminder: Option<String>,
    silent: bool,
) -> Result<String> {
    let motivation = load_motivation();
    let custom = load_custom_categories();
    let category = find_category(&custom, &category_id).ok_or_else(|| Error::CategoryNotFound(category_id.clone()))?;

    let offered = filter_templates(&category.tasks, motivation);
    let template = number
        .checked_sub(1)
        .and_then(|i| offered.get(i))
        .ok_or_else(|| Error::TemplateNotFound { category: category.id.clone(), number })?;

    let mut tasks = load_tasks();
    let task = add_task(
        &mut tasks,
        NewTask {
            title: template.title.clone(),
            difficulty: effective_difficulty(template.base_difficulty, motivation),
            category: Some(category.id.clone()),
            duration: Some(duration.unwrap_or(DEFAULT_TEMPLATE_DURATION)),
            has_timer: timer,
            reminder_time: reminder,
        },
    )?;
    save_tasks(&tasks)?;
    if !silent {
        println!("Task '{}' added (id = {}, {})", task.title, short_id(&task.id, &tasks), task.difficulty);
    }
    Ok(task.id)
}

/// Flips completion of a task. Completing it bumps the streak.
pub fn cmd_toggle(id: String, silent: bool) -> Result<bool> {
    let mut tasks = load_tasks();
    let mut streak = load_streak();
    let full_id = resolve_id(&tasks, &id)?;
    let completed = toggle_task(&mut tasks, &mut streak, &full_id)?;
    save_tasks(&tasks)?;
    save_streak(streak)?;
    if !silent {
        if completed {
            println!("Task {} completed. Streak: {}", short_id(&full_id, &tasks), streak);
        } else {
            println!("Task {} reopened.", short_id(&full_id, &tasks));
        }
    }
    Ok(completed)
}

/// Removes a task by id or unique id prefix.
pub fn cmd_remove(id: String, silent: bool) -> Result<()> {
    let mut tasks = load_tasks();
    let full_id = resolve_id(&tasks, &id)?;
    let removed = delete_task(&mut tasks, &full_id)?;
    save_tasks(&tasks)?;
    if !silent {
        println!("Task '{}' removed.", removed.title);
    }
    Ok(())
}

/// Marks every task incomplete for a fresh day.
pub fn cmd_reset_day(silent: bool) -> Result<usize> {
    let mut tasks = load_tasks();
    let changed = reset_daily_tasks(&mut tasks);
    save_tasks(&tasks)?;
    if !silent {
        println!("{} task(s) reopened for today.", changed);
    }
    Ok(changed)
}

/// Shows the motivation level, or sets it when `level` is given.
pub fn cmd_motivation(level: Option<u8>, silent: bool) -> Result<u8> {
    let motivation = match level {
        Some(l) => {
            save_motivation(l)?;
            load_motivation()
        }
        None => load_motivation(),
    };
    if !silent {
        println!("Motivation: {}/10 ({} tasks recommended)", motivation, recommended_tier(motivation));
        println!("{}", motivation_blurb(motivation));
    }
    Ok(motivation)
}

/// Flips the persisted "hide completed" flag. Returns the new value.
pub fn cmd_hide_completed(silent: bool) -> Result<bool> {
    let hide = !load_hide_completed();
    save_hide_completed(hide)?;
    if !silent {
        println!("Completed tasks are now {}.", if hide { "hidden" } else { "shown" });
    }
    Ok(hide)
}

/// Bumps the water-intake counter. Returns the new count.
pub fn cmd_water(silent: bool) -> Result<u32> {
    let count = load_water_count().saturating_add(1);
    save_water_count(count)?;
    if !silent {
        println!("Glasses of water: {}", count);
    }
    Ok(count)
}

/// `all` is the whole collection, so shortened ids stay unique across sections.
fn task_table(tasks: &[Task], all: &[Task], custom: &[Category]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Difficulty").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Min").add_attribute(Attribute::Bold),
            Cell::new("Extras").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for t in tasks {
        let mut extras = Vec::new();
        if t.has_timer {
            extras.push("timer".to_string());
        }
        if let Some(at) = t.reminder_time.as_ref().filter(|_| t.has_reminder) {
            extras.push(format!("remind {}", at));
        }
        let (status, status_color) = if t.completed { ("Done", Color::Green) } else { ("Pending", Color::Yellow) };

        table.add_row(vec![
            Cell::new(short_id(&t.id, all)),
            Cell::new(&t.title),
            Cell::new(t.difficulty).fg(if t.completed { Color::Grey } else { difficulty_color(t.difficulty) }),
            Cell::new(category_name(custom, t.category.as_deref())),
            Cell::new(t.duration.map(|d| d.to_string()).unwrap_or_default()),
            Cell::new(extras.join(", ")),
            Cell::new(status).fg(status_color),
        ]);
    }
    table
}

/// Prints the task list for the current motivation level.
pub fn cmd_list(filter: ViewFilter) -> Result<()> {
    let tasks = load_tasks();
    let motivation = load_motivation();
    let streak = load_streak();
    let custom = load_custom_categories();
    let hide_completed = load_hide_completed();

    let done = tasks.iter().filter(|t| t.completed).count();
    println!(
        "Motivation {}/10 | {} of {} done ({}%) | Streak {}",
        motivation,
        done,
        tasks.len(),
        completion_rate(done, tasks.len()),
        streak
    );
    let pick = rand::thread_rng().gen_range(0..3);
    println!("{}\n", encouragement(done, tasks.len(), motivation, pick));

    if tasks.is_empty() {
        let (title, description) = empty_state(motivation);
        println!("{}: {}", title, description);
        return Ok(());
    }

    let view = build_view(motivation, &tasks, filter, hide_completed);
    match filter {
        ViewFilter::Recommended => {
            println!("Recommended for you: {} tasks", view.tier);
            if view.pending.is_empty() {
                println!("No {} tasks waiting. Use --all-tasks to see everything.", view.tier.label().to_lowercase());
            } else {
                println!("{}", task_table(&view.pending, &tasks, &custom));
            }
        }
        ViewFilter::All => {
            if view.pending.is_empty() {
                println!("Nothing left to do.");
            }
            for group in view.groups() {
                println!("{} Tasks ({})", group.difficulty, group.tasks.len());
                println!("{}", task_table(&group.tasks, &tasks, &custom));
            }
        }
    }

    if !view.completed.is_empty() {
        println!("\nCompleted ({})", view.completed.len());
        println!("{}", task_table(&view.completed, &tasks, &custom));
    }
    Ok(())
}

/// Creates a custom category. Returns its id.
pub fn cmd_category_add(name: String, icon: IconTag, color: ColorTag, silent: bool) -> Result<String> {
    let mut custom = load_custom_categories();
    let category = new_custom_category(&name, icon, color)?;
    let id = category.id.clone();
    custom.push(category);
    save_custom_categories(&custom)?;
    if !silent {
        println!("Category '{}' added (id = {}).", name.trim(), id);
    }
    Ok(id)
}

/// Lists built-in and custom categories.
pub fn cmd_category_list() -> Result<()> {
    let custom = load_custom_categories();
    let motivation = load_motivation();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Name", "Icon", "Color", "Templates", "Offered now"]);
    for c in all_categories(&custom) {
        table.add_row(vec![
            c.id.clone(),
            c.name.clone(),
            c.icon.to_string(),
            c.color.to_string(),
            c.tasks.len().to_string(),
            filter_templates(&c.tasks, motivation).len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Lists the templates a category offers at the current motivation level.
pub fn cmd_category_templates(id: String) -> Result<()> {
    let custom = load_custom_categories();
    let motivation = load_motivation();
    let category = find_category(&custom, &id).ok_or(Error::CategoryNotFound(id))?;
    let offered = filter_templates(&category.tasks, motivation);

    if offered.is_empty() {
        println!("'{}' has no templates for motivation {}.", category.name, motivation);
        return Ok(());
    }

    println!("{} - suggestions at motivation {}/10", category.name, motivation);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["#", "Title", "Difficulty"]);
    for (i, t) in offered.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&t.title),
            Cell::new(effective_difficulty(t.base_difficulty, motivation)),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Records today's snapshot into the history and shows the progress summary.
pub fn cmd_progress(silent: bool) -> Result<ProgressSummary> {
    let tasks = load_tasks();
    let streak = load_streak();
    let motivation = load_motivation();
    let history = load_history();
    let today = Local::now().date_naive();

    let (history, summary) = aggregate(&tasks, streak, motivation, history, today);
    save_history(&history)?;

    if silent {
        return Ok(summary);
    }

    let mut stats = Table::new();
    stats.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Total Completed").add_attribute(Attribute::Bold),
        Cell::new("Current Streak").add_attribute(Attribute::Bold),
        Cell::new("Weekly Consistency").add_attribute(Attribute::Bold),
        Cell::new("Momentum Points").add_attribute(Attribute::Bold),
    ]);
    stats.add_row(vec![
        Cell::new(summary.total_completed).fg(Color::Green),
        Cell::new(format!("{} days", summary.current_streak)).fg(Color::DarkYellow),
        Cell::new(format!("{}%", summary.weekly_consistency)).fg(Color::Blue),
        Cell::new(summary.momentum_points).fg(Color::Magenta),
    ]);
    println!("{stats}");

    let active = summary.chart.iter().filter(|d| d.tasks_completed > 0).count();
    println!("This week: {} of 7 days active\n", active);

    let mut chart = Table::new();
    chart
        .load_preset(UTF8_FULL)
        .set_header(vec!["Day", "Date", "Done", "", "Motivation", "Streak"]);
    for d in &summary.chart {
        chart.add_row(vec![
            Cell::new(&d.day),
            Cell::new(d.date),
            Cell::new(d.tasks_completed),
            Cell::new("#".repeat(d.tasks_completed.min(20) as usize)).fg(Color::Cyan),
            Cell::new(format!("{}/10", d.motivation_level)),
            Cell::new(d.streak),
        ]);
    }
    println!("{chart}");
    println!("{}", streak_banner(summary.current_streak));
    Ok(summary)
}

/// Deletes every persisted slot after confirmation.
pub fn cmd_reset(force: bool) -> Result<()> {
    if !force {
        print!("Are you sure you want to delete all tasks, categories and history? This cannot be undone. [y/N] ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return Ok(());
        }
    }

    delete_database()?;
    println!("All data reset.");
    Ok(())
}
