use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{BarChart, Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use super::app::{App, DisplayItem, InputMode, ViewMode};
use crate::categories::category_name;
use crate::messages::{completion_rate, empty_state, encouragement, motivation_blurb, streak_banner};
use crate::models::{DailyStat, Difficulty};
use crate::recommend::effective_difficulty;

fn difficulty_color(d: Difficulty) -> Color {
    match d {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.view_mode {
        ViewMode::Tasks => render_tasks(f, app, chunks[1]),
        ViewMode::Templates => render_templates(f, app, chunks[1]),
        ViewMode::Progress => render_progress(f, app, chunks[1]),
    }

    let help_text = match app.input_mode {
        InputMode::Normal => match app.view_mode {
            ViewMode::Tasks => "q: Quit | a: Add | Space: Toggle | d: Del | f: Filter | c: Hide Done | r: New Day | w: Water | +/-: Motivation | v: Templates",
            ViewMode::Templates => "q: Quit | Enter: Add Suggestion | +/-: Motivation | v: Progress",
            ViewMode::Progress => "q: Quit | +/-: Motivation | v: Tasks",
        },
        InputMode::Adding => "Enter: Next Step | Esc: Cancel",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);

    if app.input_mode == InputMode::Adding {
        let area = centered_rect(60, 3, f.area());
        f.render_widget(Clear, area);
        let title = match app.add_state.step {
            0 => "Add Task: Enter Title",
            1 => "Add Task: Difficulty (easy/medium/hard, blank = recommended)",
            2 => "Add Task: Duration in minutes (optional)",
            _ => "Add Task",
        };
        let input = Paragraph::new(app.input_buffer.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(input, area);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let done = app.completed_count();
    let total = app.tasks.len();
    let status = Line::from(format!(
        "Motivation {}/10 | {} of {} done ({}%) | Streak {} | Water {}",
        app.motivation,
        done,
        total,
        completion_rate(done, total),
        app.streak,
        app.water
    ));
    let second = match &app.status {
        Some(err) => Line::styled(err.clone(), Style::default().fg(Color::Red)),
        None => Line::from(format!(
            "{}  {}",
            motivation_blurb(app.motivation),
            encouragement(done, total, app.motivation, app.pick)
        )),
    };
    let header = Paragraph::new(vec![status, second])
        .block(Block::default().borders(Borders::ALL).title("MotiTask"));
    f.render_widget(header, area);
}

fn render_tasks(f: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(
        "Tasks - {}{}",
        app.filter,
        if app.hide_completed { " (completed hidden)" } else { "" }
    );

    if app.tasks.is_empty() {
        let (heading, description) = empty_state(app.motivation);
        let empty = Paragraph::new(vec![
            Line::styled(heading, Style::default().add_modifier(Modifier::BOLD)),
            Line::from(description),
        ])
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = app
        .display_items
        .iter()
        .map(|item| match item {
            DisplayItem::Header(label) => Row::new(vec![Cell::from(""), Cell::from(label.clone())])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            DisplayItem::Task(t) => {
                let style = if t.completed {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(difficulty_color(t.difficulty))
                };
                Row::new(vec![
                    Cell::from(if t.completed { "[x]" } else { "[ ]" }),
                    Cell::from(t.title.clone()),
                    Cell::from(t.difficulty.label()),
                    Cell::from(category_name(&app.custom_categories, t.category.as_deref())),
                    Cell::from(t.duration.map(|d| format!("{}m", d)).unwrap_or_default()),
                ])
                .style(style)
            }
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(24),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "Title", "Tier", "Category", "Time"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_templates(f: &mut Frame, app: &mut App, area: Rect) {
    let motivation = app.motivation;
    let rows: Vec<Row> = app
        .templates
        .iter()
        .map(|row| {
            let d = effective_difficulty(row.template.base_difficulty, motivation);
            Row::new(vec![
                Cell::from(row.category_name.clone()),
                Cell::from(row.template.title.clone()),
                Cell::from(d.label()),
            ])
            .style(Style::default().fg(difficulty_color(d)))
        })
        .collect();

    let widths = [Constraint::Length(14), Constraint::Min(30), Constraint::Length(8)];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Category", "Suggestion", "Tier"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Suggestions for motivation {}/10", motivation)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.template_state);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let Some(summary) = &app.summary else {
        f.render_widget(
            Paragraph::new("No progress recorded yet.").block(Block::default().borders(Borders::ALL).title("Progress")),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let active = summary.chart.iter().filter(|d| d.tasks_completed > 0).count();
    let stats = Paragraph::new(vec![
        Line::from(format!(
            "Total Completed: {}   Current Streak: {} days   Weekly Consistency: {}%   Momentum Points: {}",
            summary.total_completed, summary.current_streak, summary.weekly_consistency, summary.momentum_points
        )),
        Line::from(format!("This week: {} of 7 days active", active)),
        Line::styled(streak_banner(summary.current_streak), Style::default().fg(Color::Yellow)),
    ])
    .block(Block::default().borders(Borders::ALL).title("Your Progress"));
    f.render_widget(stats, chunks[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_bars(f, charts[0], "Daily Task Completions", &summary.chart, |d| d.tasks_completed as u64, Color::Green);
    render_bars(f, charts[1], "Motivation Trend", &summary.chart, |d| d.motivation_level as u64, Color::Magenta);
}

fn render_bars(f: &mut Frame, area: Rect, title: &str, chart: &[DailyStat], value: fn(&DailyStat) -> u64, color: Color) {
    let bars: Vec<(&str, u64)> = chart.iter().map(|d| (d.day.as_str(), value(d))).collect();
    let widget = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .data(bars.as_slice())
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color));
    f.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let margin = r.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(margin),
            Constraint::Length(height),
            Constraint::Length(margin),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
