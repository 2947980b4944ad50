//! UI rendering

use chrono::Local;
use perch_core::format;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::app::{App, Prompt};
use pomo::engine::SessionMode;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Mode tabs
            Constraint::Min(6),    // Timer
            Constraint::Length(3), // Lifetime stats
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_modes(f, app, chunks[1]);
    draw_timer(f, app, chunks[2]);
    draw_stats(f, app, chunks[3]);
    draw_footer(f, chunks[4]);

    if let Some(prompt) = app.prompt {
        draw_prompt(f, prompt);
    }
}

fn mode_color(mode: SessionMode) -> Color {
    match mode {
        SessionMode::Focus => Color::Magenta,
        SessionMode::ShortBreak => Color::Green,
        SessionMode::LongBreak => Color::Cyan,
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let state = if app.engine.is_running() {
        Span::styled(" [running]", Style::default().fg(Color::Green))
    } else {
        Span::styled(" [stopped]", Style::default().fg(Color::DarkGray))
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" pomo ", Style::default().fg(Color::Cyan).bold()),
        Span::raw("- "),
        Span::styled(
            app.engine.mode().label(),
            Style::default().fg(mode_color(app.engine.mode())).bold(),
        ),
        state,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn draw_modes(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (key, mode) in [
        ("f", SessionMode::Focus),
        ("s", SessionMode::ShortBreak),
        ("l", SessionMode::LongBreak),
    ] {
        let style = if mode == app.engine.mode() {
            Style::default().fg(mode_color(mode)).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}] {}", key, mode.label()), style));
        spans.push(Span::raw("   "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_timer(f: &mut Frame, app: &App, area: Rect) {
    let mode = app.engine.mode();
    let remaining = app.engine.remaining_seconds();
    let duration = mode.duration_seconds();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format::clock(remaining),
            Style::default().fg(mode_color(mode)).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.status.clone(),
            Style::default().fg(Color::White),
        )),
    ];

    if app.engine.is_running() {
        let ends_at = Local::now() + chrono::Duration::seconds(remaining as i64);
        lines.push(Line::from(Span::styled(
            format!("ends at {}", ends_at.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let timer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(mode_color(mode))),
    );
    f.render_widget(timer, chunks[0]);

    let elapsed = duration - remaining;
    let gauge = Gauge::default()
        .ratio(f64::from(elapsed) / f64::from(duration))
        .label(format!("{}%", (elapsed * 100) / duration))
        .gauge_style(Style::default().fg(mode_color(mode)).bg(Color::Black));
    f.render_widget(gauge, chunks[1]);
}

fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.engine.stats();
    let (hours, mins) = (stats.total_minutes / 60, stats.total_minutes % 60);

    let line = Line::from(vec![
        Span::styled(" Sessions: ", Style::default().fg(Color::Cyan)),
        Span::raw(stats.focus_sessions.to_string()),
        Span::raw("    "),
        Span::styled("Focused: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{}h {}m", hours, mins)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Lifetime ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " space start/pause   r reset   f/s/l mode   q quit",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(footer, area);
}

fn draw_prompt(f: &mut Frame, prompt: Prompt) {
    let question = match prompt {
        Prompt::ConfirmSwitch(_) => "Timer is running! Switch mode?",
        Prompt::SuggestFollowUp(SessionMode::Focus) => "Ready for another focus session?",
        Prompt::SuggestFollowUp(_) => "Switch to break mode?",
    };

    let area = centered_rect(f.area(), 40, 5);
    f.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::from(question),
        Line::from(""),
        Line::from(Span::styled(
            "[y]es / [n]o",
            Style::default().fg(Color::Yellow).bold(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(body, area);
}

/// A fixed-size rect centered in the given area
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
