//! Rendering of the controller state.
//!
//! Stateless: every frame redraws from whatever the controller currently
//! exposes (post-filter list, load status, last failure message).

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;
use ticklist_client::{Filter, LoadStatus};

use crate::app::{App, Mode};

/// Draw one frame
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // filter tabs
            Constraint::Min(1),    // list
            Constraint::Length(3), // input / status
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let selected = match app.controller.filter() {
        Filter::All => 0,
        Filter::Active => 1,
        Filter::Done => 2,
    };

    let tabs = Tabs::new(vec!["All [1]", "Active [2]", "Done [3]"])
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Todos"));

    frame.render_widget(tabs, area);
}

fn render_list(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    if app.controller.status() == &LoadStatus::Loading {
        let loading = Paragraph::new("Loading...")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, area);
        return;
    }

    let items: Vec<ListItem> = app
        .controller
        .visible()
        .iter()
        .map(|todo| {
            let marker = if todo.done { "[x]" } else { "[ ]" };
            let style = if todo.done {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(todo.title.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.controller.visible().is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let input_title = |fallback: &'static str| -> String {
        app.message.clone().unwrap_or_else(|| fallback.to_string())
    };

    let (title, text) = match &app.mode {
        Mode::Adding { buffer } => (input_title("Add a todo..."), format!("{buffer}\u{2588}")),
        Mode::Editing { buffer, .. } => (input_title("Rename"), format!("{buffer}\u{2588}")),
        Mode::Normal => {
            let status = match app.controller.status() {
                LoadStatus::Failed(message) => Some(message.clone()),
                _ => app.message.clone(),
            };
            match status {
                Some(message) => ("Error".to_string(), message),
                None => (
                    "Keys".to_string(),
                    "a add  e edit  space toggle  d delete  r reload  q quit".to_string(),
                ),
            }
        }
    };

    let style = if title == "Error" || app.message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(footer, area);
}
