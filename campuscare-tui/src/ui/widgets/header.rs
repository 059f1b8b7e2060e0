use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Page};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28),
                Constraint::Min(20),
                Constraint::Length(20),
            ])
            .split(area);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("⚕ ", Style::default().fg(theme.accent())),
            Span::styled(
                "CampusCare ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{VERSION}"),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(logo, chunks[0]);

        match app.page {
            Page::Dashboard => Self::render_tabs(frame, chunks[1], app),
            page => {
                let title = Paragraph::new(Line::from(Span::styled(
                    page.name(),
                    Style::default().fg(theme.foreground_dim()),
                )))
                .block(Block::default().borders(Borders::NONE))
                .style(Style::default().bg(theme.background()));
                frame.render_widget(title, chunks[1]);
            }
        }

        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let time_widget = Paragraph::new(Line::from(Span::styled(
            time,
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(ratatui::layout::Alignment::Right)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(time_widget, chunks[2]);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let tabs = app.visible_tabs();

        let tab_titles: Vec<Line> = tabs
            .iter()
            .map(|tab| {
                let style = if *tab == app.tab {
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground_dim())
                };
                Line::from(Span::styled(tab.title(&app.capabilities), style))
            })
            .collect();

        let selected = tabs.iter().position(|t| *t == app.tab).unwrap_or(0);
        let tabs_widget = Tabs::new(tab_titles)
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(theme.background()))
            .highlight_style(Style::default().fg(theme.accent()))
            .select(selected)
            .divider(Span::raw(" │ "));
        frame.render_widget(tabs_widget, area);
    }
}
