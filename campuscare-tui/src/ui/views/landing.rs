use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use campuscare_core::service_catalog;

use crate::app::App;

pub struct LandingView;

impl LandingView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Your Campus Health & Wellness Portal",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Book clinic appointments, chat with Francis the wellness assistant,",
                Style::default().fg(theme.foreground_dim()),
            )),
            Line::from(Span::styled(
                "and keep track of your campus care in one place.",
                Style::default().fg(theme.foreground_dim()),
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background()));
        frame.render_widget(hero, chunks[0]);

        Self::render_service_cards(frame, chunks[1], app);

        let prompt = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.foreground_dim())),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to sign in", Style::default().fg(theme.foreground_dim())),
        ]))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background()));
        frame.render_widget(prompt, chunks[2]);
    }

    fn render_service_cards(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let catalog = service_catalog();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let rows: Vec<Rect> = columns
            .iter()
            .flat_map(|col| {
                Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(*col)
                    .to_vec()
            })
            .collect();

        for (info, cell) in catalog.iter().zip(rows.iter()) {
            let block = Block::default()
                .title(format!(" {} ", info.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border()))
                .style(Style::default().bg(theme.surface()));
            let inner = block.inner(*cell);
            frame.render_widget(block, *cell);

            let blurb = Paragraph::new(Line::from(Span::styled(
                info.blurb,
                Style::default().fg(theme.foreground_dim()),
            )))
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.surface()));
            frame.render_widget(blurb, inner);
        }
    }
}
