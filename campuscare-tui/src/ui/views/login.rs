use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct LoginView;

impl LoginView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let width = 60u16.min(area.width.saturating_sub(4));
        let height = 11u16.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let card = Rect::new(x, y, width, height);

        let block = Block::default()
            .title(" Sign In ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(inner);

        let hint = Paragraph::new(Line::from(Span::styled(
            "This is a demo portal. Any email and password will work.",
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(hint, chunks[0]);

        let email = &app.login_form.email;
        let field_block = Block::default()
            .title(" Email ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()));
        let field_inner = field_block.inner(chunks[1]);
        frame.render_widget(field_block, chunks[1]);

        let field = Paragraph::new(Line::from(Span::styled(
            email.value(),
            Style::default().fg(theme.foreground()),
        )))
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(field, field_inner);

        frame.set_cursor_position((
            field_inner.x + email.cursor() as u16,
            field_inner.y,
        ));

        let note = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Tip: an email containing ", Style::default().fg(theme.foreground_dim())),
                Span::styled(
                    "admin",
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " signs in as clinic staff.",
                    Style::default().fg(theme.foreground_dim()),
                ),
            ]),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(note, chunks[2]);
    }
}
