use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use campuscare_core::ChatRole;

use crate::app::App;
use crate::ui::widgets::Spinner;

pub struct ChatView;

impl ChatView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(3)])
            .split(area);

        let block = Block::default()
            .title(" Chat with Francis ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        for message in app.transcript.messages() {
            let (speaker, color) = match message.role {
                ChatRole::User => ("You", theme.accent()),
                ChatRole::Model => ("Francis", theme.info()),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{speaker}: "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    message.text.clone(),
                    Style::default().fg(theme.foreground()),
                ),
            ]));
            lines.push(Line::from(""));
        }

        // Keep the latest exchange in view on small terminals.
        let visible = inner.height as usize;
        let scroll = lines.len().saturating_sub(visible) as u16;

        let transcript = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .style(Style::default().bg(theme.surface()));
        frame.render_widget(transcript, inner);

        if app.chat_loading {
            let spinner_area = Rect::new(
                inner.x,
                inner.y + inner.height.saturating_sub(1),
                inner.width,
                1,
            );
            Spinner::new().with_message("Francis is typing...").render(
                frame,
                spinner_area,
                theme,
                app.animation_tick,
            );
        }

        Self::render_input(frame, chunks[1], app);
    }

    fn render_input(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input = Paragraph::new(Line::from(Span::styled(
            app.chat_input.value(),
            Style::default().fg(theme.foreground()),
        )))
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(input, inner);

        frame.set_cursor_position((inner.x + app.chat_input.cursor() as u16, inner.y));
    }
}
