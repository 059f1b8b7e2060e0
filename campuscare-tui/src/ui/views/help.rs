use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpView;

impl HelpView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let width = 56u16.min(area.width.saturating_sub(4));
        let height = 20u16.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let card = Rect::new(x, y, width, height);

        frame.render_widget(Clear, card);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let sections: [(&str, &[(&str, &str)]); 3] = [
            (
                "Navigation",
                &[
                    ("Tab / Shift-Tab", "Switch dashboard tabs"),
                    ("1 / 2 / 3", "Jump to tab"),
                    ("j / k", "Move selection"),
                    ("g / G", "First / last row"),
                    ("Esc", "Back / sign out"),
                    ("q", "Quit"),
                ],
            ),
            (
                "Appointments",
                &[
                    ("n", "Request a new appointment"),
                    ("a / x / m", "Approve / decline / complete (staff)"),
                    ("d", "Delete a closed record (staff)"),
                ],
            ),
            (
                "General",
                &[("t", "Cycle color theme"), ("?", "Toggle this help")],
            ),
        ];

        let mut lines = vec![Line::from("")];
        for (title, binds) in sections {
            lines.push(Line::from(Span::styled(
                format!("  {title}"),
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, desc) in binds {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {key:<16}"),
                        Style::default().fg(theme.foreground()),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.foreground_dim())),
                ]));
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }
}
