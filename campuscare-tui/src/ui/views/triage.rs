use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

/// Clinic-staff view over every appointment in the system, with the
/// selected record's details in a side panel.
pub struct TriageView;

impl TriageView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        Self::render_queue(frame, chunks[0], app);
        Self::render_details(frame, chunks[1], app);
    }

    fn render_queue(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let appointments = app.visible_appointments();

        let block = Block::default()
            .title(format!(" Appointment Queue ({}) ", appointments.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if appointments.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "  The queue is empty.",
                Style::default().fg(theme.foreground_dim()),
            )))
            .style(Style::default().bg(theme.surface()));
            frame.render_widget(empty, inner);
            return;
        }

        let header = Row::new(vec!["", "Patient", "Service", "Date", "Status"]).style(
            Style::default()
                .fg(theme.foreground_dim())
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = appointments
            .iter()
            .enumerate()
            .map(|(idx, appointment)| {
                let selected = idx == app.selected_index;
                let prefix = if selected { ">" } else { " " };
                let base = if selected {
                    Style::default()
                        .fg(theme.foreground())
                        .bg(theme.selection())
                } else {
                    Style::default().fg(theme.foreground())
                };
                Row::new(vec![
                    prefix.to_string(),
                    appointment.user_name.clone(),
                    appointment.service_type.label().to_string(),
                    appointment.date.format("%Y-%m-%d").to_string(),
                    appointment.status.to_string(),
                ])
                .style(base)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(18),
                Constraint::Length(26),
                Constraint::Length(11),
                Constraint::Min(9),
            ],
        )
        .header(header)
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(table, inner);
    }

    fn render_details(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let appointments = app.visible_appointments();
        let Some(appointment) = appointments.get(app.selected_index) else {
            return;
        };

        let label_style = Style::default().fg(theme.foreground_dim());
        let value_style = Style::default().fg(theme.foreground());

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Patient: ", label_style),
                Span::styled(appointment.user_name.clone(), value_style),
            ]),
            Line::from(vec![
                Span::styled("  Service: ", label_style),
                Span::styled(appointment.service_type.label(), value_style),
            ]),
            Line::from(vec![
                Span::styled("  When:    ", label_style),
                Span::styled(
                    format!(
                        "{} {}",
                        appointment.date.format("%Y-%m-%d"),
                        appointment.time.format("%H:%M")
                    ),
                    value_style,
                ),
            ]),
            Line::from(vec![
                Span::styled("  Status:  ", label_style),
                Span::styled(
                    appointment.status.to_string(),
                    Style::default()
                        .fg(theme.status_color(appointment.status))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("  Reason:", label_style)),
            Line::from(Span::styled(
                format!("  {}", appointment.reason),
                value_style,
            )),
        ];

        if let Some(ref notes) = appointment.notes {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("  Notes:", label_style)));
            lines.push(Line::from(Span::styled(format!("  {notes}"), value_style)));
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }
}
