use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use campuscare_core::{next_confirmed_for, ServiceBreakdown, StatusBreakdown};

use crate::app::App;
use crate::ui::widgets::Spinner;

pub struct OverviewView;

impl OverviewView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(8)])
            .split(area);

        Self::render_greeting(frame, chunks[0], app);

        if app.capabilities.can_triage {
            Self::render_clinic_summary(frame, chunks[1], app);
        } else {
            Self::render_personal_summary(frame, chunks[1], app);
        }
    }

    fn render_greeting(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let name = app
            .session
            .user()
            .map(|u| u.name.as_str())
            .unwrap_or("there");

        let greeting = Paragraph::new(Line::from(vec![
            Span::styled("Hello, ", Style::default().fg(theme.foreground_dim())),
            Span::styled(
                name,
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ·  {}", Local::now().format("%A, %B %-d")),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border()))
                .style(Style::default().bg(theme.surface())),
        );
        frame.render_widget(greeting, area);
    }

    fn render_personal_summary(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        Self::render_next_appointment(frame, chunks[0], app);
        Self::render_daily_tip(frame, chunks[1], app);
    }

    fn render_next_appointment(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Next Appointment ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(user) = app.session.user() else {
            return;
        };
        let today = Local::now().date_naive();

        let lines = match next_confirmed_for(app.store.all(), user.id, today) {
            Some(appointment) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  ", Style::default()),
                    Span::styled(
                        appointment.service_type.label(),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} at {}",
                        appointment.date.format("%B %-d, %Y"),
                        appointment.time.format("%H:%M")
                    ),
                    Style::default().fg(theme.foreground()),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {}", appointment.reason),
                    Style::default().fg(theme.foreground_dim()),
                )),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No upcoming confirmed appointments.",
                    Style::default().fg(theme.foreground_dim()),
                )),
                Line::from(Span::styled(
                    "  Press 'n' on the appointments tab to book one.",
                    Style::default().fg(theme.foreground_dim()),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }

    fn render_daily_tip(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Daily Wellness Tip ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if app.tip_loading {
            Spinner::new().with_message("Fetching today's tip...").render(
                frame,
                inner,
                theme,
                app.animation_tick,
            );
            return;
        }

        let tip = app.daily_tip.as_deref().unwrap_or("");
        let paragraph = Paragraph::new(Line::from(Span::styled(
            tip,
            Style::default().fg(theme.foreground()),
        )))
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }

    fn render_clinic_summary(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(6)])
            .split(area);

        Self::render_daily_tip(frame, rows[0], app);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let status = StatusBreakdown::from_appointments(app.store.all());
        let status_lines: Vec<Line> = std::iter::once(Line::from(""))
            .chain(status.entries().iter().map(|(s, count)| {
                Line::from(vec![
                    Span::styled("  ● ", Style::default().fg(theme.status_color(*s))),
                    Span::styled(
                        format!("{s:<12}"),
                        Style::default().fg(theme.foreground()),
                    ),
                    Span::styled(
                        count.to_string(),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            }))
            .chain([
                Line::from(""),
                Line::from(Span::styled(
                    format!("  Total: {}", status.total()),
                    Style::default().fg(theme.foreground_dim()),
                )),
            ])
            .collect();

        let status_widget = Paragraph::new(status_lines)
            .block(
                Block::default()
                    .title(" Appointments by Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border()))
                    .style(Style::default().bg(theme.surface())),
            )
            .style(Style::default().bg(theme.surface()));
        frame.render_widget(status_widget, chunks[0]);

        let services = ServiceBreakdown::from_appointments(app.store.all());
        let service_lines: Vec<Line> = std::iter::once(Line::from(""))
            .chain(services.entries().iter().map(|(service, count)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<28}", service.label()),
                        Style::default().fg(theme.foreground()),
                    ),
                    Span::styled(
                        count.to_string(),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            }))
            .collect();

        let service_widget = Paragraph::new(service_lines)
            .block(
                Block::default()
                    .title(" Appointments by Service ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border()))
                    .style(Style::default().bg(theme.surface())),
            )
            .style(Style::default().bg(theme.surface()));
        frame.render_widget(service_widget, chunks[1]);
    }
}
