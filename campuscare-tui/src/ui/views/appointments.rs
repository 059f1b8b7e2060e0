use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table},
    Frame,
};

use campuscare_core::Appointment;

use crate::app::App;
use crate::forms::{BookingField, BookingForm};
use crate::theme::Theme;

/// The signed-in user's own bookings, plus the booking form overlay.
pub struct AppointmentsView;

impl AppointmentsView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let appointments = app.visible_appointments();

        let block = Block::default()
            .title(" My Appointments ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if appointments.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  You have no appointments yet.",
                    Style::default().fg(theme.foreground_dim()),
                )),
                Line::from(Span::styled(
                    "  Press 'n' to request one.",
                    Style::default().fg(theme.foreground_dim()),
                )),
            ])
            .style(Style::default().bg(theme.surface()));
            frame.render_widget(empty, inner);
        } else {
            Self::render_table(frame, inner, app, &appointments);
        }

        if let Some(ref form) = app.booking_form {
            Self::render_booking_form(frame, area, theme, form);
        }
    }

    fn render_table(frame: &mut Frame, area: Rect, app: &App, appointments: &[&Appointment]) {
        let theme = app.current_theme();

        let header = Row::new(vec!["", "Service", "Date", "Time", "Status", "Reason"]).style(
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
                    appointment.service_type.label().to_string(),
                    appointment.date.format("%Y-%m-%d").to_string(),
                    appointment.time.format("%H:%M").to_string(),
                    appointment.status.to_string(),
                    appointment.reason.clone(),
                ])
                .style(base)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(26),
                Constraint::Length(11),
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(table, area);
    }

    fn render_booking_form(frame: &mut Frame, area: Rect, theme: &dyn Theme, form: &BookingForm) {
        let width = 54u16.min(area.width.saturating_sub(4));
        let height = 14u16.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let card = Rect::new(x, y, width, height);

        frame.render_widget(Clear, card);

        let block = Block::default()
            .title(" Request Appointment ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(inner);

        let service_label = format!("< {} >", form.service_type().label());
        Self::render_field(
            frame,
            chunks[0],
            theme,
            " Service ",
            &service_label,
            form.focused == BookingField::Service,
        );
        Self::render_field(
            frame,
            chunks[1],
            theme,
            " Date (YYYY-MM-DD) ",
            form.date.value(),
            form.focused == BookingField::Date,
        );
        Self::render_field(
            frame,
            chunks[2],
            theme,
            " Time (HH:MM) ",
            form.time.value(),
            form.focused == BookingField::Time,
        );
        Self::render_field(
            frame,
            chunks[3],
            theme,
            " Reason ",
            form.reason.value(),
            form.focused == BookingField::Reason,
        );
    }

    fn render_field(
        frame: &mut Frame,
        area: Rect,
        theme: &dyn Theme,
        title: &str,
        value: &str,
        focused: bool,
    ) {
        let border = if focused {
            Style::default().fg(theme.accent())
        } else {
            Style::default().fg(theme.border())
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(theme.foreground()),
        )))
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(field, inner);
    }
}
