use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, DashboardTab, Page};

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let keybinds = Self::keybinds(app);

        let keybind_spans: Vec<Span> = keybinds
            .iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(
                        format!(" {key}"),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(":{desc} "),
                        Style::default().fg(theme.foreground_dim()),
                    ),
                ]
            })
            .collect();

        let keybinds_widget = Paragraph::new(Line::from(keybind_spans))
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(theme.surface()));
        frame.render_widget(keybinds_widget, chunks[0]);

        let status = app.status_message.as_deref().unwrap_or("Ready");
        let status_widget = Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(ratatui::layout::Alignment::Right)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(status_widget, chunks[1]);
    }

    fn keybinds(app: &App) -> Vec<(&'static str, &'static str)> {
        match app.page {
            Page::Landing => vec![("Enter", "Sign In"), ("t", "Theme"), ("q", "Quit")],
            Page::Login => vec![("Enter", "Submit"), ("Esc", "Back")],
            Page::Dashboard => {
                if app.booking_form.is_some() {
                    return vec![
                        ("Tab", "Next Field"),
                        ("←/→", "Edit"),
                        ("Enter", "Submit"),
                        ("Esc", "Cancel"),
                    ];
                }
                match app.tab {
                    DashboardTab::Chat => vec![
                        ("Enter", "Send"),
                        ("Tab", "Next Tab"),
                        ("Esc", "Overview"),
                    ],
                    DashboardTab::Appointments if app.capabilities.can_triage => vec![
                        ("a", "Approve"),
                        ("x", "Decline"),
                        ("m", "Complete"),
                        ("d", "Delete"),
                        ("j/k", "Navigate"),
                        ("Esc", "Sign Out"),
                    ],
                    DashboardTab::Appointments => vec![
                        ("n", "New Booking"),
                        ("j/k", "Navigate"),
                        ("Tab", "Next Tab"),
                        ("Esc", "Sign Out"),
                    ],
                    DashboardTab::Overview => vec![
                        ("Tab", "Next Tab"),
                        ("t", "Theme"),
                        ("?", "Help"),
                        ("Esc", "Sign Out"),
                        ("q", "Quit"),
                    ],
                }
            }
        }
    }
}
