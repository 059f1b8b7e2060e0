use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, DashboardTab, Page};
use crate::ui::views::{
    AppointmentsView, ChatView, HelpView, LandingView, LoginView, OverviewView, TriageView,
};
use crate::ui::widgets::{Footer, Header};

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = app.current_theme();
        let size = frame.area();

        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(theme.background())
                    .fg(theme.foreground()),
            ),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(size);

        Header::render(frame, chunks[0], app);

        let content_area = chunks[1].inner(Margin::new(1, 0));

        match app.page {
            Page::Landing => LandingView::render(frame, content_area, app),
            Page::Login => LoginView::render(frame, content_area, app),
            Page::Dashboard => match app.tab {
                DashboardTab::Overview => OverviewView::render(frame, content_area, app),
                DashboardTab::Appointments => {
                    if app.capabilities.can_triage {
                        TriageView::render(frame, content_area, app);
                    } else {
                        AppointmentsView::render(frame, content_area, app);
                    }
                }
                DashboardTab::Chat => ChatView::render(frame, content_area, app),
            },
        }

        Footer::render(frame, chunks[2], app);

        if let Some(ref dialog) = app.dialog {
            dialog.render(frame, size, theme);
        }

        if app.show_help {
            HelpView::render(frame, size, app);
        }
    }
}
