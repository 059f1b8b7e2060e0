use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use campuscare_core::{
    AppointmentStatus, AppointmentStore, Capabilities, ChatMessage, ChatTranscript,
    GeminiAssistant, PortalConfig, Session, WellnessAssistant,
};

use crate::events::{Action, EventHandler, InputMode};
use crate::forms::{BookingField, BookingForm, InputField, LoginForm};
use crate::theme::{Theme, ThemeManager};
use crate::ui::layout::MainLayout;
use crate::ui::widgets::ConfirmDialog;

/// Top-level screens, mirroring the portal's landing / login / dashboard
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Dashboard,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Landing => "Welcome",
            Page::Login => "Sign In",
            Page::Dashboard => "Dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Appointments,
    Chat,
}

impl DashboardTab {
    pub fn title(&self, caps: &Capabilities) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Appointments => {
                if caps.can_triage {
                    "Manage Appointments"
                } else {
                    "My Appointments"
                }
            }
            DashboardTab::Chat => "Wellness Chat",
        }
    }
}

/// Result of a background assistant call, delivered to the event loop
/// over the reply channel.
#[derive(Debug, Clone)]
pub enum AssistantReply {
    Tip(String),
    Answer(String),
}

pub struct App {
    pub should_quit: bool,
    pub page: Page,
    pub tab: DashboardTab,
    pub session: Session,
    pub capabilities: Capabilities,
    pub store: AppointmentStore,
    pub transcript: ChatTranscript,
    pub login_form: LoginForm,
    pub booking_form: Option<BookingForm>,
    pub chat_input: InputField,
    pub selected_index: usize,
    pub status_message: Option<String>,
    pub daily_tip: Option<String>,
    pub tip_loading: bool,
    pub chat_loading: bool,
    pub show_help: bool,
    pub theme_manager: ThemeManager,
    pub dialog: Option<ConfirmDialog>,
    pub event_handler: EventHandler,
    pub animation_tick: u64,
    pending_delete: Option<Uuid>,
    assistant: Arc<dyn WellnessAssistant>,
    reply_tx: mpsc::UnboundedSender<AssistantReply>,
    reply_rx: mpsc::UnboundedReceiver<AssistantReply>,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let assistant: Arc<dyn WellnessAssistant> =
            Arc::new(GeminiAssistant::new(&config.assistant));
        Ok(Self::with_assistant(assistant, config))
    }

    pub fn with_assistant(assistant: Arc<dyn WellnessAssistant>, config: &PortalConfig) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            page: Page::Landing,
            tab: DashboardTab::Overview,
            session: Session::new(),
            capabilities: Capabilities::none(),
            store: AppointmentStore::with_demo_data(),
            transcript: ChatTranscript::new(),
            login_form: LoginForm::default(),
            booking_form: None,
            chat_input: InputField::default(),
            selected_index: 0,
            status_message: Some("Welcome to CampusCare. Press Enter to sign in.".to_string()),
            daily_tip: None,
            tip_loading: false,
            chat_loading: false,
            show_help: false,
            theme_manager: ThemeManager::new(),
            dialog: None,
            event_handler: EventHandler::new(),
            animation_tick: 0,
            pending_delete: None,
            assistant,
            reply_tx,
            reply_rx,
            tick_rate: Duration::from_millis(config.tui.tick_rate_ms),
        }
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.theme_manager.current_theme()
    }

    /// Tabs the signed-in user can see. The chat tab only exists for
    /// roles allowed to talk to the assistant.
    pub fn visible_tabs(&self) -> Vec<DashboardTab> {
        let mut tabs = vec![DashboardTab::Overview, DashboardTab::Appointments];
        if self.capabilities.can_chat {
            tabs.push(DashboardTab::Chat);
        }
        tabs
    }

    /// Appointments shown on the appointments tab: everything for triage
    /// roles, only the user's own bookings otherwise.
    pub fn visible_appointments(&self) -> Vec<&campuscare_core::Appointment> {
        if self.capabilities.can_triage {
            self.store.all().iter().collect()
        } else {
            match self.session.user() {
                Some(user) => self.store.for_user(user.id),
                None => Vec::new(),
            }
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            self.animation_tick = self.animation_tick.wrapping_add(1);

            self.drain_replies();

            terminal.draw(|frame| {
                MainLayout::render(frame, self);
            })?;

            if event::poll(self.tick_rate)? {
                let evt = event::read()?;
                self.handle_event(evt);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Applies any assistant replies that arrived since the last tick.
    fn drain_replies(&mut self) {
        while let Ok(reply) = self.reply_rx.try_recv() {
            match reply {
                AssistantReply::Tip(tip) => {
                    debug!("daily tip received");
                    self.daily_tip = Some(tip);
                    self.tip_loading = false;
                }
                AssistantReply::Answer(text) => {
                    self.transcript.push(ChatMessage::model(text));
                    self.chat_loading = false;
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = self.event_handler.handle_key(key) {
                    self.execute_action(action);
                }
            }
            Event::Resize(width, height) => {
                self.event_handler.handle_resize(width, height);
            }
            _ => {}
        }
    }

    pub fn execute_action(&mut self, action: Action) {
        if self.dialog.is_some() {
            self.handle_dialog_action(action);
            return;
        }

        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                _ => self.show_help = false,
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => {
                self.theme_manager.cycle_theme();
                self.status_message = Some(format!(
                    "Theme: {}",
                    self.theme_manager.current_theme_name()
                ));
            }
            Action::Help => self.show_help = true,
            action => match self.page {
                Page::Landing => self.handle_landing_action(action),
                Page::Login => self.handle_login_action(action),
                Page::Dashboard => self.handle_dashboard_action(action),
            },
        }
    }

    fn handle_dialog_action(&mut self, action: Action) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match action {
            Action::Left | Action::Right | Action::NextTab | Action::PrevTab => {
                dialog.select_next();
            }
            Action::Select => {
                let confirmed = dialog.is_confirm_selected();
                self.dialog = None;
                if confirmed {
                    self.confirm_pending_delete();
                } else {
                    self.pending_delete = None;
                }
            }
            Action::Back | Action::CancelInput => {
                self.dialog = None;
                self.pending_delete = None;
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_landing_action(&mut self, action: Action) {
        match action {
            Action::Select | Action::Down => {
                self.page = Page::Login;
                self.event_handler.set_input_mode(InputMode::Editing);
                self.status_message =
                    Some("Enter any email to sign in (demo credentials)".to_string());
            }
            Action::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_login_action(&mut self, action: Action) {
        match action {
            Action::InsertChar(c) => self.login_form.email.insert_char(c),
            Action::DeleteChar => self.login_form.email.delete_char(),
            Action::Left => self.login_form.email.move_left(),
            Action::Right => self.login_form.email.move_right(),
            Action::Submit => self.submit_login(),
            Action::CancelInput | Action::Back => {
                self.login_form.reset();
                self.page = Page::Landing;
                self.event_handler.set_input_mode(InputMode::Normal);
            }
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let email = self.login_form.email.value().trim().to_string();
        if email.is_empty() {
            self.status_message = Some("Please enter an email address".to_string());
            return;
        }

        let user = self.session.login(&email);
        self.capabilities = Capabilities::for_role(user.role);
        self.transcript = ChatTranscript::greeting(&user.name);
        self.login_form.reset();
        self.page = Page::Dashboard;
        self.tab = DashboardTab::Overview;
        self.selected_index = 0;
        self.event_handler.set_input_mode(InputMode::Normal);
        self.status_message = Some(format!("Signed in as {}", user.name));
        info!(name = %user.name, role = ?user.role, "user signed in");

        self.request_daily_tip();
    }

    fn logout(&mut self) {
        self.session.logout();
        self.capabilities = Capabilities::none();
        self.transcript = ChatTranscript::new();
        self.daily_tip = None;
        self.tip_loading = false;
        self.chat_loading = false;
        self.booking_form = None;
        self.chat_input.clear();
        self.selected_index = 0;
        self.page = Page::Landing;
        self.event_handler.set_input_mode(InputMode::Normal);
        self.status_message = Some("Signed out".to_string());
    }

    fn handle_dashboard_action(&mut self, action: Action) {
        if self.booking_form.is_some() {
            self.handle_booking_action(action);
            return;
        }

        if self.tab == DashboardTab::Chat {
            self.handle_chat_action(action);
            return;
        }

        match action {
            Action::NextTab => self.cycle_tab(1),
            Action::PrevTab => self.cycle_tab(-1),
            Action::GoToTab(index) => {
                let tabs = self.visible_tabs();
                if let Some(tab) = tabs.get(index) {
                    self.switch_tab(*tab);
                }
            }
            Action::Down => {
                let max = self.visible_appointments().len().saturating_sub(1);
                if self.selected_index < max {
                    self.selected_index += 1;
                }
            }
            Action::Up => self.selected_index = self.selected_index.saturating_sub(1),
            Action::Top => self.selected_index = 0,
            Action::Bottom => {
                self.selected_index = self.visible_appointments().len().saturating_sub(1);
            }
            Action::NewBooking => self.open_booking_form(),
            Action::Approve => self.triage_selected(AppointmentStatus::Confirmed),
            Action::Decline => self.triage_selected(AppointmentStatus::Cancelled),
            Action::Complete => self.triage_selected(AppointmentStatus::Completed),
            Action::Delete => self.request_delete_selected(),
            Action::Back => self.logout(),
            _ => {}
        }
    }

    fn cycle_tab(&mut self, step: i32) {
        let tabs = self.visible_tabs();
        let current = tabs.iter().position(|t| *t == self.tab).unwrap_or(0);
        let count = tabs.len() as i32;
        let next = (current as i32 + step).rem_euclid(count) as usize;
        self.switch_tab(tabs[next]);
    }

    fn switch_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
        self.selected_index = 0;
        if tab == DashboardTab::Chat {
            self.event_handler.set_input_mode(InputMode::Editing);
        } else {
            self.event_handler.set_input_mode(InputMode::Normal);
        }
    }

    fn open_booking_form(&mut self) {
        if !self.capabilities.can_create {
            self.status_message = Some("Your role cannot book appointments".to_string());
            return;
        }
        self.tab = DashboardTab::Appointments;
        self.booking_form = Some(BookingForm::default());
        self.event_handler.set_input_mode(InputMode::Editing);
        self.status_message =
            Some("Tab moves between fields, Enter submits, Esc cancels".to_string());
    }

    fn handle_booking_action(&mut self, action: Action) {
        let Some(form) = self.booking_form.as_mut() else {
            return;
        };

        match action {
            Action::InsertChar(c) => {
                if let Some(field) = form.active_field_mut() {
                    field.insert_char(c);
                }
            }
            Action::DeleteChar => {
                if let Some(field) = form.active_field_mut() {
                    field.delete_char();
                }
            }
            Action::Left => match form.focused {
                BookingField::Service => form.prev_service(),
                _ => {
                    if let Some(field) = form.active_field_mut() {
                        field.move_left();
                    }
                }
            },
            Action::Right => match form.focused {
                BookingField::Service => form.next_service(),
                _ => {
                    if let Some(field) = form.active_field_mut() {
                        field.move_right();
                    }
                }
            },
            Action::NextField | Action::Down => form.focus_next(),
            Action::PrevField | Action::Up => form.focus_prev(),
            Action::Submit => self.submit_booking(),
            Action::CancelInput => {
                self.booking_form = None;
                self.event_handler.set_input_mode(InputMode::Normal);
                self.status_message = Some("Booking cancelled".to_string());
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn submit_booking(&mut self) {
        let Some(form) = self.booking_form.as_ref() else {
            return;
        };
        let Some(user) = self.session.user().cloned() else {
            return;
        };

        let today = Local::now().date_naive();
        match form.validate(today) {
            Ok(draft) => match self.store.create(&user, draft) {
                Ok(appointment) => {
                    info!(id = %appointment.id, "appointment requested");
                    self.booking_form = None;
                    self.event_handler.set_input_mode(InputMode::Normal);
                    self.status_message = Some(format!(
                        "Requested {} on {}",
                        appointment.service_type.label(),
                        appointment.date
                    ));
                }
                Err(e) => {
                    warn!(error = %e, "booking rejected");
                    self.status_message = Some(e.to_string());
                }
            },
            Err(message) => self.status_message = Some(message),
        }
    }

    fn selected_appointment_id(&self) -> Option<Uuid> {
        self.visible_appointments()
            .get(self.selected_index)
            .map(|a| a.id)
    }

    fn triage_selected(&mut self, new_status: AppointmentStatus) {
        if !self.capabilities.can_triage {
            self.status_message = Some("Only staff can update appointment status".to_string());
            return;
        }
        let Some(id) = self.selected_appointment_id() else {
            return;
        };

        match self.store.set_status(id, new_status) {
            Ok(()) => {
                self.status_message = Some(format!("Appointment marked {new_status}"));
            }
            Err(e) => {
                warn!(error = %e, "status update rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn request_delete_selected(&mut self) {
        if !self.capabilities.can_triage {
            self.status_message = Some("Only staff can delete appointments".to_string());
            return;
        }
        let Some(id) = self.selected_appointment_id() else {
            return;
        };

        self.pending_delete = Some(id);
        self.dialog = Some(
            ConfirmDialog::danger(
                "Delete Appointment",
                "Remove this appointment record permanently?",
            )
            .with_confirm_label("Delete"),
        );
    }

    fn confirm_pending_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        match self.store.remove(id) {
            Ok(removed) => {
                info!(id = %removed.id, "appointment deleted");
                let max = self.visible_appointments().len().saturating_sub(1);
                self.selected_index = self.selected_index.min(max);
                self.status_message = Some("Appointment deleted".to_string());
            }
            Err(e) => {
                warn!(error = %e, "delete rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn handle_chat_action(&mut self, action: Action) {
        match action {
            Action::InsertChar(c) => self.chat_input.insert_char(c),
            Action::DeleteChar => self.chat_input.delete_char(),
            Action::Left => self.chat_input.move_left(),
            Action::Right => self.chat_input.move_right(),
            Action::Submit => self.submit_chat_message(),
            Action::CancelInput => {
                self.switch_tab(DashboardTab::Overview);
            }
            Action::NextField => self.cycle_tab(1),
            Action::PrevField => self.cycle_tab(-1),
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn submit_chat_message(&mut self) {
        if self.chat_loading {
            return;
        }
        let question = self.chat_input.value().trim().to_string();
        if question.is_empty() {
            return;
        }

        self.chat_input.clear();
        self.transcript.push(ChatMessage::user(question.clone()));
        self.chat_loading = true;

        let assistant = Arc::clone(&self.assistant);
        let tx = self.reply_tx.clone();
        tokio::spawn(async move {
            let text = assistant.answer_question(&question).await;
            let _ = tx.send(AssistantReply::Answer(text));
        });
    }

    // The tip card is part of the shared dashboard, so every role gets a
    // fetch on sign-in; it is read-only and unrelated to chat access.
    fn request_daily_tip(&mut self) {
        self.tip_loading = true;

        let assistant = Arc::clone(&self.assistant);
        let tx = self.reply_tx.clone();
        tokio::spawn(async move {
            let tip = assistant.daily_tip().await;
            let _ = tx.send(AssistantReply::Tip(tip));
        });
    }
}
