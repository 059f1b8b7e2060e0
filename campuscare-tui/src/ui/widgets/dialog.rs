use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Confirm,
    Cancel,
}

impl DialogButton {
    pub fn other(&self) -> Self {
        match self {
            DialogButton::Confirm => DialogButton::Cancel,
            DialogButton::Cancel => DialogButton::Confirm,
        }
    }
}

/// Modal yes/no prompt. Destructive dialogs default to Cancel so a
/// double-tapped Enter cannot delete anything.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    title: String,
    message: String,
    selected_button: DialogButton,
    confirm_label: String,
    cancel_label: String,
    is_destructive: bool,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            selected_button: DialogButton::Cancel,
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            is_destructive: false,
        }
    }

    pub fn danger(title: impl Into<String>, message: impl Into<String>) -> Self {
        let mut dialog = Self::new(title, message);
        dialog.is_destructive = true;
        dialog
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn select_next(&mut self) {
        self.selected_button = self.selected_button.other();
    }

    pub fn is_confirm_selected(&self) -> bool {
        self.selected_button == DialogButton::Confirm
    }

    pub fn calculate_area(&self, screen: Rect) -> Rect {
        let width = 50u16.min(screen.width.saturating_sub(4));
        let height = 9u16.min(screen.height.saturating_sub(4));

        let x = (screen.width.saturating_sub(width)) / 2;
        let y = (screen.height.saturating_sub(height)) / 2;

        Rect::new(x, y, width, height)
    }

    pub fn render(&self, frame: &mut Frame, screen: Rect, theme: &dyn Theme) {
        let area = self.calculate_area(screen);

        frame.render_widget(Clear, area);

        let border_color = if self.is_destructive {
            theme.error()
        } else {
            theme.accent()
        };

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.surface()));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let message = Paragraph::new(Line::from(Span::styled(
            self.message.clone(),
            Style::default().fg(theme.foreground()),
        )))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let confirm_style = if self.is_confirm_selected() {
            Style::default()
                .fg(theme.background())
                .bg(if self.is_destructive {
                    theme.error()
                } else {
                    theme.accent()
                })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground_dim())
        };
        let cancel_style = if self.is_confirm_selected() {
            Style::default().fg(theme.foreground_dim())
        } else {
            Style::default()
                .fg(theme.background())
                .bg(theme.accent())
                .add_modifier(Modifier::BOLD)
        };

        let buttons = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", self.confirm_label), confirm_style),
            Span::raw("   "),
            Span::styled(format!(" {} ", self.cancel_label), cancel_style),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(buttons, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_defaults_to_cancel() {
        let dialog = ConfirmDialog::danger("Delete", "Really?");
        assert!(!dialog.is_confirm_selected());
    }

    #[test]
    fn test_selection_toggles() {
        let mut dialog = ConfirmDialog::new("Test", "message");
        dialog.select_next();
        assert!(dialog.is_confirm_selected());
        dialog.select_next();
        assert!(!dialog.is_confirm_selected());
    }

    #[test]
    fn test_area_fits_inside_screen() {
        let dialog = ConfirmDialog::new("Test", "message");
        let screen = Rect::new(0, 0, 100, 50);

        let area = dialog.calculate_area(screen);
        assert!(area.x + area.width <= screen.width);
        assert!(area.y + area.height <= screen.height);
    }
}
