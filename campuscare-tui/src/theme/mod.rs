mod colors;
mod daybreak;
mod nightshift;

pub use colors::hex_to_color;
pub use daybreak::Daybreak;
pub use nightshift::Nightshift;

use ratatui::style::Color;

use campuscare_core::models::AppointmentStatus;

pub trait Theme: Send + Sync {
    fn name(&self) -> &'static str;

    fn background(&self) -> Color;
    fn foreground(&self) -> Color;
    fn foreground_dim(&self) -> Color;

    fn surface(&self) -> Color;
    fn border(&self) -> Color;
    fn selection(&self) -> Color;

    fn accent(&self) -> Color;

    fn success(&self) -> Color;
    fn warning(&self) -> Color;
    fn error(&self) -> Color;
    fn info(&self) -> Color;

    /// Badge color for an appointment status, mirroring the portal's
    /// green/yellow/red/blue badges.
    fn status_color(&self, status: AppointmentStatus) -> Color {
        match status {
            AppointmentStatus::Confirmed => self.success(),
            AppointmentStatus::Pending => self.warning(),
            AppointmentStatus::Cancelled => self.error(),
            AppointmentStatus::Completed => self.info(),
        }
    }
}

pub struct ThemeManager {
    themes: Vec<Box<dyn Theme>>,
    current_index: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes: Vec<Box<dyn Theme>> = vec![Box::new(Nightshift), Box::new(Daybreak)];
        Self {
            themes,
            current_index: 0,
        }
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.themes[self.current_index].as_ref()
    }

    pub fn current_theme_name(&self) -> &'static str {
        self.current_theme().name()
    }

    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.themes.len();
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_around() {
        let mut manager = ThemeManager::new();
        let first = manager.current_theme_name();
        manager.cycle_theme();
        assert_ne!(manager.current_theme_name(), first);
        manager.cycle_theme();
        assert_eq!(manager.current_theme_name(), first);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let theme = Nightshift;
        let colors = [
            theme.status_color(AppointmentStatus::Pending),
            theme.status_color(AppointmentStatus::Confirmed),
            theme.status_color(AppointmentStatus::Completed),
            theme.status_color(AppointmentStatus::Cancelled),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
