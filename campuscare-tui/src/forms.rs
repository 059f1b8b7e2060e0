use chrono::{NaiveDate, NaiveTime};

use campuscare_core::{AppointmentDraft, ServiceType};

/// Single-line text field with a cursor, shared by the login screen,
/// the booking form, and the chat input.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_index = self.byte_index();
        self.value.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_index = self.byte_index();
        self.value.remove(byte_index);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.value.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: InputField,
}

impl LoginForm {
    pub fn reset(&mut self) {
        self.email.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Service,
    Date,
    Time,
    Reason,
}

impl BookingField {
    pub fn next(&self) -> Self {
        match self {
            Self::Service => Self::Date,
            Self::Date => Self::Time,
            Self::Time => Self::Reason,
            Self::Reason => Self::Service,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Service => Self::Reason,
            Self::Date => Self::Service,
            Self::Time => Self::Date,
            Self::Reason => Self::Time,
        }
    }
}

/// Booking form state. Dates are typed as `YYYY-MM-DD` and times as
/// 24-hour `HH:MM`; validation parses both and rejects past dates.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub focused: BookingField,
    pub service_index: usize,
    pub date: InputField,
    pub time: InputField,
    pub reason: InputField,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            focused: BookingField::Service,
            service_index: 0,
            date: InputField::default(),
            time: InputField::default(),
            reason: InputField::default(),
        }
    }
}

impl BookingForm {
    pub fn service_type(&self) -> ServiceType {
        ServiceType::all()[self.service_index]
    }

    pub fn next_service(&mut self) {
        self.service_index = (self.service_index + 1) % ServiceType::all().len();
    }

    pub fn prev_service(&mut self) {
        let count = ServiceType::all().len();
        self.service_index = (self.service_index + count - 1) % count;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn active_field_mut(&mut self) -> Option<&mut InputField> {
        match self.focused {
            BookingField::Service => None,
            BookingField::Date => Some(&mut self.date),
            BookingField::Time => Some(&mut self.time),
            BookingField::Reason => Some(&mut self.reason),
        }
    }

    /// Validates the typed fields into a draft. Returns a user-facing
    /// message on the first problem found, top to bottom.
    pub fn validate(&self, today: NaiveDate) -> Result<AppointmentDraft, String> {
        let date = NaiveDate::parse_from_str(self.date.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Enter the date as YYYY-MM-DD".to_string())?;
        if date < today {
            return Err("The appointment date cannot be in the past".to_string());
        }

        let time = NaiveTime::parse_from_str(self.time.value().trim(), "%H:%M")
            .map_err(|_| "Enter the time as HH:MM (24-hour)".to_string())?;

        let reason = self.reason.value().trim();
        if reason.is_empty() {
            return Err("Please describe the reason for your visit".to_string());
        }

        Ok(AppointmentDraft {
            service_type: self.service_type(),
            date,
            time,
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            focused: BookingField::Reason,
            service_index: 0,
            date: InputField::with_value("2024-06-10"),
            time: InputField::with_value("14:30"),
            reason: InputField::with_value("Annual physical"),
        }
    }

    #[test]
    fn test_insert_and_delete_tracks_cursor() {
        let mut field = InputField::default();
        field.insert_char('h');
        field.insert_char('i');
        assert_eq!(field.value(), "hi");
        assert_eq!(field.cursor(), 2);

        field.move_left();
        field.insert_char('e');
        assert_eq!(field.value(), "hei");

        field.delete_char();
        assert_eq!(field.value(), "hi");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_delete_at_start_is_noop() {
        let mut field = InputField::with_value("abc");
        field.move_left();
        field.move_left();
        field.move_left();
        field.delete_char();
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_valid_form_builds_draft() {
        let draft = filled_form().validate(today()).unwrap();
        assert_eq!(draft.service_type, ServiceType::Medical);
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(draft.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(draft.reason, "Annual physical");
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut form = filled_form();
        form.date = InputField::with_value("10/06/2024");
        let err = form.validate(today()).unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_past_date_is_rejected() {
        let mut form = filled_form();
        form.date = InputField::with_value("2024-05-31");
        let err = form.validate(today()).unwrap_err();
        assert!(err.contains("past"));
    }

    #[test]
    fn test_blank_reason_is_rejected() {
        let mut form = filled_form();
        form.reason = InputField::with_value("   ");
        assert!(form.validate(today()).is_err());
    }

    #[test]
    fn test_service_cycling_wraps() {
        let mut form = BookingForm::default();
        let count = ServiceType::all().len();
        for _ in 0..count {
            form.next_service();
        }
        assert_eq!(form.service_index, 0);

        form.prev_service();
        assert_eq!(form.service_index, count - 1);
    }

    #[test]
    fn test_field_focus_order_wraps() {
        let mut form = BookingForm::default();
        form.focus_next();
        assert_eq!(form.focused, BookingField::Date);
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focused, BookingField::Reason);
    }
}
