//! Contact form: field validation and the simulated submission.

use log::{debug, warn};

pub const SEND_DELAY_MS: u64 = 1_500;
pub const SENDING_LABEL: &str = "Sending...";
pub const FAILURE_ALERT: &str =
    "There was an error sending your message. Please try again or contact us directly via email.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
}

impl FieldKind {
    /// Map an `<input type>` value; anything but `email` is plain text.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else {
            Self::Text
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
    Missing,
    InvalidEmail,
}

pub fn validate_field(value: &str, required: bool, kind: FieldKind) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            Err(FieldError::Missing)
        } else {
            Ok(())
        };
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot after it
/// with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormState {
    Editing,
    Sending { until_ms: u64 },
    Sent,
    /// Submission failed; the form is usable again.
    Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormStep {
    None,
    /// Hide the form and show the success message.
    Sent,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactForm {
    send_delay_ms: u64,
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SEND_DELAY_MS)
    }
}

impl ContactForm {
    pub const fn new(send_delay_ms: u64) -> Self {
        Self {
            send_delay_ms,
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, FormState::Sending { .. })
    }

    /// Start a submission. Returns false while one is in flight or after
    /// the form was sent.
    pub fn submit(&mut self, now_ms: u64) -> bool {
        match self.state {
            FormState::Editing | FormState::Failed => {
                let until_ms = now_ms.saturating_add(self.send_delay_ms);
                debug!("contact: sending until {}", until_ms);
                self.state = FormState::Sending { until_ms };
                true
            }
            FormState::Sending { .. } | FormState::Sent => false,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> FormStep {
        match self.state {
            FormState::Sending { until_ms } if now_ms >= until_ms => {
                self.state = FormState::Sent;
                FormStep::Sent
            }
            _ => FormStep::None,
        }
    }

    /// The host could not complete the submission. The caller alerts and
    /// re-enables the form.
    pub fn fail(&mut self) -> bool {
        if !self.is_sending() {
            return false;
        }
        warn!("contact: submission failed");
        self.state = FormState::Failed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn required_fields_are_trimmed() {
        assert_eq!(validate_field("   ", true, FieldKind::Text), Err(FieldError::Missing));
        assert_eq!(validate_field("", false, FieldKind::Email), Ok(()));
        assert_eq!(
            validate_field(" nope ", false, FieldKind::Email),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(validate_field(" x@y.io ", true, FieldKind::Email), Ok(()));
        assert_eq!(FieldKind::from_input_type("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Text);
    }

    #[test]
    fn submission_completes_after_delay_and_ignores_repeats() {
        let mut form = ContactForm::default();
        assert!(form.submit(100));
        assert!(!form.submit(200));
        assert_eq!(form.tick(1_599), FormStep::None);
        assert_eq!(form.tick(1_600), FormStep::Sent);
        assert_eq!(form.state(), FormState::Sent);
        assert!(!form.submit(2_000));
    }

    #[test]
    fn failure_reenables_the_form() {
        let mut form = ContactForm::default();
        assert!(!form.fail());
        assert!(form.submit(0));
        assert!(form.fail());
        assert_eq!(form.state(), FormState::Failed);
        assert_eq!(form.tick(5_000), FormStep::None);
        assert!(form.submit(5_000));
    }
}
