//! Contact form: validation, `mailto:` composition and submission phases.
//!
//! Nothing is sent over the network. Submitting hands a pre-filled
//! `mailto:` link to the browser and walks the form through a short cosmetic
//! sequence: submitting, then success, then back to an empty form.

use crate::config::timing;
use crate::core::error::{ContactError, ContactField};

/// Values typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Every field must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(*field)),
            None => Ok(()),
        }
    }

    pub fn subject(&self) -> String {
        format!("Message from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Compose the `mailto:` URI for `recipient`.
    pub fn mailto(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        ))
    }
}

/// Cosmetic submission state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// The mail client is being opened.
    Submitting,
    /// The success notice is showing.
    Succeeded,
}

impl SubmitPhase {
    /// Start a submission. Refused only while the mail client is opening;
    /// submitting during the success notice starts over.
    pub fn submit(self) -> Result<Self, ContactError> {
        match self {
            Self::Idle | Self::Succeeded => Ok(Self::Submitting),
            Self::Submitting => Err(ContactError::Busy),
        }
    }

    /// Phase that follows this one once its delay has elapsed.
    pub fn advance(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Submitting => Self::Succeeded,
            Self::Succeeded => Self::Idle,
        }
    }

    /// Milliseconds this phase lasts before [`SubmitPhase::advance`], or
    /// `None` if it lasts until the next submission.
    pub fn delay_ms(self) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some(timing::SUBMIT_HANDOFF_MS),
            Self::Succeeded => Some(timing::SUBMIT_RESET_MS),
        }
    }

    /// Leaving this phase clears the form fields.
    pub fn clears_form_on_exit(self) -> bool {
        self == Self::Succeeded
    }

    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_param<'a>(link: &'a str, key: &str) -> Option<&'a str> {
        let (_, query) = link.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
    }

    #[test]
    fn test_mailto_body_roundtrips() {
        let form = ContactForm::new("Jane", "jane@x.com", "Hi");
        let link = form.mailto("me@example.com").unwrap();
        assert!(link.starts_with("mailto:me@example.com?"));

        let body = urlencoding::decode(query_param(&link, "body").unwrap()).unwrap();
        assert_eq!(body, "Name: Jane\nEmail: jane@x.com\n\nMessage:\nHi");

        let subject = urlencoding::decode(query_param(&link, "subject").unwrap()).unwrap();
        assert_eq!(subject, "Message from Jane");
    }

    #[test]
    fn test_mailto_escapes_reserved_characters() {
        let form = ContactForm::new("A&B", "a@b.c", "50% off? yes=no #1");
        let link = form.mailto("me@example.com").unwrap();
        assert_eq!(link.matches('&').count(), 1);
        assert_eq!(link.matches('?').count(), 1);
        assert!(!link.contains('#'));

        let body = urlencoding::decode(query_param(&link, "body").unwrap()).unwrap();
        assert!(body.ends_with("50% off? yes=no #1"));
        assert!(body.starts_with("Name: A&B\n"));
    }

    #[test]
    fn test_validation_requires_every_field() {
        assert_eq!(
            ContactForm::new("", "a@b.c", "hi").validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );
        assert_eq!(
            ContactForm::new("Jane", "  ", "hi").validate(),
            Err(ContactError::MissingField(ContactField::Email))
        );
        assert_eq!(
            ContactForm::new("Jane", "a@b.c", "\n").mailto("me@example.com"),
            Err(ContactError::MissingField(ContactField::Message))
        );
        assert!(ContactForm::new("Jane", "a@b.c", "hi").validate().is_ok());
    }

    #[test]
    fn test_submit_phase_cycle() {
        let phase = SubmitPhase::Idle.submit().unwrap();
        assert!(phase.is_submitting());
        assert_eq!(phase.delay_ms(), Some(timing::SUBMIT_HANDOFF_MS));
        assert!(!phase.clears_form_on_exit());

        let phase = phase.advance();
        assert_eq!(phase, SubmitPhase::Succeeded);
        assert_eq!(phase.delay_ms(), Some(timing::SUBMIT_RESET_MS));
        assert!(phase.clears_form_on_exit());

        let phase = phase.advance();
        assert_eq!(phase, SubmitPhase::Idle);
        assert_eq!(phase.delay_ms(), None);
        assert_eq!(phase.advance(), SubmitPhase::Idle);
    }

    #[test]
    fn test_cannot_resubmit_while_busy() {
        assert_eq!(SubmitPhase::Submitting.submit(), Err(ContactError::Busy));
    }

    #[test]
    fn test_resubmit_during_success_notice() {
        let phase = SubmitPhase::Succeeded.submit().unwrap();
        assert!(phase.is_submitting());
        // The new handoff runs its own timer; the notice's reset never fires.
        assert_eq!(phase.delay_ms(), Some(timing::SUBMIT_HANDOFF_MS));
        assert!(!phase.clears_form_on_exit());
    }
}
