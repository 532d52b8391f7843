use std::{fmt, time::Duration};

use serde::Serialize;
use thiserror::Error;

/// How long the simulated submission takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        if !is_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.contains(char::is_whitespace)
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// One contact form interaction: the draft plus where its submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactFormDraft,
    state: SubmitState,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmitState::Sending
    }

    /// Edits clear a finished submission's status but are ignored while sending.
    pub fn update(&mut self, field: Field, value: String) {
        if self.is_sending() {
            return;
        }
        self.draft.set(field, value);
        if self.state != SubmitState::Idle {
            self.state = SubmitState::Idle;
        }
    }

    /// Validates the draft and hands back a snapshot to send.
    pub fn begin_submit(&mut self) -> Result<ContactFormDraft, ContactError> {
        if self.is_sending() {
            return Err(ContactError::Busy);
        }
        if let Err(e) = self.draft.validate() {
            self.state = SubmitState::Failed(e.to_string());
            return Err(e);
        }
        self.state = SubmitState::Sending;
        Ok(self.draft.clone())
    }

    /// On success the draft is cleared; on failure it is kept for another try.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.draft.clear();
                self.state = SubmitState::Sent;
            }
            Err(reason) => self.state = SubmitState::Failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Ada".to_string());
        form.update(Field::Email, "ada@example.com".to_string());
        form.update(Field::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn submit_clears_every_field() {
        let mut form = filled();
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent.name, "Ada");
        assert!(form.is_sending());
        form.finish_submit(Ok(()));
        assert!(form.draft().is_empty());
        assert_eq!(form.draft(), &ContactFormDraft::default());
        assert_eq!(form.state(), &SubmitState::Sent);
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::Busy));
        assert_eq!(form.state(), &SubmitState::Sending);
    }

    #[test]
    fn edits_ignored_while_sending() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.update(Field::Name, "Grace".to_string());
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn missing_fields_reported_inline() {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Ada".to_string());
        assert_eq!(form.begin_submit(), Err(ContactError::Missing(Field::Email)));
        assert_eq!(
            form.state(),
            &SubmitState::Failed("Email is required".to_string())
        );
        form.update(Field::Email, "ada@example.com".to_string());
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn failure_keeps_draft() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err("mail server unreachable".to_string()));
        assert_eq!(form.draft().email, "ada@example.com");
        assert_eq!(
            form.state(),
            &SubmitState::Failed("mail server unreachable".to_string())
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last@mail.example.org"));
        assert!(!is_email("plainaddress"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@localhost"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("a@.com"));
        assert!(!is_email("a@example."));
    }

    #[test]
    fn invalid_email_message() {
        let draft = ContactFormDraft {
            name: "Ada".to_string(),
            email: "ada at example".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "\"ada at example\" is not a valid email address"
        );
    }
}
