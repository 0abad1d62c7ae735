//! Contact form model and synchronous validation.

use serde::Serialize;

/// The submission boundary: what would be posted if a real transport
/// existed. Submission is simulated for now.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Runs on submit only. Editing a field clears its error immediately
/// (see the contact page); nothing re-validates until the next submit.
pub fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required".into());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".into());
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address".into());
    }

    if form.subject.trim().is_empty() {
        errors.subject = Some("Subject is required".into());
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required".into());
    } else if message.chars().count() < 10 {
        errors.message = Some("Message must be at least 10 characters long".into());
    }

    errors
}

/// `local@domain.tld` shape: non-empty local part, a dot somewhere in the
/// domain with non-empty segments around it, and no whitespace or second
/// `@` anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn all_fields_invalid() {
        let errors = validate(&form("", "bad", "", "hi"));
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some(), "message under 10 chars must fail");
        assert!(!errors.is_empty());
    }

    #[test]
    fn valid_form_passes() {
        let errors = validate(&form("A", "a@b.com", "S", "1234567890"));
        assert!(errors.is_empty());
    }

    #[test]
    fn whitespace_only_fields_fail() {
        let errors = validate(&form("   ", "a@b.com", "\t", "long enough message"));
        assert!(errors.name.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn message_length_counts_after_trim() {
        let errors = validate(&form("A", "a@b.com", "S", "  123456789  "));
        assert!(errors.message.is_some());
        let errors = validate(&form("A", "a@b.com", "S", "  1234567890  "));
        assert!(errors.message.is_none());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("no-tld@example"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaced name@example.com"));
        assert!(!is_valid_email("trailing-dot@example."));
        assert!(!is_valid_email("leading-dot@.com"));
    }
}
