//! Contact form draft and the mailto handoff.
//!
//! Delivery is left to the visitor's mail client: submitting builds a
//! `mailto:` URI carrying a subject and a body, nothing is sent from here.

use std::fmt;

use thiserror::Error;
use url::form_urlencoded;

use crate::site::CONTACT_EMAIL;

pub const MAIL_SUBJECT: &str = "Inquiry from Mr. Chaiwala Website";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your {0}")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Name, email and message are required; phone is optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// Message body as it appears in the mail client. The email field is not
    /// repeated here since the reply goes to the sender's own address.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nPhone: {}\n\nMessage: {}",
            self.name, self.phone, self.message
        )
    }

    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{CONTACT_EMAIL}?subject={}&body={}",
            encode_component(MAIL_SUBJECT),
            encode_component(&self.body())
        )
    }

    pub fn submit(&self) -> Result<String, ContactError> {
        self.validate()?;
        Ok(self.mailto_uri())
    }
}

/// Percent-encode a query component the way `encodeURIComponent` does. Mail
/// clients do not treat `+` as a space, so spaces go out as `%20`, and the
/// marks form encoding escapes but URI components allow (`! ' ( ) ~`) stay literal.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .map(|chunk| match chunk {
            "+" => "%20",
            "%21" => "!",
            "%27" => "'",
            "%28" => "(",
            "%29" => ")",
            "%7E" => "~",
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactDraft {
        ContactDraft {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: "0400000000".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn body_carries_name_phone_and_message() {
        assert_eq!(
            jane().body(),
            "Name: Jane\nPhone: 0400000000\n\nMessage: Hello"
        );
    }

    #[test]
    fn mailto_uri_is_percent_encoded() {
        let uri = jane().submit().unwrap();
        assert_eq!(
            uri,
            "mailto:Bhagyeshthakar@gmail.com\
             ?subject=Inquiry%20from%20Mr.%20Chaiwala%20Website\
             &body=Name%3A%20Jane%0APhone%3A%200400000000%0A%0AMessage%3A%20Hello"
        );
    }

    #[test]
    fn reserved_characters_do_not_break_the_query() {
        let draft = ContactDraft {
            message: "chai & samosa = 1+1?".into(),
            ..jane()
        };
        let uri = draft.mailto_uri();
        let body = uri.split_once("&body=").unwrap().1;
        assert!(!body.contains('&'));
        assert!(!body.contains('='));
        assert!(body.contains("1%2B1%3F"));
    }

    #[test]
    fn unreserved_marks_stay_literal() {
        let draft = ContactDraft {
            message: "Hi! (chai) ~ it's *hot*".into(),
            ..jane()
        };
        let uri = draft.mailto_uri();
        assert!(uri.ends_with("Message%3A%20Hi!%20(chai)%20~%20it's%20*hot*"));
    }

    #[test]
    fn phone_is_optional() {
        let draft = ContactDraft {
            phone: String::new(),
            ..jane()
        };
        assert!(draft.validate().is_ok());
        assert!(draft.body().contains("Phone: \n"));
    }

    #[test]
    fn required_fields_are_reported_in_order() {
        let mut draft = ContactDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ContactError::MissingField(Field::Name))
        );

        draft.set(Field::Name, "Jane".into());
        assert_eq!(
            draft.validate(),
            Err(ContactError::MissingField(Field::Email))
        );

        draft.set(Field::Email, "jane@example.com".into());
        draft.set(Field::Message, "   ".into());
        assert_eq!(
            draft.submit(),
            Err(ContactError::MissingField(Field::Message))
        );
    }

    #[test]
    fn email_needs_both_sides_of_the_at() {
        for bad in ["jane", "@example.com", "jane@"] {
            let draft = ContactDraft {
                email: bad.into(),
                ..jane()
            };
            assert_eq!(draft.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn errors_read_as_prompts() {
        assert_eq!(
            ContactError::MissingField(Field::Message).to_string(),
            "Please enter your message"
        );
    }
}
