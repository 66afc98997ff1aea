//! Contact form validation and the `mailto:` link it submits to.
//!
//! Values are trimmed before every check. While typing, an empty field is not
//! an error (`show_empty = false`); on submit every required field must be
//! filled. The phone number is always optional.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Topic,
    Message,
}

impl Field {
    /// Submit order; the first invalid field in this order receives focus.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Topic,
        Field::Message,
    ];

    pub fn is_required(self) -> bool {
        self != Field::Phone
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Topic => &self.topic,
            Field::Message => &self.message,
        }
    }
}

const MIN_NAME_CHARS: usize = 3;
const MIN_MESSAGE_CHARS: usize = 10;
const MIN_PHONE_DIGITS: usize = 7;

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    // Some dot with at least one character before it and two after it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && domain[i + 1..].chars().count() >= 2)
}

pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    let allowed = |c: char| c.is_ascii_digit() || c.is_whitespace() || "+().-".contains(c);
    value.chars().all(allowed)
        && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Validate one field.
pub fn validate_field(field: Field, value: &str, show_empty: bool) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() && (!show_empty || !field.is_required()) {
        return Ok(());
    }

    let error = |message: &'static str| -> Result<(), FieldError> {
        Err(FieldError { field, message })
    };
    match field {
        Field::Name if value.chars().count() < MIN_NAME_CHARS => error("Please enter your name."),
        Field::Email if !is_valid_email(value) => error("Please enter a valid email address."),
        Field::Phone if !is_valid_phone(value) => {
            error("Invalid phone number (or leave it empty).")
        }
        Field::Topic if value.is_empty() => error("Please choose a topic."),
        Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            error("The message must be at least 10 characters.")
        }
        _ => Ok(()),
    }
}

/// Validate the whole form for submission, in field order.
pub fn validate_all(form: &ContactForm) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = Field::ALL
        .iter()
        .filter_map(|&field| validate_field(field, form.value(field), field.is_required()).err())
        .collect();
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Build the `mailto:` URI the form navigates to.
pub fn build_mailto(form: &ContactForm, recipient: &str) -> String {
    let name = form.name.trim();
    let phone = form.phone.trim();
    let topic = form.topic.trim();

    let subject = format!("{topic} — {name}");
    let body = [
        format!("Name: {name}"),
        format!("Email: {}", form.email.trim()),
        format!("Phone: {}", if phone.is_empty() { "-" } else { phone }),
        String::new(),
        "Message:".to_string(),
        form.message.trim().to_string(),
    ]
    .join("\r\n");

    format!(
        "mailto:{}?subject={}&body={}",
        encode_component(recipient),
        encode_component(&subject),
        encode_component(&body)
    )
}

/// Everything except the URI component unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}
