use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// The required inquiry fields, in the order they are checked and rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Element id and `name` attribute of the control.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Id of the element that displays this field's error text.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Phone => "phone-error",
            Field::Message => "message-error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InquiryValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service: String,
}

impl InquiryValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    PhoneRequired,
    MessageRequired,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::NameRequired => "Name is required",
            FieldError::EmailRequired => "Email is required",
            FieldError::EmailInvalid => "Please enter a valid email address",
            FieldError::PhoneRequired => "Phone number is required",
            FieldError::MessageRequired => "Message is required",
        }
    }
}

/// Outcome of one validation pass, one slot per required field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ValidationReport {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone = None,
            Field::Message => self.message = None,
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn failed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|field| self.get(*field).is_some())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Runs every check; none short-circuits another.
pub fn validate(values: &InquiryValues) -> ValidationReport {
    let email = if is_blank(&values.email) {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(&values.email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    };

    ValidationReport {
        name: is_blank(&values.name).then_some(FieldError::NameRequired),
        email,
        phone: is_blank(&values.phone).then_some(FieldError::PhoneRequired),
        message: is_blank(&values.message).then_some(FieldError::MessageRequired),
    }
}
