use thiserror::Error;

use super::validation::Field;

pub const FORM_ID: &str = "inquiry-form";
pub const SUCCESS_ID: &str = "success-message";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("required element #{0} not found")]
    MissingElement(&'static str),
    #[error("{0} is not available in this browser")]
    Unsupported(&'static str),
}

/// The six elements the inquiry form cannot work without.
#[derive(Debug)]
pub struct FormElements<E> {
    pub form: E,
    pub name: E,
    pub email: E,
    pub phone: E,
    pub message: E,
    pub success: E,
}

impl<E> FormElements<E> {
    /// Resolves every element through `lookup`, failing on the first id that
    /// does not resolve.
    pub fn locate(lookup: impl Fn(&str) -> Option<E>) -> Result<Self, SetupError> {
        let find = |id: &'static str| lookup(id).ok_or(SetupError::MissingElement(id));
        Ok(Self {
            form: find(FORM_ID)?,
            name: find(Field::Name.id())?,
            email: find(Field::Email.id())?,
            phone: find(Field::Phone.id())?,
            message: find(Field::Message.id())?,
            success: find(SUCCESS_ID)?,
        })
    }

    pub fn field(&self, field: Field) -> &E {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }
}
