//! Form domain layer
//!
//! Field values, validation rules and the contact form they make up.

mod contact_form;
mod field;
mod validation;

pub use contact_form::{ContactForm, Form, FormLayout, SubmissionRecord};
pub use field::FormField;
pub use validation::InputKind;

#[cfg(test)]
pub use field::{FieldName, ProjectType};
#[cfg(test)]
pub use validation::FieldError;
