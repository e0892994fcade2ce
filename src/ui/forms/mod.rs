//! Form rendering module
//!
//! - `field_renderer`: single field with its inline error annotation
//! - `contact_form`: the contact form with its submit button

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
