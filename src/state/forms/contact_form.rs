//! Contact form state and the submission record it produces

use super::field::{FieldName, FormField};
use super::validation::InputKind;
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Values captured from the form at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub project_type: String,
    pub description: String,
    pub want_site_visit: bool,
}

/// Which optional controls the form renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub show_address: bool,
    pub show_site_visit: bool,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            show_address: true,
            show_site_visit: true,
        }
    }
}

/// The contact form: ordered fields followed by the submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new(layout: FormLayout) -> Self {
        let mut fields = vec![
            FormField::text(FieldName::Name, "Navn", InputKind::Text, true),
            FormField::text(FieldName::Email, "E-post", InputKind::Email, true),
            FormField::text(FieldName::Phone, "Telefon", InputKind::Tel, true),
        ];
        if layout.show_address {
            fields.push(FormField::text(
                FieldName::Address,
                "Adresse (valgfritt)",
                InputKind::Text,
                false,
            ));
        }
        fields.push(FormField::select(
            FieldName::ProjectType,
            "Prosjekttype",
            true,
        ));
        fields.push(FormField::text(
            FieldName::Description,
            "Beskriv prosjektet",
            InputKind::TextArea,
            true,
        ));
        if layout.show_site_visit {
            fields.push(FormField::checkbox(
                FieldName::SiteVisit,
                "Jeg ønsker befaring",
            ));
        }

        Self {
            fields,
            active_field_index: 0,
        }
    }

    /// Index of the submit button row
    pub fn submit_row(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.submit_row()
    }

    pub fn field(&self, name: FieldName) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[cfg(test)]
    pub fn field_mut(&mut self, name: FieldName) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    fn text_of(&self, name: FieldName) -> String {
        self.field(name)
            .map(|f| f.as_text().to_string())
            .unwrap_or_default()
    }

    /// Read current values into a fresh record. Absent optional controls
    /// default to an empty address and no site visit.
    pub fn capture(&self) -> SubmissionRecord {
        SubmissionRecord {
            name: self.text_of(FieldName::Name),
            email: self.text_of(FieldName::Email),
            phone: self.text_of(FieldName::Phone),
            address: self.text_of(FieldName::Address),
            project_type: self.text_of(FieldName::ProjectType),
            description: self.text_of(FieldName::Description),
            want_site_visit: self
                .field(FieldName::SiteVisit)
                .is_some_and(|f| f.is_checked()),
        }
    }

    /// Validate every field, returning true when all pass
    pub fn validate_all(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |all_valid, field| field.validate() && all_valid)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.is_invalid())
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormLayout::default())
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.submit_row());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldError, ProjectType};

    fn fill(form: &mut ContactForm, name: FieldName, value: &str) {
        form.field_mut(name).unwrap().set_text(value);
    }

    mod layout {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_layout_has_all_controls() {
            let form = ContactForm::default();
            let names: Vec<_> = form.fields.iter().map(|f| f.name).collect();
            assert_eq!(
                names,
                vec![
                    FieldName::Name,
                    FieldName::Email,
                    FieldName::Phone,
                    FieldName::Address,
                    FieldName::ProjectType,
                    FieldName::Description,
                    FieldName::SiteVisit,
                ]
            );
        }

        #[test]
        fn test_optional_controls_can_be_hidden() {
            let form = ContactForm::new(FormLayout {
                show_address: false,
                show_site_visit: false,
            });
            assert!(form.field(FieldName::Address).is_none());
            assert!(form.field(FieldName::SiteVisit).is_none());
            assert_eq!(form.field_count(), 6);
        }

        #[test]
        fn test_required_flags() {
            let form = ContactForm::default();
            let required: Vec<_> = form
                .fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.name)
                .collect();
            assert_eq!(
                required,
                vec![
                    FieldName::Name,
                    FieldName::Email,
                    FieldName::Phone,
                    FieldName::ProjectType,
                    FieldName::Description,
                ]
            );
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_reaches_submit_row_and_wraps() {
            let mut form = ContactForm::default();
            for _ in 0..form.submit_row() {
                form.next_field();
            }
            assert!(form.is_submit_row_active());
            assert!(form.get_active_field_mut().is_none());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = ContactForm::default();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, form.submit_row());
        }

        #[test]
        fn test_description_is_multiline() {
            let mut form = ContactForm::default();
            let index = form
                .fields
                .iter()
                .position(|f| f.name == FieldName::Description)
                .unwrap();
            form.set_active_field(index);
            assert!(form.is_active_field_multiline());
        }
    }

    mod capture {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_capture_reads_all_values() {
            let mut form = ContactForm::default();
            fill(&mut form, FieldName::Name, "Ola");
            fill(&mut form, FieldName::Email, "ola@example.com");
            fill(&mut form, FieldName::Phone, "91234567");
            fill(&mut form, FieldName::Address, "Eiksveien 1");
            fill(&mut form, FieldName::Description, "New kitchen");
            form.field_mut(FieldName::ProjectType)
                .unwrap()
                .set_choice(Some(ProjectType::Kitchen));
            form.field_mut(FieldName::SiteVisit).unwrap().push_char(' ');

            assert_eq!(
                form.capture(),
                SubmissionRecord {
                    name: "Ola".to_string(),
                    email: "ola@example.com".to_string(),
                    phone: "91234567".to_string(),
                    address: "Eiksveien 1".to_string(),
                    project_type: "kitchen".to_string(),
                    description: "New kitchen".to_string(),
                    want_site_visit: true,
                }
            );
        }

        #[test]
        fn test_absent_optional_controls_default() {
            let mut form = ContactForm::new(FormLayout {
                show_address: false,
                show_site_visit: false,
            });
            fill(&mut form, FieldName::Name, "Kari");
            let record = form.capture();
            assert_eq!(record.address, "");
            assert!(!record.want_site_visit);
        }

        #[test]
        fn test_record_serializes_camel_case() {
            let record = ContactForm::default().capture();
            let json = serde_json::to_value(&record).unwrap();
            assert!(json.get("projectType").is_some());
            assert!(json.get("wantSiteVisit").is_some());
            assert!(json.get("project_type").is_none());
        }
    }

    mod validate_all {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_flags_each_required_field_once() {
            let mut form = ContactForm::default();
            assert!(!form.validate_all());
            assert_eq!(form.invalid_fields().count(), 5);
            assert!(form
                .invalid_fields()
                .all(|f| f.error == Some(FieldError::Required)));
        }

        #[test]
        fn test_filled_form_passes() {
            let mut form = ContactForm::default();
            fill(&mut form, FieldName::Name, "Ola");
            fill(&mut form, FieldName::Email, "ola@example.com");
            fill(&mut form, FieldName::Phone, "91234567");
            fill(&mut form, FieldName::Description, "New kitchen");
            form.field_mut(FieldName::ProjectType)
                .unwrap()
                .set_choice(Some(ProjectType::Kitchen));
            assert!(form.validate_all());
            assert_eq!(form.invalid_fields().count(), 0);
        }
    }
}
