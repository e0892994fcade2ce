//! Form field value objects

use super::validation::{validate_input, FieldError, InputKind};
use serde::{Deserialize, Serialize};

/// Project categories offered by the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Kitchen,
    Bathroom,
    Terrace,
    WindowsDoors,
    Renovation,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        Self::Kitchen,
        Self::Bathroom,
        Self::Terrace,
        Self::WindowsDoors,
        Self::Renovation,
        Self::Other,
    ];

    /// Option value, as carried in the submission record and analytics label
    pub fn value(&self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::Terrace => "terrace",
            Self::WindowsDoors => "windows_doors",
            Self::Renovation => "renovation",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kitchen => "Kjøkken",
            Self::Bathroom => "Bad",
            Self::Terrace => "Terrasse",
            Self::WindowsDoors => "Vinduer og dører",
            Self::Renovation => "Oppussing",
            Self::Other => "Annet",
        }
    }
}

/// Shown in the select field while no option is chosen
pub const PROJECT_TYPE_PLACEHOLDER: &str = "Velg prosjekttype";

/// Stable identifiers for the contact form's controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Address,
    ProjectType,
    Description,
    SiteVisit,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::ProjectType => "projectType",
            Self::Description => "description",
            Self::SiteVisit => "siteVisit",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<ProjectType>),
    Flag(bool),
}

/// A single form control with its value and validity annotation
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub kind: InputKind,
    pub required: bool,
    pub value: FieldValue,
    /// Inline annotation; `Some` doubles as the invalid marker
    pub error: Option<FieldError>,
}

impl FormField {
    /// Create a new text-like field (text, email, tel or textarea)
    pub fn text(name: FieldName, label: &str, kind: InputKind, required: bool) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind,
            required,
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create the project type select
    pub fn select(name: FieldName, label: &str, required: bool) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind: InputKind::Select,
            required,
            value: FieldValue::Choice(None),
            error: None,
        }
    }

    /// Create a checkbox
    pub fn checkbox(name: FieldName, label: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind: InputKind::Checkbox,
            required: false,
            value: FieldValue::Flag(false),
            error: None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == InputKind::TextArea
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Get the value as the validator and the submission record see it
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(choice) => choice.map(|p| p.value()).unwrap_or(""),
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_choice(&self) -> Option<ProjectType> {
        match self.value {
            FieldValue::Choice(choice) => choice,
            _ => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// Set the text value
    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    #[cfg(test)]
    pub fn set_choice(&mut self, choice: Option<ProjectType>) {
        if let FieldValue::Choice(current) = &mut self.value {
            *current = choice;
        }
    }

    /// Push a character to the field value. Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.kind == InputKind::Select {
            return c == ' ' && self.cycle_choice(true);
        }
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Flag(checked) if c == ' ' => {
                *checked = !*checked;
                true
            }
            _ => false,
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            FieldValue::Choice(choice) => choice.take().is_some(),
            FieldValue::Flag(_) => false,
        }
    }

    /// Step through select options; the placeholder sits between last and first
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        let FieldValue::Choice(choice) = &mut self.value else {
            return false;
        };
        let all = ProjectType::ALL;
        let position = choice.and_then(|c| all.iter().position(|p| *p == c));
        *choice = match (position, forward) {
            (None, true) => Some(all[0]),
            (None, false) => Some(all[all.len() - 1]),
            (Some(i), true) if i + 1 < all.len() => Some(all[i + 1]),
            (Some(i), false) if i > 0 => Some(all[i - 1]),
            _ => None,
        };
        true
    }

    /// Run the validator and update this field's annotation.
    ///
    /// A stale annotation is always replaced, never stacked.
    pub fn validate(&mut self) -> bool {
        match validate_input(self.as_text(), self.kind, self.required) {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(p)) => p.label().to_string(),
            FieldValue::Choice(None) => PROJECT_TYPE_PLACEHOLDER.to_string(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
        }
    }
}
