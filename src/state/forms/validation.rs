//! Per-field validation rules

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// How a field's text is interpreted by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select,
    Checkbox,
}

/// A failed validation rule. `Display` is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Dette feltet er påkrevd")]
    Required,
    #[error("Vennligst oppgi en gyldig e-postadresse")]
    InvalidEmail,
    #[error("Vennligst oppgi et gyldig telefonnummer")]
    InvalidPhone,
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Norwegian national number: optional +47, first digit 2-9, seven more digits
fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN
        .get_or_init(|| Regex::new(r"^(\+47)?[2-9]\d{7}$").expect("phone pattern is valid"))
}

/// Minimum length that makes a non-national phone number acceptable
const MIN_PHONE_LEN: usize = 8;

/// Check a field value against the rules for its kind.
///
/// The value is trimmed first. Rules apply in order (required, email, phone)
/// and the first failure is returned. Pure: no field state is touched.
pub fn validate_input(value: &str, kind: InputKind, required: bool) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match kind {
        InputKind::Email if !email_pattern().is_match(value) => Err(FieldError::InvalidEmail),
        InputKind::Tel => {
            let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            if phone_pattern().is_match(&cleaned) || cleaned.chars().count() >= MIN_PHONE_LEN {
                Ok(())
            } else {
                Err(FieldError::InvalidPhone)
            }
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required {
        use super::*;

        #[test]
        fn test_empty_required_is_invalid() {
            assert_eq!(
                validate_input("", InputKind::Text, true),
                Err(FieldError::Required)
            );
        }

        #[test]
        fn test_whitespace_only_required_is_invalid() {
            for kind in [
                InputKind::Text,
                InputKind::Email,
                InputKind::Tel,
                InputKind::TextArea,
                InputKind::Select,
            ] {
                assert_eq!(
                    validate_input("   \t ", kind, true),
                    Err(FieldError::Required),
                    "kind {kind:?}"
                );
            }
        }

        #[test]
        fn test_empty_optional_is_valid() {
            assert_eq!(validate_input("", InputKind::Email, false), Ok(()));
            assert_eq!(validate_input("  ", InputKind::Tel, false), Ok(()));
        }

        #[test]
        fn test_required_message() {
            assert_eq!(FieldError::Required.to_string(), "Dette feltet er påkrevd");
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_local_at_domain_tld() {
            for value in ["ola@example.com", "a@b.co", "ola.nordmann+tips@post.example.no"] {
                assert_eq!(validate_input(value, InputKind::Email, true), Ok(()), "{value}");
            }
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for value in [
                "not-an-email",
                "ola@example",
                "@example.com",
                "ola@.",
                "ola @example.com",
                "ola@exa mple.com",
                "ola@@example.com",
            ] {
                assert_eq!(
                    validate_input(value, InputKind::Email, true),
                    Err(FieldError::InvalidEmail),
                    "{value}"
                );
            }
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert_eq!(validate_input("  a@b.co  ", InputKind::Email, true), Ok(()));
        }

        #[test]
        fn test_optional_email_still_checked_when_filled() {
            assert_eq!(
                validate_input("nope", InputKind::Email, false),
                Err(FieldError::InvalidEmail)
            );
        }

        #[test]
        fn test_email_rule_ignored_for_text_kind() {
            assert_eq!(validate_input("not-an-email", InputKind::Text, true), Ok(()));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_national_format() {
            for value in ["91234567", "+4791234567", "912 34 567", "+47 912 34 567"] {
                assert_eq!(validate_input(value, InputKind::Tel, true), Ok(()), "{value}");
            }
        }

        #[test]
        fn test_long_numbers_accepted_without_national_match() {
            // leading 1 fails the national pattern but length carries it
            assert_eq!(validate_input("12345678", InputKind::Tel, true), Ok(()));
            assert_eq!(validate_input("+46701234567", InputKind::Tel, true), Ok(()));
        }

        #[test]
        fn test_short_numbers_rejected() {
            for value in ["1234567", "9123", "12 34 56"] {
                assert_eq!(
                    validate_input(value, InputKind::Tel, true),
                    Err(FieldError::InvalidPhone),
                    "{value}"
                );
            }
        }

        #[test]
        fn test_phone_message() {
            assert_eq!(
                FieldError::InvalidPhone.to_string(),
                "Vennligst oppgi et gyldig telefonnummer"
            );
        }
    }
}
