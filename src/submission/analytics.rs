//! Analytics events and the tracing-backed sink

use super::traits::AnalyticsSink;
use serde::Serialize;

/// Category shared by every contact-related event
pub const EVENT_CATEGORY: &str = "Contact";

/// A single analytics event: name, category and free-form label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub category: &'static str,
    pub label: String,
}

impl AnalyticsEvent {
    /// Conversion after a successful submission; labelled with the project type
    pub fn form_submission(project_type: &str) -> Self {
        Self {
            name: "form_submission",
            category: EVENT_CATEGORY,
            label: project_type.to_string(),
        }
    }

    pub fn click_to_call(href: &str) -> Self {
        Self {
            name: "click_to_call",
            category: EVENT_CATEGORY,
            label: href.to_string(),
        }
    }

    pub fn click_to_email(href: &str) -> Self {
        Self {
            name: "click_to_email",
            category: EVENT_CATEGORY,
            label: href.to_string(),
        }
    }
}

/// Emits events as structured log records on the `analytics` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        tracing::info!(
            target: "analytics",
            event = event.name,
            category = event.category,
            label = %event.label,
            "analytics event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_submission_event() {
        assert_eq!(
            AnalyticsEvent::form_submission("kitchen"),
            AnalyticsEvent {
                name: "form_submission",
                category: "Contact",
                label: "kitchen".to_string(),
            }
        );
    }

    #[test]
    fn test_outbound_events_carry_href() {
        let call = AnalyticsEvent::click_to_call("tel:+4791234567");
        assert_eq!(call.name, "click_to_call");
        assert_eq!(call.label, "tel:+4791234567");

        let mail = AnalyticsEvent::click_to_email("mailto:post@example.no");
        assert_eq!(mail.name, "click_to_email");
        assert_eq!(mail.category, EVENT_CATEGORY);
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingAnalytics.track(&AnalyticsEvent::form_submission("other"));
    }

    #[test]
    fn test_event_serializes() {
        let json = serde_json::to_string(&AnalyticsEvent::form_submission("bathroom")).unwrap();
        assert_eq!(
            json,
            r#"{"name":"form_submission","category":"Contact","label":"bathroom"}"#
        );
    }
}
