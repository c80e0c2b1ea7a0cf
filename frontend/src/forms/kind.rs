use std::fmt;

use crate::analytics::AnalyticsEvent;
use crate::config;
use crate::forms::fields::FieldValues;
use crate::forms::transport::{Endpoint, FormMethod, ResponseBody};
use crate::i18n::Language;

const CONTACT_FIELDS: &[&str] = &["name", "company", "email", "phone", "service", "message", "consent"];
const CONTACT_REQUIRED: &[&str] = &["name", "company", "email", "message", "consent"];

const EXPERT_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "linkedin",
    "expertise",
    "experience",
    "message",
    "cv",
    "gdpr-consent",
    "newsletter",
];
const EXPERT_REQUIRED: &[&str] = &[
    "name",
    "email",
    "phone",
    "expertise",
    "experience",
    "message",
    "gdpr-consent",
];

/// The two forms on the site. Everything that differs between them is
/// answered here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    ExpertApplication,
}

impl FormKind {
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::ExpertApplication => EXPERT_FIELDS,
        }
    }

    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => CONTACT_REQUIRED,
            FormKind::ExpertApplication => EXPERT_REQUIRED,
        }
    }

    /// The file field that must carry a CV, if this form has one.
    pub fn attachment_field(self) -> Option<&'static str> {
        match self {
            FormKind::Contact => None,
            FormKind::ExpertApplication => Some("cv"),
        }
    }

    /// How long a success message stays on screen.
    pub fn dismiss_after_ms(self) -> u32 {
        match self {
            FormKind::Contact => config::CONTACT_DISMISS_MS,
            FormKind::ExpertApplication => config::EXPERT_DISMISS_MS,
        }
    }

    pub fn sending_label(self, language: Language) -> &'static str {
        match self {
            FormKind::Contact => language.text("form_sending"),
            FormKind::ExpertApplication => language.text("form_applying"),
        }
    }

    pub fn success_text(self, language: Language) -> &'static str {
        match self {
            FormKind::Contact => language.text("contact_success"),
            FormKind::ExpertApplication => language.text("expert_success"),
        }
    }

    pub fn failure_text(self, language: Language) -> &'static str {
        match self {
            FormKind::Contact => language.text("contact_error"),
            FormKind::ExpertApplication => language.text("expert_error"),
        }
    }

    /// Where the form goes when the page does not declare anything else.
    pub fn default_endpoint(self) -> Endpoint {
        match self {
            FormKind::Contact => Endpoint {
                url: config::CONTACT_FORM_ACTION.to_string(),
                method: FormMethod::parse(config::CONTACT_FORM_METHOD),
                response: ResponseBody::Ignored,
            },
            FormKind::ExpertApplication => Endpoint {
                url: config::expert_application_url(),
                method: FormMethod::Post,
                response: ResponseBody::Json,
            },
        }
    }

    pub fn success_event(self, fields: &FieldValues) -> AnalyticsEvent {
        match self {
            FormKind::Contact => AnalyticsEvent::conversion(),
            FormKind::ExpertApplication => AnalyticsEvent::interaction(
                "Expert Application",
                "submit",
                fields.text("expertise").unwrap_or_default(),
            ),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Contact => write!(f, "contact"),
            FormKind::ExpertApplication => write!(f, "expert application"),
        }
    }
}
