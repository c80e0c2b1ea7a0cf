use crate::forms::error::{TransportError, ValidationError};
use crate::forms::kind::FormKind;
use crate::i18n::Language;

/// How one submit attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rejected(ValidationError),
    Failed(TransportError),
    Accepted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageCategory {
    Error,
    Success,
}

impl MessageCategory {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageCategory::Error => "error",
            MessageCategory::Success => "success",
        }
    }
}

/// What the visitor sees in the form's message region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub category: MessageCategory,
    pub text: &'static str,
    /// Hide the message after this many milliseconds. `None` keeps it up.
    pub dismiss_after_ms: Option<u32>,
}

impl Outcome {
    pub fn category(&self) -> MessageCategory {
        match self {
            Outcome::Accepted => MessageCategory::Success,
            Outcome::Rejected(_) | Outcome::Failed(_) => MessageCategory::Error,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }

    pub fn notice(&self, kind: FormKind, language: Language) -> Notice {
        let text = match self {
            Outcome::Accepted => kind.success_text(language),
            // Transport detail stays in the log.
            Outcome::Failed(_) => kind.failure_text(language),
            Outcome::Rejected(error) => language.text(match error {
                ValidationError::MissingField(_) => "form_missing_fields",
                ValidationError::InvalidEmail => "form_invalid_email",
                ValidationError::MissingAttachment => "form_cv_missing",
                ValidationError::AttachmentTooLarge { .. } => "form_cv_too_large",
                ValidationError::UnsupportedAttachmentType(_) => "form_cv_not_pdf",
            }),
        };
        Notice {
            category: self.category(),
            text,
            dismiss_after_ms: self.is_accepted().then(|| kind.dismiss_after_ms()),
        }
    }
}
