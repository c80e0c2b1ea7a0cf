use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;
use crate::forms::error::ValidationError;
use crate::forms::fields::FieldValues;
use crate::forms::kind::FormKind;

// `\s` plus U+FEFF, the whitespace set browsers use for `\s`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles")
});

/// Fields that passed local validation, ready to be sent once.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRequest {
    kind: FormKind,
    fields: FieldValues,
}

impl SubmissionRequest {
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks run in a fixed order and the first failure is reported.
pub fn validate(kind: FormKind, fields: FieldValues) -> Result<SubmissionRequest, ValidationError> {
    if let Some(missing) = kind.required_fields().iter().find(|name| !fields.is_filled(name)) {
        return Err(ValidationError::MissingField(*missing));
    }

    if !fields.text("email").map(is_valid_email).unwrap_or(false) {
        return Err(ValidationError::InvalidEmail);
    }

    if let Some(field) = kind.attachment_field() {
        let attachment = fields
            .attachment(field)
            .filter(|a| !a.is_empty())
            .ok_or(ValidationError::MissingAttachment)?;

        if attachment.size > config::MAX_CV_BYTES {
            return Err(ValidationError::AttachmentTooLarge {
                size: attachment.size,
                limit: config::MAX_CV_BYTES,
            });
        }

        if attachment.media_type != config::CV_MEDIA_TYPE {
            return Err(ValidationError::UnsupportedAttachmentType(attachment.media_type.clone()));
        }
    }

    Ok(SubmissionRequest { kind, fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields::Attachment;

    const MIB: u64 = 1024 * 1024;

    fn contact() -> FieldValues {
        FieldValues::new()
            .with_text("name", "Anna")
            .with_text("company", "Acme")
            .with_text("email", "a@b.se")
            .with_text("message", "Hej")
            .with_checked("consent")
    }

    fn expert(cv: Attachment) -> FieldValues {
        FieldValues::new()
            .with_text("name", "Erik")
            .with_text("email", "erik@example.se")
            .with_text("phone", "070-123 45 67")
            .with_text("expertise", "ekonomi")
            .with_text("experience", "15")
            .with_text("message", "Jag vill hjälpa till")
            .with_checked("gdpr-consent")
            .with_file("cv", cv)
    }

    #[test]
    fn complete_contact_form_passes() {
        let request = validate(FormKind::Contact, contact()).unwrap();
        assert_eq!(request.kind(), FormKind::Contact);
        assert_eq!(request.fields().text("name"), Some("Anna"));
    }

    #[test]
    fn each_required_contact_field_is_enforced() {
        for field in FormKind::Contact.required_fields() {
            let mut fields = FieldValues::new();
            for (name, value) in contact().iter() {
                if name != *field {
                    fields.insert(name, value.clone());
                }
            }
            assert_eq!(
                validate(FormKind::Contact, fields),
                Err(ValidationError::MissingField(*field)),
            );
        }
    }

    #[test]
    fn each_required_expert_field_is_enforced() {
        let complete = expert(Attachment::new("cv.pdf", MIB, "application/pdf"));
        for field in FormKind::ExpertApplication.required_fields() {
            let mut fields = FieldValues::new();
            for (name, value) in complete.iter() {
                if name != *field {
                    fields.insert(name, value.clone());
                }
            }
            assert_eq!(
                validate(FormKind::ExpertApplication, fields),
                Err(ValidationError::MissingField(*field)),
            );
        }
    }

    #[test]
    fn blank_expert_fields_count_as_missing() {
        for field in ["phone", "expertise", "experience"] {
            let fields = expert(Attachment::new("cv.pdf", MIB, "application/pdf")).with_text(field, "");
            assert_eq!(
                validate(FormKind::ExpertApplication, fields),
                Err(ValidationError::MissingField(field)),
            );
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let fields = contact().with_text("phone", "");
        assert!(validate(FormKind::Contact, fields).is_ok());
    }

    #[test]
    fn email_pattern() {
        for good in ["a@b.se", "first.last@sub.example.com", "x+y@a.b.c", "ö@å.ä"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["not-an-email", "a@b", "@b.se", "a@.se ", "a b@c.se", "a@b@c.se", "a@b.", ""] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(!is_valid_email("a\u{FEFF}b@c.se"));
        assert!(!is_valid_email("ab@c\u{FEFF}.se"));
        assert!(!is_valid_email("ab@c.s\u{FEFF}e"));
        assert!(!is_valid_email("a\u{00A0}b@c.se"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let fields = contact().with_text("email", "not-an-email");
        assert_eq!(validate(FormKind::Contact, fields), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn missing_fields_are_reported_before_email() {
        let fields = FieldValues::new().with_text("email", "nope");
        assert_eq!(
            validate(FormKind::Contact, fields),
            Err(ValidationError::MissingField("name")),
        );
    }

    #[test]
    fn cv_is_required_and_must_not_be_empty() {
        let mut fields = FieldValues::new();
        for (name, value) in expert(Attachment::new("cv.pdf", 1, "application/pdf")).iter() {
            if name != "cv" {
                fields.insert(name, value.clone());
            }
        }
        assert_eq!(
            validate(FormKind::ExpertApplication, fields),
            Err(ValidationError::MissingAttachment),
        );

        let empty = expert(Attachment::new("", 0, "application/octet-stream"));
        assert_eq!(
            validate(FormKind::ExpertApplication, empty),
            Err(ValidationError::MissingAttachment),
        );
    }

    #[test]
    fn cv_size_limit_is_inclusive() {
        let at_limit = expert(Attachment::new("cv.pdf", 5 * MIB, "application/pdf"));
        assert!(validate(FormKind::ExpertApplication, at_limit).is_ok());

        let over = expert(Attachment::new("cv.pdf", 5 * MIB + 1, "application/pdf"));
        assert_eq!(
            validate(FormKind::ExpertApplication, over),
            Err(ValidationError::AttachmentTooLarge {
                size: 5 * MIB + 1,
                limit: 5 * MIB,
            }),
        );
    }

    #[test]
    fn cv_must_be_pdf_whatever_its_size() {
        for size in [1, MIB, 5 * MIB] {
            let word = expert(Attachment::new("cv.docx", size, "application/msword"));
            assert_eq!(
                validate(FormKind::ExpertApplication, word),
                Err(ValidationError::UnsupportedAttachmentType("application/msword".into())),
            );
        }
    }

    #[test]
    fn contact_form_ignores_attachments() {
        let fields = contact().with_file("cv", Attachment::new("huge.bin", 50 * MIB, "video/mp4"));
        assert!(validate(FormKind::Contact, fields).is_ok());
    }
}
