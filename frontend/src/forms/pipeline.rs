use std::cell::Cell;

use crate::analytics::Analytics;
use crate::forms::kind::FormKind;
use crate::forms::outcome::Outcome;
use crate::forms::phase::{Phase, PhaseEvent};
use crate::forms::surface::{FormSurface, LockGuard};
use crate::forms::transport::{Endpoint, Transport};
use crate::forms::validation;
use crate::i18n::Language;

/// Turns one submit action into at most one request and always leaves the
/// form interactive afterwards.
pub struct SubmissionPipeline<T, A> {
    kind: FormKind,
    language: Language,
    endpoint: Endpoint,
    transport: T,
    analytics: A,
    phase: Cell<Phase>,
}

impl<T: Transport, A: Analytics> SubmissionPipeline<T, A> {
    pub fn new(kind: FormKind, language: Language, endpoint: Endpoint, transport: T, analytics: A) -> Self {
        Self {
            kind,
            language,
            endpoint,
            transport,
            analytics,
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub async fn submit<S: FormSurface + ?Sized>(&self, surface: &S) -> Outcome {
        self.advance(PhaseEvent::Submit);

        let request = match validation::validate(self.kind, surface.read_field_values()) {
            Ok(request) => request,
            Err(error) => {
                log::info!("{} form rejected: {}", self.kind, error);
                self.advance(PhaseEvent::Reject);
                let outcome = Outcome::Rejected(error);
                surface.show_outcome(&outcome.notice(self.kind, self.language));
                self.advance(PhaseEvent::Settle);
                return outcome;
            }
        };

        let outcome = {
            let _lock = LockGuard::engage(surface, self.kind.sending_label(self.language));
            self.advance(PhaseEvent::Lock);
            self.advance(PhaseEvent::Issue);

            match self.transport.deliver(&self.endpoint, &request).await {
                Ok(()) => {
                    self.advance(PhaseEvent::Succeed);
                    Outcome::Accepted
                }
                Err(error) => {
                    log::error!("{} form submission error: {}", self.kind, error);
                    self.advance(PhaseEvent::Fail);
                    Outcome::Failed(error)
                }
            }
        };

        surface.show_outcome(&outcome.notice(self.kind, self.language));
        if outcome.is_accepted() {
            surface.reset_fields();
            self.analytics.track(&self.kind.success_event(request.fields()));
        }
        self.advance(PhaseEvent::Settle);
        outcome
    }

    fn advance(&self, event: PhaseEvent) {
        match self.phase.get().apply(event) {
            Ok(next) => {
                log::debug!("{} form: {:?} -> {:?}", self.kind, self.phase.get(), next);
                self.phase.set(next);
            }
            // Only reachable when the same pipeline is driven twice at once.
            Err(e) => log::warn!("{} form: {}", self.kind, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use futures::FutureExt;

    use crate::analytics::AnalyticsEvent;
    use crate::forms::error::{TransportError, ValidationError};
    use crate::forms::fields::{Attachment, FieldValues};
    use crate::forms::outcome::{MessageCategory, Notice};
    use crate::forms::surface::LockState;
    use crate::forms::transport::{FormMethod, ResponseBody};
    use crate::forms::validation::SubmissionRequest;

    #[derive(Clone, Debug, PartialEq)]
    enum Step {
        Read,
        Lock(LockState),
        Deliver(String),
        Show(Notice),
        Reset,
        Track(AnalyticsEvent),
    }

    type Journal = Rc<RefCell<Vec<Step>>>;

    struct FakeSurface {
        journal: Journal,
        values: RefCell<FieldValues>,
    }

    impl FakeSurface {
        fn new(journal: &Journal, values: FieldValues) -> Self {
            Self {
                journal: journal.clone(),
                values: RefCell::new(values),
            }
        }
    }

    impl FormSurface for FakeSurface {
        fn read_field_values(&self) -> FieldValues {
            self.journal.borrow_mut().push(Step::Read);
            self.values.borrow().clone()
        }

        fn set_lock_state(&self, state: LockState) {
            self.journal.borrow_mut().push(Step::Lock(state));
        }

        fn show_outcome(&self, notice: &Notice) {
            self.journal.borrow_mut().push(Step::Show(notice.clone()));
        }

        fn reset_fields(&self) {
            self.journal.borrow_mut().push(Step::Reset);
            *self.values.borrow_mut() = FieldValues::new();
        }
    }

    struct FakeTransport {
        journal: Journal,
        answer: Result<(), TransportError>,
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn deliver(&self, endpoint: &Endpoint, _request: &SubmissionRequest) -> Result<(), TransportError> {
            self.journal.borrow_mut().push(Step::Deliver(endpoint.url.clone()));
            self.answer.clone()
        }
    }

    /// Never answers.
    struct HangingTransport;

    #[async_trait(?Send)]
    impl Transport for HangingTransport {
        async fn deliver(&self, _endpoint: &Endpoint, _request: &SubmissionRequest) -> Result<(), TransportError> {
            futures::future::pending::<Result<(), TransportError>>().await
        }
    }

    struct FakeAnalytics {
        journal: Journal,
    }

    impl Analytics for FakeAnalytics {
        fn track(&self, event: &AnalyticsEvent) {
            self.journal.borrow_mut().push(Step::Track(event.clone()));
        }
    }

    const FORMSPREE: &str = "https://formspree.test/f/abc";
    const NETLIFY: &str = "/.netlify/functions/expert-application";

    fn endpoint(url: &str, response: ResponseBody) -> Endpoint {
        Endpoint {
            url: url.to_string(),
            method: FormMethod::Post,
            response,
        }
    }

    fn contact_pipeline(
        journal: &Journal,
        answer: Result<(), TransportError>,
    ) -> SubmissionPipeline<FakeTransport, FakeAnalytics> {
        SubmissionPipeline::new(
            FormKind::Contact,
            Language::Sv,
            endpoint(FORMSPREE, ResponseBody::Ignored),
            FakeTransport { journal: journal.clone(), answer },
            FakeAnalytics { journal: journal.clone() },
        )
    }

    fn expert_pipeline(
        journal: &Journal,
        answer: Result<(), TransportError>,
    ) -> SubmissionPipeline<FakeTransport, FakeAnalytics> {
        SubmissionPipeline::new(
            FormKind::ExpertApplication,
            Language::Sv,
            endpoint(NETLIFY, ResponseBody::Json),
            FakeTransport { journal: journal.clone(), answer },
            FakeAnalytics { journal: journal.clone() },
        )
    }

    fn anna() -> FieldValues {
        FieldValues::new()
            .with_text("name", "Anna")
            .with_text("company", "Acme")
            .with_text("email", "a@b.se")
            .with_text("message", "Hej")
            .with_checked("consent")
    }

    fn applicant(cv: Attachment) -> FieldValues {
        FieldValues::new()
            .with_text("name", "Erik")
            .with_text("email", "erik@example.se")
            .with_text("phone", "070-123 45 67")
            .with_text("expertise", "ekonomi")
            .with_text("experience", "15")
            .with_text("message", "Jag vill bidra")
            .with_checked("gdpr-consent")
            .with_file("cv", cv)
    }

    fn delivered(journal: &Journal) -> usize {
        journal
            .borrow()
            .iter()
            .filter(|step| matches!(step, Step::Deliver(_)))
            .count()
    }

    fn engaged(label: &'static str) -> Step {
        Step::Lock(LockState::Engaged { label })
    }

    #[test]
    fn accepted_contact_request() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, anna());
        let pipeline = contact_pipeline(&journal, Ok(()));

        let outcome = block_on(pipeline.submit(&surface));

        assert_eq!(outcome, Outcome::Accepted);
        assert_eq!(
            *journal.borrow(),
            vec![
                Step::Read,
                engaged("Skickar..."),
                Step::Deliver(FORMSPREE.to_string()),
                Step::Lock(LockState::Released),
                Step::Show(Notice {
                    category: MessageCategory::Success,
                    text: "Tack för din förfrågan! Vi återkommer inom 24 timmar.",
                    dismiss_after_ms: Some(5_000),
                }),
                Step::Reset,
                Step::Track(AnalyticsEvent::conversion()),
            ]
        );
        assert!(surface.values.borrow().is_empty());
        assert_eq!(pipeline.phase(), Phase::Idle);
    }

    #[test]
    fn invalid_email_never_reaches_the_network() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, anna().with_text("email", "not-an-email"));
        let pipeline = contact_pipeline(&journal, Ok(()));

        let outcome = block_on(pipeline.submit(&surface));

        assert_eq!(outcome, Outcome::Rejected(ValidationError::InvalidEmail));
        assert_eq!(
            *journal.borrow(),
            vec![
                Step::Read,
                Step::Show(Notice {
                    category: MessageCategory::Error,
                    text: "Vänligen ange en giltig e-postadress.",
                    dismiss_after_ms: None,
                }),
            ]
        );
        assert_eq!(pipeline.phase(), Phase::Idle);
    }

    #[test]
    fn any_missing_field_means_no_request() {
        for field in FormKind::Contact.required_fields() {
            let journal = Journal::default();
            let mut values = FieldValues::new();
            for (name, value) in anna().iter() {
                if name != *field {
                    values.insert(name, value.clone());
                }
            }
            let surface = FakeSurface::new(&journal, values);

            let outcome = block_on(contact_pipeline(&journal, Ok(())).submit(&surface));

            assert_eq!(outcome, Outcome::Rejected(ValidationError::MissingField(*field)));
            assert_eq!(delivered(&journal), 0, "{field}");
            assert!(!journal.borrow().iter().any(|s| matches!(s, Step::Lock(_))));
        }
    }

    #[test]
    fn any_missing_expert_field_means_no_request() {
        for field in FormKind::ExpertApplication.required_fields() {
            let journal = Journal::default();
            let mut values = FieldValues::new();
            for (name, value) in applicant(Attachment::new("cv.pdf", 1024, "application/pdf")).iter() {
                if name != *field {
                    values.insert(name, value.clone());
                }
            }
            let surface = FakeSurface::new(&journal, values);

            let outcome = block_on(expert_pipeline(&journal, Ok(())).submit(&surface));

            assert_eq!(outcome, Outcome::Rejected(ValidationError::MissingField(*field)));
            assert_eq!(delivered(&journal), 0, "{field}");
            assert!(!journal.borrow().iter().any(|s| matches!(s, Step::Lock(_))));
        }
    }

    #[test]
    fn oversized_cv_is_rejected_locally() {
        let journal = Journal::default();
        let six_mb = Attachment::new("cv.pdf", 6_000_000, "application/pdf");
        let surface = FakeSurface::new(&journal, applicant(six_mb));

        let outcome = block_on(expert_pipeline(&journal, Ok(())).submit(&surface));

        assert!(matches!(outcome, Outcome::Rejected(ValidationError::AttachmentTooLarge { .. })));
        assert_eq!(delivered(&journal), 0);
        assert!(journal.borrow().contains(&Step::Show(Notice {
            category: MessageCategory::Error,
            text: "CV-filen får inte vara större än 5MB.",
            dismiss_after_ms: None,
        })));
    }

    #[test]
    fn server_error_keeps_the_form_filled() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, anna());
        let pipeline = contact_pipeline(&journal, Err(TransportError::Status(500)));

        let outcome = block_on(pipeline.submit(&surface));

        assert_eq!(outcome, Outcome::Failed(TransportError::Status(500)));
        assert_eq!(
            *journal.borrow(),
            vec![
                Step::Read,
                engaged("Skickar..."),
                Step::Deliver(FORMSPREE.to_string()),
                Step::Lock(LockState::Released),
                Step::Show(Notice {
                    category: MessageCategory::Error,
                    text: "Ett fel uppstod. Vänligen försök igen eller kontakta oss direkt.",
                    dismiss_after_ms: None,
                }),
            ]
        );
        assert_eq!(*surface.values.borrow(), anna());
        assert_eq!(pipeline.phase(), Phase::Idle);
    }

    #[test]
    fn resubmitting_after_failure_is_a_fresh_request() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, anna());

        let first = block_on(contact_pipeline(&journal, Err(TransportError::Network("offline".into()))).submit(&surface));
        let second = block_on(contact_pipeline(&journal, Ok(())).submit(&surface));

        assert!(matches!(first, Outcome::Failed(TransportError::Network(_))));
        assert_eq!(second, Outcome::Accepted);
        assert_eq!(delivered(&journal), 2);
    }

    #[test]
    fn lock_brackets_every_delivery() {
        let answers = [
            Ok(()),
            Err(TransportError::Status(404)),
            Err(TransportError::Network("connection reset".into())),
            Err(TransportError::MalformedBody("expected value".into())),
        ];
        for answer in answers {
            let journal = Journal::default();
            let surface = FakeSurface::new(&journal, applicant(Attachment::new("cv.pdf", 1024, "application/pdf")));
            block_on(expert_pipeline(&journal, answer).submit(&surface));

            let steps = journal.borrow();
            let locks: Vec<(usize, &Step)> = steps
                .iter()
                .enumerate()
                .filter(|(_, s)| matches!(s, Step::Lock(_)))
                .collect();
            let deliver = steps.iter().position(|s| matches!(s, Step::Deliver(_))).unwrap();

            assert_eq!(locks.len(), 2);
            assert_eq!(*locks[0].1, engaged("Skickar ansökan..."));
            assert_eq!(*locks[1].1, Step::Lock(LockState::Released));
            assert!(locks[0].0 < deliver && deliver < locks[1].0);
        }
    }

    #[test]
    fn accepted_application_tracks_expertise_and_lingers_longer() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, applicant(Attachment::new("cv.pdf", 5 * 1024 * 1024, "application/pdf")));

        let outcome = block_on(expert_pipeline(&journal, Ok(())).submit(&surface));

        assert_eq!(outcome, Outcome::Accepted);
        let steps = journal.borrow();
        assert!(steps.contains(&Step::Track(AnalyticsEvent::interaction(
            "Expert Application",
            "submit",
            "ekonomi"
        ))));
        let shown = steps.iter().find_map(|s| match s {
            Step::Show(notice) => Some(notice.clone()),
            _ => None,
        });
        assert_eq!(shown.and_then(|n| n.dismiss_after_ms), Some(10_000));
        assert_eq!(steps.last(), Some(&Step::Track(AnalyticsEvent::interaction(
            "Expert Application",
            "submit",
            "ekonomi"
        ))));
    }

    #[test]
    fn failure_does_not_track() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, anna());
        block_on(contact_pipeline(&journal, Err(TransportError::Status(503))).submit(&surface));
        assert!(!journal.borrow().iter().any(|s| matches!(s, Step::Track(_) | Step::Reset)));
    }

    #[test]
    fn sending_label_follows_language() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, anna());
        let pipeline = SubmissionPipeline::new(
            FormKind::Contact,
            Language::En,
            endpoint(FORMSPREE, ResponseBody::Ignored),
            FakeTransport { journal: journal.clone(), answer: Ok(()) },
            FakeAnalytics { journal: journal.clone() },
        );
        block_on(pipeline.submit(&surface));
        assert_eq!(journal.borrow()[1], engaged("Sending..."));
    }

    #[test]
    fn abandoned_request_still_releases_the_lock() {
        let journal = Journal::default();
        let surface = FakeSurface::new(&journal, anna());
        let pipeline = SubmissionPipeline::new(
            FormKind::Contact,
            Language::Sv,
            endpoint(FORMSPREE, ResponseBody::Ignored),
            HangingTransport,
            FakeAnalytics { journal: journal.clone() },
        );

        let mut in_flight = Box::pin(pipeline.submit(&surface));
        assert!(in_flight.as_mut().now_or_never().is_none());
        assert_eq!(pipeline.phase(), Phase::Submitting);
        assert_eq!(journal.borrow().last(), Some(&engaged("Skickar...")));

        drop(in_flight);
        assert_eq!(journal.borrow().last(), Some(&Step::Lock(LockState::Released)));
    }
}
