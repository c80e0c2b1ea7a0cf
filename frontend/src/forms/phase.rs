use thiserror::Error;

/// Where a single submit attempt is.
///
/// ```text
/// Idle -> Validating -> Rejected -> Idle
///                    -> Locked -> Submitting -> Succeeded | Failed -> Idle
/// ```
///
/// The UI lock is not stored separately, it is held exactly in `Locked` and
/// `Submitting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Locked,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    Submit,
    Reject,
    Lock,
    Issue,
    Succeed,
    Fail,
    Settle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot apply {event:?} while {phase:?}")]
pub struct IllegalTransition {
    pub phase: Phase,
    pub event: PhaseEvent,
}

impl Phase {
    pub fn apply(self, event: PhaseEvent) -> Result<Phase, IllegalTransition> {
        use Phase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Idle, Submit) => Ok(Validating),
            (Validating, Reject) => Ok(Rejected),
            (Validating, Lock) => Ok(Locked),
            (Locked, Issue) => Ok(Submitting),
            (Submitting, Succeed) => Ok(Succeeded),
            (Submitting, Fail) => Ok(Failed),
            (Rejected | Succeeded | Failed, Settle) => Ok(Idle),
            (phase, event) => Err(IllegalTransition { phase, event }),
        }
    }

    pub fn holds_lock(self) -> bool {
        matches!(self, Phase::Locked | Phase::Submitting)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Rejected | Phase::Succeeded | Phase::Failed)
    }
}
