use crate::forms::fields::FieldValues;
use crate::forms::outcome::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    Released,
    /// Submit control disabled and showing `label`.
    Engaged { label: &'static str },
}

impl LockState {
    pub fn is_engaged(self) -> bool {
        matches!(self, LockState::Engaged { .. })
    }
}

/// What the submission pipeline may do to the page hosting a form.
pub trait FormSurface {
    fn read_field_values(&self) -> FieldValues;
    fn set_lock_state(&self, state: LockState);
    fn show_outcome(&self, notice: &Notice);
    fn reset_fields(&self);
}

/// Holds the UI lock for as long as it lives. Dropping it releases the lock
/// whichever way the guarded block is left.
pub struct LockGuard<'a, S: FormSurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: FormSurface + ?Sized> LockGuard<'a, S> {
    pub fn engage(surface: &'a S, label: &'static str) -> Self {
        surface.set_lock_state(LockState::Engaged { label });
        Self { surface }
    }
}

impl<S: FormSurface + ?Sized> Drop for LockGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_lock_state(LockState::Released);
    }
}
