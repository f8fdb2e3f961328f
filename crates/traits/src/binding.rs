//! Scoped listener registrations.

use std::fmt;

/// A live event-listener registration.
///
/// The release action runs exactly once: either explicitly through
/// [`Binding::release`] or when the binding is dropped. Owners keep their
/// bindings for as long as the listener should stay attached.
pub struct Binding {
    release: Option<Box<dyn FnOnce()>>,
}

impl Binding {
    /// Wraps the action that detaches the listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A binding with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Detaches the listener now.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("active", &self.is_active())
            .finish()
    }
}
