//! One-shot gate for the splash screen.

/// Tracks whether the splash screen has been dismissed.
///
/// Dismissal is idempotent: only the first call reports a transition, so a
/// late timer or a duplicated callback cannot remount the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderGate {
    dismissed: bool,
}

impl LoaderGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        !self.dismissed
    }

    /// Dismiss the loader. Returns `true` only on the first call.
    pub fn dismiss(&mut self) -> bool {
        !std::mem::replace(&mut self.dismissed, true)
    }
}
