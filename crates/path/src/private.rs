//! Utilities that are implementation details but need to be shared between
//! modules.

/// Helper struct to ensure a path is built as a single well-formed subpath:
/// one leading move-to, then edges, then at most one close.
///
/// These checks only exist in debug builds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[doc(hidden)]
pub struct DebugValidator {
    #[cfg(debug_assertions)]
    started: bool,
    #[cfg(debug_assertions)]
    closed: bool,
}

impl DebugValidator {
    pub fn new() -> Self {
        DebugValidator::default()
    }

    #[inline]
    pub fn begin(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.started, "paths cannot restart with a second move-to");
            self.started = true;
        }
    }

    #[inline]
    pub fn edge(&self) {
        #[cfg(debug_assertions)]
        {
            assert!(self.started, "paths must start with a move-to");
            assert!(!self.closed, "no edges may follow a close");
        }
    }

    #[inline]
    pub fn close(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(self.started, "paths must start with a move-to");
            assert!(!self.closed, "paths can only close once");
            self.closed = true;
        }
    }

    #[inline]
    pub fn build(self) {}
}
