//! Backend seam of the log facade.
//!
//! The facade only decides *whether* and *how* a message is formatted. The
//! platform supplies a [`LogBackend`] that moves the finished text to RTT, a
//! console, or wherever it goes.

use core::cell::Cell;
use core::fmt;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use super::Level;

/// One formatted message on its way to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    /// Message severity.
    pub level: Level,
    /// Name of the registered log module that emitted it.
    pub module: &'a str,
    /// Formatted text, `[<file>:<line>] ` prefix included when enabled.
    pub body: &'a str,
}

/// Destination for formatted records.
///
/// Implementations must not block for long and cannot report failure:
/// logging is fire-and-forget.
pub trait LogBackend: Sync {
    fn write(
        &self,
        record: &Record<'_>,
    );
}

/// Returned when a backend is already installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetBackendError {
    AlreadySet,
}

impl fmt::Display for SetBackendError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::AlreadySet => f.write_str("log backend already set"),
        }
    }
}

impl core::error::Error for SetBackendError {}

/// Process-wide backend, written once at startup.
static BACKEND: Mutex<CriticalSectionRawMutex, Cell<Option<&'static dyn LogBackend>>> = Mutex::new(Cell::new(None));

/// Install the backend used by the `log_*!` macros.
///
/// Only the first call wins; later calls leave it in place and return
/// [`SetBackendError::AlreadySet`].
pub fn set_backend(backend: &'static dyn LogBackend) -> Result<(), SetBackendError> {
    BACKEND.lock(|slot| {
        if slot.get().is_some() {
            return Err(SetBackendError::AlreadySet);
        }
        slot.set(Some(backend));
        Ok(())
    })
}

/// Currently installed backend, if any.
pub fn backend() -> Option<&'static dyn LogBackend> { BACKEND.lock(Cell::get) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CAPTURE;

    struct NullBackend;

    impl LogBackend for NullBackend {
        fn write(
            &self,
            _record: &Record<'_>,
        ) {
        }
    }

    static NULL: NullBackend = NullBackend;

    #[test]
    fn test_second_backend_is_rejected() {
        crate::testing::install();
        assert_eq!(set_backend(&NULL), Err(SetBackendError::AlreadySet));

        // The capture backend stays installed
        let installed = backend().map(|b| b as *const dyn LogBackend as *const ());
        assert_eq!(installed, Some(&CAPTURE as *const _ as *const ()));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(std::format!("{}", SetBackendError::AlreadySet), "log backend already set");
    }
}
