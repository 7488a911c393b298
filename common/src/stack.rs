//! Stack usage reporting.
//!
//! The platform measures; this module only formats the answer. On the
//! device the stack is painted with a known word at reset and the untouched
//! words below the deepest stack pointer are counted (the "high-water mark").
//!
//! ```text
//! _stack_end                              current SP        _stack_start
//!     | CCCC CCCC CCCC ... CCCC | used ... used | used used used |
//!     |<---- unused_bytes ----->|
//! ```

use core::cell::Cell;
use core::fmt;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::log::{Level, LogBackend, LogModule, SourceLocation, backend, dispatch};

/// Value cortex-m-rt writes over the stack when `paint-stack` is on.
pub const STACK_PAINT_VALUE: u32 = 0xCCCC_CCCC;

/// Platform hook answering "how much of my stack was never touched?".
pub trait StackProbe: Sync {
    /// Unused bytes of the calling thread's stack, or `None` when it cannot
    /// be measured.
    fn unused_bytes(&self) -> Option<usize>;
}

/// Returned when a probe is already installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetProbeError {
    AlreadySet,
}

impl fmt::Display for SetProbeError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::AlreadySet => f.write_str("stack probe already set"),
        }
    }
}

impl core::error::Error for SetProbeError {}

static PROBE: Mutex<CriticalSectionRawMutex, Cell<Option<&'static dyn StackProbe>>> = Mutex::new(Cell::new(None));

/// Install the probe used by [`log_stack_info!`](crate::log_stack_info).
pub fn set_probe(probe: &'static dyn StackProbe) -> Result<(), SetProbeError> {
    PROBE.lock(|slot| {
        if slot.get().is_some() {
            return Err(SetProbeError::AlreadySet);
        }
        slot.set(Some(probe));
        Ok(())
    })
}

/// Currently installed probe, if any.
pub fn probe() -> Option<&'static dyn StackProbe> { PROBE.lock(Cell::get) }

/// Count the painted words at the low end of a stack region.
///
/// `words` runs from the lowest address upward. Scanning stops at the first
/// word that no longer holds `pattern`.
pub fn unused_painted_bytes(
    words: impl IntoIterator<Item = u32>,
    pattern: u32,
) -> usize {
    let untouched = words.into_iter().take_while(|&word| word == pattern).count();
    untouched * size_of::<u32>()
}

/// Whole words between the stack limit and the stack pointer, or `None`
/// when the pointer is not above the limit.
pub fn words_above_limit(
    limit: usize,
    sp: usize,
) -> Option<usize> {
    if sp <= limit {
        return None;
    }
    Some((sp - limit) / size_of::<u32>())
}

/// Emit one `STACK unused: <n> bytes` warning through `backend` if `probe`
/// can measure.
pub fn report(
    module: &LogModule,
    location: SourceLocation,
    probe: &dyn StackProbe,
    backend: &dyn LogBackend,
) {
    if let Some(unused) = probe.unused_bytes() {
        dispatch(
            module,
            backend,
            Level::Warning,
            location,
            format_args!("STACK unused: {} bytes", unused),
        );
    }
}

/// [`report`] with the installed probe and backend.
#[doc(hidden)]
pub fn emit_report(
    module: &LogModule,
    location: SourceLocation,
) {
    if let (Some(probe), Some(backend)) = (probe(), backend()) {
        report(module, location, probe, backend);
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;
    use crate::log::LevelFilter;
    use crate::testing::{CaptureBackend, Captured};

    const MODULE: LogModule = LogModule::new("stack")
        .with_level(LevelFilter::Info)
        .with_file_line(false);

    struct FixedProbe(Option<usize>);

    impl StackProbe for FixedProbe {
        fn unused_bytes(&self) -> Option<usize> { self.0 }
    }

    fn here() -> SourceLocation { SourceLocation::new(file!(), line!()) }

    #[test]
    fn test_unused_painted_bytes_counts_leading_pattern() {
        let p = STACK_PAINT_VALUE;
        assert_eq!(unused_painted_bytes([p, p, p, 0x2000_1234, p], p), 12);
    }

    #[test]
    fn test_unused_painted_bytes_fully_used() {
        assert_eq!(unused_painted_bytes([0, STACK_PAINT_VALUE], STACK_PAINT_VALUE), 0);
        assert_eq!(unused_painted_bytes([0_u32; 0], STACK_PAINT_VALUE), 0);
    }

    #[test]
    fn test_unused_painted_bytes_never_touched() {
        let region = [STACK_PAINT_VALUE; 64];
        assert_eq!(unused_painted_bytes(region, STACK_PAINT_VALUE), 256);
    }

    #[test]
    fn test_words_above_limit_spans_whole_region() {
        // Region size comes from the two addresses alone
        assert_eq!(words_above_limit(0x2007_8000, 0x2007_9000), Some(1024));
        assert_eq!(words_above_limit(0x2007_8000, 0x2007_8006), Some(1));
    }

    #[test]
    fn test_words_above_limit_rejects_sp_at_or_below_limit() {
        assert_eq!(words_above_limit(0x2007_8000, 0x2007_8000), None);
        assert_eq!(words_above_limit(0x2007_8000, 0x2000_0000), None);
    }

    #[test]
    fn test_report_emits_one_warning() {
        let backend = CaptureBackend::new();
        report(&MODULE, here(), &FixedProbe(Some(1024)), &backend);
        assert_eq!(
            backend.records(),
            vec![Captured::new(Level::Warning, "stack", "STACK unused: 1024 bytes")]
        );
    }

    #[test]
    fn test_report_silent_when_probe_cannot_measure() {
        let backend = CaptureBackend::new();
        report(&MODULE, here(), &FixedProbe(None), &backend);
        assert!(backend.records().is_empty());
    }

    #[test]
    fn test_report_respects_module_threshold() {
        let backend = CaptureBackend::new();
        let errors_only = MODULE.with_level(LevelFilter::Error);
        report(&errors_only, here(), &FixedProbe(Some(64)), &backend);
        assert!(backend.records().is_empty());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(std::format!("{}", SetProbeError::AlreadySet), "stack probe already set");
    }

    #[cfg(not(all(feature = "thread-stack-info", feature = "init-stacks")))]
    #[test]
    fn test_macro_is_noop_without_prerequisites() {
        const NOOP_MODULE: LogModule = MODULE.with_level(LevelFilter::Debug);
        crate::testing::install();
        crate::log_stack_info!(module: NOOP_MODULE);
        assert!(crate::testing::take("stack").is_empty());
    }

    #[cfg(all(feature = "thread-stack-info", feature = "init-stacks"))]
    #[test]
    fn test_macro_reports_with_prerequisites() {
        static PROBE_512: FixedProbe = FixedProbe(Some(512));
        const REPORT_MODULE: LogModule = LogModule::new("stack_macro")
            .with_level(LevelFilter::Warning)
            .with_file_line(false);

        crate::testing::install();
        set_probe(&PROBE_512).ok();
        crate::log_stack_info!(module: REPORT_MODULE);
        assert_eq!(
            crate::testing::take("stack_macro"),
            vec![Captured::new(Level::Warning, "stack_macro", "STACK unused: 512 bytes")]
        );
    }
}
