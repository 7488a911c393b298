//! defmt log backend.
//!
//! Forwards each formatted record to the defmt macro of the same level, so
//! records travel over RTT and are decoded on the host by `probe-rs`.
//!
//! The body was already formatted by the facade; defmt only ships it as a
//! string (`{=str}`), which keeps interning to a single format string per
//! level.

use defmt::{debug, error, info, warn};
use hello_common::log::{Level, LogBackend, Record};

/// Backend writing to the global defmt logger (RTT via `defmt-rtt`).
pub struct DefmtBackend;

impl LogBackend for DefmtBackend {
    fn write(
        &self,
        record: &Record<'_>,
    ) {
        match record.level {
            Level::Error => error!("{=str}: {=str}", record.module, record.body),
            Level::Warning => warn!("{=str}: {=str}", record.module, record.body),
            Level::Info => info!("{=str}: {=str}", record.module, record.body),
            Level::Debug => debug!("{=str}: {=str}", record.module, record.body),
        }
    }
}
