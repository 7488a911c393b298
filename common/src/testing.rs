//! Test helpers: a backend that records instead of printing.
//!
//! Tests run in parallel and share one process-wide backend, so every test
//! logs under its own module name and reads back only its own records with
//! [`take`]. Tests sharing a module name hold [`serial`].

use std::string::{String, ToString};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::vec::Vec;

use crate::log::{Level, LogBackend, Record, set_backend};

/// Owned copy of a [`Record`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captured {
    pub level: Level,
    pub module: String,
    pub body: String,
}

impl Captured {
    pub fn new(
        level: Level,
        module: &str,
        body: &str,
    ) -> Self {
        Self {
            level,
            module: module.to_string(),
            body: body.to_string(),
        }
    }
}

pub struct CaptureBackend {
    records: Mutex<Vec<Captured>>,
}

impl CaptureBackend {
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<Captured> { self.lock().clone() }

    fn lock(&self) -> MutexGuard<'_, Vec<Captured>> { self.records.lock().unwrap_or_else(PoisonError::into_inner) }
}

impl LogBackend for CaptureBackend {
    fn write(
        &self,
        record: &Record<'_>,
    ) {
        self.lock().push(Captured::new(record.level, record.module, record.body));
    }
}

pub static CAPTURE: CaptureBackend = CaptureBackend::new();

static SERIAL: Mutex<()> = Mutex::new(());

/// Install [`CAPTURE`] as the process-wide backend. Idempotent.
pub fn install() { set_backend(&CAPTURE).ok(); }

/// Remove and return everything `module` logged so far.
pub fn take(module: &str) -> Vec<Captured> {
    let mut records = CAPTURE.lock();
    let (taken, kept): (Vec<_>, Vec<_>) = records.drain(..).partition(|r| r.module == module);
    *records = kept;
    taken
}

/// Serialize tests that log under the same module.
pub fn serial() -> MutexGuard<'static, ()> { SERIAL.lock().unwrap_or_else(PoisonError::into_inner) }
