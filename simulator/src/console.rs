//! Console log backend.
//!
//! Prints one line per record in the usual RTOS shell layout:
//!
//! ```text
//! [00:00:05.000,123] <dbg> main: Main loop iteration
//! ```
//!
//! Errors and warnings go to stderr, everything else to stdout.

use std::fmt;
use std::io::{self, Write};

use embassy_time::Instant;
use hello_common::log::{Level, LogBackend, Record};

/// Time since boot in microseconds, shown as `hh:mm:ss.mmm,uuu`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uptime(pub u64);

impl fmt::Display for Uptime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let us = self.0 % 1_000;
        let ms = (self.0 / 1_000) % 1_000;
        let total_secs = self.0 / 1_000_000;
        let (h, m, s) = (total_secs / 3_600, (total_secs / 60) % 60, total_secs % 60);
        write!(f, "{h:02}:{m:02}:{s:02}.{ms:03},{us:03}")
    }
}

/// Render a record as a single console line (no trailing newline).
pub fn format_line(
    uptime: Uptime,
    record: &Record<'_>,
) -> String {
    format!("[{}] <{}> {}: {}", uptime, record.level, record.module, record.body)
}

pub struct ConsoleBackend;

impl LogBackend for ConsoleBackend {
    fn write(
        &self,
        record: &Record<'_>,
    ) {
        let line = format_line(Uptime(Instant::now().as_micros()), record);

        // Console errors have nowhere to be reported; drop them
        let _ = match record.level {
            Level::Error | Level::Warning => writeln!(io::stderr().lock(), "{line}"),
            Level::Info | Level::Debug => writeln!(io::stdout().lock(), "{line}"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_zero() {
        assert_eq!(Uptime(0).to_string(), "00:00:00.000,000");
    }

    #[test]
    fn test_uptime_fields() {
        // 1h 2m 3s 45ms 678us
        let us = ((3_600 + 2 * 60 + 3) * 1_000_000) + 45_678;
        assert_eq!(Uptime(us).to_string(), "01:02:03.045,678");
    }

    #[test]
    fn test_format_line() {
        let record = Record {
            level: Level::Debug,
            module: "main",
            body: "Main loop iteration",
        };
        assert_eq!(
            format_line(Uptime(5_000_000), &record),
            "[00:00:05.000,000] <dbg> main: Main loop iteration"
        );
    }
}
