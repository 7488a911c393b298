//! Log module identity, message formatting and dispatch.

use core::fmt::{self, Write};

use heapless::String;

use super::backend::{LogBackend, Record, backend};
use super::{Level, LevelFilter};
use crate::config::{APP_LOG_LEVEL, LOG_MSG_LEN, LOG_WITH_FILELINE};

// =============================================================================
// Module Identity
// =============================================================================

/// A named logging channel with its build-time policy.
///
/// Created as a `const` by [`log_module_register!`](crate::log_module_register);
/// the macros read it in `const` context, so a level below `level` costs
/// nothing at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogModule {
    /// Tag carried by every record of this module.
    pub name: &'static str,
    /// Threshold, [`APP_LOG_LEVEL`] unless overridden.
    pub level: LevelFilter,
    /// Prefix bodies with `[<file>:<line>] `.
    pub file_line: bool,
}

impl LogModule {
    /// Module with the build's default threshold and format mode.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            level: APP_LOG_LEVEL,
            file_line: LOG_WITH_FILELINE,
        }
    }

    pub const fn with_level(
        self,
        level: LevelFilter,
    ) -> Self {
        Self { level, ..self }
    }

    pub const fn with_file_line(
        self,
        file_line: bool,
    ) -> Self {
        Self { file_line, ..self }
    }

    #[inline]
    pub const fn enabled(
        &self,
        level: Level,
    ) -> bool {
        self.level.allows(level)
    }
}

// =============================================================================
// Call Site
// =============================================================================

/// Source position of a log call, filled in from `file!()` and `line!()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(
        file: &'static str,
        line: u32,
    ) -> Self {
        Self { file, line }
    }

    /// File name without its directories. Handles both separators since
    /// `file!()` uses the host's.
    pub fn file_name(&self) -> &'static str {
        match self.file.rfind(['/', '\\']) {
            Some(idx) => &self.file[idx + 1..],
            None => self.file,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Writer that keeps as much text as fits and then stops formatting.
struct Truncating<'a>(&'a mut String<LOG_MSG_LEN>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        let room = LOG_MSG_LEN - self.0.len();
        if s.len() <= room {
            return self.0.push_str(s).map_err(|_| fmt::Error);
        }

        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.0.push_str(&s[..end]).ok();
        Err(fmt::Error)
    }
}

/// Format one message body, applying the module's format mode.
pub fn format_body(
    module: &LogModule,
    location: SourceLocation,
    args: fmt::Arguments<'_>,
) -> String<LOG_MSG_LEN> {
    let mut body = String::new();
    let mut out = Truncating(&mut body);

    // A full buffer is the only error; the truncated text is still sent
    if module.file_line {
        let _ = write!(out, "[{}:{}] ", location.file_name(), location.line);
    }
    let _ = out.write_fmt(args);
    body
}

// =============================================================================
// Dispatch
// =============================================================================

/// Gate, format and hand one message to `backend`.
///
/// This is the whole facade minus backend lookup; the macros reach it
/// through [`emit`].
pub fn dispatch(
    module: &LogModule,
    backend: &dyn LogBackend,
    level: Level,
    location: SourceLocation,
    args: fmt::Arguments<'_>,
) {
    if !module.enabled(level) {
        return;
    }

    let body = format_body(module, location, args);
    backend.write(&Record {
        level,
        module: module.name,
        body: body.as_str(),
    });
}

/// Dispatch to the installed backend. Without one the message is dropped.
#[doc(hidden)]
pub fn emit(
    module: &LogModule,
    level: Level,
    location: SourceLocation,
    args: fmt::Arguments<'_>,
) {
    if let Some(backend) = backend() {
        dispatch(module, backend, level, location, args);
    }
}
