//! Build-time configuration.
//!
//! Every policy knob of the log facade is a `const` derived from a Cargo
//! feature, so disabled paths are folded away by the compiler instead of
//! being checked on each call.
//!
//! | Feature | Constant |
//! |---------|----------|
//! | `dev-build` | [`APP_LOG_LEVEL`] = `Debug` (else `Info`) |
//! | `log-with-fileline` | [`LOG_WITH_FILELINE`] |
//! | `thread-stack-info` + `init-stacks` | [`STACK_INFO`] |

use core::time::Duration;

use crate::log::LevelFilter;

// =============================================================================
// Log Policy
// =============================================================================

/// Whether this is a development build.
pub const DEV_BUILD: bool = cfg!(feature = "dev-build");

/// Default threshold for every registered log module.
pub const APP_LOG_LEVEL: LevelFilter = if DEV_BUILD { LevelFilter::Debug } else { LevelFilter::Info };

/// Prefix messages with `[<file>:<line>] `.
pub const LOG_WITH_FILELINE: bool = cfg!(feature = "log-with-fileline");

/// Thread stack accounting is compiled in.
pub const THREAD_STACK_INFO: bool = cfg!(feature = "thread-stack-info");

/// Stacks are painted with a known pattern at reset.
pub const INIT_STACKS: bool = cfg!(feature = "init-stacks");

/// Stack usage reports need both accounting and a painted stack.
pub const STACK_INFO: bool = THREAD_STACK_INFO && INIT_STACKS;

/// Maximum bytes per formatted message (prefix included). Longer messages
/// are truncated.
pub const LOG_MSG_LEN: usize = 128;

/// Name used by `log_module_register!()` when no name is given.
pub const DEFAULT_LOG_MODULE: &str = "app";

// =============================================================================
// Application
// =============================================================================

/// Pause between two main loop iterations.
pub const MAIN_LOOP_PERIOD: Duration = Duration::from_secs(5);
