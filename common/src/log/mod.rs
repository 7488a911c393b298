//! Compile-time log facade.
//!
//! Four leveled macros ([`log_info!`](crate::log_info),
//! [`log_warning!`](crate::log_warning), [`log_error!`](crate::log_error),
//! [`log_debug!`](crate::log_debug)) take `core::fmt` format strings, drop
//! anything below the module threshold at compile time, optionally prefix
//! `[<file>:<line>] `, and hand the text to the installed [`LogBackend`].
//!
//! ```ignore
//! use hello_common::{log_info, log_module_register};
//!
//! log_module_register!(main);
//!
//! fn start() {
//!     log_info!("Hello, {}!", "Zephyr");
//! }
//! ```
//!
//! - `level`: [`Level`] and [`LevelFilter`]
//! - `facade`: [`LogModule`], formatting and [`dispatch`]
//! - `backend`: [`LogBackend`] trait and the process-wide registration
//! - `macros`: the macro layer

mod backend;
mod facade;
mod level;
mod macros;

pub use backend::{LogBackend, Record, SetBackendError, backend, set_backend};
#[doc(hidden)]
pub use facade::emit;
pub use facade::{LogModule, SourceLocation, dispatch, format_body};
pub use level::{Level, LevelFilter};
