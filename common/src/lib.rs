//! Shared logic for the heartbeat firmware and its desktop simulator.
//!
//! - [`config`]: Feature-selected build-time constants
//! - [`log`]: Compile-time log facade (`log_info!` and friends)
//! - [`stack`]: Stack usage reporting (`log_stack_info!`)
//! - [`app`]: The heartbeat application loop
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p hello-common
//! cargo test -p hello-common --features dev-build,log-with-fileline
//! cargo test -p hello-common --features thread-stack-info,init-stacks
//! ```
//!
//! The first run is the only one at the info threshold, where the app tests
//! expect `"Hello, Zephyr!"` alone. A plain `cargo test` at the workspace
//! root builds this crate with `dev-build` (the simulator enables it by
//! default), so it only exercises the debug threshold.
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

pub mod app;
pub mod config;
pub mod log;
pub mod stack;

#[cfg(test)]
mod testing;
