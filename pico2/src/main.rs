//! Heartbeat firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Logs a startup announcement, then a debug message every five seconds.
//! Records are formatted by the `hello-common` facade and shipped over RTT
//! with defmt.
//!
//! # Build Features
//!
//! - `dev-build`: debug threshold (otherwise info, and the loop is silent)
//! - `log-with-fileline`: `[<file>:<line>] ` prefix
//! - `thread-stack-info` + `init-stacks`: report unused stack at boot
//!
//! ```bash
//! cargo run --release --features dev-build
//! ```

#![no_std]
#![no_main]

mod backend;
mod stack;

use defmt::warn;
use embassy_executor::Spawner;
use hello_common::app::{self, TimerSleeper};
use hello_common::{log, log_module_register, log_stack_info};
use {defmt_rtt as _, panic_probe as _};

use crate::backend::DefmtBackend;
use crate::stack::PaintedStackProbe;

log_module_register!(boot);

static BACKEND: DefmtBackend = DefmtBackend;
static STACK_PROBE: PaintedStackProbe = PaintedStackProbe;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-heartbeat"),
    embassy_rp::binary_info::rp_program_description!(c"Periodic heartbeat over defmt/RTT"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Starts the time driver behind embassy_time::Timer
    let _p = embassy_rp::init(Default::default());

    // Registration only fails if already done; defmt still works without it
    if let Err(err) = log::set_backend(&BACKEND) {
        warn!("{}", err);
    }
    if let Err(err) = hello_common::stack::set_probe(&STACK_PROBE) {
        warn!("{}", err);
    }

    log_stack_info!();

    app::run(TimerSleeper).await;
}
