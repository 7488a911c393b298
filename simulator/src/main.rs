//! Heartbeat simulator for desktop platforms.
//!
//! Runs the same application loop as the Pico 2 firmware on the Embassy
//! `arch-std` executor, with records printed to the terminal instead of RTT.
//!
//! ```bash
//! cargo run -p hello-simulator                                   # debug threshold
//! cargo run -p hello-simulator --no-default-features             # info threshold
//! cargo run -p hello-simulator --features log-with-fileline
//! ```

mod console;

use embassy_executor::Spawner;
use hello_common::app::{self, TimerSleeper};
use hello_common::config::{APP_LOG_LEVEL, LOG_WITH_FILELINE};
use hello_common::log;

use crate::console::ConsoleBackend;

static CONSOLE: ConsoleBackend = ConsoleBackend;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    if let Err(err) = log::set_backend(&CONSOLE) {
        eprintln!("simulator: {err}");
    }

    eprintln!("simulator: log level {APP_LOG_LEVEL:?}, file/line prefix {LOG_WITH_FILELINE}");

    app::run(TimerSleeper).await;
}
