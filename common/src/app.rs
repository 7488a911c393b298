//! Heartbeat application loop.
//!
//! One startup announcement, then forever: a debug message followed by a
//! [`MAIN_LOOP_PERIOD`] sleep. The sleep is the only suspension point and is
//! delegated to a [`Sleeper`], so the firmware can use the Embassy timer and
//! tests can count iterations.

use core::time::Duration;

use crate::config::MAIN_LOOP_PERIOD;
use crate::{log_debug, log_info, log_module_register};

log_module_register!(main);

/// Voluntarily give up the processor for at least `duration`.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(
        &mut self,
        duration: Duration,
    );
}

impl<S: Sleeper> Sleeper for &mut S {
    async fn sleep(
        &mut self,
        duration: Duration,
    ) {
        (**self).sleep(duration).await;
    }
}

/// [`Sleeper`] on the Embassy timer queue.
#[cfg(feature = "embassy-time")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSleeper;

#[cfg(feature = "embassy-time")]
impl Sleeper for TimerSleeper {
    async fn sleep(
        &mut self,
        duration: Duration,
    ) {
        let ticks = embassy_time::Duration::from_micros(duration.as_micros() as u64);
        embassy_time::Timer::after(ticks).await;
    }
}

/// Startup announcement, emitted once before the loop.
pub fn announce() {
    log_info!("Hello, Zephyr!");
}

/// One loop iteration.
pub async fn tick<S: Sleeper>(sleeper: &mut S) {
    log_debug!("Main loop iteration");
    sleeper.sleep(MAIN_LOOP_PERIOD).await;
}

/// Announce, then iterate forever. Never completes.
pub async fn run<S: Sleeper>(mut sleeper: S) {
    announce();

    loop {
        tick(&mut sleeper).await;
    }
}
