use cartsim_core::Interrupt;
use std::time::Duration;
use tokio::time::Instant;
use tokio::time::Interval;
use tokio::time::MissedTickBehavior;

/// Source of simulation ticks.
/// Abstracts the wall clock away so the driver can be stepped deterministically.
#[async_trait::async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick.
    /// Returns false once the run should stop; every later call returns false too.
    async fn tick(&mut self) -> bool;
}

/// Fixed-rate ticker raced against an interrupt.
/// The first tick lands one period after construction.
/// The interrupt is only consulted here, at the tick boundary.
#[derive(Debug)]
pub struct Metronome {
    interval: Interval,
    interrupt: Interrupt,
}

impl Metronome {
    /// Panics if `period` is zero.
    pub fn new(period: Duration, interrupt: Interrupt) -> Self {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            interrupt,
        }
    }
}

#[async_trait::async_trait]
impl Ticker for Metronome {
    async fn tick(&mut self) -> bool {
        if self.interrupt.raised() {
            return false;
        }
        tokio::select! {
            biased;
            _ = self.interrupt.wait() => false,
            _ = self.interval.tick() => !self.interrupt.raised(),
        }
    }
}

/// Yields a fixed number of ticks immediately, then stops.
#[derive(Debug, Clone, Copy)]
pub struct Countdown(pub usize);

#[async_trait::async_trait]
impl Ticker for Countdown {
    async fn tick(&mut self) -> bool {
        match self.0 {
            0 => false,
            _ => {
                self.0 -= 1;
                true
            }
        }
    }
}
