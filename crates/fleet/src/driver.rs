use super::*;
use cartsim_client::Api;
use cartsim_route::Cart;

/// Lifecycle of a [`Simulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Logging carts in and sending their first fix.
    Starting,
    /// Advancing and reporting every tracker once per tick.
    Running,
    /// Interrupted; the fleet has been handed back.
    Stopped,
}

/// Drives the fleet: one login round, then one report per cart per tick.
///
/// Everything within a tick is sequential, so two carts' reports are
/// separated only by the latency of the calls before them.
pub struct Simulator<A> {
    reporter: Reporter<A>,
    fleet: Fleet,
    phase: Phase,
}

impl<A> Simulator<A>
where
    A: Api,
{
    pub fn new(reporter: Reporter<A>) -> Self {
        Self {
            reporter,
            fleet: Fleet::default(),
            phase: Phase::Starting,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
    /// Log every cart in and report its first waypoint.
    /// Carts that fail to log in are left out; an empty fleet still runs.
    pub async fn start(&mut self, carts: &[Cart]) {
        log::info!("[driver] logging in {} carts", carts.len());
        for cart in carts {
            if let Some(tracker) = initialize(&mut self.reporter, cart).await {
                self.fleet.push(tracker);
            }
        }
        match self.fleet.len() {
            0 => log::warn!("[driver] no carts logged in, idling"),
            n => log::info!("[driver] {} of {} carts active", n, carts.len()),
        }
        self.phase = Phase::Running;
    }
    /// One tick: advance each tracker, then report where it landed.
    /// The index moves even when the report fails.
    pub async fn step(&mut self) {
        for tracker in self.fleet.iter_mut() {
            tracker.advance();
            let _ = self.reporter.report(tracker).await;
        }
    }
    /// Step on every tick until the ticker stops, then hand back the fleet.
    pub async fn run<T>(mut self, ticker: &mut T) -> Fleet
    where
        T: Ticker + ?Sized,
    {
        while ticker.tick().await {
            self.step().await;
        }
        self.phase = Phase::Stopped;
        log::info!("[driver] simulation stopped");
        self.fleet
    }
}
