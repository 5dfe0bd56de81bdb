use super::*;
use cartsim_client::Api;
use cartsim_core::Trigger;
use cartsim_route::Cart;
use tokio::task::JoinHandle;

/// Runs at most one simulation in the background of a larger service.
#[derive(Debug, Default)]
pub struct Supervisor {
    active: Option<(Trigger, JoinHandle<Fleet>)>,
}

impl Supervisor {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|(_, task)| !task.is_finished())
    }
    /// Spawn a simulation of `carts` on the current runtime.
    /// Returns false, and leaves the running one alone, if one is already active.
    pub fn start<A>(&mut self, api: A, carts: Vec<Cart>, config: &Config) -> bool
    where
        A: Api + 'static,
    {
        if self.running() {
            log::warn!("[supervisor] simulation already running");
            return false;
        }
        let (trigger, interrupt) = cartsim_core::channel();
        let period = config.interval();
        let mut simulator = Simulator::new(Reporter::seeded(api, config.jitter()));
        let task = tokio::spawn(async move {
            simulator.start(&carts).await;
            let ref mut metronome = Metronome::new(period, interrupt);
            simulator.run(metronome).await
        });
        log::info!("[supervisor] simulation started");
        self.active = Some((trigger, task));
        true
    }
    /// Interrupt the active simulation and wait for its fleet.
    /// The interrupt lands at the next tick boundary.
    pub async fn stop(&mut self) -> Option<Fleet> {
        let (trigger, task) = self.active.take()?;
        trigger.fire();
        match task.await {
            Ok(fleet) => {
                log::info!("[supervisor] simulation stopped");
                Some(fleet)
            }
            Err(e) => {
                log::error!("[supervisor] simulation task failed: {}", e);
                None
            }
        }
    }
}
