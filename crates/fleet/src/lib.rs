//! Tick-driven cart simulation.
//!
//! Logs every catalog cart in, then walks each one around its route on a
//! fixed interval, reporting a jittered fix per tick until interrupted.
//!
//! ## Architecture
//!
//! - [`Simulator`] — Starting → Running → Stopped driver owning the [`Fleet`]
//! - [`Reporter`] — jitters positions and pushes fixes through an [`Api`]
//! - [`Tracker`] — runtime state of one logged-in cart
//! - [`Ticker`] — pluggable tick source ([`Metronome`], [`Countdown`])
//! - [`Supervisor`] — start/stop wrapper for running a simulation in the background
//!
//! ## Errors
//!
//! - [`Failure`] — authentication and report failures, logged and swallowed
//!
//! [`Api`]: cartsim_client::Api
mod config;
mod driver;
mod failure;
mod fleet;
mod reporter;
mod session;
mod supervisor;
mod ticker;
mod tracker;

#[cfg(test)]
mod script;

pub use config::*;
pub use driver::*;
pub use failure::*;
pub use fleet::*;
pub use reporter::*;
pub use session::*;
pub use supervisor::*;
pub use ticker::*;
pub use tracker::*;

use cartsim_client::HttpApi;
use cartsim_core::Interrupt;

/// Run the catalog against the configured backend until `interrupt` is raised.
/// Only startup problems are errors; login and report failures are logged.
pub async fn run(config: Config, interrupt: Interrupt) -> anyhow::Result<Fleet> {
    let api = HttpApi::new(config.api())?;
    log::info!("[driver] reporting to {} every {:?}", api.base(), config.interval());
    let mut simulator = Simulator::new(Reporter::seeded(api, config.jitter()));
    simulator.start(&cartsim_route::catalog()).await;
    log::info!("[driver] press Ctrl+C to stop");
    let ref mut metronome = Metronome::new(config.interval(), interrupt);
    Ok(simulator.run(metronome).await)
}
