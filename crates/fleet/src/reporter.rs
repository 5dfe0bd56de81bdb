use super::*;
use cartsim_client::Api;
use cartsim_core::Degrees;
use cartsim_core::Meters;
use cartsim_dto::LocationUpdate;
use cartsim_route::Waypoint;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One reported position: the jittered waypoint and its accuracy radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub position: Waypoint,
    pub accuracy: Meters,
}

impl From<Fix> for LocationUpdate {
    fn from(fix: Fix) -> Self {
        Self {
            latitude: fix.position.lat(),
            longitude: fix.position.lng(),
            accuracy: fix.accuracy,
        }
    }
}

/// Turns tracker positions into noisy fixes and pushes them to the backend.
pub struct Reporter<A> {
    api: A,
    rng: SmallRng,
    jitter: Degrees,
}

impl<A> Reporter<A>
where
    A: Api,
{
    pub fn new(api: A, rng: SmallRng, jitter: Degrees) -> Self {
        Self { api, rng, jitter }
    }
    /// Reporter whose noise source is seeded from the thread RNG.
    pub fn seeded(api: A, jitter: Degrees) -> Self {
        Self::new(api, SmallRng::from_rng(&mut rand::rng()), jitter)
    }
    pub fn api(&self) -> &A {
        &self.api
    }
    /// Draw a fix around the tracker's current waypoint.
    pub fn sample(&mut self, tracker: &Tracker) -> Fix {
        Fix {
            position: tracker.position().jitter(&mut self.rng, self.jitter),
            accuracy: cartsim_route::accuracy(&mut self.rng),
        }
    }
    /// Report the tracker's current position once. Failures are logged and
    /// returned; nothing is retried and the tracker is left untouched.
    pub async fn report(&mut self, tracker: &Tracker) -> Result<Fix, Failure> {
        let fix = self.sample(tracker);
        match self.api.update(tracker.token(), &LocationUpdate::from(fix)).await {
            Ok(()) => {
                log::info!("[report] {}: {} ±{}m", tracker.id(), fix.position, fix.accuracy);
                Ok(fix)
            }
            Err(source) => {
                let failure = Failure::Report {
                    cart: tracker.id().to_string(),
                    source,
                };
                log::error!("[report] {}", failure);
                Err(failure)
            }
        }
    }
}
