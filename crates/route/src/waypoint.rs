use cartsim_core::Degrees;
use rand::Rng;
use std::fmt::Display;
use std::fmt::Formatter;

/// A point on a route, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    lat: Degrees,
    lng: Degrees,
}

impl Waypoint {
    pub const fn new(lat: Degrees, lng: Degrees) -> Self {
        Self { lat, lng }
    }
    pub fn lat(&self) -> Degrees {
        self.lat
    }
    pub fn lng(&self) -> Degrees {
        self.lng
    }
    /// Perturb each axis independently by a uniform offset in
    /// `[-magnitude / 2, +magnitude / 2]`.
    pub fn jitter<R>(&self, rng: &mut R, magnitude: Degrees) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            lat: self.lat + (rng.random::<Degrees>() - 0.5) * magnitude,
            lng: self.lng + (rng.random::<Degrees>() - 0.5) * magnitude,
        }
    }
}

impl From<(Degrees, Degrees)> for Waypoint {
    fn from((lat, lng): (Degrees, Degrees)) -> Self {
        Self::new(lat, lng)
    }
}

impl Display for Waypoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
