use super::*;

/// Ordered, closed loop of waypoints. Never empty.
/// Index arithmetic wraps from the last waypoint back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Route(Vec<Waypoint>);

impl Route {
    pub fn new(points: Vec<Waypoint>) -> anyhow::Result<Self> {
        if points.is_empty() {
            Err(anyhow::anyhow!("route must contain at least one waypoint"))
        } else {
            Ok(Self(points))
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Waypoint at `index`, taken modulo the route length.
    pub fn at(&self, index: usize) -> Waypoint {
        self.0[index % self.len()]
    }
    /// Index following `index` on the loop.
    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }
    pub fn points(&self) -> &[Waypoint] {
        &self.0
    }
}

impl TryFrom<&[(cartsim_core::Degrees, cartsim_core::Degrees)]> for Route {
    type Error = anyhow::Error;
    fn try_from(points: &[(cartsim_core::Degrees, cartsim_core::Degrees)]) -> anyhow::Result<Self> {
        Self::new(points.iter().copied().map(Waypoint::from).collect())
    }
}
