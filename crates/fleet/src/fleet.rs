use super::*;
use cartsim_route::Waypoint;

/// Trackers of every cart that logged in, in catalog order.
/// Owned by the [`Simulator`] and handed back when it stops.
#[derive(Debug, Clone, Default)]
pub struct Fleet(Vec<Tracker>);

impl Fleet {
    pub fn push(&mut self, tracker: Tracker) {
        self.0.push(tracker);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, id: &str) -> Option<&Tracker> {
        self.0.iter().find(|t| t.id() == id)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Tracker> {
        self.0.iter()
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tracker> {
        self.0.iter_mut()
    }
    /// Last recorded (un-jittered) waypoint of every tracker, one per cart.
    pub fn finals(&self) -> Vec<(&str, Waypoint)> {
        self.0.iter().map(|t| (t.id(), t.position())).collect()
    }
}

/// Final-position summary, one line per cart.
impl std::fmt::Display for Fleet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "final positions:")?;
        for tracker in self.iter() {
            writeln!(f, "   {}: {}", tracker.id(), tracker.position())?;
        }
        Ok(())
    }
}
