//! Waypoints, cyclic routes, and the hardcoded cart catalog.
//!
//! ## Core Types
//!
//! - [`Waypoint`] — latitude/longitude pair, with GPS-style jitter
//! - [`Route`] — non-empty closed loop of waypoints
//! - [`Cart`] — credentials, display name, and route of one simulated cart
//!
//! ## Catalog
//!
//! - [`catalog`] — the two Imphal carts the simulator drives
mod cart;
mod catalog;
mod noise;
mod route;
mod waypoint;

pub use cart::*;
pub use catalog::*;
pub use noise::*;
pub use route::*;
pub use waypoint::*;
