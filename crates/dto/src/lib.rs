//! Data transfer objects for backend communication.
//!
//! Request and response bodies for the cart login and location update
//! endpoints, serializable via `serde`. Field names follow the backend's
//! camelCase JSON.
mod request;
mod response;

pub use request::*;
pub use response::*;
