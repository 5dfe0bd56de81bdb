//! Client side of the CartSync backend.
//!
//! ## Core Types
//!
//! - [`Api`] — the two calls the simulator makes (login, location update)
//! - [`HttpApi`] — reqwest-backed implementation against a base URL
//! - [`Token`] — bearer credential returned by login
//! - [`HttpError`] — transport and status failures
mod api;
mod error;
mod http;
mod token;

pub use api::*;
pub use error::*;
pub use http::*;
pub use token::*;
