use super::*;
use cartsim_dto::LocationUpdate;
use cartsim_dto::LoginRequest;
use cartsim_dto::LoginResponse;

/// Calls the simulator makes against the backend.
///
/// The driver is transport-agnostic: tests substitute a scripted
/// implementation, the binary uses [`HttpApi`].
#[async_trait::async_trait]
pub trait Api: Send + Sync {
    /// Exchange cart credentials for a bearer token.
    /// Any non-2xx status is an error.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError>;
    /// Push one position fix on behalf of the token's cart.
    /// Only the status code is inspected.
    async fn update(&self, token: &Token, update: &LocationUpdate) -> Result<(), HttpError>;
}
