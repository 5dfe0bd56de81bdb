use super::*;
use cartsim_client::Api;
use cartsim_client::Token;
use cartsim_dto::LoginRequest;
use cartsim_route::Cart;

/// Exchange a cart's credentials for a bearer token.
pub async fn authenticate<A>(api: &A, cart: &Cart) -> Result<Token, Failure>
where
    A: Api + ?Sized,
{
    let request = LoginRequest {
        cart_id: cart.id().to_string(),
        password: cart.password().to_string(),
    };
    match api.login(&request).await {
        Ok(response) => {
            log::info!("[session] {} logged in", cart.id());
            Ok(Token::from(response.token))
        }
        Err(source) => Err(Failure::Authentication {
            cart: cart.id().to_string(),
            source,
        }),
    }
}

/// Log a cart in and report its first waypoint.
/// Returns `None` if login fails; the caller carries on without this cart.
/// A failed first report still yields a tracker.
pub async fn initialize<A>(reporter: &mut Reporter<A>, cart: &Cart) -> Option<Tracker>
where
    A: Api,
{
    match authenticate(reporter.api(), cart).await {
        Ok(token) => {
            let tracker = Tracker::new(cart, token);
            log::info!("[session] tracking {} ({})", tracker.id(), tracker.name());
            let _ = reporter.report(&tracker).await;
            Some(tracker)
        }
        Err(failure) => {
            log::error!("[session] {}", failure);
            log::error!("[session] skipping {} ({})", cart.id(), cart.name());
            None
        }
    }
}
