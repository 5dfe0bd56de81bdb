//! Scripted [`Api`] for driving the simulation without a backend.
use super::*;
use cartsim_client::Api;
use cartsim_client::HttpError;
use cartsim_client::Token;
use cartsim_dto::LocationUpdate;
use cartsim_dto::LoginRequest;
use cartsim_dto::LoginResponse;
use cartsim_route::Cart;
use cartsim_route::Route;
use cartsim_route::Waypoint;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    Update(String, LocationUpdate),
}

/// Records every call. Logins hand out `token-<cart>` unless refused;
/// updates fail when their ordinal (across all carts) is flaky.
#[derive(Clone, Default)]
pub struct Script {
    refused: HashSet<String>,
    flaky: HashSet<usize>,
    calls: Arc<Mutex<Vec<Call>>>,
    updates: Arc<AtomicUsize>,
}

impl Script {
    pub fn refuse(mut self, cart: &str) -> Self {
        self.refused.insert(cart.to_string());
        self
    }
    pub fn flaky<I>(mut self, ordinals: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.flaky.extend(ordinals);
        self
    }
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
    /// Route indices reported for `cart`, recovered from [`line`] latitudes.
    pub fn stops(&self, cart: &str) -> Vec<usize> {
        let token = format!("token-{}", cart);
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update(t, update) if t == token => Some(update.latitude.round() as usize),
                _ => None,
            })
            .collect()
    }
    /// Carts in the order their updates arrived.
    pub fn senders(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update(t, _) => Some(t.trim_start_matches("token-").to_string()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl Api for Script {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Login(request.cart_id.clone()));
        if self.refused.contains(&request.cart_id) {
            Err(HttpError::Server {
                status: 401,
                message: "Invalid credentials".to_string(),
            })
        } else {
            Ok(LoginResponse {
                token: format!("token-{}", request.cart_id),
                cart: None,
            })
        }
    }
    async fn update(&self, token: &Token, update: &LocationUpdate) -> Result<(), HttpError> {
        let n = self.updates.fetch_add(1, Ordering::SeqCst);
        self.calls
            .lock()
            .unwrap()
            .push(Call::Update(token.as_str().to_string(), *update));
        if self.flaky.contains(&n) {
            Err(HttpError::Server {
                status: 503,
                message: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Route whose i-th waypoint sits at latitude i, far apart relative to jitter.
pub fn line(len: usize) -> Route {
    Route::new((0..len).map(|i| Waypoint::new(i as f64, 0.0)).collect()).unwrap()
}
pub fn cart_on(route: &Route, id: &str) -> Cart {
    Cart::new(id, "qwerty", id, route.clone())
}
pub fn tracker_on(route: &Route, id: &str) -> Tracker {
    Tracker::new(&cart_on(route, id), Token::from(format!("token-{}", id)))
}
