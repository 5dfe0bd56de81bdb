use cartsim_client::Token;
use cartsim_route::Cart;
use cartsim_route::Route;
use cartsim_route::Waypoint;
use std::sync::Arc;

/// Runtime state of one logged-in cart.
/// `index` always lies in `0..route.len()`.
#[derive(Debug, Clone)]
pub struct Tracker {
    id: String,
    name: String,
    route: Arc<Route>,
    token: Token,
    index: usize,
}

impl Tracker {
    pub fn new(cart: &Cart, token: Token) -> Self {
        Self {
            id: cart.id().to_string(),
            name: cart.name().to_string(),
            route: cart.route(),
            token,
            index: 0,
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn token(&self) -> &Token {
        &self.token
    }
    pub fn index(&self) -> usize {
        self.index
    }
    /// Un-jittered waypoint at the current index.
    pub fn position(&self) -> Waypoint {
        self.route.at(self.index)
    }
    /// Step to the next waypoint, wrapping at the end of the route.
    pub fn advance(&mut self) {
        self.index = self.route.next(self.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn tracker(len: usize) -> Tracker {
        let route = Route::new((0..len).map(|i| Waypoint::new(i as f64, 0.0)).collect()).unwrap();
        let cart = Cart::new("cart001", "qwerty", "Veggies Cart", route);
        Tracker::new(&cart, Token::from("t".to_string()))
    }
    #[test]
    fn starts_at_first_waypoint() {
        let tracker = tracker(9);
        assert_eq!(tracker.id(), "cart001");
        assert_eq!(tracker.name(), "Veggies Cart");
        assert_eq!(tracker.index(), 0);
        assert_eq!(tracker.position(), Waypoint::new(0.0, 0.0));
    }
    #[test]
    fn index_advances_mod_len() {
        let mut tracker = tracker(9);
        for n in 1..=40 {
            tracker.advance();
            assert_eq!(tracker.index(), n % 9);
        }
    }
    #[test]
    fn nine_advances_return_home() {
        let mut tracker = tracker(9);
        (0..9).for_each(|_| tracker.advance());
        assert_eq!(tracker.position(), Waypoint::new(0.0, 0.0));
    }
}
