use super::*;
use cartsim_core::Degrees;

/// Around Ima Keithel (Women's Market), closing back near the start.
#[rustfmt::skip]
const VEGGIES: [(Degrees, Degrees); 9] = [
    (24.8120, 93.9360), // Ima Keithel Market
    (24.8130, 93.9370), // Near Kangla Fort
    (24.8140, 93.9365), // MG Avenue
    (24.8150, 93.9375), // Khwairamband Bazaar
    (24.8160, 93.9380), // Bir Tikendrajit Park
    (24.8155, 93.9390), // North AOC
    (24.8145, 93.9385), // Thangal Bazaar
    (24.8135, 93.9375), // Paona Bazaar
    (24.8125, 93.9365), // back toward Ima Keithel
];

/// Around Paona Bazaar and the western residential areas.
#[rustfmt::skip]
const CLOTHS: [(Degrees, Degrees); 9] = [
    (24.8200, 93.9400), // Paona Bazaar
    (24.8210, 93.9410), // Keishampat
    (24.8220, 93.9420), // Singjamei
    (24.8230, 93.9430), // Lamphelpat
    (24.8240, 93.9440), // Uripok
    (24.8235, 93.9450), // Sagolband
    (24.8225, 93.9445), // Thangmeiband
    (24.8215, 93.9435), // Kwakeithel
    (24.8205, 93.9425), // back toward Paona
];

/// The two carts driven by the simulator, in reporting order.
pub fn catalog() -> Vec<Cart> {
    vec![
        Cart::new("cart001", "qwerty", "Veggies Cart", fixed(&VEGGIES)),
        Cart::new("cart002", "qwerty", "Cloths Cart", fixed(&CLOTHS)),
    ]
}

fn fixed(points: &[(Degrees, Degrees)]) -> Route {
    Route::try_from(points).expect("catalog routes are non-empty")
}
