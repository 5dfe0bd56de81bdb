use cartsim_core::*;
use rand::Rng;

/// Synthesize a plausible GPS accuracy radius,
/// uniform over `ACCURACY_MIN..=ACCURACY_MAX`.
pub fn accuracy<R>(rng: &mut R) -> Meters
where
    R: Rng + ?Sized,
{
    rng.random_range(ACCURACY_MIN..=ACCURACY_MAX)
}
