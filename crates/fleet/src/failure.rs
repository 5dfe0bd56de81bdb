use cartsim_client::HttpError;
use std::fmt::Display;
use std::fmt::Formatter;

/// The two things that can go wrong for a cart.
/// Neither is fatal to the simulation.
#[derive(Debug)]
pub enum Failure {
    /// Login was refused or unreachable; the cart sits out the run.
    Authentication { cart: String, source: HttpError },
    /// One location update was lost; the cart keeps moving.
    Report { cart: String, source: HttpError },
}

impl Failure {
    pub fn cart(&self) -> &str {
        match self {
            Self::Authentication { cart, .. } => cart,
            Self::Report { cart, .. } => cart,
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication { cart, source } => write!(f, "failed to login {}: {}", cart, source),
            Self::Report { cart, source } => write!(f, "failed to update {}: {}", cart, source),
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Authentication { source, .. } => Some(source),
            Self::Report { source, .. } => Some(source),
        }
    }
}
