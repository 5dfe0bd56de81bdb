use super::*;
use std::sync::Arc;

/// Static definition of a simulated cart. Never mutated after startup.
#[derive(Debug, Clone)]
pub struct Cart {
    id: String,
    password: String,
    name: String,
    route: Arc<Route>,
}

impl Cart {
    pub fn new(id: &str, password: &str, name: &str, route: Route) -> Self {
        Self {
            id: id.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            route: Arc::new(route),
        }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn route(&self) -> Arc<Route> {
        self.route.clone()
    }
}
