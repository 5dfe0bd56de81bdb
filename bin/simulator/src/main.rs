//! Cart Location Simulator
//!
//! Walks two carts around Imphal, Manipur, reporting a jittered fix for each
//! to the CartSync backend every tick. Runs until Ctrl+C.
//!
//! Environment: API_URL, UPDATE_INTERVAL (e.g. "5s"), LOG_LEVEL.

#[tokio::main(flavor = "current_thread")]
async fn main() {
    cartsim_core::log();
    log::info!("cart location simulator");
    log::info!("simulating cart movement in Imphal, Manipur, India");
    match simulate().await {
        Ok(fleet) => print!("{}", fleet),
        Err(e) => {
            log::error!("simulation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn simulate() -> anyhow::Result<cartsim_fleet::Fleet> {
    let config = cartsim_fleet::Config::from_env()?;
    cartsim_fleet::run(config, cartsim_core::interrupt()).await
}
