//! Login Check Binary
//!
//! Tries a single cart login and prints what the backend handed back.
//! Base URL from --api, else API_URL, else the local default.

use cartsim_client::Api;
use cartsim_client::HttpApi;
use cartsim_client::Token;
use cartsim_dto::LoginRequest;
use clap::Parser;

/// Length of the token prefix echoed on success.
const PREVIEW: usize = 50;

#[derive(Parser, Debug)]
#[command(name = "login-check", about = "Try a cart login against the CartSync backend")]
struct Args {
    /// Cart password
    password: String,
    /// Cart identifier
    #[arg(short, long, default_value = "cart001")]
    cart: String,
    /// Backend base URL
    #[arg(long)]
    api: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    cartsim_core::log();
    let args = Args::parse();
    if let Err(e) = check(args).await {
        log::error!("login failed");
        log::error!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn check(args: Args) -> anyhow::Result<()> {
    let config = match args.api {
        Some(ref api) => cartsim_fleet::Config::default().with_api(api),
        None => cartsim_fleet::Config::from_env()?,
    };
    let api = HttpApi::new(config.api())?;
    log::info!("testing login for {} at {}", args.cart, api.base());
    let request = LoginRequest {
        cart_id: args.cart,
        password: args.password,
    };
    let response = api.login(&request).await?;
    let token = Token::from(response.token);
    log::info!("login successful");
    log::info!("token: {}...", token.preview(PREVIEW));
    match response.cart {
        Some(cart) => log::info!(
            "cart: {} ({}){}",
            cart.cart_id,
            cart.name,
            cart.description
                .map(|d| format!(" - {}", d))
                .unwrap_or_default()
        ),
        None => log::info!("cart: <not returned>"),
    }
    Ok(())
}
