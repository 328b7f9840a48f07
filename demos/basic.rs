use lighter_rust_sdk::{
    CancelOrderParams, Config, CreateOrderParams, LighterClient, OrderType, TimeInForce,
};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // LIGHTER_PRIVATE_KEY and LIGHTER_ACCOUNT_INDEX are required
    let config = Config::from_env()?;
    info!(
        "Using {} (api key {}, account {})",
        config.url, config.api_key_index, config.account_index
    );

    let client = LighterClient::with_config(config)?;
    client.initialize()?;
    info!("✅ Client initialized");

    if let Err(e) = client.check_client() {
        warn!("Client check failed (expected for demo keys): {}", e);
    }

    let market_index = std::env::var("LIGHTER_MARKET_INDEX")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    // Market buy
    let order = client.create_order(&CreateOrderParams::new(
        market_index,
        chrono::Utc::now().timestamp_millis(),
        100,
        50000,
        false,
        OrderType::Market,
        TimeInForce::ImmediateOrCancel,
        client.next_nonce(),
    ))?;
    info!("✅ Order signature: {}", order);

    // Cancel
    let cancel = client.cancel_order(&CancelOrderParams {
        market_index,
        order_index: 281474976710656,
        nonce: client.next_nonce(),
    })?;
    info!("✅ Cancel signature: {:?}", cancel.sig()?);

    // Auth token valid for one hour
    let deadline = chrono::Utc::now().timestamp() + 3600;
    let token = client.create_auth_token(Some(deadline))?;
    info!("✅ Auth token: {}", token);

    Ok(())
}
