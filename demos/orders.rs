use lighter_rust_sdk::{
    CancelAllOrdersParams, CancelAllTimeInForce, Config, CreateOrderParams, LighterClient,
    ModifyOrderParams, OrderType, SignedTx, TimeInForce, DEFAULT_28_DAY_ORDER_EXPIRY,
};
use tracing::{info, warn};

fn sig_preview(tx: &SignedTx) -> String {
    match tx.sig() {
        Ok(Some(sig)) => sig.chars().take(20).collect::<String>() + "...",
        _ => tx.as_str().chars().take(20).collect::<String>() + "...",
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = LighterClient::with_config(Config::from_env()?)?;
    client.initialize()?;

    // Resting limit sell, good till time with the signer's 28 day expiry
    let limit = client.create_order(
        &CreateOrderParams::new(
            0,
            1001,
            1000,
            4500,
            true,
            OrderType::Limit,
            TimeInForce::GoodTillTime,
            client.next_nonce(),
        )
        .order_expiry(DEFAULT_28_DAY_ORDER_EXPIRY),
    )?;
    info!("✅ Limit order: {}", sig_preview(&limit));

    // Post-only buy
    let post_only = client.create_order(
        &CreateOrderParams::new(
            0,
            1002,
            1000,
            4000,
            false,
            OrderType::Limit,
            TimeInForce::PostOnly,
            client.next_nonce(),
        )
        .order_expiry(DEFAULT_28_DAY_ORDER_EXPIRY),
    )?;
    info!("✅ Post-only order: {}", sig_preview(&post_only));

    // Reduce-only stop loss
    match client.create_order(
        &CreateOrderParams::new(
            0,
            1003,
            1000,
            3500,
            true,
            OrderType::StopLoss,
            TimeInForce::ImmediateOrCancel,
            client.next_nonce(),
        )
        .reduce_only(true)
        .trigger_price(3600)
        .order_expiry(DEFAULT_28_DAY_ORDER_EXPIRY),
    ) {
        Ok(tx) => info!("✅ Stop loss: {}", sig_preview(&tx)),
        Err(e) => warn!("Stop loss rejected: {}", e),
    }

    let modify = client.modify_order(&ModifyOrderParams {
        market_index: 0,
        order_index: 1001,
        base_amount: 2000,
        price: 4600,
        trigger_price: 0,
        nonce: client.next_nonce(),
    })?;
    info!("✅ Modify: {}", sig_preview(&modify));

    let cancel_all = client.cancel_all_orders(&CancelAllOrdersParams {
        time_in_force: CancelAllTimeInForce::Immediate,
        time: 0,
        nonce: client.next_nonce(),
    })?;
    info!("✅ Cancel all: {}", sig_preview(&cancel_all));

    Ok(())
}
