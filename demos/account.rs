use lighter_rust_sdk::{
    signer::usdc_to_units, Config, LighterClient, MarginMode, TransferParams,
    UpdateLeverageParams, WithdrawParams,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = LighterClient::with_config(Config::from_env()?)?;
    client.initialize()?;

    // 1 USDC
    let withdrawal = client.withdraw(&WithdrawParams {
        amount: usdc_to_units(Decimal::ONE)?,
        nonce: client.next_nonce(),
    })?;
    info!("✅ Withdrawal: {:?}", withdrawal.sig()?);

    let to_account_index = std::env::var("LIGHTER_TO_ACCOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(67890);
    let transfer = client.transfer(&TransferParams {
        to_account_index,
        amount: usdc_to_units(Decimal::from(5))?,
        fee: 1000,
        memo: "12345678901234567890123456789012".to_string(),
        nonce: client.next_nonce(),
    })?;
    info!("✅ Transfer: {:?}", transfer.sig()?);

    let sub_account = client.create_sub_account(client.next_nonce())?;
    info!("✅ Sub account: {:?}", sub_account.sig()?);

    let leverage = client.update_leverage(&UpdateLeverageParams {
        market_index: 0,
        fraction: 500,
        margin_mode: MarginMode::Cross,
        nonce: client.next_nonce(),
    })?;
    info!("✅ Leverage: {:?}", leverage.sig()?);

    match LighterClient::generate_api_key("") {
        Ok(keys) => {
            let new_pubkey = keys.public_key.unwrap_or_default();
            match client.change_pub_key(&new_pubkey, client.next_nonce()) {
                Ok(tx) => info!("✅ Change pub key: {:?}", tx.sig()?),
                Err(e) => warn!("Change pub key failed: {}", e),
            }
        }
        Err(e) => warn!("Key generation failed: {}", e),
    }

    Ok(())
}
