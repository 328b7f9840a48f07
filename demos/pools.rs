use lighter_rust_sdk::{
    Config, CreatePublicPoolParams, LighterClient, SharesParams, UpdatePublicPoolParams,
};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = LighterClient::with_config(Config::from_env()?)?;
    client.initialize()?;

    let create = client.create_public_pool(&CreatePublicPoolParams {
        operator_fee: 100,
        initial_total_shares: 1_000_000,
        min_operator_share_rate: 500,
        nonce: client.next_nonce(),
    })?;
    info!("✅ Create pool: {:?}", create.sig()?);

    match client.update_public_pool(&UpdatePublicPoolParams {
        public_pool_index: 0,
        operator_fee: 50,
        min_operator_share_rate: 100,
        operator_share_rate_max: 1000,
        nonce: client.next_nonce(),
    }) {
        Ok(tx) => info!("✅ Update pool: {:?}", tx.sig()?),
        Err(e) => warn!("Update pool failed (validation): {}", e),
    }

    let shares = SharesParams {
        public_pool_index: 1,
        share_amount: 100_000_000,
        nonce: client.next_nonce(),
    };
    let mint = client.mint_shares(&shares)?;
    info!("✅ Mint shares: {:?}", mint.sig()?);

    let burn = client.burn_shares(&SharesParams {
        nonce: client.next_nonce(),
        ..shares
    })?;
    info!("✅ Burn shares: {:?}", burn.sig()?);

    Ok(())
}
