use chrono::{TimeZone, Utc};
use lighter_rust_sdk::{Config, LighterClient};
use tracing::{info, warn};

/// Auth tokens read "deadline:account_index:api_key_index:signature"
fn describe_token(label: &str, token: &str) {
    let parts: Vec<&str> = token.splitn(4, ':').collect();
    if parts.len() != 4 {
        warn!("{}: unexpected token format", label);
        return;
    }
    let deadline = parts[0]
        .parse::<i64>()
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single());
    info!(
        "✅ {}: deadline {:?}, account {}, api key {}, signature {}...",
        label,
        deadline,
        parts[1],
        parts[2],
        parts[3].chars().take(20).collect::<String>()
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut client = LighterClient::with_config(Config::from_env()?)?;
    client.initialize()?;

    match LighterClient::generate_api_key("test-seed-123") {
        Ok(keys) => info!(
            "✅ Generated API key, public key {}...",
            keys.public_key
                .unwrap_or_default()
                .chars()
                .take(20)
                .collect::<String>()
        ),
        Err(e) => warn!("API key generation failed: {}", e),
    }

    if let Err(e) = client.check_client() {
        warn!("Client check failed (expected for demo keys): {}", e);
    }

    let short = client.create_auth_token(Some(Utc::now().timestamp() + 600))?;
    describe_token("Short auth token", short.as_str());

    let long = client.create_auth_token(Some(Utc::now().timestamp() + 3600))?;
    describe_token("Long auth token", long.as_str());

    let default = client.create_auth_token(None)?;
    describe_token("Default auth token", default.as_str());

    match client.switch_api_key(3) {
        Ok(()) => info!("✅ API key switched to index 3"),
        Err(e) => warn!("API key switch failed (expected): {}", e),
    }

    Ok(())
}
