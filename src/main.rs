use stylist_api::{AppState, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config).await?;

    let recommendation = match state.recommend_for_current().await {
        Ok(recommendation) => recommendation,
        Err(e) if e.is_no_suggestion() => {
            tracing::warn!(error = %e, "No suggestion available");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", serde_json::to_string_pretty(&recommendation.suggestion)?);

    if config.add_suggestion_to_cart {
        state.accept(&recommendation).await?;
        let cart = state.cart.get_all().await;
        println!("{}", serde_json::to_string_pretty(&cart)?);
    }

    Ok(())
}
