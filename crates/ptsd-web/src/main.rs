use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ptsd_model::estimator::RiskEstimator;
use ptsd_provider::provider::ModelProvider;
use ptsd_web::config::ServerConfig;
use ptsd_web::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        model = %config.model,
        scaler = %config.scaler,
        bind_addr = %config.bind_addr,
        "starting"
    );

    // Artifacts are fetched once here; failure ends the process.
    let provider = Arc::new(ModelProvider::new(config.scaler, config.model));
    let bundle = provider.bundle().await?;
    let estimator = RiskEstimator::new(bundle)?;

    let state = AppState {
        estimator: Arc::new(estimator),
        provider,
        templates: Arc::new(ptsd_web::render::templates()?),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, ptsd_web::router(state))
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("shutting down"),
                Err(e) => {
                    tracing::error!(error = %e, "cannot listen for ctrl-c, running until killed");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    Ok(())
}
