use color_eyre::eyre::Result;
use gatehouse_adapters::{auth_validation::BearerTokenValidator, config::AuthServiceSetting};
use gatehouse_auth_service::{AuthService, build_workflow, configure_token_service, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = AuthServiceSetting::load()?;

    let token_service = configure_token_service(&config)?;
    let workflow = build_workflow(&config, token_service.clone()).await?;
    let auth_service = AuthService::new(workflow, BearerTokenValidator::new(token_service));

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting gatehouse...");

    auth_service
        .run_standalone(listener, Some(config.application.allowed_origins.clone()))
        .await?;

    Ok(())
}
