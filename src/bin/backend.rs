use demo_app::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let service = Service::Backend;
    let config = Config::from_env(service).inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    run(service, &config).await
}
