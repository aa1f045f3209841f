use completion_gateway::{CompletionGateway, GatewayConfig, logging, server};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::configure_logging()?;

    let config = GatewayConfig::from_env()?;
    let gateway = CompletionGateway::from_settings(&config.provider)?;

    server::serve(config.bind_addr, gateway).await?;
    Ok(())
}
