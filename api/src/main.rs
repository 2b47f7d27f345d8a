use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    let config = sideline_api::config::Config::parse();

    sideline_api::tracing_config::configure("sideline", std::io::stdout)?;

    let server = sideline_api::run_server(config).await?;
    server.server.await?;

    Ok(())
}
