use clap::Parser;
use tracker_web::config::init_shared_app_state;
use tracker_web::{adapter, cmd::*, config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // step1. parse cli
    let cli = TrackerCli::parse();
    match cli.command {
        Commands::Run { config } => {
            let config = config::parse_config(&config).await?;
            // log filter: RUST_LOG plus the directives from config
            let mut filter = tracing_subscriber::EnvFilter::from_default_env();
            if let Some(tracing) = &config.tracing {
                for x in tracing.filter.split(',').filter(|d| !d.trim().is_empty()) {
                    filter = filter.add_directive(x.trim().parse()?);
                }
            }
            tracing_subscriber::fmt().with_env_filter(filter).init();
            let state = init_shared_app_state(&config).await?;
            // step2. start web
            adapter::http::server::start_http_server(&config, state).await?;
        }
    }
    Ok(())
}
