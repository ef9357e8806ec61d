use clap::Parser;
use cli::Cli;

mod cli;
mod config;
mod openweather;
mod server;
mod weather;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    let config = config::load().expect(
        "Missing weather provider config. Required env var: SKYCAST_API_KEY (SKYCAST_API_URL is optional)",
    );

    server::run(args.address, config).await
}
