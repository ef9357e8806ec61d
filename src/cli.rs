use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Skycast weather lookup service.")]
pub struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(
        env = "SKYCAST_SERVER_ADDRESS",
        short,
        long,
        default_value = "127.0.0.1:3000"
    )]
    pub address: std::net::SocketAddr,
}
