use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use econtutor::{client, serve, Commands, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "econtutor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve {
            port,
            backend_url,
            model,
            knowledge_base,
            mock_backend,
            public,
        } => {
            let container = Arc::new(Container::new(ContainerConfig {
                backend_url,
                model,
                knowledge_base,
                mock_backend,
            }));
            serve(container, port, public).await
        }

        Commands::Chat { server } => client::run(&server).await,
    }
}
