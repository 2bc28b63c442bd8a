use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticket_query::app::{self, RunOptions, RunOutcome};
use ticket_query::cli::Args;
use ticket_query::stations::StationDirectory;
use ticket_query::upstream::{ClientConfig, TicketClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::new();
    if args.verify_tls {
        config = config.with_verified_tls();
    }

    let client = match TicketClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to set up the HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let directory = StationDirectory::bundled();
    let options = RunOptions {
        filter: args.type_filter(),
        fetch_prices: !args.no_prices,
    };
    let today = chrono::Local::now().date_naive();

    let outcome = app::run(
        &client,
        &directory,
        &args.date,
        &args.from,
        &args.to,
        &options,
        today,
    )
    .await;

    match outcome {
        Ok(RunOutcome::Table { rendered, rows }) => {
            println!("{rendered}");
            if rows == 0 {
                println!("no trains found");
            } else {
                println!("{rows} trains");
            }
        }
        Ok(RunOutcome::Rejected(message)) => println!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
