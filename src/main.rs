// Interactive search client.
//
// Every line typed on stdin is submitted as a query; results are printed to
// stdout in rank order, replacing the previous results. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use seqsearch::utils::DEFAULT_ENDPOINT;
use seqsearch::{ClientConfig, TerminalView, pump_lines, start_http_client};
use tokio::io::BufReader;
use tracing::info;

/// Command-line arguments accepted by the `seqsearch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "seqsearch",
    version,
    about = "Submit search queries line by line and show ranked results in order"
)]
struct CliArgs {
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "SEQSEARCH_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        help = "Search endpoint that accepts a plain-text POST"
    )]
    endpoint: String,
    #[arg(
        short,
        long = "timeout-secs",
        value_name = "SECS",
        env = "SEQSEARCH_TIMEOUT_SECS",
        help = "Give up on a request after this many seconds (default: wait forever)"
    )]
    timeout_secs: Option<u64>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        action = ArgAction::Append,
        help = "Submit a query before reading stdin"
    )]
    queries: Vec<String>,
    #[arg(long, help = "Show failed searches on screen instead of only logging them")]
    show_errors: bool,
    #[arg(long, help = "Keep old results visible until new ones arrive")]
    keep_stale: bool,
    #[arg(
        long,
        help = "Disable ANSI screen clearing; earlier results stay visible above new ones"
    )]
    no_ansi: bool,
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn build_config(args: &CliArgs) -> Result<ClientConfig> {
    ClientConfig::builder()
        .request_timeout_secs(args.timeout_secs)
        .surface_errors(args.show_errors)
        .clear_on_dispatch(!args.keep_stale)
        .ansi(!args.no_ansi)
        .endpoint(args.endpoint.as_str())
        .build()
        .context("Invalid client configuration")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging();

    let config = build_config(&args)?;
    info!(endpoint = config.endpoint(), "Search client ready; one query per line");

    let view = TerminalView::stdout(config.ansi());
    let (queue, sender) = start_http_client(&config, view)?;

    for query in &args.queries {
        sender.enqueue(query.as_str())?;
    }

    let submitted = pump_lines(BufReader::new(tokio::io::stdin()), &sender).await?;
    info!(submitted, "Input closed; waiting for queued searches");

    sender.flush().await?;
    let stats = sender.stats();
    info!(
        completed = stats.total_completed,
        failed = stats.total_failed,
        "All searches settled"
    );

    queue.shutdown_and_join().await?;
    Ok(())
}
