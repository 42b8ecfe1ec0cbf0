use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

use feed_core::{FeedLoader, RemoteFeedLoader, UreqHttpClient};

#[derive(Parser)]
#[command(name = "feed-load")]
#[command(about = "Fetch a remote feed once and print its items", long_about = None)]
struct Cli {
    /// Feed endpoint, e.g. http://127.0.0.1:3000/feed
    #[arg(env = "FEED_URL")]
    url: Url,

    /// Give up on the request after this many seconds [default: 30]
    #[arg(long, env = "FEED_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = match cli.timeout_secs {
        Some(secs) => UreqHttpClient::with_timeout(Duration::from_secs(secs)),
        None => UreqHttpClient::new(),
    };
    let client = Arc::new(client);
    let loader = RemoteFeedLoader::new(cli.url, client);

    let (tx, rx) = mpsc::channel();
    loader.load(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    let items = rx
        .recv()
        .context("loader finished without a result")?
        .with_context(|| format!("loading {}", loader.url()))?;

    for item in &items {
        println!(
            "{}\t{}\t{}\t{}",
            item.id,
            item.image_url,
            item.description.as_deref().unwrap_or("-"),
            item.location.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!(count = items.len(), "feed loaded");
    Ok(())
}
