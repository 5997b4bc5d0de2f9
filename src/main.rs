use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;

mod api;
mod args;
mod error;
mod link;
mod render;
mod store;

use store::{Msg, Store};

#[tokio::main]
async fn main() -> Result<()> {
    let args = args::Args::parse();

    env_logger::builder()
        .format_timestamp(None)
        .filter_module("issues_to_md", args.log_level)
        .init();

    let input = if let Some(filename) = args.file {
        log::debug!("Reading links from file {filename} instead of stdin");
        std::fs::read_to_string(&filename)
            .with_context(|| format!("Failed reading links from file {filename}"))?
    } else {
        std::io::read_to_string(std::io::stdin()).context("Failed reading links from stdin")?
    };

    let http = reqwest::Client::new();
    let mut store = Store::new(args.api_base);
    store.update(Msg::SetToken(args.token));
    store.update(Msg::SetTemplate(args.template));
    store.update(Msg::SetInput(input));

    if let Some(batch) = store.update(Msg::Submit) {
        if batch.is_empty() {
            log::info!("nothing to do (no link in the input)");
        }
        let mut outcomes = api::dispatch(&http, &batch);
        while let Some(outcome) = outcomes.next().await {
            store.update(Msg::ResponseArrived(outcome));
        }
    }

    for entry in &store.state().errors {
        log::warn!("Skipping {}: {}", entry.original_link, entry.error);
    }
    let output = store.rendered();
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
