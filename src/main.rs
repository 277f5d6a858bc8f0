use std::sync::Arc;

use clap::Parser;
use nft_arena::{
    agent,
    battle::{estimate_fighting_power, render_log, simulate, validate_price},
    cli::{Cli, Command},
    price::PriceFeed,
    repl, server, shared_rng,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new()?;
    let rng = shared_rng(cli.seed);
    let feed = PriceFeed::new(&cli.price_api, &cli.chain)?;

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let keeper = agent::build_tavern_keeper(&rng, &feed, cli.model.as_deref());
            println!(
                "Welcome to the Rusty Flagon! Model: {}. Type /help for commands (Ctrl+D to leave).\n",
                cli.model.as_deref().unwrap_or(agent::DEFAULT_MODEL)
            );
            repl::run(&rt, &keeper, &rng)?;
        }
        Command::Serve { host, port } => {
            let keeper = agent::build_tavern_keeper(&rng, &feed, cli.model.as_deref());
            let state = Arc::new(server::ChatState::new(keeper));
            rt.block_on(server::serve(&format!("{host}:{port}"), state))?;
        }
        Command::Battle {
            nft1_price,
            nft2_price,
            json,
        } => {
            validate_price(nft1_price)?;
            validate_price(nft2_price)?;
            let report = rt.block_on(async {
                let mut rng = rng.lock().await;
                simulate(nft1_price, nft2_price, &mut *rng)
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_log(&report));
            }
        }
        Command::Estimate { nft_price } => {
            let power = estimate_fighting_power(nft_price)?;
            println!("{}", serde_json::to_string_pretty(&power)?);
        }
        Command::Price { nft_id } => {
            let price = rt.block_on(feed.fetch_price(&nft_id))?;
            println!("{}:{nft_id} = {price}", feed.chain());
        }
    }

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nft_arena=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}
