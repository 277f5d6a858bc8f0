pub mod prompts;

use rig::{
    agent::Agent,
    client::{CompletionClient, ProviderClient},
    providers::{anthropic, anthropic::completion::CompletionModel},
};

use crate::{price::PriceFeed, tools::*};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Upper bound on tool round-trips the agent may take for one user message.
/// Pass to `PromptRequest::multi_turn` at every prompt site.
pub const MAX_TOOL_TURNS: usize = 6;

/// Build the tavern-keeper agent backed by Claude, with every arena tool registered.
///
/// Reads `ANTHROPIC_API_KEY` from the environment. Battles share `rng`, so a
/// seeded generator makes a whole session replayable.
pub fn build_tavern_keeper(
    rng: &SharedRng,
    feed: &PriceFeed,
    model: Option<&str>,
) -> Agent<CompletionModel> {
    let client = anthropic::Client::from_env();
    let model = model.unwrap_or(DEFAULT_MODEL);

    client
        .agent(model)
        .preamble(prompts::TAVERN_KEEPER_PROMPT)
        .tool(EstimateFightingPower::new())
        .tool(SimulateBattle::new(rng.clone()))
        .tool(GetNftPrice::new(feed.clone()))
        .build()
}
