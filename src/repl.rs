use std::{borrow::Cow, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reedline::{FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal};
use rig::{
    agent::Agent,
    completion::{Message, Prompt as RigPrompt},
    providers::anthropic::completion::CompletionModel,
};
use termimad::{crossterm::style::Color, MadSkin};

use crate::agent::MAX_TOOL_TURNS;
use crate::battle::{render_log, simulate, validate_price};
use crate::tools::SharedRng;

const GREEN_BOLD: &str = "\x1b[1;32m";
const RED_BOLD: &str = "\x1b[1;31m";
const YELLOW_BOLD: &str = "\x1b[1;33m";
const DIM: &str = "\x1b[2m";
const GRAY: &str = "\x1b[38;5;245m";
const RESET: &str = "\x1b[0m";

const ARENA_PROMPT: &str = "Tell me about your arena, then pit an NFT worth 120 USD \
    against one worth 95 USD and tell me how the fight went.";

// ── Custom prompt ──────────────────────────────────────────────

struct TavernPrompt;

impl Prompt for TavernPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("\x1b[1;33mPatron\x1b[0m")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(".. ")
    }

    fn render_prompt_history_search_indicator(&self, _search: PromptHistorySearch) -> Cow<'_, str> {
        Cow::Borrowed("(search)> ")
    }
}

// ── History ────────────────────────────────────────────────────

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".nft-arena")
        .join("history.txt")
}

fn build_editor() -> Reedline {
    match FileBackedHistory::with_file(1000, history_path()) {
        Ok(history) => Reedline::create().with_history(Box::new(history)),
        Err(e) => {
            eprintln!(
                "{DIM}Warning: could not open history file ({e}), using in-memory history{RESET}"
            );
            Reedline::create()
        }
    }
}

// ── Slash commands ─────────────────────────────────────────────

fn print_help() {
    println!(
        "\n{YELLOW_BOLD}The Rusty Flagon{RESET} — NFT arena tavern\n\n\
         {DIM}Commands:{RESET}\n  \
         /help           Show this help message\n  \
         /arena          Ask the keeper for a sample fight\n  \
         /battle <a> <b> Run a fight locally between NFTs priced <a> and <b> USD\n  \
         /clear          Clear conversation history\n  \
         /quit           Exit (or Ctrl+D)\n\n\
         Ask the keeper about NFT prices, fighting power, or arena battles.\n"
    );
}

/// Arguments after `/battle`, or `None` when `input` is not that command.
fn battle_command(input: &str) -> Option<&str> {
    match input.split_once(char::is_whitespace) {
        Some(("/battle", rest)) => Some(rest),
        None if input == "/battle" => Some(""),
        _ => None,
    }
}

/// Parse the two prices of `/battle <a> <b>`.
fn parse_battle_args(rest: &str) -> Result<(f64, f64), String> {
    let prices: Vec<&str> = rest.split_whitespace().collect();
    let [a, b] = prices[..] else {
        return Err("usage: /battle <nft1_price> <nft2_price>".to_string());
    };
    let parse = |raw: &str| -> Result<f64, String> {
        let price: f64 = raw.parse().map_err(|_| format!("not a price: {raw}"))?;
        validate_price(price).map_err(|e| e.to_string())?;
        Ok(price)
    };
    Ok((parse(a)?, parse(b)?))
}

// ── Markdown skin ─────────────────────────────────────────────

fn build_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::AnsiValue(180)); // tan
    skin.headers[0].set_fg(Color::DarkYellow);
    skin.headers[1].set_fg(Color::DarkYellow);
    skin.bullet = termimad::StyledChar::from_fg_char(Color::DarkYellow, '•');
    skin.inline_code.set_fg(Color::AnsiValue(222));
    skin
}

// ── Local battle ──────────────────────────────────────────────

fn handle_battle(rt: &tokio::runtime::Runtime, rng: &SharedRng, rest: &str) {
    match parse_battle_args(rest) {
        Ok((a, b)) => {
            let report = rt.block_on(async {
                let mut rng = rng.lock().await;
                simulate(a, b, &mut *rng)
            });
            println!();
            build_skin().print_text(&render_log(&report));
            println!();
        }
        Err(e) => eprintln!("{RED_BOLD}[Error]{RESET} {e}"),
    }
}

// ── Agent interaction ──────────────────────────────────────────

fn handle_prompt(
    rt: &tokio::runtime::Runtime,
    keeper: &Agent<CompletionModel>,
    history: &mut Vec<Message>,
    input: &str,
) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                &format!("{GRAY}⠋{RESET}"),
                &format!("{GRAY}⠙{RESET}"),
                &format!("{GRAY}⠹{RESET}"),
                &format!("{GRAY}⠸{RESET}"),
                &format!("{GRAY}⠼{RESET}"),
                &format!("{GRAY}⠴{RESET}"),
                &format!("{GRAY}⠦{RESET}"),
                &format!("{GRAY}⠧{RESET}"),
                &format!("{GRAY}⠇{RESET}"),
                &format!("{GRAY}⠏{RESET}"),
            ])
            .template("{spinner} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(format!("{GRAY}The keeper polishes a mug...{RESET}"));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let request = keeper
        .prompt(input)
        .multi_turn(MAX_TOOL_TURNS)
        .with_history(history);
    match rt.block_on(async { request.await }) {
        Ok(response) => {
            spinner.finish_and_clear();
            println!("\n{GREEN_BOLD}Keeper>{RESET}");
            build_skin().print_text(&response);
            println!();
        }
        Err(e) => {
            spinner.finish_and_clear();
            tracing::warn!(error = %e, "Agent prompt failed");
            eprintln!("\n{RED_BOLD}[Error]{RESET} {e}\n");
        }
    }
}

// ── Public entry point ─────────────────────────────────────────

pub fn run(
    rt: &tokio::runtime::Runtime,
    keeper: &Agent<CompletionModel>,
    rng: &SharedRng,
) -> anyhow::Result<()> {
    let mut editor = build_editor();
    let prompt = TavernPrompt;
    let mut chat_history: Vec<Message> = Vec::new();

    loop {
        match editor.read_line(&prompt) {
            Ok(Signal::Success(input)) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }

                match input {
                    "/quit" => break,
                    "/help" => print_help(),
                    "/clear" => {
                        chat_history.clear();
                        println!("{DIM}Conversation history cleared.{RESET}");
                    }
                    "/arena" => handle_prompt(rt, keeper, &mut chat_history, ARENA_PROMPT),
                    _ => match battle_command(input) {
                        Some(rest) => handle_battle(rt, rng, rest),
                        None => handle_prompt(rt, keeper, &mut chat_history, input),
                    },
                }
            }
            Ok(Signal::CtrlD | Signal::CtrlC) => break,
            Err(e) => {
                eprintln!("{RED_BOLD}[Error]{RESET} {e}");
                break;
            }
        }
    }

    Ok(())
}
