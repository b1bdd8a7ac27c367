use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zcalc::calculator::copy_to_clipboard;
use zcalc::config::Config;
use zcalc::keypad::Button;
use zcalc::session::{FeedError, Session};
use zcalc::ui::{DisplaySink, WriterDisplay};

/// Four-function keypad calculator.
///
/// Keys: digits, `+ - * x /`, `.`, `=` to evaluate, `c` to clear.
/// Without --keys, every stdin line is pressed as a key sequence.
#[derive(Debug, Parser)]
#[command(name = "zcalc", version, about)]
struct Args {
    /// Key sequence to press, e.g. "5+3=" (reads stdin when omitted)
    #[arg(short, long)]
    keys: Option<String>,

    /// Config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Copy the display to the clipboard after every evaluation
    #[arg(long)]
    copy: bool,

    /// Print the final calculator state as JSON
    #[arg(long)]
    json: bool,

    /// Prefix each display line with the pressed key
    #[arg(long)]
    echo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zcalc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default().context("Failed to load config")?,
    };
    let keymap = config.keymap().context("Invalid key aliases in config")?;
    let copy_results = args.copy || config.clipboard.copy_on_evaluate;

    let display = WriterDisplay::new(io::stdout().lock())
        .with_key_echo(args.echo || config.display.echo_keys);
    let mut session = Session::with_keymap(display, keymap);
    session.start().context("Failed to write display")?;

    match &args.keys {
        Some(sequence) => run_sequence(&mut session, sequence, copy_results)?,
        None => run_stdin(&mut session, copy_results)?,
    }

    if args.json {
        let snapshot = serde_json::to_string_pretty(&session.snapshot())
            .context("Failed to serialize calculator state")?;
        let mut out = session.into_display().into_inner();
        writeln!(out, "{}", snapshot).context("Failed to write JSON state")?;
    }

    Ok(())
}

/// Press a whole sequence; any unknown key aborts before anything is pressed.
fn run_sequence<S: DisplaySink>(
    session: &mut Session<S>,
    sequence: &str,
    copy_results: bool,
) -> Result<()> {
    let buttons = session
        .keymap()
        .parse_sequence(sequence)
        .with_context(|| format!("Invalid key sequence {:?}", sequence))?;

    for button in buttons {
        session.press(button).context("Failed to write display")?;
        after_press(session, button, copy_results);
    }

    Ok(())
}

/// Press every line read from stdin; unknown keys are reported and skipped.
fn run_stdin<S: DisplaySink>(session: &mut Session<S>, copy_results: bool) -> Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;

        for key in line.chars().filter(|c| !c.is_whitespace()) {
            match session.press_key(key) {
                Ok(button) => after_press(session, button, copy_results),
                Err(FeedError::Key(e)) => {
                    warn!("{}", e);
                    eprintln!("{}", e);
                }
                Err(e) => return Err(e).context("Failed to press key"),
            }
        }
    }

    info!("stdin closed");
    Ok(())
}

fn after_press<S: DisplaySink>(session: &Session<S>, button: Button, copy_results: bool) {
    if !copy_results || button != Button::Equals || !session.calculator().is_just_evaluated() {
        return;
    }

    let text = session.calculator().display_text();
    match copy_to_clipboard(&text) {
        Ok(()) => info!(result = %text, "copied result to clipboard"),
        Err(e) => warn!("{}", e),
    }
}
