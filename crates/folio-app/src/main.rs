//! folio: a résumé you explore from the command line.
//!
//! Raw-mode terminal UI when attached to a TTY. Enter submits, Tab cycles
//! suggestions, Up/Down recall earlier lines, F1 shows tips, F2 the cheat
//! sheet, F4 returns to the hybrid view, Ctrl+C quits. With piped stdin each
//! line is submitted as-is.

mod app_state;
mod commands;
mod input;
mod onboarding;
mod render;
#[cfg(test)]
mod test_support;

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event};
use crossterm::terminal;

use app_state::AppState;
use folio_terminal::{CommandRegistry, Terminal};
use folio_types::resolve_config;
use folio_types::validate::{embedded_resume, load_resume};
use input::{InputEvent, InputResult};
use onboarding::OnboardingStore;
use render::Screen;

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config: Option<PathBuf>,
    content: Option<PathBuf>,
    reset_onboarding: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                cli.config = Some(PathBuf::from(path));
            },
            "--content" => {
                let path = args.next().context("--content needs a path")?;
                cli.content = Some(PathBuf::from(path));
            },
            "--reset-onboarding" => cli.reset_onboarding = true,
            other => bail!("unknown argument '{other}'"),
        }
    }
    Ok(cli)
}

fn main() -> Result<()> {
    let cli = parse_args(std::env::args().skip(1))?;
    let config = resolve_config(cli.config.as_deref()).context("loading configuration")?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    let content_path = cli.content.clone().or_else(|| config.content_path.clone());
    let resume = match &content_path {
        Some(path) => load_resume(path)
            .with_context(|| format!("loading résumé from {}", path.display()))?,
        None => embedded_resume().context("parsing bundled résumé")?,
    };
    log::info!("Starting folio ({})", resume.meta.tagline);

    let registry = CommandRegistry::builtin().context("building command registry")?;
    log::debug!("Registered {} commands", registry.len());
    let terminal = Terminal::new(registry, resume);

    let mut onboarding = OnboardingStore::load(&config.storage_path());
    if cli.reset_onboarding {
        onboarding.reset().context("resetting onboarding flag")?;
        log::info!("Onboarding flag reset");
    }

    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let color = config.color && io::stdout().is_terminal();
    let mut state = AppState::new(config, terminal, onboarding);

    if interactive {
        run_interactive(&mut state, color)
    } else {
        run_lines(&mut state, color)
    }
}

/// Restores cooked mode however the loop exits.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to restore terminal: {e}");
        }
    }
}

fn run_interactive(state: &mut AppState, color: bool) -> Result<()> {
    let _raw = RawModeGuard::enable()?;
    let mut screen = Screen::new(io::stdout(), color, true);
    screen.banner(state)?;
    screen.prompt(state)?;
    screen.flush()?;

    loop {
        let Event::Key(key) = event::read().context("reading terminal event")? else {
            continue;
        };
        let Some(ev) = input::from_key(key) else {
            continue;
        };
        if input::handle_input(ev, state) == InputResult::Quit {
            break;
        }
        let emits = state.drain();
        if !emits.is_empty() {
            screen.clear_line()?;
            for emit in &emits {
                screen.emit(emit, state)?;
            }
        }
        screen.prompt(state)?;
        screen.flush()?;
    }

    screen.clear_line()?;
    screen.flush()?;
    log::info!("Shutting down");
    Ok(())
}

fn run_lines(state: &mut AppState, color: bool) -> Result<()> {
    let mut screen = Screen::new(io::stdout().lock(), color, false);
    screen.banner(state)?;
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        state.editor.set_input(&line);
        input::handle_input(InputEvent::Submit, state);
        for emit in state.drain() {
            screen.emit(&emit, state)?;
        }
    }
    screen.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn no_args_means_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn flags_are_parsed() {
        let cli = parse_args(args(&[
            "--config",
            "a.toml",
            "--reset-onboarding",
            "--content",
            "r.json",
        ]))
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert_eq!(cli.content, Some(PathBuf::from("r.json")));
        assert!(cli.reset_onboarding);
    }

    #[test]
    fn missing_value_and_unknown_flags_fail() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }
}
