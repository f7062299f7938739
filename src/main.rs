mod app;
mod config;
mod download;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::download::runner::spawn_download;
use crate::download::{DownloadOptions, YtDlp};
use crate::logging::{DownloadHistory, Outcome};
use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init_tracing(&cfg.logging)?;
    tracing::info!(ytdlp = %cfg.download.ytdlp_path, "vidgrab starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("fatal: {:#}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let ytdlp = YtDlp::new(&cfg.download.ytdlp_path).with_leading_args(&cfg.download.ytdlp_args);
    let mut history = DownloadHistory::new(&cfg.logging);
    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    let mut state = AppState::new(cfg);
    let mut download_task: Option<JoinHandle<()>> = None;

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::StartDownload { url, path, platform } => {
                    tracing::info!(%platform, %url, path = %path.display(), "download requested");
                    let options = DownloadOptions::new(&state.config.download, path);
                    download_task = Some(spawn_download(
                        ytdlp.clone(),
                        url,
                        options,
                        event_tx.clone(),
                    ));
                }
                Action::RecordOutcome {
                    url,
                    path,
                    platform,
                    error,
                } => {
                    download_task = None;
                    let outcome = match error.as_deref() {
                        Some(reason) => Outcome::Failed(reason),
                        None => Outcome::Saved,
                    };
                    history.record(platform, &url, &path, outcome);
                }
                Action::SaveConfig => {
                    if let Err(e) = config::save_config(&state.config) {
                        tracing::warn!("could not save config: {:#}", e);
                        state.status_message = Some(format!("Could not save settings: {}", e));
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            // Dropping the task's future kills yt-dlp
            if let Some(task) = download_task.take() {
                task.abort();
            }
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
