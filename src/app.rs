//! Main application coordinator

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::Event;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{DtopError, TableData, ViewMode};
use crate::docker::{DockerClient, DockerSource, SnapshotSource};
use crate::snapshot::{format_containers, format_images};
use crate::ui::{TableStyle, UiApp};

/// How long the loop waits for input before checking the shutdown flag
const TICK_RATE: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    config: Config,
    mode: ViewMode,
    shutdown: Arc<AtomicBool>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, mode: ViewMode) -> Self {
        info!("Creating new App instance (mode={})", mode);
        Self {
            config,
            mode,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Connect to Docker
    pub async fn connect(config: &Config) -> crate::core::Result<DockerSource> {
        let client = if let Some(host) = &config.docker.host {
            DockerClient::with_host(host).await?
        } else {
            DockerClient::from_env().await?
        };

        Ok(DockerSource::new(client, config.docker.all))
    }

    /// Run the application: one snapshot, then the event loop until quit
    pub async fn run(&mut self) -> Result<()> {
        let startup = async {
            let source = Self::connect(&self.config).await?;
            info!("Connected to {}", source.connection_info());
            load_snapshot(&source, self.mode, Utc::now()).await
        };
        let data = until_interrupted(startup, interrupt_signal()).await?;
        info!("Loaded snapshot with {} rows", data.rows.len());

        let mut ui_app = UiApp::new(data, self.mode, TableStyle::default());

        info!("Starting main application loop");
        self.watch_interrupt();
        let mut terminal = setup_terminal()?;

        let result = self.run_event_loop(&mut terminal, &mut ui_app);

        // Cleanup terminal
        restore_terminal(&mut terminal)?;

        result
    }

    /// Raise the shutdown flag on SIGINT; checked by the loop every tick
    fn watch_interrupt(&self) {
        let flag = self.shutdown.clone();
        tokio::spawn(async move {
            interrupt_signal().await;
            flag.store(true, Ordering::SeqCst);
        });
    }

    /// Run the event loop
    fn run_event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        ui_app: &mut UiApp,
    ) -> Result<()> {
        // Render once before the first event
        terminal.draw(|f| ui_app.draw(f))?;

        loop {
            if self.shutdown.load(Ordering::SeqCst) {
                info!("Shutdown signal received, exiting event loop");
                break;
            }

            if !crossterm::event::poll(TICK_RATE)? {
                continue;
            }

            let event = crossterm::event::read()?;
            if matches!(event, Event::Mouse(_) | Event::FocusGained | Event::FocusLost) {
                continue;
            }
            ui_app.handle_event(event);

            if ui_app.should_quit {
                info!("Quit signal received, exiting event loop");
                break;
            }

            terminal.draw(|f| ui_app.draw(f))?;
        }

        Ok(())
    }
}

/// Run `startup` unless `interrupt` resolves first
pub async fn until_interrupted<T, F, I>(startup: F, interrupt: I) -> crate::core::Result<T>
where
    F: Future<Output = crate::core::Result<T>>,
    I: Future<Output = ()>,
{
    tokio::select! {
        result = startup => result,
        () = interrupt => {
            warn!("Interrupted before the snapshot was loaded");
            Err(DtopError::Interrupted)
        }
    }
}

/// Resolves on SIGINT, never when the handler cannot be installed
async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for interrupts: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Fetch the records for `mode` and format them against `now`
pub async fn load_snapshot<S>(
    source: &S,
    mode: ViewMode,
    now: DateTime<Utc>,
) -> crate::core::Result<TableData>
where
    S: SnapshotSource + ?Sized,
{
    debug!("Loading {} snapshot", mode);

    match mode {
        ViewMode::ListImages => {
            let images = source.list_images().await?;
            Ok(format_images(&images, now))
        }
        ViewMode::ListContainers | ViewMode::LogContainer => {
            let containers = source.list_containers().await?;
            Ok(format_containers(&containers, now))
        }
    }
}

/// Setup the terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    info!("Setting up terminal");

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    info!("Terminal setup complete");
    Ok(terminal)
}

/// Restore terminal to original state
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    info!("Restoring terminal");

    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Terminal restored");
    Ok(())
}
