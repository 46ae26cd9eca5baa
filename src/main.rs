//! plainwm
//!
//! A small reparenting X11 window manager with a taskbar and a start menu,
//! written in Rust.

mod config;
mod desktop;
mod shared;
mod shell;
mod wm;
mod x11_async;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::desktop::Desktop;
use crate::shell::ProcessLauncher;
use crate::wm::display::{DisplayError, DisplayServer, X11Display};
use crate::x11_async::{is_connection_lost, X11EventStream};

/// Main application state
struct PlainApp {
    /// Display-server boundary over the shared X11 connection
    x11: X11Display,

    /// X11 async event stream (non-blocking polling)
    x11_stream: X11EventStream,

    /// Window manager, taskbar and start menu
    desktop: Desktop<ProcessLauncher>,
}

impl PlainApp {
    /// Connect, take over the root window and build the desktop
    fn new(config: &Config) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(None).context("Failed to connect to X server")?;

        // Child processes connect to the same X server as plainwm
        let display_value = std::env::var("DISPLAY").unwrap_or_else(|_| ":0".into());
        info!("Using DISPLAY={} for child processes", display_value);

        let conn = Arc::new(conn);
        let x11 = X11Display::new(conn.clone(), screen_num, &config.font)?;
        let root = x11.root();
        let (screen_width, screen_height) = x11.screen_size();
        info!(
            "Connected to X server, screen {}, root window {}, size {}x{}",
            screen_num, root, screen_width, screen_height
        );

        x11.become_wm()?;

        let x11_stream = X11EventStream::new(conn).context("Failed to create X11 event stream")?;
        let desktop = Desktop::new(&x11, config, ProcessLauncher::new(display_value))?;
        x11.flush().context("Failed to flush X11 requests")?;

        desktop.autostart(&config.autostart);

        Ok(Self {
            x11,
            x11_stream,
            desktop,
        })
    }

    /// Main event loop; returns when the X server goes away
    async fn run(mut self) -> Result<()> {
        info!("Starting main event loop");

        loop {
            match self.x11.flush() {
                Err(DisplayError::Connection(e)) if is_connection_lost(&e) => {
                    info!("X11 connection lost, exiting cleanly");
                    return Ok(());
                }
                Err(e) => warn!("Failed to flush X11 requests: {}", e),
                Ok(()) => {}
            }

            self.x11_stream.wait_readable().await;

            loop {
                match self.x11_stream.poll_next_event() {
                    Ok(Some(event)) => {
                        if let Some(event) = self.x11.translate(&event) {
                            debug!("Event: {:?}", event);
                            self.desktop.dispatch(&self.x11, &event);
                        }
                    }
                    Ok(None) => break,
                    Err(e) if is_connection_lost(&e) => {
                        info!("X11 connection lost, exiting cleanly");
                        return Ok(());
                    }
                    Err(e) => {
                        error!("Error polling for X11 events: {}", e);
                        break;
                    }
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "plainwm=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting plainwm");

    let config = Config::load().context("Failed to load configuration")?;

    // Setup signal handlers for graceful shutdown
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::mpsc::channel::<()>(1);

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        let tx = shutdown_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully");
                    let _ = tx.send(()).await;
                }
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully");
                    let _ = tx.send(()).await;
                }
            }
        });
    }

    let app = PlainApp::new(&config)?;

    tokio::select! {
        result = app.run() => {
            if let Err(e) = result {
                error!("Application error: {}", e);
                return Err(e);
            }
        }
        _ = shutdown_rx.recv() => {
            info!("Shutdown signal received, exiting");
        }
    }

    Ok(())
}
