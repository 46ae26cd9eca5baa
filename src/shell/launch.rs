//! Fire-and-forget process launching for the menu and autostart

use tokio::process::Command;
use tracing::{debug, info, warn};

/// Starts external commands without waiting for them
pub trait Launcher {
    fn launch(&self, command: &str);
}

/// Spawns commands as child processes of the window manager
pub struct ProcessLauncher {
    display: String,
}

impl ProcessLauncher {
    /// `display` is exported as `DISPLAY` to every child
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
        }
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &str) {
        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            warn!("Ignoring empty launch command");
            return;
        };

        let mut cmd = Command::new(program);
        cmd.args(parts);
        cmd.env("DISPLAY", &self.display);
        // Preserve XAUTHORITY if set
        if let Ok(xauth) = std::env::var("XAUTHORITY") {
            cmd.env("XAUTHORITY", xauth);
        }

        match cmd.spawn() {
            Ok(mut child) => {
                info!("Launched '{}' (pid {:?})", command, child.id());
                let command = command.to_string();
                // Reap the child in the background
                tokio::spawn(async move {
                    match child.wait().await {
                        Ok(status) => debug!("'{}' exited with {}", command, status),
                        Err(e) => warn!("Failed to wait for '{}': {}", command, e),
                    }
                });
            }
            Err(e) => warn!("Failed to launch '{}': {}", command, e),
        }
    }
}
